//! Side Effects
//!
//! Components never touch the page directly. They return [`Effect`]s which a
//! [`Document`](crate::dom::Document) applies in order.

use serde::{Deserialize, Serialize};

/// Index of an element tracked by the reveal-on-scroll effect
///
/// Assigned in tracking order; the document keeps its own element list in
/// the same order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RevealTarget(pub usize);

/// Element whose inline presentation an effect changes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
pub enum StyleTarget {
    /// A reveal-on-scroll element
    RevealItem(RevealTarget),
    /// The main content container
    MainContent,
    /// The full-screen loading indicator
    Loader,
}

/// Opacity and vertical offset of an element
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevealState {
    pub opacity: f64,
    /// Downward offset in pixels (`translateY`)
    pub offset_px: f64,
    /// CSS transition to install, `None` keeps the current one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<String>,
}

impl RevealState {
    /// Transparent and pushed down, ready to animate in
    pub fn hidden(offset_px: f64, transition: &str) -> Self {
        Self {
            opacity: 0.0,
            offset_px,
            transition: Some(transition.to_string()),
        }
    }

    /// Fully opaque at its natural position
    pub fn shown() -> Self {
        Self {
            opacity: 1.0,
            offset_px: 0.0,
            transition: None,
        }
    }

    /// Transparent in place
    pub fn faded() -> Self {
        Self {
            opacity: 0.0,
            offset_px: 0.0,
            transition: None,
        }
    }

    pub fn is_shown(&self) -> bool {
        self.opacity >= 1.0 && self.offset_px == 0.0
    }

    /// CSS `transform` value
    pub fn transform(&self) -> String {
        if self.offset_px == 0.0 {
            "translateY(0)".to_string()
        } else {
            format!("translateY({}px)", self.offset_px)
        }
    }
}

/// Navbar inline styles
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavbarStyle {
    pub background: String,
    pub backdrop_filter: String,
}

/// A single visible change to the page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Effect {
    /// Push a history entry with the given fragment (without `#`)
    PushHistory { fragment: String },
    /// Remove the active marker from every section
    HideAllSections,
    /// Mark one section as active; missing sections are skipped
    ShowSection { id: String },
    /// Open or close the mobile menu and its toggle
    SetMenuOpen { open: bool },
    /// Flip the mobile menu and its toggle
    ToggleMenu,
    ScrollToTop { smooth: bool },
    /// Mark the nav link for `route` active and clear the others
    HighlightNavLink { route: String },
    SetNavbarStyle { style: NavbarStyle },
    SetPresentation {
        target: StyleTarget,
        state: RevealState,
    },
    /// Blocking user notice
    Alert { text: String },
    /// Clear every contact form field
    ResetForm,
    ShowLoader { label: String },
    RemoveLoader,
}
