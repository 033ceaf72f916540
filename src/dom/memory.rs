//! In-Memory Document
//!
//! Models just enough of the page to observe effects: sections, nav links,
//! the mobile menu, a history stack, the navbar, reveal items, the loader
//! and the contact form. Serializes to a JSON snapshot for the CLI.

use serde::Serialize;

use super::Document;
use crate::contact::ContactSubmission;
use crate::effect::{NavbarStyle, RevealState, RevealTarget, StyleTarget};
use crate::effects::{Intersection, RevealOptions};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SectionState {
    pub id: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NavLinkState {
    /// Value of the link's route attribute
    pub route: String,
    pub active: bool,
}

/// A reveal-on-scroll element positioned in page coordinates
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RevealItem {
    /// Offset of the top edge from the top of the page
    pub top: f64,
    pub height: f64,
    pub state: Option<RevealState>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoaderState {
    pub label: String,
    pub state: Option<RevealState>,
}

/// Page stand-in for tests and simulation
#[derive(Debug, Clone, Serialize)]
pub struct MemoryDocument {
    sections: Vec<SectionState>,
    nav_links: Vec<NavLinkState>,
    /// `None` when the page has no mobile menu
    menu_open: Option<bool>,
    history: Vec<String>,
    history_index: usize,
    scroll_y: f64,
    viewport_height: f64,
    navbar: Option<NavbarStyle>,
    reveal_items: Vec<RevealItem>,
    main_content: Option<RevealState>,
    loader: Option<LoaderState>,
    alerts: Vec<String>,
    form: ContactSubmission,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self {
            sections: Vec::new(),
            nav_links: Vec::new(),
            menu_open: Some(false),
            history: vec![String::new()],
            history_index: 0,
            scroll_y: 0.0,
            viewport_height: 800.0,
            navbar: None,
            reveal_items: Vec::new(),
            main_content: None,
            loader: None,
            alerts: Vec::new(),
            form: ContactSubmission::default(),
        }
    }
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// A page with one section and one nav link per id
    pub fn with_sections(ids: &[&str]) -> Self {
        let mut doc = Self::default();
        for id in ids {
            doc.sections.push(SectionState {
                id: id.to_string(),
                active: false,
            });
            doc.nav_links.push(NavLinkState {
                route: id.to_string(),
                active: false,
            });
        }
        doc
    }

    /// Start at a given address fragment (without `#`)
    pub fn at_fragment(mut self, fragment: &str) -> Self {
        self.history = vec![fragment.to_string()];
        self.history_index = 0;
        self
    }

    /// Add reveal items as `(top, height)` pairs in page coordinates
    pub fn with_reveal_items(mut self, items: &[(f64, f64)]) -> Self {
        self.reveal_items.extend(items.iter().map(|&(top, height)| RevealItem {
            top,
            height,
            state: None,
        }));
        self
    }

    pub fn with_viewport_height(mut self, height: f64) -> Self {
        self.viewport_height = height;
        self
    }

    /// Drop the mobile menu elements
    pub fn without_menu(mut self) -> Self {
        self.menu_open = None;
        self
    }

    pub fn fragment(&self) -> &str {
        &self.history[self.history_index]
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Browser back; returns the fragment to report in a popstate
    pub fn back(&mut self) -> Option<String> {
        if self.history_index == 0 {
            return None;
        }
        self.history_index -= 1;
        Some(self.fragment().to_string())
    }

    /// Browser forward; returns the fragment to report in a popstate
    pub fn forward(&mut self) -> Option<String> {
        if self.history_index + 1 >= self.history.len() {
            return None;
        }
        self.history_index += 1;
        Some(self.fragment().to_string())
    }

    pub fn visible_sections(&self) -> Vec<&str> {
        self.sections
            .iter()
            .filter(|s| s.active)
            .map(|s| s.id.as_str())
            .collect()
    }

    pub fn active_nav_links(&self) -> Vec<&str> {
        self.nav_links
            .iter()
            .filter(|l| l.active)
            .map(|l| l.route.as_str())
            .collect()
    }

    pub fn menu_open(&self) -> Option<bool> {
        self.menu_open
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Move the viewport without firing anything
    pub fn scroll_to(&mut self, y: f64) {
        self.scroll_y = y.max(0.0);
    }

    pub fn navbar_style(&self) -> Option<&NavbarStyle> {
        self.navbar.as_ref()
    }

    pub fn reveal_items(&self) -> &[RevealItem] {
        &self.reveal_items
    }

    /// What an intersection observer would report at the current scroll offset
    pub fn intersections(&self, options: &RevealOptions) -> Vec<Intersection> {
        self.reveal_items
            .iter()
            .enumerate()
            .map(|(index, item)| Intersection {
                target: RevealTarget(index),
                is_intersecting: options.is_intersecting(
                    item.top - self.scroll_y,
                    item.height,
                    self.viewport_height,
                ),
            })
            .collect()
    }

    pub fn main_content(&self) -> Option<&RevealState> {
        self.main_content.as_ref()
    }

    pub fn loader(&self) -> Option<&LoaderState> {
        self.loader.as_ref()
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn form(&self) -> &ContactSubmission {
        &self.form
    }

    /// Type into the contact form
    pub fn fill_form(&mut self, submission: ContactSubmission) {
        self.form = submission;
    }
}

impl Document for MemoryDocument {
    fn location_fragment(&self) -> String {
        self.fragment().to_string()
    }

    fn reveal_target_count(&self) -> usize {
        self.reveal_items.len()
    }

    fn push_history(&mut self, fragment: &str) {
        self.history.truncate(self.history_index + 1);
        self.history.push(fragment.to_string());
        self.history_index = self.history.len() - 1;
    }

    fn hide_all_sections(&mut self) {
        for section in &mut self.sections {
            section.active = false;
        }
    }

    fn show_section(&mut self, id: &str) {
        if let Some(section) = self.sections.iter_mut().find(|s| s.id == id) {
            section.active = true;
        }
    }

    fn set_menu_open(&mut self, open: bool) {
        if let Some(state) = self.menu_open.as_mut() {
            *state = open;
        }
    }

    fn toggle_menu(&mut self) {
        if let Some(state) = self.menu_open.as_mut() {
            *state = !*state;
        }
    }

    fn scroll_to_top(&mut self, _smooth: bool) {
        self.scroll_y = 0.0;
    }

    fn highlight_nav_link(&mut self, route: &str) {
        for link in &mut self.nav_links {
            link.active = link.route == route;
        }
    }

    fn set_navbar_style(&mut self, style: &NavbarStyle) {
        self.navbar = Some(style.clone());
    }

    fn set_presentation(&mut self, target: StyleTarget, state: &RevealState) {
        // Transition `None` keeps whatever was installed before
        let merge = |slot: &mut Option<RevealState>| {
            let transition = state
                .transition
                .clone()
                .or_else(|| slot.as_ref().and_then(|s| s.transition.clone()));
            *slot = Some(RevealState {
                transition,
                ..state.clone()
            });
        };

        match target {
            StyleTarget::RevealItem(RevealTarget(index)) => {
                if let Some(item) = self.reveal_items.get_mut(index) {
                    merge(&mut item.state);
                }
            }
            StyleTarget::MainContent => merge(&mut self.main_content),
            StyleTarget::Loader => {
                if let Some(loader) = self.loader.as_mut() {
                    merge(&mut loader.state);
                }
            }
        }
    }

    fn alert(&mut self, text: &str) {
        self.alerts.push(text.to_string());
    }

    fn reset_form(&mut self) {
        self.form = ContactSubmission::default();
    }

    fn show_loader(&mut self, label: &str) {
        self.loader = Some(LoaderState {
            label: label.to_string(),
            state: None,
        });
    }

    fn remove_loader(&mut self) {
        self.loader = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::Effect;

    #[test]
    fn test_history_stack() {
        let mut doc = MemoryDocument::new();
        doc.push_history("about");
        doc.push_history("blog");
        assert_eq!(doc.history_len(), 3);

        assert_eq!(doc.back().as_deref(), Some("about"));
        assert_eq!(doc.back().as_deref(), Some(""));
        assert_eq!(doc.back(), None);
        assert_eq!(doc.forward().as_deref(), Some("about"));

        // Pushing after going back drops the forward entries
        doc.push_history("offer");
        assert_eq!(doc.history_len(), 3);
        assert_eq!(doc.forward(), None);
        assert_eq!(doc.fragment(), "offer");
    }

    #[test]
    fn test_missing_elements_ignored() {
        let mut doc = MemoryDocument::with_sections(&["home"]).without_menu();
        doc.apply_all(&[
            Effect::ShowSection { id: "ghost".into() },
            Effect::ToggleMenu,
            Effect::SetPresentation {
                target: StyleTarget::RevealItem(RevealTarget(4)),
                state: RevealState::shown(),
            },
            Effect::SetPresentation {
                target: StyleTarget::Loader,
                state: RevealState::faded(),
            },
        ]);

        assert!(doc.visible_sections().is_empty());
        assert_eq!(doc.menu_open(), None);
        assert!(doc.loader().is_none());
    }

    #[test]
    fn test_presentation_keeps_transition() {
        let mut doc = MemoryDocument::new().with_reveal_items(&[(0.0, 10.0)]);
        let target = StyleTarget::RevealItem(RevealTarget(0));

        doc.set_presentation(target, &RevealState::hidden(30.0, "opacity 1s"));
        doc.set_presentation(target, &RevealState::shown());

        let state = doc.reveal_items()[0].state.as_ref().unwrap();
        assert!(state.is_shown());
        assert_eq!(state.transition.as_deref(), Some("opacity 1s"));
    }

    #[test]
    fn test_intersections_follow_scroll() {
        let options = RevealOptions {
            threshold: 0.1,
            bottom_margin_px: 50.0,
        };
        let mut doc = MemoryDocument::new()
            .with_viewport_height(800.0)
            .with_reveal_items(&[(100.0, 200.0), (1500.0, 200.0)]);

        let seen: Vec<bool> = doc.intersections(&options).iter().map(|i| i.is_intersecting).collect();
        assert_eq!(seen, vec![true, false]);

        doc.scroll_to(1000.0);
        let seen: Vec<bool> = doc.intersections(&options).iter().map(|i| i.is_intersecting).collect();
        assert_eq!(seen, vec![false, true]);
    }
}
