//! Route identifiers and display actions

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::RouterError;
use crate::effect::Effect;

/// A page section the router can show
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Home,
    About,
    Offer,
    Passion,
    Blog,
    Contact,
}

impl Route {
    /// Every supported route, in navigation order
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::About,
        Route::Offer,
        Route::Passion,
        Route::Blog,
        Route::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::About => "about",
            Route::Offer => "offer",
            Route::Passion => "passion",
            Route::Blog => "blog",
            Route::Contact => "contact",
        }
    }

    /// Address-bar form, e.g. `#about`
    pub fn fragment(&self) -> String {
        format!("#{}", self.as_str())
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Route {
    type Err = RouterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::ALL
            .into_iter()
            .find(|route| route.as_str() == s)
            .ok_or_else(|| RouterError::UnknownRoute(s.to_string()))
    }
}

/// What happens on screen when a route becomes current
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayAction {
    /// Hide every section, show the one with this element id, close the
    /// mobile menu and scroll back to the top
    ShowSection { section_id: String },
}

impl DisplayAction {
    pub fn show_section(section_id: impl Into<String>) -> Self {
        DisplayAction::ShowSection {
            section_id: section_id.into(),
        }
    }

    pub(crate) fn effects(&self, smooth_scroll: bool) -> Vec<Effect> {
        match self {
            DisplayAction::ShowSection { section_id } => vec![
                Effect::HideAllSections,
                Effect::ShowSection {
                    id: section_id.clone(),
                },
                Effect::SetMenuOpen { open: false },
                Effect::ScrollToTop {
                    smooth: smooth_scroll,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parse() {
        for route in Route::ALL {
            assert_eq!(route.as_str().parse::<Route>().unwrap(), route);
        }
        assert!(matches!(
            "Home".parse::<Route>(),
            Err(RouterError::UnknownRoute(key)) if key == "Home"
        ));
        assert!("".parse::<Route>().is_err());
    }

    #[test]
    fn test_route_fragment() {
        assert_eq!(Route::Passion.fragment(), "#passion");
        assert_eq!(Route::Blog.to_string(), "blog");
    }

    #[test]
    fn test_show_section_effects() {
        let effects = DisplayAction::show_section("offer").effects(true);
        assert_eq!(
            effects,
            vec![
                Effect::HideAllSections,
                Effect::ShowSection { id: "offer".into() },
                Effect::SetMenuOpen { open: false },
                Effect::ScrollToTop { smooth: true },
            ]
        );
    }
}
