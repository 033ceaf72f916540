//! Section Router
//!
//! Maps route keys to display actions and keeps the current route, the
//! address fragment and the highlighted nav link in step.
//!
//! Two paths apply a route:
//!
//! ```text
//! user click    → navigate()              → PushHistory + display + highlight
//! back/forward  → resolve_from_location() →               display + highlight
//! ```
//!
//! Both go through `apply_route`, which takes an explicit [`HistoryMode`] so a
//! popstate never pushes a second entry for the same step.

use std::collections::HashMap;

use super::error::RouterError;
use super::route::{DisplayAction, Route};
use crate::config::RouterConfig;
use crate::effect::Effect;

/// Whether applying a route records a new history entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    /// User-initiated navigation
    Push,
    /// The browser already moved; only sync the page
    Keep,
}

/// Input to the router
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterEvent {
    /// A nav link or shortcut button was activated
    LinkClicked { route: String },
    /// Browser back/forward changed the address fragment
    HistoryChanged { fragment: String },
    /// First resolution after the page loaded
    Loaded { fragment: String },
}

/// Hash-based section router
#[derive(Debug)]
pub struct Router {
    routes: HashMap<Route, DisplayAction>,
    current: Route,
    default_route: Route,
    smooth_scroll: bool,
}

impl Router {
    /// Create a router with no registered routes
    pub fn new(config: &RouterConfig) -> Self {
        Self {
            routes: HashMap::new(),
            current: config.default_route,
            default_route: config.default_route,
            smooth_scroll: config.smooth_scroll,
        }
    }

    /// Create a router with every supported route showing the section of
    /// the same name
    pub fn with_default_routes(config: &RouterConfig) -> Self {
        let mut router = Self::new(config);
        for route in Route::ALL {
            router
                .routes
                .insert(route, DisplayAction::show_section(route.as_str()));
        }
        router
    }

    /// Associate a route key with a display action
    ///
    /// Re-registering replaces the previous action, which is returned.
    pub fn register_route(
        &mut self,
        key: &str,
        action: DisplayAction,
    ) -> Result<Option<DisplayAction>, RouterError> {
        let route: Route = key.parse()?;
        Ok(self.routes.insert(route, action))
    }

    pub fn is_registered(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    pub fn current(&self) -> Route {
        self.current
    }

    /// Navigate to `key`, recording a history entry
    ///
    /// Unknown and unregistered keys are ignored and produce no effects.
    pub fn navigate(&mut self, key: &str) -> Vec<Effect> {
        self.apply_route(key, HistoryMode::Push)
    }

    /// Apply the route named by an address fragment without pushing history
    ///
    /// Accepts the fragment with or without its leading `#`. An empty
    /// fragment resolves to the default route.
    pub fn resolve_from_location(&mut self, fragment: &str) -> Vec<Effect> {
        let key = fragment.strip_prefix('#').unwrap_or(fragment);
        let key = if key.is_empty() {
            self.default_route.as_str()
        } else {
            key
        };
        self.apply_route(key, HistoryMode::Keep)
    }

    pub fn handle(&mut self, event: RouterEvent) -> Vec<Effect> {
        match event {
            RouterEvent::LinkClicked { route } => self.navigate(&route),
            RouterEvent::HistoryChanged { fragment } | RouterEvent::Loaded { fragment } => {
                self.resolve_from_location(&fragment)
            }
        }
    }

    fn lookup(&self, key: &str) -> Option<(Route, &DisplayAction)> {
        let route: Route = key.parse().ok()?;
        self.routes.get(&route).map(|action| (route, action))
    }

    fn apply_route(&mut self, key: &str, mode: HistoryMode) -> Vec<Effect> {
        let Some((route, action)) = self.lookup(key) else {
            tracing::debug!(route = %key, "Ignoring unregistered route");
            return Vec::new();
        };

        let mut effects = Vec::with_capacity(6);
        if mode == HistoryMode::Push {
            effects.push(Effect::PushHistory {
                fragment: route.as_str().to_string(),
            });
        }
        effects.extend(action.effects(self.smooth_scroll));
        effects.push(Effect::HighlightNavLink {
            route: route.as_str().to_string(),
        });

        tracing::debug!(from = %self.current, to = %route, ?mode, "Route changed");
        self.current = route;

        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> Router {
        Router::with_default_routes(&RouterConfig::default())
    }

    #[test]
    fn test_navigate_pushes_history_first() {
        let mut router = router();
        let effects = router.navigate("about");

        assert_eq!(
            effects.first(),
            Some(&Effect::PushHistory {
                fragment: "about".into()
            })
        );
        assert_eq!(
            effects.last(),
            Some(&Effect::HighlightNavLink {
                route: "about".into()
            })
        );
        assert!(effects.contains(&Effect::ShowSection { id: "about".into() }));
        assert_eq!(router.current(), Route::About);
    }

    #[test]
    fn test_navigate_unregistered_is_noop() {
        let mut router = Router::new(&RouterConfig::default());
        router
            .register_route("home", DisplayAction::show_section("home"))
            .unwrap();

        assert!(router.navigate("blog").is_empty());
        assert!(router.navigate("not-a-route").is_empty());
        assert_eq!(router.current(), Route::Home);
    }

    #[test]
    fn test_resolve_does_not_push() {
        let mut router = router();
        router.navigate("offer");

        let effects = router.resolve_from_location("#blog");
        assert!(!effects
            .iter()
            .any(|e| matches!(e, Effect::PushHistory { .. })));
        assert!(effects.contains(&Effect::ShowSection { id: "blog".into() }));
        assert_eq!(router.current(), Route::Blog);
    }

    #[test]
    fn test_resolve_empty_fragment_uses_default() {
        let config = RouterConfig {
            default_route: Route::Passion,
            ..RouterConfig::default()
        };
        let mut router = Router::with_default_routes(&config);

        for fragment in ["", "#"] {
            let effects = router.resolve_from_location(fragment);
            assert!(effects.contains(&Effect::ShowSection {
                id: "passion".into()
            }));
        }
    }

    #[test]
    fn test_resolve_unknown_fragment_keeps_state() {
        let mut router = router();
        router.navigate("contact");

        assert!(router.resolve_from_location("#pricing").is_empty());
        assert_eq!(router.current(), Route::Contact);
    }

    #[test]
    fn test_register_overwrites() {
        let mut router = router();
        let previous = router
            .register_route("blog", DisplayAction::show_section("news"))
            .unwrap();
        assert_eq!(previous, Some(DisplayAction::show_section("blog")));

        let effects = router.navigate("blog");
        assert!(effects.contains(&Effect::ShowSection { id: "news".into() }));
    }

    #[test]
    fn test_register_unknown_key_rejected() {
        let mut router = router();
        let err = router
            .register_route("shop", DisplayAction::show_section("shop"))
            .unwrap_err();
        assert_eq!(err, RouterError::UnknownRoute("shop".into()));
        assert!(!router.is_registered("shop"));
    }

    #[test]
    fn test_handle_dispatch() {
        let mut router = router();
        let pushed = router.handle(RouterEvent::LinkClicked {
            route: "about".into(),
        });
        assert!(matches!(pushed[0], Effect::PushHistory { .. }));

        let kept = router.handle(RouterEvent::HistoryChanged {
            fragment: "#home".into(),
        });
        assert!(matches!(kept[0], Effect::HideAllSections));
        assert_eq!(router.current(), Route::Home);
    }
}
