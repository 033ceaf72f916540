//! Site
//!
//! Owns one instance of every component and routes page events to them.
//! Nothing here is global: the host constructs a `Site` and keeps it.
//!
//! Events arriving before the `StartComponents` boot step are dropped, the
//! same as a page whose listeners are not attached yet.

use serde::{Deserialize, Serialize};

use crate::bootstrap::{BootStep, BootstrapSequencer, ScheduledStep};
use crate::config::SiteConfig;
use crate::contact::{ContactForm, ContactSubmission};
use crate::dom::Document;
use crate::effect::Effect;
use crate::effects::{Intersection, IntersectionReveal, RevealOptions, ScrollEffects};
use crate::router::{MenuEvent, MobileMenu, Router, RouterEvent};

/// Everything the page can report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SiteEvent {
    /// A nav link with the given route attribute was clicked
    NavLinkClicked { route: String },
    /// The call-to-action button was clicked
    CtaClicked,
    /// The "learn more" button was clicked
    SecondaryClicked,
    /// Browser back/forward moved to `fragment`
    PopState { fragment: String },
    MenuToggled,
    DocumentClicked { inside_menu: bool },
    Resized { width: f64 },
    Scrolled { y: f64 },
    /// Intersection observer report
    Intersections { entries: Vec<Intersection> },
    FormSubmitted { submission: ContactSubmission },
}

/// Router, menu, contact form, scroll and reveal effects behind one dispatcher
#[derive(Debug)]
pub struct Site {
    config: SiteConfig,
    sequencer: BootstrapSequencer,
    router: Router,
    form: ContactForm,
    scroll: ScrollEffects,
    reveal: IntersectionReveal,
    menu: MobileMenu,
    started: bool,
}

impl Site {
    /// Construct every component: router, form, scroll effects, reveal
    pub fn new(config: SiteConfig) -> Self {
        Self {
            sequencer: BootstrapSequencer::new(config.bootstrap.clone()),
            router: Router::with_default_routes(&config.router),
            form: ContactForm::new(config.copy.clone()),
            scroll: ScrollEffects::new(config.scroll.clone()),
            reveal: IntersectionReveal::new(&config.reveal),
            menu: MobileMenu::new(config.dom.mobile_breakpoint),
            started: false,
            config,
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn router_mut(&mut self) -> &mut Router {
        &mut self.router
    }

    pub fn reveal(&self) -> &IntersectionReveal {
        &self.reveal
    }

    pub fn reveal_options(&self) -> RevealOptions {
        self.reveal.options()
    }

    pub fn sequencer(&self) -> &BootstrapSequencer {
        &self.sequencer
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Startup timeline for the host to schedule
    pub fn boot_schedule(&self) -> Vec<ScheduledStep> {
        self.sequencer.schedule()
    }

    /// Run one boot step against the document
    pub fn boot_step<D: Document + ?Sized>(&mut self, step: BootStep, doc: &mut D) -> Vec<Effect> {
        let mut effects = self.sequencer.step(step);
        doc.apply_all(&effects);
        if step == BootStep::StartComponents {
            effects.extend(self.start(doc));
        }
        effects
    }

    /// Run the whole boot timeline at once, ignoring delays
    pub fn boot<D: Document + ?Sized>(&mut self, doc: &mut D) -> Vec<Effect> {
        let mut effects = Vec::new();
        for scheduled in self.boot_schedule() {
            effects.extend(self.boot_step(scheduled.step, &mut *doc));
        }
        effects
    }

    /// Hide reveal targets and apply the route from the address bar
    ///
    /// Runs once; later calls return no effects.
    pub fn start<D: Document + ?Sized>(&mut self, doc: &mut D) -> Vec<Effect> {
        if self.started {
            return Vec::new();
        }
        self.started = true;

        let mut effects = self.reveal.track_all(doc.reveal_target_count());
        effects.extend(self.router.handle(RouterEvent::Loaded {
            fragment: doc.location_fragment(),
        }));

        tracing::debug!(
            route = %self.router.current(),
            reveal_targets = self.reveal.tracked(),
            "Site started"
        );

        doc.apply_all(&effects);
        effects
    }

    /// Compute the effects of an event without applying them
    pub fn handle(&mut self, event: SiteEvent) -> Vec<Effect> {
        if !self.started {
            tracing::debug!(?event, "Event before start ignored");
            return Vec::new();
        }

        match event {
            SiteEvent::NavLinkClicked { route } => {
                self.router.handle(RouterEvent::LinkClicked { route })
            }
            SiteEvent::CtaClicked => {
                let route = self.config.router.cta_route;
                self.router.navigate(route.as_str())
            }
            SiteEvent::SecondaryClicked => {
                let route = self.config.router.secondary_route;
                self.router.navigate(route.as_str())
            }
            SiteEvent::PopState { fragment } => {
                self.router.handle(RouterEvent::HistoryChanged { fragment })
            }
            SiteEvent::MenuToggled => self.menu.handle(MenuEvent::Toggle),
            SiteEvent::DocumentClicked { inside_menu } => {
                self.menu.handle(MenuEvent::DocumentClick { inside_menu })
            }
            SiteEvent::Resized { width } => self.menu.handle(MenuEvent::Resize { width }),
            SiteEvent::Scrolled { y } => self.scroll.handle(y),
            SiteEvent::Intersections { entries } => self.reveal.handle(&entries),
            SiteEvent::FormSubmitted { submission } => self.form.handle_submit(&submission),
        }
    }

    /// Handle an event and apply its effects to the document
    pub fn dispatch<D: Document + ?Sized>(&mut self, event: SiteEvent, doc: &mut D) -> Vec<Effect> {
        let effects = self.handle(event);
        doc.apply_all(&effects);
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::BootPhase;
    use crate::dom::MemoryDocument;
    use crate::effect::RevealTarget;
    use crate::router::Route;

    const SECTIONS: [&str; 6] = ["home", "about", "offer", "passion", "blog", "contact"];

    fn started() -> (Site, MemoryDocument) {
        let mut doc = MemoryDocument::with_sections(&SECTIONS);
        let mut site = Site::new(SiteConfig::default());
        site.start(&mut doc);
        (site, doc)
    }

    fn click(site: &mut Site, doc: &mut MemoryDocument, route: &str) -> Vec<Effect> {
        site.dispatch(
            SiteEvent::NavLinkClicked {
                route: route.to_string(),
            },
            doc,
        )
    }

    #[test]
    fn test_start_shows_default_route() {
        let (site, doc) = started();
        assert_eq!(doc.visible_sections(), vec!["home"]);
        assert_eq!(doc.active_nav_links(), vec!["home"]);
        assert_eq!(doc.history_len(), 1);
        assert_eq!(site.router().current(), Route::Home);
    }

    #[test]
    fn test_start_honours_fragment() {
        let mut doc = MemoryDocument::with_sections(&SECTIONS).at_fragment("blog");
        let mut site = Site::new(SiteConfig::default());
        site.start(&mut doc);

        assert_eq!(doc.visible_sections(), vec!["blog"]);
        assert!(site.start(&mut doc).is_empty());
    }

    #[test]
    fn test_every_route_shows_exactly_one_section() {
        let (mut site, mut doc) = started();
        for route in SECTIONS {
            click(&mut site, &mut doc, route);
            assert_eq!(doc.visible_sections(), vec![route]);
            assert_eq!(doc.active_nav_links(), vec![route]);
            assert_eq!(doc.fragment(), route);
        }
    }

    #[test]
    fn test_unregistered_route_changes_nothing() {
        let (mut site, mut doc) = started();
        click(&mut site, &mut doc, "offer");
        let history = doc.history_len();

        assert!(click(&mut site, &mut doc, "pricing").is_empty());
        assert_eq!(doc.visible_sections(), vec!["offer"]);
        assert_eq!(doc.fragment(), "offer");
        assert_eq!(doc.history_len(), history);
        assert_eq!(site.router().current(), Route::Offer);
    }

    #[test]
    fn test_back_restores_previous_section_without_push() {
        let (mut site, mut doc) = started();
        click(&mut site, &mut doc, "about");
        click(&mut site, &mut doc, "passion");
        let history = doc.history_len();

        let fragment = doc.back().unwrap();
        site.dispatch(SiteEvent::PopState { fragment }, &mut doc);

        assert_eq!(doc.visible_sections(), vec!["about"]);
        assert_eq!(doc.active_nav_links(), vec!["about"]);
        assert_eq!(doc.history_len(), history);
        assert_eq!(site.router().current(), Route::About);

        // Back to the initial empty fragment lands on the default route
        let fragment = doc.back().unwrap();
        site.dispatch(SiteEvent::PopState { fragment }, &mut doc);
        assert_eq!(doc.visible_sections(), vec!["home"]);
        assert_eq!(doc.history_len(), history);

        let fragment = doc.forward().unwrap();
        site.dispatch(SiteEvent::PopState { fragment }, &mut doc);
        assert_eq!(doc.visible_sections(), vec!["about"]);
    }

    #[test]
    fn test_shortcut_buttons() {
        let (mut site, mut doc) = started();

        site.dispatch(SiteEvent::CtaClicked, &mut doc);
        assert_eq!(doc.visible_sections(), vec!["contact"]);

        site.dispatch(SiteEvent::SecondaryClicked, &mut doc);
        assert_eq!(doc.visible_sections(), vec!["about"]);
    }

    #[test]
    fn test_menu_closes_on_navigation() {
        let (mut site, mut doc) = started();

        site.dispatch(SiteEvent::MenuToggled, &mut doc);
        assert_eq!(doc.menu_open(), Some(true));

        site.dispatch(SiteEvent::DocumentClicked { inside_menu: true }, &mut doc);
        assert_eq!(doc.menu_open(), Some(true));

        click(&mut site, &mut doc, "blog");
        assert_eq!(doc.menu_open(), Some(false));

        site.dispatch(SiteEvent::MenuToggled, &mut doc);
        site.dispatch(SiteEvent::Resized { width: 1280.0 }, &mut doc);
        assert_eq!(doc.menu_open(), Some(false));
    }

    #[test]
    fn test_navigation_scrolls_to_top() {
        let (mut site, mut doc) = started();
        doc.scroll_to(640.0);
        click(&mut site, &mut doc, "offer");
        assert_eq!(doc.scroll_y(), 0.0);
    }

    #[test]
    fn test_form_submission() {
        let (mut site, mut doc) = started();
        doc.fill_form(ContactSubmission::new("Anna", "anna@example.pl", "Dzień dobry"));

        let submission = doc.form().clone();
        site.dispatch(SiteEvent::FormSubmitted { submission }, &mut doc);
        assert_eq!(doc.alerts().len(), 1);
        assert_eq!(doc.form(), &ContactSubmission::default());

        let bad = ContactSubmission::new("Anna", "", "x");
        doc.fill_form(bad.clone());
        site.dispatch(SiteEvent::FormSubmitted { submission: bad.clone() }, &mut doc);
        assert_eq!(doc.alerts().len(), 2);
        assert!(doc.alerts()[1].contains("Email jest wymagany"));
        // Rejected submissions leave the fields alone
        assert_eq!(doc.form(), &bad);
    }

    #[test]
    fn test_scroll_and_reveal() {
        let mut doc = MemoryDocument::with_sections(&SECTIONS)
            .with_reveal_items(&[(200.0, 100.0), (2000.0, 100.0)]);
        let mut site = Site::new(SiteConfig::default());
        site.start(&mut doc);

        assert!(doc.reveal_items().iter().all(|i| !i.state.as_ref().unwrap().is_shown()));

        doc.scroll_to(1500.0);
        site.dispatch(SiteEvent::Scrolled { y: 1500.0 }, &mut doc);
        assert_eq!(doc.navbar_style().unwrap().backdrop_filter, "blur(10px)");

        let entries = doc.intersections(&site.reveal_options());
        let revealed = site.dispatch(SiteEvent::Intersections { entries }, &mut doc);
        assert_eq!(revealed.len(), 1);
        assert!(site.reveal().is_revealed(RevealTarget(1)));
        assert!(!site.reveal().is_revealed(RevealTarget(0)));

        doc.scroll_to(0.0);
        site.dispatch(SiteEvent::Scrolled { y: 0.0 }, &mut doc);
        let entries = doc.intersections(&site.reveal_options());
        site.dispatch(SiteEvent::Intersections { entries }, &mut doc);

        // Both revealed now, and the far one stayed revealed after leaving view
        assert!(doc.reveal_items().iter().all(|i| i.state.as_ref().unwrap().is_shown()));
        assert_eq!(doc.navbar_style().unwrap().background, "#fff");
    }

    #[test]
    fn test_events_before_start_ignored() {
        let mut doc = MemoryDocument::with_sections(&SECTIONS);
        let mut site = Site::new(SiteConfig::default());

        assert!(click(&mut site, &mut doc, "about").is_empty());
        assert!(doc.visible_sections().is_empty());
    }

    #[test]
    fn test_full_boot() {
        let mut doc = MemoryDocument::with_sections(&SECTIONS).with_reveal_items(&[(100.0, 50.0)]);
        let mut site = Site::new(SiteConfig::default());

        site.boot(&mut doc);

        assert!(site.is_started());
        assert_eq!(site.sequencer().phase(), BootPhase::Ready);
        assert!(doc.loader().is_none());
        assert!(doc.main_content().unwrap().is_shown());
        assert_eq!(doc.visible_sections(), vec!["home"]);
        assert_eq!(site.reveal().tracked(), 1);
    }

    #[test]
    fn test_event_json() {
        let event: SiteEvent =
            serde_json::from_str(r#"{"type": "nav_link_clicked", "route": "blog"}"#).unwrap();
        assert_eq!(
            event,
            SiteEvent::NavLinkClicked {
                route: "blog".into()
            }
        );

        let event: SiteEvent = serde_json::from_str(r#"{"type": "cta_clicked"}"#).unwrap();
        assert_eq!(event, SiteEvent::CtaClicked);
    }
}
