//! Scripted Simulation
//!
//! Drives a [`Site`] against a [`MemoryDocument`] from a list of user
//! actions, playing the browser's part (history moves, scroll position,
//! intersection reports, form contents).

use serde::{Deserialize, Serialize};

use crate::bootstrap::BootPhase;
use crate::config::SiteConfig;
use crate::contact::ContactSubmission;
use crate::dom::MemoryDocument;
use crate::effect::Effect;
use crate::router::Route;
use crate::site::{Site, SiteEvent};

/// One user action in a simulation script
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SimulationStep {
    /// Run the boot timeline
    Load,
    Click { route: String },
    Cta,
    Secondary,
    ToggleMenu,
    ClickOutside,
    Resize { width: f64 },
    /// Scroll to `y`; also reports intersections at the new offset
    Scroll { y: f64 },
    Back,
    Forward,
    Submit {
        #[serde(default)]
        name: String,
        #[serde(default)]
        email: String,
        #[serde(default)]
        message: String,
    },
}

/// Final state after a run
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub route: Route,
    pub boot_phase: BootPhase,
    pub effects_applied: usize,
    pub document: &'a MemoryDocument,
}

#[derive(Debug)]
pub struct Simulation {
    site: Site,
    doc: MemoryDocument,
    effects_applied: usize,
}

impl Simulation {
    pub fn new(config: SiteConfig, doc: MemoryDocument) -> Self {
        Self {
            site: Site::new(config),
            doc,
            effects_applied: 0,
        }
    }

    /// A page with a section per route and the given reveal items
    pub fn with_default_page(config: SiteConfig, reveal_items: &[(f64, f64)]) -> Self {
        let ids: Vec<&str> = Route::ALL.iter().map(Route::as_str).collect();
        let doc = MemoryDocument::with_sections(&ids).with_reveal_items(reveal_items);
        Self::new(config, doc)
    }

    pub fn site(&self) -> &Site {
        &self.site
    }

    pub fn document(&self) -> &MemoryDocument {
        &self.doc
    }

    pub fn run(&mut self, steps: impl IntoIterator<Item = SimulationStep>) {
        for step in steps {
            self.step(step);
        }
    }

    pub fn step(&mut self, step: SimulationStep) -> Vec<Effect> {
        tracing::debug!(?step, "Simulation step");
        let effects = match step {
            SimulationStep::Load => self.site.boot(&mut self.doc),
            SimulationStep::Click { route } => self.dispatch(SiteEvent::NavLinkClicked { route }),
            SimulationStep::Cta => self.dispatch(SiteEvent::CtaClicked),
            SimulationStep::Secondary => self.dispatch(SiteEvent::SecondaryClicked),
            SimulationStep::ToggleMenu => self.dispatch(SiteEvent::MenuToggled),
            SimulationStep::ClickOutside => {
                self.dispatch(SiteEvent::DocumentClicked { inside_menu: false })
            }
            SimulationStep::Resize { width } => self.dispatch(SiteEvent::Resized { width }),
            SimulationStep::Scroll { y } => {
                self.doc.scroll_to(y);
                let mut effects = self.dispatch(SiteEvent::Scrolled { y });
                let entries = self.doc.intersections(&self.site.reveal_options());
                effects.extend(self.dispatch(SiteEvent::Intersections { entries }));
                effects
            }
            SimulationStep::Back => match self.doc.back() {
                Some(fragment) => self.dispatch(SiteEvent::PopState { fragment }),
                None => Vec::new(),
            },
            SimulationStep::Forward => match self.doc.forward() {
                Some(fragment) => self.dispatch(SiteEvent::PopState { fragment }),
                None => Vec::new(),
            },
            SimulationStep::Submit {
                name,
                email,
                message,
            } => {
                self.doc
                    .fill_form(ContactSubmission::new(name, email, message));
                let submission = self.doc.form().clone();
                self.dispatch(SiteEvent::FormSubmitted { submission })
            }
        };
        self.effects_applied += effects.len();
        effects
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            route: self.site.router().current(),
            boot_phase: self.site.sequencer().phase(),
            effects_applied: self.effects_applied,
            document: &self.doc,
        }
    }

    fn dispatch(&mut self, event: SiteEvent) -> Vec<Effect> {
        self.site.dispatch(event, &mut self.doc)
    }
}
