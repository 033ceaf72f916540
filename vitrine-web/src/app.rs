//! Site runtime
//!
//! Owns the [`Site`] and the [`BrowserDocument`], runs the boot timeline on
//! timers and feeds browser events into the dispatcher.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use vitrine::{BootStep, ScheduledStep, Site, SiteConfig, SiteEvent};

use crate::document::BrowserDocument;
use crate::listeners;

/// Shared handle cloned into every callback
#[derive(Clone)]
pub struct App {
    site: Rc<RefCell<Site>>,
    doc: Rc<RefCell<BrowserDocument>>,
}

impl App {
    pub fn new(config: SiteConfig) -> Option<Self> {
        let doc = BrowserDocument::from_window(config.dom.clone())?;
        Some(Self {
            site: Rc::new(RefCell::new(Site::new(config))),
            doc: Rc::new(RefCell::new(doc)),
        })
    }

    pub fn document(&self) -> &Rc<RefCell<BrowserDocument>> {
        &self.doc
    }

    pub fn reveal_options(&self) -> vitrine::RevealOptions {
        self.site.borrow().reveal_options()
    }

    /// Schedule every boot step; steps due at 0 run immediately
    pub fn launch(&self) {
        let schedule = self.site.borrow().boot_schedule();
        for ScheduledStep { at_ms, step } in schedule {
            if at_ms == 0 {
                self.boot_step(step);
                continue;
            }
            let app = self.clone();
            Timeout::new(at_ms, move || app.boot_step(step)).forget();
        }
    }

    fn boot_step(&self, step: BootStep) {
        {
            let mut doc = self.doc.borrow_mut();
            self.site.borrow_mut().boot_step(step, &mut *doc);
        }
        if step == BootStep::StartComponents {
            listeners::wire(self);
        }
    }

    /// Handle a browser event and apply the result to the page
    pub fn dispatch(&self, event: SiteEvent) {
        let (Ok(mut site), Ok(mut doc)) = (self.site.try_borrow_mut(), self.doc.try_borrow_mut())
        else {
            web_sys::console::warn_1(&"Dropped event raised during dispatch".into());
            return;
        };
        site.dispatch(event, &mut *doc);
    }
}
