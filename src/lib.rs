//! # Vitrine
//!
//! Client-side helper for a single-page marketing website.
//!
//! ## Features
//!
//! - **Hash routing**: one visible section at a time, synced with browser history
//! - **Contact form**: required-field and email checks with all errors collected at once
//! - **Scroll effects**: navbar turns translucent past a scroll threshold
//! - **Reveal on scroll**: one-shot fade-in of cards as they enter the viewport
//! - **Bootstrap**: loading screen, then components, then content fade-in
//!
//! ## Modules
//!
//! - [`router`]: Section router and mobile menu
//! - [`contact`]: Contact form validation
//! - [`effects`]: Scroll, reveal and animation helpers
//! - [`bootstrap`]: Startup timeline
//! - [`dom`]: The document port and an in-memory document
//! - [`site`]: Wires every component behind a single event dispatcher
//! - [`simulate`]: Scripted runs against the in-memory document
//!
//! Every component consumes an event and returns a list of [`Effect`]s. Nothing
//! in this crate touches a real browser; the `vitrine-web` crate applies the
//! effects to the live page.
//!
//! ## Quick Start
//!
//! ```rust
//! use vitrine::dom::MemoryDocument;
//! use vitrine::{Site, SiteConfig, SiteEvent};
//!
//! let mut doc = MemoryDocument::with_sections(&["home", "about", "contact"]);
//! let mut site = Site::new(SiteConfig::default());
//!
//! site.start(&mut doc);
//! site.dispatch(SiteEvent::NavLinkClicked { route: "about".into() }, &mut doc);
//!
//! assert_eq!(doc.visible_sections(), vec!["about"]);
//! assert_eq!(doc.fragment(), "about");
//! ```

pub mod bootstrap;
pub mod config;
pub mod contact;
pub mod dom;
pub mod effect;
pub mod effects;
pub mod router;
pub mod simulate;
pub mod site;

pub use bootstrap::{BootPhase, BootStep, BootstrapSequencer, ScheduledStep};

pub use config::{
    BootstrapConfig, ConfigError, ContactCopy, DomConfig, LoggingConfig, RevealConfig,
    RouterConfig, ScrollConfig, ServiceWorkerConfig, SiteConfig,
};

pub use contact::{ContactForm, ContactSubmission, FieldError, FormValidator, ValidationErrors};

pub use dom::{Document, MemoryDocument};

pub use effect::{Effect, NavbarStyle, RevealState, RevealTarget, StyleTarget};

pub use effects::{
    scroll_target, FadeIn, Intersection, IntersectionReveal, RevealOptions, ScrollEffects,
    SlideDown, SlideHeight,
};

pub use router::{
    DisplayAction, HistoryMode, MenuEvent, MobileMenu, Route, Router, RouterError, RouterEvent,
};

pub use simulate::{Simulation, SimulationStep, Snapshot};

pub use site::{Site, SiteEvent};
