//! Vitrine Web
//!
//! Browser runtime for the Vitrine site helper, compiled to WebAssembly.
//!
//! # Features
//!
//! - Loading screen and staged content reveal on startup
//! - Hash routing wired to nav links, the CTA button and browser history
//! - Mobile menu, navbar scroll styling and reveal-on-scroll
//! - Contact form validation with native alerts
//! - Service worker registration
//!
//! # Architecture
//!
//! All decisions are made by [`vitrine::Site`]. This crate only turns DOM
//! events into [`vitrine::SiteEvent`]s and applies the resulting effects
//! through [`BrowserDocument`]. Page settings come from an inline
//! `<script type="application/toml" id="vitrine-config">` element.

use js_sys::Reflect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

mod animation;
mod app;
mod config;
mod document;
mod listeners;
mod worker;

pub use animation::{fade_in, scroll_to_element, slide_down};
pub use app::App;
pub use config::{read_inline, CONFIG_ELEMENT_ID};
pub use document::{BrowserDocument, REVEAL_INDEX_ATTRIBUTE};
pub use listeners::read_submission;

fn ready_state(document: &web_sys::Document) -> String {
    Reflect::get(document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default()
}

/// Run `callback` once `event` has fired on `target`, or now if `already` holds
fn when(target: &web_sys::EventTarget, event: &str, already: bool, callback: impl FnOnce() + 'static) {
    if already {
        callback();
        return;
    }
    let closure = Closure::once_into_js(move |_: web_sys::Event| callback());
    if let Err(e) = target.add_event_listener_with_callback(event, closure.unchecked_ref()) {
        web_sys::console::error_1(&format!("Failed to listen for {}: {:?}", event, e).into());
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let config = read_inline(&document);

    if config.service_worker.enabled {
        let path = config.service_worker.path.clone();
        let worker_window = window.clone();
        let loaded = ready_state(&document) == "complete";
        when(&window, "load", loaded, move || {
            worker::register(&worker_window, &path)
        });
    }

    let parsed = ready_state(&document) != "loading";
    when(&document, "DOMContentLoaded", parsed, move || match App::new(config) {
        Some(app) => app.launch(),
        None => web_sys::console::error_1(&"No document to attach to".into()),
    });
}
