//! Event wiring
//!
//! Translates DOM events into [`SiteEvent`]s. Listeners live as long as the
//! page, so every closure is leaked with `forget`.

use vitrine::{ContactSubmission, Document as _, Intersection, RevealTarget, SiteEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, Event, EventTarget, FormData, HtmlFormElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, Node,
};

use crate::app::App;
use crate::document::{BrowserDocument, REVEAL_INDEX_ATTRIBUTE};

/// Attach every listener the site reacts to
pub fn wire(app: &App) {
    let doc = app.document().borrow();

    wire_navigation(app, &doc);
    wire_menu(app, &doc);
    wire_window(app, &doc);
    wire_contact_form(app, &doc);
    observe_reveal_items(app, &doc);

    web_sys::console::log_1(
        &format!("Site ready: {} reveal items", doc.reveal_items().len()).into(),
    );
}

fn on(target: &EventTarget, kind: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if let Err(e) = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
    {
        web_sys::console::error_1(&format!("Failed to listen for {}: {:?}", kind, e).into());
    }
    closure.forget();
}

fn wire_navigation(app: &App, doc: &BrowserDocument) {
    let dom = doc.dom();

    for link in doc.query_all(&dom.nav_link_selector) {
        let app = app.clone();
        let attribute = dom.route_attribute.clone();
        on(&link, "click", move |event| {
            event.prevent_default();
            let route = event
                .current_target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.get_attribute(&attribute))
                .unwrap_or_default();
            app.dispatch(SiteEvent::NavLinkClicked { route });
        });
    }

    if let Some(cta) = doc.query(&dom.cta_selector) {
        let app = app.clone();
        on(&cta, "click", move |event| {
            event.prevent_default();
            app.dispatch(SiteEvent::CtaClicked);
        });
    }

    if let Some(secondary) = doc.query(&dom.secondary_selector) {
        let app = app.clone();
        on(&secondary, "click", move |event| {
            event.prevent_default();
            app.dispatch(SiteEvent::SecondaryClicked);
        });
    }
}

fn wire_menu(app: &App, doc: &BrowserDocument) {
    // Pages without the toggle or the menu get no menu behaviour at all
    let Some((toggle, menu)) = doc.menu_elements() else {
        return;
    };

    let toggle_app = app.clone();
    on(&toggle, "click", move |_| toggle_app.dispatch(SiteEvent::MenuToggled));

    let app = app.clone();
    on(doc.document(), "click", move |event| {
        let inside_menu = event
            .target()
            .and_then(|t| t.dyn_into::<Node>().ok())
            .map(|node| toggle.contains(Some(&node)) || menu.contains(Some(&node)))
            .unwrap_or(false);
        app.dispatch(SiteEvent::DocumentClicked { inside_menu });
    });
}

fn wire_window(app: &App, doc: &BrowserDocument) {
    let window = doc.window();

    let resize_app = app.clone();
    let resize_window = window.clone();
    on(window, "resize", move |_| {
        if let Some(width) = resize_window.inner_width().ok().and_then(|w| w.as_f64()) {
            resize_app.dispatch(SiteEvent::Resized { width });
        }
    });

    let scroll_app = app.clone();
    let scroll_window = window.clone();
    on(window, "scroll", move |_| {
        let y = scroll_window.scroll_y().unwrap_or(0.0);
        scroll_app.dispatch(SiteEvent::Scrolled { y });
    });

    let app = app.clone();
    on(window, "popstate", move |_| {
        let fragment = app.document().borrow().location_fragment();
        app.dispatch(SiteEvent::PopState { fragment });
    });
}

fn wire_contact_form(app: &App, doc: &BrowserDocument) {
    let Some(form) = doc
        .query(&doc.dom().contact_form_selector)
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        return;
    };

    let app = app.clone();
    let fields = form.clone();
    on(&form, "submit", move |event| {
        event.prevent_default();
        let submission = read_submission(&fields);
        app.dispatch(SiteEvent::FormSubmitted { submission });
    });
}

/// Current `name`, `email` and `message` values of the form
pub fn read_submission(form: &HtmlFormElement) -> ContactSubmission {
    let Ok(data) = FormData::new_with_form(form) else {
        return ContactSubmission::default();
    };
    let field = |name: &str| data.get(name).as_string().unwrap_or_default();
    ContactSubmission::new(field("name"), field("email"), field("message"))
}

fn observe_reveal_items(app: &App, doc: &BrowserDocument) {
    if doc.reveal_items().is_empty() {
        return;
    }

    let options = app.reveal_options();
    let callback_app = app.clone();
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _: IntersectionObserver| {
        let entries: Vec<Intersection> = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .filter_map(|entry| {
                let index = entry
                    .target()
                    .get_attribute(REVEAL_INDEX_ATTRIBUTE)?
                    .parse::<usize>()
                    .ok()?;
                Some(Intersection {
                    target: RevealTarget(index),
                    is_intersecting: entry.is_intersecting(),
                })
            })
            .collect();
        callback_app.dispatch(SiteEvent::Intersections { entries });
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin());

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            for item in doc.reveal_items() {
                observer.observe(item);
            }
        }
        Err(e) => {
            web_sys::console::error_1(&format!("IntersectionObserver unavailable: {:?}", e).into());
        }
    }
    callback.forget();
}
