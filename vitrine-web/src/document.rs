//! Browser Document
//!
//! Applies site effects to the live page through `web_sys`. Every lookup
//! tolerates a missing element and skips the change.

use js_sys::{Object, Reflect};
use vitrine::{DomConfig, NavbarStyle, RevealState, RevealTarget, StyleTarget};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, HtmlFormElement, ScrollBehavior, ScrollToOptions, Window};

/// Attribute stamped on reveal elements with their tracking index
pub const REVEAL_INDEX_ATTRIBUTE: &str = "data-vitrine-reveal";

const LOADER_STYLE_ID: &str = "vitrine-loader-style";

const LOADER_CSS: &str = "\
#vitrine-loader-spinner{width:48px;height:48px;border:4px solid #eee;\
border-top-color:#333;border-radius:50%;animation:vitrine-spin 1s linear infinite;}\
@keyframes vitrine-spin{to{transform:rotate(360deg);}}";

/// The live page
pub struct BrowserDocument {
    window: Window,
    document: web_sys::Document,
    dom: DomConfig,
    reveal_items: Vec<HtmlElement>,
}

impl BrowserDocument {
    /// Bind to the current window and collect the reveal-on-scroll elements
    pub fn from_window(dom: DomConfig) -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;

        let reveal_items: Vec<HtmlElement> = query_all(&document, &dom.reveal_selector)
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .collect();
        for (index, item) in reveal_items.iter().enumerate() {
            let _ = item.set_attribute(REVEAL_INDEX_ATTRIBUTE, &index.to_string());
        }

        Some(Self {
            window,
            document,
            dom,
            reveal_items,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &web_sys::Document {
        &self.document
    }

    pub fn dom(&self) -> &DomConfig {
        &self.dom
    }

    pub fn reveal_items(&self) -> &[HtmlElement] {
        &self.reveal_items
    }

    pub fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    pub fn query_all(&self, selector: &str) -> Vec<Element> {
        query_all(&self.document, selector)
    }

    pub fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    /// Toggle button and menu, only when both exist
    pub fn menu_elements(&self) -> Option<(Element, Element)> {
        let toggle = self.by_id(&self.dom.nav_toggle_id)?;
        let menu = self.by_id(&self.dom.nav_menu_id)?;
        Some((toggle, menu))
    }

    fn html_by_id(&self, id: &str) -> Option<HtmlElement> {
        self.by_id(id)?.dyn_into::<HtmlElement>().ok()
    }

    fn style_target(&self, target: StyleTarget) -> Option<HtmlElement> {
        match target {
            StyleTarget::RevealItem(RevealTarget(index)) => self.reveal_items.get(index).cloned(),
            StyleTarget::MainContent => self.html_by_id(&self.dom.main_content_id),
            StyleTarget::Loader => self.html_by_id(&self.dom.loader_id),
        }
    }

    fn install_loader_style(&self) {
        if self.by_id(LOADER_STYLE_ID).is_some() {
            return;
        }
        let (Ok(style), Some(head)) = (self.document.create_element("style"), self.document.head())
        else {
            return;
        };
        style.set_id(LOADER_STYLE_ID);
        style.set_text_content(Some(LOADER_CSS));
        let _ = head.append_child(&style);
    }
}

fn query_all(document: &web_sys::Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

impl vitrine::Document for BrowserDocument {
    fn location_fragment(&self) -> String {
        let hash = self.window.location().hash().unwrap_or_default();
        hash.trim_start_matches('#').to_string()
    }

    fn reveal_target_count(&self) -> usize {
        self.reveal_items.len()
    }

    fn push_history(&mut self, fragment: &str) {
        let Ok(history) = self.window.history() else {
            return;
        };
        let state = Object::new();
        let _ = Reflect::set(&state, &"path".into(), &JsValue::from_str(fragment));
        let _ = history.push_state_with_url(&state, "", Some(&format!("#{fragment}")));
    }

    fn hide_all_sections(&mut self) {
        for section in self.query_all(&format!(".{}", self.dom.section_class)) {
            let _ = section.class_list().remove_1(&self.dom.active_class);
        }
    }

    fn show_section(&mut self, id: &str) {
        if let Some(section) = self.by_id(id) {
            let _ = section.class_list().add_1(&self.dom.active_class);
        }
    }

    fn set_menu_open(&mut self, open: bool) {
        if let Some((toggle, menu)) = self.menu_elements() {
            for el in [toggle, menu] {
                let _ = el
                    .class_list()
                    .toggle_with_force(&self.dom.active_class, open);
            }
        }
    }

    fn toggle_menu(&mut self) {
        if let Some((toggle, menu)) = self.menu_elements() {
            for el in [toggle, menu] {
                let _ = el.class_list().toggle(&self.dom.active_class);
            }
        }
    }

    fn scroll_to_top(&mut self, smooth: bool) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(if smooth {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Auto
        });
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn highlight_nav_link(&mut self, route: &str) {
        for link in self.query_all(&self.dom.nav_link_selector) {
            let active = link.get_attribute(&self.dom.route_attribute).as_deref() == Some(route);
            let _ = link
                .class_list()
                .toggle_with_force(&self.dom.active_class, active);
        }
    }

    fn set_navbar_style(&mut self, style: &NavbarStyle) {
        if let Some(navbar) = self.html_by_id(&self.dom.navbar_id) {
            let css = navbar.style();
            let _ = css.set_property("background", &style.background);
            let _ = css.set_property("backdrop-filter", &style.backdrop_filter);
        }
    }

    fn set_presentation(&mut self, target: StyleTarget, state: &RevealState) {
        let Some(el) = self.style_target(target) else {
            return;
        };
        let css = el.style();
        if let Some(transition) = &state.transition {
            let _ = css.set_property("transition", transition);
        }
        let _ = css.set_property("opacity", &state.opacity.to_string());
        let _ = css.set_property("transform", &state.transform());
    }

    fn alert(&mut self, text: &str) {
        let _ = self.window.alert_with_message(text);
    }

    fn reset_form(&mut self) {
        if let Some(form) = self
            .query(&self.dom.contact_form_selector)
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
        {
            form.reset();
        }
    }

    fn show_loader(&mut self, label: &str) {
        if self.by_id(&self.dom.loader_id).is_some() {
            return;
        }
        let (Ok(loader), Some(body)) = (self.document.create_element("div"), self.document.body())
        else {
            return;
        };
        self.install_loader_style();

        loader.set_id(&self.dom.loader_id);
        let _ = loader.set_attribute(
            "style",
            "position:fixed;inset:0;display:flex;flex-direction:column;align-items:center;\
             justify-content:center;gap:1rem;background:#fff;z-index:9999;",
        );
        let spinner = self.document.create_element("div");
        let text = self.document.create_element("p");
        if let (Ok(spinner), Ok(text)) = (spinner, text) {
            spinner.set_id("vitrine-loader-spinner");
            text.set_text_content(Some(label));
            let _ = loader.append_child(&spinner);
            let _ = loader.append_child(&text);
        }
        let _ = body.append_child(&loader);
    }

    fn remove_loader(&mut self) {
        if let Some(loader) = self.by_id(&self.dom.loader_id) {
            loader.remove();
        }
    }
}
