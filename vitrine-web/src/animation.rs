//! Animation exports
//!
//! JavaScript-callable helpers driven by `requestAnimationFrame`.

use std::cell::RefCell;
use std::rc::Rc;

use vitrine::{scroll_target, FadeIn, SlideDown, SlideHeight};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn request_frame(callback: &Closure<dyn FnMut(f64)>) {
    if let Some(window) = web_sys::window() {
        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}

/// Call `frame` on every animation frame until it returns `false`
fn animate(mut frame: impl FnMut(f64) -> bool + 'static) {
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let handle = Rc::clone(&callback);

    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        if frame(timestamp) {
            if let Some(next) = handle.borrow().as_ref() {
                request_frame(next);
            }
        } else {
            // Drop the last handle; the closure is freed once this call returns
            let _ = handle.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(first) = callback.borrow().as_ref() {
        request_frame(first);
    };
}

/// Fade an element in from transparent
#[wasm_bindgen(js_name = fadeIn)]
pub fn fade_in(element: HtmlElement, duration_ms: Option<f64>) {
    let mut fade = FadeIn::new(duration_ms.unwrap_or(FadeIn::DEFAULT_DURATION_MS));
    let style = element.style();
    let _ = style.set_property("opacity", "0");
    let _ = style.set_property("display", "block");

    animate(move |timestamp| {
        let frame = fade.frame(timestamp);
        let _ = style.set_property("opacity", &frame.opacity.to_string());
        !frame.finished
    });
}

/// Expand an element from zero height to its content height
#[wasm_bindgen(js_name = slideDown)]
pub fn slide_down(element: HtmlElement, duration_ms: Option<f64>) {
    let style = element.style();
    let _ = style.set_property("display", "block");
    let target_height = f64::from(element.scroll_height());
    let _ = style.set_property("height", "0px");
    let _ = style.set_property("overflow", "hidden");

    let mut slide = SlideDown::new(
        target_height,
        duration_ms.unwrap_or(SlideDown::DEFAULT_DURATION_MS),
    );
    animate(move |timestamp| match slide.frame(timestamp) {
        SlideHeight::Px(height) => {
            let _ = style.set_property("height", &format!("{}px", height));
            true
        }
        SlideHeight::Auto => {
            let _ = style.set_property("height", "auto");
            let _ = style.set_property("overflow", "visible");
            false
        }
    });
}

/// Smooth-scroll so the element sits `offset` pixels below the viewport top
#[wasm_bindgen(js_name = scrollToElement)]
pub fn scroll_to_element(element: HtmlElement, offset: Option<f64>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(scroll_target(
        f64::from(element.offset_top()),
        offset.unwrap_or(0.0),
    ));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
