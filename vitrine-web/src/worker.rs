//! Service worker registration

use js_sys::Reflect;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{ServiceWorkerRegistration, Window};

/// Register the offline worker, if the browser supports service workers
pub fn register(window: &Window, path: &str) {
    let navigator = window.navigator();
    let supported = Reflect::has(&navigator, &JsValue::from_str("serviceWorker")).unwrap_or(false);
    if !supported {
        return;
    }

    let promise = navigator.service_worker().register(path);
    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(registration) => {
                let scope = ServiceWorkerRegistration::from(registration).scope();
                web_sys::console::log_1(&format!("SW registered: {}", scope).into());
            }
            Err(e) => {
                web_sys::console::log_1(&format!("SW registration failed: {:?}", e).into());
            }
        }
    });
}
