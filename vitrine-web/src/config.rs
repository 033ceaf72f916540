//! Page configuration
//!
//! Read from an inline `<script type="application/toml" id="vitrine-config">`
//! element. A missing element means defaults.

use vitrine::SiteConfig;

pub const CONFIG_ELEMENT_ID: &str = "vitrine-config";

pub fn read_inline(document: &web_sys::Document) -> SiteConfig {
    let Some(text) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return SiteConfig::default();
    };

    match SiteConfig::from_toml_str(&text) {
        Ok(config) => config,
        Err(e) => {
            web_sys::console::warn_1(&format!("Ignoring page config: {}", e).into());
            SiteConfig::default()
        }
    }
}
