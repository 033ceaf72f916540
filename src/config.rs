//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides. In the
//! browser the same TOML is read from an inline script element instead.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::router::Route;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub dom: DomConfig,

    #[serde(default)]
    pub router: RouterConfig,

    #[serde(default)]
    pub scroll: ScrollConfig,

    #[serde(default)]
    pub reveal: RevealConfig,

    #[serde(default)]
    pub bootstrap: BootstrapConfig,

    #[serde(default)]
    pub copy: ContactCopy,

    #[serde(default)]
    pub service_worker: ServiceWorkerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Selectors and element ids the host document is expected to provide
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DomConfig {
    /// Class shared by every navigable section
    pub section_class: String,
    /// Selector for navigation links
    pub nav_link_selector: String,
    /// Attribute on a nav link holding its route key
    pub route_attribute: String,
    /// Class marking the visible section, the current link and the open menu
    pub active_class: String,
    pub nav_toggle_id: String,
    pub nav_menu_id: String,
    pub navbar_id: String,
    pub main_content_id: String,
    pub loader_id: String,
    pub contact_form_selector: String,
    /// Call-to-action button (navigates to `router.cta_route`)
    pub cta_selector: String,
    /// "Learn more" button (navigates to `router.secondary_route`)
    pub secondary_selector: String,
    /// Elements animated by the reveal-on-scroll effect
    pub reveal_selector: String,
    /// Viewport width above which the mobile menu is closed on resize
    pub mobile_breakpoint: f64,
}

impl Default for DomConfig {
    fn default() -> Self {
        Self {
            section_class: "section".to_string(),
            nav_link_selector: ".nav-link".to_string(),
            route_attribute: "data-section".to_string(),
            active_class: "active".to_string(),
            nav_toggle_id: "nav-toggle".to_string(),
            nav_menu_id: "nav-menu".to_string(),
            navbar_id: "navbar".to_string(),
            main_content_id: "main-content".to_string(),
            loader_id: "loading-screen".to_string(),
            contact_form_selector: ".contact-form".to_string(),
            cta_selector: ".cta-button".to_string(),
            secondary_selector: ".btn-secondary".to_string(),
            reveal_selector:
                ".service-card, .gallery-item, .work-feature, .team-member, .passion-card"
                    .to_string(),
            mobile_breakpoint: 768.0,
        }
    }
}

/// Router configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Route shown when the address fragment is empty
    pub default_route: Route,
    pub cta_route: Route,
    pub secondary_route: Route,
    /// Use smooth scrolling when a route change scrolls to the top
    pub smooth_scroll: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            default_route: Route::Home,
            cta_route: Route::Contact,
            secondary_route: Route::About,
            smooth_scroll: true,
        }
    }
}

/// Navbar scroll styling
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Vertical offset (px) past which the navbar turns translucent
    pub threshold: f64,
    pub solid_background: String,
    pub solid_backdrop: String,
    pub scrolled_background: String,
    pub scrolled_backdrop: String,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            threshold: 100.0,
            solid_background: "#fff".to_string(),
            solid_backdrop: "none".to_string(),
            scrolled_background: "rgba(255, 255, 255, 0.95)".to_string(),
            scrolled_backdrop: "blur(10px)".to_string(),
        }
    }
}

/// Reveal-on-scroll configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Visible fraction at which an element counts as intersecting
    pub threshold: f64,
    /// Pixels trimmed off the bottom of the observation root
    pub bottom_margin_px: f64,
    /// Initial downward offset of hidden elements
    pub offset_px: f64,
    pub transition: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin_px: 50.0,
            offset_px: 30.0,
            transition: "opacity 0.6s ease, transform 0.6s ease".to_string(),
        }
    }
}

/// Startup pacing
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// How long the loading screen stays before components start
    pub loader_delay_ms: u32,
    /// Fade-out time of the loading screen before it is removed
    pub loader_fade_ms: u32,
    /// Delay between staging and revealing the main content
    pub content_reveal_delay_ms: u32,
    pub content_offset_px: f64,
    pub content_transition: String,
    pub loader_label: String,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            loader_delay_ms: 500,
            loader_fade_ms: 300,
            content_reveal_delay_ms: 100,
            content_offset_px: 20.0,
            content_transition: "opacity 0.6s ease, transform 0.6s ease".to_string(),
            loader_label: "Ładowanie...".to_string(),
        }
    }
}

/// User-facing contact form text
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContactCopy {
    pub name_required: String,
    pub email_required: String,
    pub email_invalid: String,
    pub message_required: String,
    /// First line of the error notice
    pub errors_header: String,
    pub success: String,
}

impl Default for ContactCopy {
    fn default() -> Self {
        Self {
            name_required: "Imię i nazwisko jest wymagane".to_string(),
            email_required: "Email jest wymagany".to_string(),
            email_invalid: "Podaj prawidłowy adres email".to_string(),
            message_required: "Wiadomość jest wymagana".to_string(),
            errors_header: "Błędy w formularzu:".to_string(),
            success: "Dziękujemy za wiadomość! Odpowiemy najszybciej jak to możliwe."
                .to_string(),
        }
    }
}

/// Offline cache worker registration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceWorkerConfig {
    pub enabled: bool,
    pub path: String,
}

impl Default for ServiceWorkerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: "/sw.js".to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,

    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Parse configuration from TOML text (used for inline page config)
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Inline(e.to_string()))
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = SiteConfig::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("vitrine").join("config.toml")),
            Some(PathBuf::from("/etc/vitrine/config.toml")),
            Some(PathBuf::from("./vitrine.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply `VITRINE_*` environment variable overrides
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(level) = lookup("VITRINE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("VITRINE_LOG_FORMAT") {
            self.logging.format = format;
        }

        if let Some(route) = lookup("VITRINE_DEFAULT_ROUTE") {
            match route.parse() {
                Ok(route) => self.router.default_route = route,
                Err(e) => tracing::warn!("Ignoring VITRINE_DEFAULT_ROUTE: {}", e),
            }
        }

        // Either a boolean switch or a worker script path
        if let Some(worker) = lookup("VITRINE_SERVICE_WORKER") {
            match worker.parse::<bool>() {
                Ok(enabled) => self.service_worker.enabled = enabled,
                Err(_) => {
                    self.service_worker.enabled = true;
                    self.service_worker.path = worker;
                }
            }
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Failed to parse inline config: {0}")]
    Inline(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r##"# Vitrine Configuration
#
# Environment variables override these settings:
# - VITRINE_LOG_LEVEL
# - VITRINE_LOG_FORMAT
# - VITRINE_DEFAULT_ROUTE
# - VITRINE_SERVICE_WORKER (true/false or a script path)

[dom]
section_class = "section"
nav_link_selector = ".nav-link"
route_attribute = "data-section"
active_class = "active"
nav_toggle_id = "nav-toggle"
nav_menu_id = "nav-menu"
navbar_id = "navbar"
main_content_id = "main-content"
loader_id = "loading-screen"
contact_form_selector = ".contact-form"
cta_selector = ".cta-button"
secondary_selector = ".btn-secondary"
reveal_selector = ".service-card, .gallery-item, .work-feature, .team-member, .passion-card"

# Close the mobile menu when the window grows past this width (px)
mobile_breakpoint = 768.0

[router]
# One of: home, about, offer, passion, blog, contact
default_route = "home"
cta_route = "contact"
secondary_route = "about"
smooth_scroll = true

[scroll]
# Navbar turns translucent once the page is scrolled past this offset (px)
threshold = 100.0
solid_background = "#fff"
solid_backdrop = "none"
scrolled_background = "rgba(255, 255, 255, 0.95)"
scrolled_backdrop = "blur(10px)"

[reveal]
threshold = 0.1
bottom_margin_px = 50.0
offset_px = 30.0
transition = "opacity 0.6s ease, transform 0.6s ease"

[bootstrap]
loader_delay_ms = 500
loader_fade_ms = 300
content_reveal_delay_ms = 100
content_offset_px = 20.0
content_transition = "opacity 0.6s ease, transform 0.6s ease"
loader_label = "Ładowanie..."

[copy]
name_required = "Imię i nazwisko jest wymagane"
email_required = "Email jest wymagany"
email_invalid = "Podaj prawidłowy adres email"
message_required = "Wiadomość jest wymagana"
errors_header = "Błędy w formularzu:"
success = "Dziękujemy za wiadomość! Odpowiemy najszybciej jak to możliwe."

[service_worker]
enabled = true
path = "/sw.js"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for tooling)
format = "pretty"

# Optional log file path
# file = "/var/log/vitrine/vitrine.log"
"##
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config = SiteConfig::from_toml_str(&generate_default_config()).unwrap();
        let defaults = SiteConfig::default();

        assert_eq!(config.router.default_route, defaults.router.default_route);
        assert_eq!(config.scroll.threshold, defaults.scroll.threshold);
        assert_eq!(config.dom.reveal_selector, defaults.dom.reveal_selector);
        assert_eq!(config.copy.success, defaults.copy.success);
        assert_eq!(config.bootstrap.loader_delay_ms, 500);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
            [router]
            default_route = "blog"

            [scroll]
            threshold = 250.0
            "#,
        )
        .unwrap();

        assert_eq!(config.router.default_route, Route::Blog);
        assert_eq!(config.router.cta_route, Route::Contact);
        assert_eq!(config.scroll.threshold, 250.0);
        assert_eq!(config.scroll.solid_background, "#fff");
        assert_eq!(config.dom.nav_menu_id, "nav-menu");
    }

    #[test]
    fn test_unknown_route_rejected() {
        let result = SiteConfig::from_toml_str("[router]\ndefault_route = \"shop\"\n");
        assert!(matches!(result, Err(ConfigError::Inline(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"debug\"\nformat = \"json\"").unwrap();

        let config = SiteConfig::load(file.path()).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SiteConfig::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("VITRINE_LOG_LEVEL", "trace"),
            ("VITRINE_DEFAULT_ROUTE", "offer"),
            ("VITRINE_SERVICE_WORKER", "false"),
        ]
        .into_iter()
        .collect();

        let mut config = SiteConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.logging.level, "trace");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.router.default_route, Route::Offer);
        assert!(!config.service_worker.enabled);
    }

    #[test]
    fn test_override_worker_path_and_bad_route() {
        let mut config = SiteConfig::default();
        config.apply_overrides(|key| match key {
            "VITRINE_SERVICE_WORKER" => Some("/offline.js".to_string()),
            "VITRINE_DEFAULT_ROUTE" => Some("nowhere".to_string()),
            _ => None,
        });

        assert!(config.service_worker.enabled);
        assert_eq!(config.service_worker.path, "/offline.js");
        assert_eq!(config.router.default_route, Route::Home);
    }
}
