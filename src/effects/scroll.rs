//! Navbar styling driven by scroll position

use crate::config::ScrollConfig;
use crate::effect::{Effect, NavbarStyle};

/// Switches the navbar between solid and translucent
///
/// Stateless: the style is recomputed from the offset on every scroll event.
#[derive(Debug, Clone)]
pub struct ScrollEffects {
    config: ScrollConfig,
}

impl ScrollEffects {
    pub fn new(config: ScrollConfig) -> Self {
        Self { config }
    }

    /// Style for a vertical scroll offset; translucent strictly past the threshold
    pub fn navbar_style(&self, scroll_y: f64) -> NavbarStyle {
        if scroll_y > self.config.threshold {
            NavbarStyle {
                background: self.config.scrolled_background.clone(),
                backdrop_filter: self.config.scrolled_backdrop.clone(),
            }
        } else {
            NavbarStyle {
                background: self.config.solid_background.clone(),
                backdrop_filter: self.config.solid_backdrop.clone(),
            }
        }
    }

    pub fn handle(&self, scroll_y: f64) -> Vec<Effect> {
        vec![Effect::SetNavbarStyle {
            style: self.navbar_style(scroll_y),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_exclusive() {
        let scroll = ScrollEffects::new(ScrollConfig::default());

        assert_eq!(scroll.navbar_style(0.0).background, "#fff");
        assert_eq!(scroll.navbar_style(100.0).backdrop_filter, "none");

        let scrolled = scroll.navbar_style(100.5);
        assert_eq!(scrolled.background, "rgba(255, 255, 255, 0.95)");
        assert_eq!(scrolled.backdrop_filter, "blur(10px)");
    }

    #[test]
    fn test_recomputed_every_time() {
        let scroll = ScrollEffects::new(ScrollConfig::default());
        let down = scroll.handle(400.0);
        let up = scroll.handle(20.0);

        assert_ne!(down, up);
        assert_eq!(up, scroll.handle(20.0));
    }
}
