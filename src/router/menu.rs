//! Mobile navigation menu

use crate::effect::Effect;

/// Input to the mobile menu
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuEvent {
    /// The hamburger toggle was clicked
    Toggle,
    /// A click landed somewhere in the document
    DocumentClick { inside_menu: bool },
    /// The window was resized
    Resize { width: f64 },
}

/// Opens and closes the mobile menu
///
/// The open flag lives on the page (the `active` class on menu and toggle),
/// so this handler keeps no state of its own.
#[derive(Debug, Clone)]
pub struct MobileMenu {
    breakpoint: f64,
}

impl MobileMenu {
    pub fn new(breakpoint: f64) -> Self {
        Self { breakpoint }
    }

    pub fn handle(&self, event: MenuEvent) -> Vec<Effect> {
        match event {
            MenuEvent::Toggle => vec![Effect::ToggleMenu],
            MenuEvent::DocumentClick { inside_menu: false } => {
                vec![Effect::SetMenuOpen { open: false }]
            }
            MenuEvent::DocumentClick { inside_menu: true } => Vec::new(),
            MenuEvent::Resize { width } if width > self.breakpoint => {
                vec![Effect::SetMenuOpen { open: false }]
            }
            MenuEvent::Resize { .. } => Vec::new(),
        }
    }
}
