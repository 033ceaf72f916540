//! Document Port
//!
//! The page as seen by the components: a handful of reads and one write per
//! [`Effect`] kind. Implementations treat every element as possibly absent
//! and skip the change silently when it is missing.
//!
//! - **memory**: In-memory document for tests and the simulation CLI
//!
//! The browser implementation lives in the `vitrine-web` crate.

mod memory;

pub use memory::{MemoryDocument, NavLinkState, RevealItem, SectionState};

use crate::effect::{Effect, NavbarStyle, RevealState, StyleTarget};

/// Page access used to apply effects
pub trait Document {
    /// Current address fragment without the leading `#`
    fn location_fragment(&self) -> String;

    /// Number of elements the reveal-on-scroll effect should track
    fn reveal_target_count(&self) -> usize;

    fn push_history(&mut self, fragment: &str);

    fn hide_all_sections(&mut self);

    fn show_section(&mut self, id: &str);

    fn set_menu_open(&mut self, open: bool);

    fn toggle_menu(&mut self);

    fn scroll_to_top(&mut self, smooth: bool);

    fn highlight_nav_link(&mut self, route: &str);

    fn set_navbar_style(&mut self, style: &NavbarStyle);

    fn set_presentation(&mut self, target: StyleTarget, state: &RevealState);

    fn alert(&mut self, text: &str);

    fn reset_form(&mut self);

    fn show_loader(&mut self, label: &str);

    fn remove_loader(&mut self);

    /// Apply one effect
    fn apply(&mut self, effect: &Effect) {
        match effect {
            Effect::PushHistory { fragment } => self.push_history(fragment),
            Effect::HideAllSections => self.hide_all_sections(),
            Effect::ShowSection { id } => self.show_section(id),
            Effect::SetMenuOpen { open } => self.set_menu_open(*open),
            Effect::ToggleMenu => self.toggle_menu(),
            Effect::ScrollToTop { smooth } => self.scroll_to_top(*smooth),
            Effect::HighlightNavLink { route } => self.highlight_nav_link(route),
            Effect::SetNavbarStyle { style } => self.set_navbar_style(style),
            Effect::SetPresentation { target, state } => self.set_presentation(*target, state),
            Effect::Alert { text } => self.alert(text),
            Effect::ResetForm => self.reset_form(),
            Effect::ShowLoader { label } => self.show_loader(label),
            Effect::RemoveLoader => self.remove_loader(),
        }
    }

    /// Apply effects in order
    fn apply_all(&mut self, effects: &[Effect]) {
        for effect in effects {
            self.apply(effect);
        }
    }
}
