//! Visual Effects
//!
//! - **scroll**: Navbar style by scroll offset
//! - **reveal**: One-shot reveal of cards entering the viewport
//! - **animation**: Fade-in / slide-down frame math and scroll targets

pub mod animation;
mod reveal;
mod scroll;

pub use animation::{scroll_target, FadeFrame, FadeIn, SlideDown, SlideHeight};
pub use reveal::{Intersection, IntersectionReveal, RevealOptions};
pub use scroll::ScrollEffects;
