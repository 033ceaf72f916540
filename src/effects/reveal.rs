//! Reveal-on-scroll
//!
//! Tracked elements start transparent and pushed down. The first time one
//! intersects the observation root it animates into place and stays there.

use serde::{Deserialize, Serialize};

use crate::config::RevealConfig;
use crate::effect::{Effect, RevealState, RevealTarget, StyleTarget};

/// Observation parameters shared with the browser's intersection observer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    /// Visible fraction needed to count as intersecting
    pub threshold: f64,
    /// Pixels cut from the bottom of the root
    pub bottom_margin_px: f64,
}

impl RevealOptions {
    pub fn from_config(config: &RevealConfig) -> Self {
        Self {
            threshold: config.threshold,
            bottom_margin_px: config.bottom_margin_px,
        }
    }

    /// CSS margin string for the observer, e.g. `0px 0px -50px 0px`
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin_px)
    }

    /// Fraction of an element inside the viewport after the bottom margin
    ///
    /// `top` is relative to the viewport top. Zero-height elements count as
    /// fully visible when their top edge is inside the root.
    pub fn visible_fraction(&self, top: f64, height: f64, viewport_height: f64) -> f64 {
        let root_bottom = (viewport_height - self.bottom_margin_px).max(0.0);
        if height <= 0.0 {
            return if top >= 0.0 && top <= root_bottom { 1.0 } else { 0.0 };
        }
        let visible = (top + height).min(root_bottom) - top.max(0.0);
        (visible / height).clamp(0.0, 1.0)
    }

    pub fn is_intersecting(&self, top: f64, height: f64, viewport_height: f64) -> bool {
        let fraction = self.visible_fraction(top, height, viewport_height);
        fraction > 0.0 && fraction >= self.threshold
    }
}

/// One observer report for a tracked element
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Intersection {
    pub target: RevealTarget,
    pub is_intersecting: bool,
}

/// One-shot reveal state for every tracked element
#[derive(Debug, Clone)]
pub struct IntersectionReveal {
    options: RevealOptions,
    offset_px: f64,
    transition: String,
    revealed: Vec<bool>,
}

impl IntersectionReveal {
    pub fn new(config: &RevealConfig) -> Self {
        Self {
            options: RevealOptions::from_config(config),
            offset_px: config.offset_px,
            transition: config.transition.clone(),
            revealed: Vec::new(),
        }
    }

    pub fn options(&self) -> RevealOptions {
        self.options
    }

    /// Start tracking one more element; returns its index and the effect
    /// that hides it
    pub fn track(&mut self) -> (RevealTarget, Effect) {
        let target = RevealTarget(self.revealed.len());
        self.revealed.push(false);
        let effect = Effect::SetPresentation {
            target: StyleTarget::RevealItem(target),
            state: RevealState::hidden(self.offset_px, &self.transition),
        };
        (target, effect)
    }

    /// Track `count` elements at once
    pub fn track_all(&mut self, count: usize) -> Vec<Effect> {
        (0..count).map(|_| self.track().1).collect()
    }

    pub fn tracked(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_revealed(&self, target: RevealTarget) -> bool {
        self.revealed.get(target.0).copied().unwrap_or(false)
    }

    /// Reveal every intersecting element not yet revealed
    ///
    /// Leaving the viewport never hides an element again. Untracked targets
    /// are ignored.
    pub fn handle(&mut self, entries: &[Intersection]) -> Vec<Effect> {
        let mut effects = Vec::new();
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            let Some(revealed) = self.revealed.get_mut(entry.target.0) else {
                continue;
            };
            if *revealed {
                continue;
            }
            *revealed = true;
            effects.push(Effect::SetPresentation {
                target: StyleTarget::RevealItem(entry.target),
                state: RevealState::shown(),
            });
        }
        effects
    }
}
