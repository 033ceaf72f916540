//! Startup Sequencing
//!
//! Keeps the page from flashing unstyled content:
//!
//! ```text
//!   0 ms  ShowLoader
//! 500 ms  StartComponents → FadeLoader → StageMainContent
//! 600 ms  RevealMainContent
//! 800 ms  RemoveLoader
//! ```
//!
//! The delays are cosmetic pacing and come from [`BootstrapConfig`].

use serde::{Deserialize, Serialize};

use crate::config::BootstrapConfig;
use crate::effect::{Effect, RevealState, StyleTarget};

/// One startup step
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BootStep {
    ShowLoader,
    /// Construct the components and apply the initial route
    StartComponents,
    FadeLoader,
    StageMainContent,
    RevealMainContent,
    RemoveLoader,
}

/// A step and its delay from page load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledStep {
    pub at_ms: u32,
    pub step: BootStep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BootPhase {
    Idle,
    Loading,
    Running,
    Ready,
}

/// Produces the startup timeline and tracks how far it has run
#[derive(Debug, Clone)]
pub struct BootstrapSequencer {
    config: BootstrapConfig,
    phase: BootPhase,
}

impl BootstrapSequencer {
    pub fn new(config: BootstrapConfig) -> Self {
        Self {
            config,
            phase: BootPhase::Idle,
        }
    }

    pub fn phase(&self) -> BootPhase {
        self.phase
    }

    /// Every step with its absolute delay, in firing order
    ///
    /// Steps sharing a delay keep their listed order.
    pub fn schedule(&self) -> Vec<ScheduledStep> {
        let start = self.config.loader_delay_ms;
        let mut steps = vec![
            ScheduledStep {
                at_ms: 0,
                step: BootStep::ShowLoader,
            },
            ScheduledStep {
                at_ms: start,
                step: BootStep::StartComponents,
            },
            ScheduledStep {
                at_ms: start,
                step: BootStep::FadeLoader,
            },
            ScheduledStep {
                at_ms: start,
                step: BootStep::StageMainContent,
            },
            ScheduledStep {
                at_ms: start + self.config.content_reveal_delay_ms,
                step: BootStep::RevealMainContent,
            },
            ScheduledStep {
                at_ms: start + self.config.loader_fade_ms,
                step: BootStep::RemoveLoader,
            },
        ];
        steps.sort_by_key(|s| s.at_ms);
        steps
    }

    /// Effects for one step; `StartComponents` has none of its own
    pub fn step(&mut self, step: BootStep) -> Vec<Effect> {
        match step {
            BootStep::ShowLoader => {
                self.phase = BootPhase::Loading;
                vec![Effect::ShowLoader {
                    label: self.config.loader_label.clone(),
                }]
            }
            BootStep::StartComponents => {
                self.phase = BootPhase::Running;
                Vec::new()
            }
            BootStep::FadeLoader => vec![Effect::SetPresentation {
                target: StyleTarget::Loader,
                state: RevealState::faded(),
            }],
            BootStep::StageMainContent => vec![Effect::SetPresentation {
                target: StyleTarget::MainContent,
                state: RevealState::hidden(
                    self.config.content_offset_px,
                    &self.config.content_transition,
                ),
            }],
            BootStep::RevealMainContent => vec![Effect::SetPresentation {
                target: StyleTarget::MainContent,
                state: RevealState::shown(),
            }],
            BootStep::RemoveLoader => {
                self.phase = BootPhase::Ready;
                vec![Effect::RemoveLoader]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule() {
        let sequencer = BootstrapSequencer::new(BootstrapConfig::default());
        let schedule: Vec<(u32, BootStep)> = sequencer
            .schedule()
            .into_iter()
            .map(|s| (s.at_ms, s.step))
            .collect();

        assert_eq!(
            schedule,
            vec![
                (0, BootStep::ShowLoader),
                (500, BootStep::StartComponents),
                (500, BootStep::FadeLoader),
                (500, BootStep::StageMainContent),
                (600, BootStep::RevealMainContent),
                (800, BootStep::RemoveLoader),
            ]
        );
    }

    #[test]
    fn test_schedule_reorders_for_long_reveal() {
        let config = BootstrapConfig {
            content_reveal_delay_ms: 1000,
            ..BootstrapConfig::default()
        };
        let steps: Vec<BootStep> = BootstrapSequencer::new(config)
            .schedule()
            .into_iter()
            .map(|s| s.step)
            .collect();

        assert_eq!(steps[4], BootStep::RemoveLoader);
        assert_eq!(steps[5], BootStep::RevealMainContent);
    }

    #[test]
    fn test_phases() {
        let mut sequencer = BootstrapSequencer::new(BootstrapConfig::default());
        assert_eq!(sequencer.phase(), BootPhase::Idle);

        let effects = sequencer.step(BootStep::ShowLoader);
        assert_eq!(
            effects,
            vec![Effect::ShowLoader {
                label: "Ładowanie...".into()
            }]
        );
        assert_eq!(sequencer.phase(), BootPhase::Loading);

        assert!(sequencer.step(BootStep::StartComponents).is_empty());
        assert_eq!(sequencer.phase(), BootPhase::Running);

        assert_eq!(sequencer.step(BootStep::RemoveLoader), vec![Effect::RemoveLoader]);
        assert_eq!(sequencer.phase(), BootPhase::Ready);
    }

    #[test]
    fn test_main_content_staged_then_shown() {
        let mut sequencer = BootstrapSequencer::new(BootstrapConfig::default());

        let staged = sequencer.step(BootStep::StageMainContent);
        assert!(matches!(
            &staged[0],
            Effect::SetPresentation { target: StyleTarget::MainContent, state } if state.offset_px == 20.0 && state.opacity == 0.0
        ));

        let shown = sequencer.step(BootStep::RevealMainContent);
        assert!(matches!(
            &shown[0],
            Effect::SetPresentation { target: StyleTarget::MainContent, state } if state.is_shown()
        ));
    }
}
