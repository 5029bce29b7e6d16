use crate::foundation::error::{ScrollError, ScrollResult};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GalleryConfig {
    /// Section progress at which the reveal starts.
    pub threshold: f64,
    pub first_image_delay_ms: u64,
    pub enable_scroll_delay_ms: u64,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            threshold: 0.15,
            first_image_delay_ms: 300,
            enable_scroll_delay_ms: 900,
        }
    }
}

impl GalleryConfig {
    pub fn validate(&self) -> ScrollResult<()> {
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(ScrollError::validation(
                "gallery threshold must lie in [0, 1]",
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RevealState {
    Hidden,
    Revealing { first_image_ready: bool },
    Interactive,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GalleryTimer {
    FirstImage,
    EnableScroll,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub enum RevealTrigger {
    ThresholdCrossed { progress: f64 },
    TimerElapsed(GalleryTimer),
}

/// One-shot timer the host must schedule; deliver it back as `TimerElapsed` when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TimerRequest {
    pub timer: GalleryTimer,
    pub delay_ms: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Advanced {
        from: RevealState,
        to: RevealState,
        schedule: Option<TimerRequest>,
    },
    Ignored,
}

/// Staged gallery reveal: `Hidden -> Revealing -> Interactive`, forward only.
///
/// Scroll input only opens the gallery; the remaining stages are driven by timers so the
/// first image has painted before the gallery starts capturing scroll.
#[derive(Clone, Debug)]
pub struct GalleryReveal {
    config: GalleryConfig,
    state: RevealState,
}

impl GalleryReveal {
    pub fn new(config: GalleryConfig) -> ScrollResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: RevealState::Hidden,
        })
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self.state, RevealState::Hidden)
    }

    pub fn first_image_ready(&self) -> bool {
        matches!(
            self.state,
            RevealState::Revealing {
                first_image_ready: true
            } | RevealState::Interactive
        )
    }

    pub fn is_scroll_enabled(&self) -> bool {
        matches!(self.state, RevealState::Interactive)
    }

    pub fn observe_progress(&mut self, progress: f64) -> Transition {
        self.handle(RevealTrigger::ThresholdCrossed { progress })
    }

    pub fn handle(&mut self, trigger: RevealTrigger) -> Transition {
        let from = self.state;
        let (to, schedule) = match (from, trigger) {
            (RevealState::Hidden, RevealTrigger::ThresholdCrossed { progress })
                if progress >= self.config.threshold =>
            {
                (
                    RevealState::Revealing {
                        first_image_ready: false,
                    },
                    Some(TimerRequest {
                        timer: GalleryTimer::FirstImage,
                        delay_ms: self.config.first_image_delay_ms,
                    }),
                )
            }
            (
                RevealState::Revealing {
                    first_image_ready: false,
                },
                RevealTrigger::TimerElapsed(GalleryTimer::FirstImage),
            ) => (
                RevealState::Revealing {
                    first_image_ready: true,
                },
                Some(TimerRequest {
                    timer: GalleryTimer::EnableScroll,
                    delay_ms: self.config.enable_scroll_delay_ms,
                }),
            ),
            (
                RevealState::Revealing {
                    first_image_ready: true,
                },
                RevealTrigger::TimerElapsed(GalleryTimer::EnableScroll),
            ) => (RevealState::Interactive, None),
            (_, RevealTrigger::ThresholdCrossed { .. }) => return Transition::Ignored,
            (state, RevealTrigger::TimerElapsed(timer)) => {
                tracing::warn!(?state, ?timer, "gallery timer out of order; ignored");
                return Transition::Ignored;
            }
        };

        tracing::debug!(?from, ?to, "gallery reveal advanced");
        self.state = to;
        Transition::Advanced { from, to, schedule }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/state/gallery.rs"]
mod tests;
