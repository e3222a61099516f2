use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::easing::{Easing, Transition};

/// Per-instance entrance flag.
///
/// Starts unset and flips exactly once for the lifetime of a mounted view.
/// It cannot be cleared; a fresh mount starts from a fresh state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnimationState {
    has_played_entrance: bool,
}

impl AnimationState {
    #[must_use]
    pub fn has_played_entrance(self) -> bool {
        self.has_played_entrance
    }

    /// Marks the entrance as played. Returns `true` only on the first call.
    pub fn begin_entrance(&mut self) -> bool {
        if self.has_played_entrance {
            return false;
        }
        self.has_played_entrance = true;
        true
    }
}

/// Observable phase of the scatter view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationPhase {
    /// Step below the reveal threshold and nothing revealed yet: axes only.
    Dormant,
    /// Entrance timeline in flight.
    Revealing,
    /// Marks and labels sit at their final position and opacity.
    Settled,
}

impl AnimationPhase {
    #[must_use]
    pub fn shows_marks(self) -> bool {
        !matches!(self, Self::Dormant)
    }
}

/// Entrance timing knobs, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntranceTiming {
    pub mark_delay_ms: u64,
    pub mark_duration_ms: u64,
    pub label_fade_ms: u64,
    pub hover_transition_ms: u64,
}

impl Default for EntranceTiming {
    fn default() -> Self {
        Self {
            mark_delay_ms: 500,
            mark_duration_ms: 2000,
            label_fade_ms: 1000,
            hover_transition_ms: 200,
        }
    }
}

impl EntranceTiming {
    #[must_use]
    pub fn mark_transition(self) -> Transition {
        Transition::new(
            Duration::from_millis(self.mark_delay_ms),
            Duration::from_millis(self.mark_duration_ms),
            Easing::ExpOut,
        )
    }

    /// Labels start fading once the mark fly-in has finished.
    #[must_use]
    pub fn label_transition(self) -> Transition {
        Transition::new(
            Duration::from_millis(self.mark_delay_ms.saturating_add(self.mark_duration_ms)),
            Duration::from_millis(self.label_fade_ms),
            Easing::Linear,
        )
    }

    #[must_use]
    pub fn hover_transition(self) -> Transition {
        Transition::new(
            Duration::ZERO,
            Duration::from_millis(self.hover_transition_ms),
            Easing::CubicInOut,
        )
    }
}

/// One scheduled entrance sequence, advanced by the host clock.
///
/// Dropping the timeline abandons the sequence; nothing else holds on to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceTimeline {
    marks: Transition,
    labels: Transition,
    elapsed: Duration,
}

impl EntranceTimeline {
    #[must_use]
    pub fn new(timing: EntranceTiming) -> Self {
        Self {
            marks: timing.mark_transition(),
            labels: timing.label_transition(),
            elapsed: Duration::ZERO,
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Eased fly-in progress shared by every mark.
    #[must_use]
    pub fn mark_progress(&self) -> f64 {
        self.marks.progress(self.elapsed)
    }

    #[must_use]
    pub fn label_opacity(&self) -> f64 {
        self.labels.progress(self.elapsed)
    }

    #[must_use]
    pub fn total_duration(&self) -> Duration {
        self.marks.end().max(self.labels.end())
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.total_duration()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{AnimationState, EntranceTiming, EntranceTimeline};

    #[test]
    fn entrance_flag_flips_once() {
        let mut state = AnimationState::default();
        assert!(!state.has_played_entrance());
        assert!(state.begin_entrance());
        assert!(!state.begin_entrance());
        assert!(state.has_played_entrance());
    }

    #[test]
    fn labels_stay_hidden_until_marks_land() {
        let mut timeline = EntranceTimeline::new(EntranceTiming::default());
        timeline.advance(Duration::from_millis(2499));
        assert!(timeline.mark_progress() > 0.99);
        assert_eq!(timeline.label_opacity(), 0.0);

        timeline.advance(Duration::from_millis(501));
        assert!((timeline.label_opacity() - 0.5).abs() < 1e-3);
        assert!(!timeline.is_complete());

        timeline.advance(Duration::from_millis(500));
        assert!(timeline.is_complete());
        assert_eq!(timeline.mark_progress(), 1.0);
        assert_eq!(timeline.label_opacity(), 1.0);
    }

    #[test]
    fn label_delay_saturates_instead_of_overflowing() {
        let timing = EntranceTiming {
            mark_delay_ms: u64::MAX,
            ..EntranceTiming::default()
        };
        let labels = timing.label_transition();
        assert_eq!(labels.delay, Duration::from_millis(u64::MAX));
        assert!(labels.delay >= timing.mark_transition().delay);
    }
}
