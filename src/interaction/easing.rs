use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Easing curves used by entrance and hover transitions.
///
/// Formulas match d3-ease so timings read the same as the web version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    /// Exponential ease-out: fast start, decelerates toward the end.
    ExpOut,
    /// Symmetric cubic ease-in-out.
    CubicInOut,
}

impl Easing {
    /// Maps normalized time `t` onto eased progress; `t` is clamped to `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::ExpOut => 1.0 - tpmt(t),
            Self::CubicInOut => {
                let doubled = t * 2.0;
                if doubled <= 1.0 {
                    doubled * doubled * doubled / 2.0
                } else {
                    let shifted = doubled - 2.0;
                    (shifted * shifted * shifted + 2.0) / 2.0
                }
            }
        }
    }
}

// 2^(-10x), rescaled so tpmt(0) = 1 and tpmt(1) = 0 exactly.
fn tpmt(x: f64) -> f64 {
    ((-10.0 * x).exp2() - 0.000_976_562_5) * 1.000_977_517_106_549_4
}

/// Delayed, eased transition over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub delay: Duration,
    pub duration: Duration,
    pub easing: Easing,
}

impl Transition {
    #[must_use]
    pub const fn new(delay: Duration, duration: Duration, easing: Easing) -> Self {
        Self {
            delay,
            duration,
            easing,
        }
    }

    /// Eased progress in `[0, 1]` after `elapsed` time since scheduling.
    ///
    /// Holds at 0 during the delay; a zero duration jumps straight to 1.
    #[must_use]
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if elapsed < self.delay {
            return 0.0;
        }
        if self.duration.is_zero() {
            return 1.0;
        }
        let running = (elapsed - self.delay).as_secs_f64();
        self.easing.apply(running / self.duration.as_secs_f64())
    }

    #[must_use]
    pub fn end(&self) -> Duration {
        self.delay + self.duration
    }

    #[must_use]
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.end()
    }
}

#[must_use]
pub fn lerp(from: f64, to: f64, progress: f64) -> f64 {
    from + (to - from) * progress
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{Easing, Transition};

    #[test]
    fn easing_curves_hit_both_endpoints() {
        for easing in [Easing::Linear, Easing::ExpOut, Easing::CubicInOut] {
            assert!(easing.apply(0.0).abs() < 1e-12, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-12, "{easing:?} at 1");
        }
    }

    #[test]
    fn exp_out_decelerates() {
        let early = Easing::ExpOut.apply(0.1);
        let late = Easing::ExpOut.apply(0.9) - Easing::ExpOut.apply(0.8);
        assert!(early > 0.4);
        assert!(late < 0.01);
    }

    #[test]
    fn transition_holds_during_delay_then_completes() {
        let transition = Transition::new(
            Duration::from_millis(500),
            Duration::from_millis(2000),
            Easing::Linear,
        );
        assert_eq!(transition.progress(Duration::from_millis(499)), 0.0);
        assert!((transition.progress(Duration::from_millis(1500)) - 0.5).abs() < 1e-12);
        assert_eq!(transition.progress(Duration::from_millis(3000)), 1.0);
        assert!(transition.is_finished(Duration::from_millis(2500)));
        assert!(!transition.is_finished(Duration::from_millis(2499)));
    }

    #[test]
    fn zero_duration_jumps_after_delay() {
        let transition = Transition::new(Duration::from_millis(10), Duration::ZERO, Easing::ExpOut);
        assert_eq!(transition.progress(Duration::from_millis(9)), 0.0);
        assert_eq!(transition.progress(Duration::from_millis(10)), 1.0);
    }
}
