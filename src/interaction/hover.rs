use std::time::Duration;

use indexmap::IndexMap;

use super::easing::{Transition, lerp};

#[derive(Debug, Clone, Copy, PartialEq)]
struct RadiusTween {
    from: f64,
    to: f64,
    transition: Transition,
    elapsed: Duration,
}

impl RadiusTween {
    fn value(&self) -> f64 {
        lerp(self.from, self.to, self.transition.progress(self.elapsed))
    }

    fn is_finished(&self) -> bool {
        self.transition.is_finished(self.elapsed)
    }
}

/// Pointer hover target plus the radius tweens of marks entering or leaving
/// the hovered state.
///
/// Keyed by term so the state survives full redraws of the marks.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HoverState {
    hovered: Option<String>,
    tweens: IndexMap<String, RadiusTween>,
}

impl HoverState {
    #[must_use]
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    /// Starts hovering `term`. Returns the previously hovered term when the
    /// target changed; re-entering the current target is a no-op.
    pub fn enter(
        &mut self,
        term: &str,
        base_radius: f64,
        hover_radius: f64,
        transition: Transition,
    ) -> Option<String> {
        if self.hovered.as_deref() == Some(term) {
            return None;
        }

        let previous = self.release(base_radius, transition);
        let from = self.radius_for(term).unwrap_or(base_radius);
        self.tweens.insert(
            term.to_owned(),
            RadiusTween {
                from,
                to: hover_radius,
                transition,
                elapsed: Duration::ZERO,
            },
        );
        self.hovered = Some(term.to_owned());
        previous
    }

    /// Stops hovering. Returns the released term, if any.
    pub fn leave(&mut self, base_radius: f64, transition: Transition) -> Option<String> {
        self.release(base_radius, transition)
    }

    fn release(&mut self, base_radius: f64, transition: Transition) -> Option<String> {
        let previous = self.hovered.take()?;
        let from = self.radius_for(&previous).unwrap_or(base_radius);
        self.tweens.insert(
            previous.clone(),
            RadiusTween {
                from,
                to: base_radius,
                transition,
                elapsed: Duration::ZERO,
            },
        );
        Some(previous)
    }

    /// Current radius override for `term`, or `None` when it renders at its
    /// layout radius.
    #[must_use]
    pub fn radius_for(&self, term: &str) -> Option<f64> {
        self.tweens.get(term).map(RadiusTween::value)
    }

    pub fn advance(&mut self, delta: Duration) {
        for tween in self.tweens.values_mut() {
            tween.elapsed = tween.elapsed.saturating_add(delta);
        }
        let hovered = self.hovered.as_deref();
        self.tweens
            .retain(|term, tween| Some(term.as_str()) == hovered || !tween.is_finished());
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.tweens.values().any(|tween| !tween.is_finished())
    }
}
