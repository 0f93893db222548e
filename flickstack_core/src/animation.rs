// Copyright 2026 the Flickstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timed animation of scalar fields.
//!
//! An [`AnimatedValue`] holds a current value and at most one in-flight
//! [`Tween`]. Starting a tween or setting the value directly supersedes
//! whatever was in flight: the field's generation is bumped and the old tween
//! is dropped without completing. Completion is reported from
//! [`advance`](AnimatedValue::advance) together with the [`AnimationToken`]
//! that started the tween, so callers can ignore completions that belong to
//! an older start.

use crate::time::{Duration, HostTime};

/// Easing curve applied to normalized progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Quadratic ease-in, `t * t`.
    Quad,
}

impl Easing {
    /// Maps progress in `0.0..=1.0` onto the curve.
    #[inline]
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Quad => t * t,
        }
    }
}

/// Linearly maps `value` from `input` onto `output`, extrapolating past either
/// end.
///
/// A degenerate input range maps everything to `output[0]`.
#[must_use]
pub fn interpolate(value: f64, input: [f64; 2], output: [f64; 2]) -> f64 {
    let span = input[1] - input[0];
    if span == 0.0 {
        return output[0];
    }
    let t = (value - input[0]) / span;
    output[0] + t * (output[1] - output[0])
}

/// Identifies one start of an animation on one field.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct AnimationToken(u32);

impl AnimationToken {
    /// Returns the raw generation (for diagnostics only).
    #[inline]
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.0
    }
}

/// A single timed transition from one value to another.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    /// Value at `start`.
    pub from: f64,
    /// Value once `duration` has elapsed.
    pub to: f64,
    /// Host time the tween started.
    pub start: HostTime,
    /// Length of the tween.
    pub duration: Duration,
    /// Easing curve.
    pub easing: Easing,
}

impl Tween {
    /// Samples the tween at `now`, returning the value and whether the tween
    /// has finished.
    #[must_use]
    pub fn sample(&self, now: HostTime) -> (f64, bool) {
        let elapsed = now.saturating_duration_since(self.start);
        let t = elapsed.fraction_of(self.duration);
        if t >= 1.0 {
            return (self.to, true);
        }
        let eased = self.easing.apply(t);
        (self.from + (self.to - self.from) * eased, false)
    }
}

/// What a single [`AnimatedValue::advance`] call did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Advance {
    /// The value changed.
    pub changed: bool,
    /// A tween reached its end on this call.
    pub completed: Option<AnimationToken>,
}

/// A scalar field that can be set directly or animated over time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimatedValue {
    value: f64,
    tween: Option<Tween>,
    generation: u32,
}

impl AnimatedValue {
    /// Creates a settled value.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self {
            value,
            tween: None,
            generation: 0,
        }
    }

    /// Current value.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Whether a tween is in flight.
    #[inline]
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// End value of the in-flight tween, if any.
    #[inline]
    #[must_use]
    pub fn target(&self) -> Option<f64> {
        self.tween.map(|t| t.to)
    }

    /// Token of the most recent start.
    #[inline]
    #[must_use]
    pub const fn token(&self) -> AnimationToken {
        AnimationToken(self.generation)
    }

    /// Returns whether `token` belongs to the most recent start.
    #[inline]
    #[must_use]
    pub const fn is_current(&self, token: AnimationToken) -> bool {
        token.0 == self.generation
    }

    /// Sets the value immediately, superseding any in-flight tween.
    ///
    /// Returns whether the value changed.
    pub fn set(&mut self, value: f64) -> bool {
        self.supersede();
        let changed = self.value.to_bits() != value.to_bits();
        self.value = value;
        changed
    }

    /// Starts a tween from the current value to `to`, superseding any
    /// in-flight tween.
    pub fn animate_to(
        &mut self,
        to: f64,
        now: HostTime,
        duration: Duration,
        easing: Easing,
    ) -> AnimationToken {
        self.supersede();
        self.tween = Some(Tween {
            from: self.value,
            to,
            start: now,
            duration,
            easing,
        });
        self.token()
    }

    /// Advances the in-flight tween to `now`.
    pub fn advance(&mut self, now: HostTime) -> Advance {
        let Some(tween) = self.tween else {
            return Advance::default();
        };
        let (value, done) = tween.sample(now);
        let changed = self.value.to_bits() != value.to_bits();
        self.value = value;
        if done {
            self.tween = None;
            Advance {
                changed,
                completed: Some(self.token()),
            }
        } else {
            Advance {
                changed,
                completed: None,
            }
        }
    }

    fn supersede(&mut self) {
        self.tween = None;
        self.generation = self.generation.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints() {
        for easing in [Easing::Linear, Easing::Quad] {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?} starts at 0");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?} ends at 1");
        }
        assert_eq!(Easing::Quad.apply(0.5), 0.25);
        assert_eq!(Easing::Linear.apply(2.0), 1.0, "progress is clamped");
    }

    #[test]
    fn interpolate_extrapolates() {
        let input = [0.0, 800.0];
        let output = [0.0, 1.0];
        assert_eq!(interpolate(400.0, input, output), 0.5);
        assert_eq!(interpolate(-800.0, input, output), -1.0);
        assert_eq!(interpolate(-400.0, [0.0, -800.0], output), 0.5);
        assert_eq!(interpolate(5.0, [3.0, 3.0], [7.0, 9.0]), 7.0);
    }

    #[test]
    fn tween_runs_to_completion() {
        let mut v = AnimatedValue::new(0.0);
        let token = v.animate_to(100.0, HostTime(1000), Duration(100), Easing::Linear);
        assert!(v.is_animating());
        assert_eq!(v.target(), Some(100.0));

        let mid = v.advance(HostTime(1050));
        assert!(mid.changed);
        assert_eq!(mid.completed, None);
        assert_eq!(v.value(), 50.0);

        let end = v.advance(HostTime(1200));
        assert_eq!(end.completed, Some(token));
        assert_eq!(v.value(), 100.0);
        assert!(!v.is_animating());

        assert_eq!(v.advance(HostTime(1300)), Advance::default(), "idle after completion");
    }

    #[test]
    fn quad_tween_lags_linear() {
        let mut v = AnimatedValue::new(0.0);
        let _ = v.animate_to(100.0, HostTime(0), Duration(100), Easing::Quad);
        let _ = v.advance(HostTime(50));
        assert_eq!(v.value(), 25.0);
    }

    #[test]
    fn new_start_supersedes_old() {
        let mut v = AnimatedValue::new(0.0);
        let first = v.animate_to(100.0, HostTime(0), Duration(100), Easing::Linear);
        let _ = v.advance(HostTime(50));
        let second = v.animate_to(0.0, HostTime(50), Duration(100), Easing::Linear);
        assert_ne!(first, second);
        assert!(!v.is_current(first), "first start is stale");

        let done = v.advance(HostTime(500));
        assert_eq!(done.completed, Some(second));
        assert_eq!(v.value(), 0.0);
    }

    #[test]
    fn set_cancels_without_completion() {
        let mut v = AnimatedValue::new(0.0);
        let token = v.animate_to(100.0, HostTime(0), Duration(100), Easing::Linear);
        assert!(v.set(-20.0), "value changed");
        assert!(!v.is_current(token));
        assert!(!v.is_animating());
        assert_eq!(v.advance(HostTime(1000)).completed, None);
        assert!(!v.set(-20.0), "same value is not a change");
    }

    #[test]
    fn zero_duration_completes_on_next_advance() {
        let mut v = AnimatedValue::new(1.0);
        let token = v.animate_to(0.9, HostTime(10), Duration::ZERO, Easing::Linear);
        let step = v.advance(HostTime(10));
        assert_eq!(step.completed, Some(token));
        assert_eq!(v.value(), 0.9);
    }
}
