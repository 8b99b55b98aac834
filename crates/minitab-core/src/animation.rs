//! Easing-based property animation.
//!
//! Every animatable visual property (a position, an alpha, a color) is an
//! [`AnimatedProperty`]. Starting a new animation on a property replaces the
//! in-flight one and continues from the current interpolated value, so the
//! most recent write always determines the end state. The host drives time
//! by calling `tick(dt)` from its frame loop.

use crate::Color;

// =============================================================================
// Easing Functions
// =============================================================================

/// Standard easing curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation (no easing)
    #[default]
    Linear,
    /// Ease in (slow start)
    EaseIn,
    /// Ease out (slow end)
    EaseOut,
    /// Ease in and out (slow start and end)
    EaseInOut,
}

impl Easing {
    /// Apply easing function to a normalized time value (0.0 to 1.0).
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => (1.0 - t).mul_add(-(1.0 - t), 1.0),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0f64).mul_add(t, 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

// =============================================================================
// Interpolate Trait
// =============================================================================

/// Trait for types that can be interpolated.
pub trait Interpolate: Copy {
    /// Interpolate between two values.
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        (to - from).mul_add(t, *from)
    }
}

impl Interpolate for f32 {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        (*to - *from).mul_add(t as Self, *from)
    }
}

impl Interpolate for Color {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        from.lerp(to, t as f32)
    }
}

// =============================================================================
// Tween - a single timed transition
// =============================================================================

/// A timed transition from one value to another.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween<T: Interpolate> {
    /// Start value
    pub from: T,
    /// End value
    pub to: T,
    /// Total duration in seconds
    pub duration: f64,
    /// Elapsed time in seconds
    pub elapsed: f64,
    /// Easing function
    pub easing: Easing,
}

impl<T: Interpolate> Tween<T> {
    /// Create a new tween with ease-in-out easing.
    #[must_use]
    pub const fn new(from: T, to: T, duration: f64) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
            easing: Easing::EaseInOut,
        }
    }

    /// Set easing function.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Progress from 0.0 to 1.0.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration > 0.0 {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    /// Get current value.
    #[must_use]
    pub fn value(&self) -> T {
        T::interpolate(&self.from, &self.to, self.easing.apply(self.progress()))
    }

    /// Whether the tween has run its full duration.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advance by `dt` seconds.
    pub fn update(&mut self, dt: f64) {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration.max(0.0));
    }
}

// =============================================================================
// AnimatedProperty - a value that may be mid-transition
// =============================================================================

/// What happened to a property during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No animation was running
    Idle,
    /// The animation is still running
    Running,
    /// The animation reached its target during this tick
    Completed,
}

/// Timing for one animated change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    /// Duration in seconds
    pub duration: f64,
    /// Easing curve
    pub easing: Easing,
}

impl Timing {
    /// Create a timing.
    #[must_use]
    pub const fn new(duration: f64, easing: Easing) -> Self {
        Self { duration, easing }
    }
}

/// A visual property with an optional in-flight transition.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedProperty<T: Interpolate> {
    resting: T,
    tween: Option<Tween<T>>,
}

impl<T: Interpolate + PartialEq> AnimatedProperty<T> {
    /// Create a property resting at `value`.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self {
            resting: value,
            tween: None,
        }
    }

    /// Current, possibly interpolated, value.
    #[must_use]
    pub fn value(&self) -> T {
        self.tween.as_ref().map_or(self.resting, Tween::value)
    }

    /// The value the property will settle at.
    #[must_use]
    pub fn target(&self) -> T {
        self.tween.as_ref().map_or(self.resting, |t| t.to)
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Jump to `value`, dropping any in-flight transition.
    pub fn set(&mut self, value: T) {
        self.resting = value;
        self.tween = None;
    }

    /// Start a transition from the current value to `target`.
    ///
    /// Replaces any in-flight transition. A non-positive duration jumps.
    pub fn animate_to(&mut self, target: T, timing: Timing) {
        if timing.duration <= 0.0 {
            self.set(target);
            return;
        }
        let from = self.value();
        self.resting = target;
        self.tween = Some(Tween::new(from, target, timing.duration).with_easing(timing.easing));
    }

    /// Animate when `timing` is given, otherwise jump.
    pub fn transition(&mut self, target: T, timing: Option<Timing>) {
        match timing {
            Some(timing) => self.animate_to(target, timing),
            None => self.set(target),
        }
    }

    /// Advance the in-flight transition by `dt` seconds.
    pub fn tick(&mut self, dt: f64) -> TickOutcome {
        let Some(tween) = self.tween.as_mut() else {
            return TickOutcome::Idle;
        };
        tween.update(dt);
        if tween.is_complete() {
            self.resting = tween.to;
            self.tween = None;
            TickOutcome::Completed
        } else {
            TickOutcome::Running
        }
    }
}

impl<T: Interpolate + PartialEq + Default> Default for AnimatedProperty<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const QUICK: Timing = Timing::new(0.15, Easing::EaseInOut);

    #[test]
    fn test_easing_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
        ] {
            assert!(easing.apply(0.0).abs() < 0.001, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_easing_shapes() {
        assert!(Easing::EaseIn.apply(0.5) < 0.5);
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_easing_clamps_input() {
        assert!((Easing::Linear.apply(-0.5)).abs() < 0.001);
        assert!((Easing::Linear.apply(1.5) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_tween_progress_and_completion() {
        let mut tween = Tween::new(0.0f32, 10.0, 0.2).with_easing(Easing::Linear);
        tween.update(0.1);
        assert!((tween.value() - 5.0).abs() < 0.001);
        assert!(!tween.is_complete());
        tween.update(0.5);
        assert!(tween.is_complete());
        assert_eq!(tween.value(), 10.0);
    }

    #[test]
    fn test_zero_duration_tween_is_at_target() {
        let tween = Tween::new(1.0f64, 3.0, 0.0);
        assert_eq!(tween.value(), 3.0);
        assert!(tween.is_complete());
    }

    #[test]
    fn test_property_set_is_immediate() {
        let mut p = AnimatedProperty::new(12.0f32);
        p.set(5.0);
        assert_eq!(p.value(), 5.0);
        assert!(!p.is_animating());
        assert_eq!(p.tick(1.0), TickOutcome::Idle);
    }

    #[test]
    fn test_property_animates_and_completes() {
        let mut p = AnimatedProperty::new(12.0f32);
        p.animate_to(5.0, QUICK);
        assert!(p.is_animating());
        assert_eq!(p.value(), 12.0);
        assert_eq!(p.target(), 5.0);

        assert_eq!(p.tick(0.05), TickOutcome::Running);
        let mid = p.value();
        assert!(mid < 12.0 && mid > 5.0);

        assert_eq!(p.tick(0.2), TickOutcome::Completed);
        assert_eq!(p.value(), 5.0);
        assert!(!p.is_animating());
    }

    #[test]
    fn test_property_last_write_wins() {
        let mut p = AnimatedProperty::new(0.0f32);
        p.animate_to(10.0, Timing::new(1.0, Easing::Linear));
        p.tick(0.5);
        p.animate_to(-10.0, Timing::new(1.0, Easing::Linear));
        // New transition starts from the interpolated value.
        assert!((p.value() - 5.0).abs() < 0.001);
        p.tick(2.0);
        assert_eq!(p.value(), -10.0);
    }

    #[test]
    fn test_property_set_cancels_animation() {
        let mut p = AnimatedProperty::new(Color::WHITE);
        p.animate_to(Color::RED, QUICK);
        p.set(Color::BLUE);
        assert_eq!(p.value(), Color::BLUE);
        assert_eq!(p.tick(1.0), TickOutcome::Idle);
    }

    #[test]
    fn test_property_transition_without_timing_jumps() {
        let mut p = AnimatedProperty::new(0.0f32);
        p.transition(2.0, None);
        assert_eq!(p.value(), 2.0);
        p.transition(4.0, Some(QUICK));
        assert!(p.is_animating());
    }

    proptest! {
        #[test]
        fn prop_property_settles_at_target(start in -100.0f32..100.0, end in -100.0f32..100.0, duration in 0.01f64..2.0) {
            let mut p = AnimatedProperty::new(start);
            p.animate_to(end, Timing::new(duration, Easing::EaseInOut));
            p.tick(duration);
            prop_assert_eq!(p.value(), end);
            prop_assert!(!p.is_animating());
        }

        #[test]
        fn prop_linear_tween_stays_between_endpoints(from in -50.0f64..50.0, to in -50.0f64..50.0, t in 0.0f64..1.0) {
            let mut tween = Tween::new(from, to, 1.0).with_easing(Easing::Linear);
            tween.update(t);
            let v = tween.value();
            prop_assert!(v >= from.min(to) - 1e-9 && v <= from.max(to) + 1e-9);
        }
    }
}
