//! Time-driven animation state.
//!
//! Small bits of per-frame mutable state: a scalar that ping-pongs
//! between two bounds, an angle that spins and wraps, and a point
//! orbiting on a growing circle. Each is advanced independently by the
//! frame time delta; there are no relationships between instances.

use crate::math::{Angle, Vec2, vec2};

//
// Types
//

/// A scalar that oscillates between two bounds.
///
/// Each step advances the value by `rate · dt` and clamps it to
/// `[min, max]`. If the unclamped step would cross either bound, the
/// rate's sign flips for subsequent steps, producing a ping-pong motion.
#[derive(Copy, Clone, Debug)]
pub struct Oscillator {
    value: f32,
    rate: f32,
    min: f32,
    max: f32,
}

/// An angle advancing at a fixed rate, wrapped modulo a full turn.
///
/// Unlike [`Oscillator`], the motion never reverses; the angle simply
/// wraps back around after a full revolution.
#[derive(Copy, Clone, Debug)]
pub struct Spinner {
    angle: Angle,
    /// Angular rate per second.
    pub rate: Angle,
}

/// A point following a parametric circle, `(r·cos θ, r·sin θ)`.
///
/// The angle advances at a fixed rate and the radius grows monotonically;
/// neither is bounded. Purely illustrative motion, not a simulation.
#[derive(Copy, Clone, Debug)]
pub struct Orbiter {
    pub radius: f32,
    pub angle: Angle,
    /// Angular rate per second.
    pub rate: Angle,
    /// Radial growth per second.
    pub growth: f32,
}

//
// Inherent impls
//

impl Oscillator {
    /// Creates an oscillator with initial value `value`, signed rate
    /// `rate` (units per second), and bounds `min..=max`.
    ///
    /// # Panics
    /// If `min > max`.
    pub fn new(value: f32, rate: f32, min: f32, max: f32) -> Self {
        assert!(min <= max, "oscillator bounds out of order: {min} > {max}");
        Self { value, rate, min, max }
    }

    /// The current value, always within `[min, max]`.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// The current signed rate.
    pub fn rate(&self) -> f32 {
        self.rate
    }

    /// Advances the value by `dt` seconds and returns it.
    ///
    /// # Examples
    /// ```
    /// # use rampart_core::anim::Oscillator;
    /// let mut osc = Oscillator::new(1.0, 1.0, 0.0, 1.5);
    /// assert_eq!(osc.advance(1.0), 1.5); // clamped at the bound
    /// assert_eq!(osc.advance(1.0), 0.5); // now moving back down
    /// ```
    pub fn advance(&mut self, dt: f32) -> f32 {
        let next = self.value + self.rate * dt;
        if next >= self.max || next <= self.min {
            self.rate = -self.rate;
        }
        self.value = next.clamp(self.min, self.max);
        self.value
    }
}

impl Spinner {
    /// Creates a spinner at `angle`, advancing by `rate` per second.
    pub fn new(angle: Angle, rate: Angle) -> Self {
        Self { angle, rate }
    }

    /// The current angle, always within one full turn of zero.
    pub fn angle(&self) -> Angle {
        self.angle
    }

    /// Advances the angle by `dt` seconds, wrapping modulo a full turn.
    pub fn advance(&mut self, dt: f32) -> Angle {
        self.angle =
            (self.angle + self.rate * dt).wrap(Angle::ZERO, Angle::FULL);
        self.angle
    }
}

impl Orbiter {
    /// The current position on the circle.
    pub fn pos(&self) -> Vec2 {
        let (sin, cos) = self.angle.sin_cos();
        vec2(self.radius * cos, self.radius * sin)
    }

    /// Advances the angle and grows the radius by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.angle += self.rate * dt;
        self.radius += self.growth * dt;
    }
}
