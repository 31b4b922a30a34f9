//! Scalar angular quantities.

use core::f32::consts::{PI, TAU};
use core::fmt::{self, Debug, Display, Formatter};
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

//
// Types
//

/// A scalar angular quantity.
///
/// Prevents confusion between degrees and radians by requiring the use of
/// one of the named constructors to create an `Angle`, as well as one of
/// the named getter methods to obtain the angle as a raw `f32` value.
#[derive(Copy, Clone, Default, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Angle(f32);

//
// Free fns and consts
//

/// Returns an angle of `a` radians.
pub const fn rads(a: f32) -> Angle {
    Angle(a)
}

/// Returns an angle of `a` degrees.
pub const fn degs(a: f32) -> Angle {
    Angle(a * RADS_PER_DEG)
}

/// Returns an angle of `a` turns.
pub const fn turns(a: f32) -> Angle {
    Angle(a * RADS_PER_TURN)
}

const RADS_PER_DEG: f32 = PI / 180.0;
const RADS_PER_TURN: f32 = TAU;

//
// Inherent impls
//

impl Angle {
    /// A zero degree angle.
    pub const ZERO: Self = Self(0.0);
    /// A 90 degree angle.
    pub const RIGHT: Self = Self(RADS_PER_TURN / 4.0);
    /// A 180 degree angle.
    pub const STRAIGHT: Self = Self(RADS_PER_TURN / 2.0);
    /// A 360 degree angle.
    pub const FULL: Self = Self(RADS_PER_TURN);

    /// Returns the value of `self` in radians.
    pub const fn to_rads(self) -> f32 {
        self.0
    }
    /// Returns the value of `self` in degrees.
    pub fn to_degs(self) -> f32 {
        self.0 / RADS_PER_DEG
    }
    /// Returns the value of `self` in turns.
    pub fn to_turns(self) -> f32 {
        self.0 / RADS_PER_TURN
    }

    /// Returns `self` clamped to the range `min..=max`.
    #[must_use]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self(self.0.clamp(min.0, max.0))
    }

    /// Returns `self` "wrapped around" to the range `min..max`.
    ///
    /// # Examples
    /// ```
    /// # use rampart_core::math::angle::{degs, Angle};
    /// let a = degs(370.0).wrap(Angle::ZERO, Angle::FULL);
    /// assert!((a.to_degs() - 10.0).abs() < 1e-4);
    /// ```
    #[must_use]
    pub fn wrap(self, min: Self, max: Self) -> Self {
        Self(min.0 + (self.0 - min.0).rem_euclid(max.0 - min.0))
    }

    /// Returns the sine of `self`.
    pub fn sin(self) -> f32 {
        self.0.sin()
    }
    /// Returns the cosine of `self`.
    pub fn cos(self) -> f32 {
        self.0.cos()
    }
    /// Simultaneously computes the sine and cosine of `self`.
    pub fn sin_cos(self) -> (f32, f32) {
        self.0.sin_cos()
    }
}

//
// Foreign trait impls
//

impl Display for Angle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.to_degs(), f)?;
        f.write_str("°")
    }
}

impl Debug for Angle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("Angle(")?;
        Display::fmt(self, f)?;
        f.write_str(")")
    }
}

impl Add for Angle {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}
impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}
impl Sub for Angle {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}
impl Neg for Angle {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}
impl Mul<f32> for Angle {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self(self.0 * rhs)
    }
}
impl Div<f32> for Angle {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self(self.0 / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_conversions() {
        assert_eq!(rads(PI).to_degs(), 180.0);
        assert_eq!(degs(180.0).to_rads(), PI);
        assert_eq!(degs(360.0).to_turns(), 1.0);
        assert_eq!(turns(1.0).to_rads(), TAU);
    }

    #[test]
    fn clamping() {
        let min = degs(-45.0);
        let max = degs(45.0);
        assert_eq!(degs(60.0).clamp(min, max), max);
        assert_eq!(degs(10.0).clamp(min, max), degs(10.0));
        assert_eq!(degs(-50.0).clamp(min, max), min);
    }

    #[test]
    fn wrapping() {
        let a = degs(370.0).wrap(Angle::ZERO, Angle::FULL);
        assert!((a.to_degs() - 10.0).abs() < 1e-4);

        let a = degs(540.0).wrap(Angle::ZERO, Angle::FULL);
        assert!((a.to_degs() - 180.0).abs() < 1e-4);

        // Already in range: unchanged (up to rounding)
        let a = degs(90.0).wrap(Angle::ZERO, Angle::FULL);
        assert!((a.to_degs() - 90.0).abs() < 1e-4);
    }

    #[test]
    fn trig_functions() {
        assert_eq!(degs(0.0).sin(), 0.0);
        assert_eq!(degs(0.0).cos(), 1.0);
        assert!((degs(30.0).sin() - 0.5).abs() < 1e-6);

        let (sin, cos) = degs(90.0).sin_cos();
        assert!((sin - 1.0).abs() < 1e-6);
        assert!(cos.abs() < 1e-6);
    }

    #[test]
    fn arithmetic() {
        let a = degs(30.0) + degs(60.0);
        assert!((a.to_degs() - 90.0).abs() < 1e-4);
        assert_eq!(Angle::STRAIGHT - Angle::RIGHT, Angle::RIGHT);
        assert_eq!(Angle::RIGHT * 2.0, Angle::STRAIGHT);
        assert_eq!(Angle::FULL / 2.0, Angle::STRAIGHT);
        assert_eq!(-degs(45.0), degs(-45.0));
    }
}
