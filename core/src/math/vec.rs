//! Euclidean vectors of two, three, and four components.

use core::fmt::{self, Debug, Formatter};
use core::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, Neg, Sub, SubAssign};

//
// Types
//

/// A two-component vector.
#[derive(Copy, Clone, Default, PartialEq)]
#[repr(transparent)]
pub struct Vec2(pub [f32; 2]);

/// A three-component vector.
#[derive(Copy, Clone, Default, PartialEq)]
#[repr(transparent)]
pub struct Vec3(pub [f32; 3]);

/// A four-component vector, used chiefly for homogeneous coordinates.
#[derive(Copy, Clone, Default, PartialEq)]
#[repr(transparent)]
pub struct Vec4(pub [f32; 4]);

//
// Free fns
//

/// Returns a 2-vector with components `x` and `y`.
pub const fn vec2(x: f32, y: f32) -> Vec2 {
    Vec2([x, y])
}

/// Returns a 3-vector with components `x`, `y`, and `z`.
pub const fn vec3(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3([x, y, z])
}

/// Returns a 4-vector with components `x`, `y`, `z`, and `w`.
pub const fn vec4(x: f32, y: f32, z: f32, w: f32) -> Vec4 {
    Vec4([x, y, z, w])
}

//
// Inherent impls
//

impl Vec2 {
    /// A vector with all components zero.
    pub const ZERO: Self = Self([0.0; 2]);

    #[inline]
    pub const fn x(&self) -> f32 {
        self.0[0]
    }
    #[inline]
    pub const fn y(&self) -> f32 {
        self.0[1]
    }
}

impl Vec3 {
    /// A vector with all components zero.
    pub const ZERO: Self = Self([0.0; 3]);
    /// The positive x axis.
    pub const X: Self = Self([1.0, 0.0, 0.0]);
    /// The positive y axis.
    pub const Y: Self = Self([0.0, 1.0, 0.0]);
    /// The positive z axis.
    pub const Z: Self = Self([0.0, 0.0, 1.0]);

    #[inline]
    pub const fn x(&self) -> f32 {
        self.0[0]
    }
    #[inline]
    pub const fn y(&self) -> f32 {
        self.0[1]
    }
    #[inline]
    pub const fn z(&self) -> f32 {
        self.0[2]
    }

    /// Returns the dot product of `self` and `other`.
    pub fn dot(&self, other: &Self) -> f32 {
        let [x, y, z] = self.0;
        let [u, v, w] = other.0;
        x * u + y * v + z * w
    }

    /// Returns the cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both inputs, with its direction
    /// given by the right-hand rule.
    ///
    /// # Examples
    /// ```
    /// # use rampart_core::math::vec::{vec3, Vec3};
    /// assert_eq!(Vec3::X.cross(&Vec3::Y), Vec3::Z);
    /// ```
    pub fn cross(&self, other: &Self) -> Self {
        let [x, y, z] = self.0;
        let [u, v, w] = other.0;
        Self([y * w - z * v, z * u - x * w, x * v - y * u])
    }

    /// Returns the length (Euclidean norm) of `self`.
    pub fn len(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Returns `self` scaled to unit length.
    ///
    /// # Panics
    /// In debug builds, if `self` is (approximately) the zero vector.
    pub fn normalize(&self) -> Self {
        let len = self.len();
        debug_assert!(len > 1e-8, "cannot normalize a zero-length vector");
        *self / len
    }
}

impl Vec4 {
    #[inline]
    pub const fn x(&self) -> f32 {
        self.0[0]
    }
    #[inline]
    pub const fn y(&self) -> f32 {
        self.0[1]
    }
    #[inline]
    pub const fn z(&self) -> f32 {
        self.0[2]
    }
    #[inline]
    pub const fn w(&self) -> f32 {
        self.0[3]
    }

    /// Returns the first three components divided by the fourth.
    pub fn project(&self) -> Vec3 {
        let [x, y, z, w] = self.0;
        vec3(x / w, y / w, z / w)
    }
}

//
// Foreign trait impls
//

/// Implements componentwise operators for a vector type.
macro_rules! impl_vec_ops {
    ($ty:ty, $n:literal) => {
        impl Add for $ty {
            type Output = Self;
            #[inline]
            fn add(mut self, rhs: Self) -> Self {
                self += rhs;
                self
            }
        }
        impl AddAssign for $ty {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                for i in 0..$n {
                    self.0[i] += rhs.0[i];
                }
            }
        }
        impl Sub for $ty {
            type Output = Self;
            #[inline]
            fn sub(mut self, rhs: Self) -> Self {
                self -= rhs;
                self
            }
        }
        impl SubAssign for $ty {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                for i in 0..$n {
                    self.0[i] -= rhs.0[i];
                }
            }
        }
        impl Neg for $ty {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                Self(self.0.map(|c| -c))
            }
        }
        impl Mul<f32> for $ty {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: f32) -> Self {
                Self(self.0.map(|c| c * rhs))
            }
        }
        impl Div<f32> for $ty {
            type Output = Self;
            #[inline]
            fn div(self, rhs: f32) -> Self {
                Self(self.0.map(|c| c / rhs))
            }
        }
        impl Index<usize> for $ty {
            type Output = f32;
            #[inline]
            fn index(&self, i: usize) -> &f32 {
                &self.0[i]
            }
        }
        impl IndexMut<usize> for $ty {
            #[inline]
            fn index_mut(&mut self, i: usize) -> &mut f32 {
                &mut self.0[i]
            }
        }
        impl Debug for $ty {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                write!(f, "{}{:?}", stringify!($ty), self.0)
            }
        }
    };
}

impl_vec_ops!(Vec2, 2);
impl_vec_ops!(Vec3, 3);
impl_vec_ops!(Vec4, 4);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn componentwise_arithmetic() {
        let v = vec3(1.0, 2.0, 3.0);
        let u = vec3(4.0, 5.0, 6.0);

        assert_eq!(v + u, vec3(5.0, 7.0, 9.0));
        assert_eq!(u - v, vec3(3.0, 3.0, 3.0));
        assert_eq!(-v, vec3(-1.0, -2.0, -3.0));
        assert_eq!(v * 2.0, vec3(2.0, 4.0, 6.0));
        assert_eq!(u / 2.0, vec3(2.0, 2.5, 3.0));
    }

    #[test]
    fn dot_product() {
        assert_eq!(Vec3::X.dot(&Vec3::Y), 0.0);
        assert_eq!(vec3(1.0, 2.0, 3.0).dot(&vec3(4.0, 5.0, 6.0)), 32.0);
    }

    #[test]
    fn cross_product_follows_right_hand_rule() {
        assert_eq!(Vec3::X.cross(&Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::Y.cross(&Vec3::Z), Vec3::X);
        assert_eq!(Vec3::Y.cross(&Vec3::X), -Vec3::Z);
    }

    #[test]
    fn length_and_normalize() {
        let v = vec3(3.0, 0.0, 4.0);
        assert_eq!(v.len(), 5.0);
        assert_eq!(v.normalize(), vec3(0.6, 0.0, 0.8));
    }

    #[test]
    fn homogeneous_projection() {
        assert_eq!(vec4(2.0, 4.0, 6.0, 2.0).project(), vec3(1.0, 2.0, 3.0));
    }

    #[test]
    fn indexing() {
        let mut v = vec3(1.0, 2.0, 3.0);
        v[2] += 1.0;
        assert_eq!(v[0], 1.0);
        assert_eq!(v[2], 4.0);
    }
}
