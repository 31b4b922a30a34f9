//! Matrices and linear transforms.

use core::fmt::{self, Debug, Formatter};
use core::ops::Range;

use super::angle::Angle;
use super::vec::{Vec3, Vec4, vec4};

//
// Types
//

/// A 4×4 row-major matrix of `f32`s.
///
/// Values transform column vectors: `m.apply(v)` computes `M · v`.
#[derive(Copy, Clone, PartialEq)]
pub struct Mat4(pub [[f32; 4]; 4]);

//
// Inherent impls
//

impl Mat4 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    /// Creates a matrix from its rows.
    pub const fn new(rows: [[f32; 4]; 4]) -> Self {
        Self(rows)
    }

    /// Applies `self` to a 4-vector, computing `M · v`.
    pub fn apply(&self, v: &Vec4) -> Vec4 {
        let dot = |row: &[f32; 4]| {
            row[0] * v.x() + row[1] * v.y() + row[2] * v.z() + row[3] * v.w()
        };
        let [r0, r1, r2, r3] = &self.0;
        vec4(dot(r0), dot(r1), dot(r2), dot(r3))
    }

    /// Applies `self` to a point, with an implicit fourth component of 1.
    pub fn apply_pt(&self, p: &Vec3) -> Vec4 {
        self.apply(&vec4(p.x(), p.y(), p.z(), 1.0))
    }

    /// Returns the composite transform that applies `self` first and
    /// `next` second.
    ///
    /// # Examples
    /// ```
    /// # use rampart_core::math::mat::{scale, translate};
    /// # use rampart_core::math::vec::vec3;
    /// let m = scale(vec3(2.0, 2.0, 2.0)).then(&translate(vec3(1.0, 0.0, 0.0)));
    /// assert_eq!(m.apply_pt(&vec3(1.0, 1.0, 1.0)).project(), vec3(3.0, 2.0, 2.0));
    /// ```
    #[must_use]
    pub fn then(&self, next: &Self) -> Self {
        next.matmul(self)
    }

    /// Returns the matrix product `self · rhs`.
    fn matmul(&self, rhs: &Self) -> Self {
        let mut out = [[0.0; 4]; 4];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, el) in row.iter_mut().enumerate() {
                *el = (0..4).map(|k| self.0[i][k] * rhs.0[k][j]).sum();
            }
        }
        Self(out)
    }
}

//
// Free fns
//

/// Returns a matrix translating by `t`.
pub const fn translate(t: Vec3) -> Mat4 {
    let [x, y, z] = t.0;
    Mat4::new([
        [1.0, 0.0, 0.0, x],
        [0.0, 1.0, 0.0, y],
        [0.0, 0.0, 1.0, z],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Returns a matrix scaling by the components of `s`.
pub const fn scale(s: Vec3) -> Mat4 {
    let [x, y, z] = s.0;
    Mat4::new([
        [x, 0.0, 0.0, 0.0],
        [0.0, y, 0.0, 0.0],
        [0.0, 0.0, z, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Returns a matrix rotating about the x axis by `a`.
pub fn rotate_x(a: Angle) -> Mat4 {
    let (sin, cos) = a.sin_cos();
    Mat4::new([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, cos, -sin, 0.0],
        [0.0, sin, cos, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Returns a matrix rotating about the y axis by `a`.
pub fn rotate_y(a: Angle) -> Mat4 {
    let (sin, cos) = a.sin_cos();
    Mat4::new([
        [cos, 0.0, sin, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [-sin, 0.0, cos, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Returns a matrix rotating about the z axis by `a`.
pub fn rotate_z(a: Angle) -> Mat4 {
    let (sin, cos) = a.sin_cos();
    Mat4::new([
        [cos, -sin, 0.0, 0.0],
        [sin, cos, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Returns a perspective projection matrix.
///
/// `fovy` is the vertical field of view, `aspect` the width-to-height
/// ratio of the viewport, and `near_far` the distances of the near and
/// far clip planes. Eye space looks down the negative z axis; after the
/// perspective divide, visible z values lie in [-1, 1].
pub fn perspective(fovy: Angle, aspect: f32, near_far: Range<f32>) -> Mat4 {
    let Range { start: near, end: far } = near_far;
    let (sin, cos) = (fovy / 2.0).sin_cos();
    let f = cos / sin;
    Mat4::new([
        [f / aspect, 0.0, 0.0, 0.0],
        [0.0, f, 0.0, 0.0],
        [
            0.0,
            0.0,
            (far + near) / (near - far),
            2.0 * far * near / (near - far),
        ],
        [0.0, 0.0, -1.0, 0.0],
    ])
}

/// Returns the world-to-view matrix of a viewer at `eye` looking toward
/// `at`, with `up` fixing the roll.
pub fn look_at(eye: Vec3, at: Vec3, up: Vec3) -> Mat4 {
    let fwd = (at - eye).normalize();
    let right = fwd.cross(&up).normalize();
    let up = right.cross(&fwd);
    Mat4::new([
        [right.x(), right.y(), right.z(), -right.dot(&eye)],
        [up.x(), up.y(), up.z(), -up.dot(&eye)],
        [-fwd.x(), -fwd.y(), -fwd.z(), fwd.dot(&eye)],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

impl Debug for Mat4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mat4[")?;
        for row in &self.0 {
            writeln!(f, "    {row:?}")?;
        }
        write!(f, "]")
    }
}
