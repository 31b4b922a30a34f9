//! Cameras and camera transforms.

use core::ops::Range;

use crate::geom::Mesh;
use crate::math::{
    Angle, Color4, Mat4, Vec3, look_at, perspective, rotate_y, translate, vec3,
};

use super::raster::fill_tri;
use super::target::Framebuf;

//
// Types
//

/// A look-at camera transform.
///
/// The camera sits at `eye` and looks toward `at`, with `up` fixing the
/// roll. Movement is expressed in the cinematographer's terms: *dolly*
/// moves along the viewing direction, *truck* moves sideways, and *pan*
/// turns the view about the up axis.
#[derive(Copy, Clone, Debug)]
pub struct LookAt {
    /// Position of the camera in world space.
    pub eye: Vec3,
    /// The point the camera looks at.
    pub at: Vec3,
    /// The world-space up direction.
    pub up: Vec3,
}

/// Manages the world-to-screen transformation and issues draw calls.
#[derive(Copy, Clone, Debug)]
pub struct Camera {
    /// World-to-view transform.
    pub mode: LookAt,
    /// Projection matrix.
    pub project: Mat4,
    /// Viewport width and height in pixels.
    pub dims: (u32, u32),
}

//
// Inherent impls
//

impl LookAt {
    /// Moves the camera along the viewing direction.
    ///
    /// Positive `d` moves toward the look-at point. The look-at point
    /// moves along, so the viewing direction is unchanged.
    pub fn dolly(&mut self, d: f32) {
        let fwd = (self.at - self.eye).normalize();
        self.eye += fwd * d;
        self.at += fwd * d;
    }

    /// Moves the camera sideways, perpendicular to the viewing direction.
    ///
    /// Positive `d` moves to the camera's right.
    pub fn truck(&mut self, d: f32) {
        let fwd = (self.at - self.eye).normalize();
        let left = self.up.cross(&fwd).normalize();
        self.eye -= left * d;
        self.at -= left * d;
    }

    /// Turns the view about the up axis, keeping the eye in place.
    ///
    /// Positive `a` turns to the right.
    pub fn pan(&mut self, a: Angle) {
        // Rotate the look-at point around the eye
        let rot = translate(-self.eye)
            .then(&rotate_y(-a))
            .then(&translate(self.eye));
        self.at = rot.apply_pt(&self.at).project();
    }

    /// Returns the world-to-view matrix.
    pub fn world_to_view(&self) -> Mat4 {
        look_at(self.eye, self.at, self.up)
    }
}

impl Camera {
    /// Creates a camera with the given viewport resolution.
    pub fn new(dims: (u32, u32)) -> Self {
        Self { mode: LookAt::default(), project: Mat4::IDENTITY, dims }
    }

    /// Sets up a perspective projection.
    ///
    /// The aspect ratio is taken from the viewport resolution.
    pub fn perspective(self, fovy: Angle, near_far: Range<f32>) -> Self {
        let aspect = self.dims.0 as f32 / self.dims.1 as f32;
        Self { project: perspective(fovy, aspect, near_far), ..self }
    }

    /// Renders `mesh`, transformed by `to_world`, in a single flat color.
    ///
    /// One draw call: every face of the mesh is transformed by the
    /// composite model-view-projection matrix and rasterized. Triangles
    /// with any vertex on or behind the near plane are dropped whole
    /// rather than clipped.
    pub fn render(
        &self,
        mesh: &Mesh,
        to_world: &Mat4,
        color: Color4,
        fb: &mut Framebuf,
    ) {
        let mvp = to_world
            .then(&self.mode.world_to_view())
            .then(&self.project);
        let color = color.to_argb_u32();
        let (w, h) = (self.dims.0 as f32, self.dims.1 as f32);

        'faces: for tri in &mesh.faces {
            let mut scr = [Vec3::ZERO; 3];
            for (s, &i) in scr.iter_mut().zip(&tri.0) {
                let clip = mvp.apply_pt(&mesh.verts[i].pos);
                if clip.w() <= 0.0 || clip.z() < -clip.w() {
                    continue 'faces;
                }
                let ndc = clip.project();
                *s = vec3(
                    (ndc.x() + 1.0) * 0.5 * w,
                    (1.0 - ndc.y()) * 0.5 * h,
                    ndc.z(),
                );
            }
            fill_tri(fb, scr, color);
        }
    }
}

//
// Foreign trait impls
//

impl Default for LookAt {
    /// A camera slightly above the origin, looking down the negative z axis.
    fn default() -> Self {
        Self {
            eye: vec3(0.0, 0.5, 2.5),
            at: vec3(0.0, 0.5, 0.0),
            up: Vec3::Y,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::math::degs;

    use super::*;

    fn cam() -> LookAt {
        LookAt {
            eye: vec3(0.0, 0.0, 5.0),
            at: Vec3::ZERO,
            up: Vec3::Y,
        }
    }

    #[test]
    fn dolly_moves_along_the_view_direction() {
        let mut c = cam();
        c.dolly(2.0);
        assert!((c.eye - vec3(0.0, 0.0, 3.0)).len() < 1e-6);
        assert!((c.at - vec3(0.0, 0.0, -2.0)).len() < 1e-6);
    }

    #[test]
    fn truck_strafes_perpendicular_to_the_view() {
        let mut c = cam();
        // Looking down -z, the camera's right is +x
        c.truck(1.0);
        assert!((c.eye - vec3(1.0, 0.0, 5.0)).len() < 1e-6);
        assert!((c.at - vec3(1.0, 0.0, 0.0)).len() < 1e-6);
    }

    #[test]
    fn pan_keeps_the_eye_and_the_view_distance() {
        let mut c = cam();
        let dist = (c.at - c.eye).len();
        c.pan(degs(90.0));

        assert_eq!(c.eye, cam().eye);
        assert!(((c.at - c.eye).len() - dist).abs() < 1e-4);
        // A quarter turn to the right swings the look-at point to +x
        // of the eye
        assert!((c.at - vec3(5.0, 0.0, 5.0)).len() < 1e-4);
    }

    #[test]
    fn renders_a_centered_triangle() {
        use crate::geom::{Tri, vertex};
        use crate::math::rgb;
        use crate::util::buf::Buf2;

        let mesh = Mesh::new(
            [Tri([0, 1, 2])],
            [
                vertex(vec3(-1.0, -1.0, 0.0)),
                vertex(vec3(1.0, -1.0, 0.0)),
                vertex(vec3(0.0, 1.0, 0.0)),
            ],
        );
        let cam = Camera {
            mode: LookAt {
                eye: vec3(0.0, 0.0, 3.0),
                at: Vec3::ZERO,
                up: Vec3::Y,
            },
            ..Camera::new((16, 16))
        }
        .perspective(degs(90.0), 0.1..100.0);

        let mut cbuf = Buf2::new((16, 16));
        let mut zbuf = Buf2::new((16, 16));
        let mut fb = Framebuf { color_buf: &mut cbuf, depth_buf: &mut zbuf };
        fb.clear(0);

        cam.render(&mesh, &Mat4::IDENTITY, rgb(1.0, 0.0, 0.0), &mut fb);

        // The triangle straddles the screen center
        assert_eq!(cbuf[(8, 8)], 0xFF_FF_00_00);
        // The top corners stay background
        assert_eq!(cbuf[(0, 0)], 0);
        assert_eq!(cbuf[(15, 0)], 0);
    }

    #[test]
    fn triangles_behind_the_camera_are_dropped() {
        use crate::geom::{Tri, vertex};
        use crate::math::rgb;
        use crate::util::buf::Buf2;

        let mesh = Mesh::new(
            [Tri([0, 1, 2])],
            [
                vertex(vec3(-1.0, -1.0, 10.0)),
                vertex(vec3(1.0, -1.0, 10.0)),
                vertex(vec3(0.0, 1.0, 10.0)),
            ],
        );
        let cam = Camera {
            mode: LookAt {
                eye: vec3(0.0, 0.0, 3.0),
                at: Vec3::ZERO,
                up: Vec3::Y,
            },
            ..Camera::new((16, 16))
        }
        .perspective(degs(90.0), 0.1..100.0);

        let mut cbuf = Buf2::new((16, 16));
        let mut zbuf = Buf2::new((16, 16));
        let mut fb = Framebuf { color_buf: &mut cbuf, depth_buf: &mut zbuf };
        fb.clear(0);

        cam.render(&mesh, &Mat4::IDENTITY, rgb(1.0, 1.0, 1.0), &mut fb);
        assert!(cbuf.data().iter().all(|&c| c == 0));
    }
}
