//! Core functionality of the `rampart` project.
//!
//! Includes a small math library with vectors, matrices, angles, colors,
//! and pseudo-random numbers; triangle meshes; time-driven animation state;
//! and a minimal flat-shading software renderer with a look-at camera.
//!
//! The renderer is deliberately fixed-function: one color per draw call,
//! a depth buffer, and nothing else. It exists to put pictures on screen
//! for the demo programs, not to be a rendering engine.

pub mod anim;
pub mod geom;
pub mod math;
pub mod render;
pub mod util;

pub mod prelude {
    pub use crate::anim::{Orbiter, Oscillator, Spinner};

    pub use crate::math::{
        angle::{Angle, degs, rads, turns},
        color::{Color4, gray, rgb, rgba},
        mat::{Mat4, rotate_x, rotate_y, rotate_z, scale, translate},
        rand::{Distrib, Uniform, Xorshift64},
        vec::{Vec2, Vec3, Vec4, vec2, vec3, vec4},
    };

    pub use crate::geom::{Mesh, Tri, Vertex, vertex};

    pub use crate::render::{
        cam::{Camera, LookAt},
        target::Framebuf,
    };

    pub use crate::util::buf::Buf2;
}
