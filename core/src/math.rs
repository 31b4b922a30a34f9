//! Vectors, matrices, angles, colors, and pseudo-random numbers.
//!
//! Everything here is plain `f32` math in a single coordinate space.
//! Angles are strongly typed, to allow working with different angular
//! units without confusion; the rest favors simplicity over generality.

pub use {
    angle::{Angle, degs, rads, turns},
    color::{Color4, gray, rgb, rgba},
    mat::{
        Mat4, look_at, perspective, rotate_x, rotate_y, rotate_z, scale,
        translate,
    },
    rand::{Distrib, Uniform, Xorshift64},
    vec::{Vec2, Vec3, Vec4, vec2, vec3, vec4},
};

pub mod angle;
pub mod color;
pub mod mat;
pub mod rand;
pub mod vec;
