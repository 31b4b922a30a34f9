//! The frontend for the `rampart` demo programs.
//!
//! Owns the window, the main loop, frame timing, and input; the demos
//! only supply a per-frame callback.

use std::time::Duration;

use rp::render::target::Framebuf;

pub mod input;
pub mod minifb;
pub mod ui;

/// Per-frame state. The window run method passes an instance of `Frame`
/// to the callback function on every iteration of the main loop.
pub struct Frame<'a, Win> {
    /// Elapsed time since the start of the first frame.
    pub t: Duration,
    /// Elapsed time since the start of the previous frame.
    pub dt: Duration,
    /// Framebuffer in which to draw.
    pub buf: Framebuf<'a>,
    /// Reference to the window object.
    pub win: &'a mut Win,
}
