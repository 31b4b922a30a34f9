//! Frontend using the `minifb` crate for window creation and event
//! handling.

use std::ops::ControlFlow::{self, Break};
use std::time::Instant;

use log::info;
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, WindowOptions};

use rp::render::stats::Stats;
use rp::render::target::Framebuf;
use rp::util::buf::Buf2;

use crate::Frame;
use crate::input::Mouse;

//
// Types
//

/// A lightweight wrapper of a `minifb` window.
pub struct Window {
    /// The wrapped minifb window.
    pub imp: minifb::Window,
    /// The width and height of the window.
    pub dims: (u32, u32),
}

/// Builder for creating [`Window`]s.
pub struct Builder<'title> {
    pub dims: (u32, u32),
    pub title: &'title str,
    pub target_fps: Option<u32>,
    pub opts: WindowOptions,
}

//
// Inherent impls
//

impl Default for Builder<'_> {
    fn default() -> Self {
        Self {
            dims: (800, 600),
            title: "// rampart application //",
            target_fps: Some(60),
            opts: WindowOptions::default(),
        }
    }
}

impl<'t> Builder<'t> {
    /// Sets the width and height of the window.
    pub fn dims(mut self, dims: (u32, u32)) -> Self {
        self.dims = dims;
        self
    }
    /// Sets the title of the window.
    pub fn title(mut self, title: &'t str) -> Self {
        self.title = title;
        self
    }
    /// Sets the frame rate cap of the window. `None` means unlimited
    /// frame rate (the main loop runs as fast as possible).
    pub fn target_fps(mut self, fps: Option<u32>) -> Self {
        self.target_fps = fps;
        self
    }

    /// Creates the window.
    pub fn build(self) -> minifb::Result<Window> {
        let Self { dims, title, target_fps, opts } = self;
        let mut imp = minifb::Window::new(
            title,
            dims.0 as usize,
            dims.1 as usize,
            opts,
        )?;
        if let Some(fps) = target_fps {
            imp.set_target_fps(fps as usize);
        }
        info!("created window {}x{} \"{}\"", dims.0, dims.1, title);
        Ok(Window { imp, dims })
    }
}

impl Window {
    /// Returns a window builder.
    pub fn builder() -> Builder<'static> {
        Builder::default()
    }

    /// Returns the keys that went down since the last frame.
    pub fn keys_pressed(&self) -> Vec<Key> {
        self.imp.get_keys_pressed(KeyRepeat::No)
    }

    /// Returns the keys that went up since the last frame.
    pub fn keys_released(&self) -> Vec<Key> {
        self.imp.get_keys_released()
    }

    /// Returns the current pointer position and button state.
    pub fn mouse(&self) -> Mouse {
        let pos = self
            .imp
            .get_mouse_pos(MouseMode::Clamp)
            .unwrap_or((0.0, 0.0));
        Mouse {
            pos,
            left: self.imp.get_mouse_down(MouseButton::Left),
        }
    }

    /// Updates the window content with pixel data from `fb`.
    ///
    /// The data is interpreted as colors in `0xAARRGGBB` format.
    ///
    /// # Panics
    /// If `fb.len() < self.dims.0 * self.dims.1`.
    pub fn present(&mut self, fb: &[u32]) {
        let (w, h) = self.dims;
        self.imp
            .update_with_buffer(fb, w as usize, h as usize)
            .unwrap();
    }

    /// Runs the main loop of the program, invoking the callback on each
    /// iteration to compute and draw the next frame.
    ///
    /// The framebuffer is cleared before every invocation; a demo that
    /// wants persistent output keeps its own canvas and copies it in.
    ///
    /// The main loop stops and this function returns if:
    /// * the user closes the window via the GUI;
    /// * the Esc key is pressed; or
    /// * the callback returns `ControlFlow::Break`.
    pub fn run<F>(&mut self, mut frame_fn: F)
    where
        F: FnMut(&mut Frame<Self>) -> ControlFlow<()>,
    {
        let mut cbuf: Buf2<u32> = Buf2::new(self.dims);
        let mut zbuf: Buf2<f32> = Buf2::new(self.dims);

        let mut stats = Stats::start();
        let start = Instant::now();
        let mut last = start;

        loop {
            if self.should_quit() {
                break;
            }
            let frame = &mut Frame {
                t: start.elapsed(),
                dt: last.elapsed(),
                buf: Framebuf {
                    color_buf: &mut cbuf,
                    depth_buf: &mut zbuf,
                },
                win: self,
            };
            frame.buf.clear(0xFF_00_00_00);

            last = Instant::now();
            if let Break(_) = frame_fn(frame) {
                break;
            }
            self.present(cbuf.data());
            stats.frame();
        }
        info!("{stats}");
    }

    fn should_quit(&self) -> bool {
        !self.imp.is_open() || self.imp.is_key_down(Key::Escape)
    }
}
