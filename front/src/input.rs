//! Keyboard and mouse input state.

use minifb::Key;

use crate::minifb::Window;

//
// Types
//

/// A snapshot of the pointer state.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Mouse {
    /// Pointer position in pixels, clamped to the window.
    pub pos: (f32, f32),
    /// Whether the left button is held down.
    pub left: bool,
}

/// Camera navigation speeds driven by the keyboard.
///
/// Arrow keys and WASD set the dolly and pan speeds, Q and E the truck
/// speed, each to ±1. A key release cancels the corresponding speed
/// only if the speed still matches the direction that key sets: letting
/// go of W while already reversing on S must not stop the reverse.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct NavKeys {
    /// Forward/backward speed along the view direction.
    pub dolly: f32,
    /// Turn speed about the up axis.
    pub pan: f32,
    /// Sideways speed.
    pub truck: f32,
}

//
// Inherent impls
//

impl NavKeys {
    /// Feeds one pressed key into the state.
    pub fn key_down(&mut self, key: Key) {
        use Key::*;
        match key {
            Up | W => self.dolly = 1.0,
            Down | S => self.dolly = -1.0,
            Left | A => self.pan = -1.0,
            Right | D => self.pan = 1.0,
            Q => self.truck = -1.0,
            E => self.truck = 1.0,
            _ => (),
        }
    }

    /// Feeds one released key into the state.
    pub fn key_up(&mut self, key: Key) {
        use Key::*;
        match key {
            Up | W if self.dolly > 0.0 => self.dolly = 0.0,
            Down | S if self.dolly < 0.0 => self.dolly = 0.0,
            Left | A if self.pan < 0.0 => self.pan = 0.0,
            Right | D if self.pan > 0.0 => self.pan = 0.0,
            Q if self.truck < 0.0 => self.truck = 0.0,
            E if self.truck > 0.0 => self.truck = 0.0,
            _ => (),
        }
    }

    /// Consumes the key transitions of the current frame.
    pub fn update(&mut self, win: &Window) {
        for key in win.keys_pressed() {
            self.key_down(key);
        }
        for key in win.keys_released() {
            self.key_up(key);
        }
    }
}
