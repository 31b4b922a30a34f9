//! Frame statistics.

use core::fmt::{self, Display, Formatter};
use std::time::Instant;

//
// Types
//

/// Counts frames and wall-clock time over the life of the main loop.
#[derive(Clone, Debug)]
pub struct Stats {
    /// Number of frames presented.
    pub frames: u32,
    start: Instant,
}

//
// Inherent impls
//

impl Stats {
    /// Creates a `Stats` instance that records the time of its creation.
    pub fn start() -> Self {
        Self { frames: 0, start: Instant::now() }
    }

    /// Records one presented frame.
    pub fn frame(&mut self) {
        self.frames += 1;
    }
}

//
// Foreign trait impls
//

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let secs = self.start.elapsed().as_secs_f32();
        let fps = if secs > 0.0 { self.frames as f32 / secs } else { 0.0 };
        write!(f, "{} frames in {:.1} s ({:.1} fps)", self.frames, secs, fps)
    }
}
