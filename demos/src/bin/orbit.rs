//! A point plotter tracing an outward spiral.
//!
//! The point follows a parametric circle whose angle advances at a
//! fixed rate and whose radius creeps outward every frame. The trail
//! accumulates in a retained canvas. A small panel holds two sliders
//! (angle and radius, both clamped to [-1, 1]) and a confirm button
//! that commits the slider values as new orbit parameters and wipes
//! the canvas.

use std::ops::ControlFlow::*;

use anyhow::{Result, anyhow};
use log::info;

use rp::prelude::*;
use rp::render::raster::plot;
use rp_front::minifb::Window;
use rp_front::ui::Panel;

const W: u32 = 800;
const H: u32 = 600;

const BACKGROUND: u32 = 0xFF_00_00_00;
const POINT: u32 = 0xFF_FF_FF_FF;

fn main() -> Result<()> {
    pretty_env_logger::init();

    let mut win = Window::builder()
        .title("rampart//orbit")
        .dims((W, H))
        .build()
        .map_err(|e| anyhow!("failed to create window: {e}"))?;

    // Half a turn per second, creeping slowly outward
    let mut orbit = Orbiter {
        radius: 0.1,
        angle: Angle::ZERO,
        rate: turns(0.5),
        growth: 0.01,
    };

    let mut panel = Panel::new((5, 5), 190)
        .slider("ANGLE", -1.0, 1.0)
        .slider("RADIUS", -1.0, 1.0)
        .button("CONFIRM");

    // The trail outlives individual frames; the run loop's framebuffer
    // does not, so the spiral is plotted into a retained canvas that
    // gets copied out each frame.
    let mut canvas: Buf2<u32> = Buf2::new((W, H));
    canvas.fill(BACKGROUND);

    win.run(|frame| {
        let p = orbit.pos();
        let (x, y) = (
            (p.x() + 1.0) * 0.5 * W as f32,
            (1.0 - p.y()) * 0.5 * H as f32,
        );
        plot(&mut canvas, x as i32, y as i32, 2, POINT);

        orbit.advance(frame.dt.as_secs_f32());

        if panel.handle(&frame.win.mouse()) {
            orbit.angle = rads(panel.sliders[0].value());
            orbit.radius = panel.sliders[1].value();
            info!(
                "orbit reset: angle {}, radius {}",
                orbit.angle, orbit.radius
            );
            canvas.fill(BACKGROUND);
        }

        frame.buf.color_buf.copy_from(&canvas);
        panel.paint(frame.buf.color_buf);

        Continue(())
    });
    Ok(())
}
