//! A camera fly-through of a walled courtyard built from cubes.
//!
//! The cube mesh is loaded from an OBJ file and shared by every scene
//! element; each element is placed with its own transform and color.
//! Arrow keys / WASD dolly and pan the camera, Q and E truck sideways.

use std::ops::ControlFlow::*;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use log::{info, warn};

use rp::prelude::*;
use rp_front::input::NavKeys;
use rp_front::minifb::Window;
use rp_geom::io::load_obj;

use scene::Scene;

mod scene;

const W: u32 = 800;
const H: u32 = 600;

fn main() -> Result<()> {
    pretty_env_logger::init();

    let path = asset_path("box.obj");
    let mesh = load_obj(&path)?;
    info!("loaded {:?} from {}", mesh, path.display());

    let mut win = Window::builder()
        .title("rampart//lookat")
        .dims((W, H))
        .build()
        .map_err(|e| anyhow!("failed to create window: {e}"))?;

    let mut cam = Camera::new((W, H)).perspective(degs(70.0), 0.1..40.0);
    let mut scene = Scene::new(mesh, color_rng());
    let mut nav = NavKeys::default();

    win.run(|frame| {
        let dt = frame.dt.as_secs_f32();

        nav.update(frame.win);
        cam.mode.dolly(nav.dolly * dt);
        cam.mode.truck(nav.truck * dt);
        cam.mode.pan(rads(nav.pan * dt));

        scene.update(dt);
        scene.draw(&cam, &mut frame.buf);

        Continue(())
    });
    Ok(())
}

/// Resolves a file in the demo assets directory.
fn asset_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("assets")
        .join(name)
}

/// Returns the color generator, seeded from the `RAMPART_SEED`
/// environment variable (nonzero u64) if set, for reproducible colors;
/// otherwise from the clock.
fn color_rng() -> Xorshift64 {
    match std::env::var("RAMPART_SEED") {
        Ok(var) => match var.parse() {
            Ok(seed) if seed != 0 => {
                info!("seeding colors from RAMPART_SEED={seed}");
                Xorshift64::from_seed(seed)
            }
            _ => {
                warn!("ignoring invalid RAMPART_SEED={var:?}");
                Xorshift64::from_time()
            }
        },
        Err(_) => Xorshift64::from_time(),
    }
}
