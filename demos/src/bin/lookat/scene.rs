//! The walled-courtyard scene: element placement, animation, colors.

use rp::prelude::*;
use rp_geom::solids;

/// All mutable state of the scene, owned in one place and advanced
/// once per frame.
pub struct Scene {
    /// The shared cube mesh every building element is an instance of.
    mesh: Mesh,
    /// A unit quad, drawn once per ground tile.
    ground: Mesh,
    /// Height of the colored house.
    house_scale: Oscillator,
    /// Width of the house-row blocks.
    block_scale: Oscillator,
    /// Heading of the block hovering over the courtyard.
    spin: Spinner,
    /// Per-run random base channels for the house-row colors.
    base: [f32; 4],
    rng: Xorshift64,
}

impl Scene {
    pub fn new(mesh: Mesh, mut rng: Xorshift64) -> Self {
        let unit = Uniform(0.0..1.0);
        let base = std::array::from_fn(|_| unit.sample(&mut rng));
        Self {
            mesh,
            ground: solids::tile(),
            house_scale: Oscillator::new(1.0, 0.2, 0.5, 1.5),
            block_scale: Oscillator::new(0.5, 0.3, 0.5, 1.0),
            spin: Spinner::new(Angle::ZERO, rads(0.3)),
            base,
            rng,
        }
    }

    /// Advances the animation state by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.house_scale.advance(dt);
        self.block_scale.advance(dt);
        self.spin.advance(dt);
    }

    /// Draws every scene element, one draw call each.
    ///
    /// No culling and no batching; each element gets a freshly composed
    /// transform every frame.
    pub fn draw(&mut self, cam: &Camera, fb: &mut Framebuf) {
        let unit = Uniform(0.0..1.0);
        let house_color = rgba(
            unit.sample(&mut self.rng),
            unit.sample(&mut self.rng),
            unit.sample(&mut self.rng),
            unit.sample(&mut self.rng),
        );

        // The rampart proper: three wall sections across the courtyard
        // front, and one along each side
        let walls = [
            (vec3(-1.0, 0.0, -1.0), degs(90.0), vec3(0.5, 1.5, 0.5)),
            (vec3(0.0, 0.0, -1.0), degs(0.0), vec3(1.5, 1.0, 0.5)),
            (vec3(1.0, 0.0, -1.0), degs(-90.0), vec3(0.5, 1.5, 0.5)),
            (vec3(-1.0, 0.0, -2.0), degs(-90.0), vec3(0.5, 1.5, 1.5)),
            (vec3(1.0, 0.0, -2.0), degs(-90.0), vec3(0.5, 1.5, 1.5)),
        ];
        for (pos, turn, size) in walls {
            self.element(cam, fb, pos, turn, size, Color4::WHITE);
        }

        // The colored house behind the courtyard, height oscillating,
        // color changing every frame
        self.element(
            cam,
            fb,
            vec3(0.0, 0.0, -5.0),
            degs(-90.0),
            vec3(0.5, self.house_scale.value(), 0.5),
            house_color,
        );

        // Four rows of house blocks flanking the courtyard. The left
        // rows shift hue continuously across both rows; the right rows
        // restart their ramp. Colors may leave [0, 1] and simply
        // saturate.
        let width = self.block_scale.value();
        let [v0, v1, v2, v3] = self.base;

        let mut aux = 0.0;
        for row_x in [-2.0, -4.0] {
            for i in -4..7 {
                let i = i as f32;
                let color = rgba(v0 + aux, v1 * i, v2 - aux + i, v3 + aux);
                self.element(
                    cam,
                    fb,
                    vec3(row_x, 0.0, -1.0 + i),
                    degs(-90.0),
                    vec3(width, 1.0, 0.5),
                    color,
                );
                aux += 0.1;
            }
        }
        for row_x in [2.0, 4.0] {
            let mut aux = 0.0;
            for i in -4..7 {
                let color = rgba(v0 + aux, v1, v2 + aux, v3 + aux);
                self.element(
                    cam,
                    fb,
                    vec3(row_x, 0.0, -1.0 + i as f32),
                    degs(-90.0),
                    vec3(width, 1.0, 0.5),
                    color,
                );
                aux += 0.2;
            }
        }

        // The block hovering over the courtyard, slowly turning
        self.element(
            cam,
            fb,
            vec3(0.0, 1.0, 3.0),
            self.spin.angle(),
            vec3(1.0, 0.5, 0.5),
            rgb(1.0, 1.0, 0.0),
        );

        // Checkered ground, one tile per draw call
        for i in -5i32..=5 {
            for j in -5i32..=5 {
                let shade = if (i + j).rem_euclid(2) == 0 {
                    gray(0.4)
                } else {
                    gray(0.15)
                };
                let to_world =
                    translate(vec3(i as f32, -0.5, j as f32));
                cam.render(&self.ground, &to_world, shade, fb);
            }
        }
    }

    /// Issues one draw call with the transform composed scale-first:
    /// the element is scaled, then rotated about y, then moved into
    /// place.
    fn element(
        &self,
        cam: &Camera,
        fb: &mut Framebuf,
        pos: Vec3,
        turn: Angle,
        size: Vec3,
        color: Color4,
    ) {
        let to_world = scale(size)
            .then(&rotate_y(turn))
            .then(&translate(pos));
        cam.render(&self.mesh, &to_world, color, fb);
    }
}

#[cfg(test)]
mod tests {
    use rp::util::buf::Buf2;

    use super::*;

    fn scene() -> Scene {
        Scene::new(solids::cube(), Xorshift64::from_seed(7))
    }

    #[test]
    fn animation_state_stays_in_bounds() {
        let mut s = scene();
        for _ in 0..1000 {
            s.update(0.033);
            assert!((0.5..=1.5).contains(&s.house_scale.value()));
            assert!((0.5..=1.0).contains(&s.block_scale.value()));
            assert!(s.spin.angle() < Angle::FULL);
        }
    }

    #[test]
    fn base_colors_are_reproducible_for_a_fixed_seed() {
        let a = scene();
        let b = scene();
        assert_eq!(a.base, b.base);
    }

    #[test]
    fn draw_covers_pixels() {
        let mut s = scene();
        let cam = Camera::new((64, 48)).perspective(degs(70.0), 0.1..40.0);

        let mut cbuf = Buf2::new((64, 48));
        let mut zbuf = Buf2::new((64, 48));
        let mut fb =
            Framebuf { color_buf: &mut cbuf, depth_buf: &mut zbuf };
        fb.clear(0);

        s.update(0.016);
        s.draw(&cam, &mut fb);

        let lit = cbuf.data().iter().filter(|&&c| c != 0).count();
        // From the default viewpoint most of the frame shows ground
        // and walls
        assert!(lit > 64 * 48 / 4, "only {lit} pixels lit");
    }
}
