//! Turning triangles and points into pixels.

use crate::math::Vec3;
use crate::util::buf::Buf2;

use super::target::Framebuf;

/// Fills a triangle with a flat color, depth-tested.
///
/// The vertices are in screen space: `x` and `y` are pixel coordinates,
/// `z` is the depth written to the depth buffer. Either winding is
/// accepted. Coverage is decided at pixel centers; depth is interpolated
/// linearly in screen space, which is exact enough for flat-colored
/// triangles.
pub fn fill_tri(fb: &mut Framebuf, [a, b, c]: [Vec3; 3], color: u32) {
    // Twice the signed area; also the normalizer for the barycentrics
    let area = edge(&a, &b, &c);
    if area == 0.0 {
        return;
    }

    let (w, h) = fb.dims();
    let min_x = a.x().min(b.x()).min(c.x()).floor().max(0.0) as u32;
    let min_y = a.y().min(b.y()).min(c.y()).floor().max(0.0) as u32;
    let max_x = (a.x().max(b.x()).max(c.x()).ceil()).min((w - 1) as f32) as u32;
    let max_y = (a.y().max(b.y()).max(c.y()).ceil()).min((h - 1) as f32) as u32;
    if min_x > max_x || min_y > max_y {
        return;
    }

    // A negative area means the opposite winding; flipping the sign of
    // every edge value makes the inside test uniform for both.
    let sign = area.signum();

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let p = Vec3([x as f32 + 0.5, y as f32 + 0.5, 0.0]);

            let wa = edge(&b, &c, &p) * sign;
            let wb = edge(&c, &a, &p) * sign;
            let wc = edge(&a, &b, &p) * sign;
            if wa < 0.0 || wb < 0.0 || wc < 0.0 {
                continue;
            }

            let z = (wa * a.z() + wb * b.z() + wc * c.z()) / (area * sign);
            fb.test_and_set(x, y, z, color);
        }
    }
}

/// Writes a `size`×`size` block of pixels at `(x, y)`, clipped to the
/// buffer bounds. No depth test.
pub fn plot(buf: &mut Buf2<u32>, x: i32, y: i32, size: u32, color: u32) {
    let (w, h) = buf.dims();
    for dy in 0..size as i32 {
        for dx in 0..size as i32 {
            let (px, py) = (x + dx, y + dy);
            if (0..w as i32).contains(&px) && (0..h as i32).contains(&py) {
                buf[(px as u32, py as u32)] = color;
            }
        }
    }
}

/// The 2D cross product of `b - a` and `p - a`.
///
/// Positive iff `p` lies to the left of the directed edge from `a` to `b`.
fn edge(a: &Vec3, b: &Vec3, p: &Vec3) -> f32 {
    (b.x() - a.x()) * (p.y() - a.y()) - (b.y() - a.y()) * (p.x() - a.x())
}

#[cfg(test)]
mod tests {
    use crate::math::vec3;

    use super::*;

    fn framebuf(
        dims: (u32, u32),
    ) -> (Buf2<u32>, Buf2<f32>) {
        let cbuf = Buf2::new(dims);
        let mut zbuf = Buf2::new(dims);
        zbuf.fill(f32::INFINITY);
        (cbuf, zbuf)
    }

    #[test]
    fn covers_pixel_centers_inside_the_triangle() {
        let (mut cbuf, mut zbuf) = framebuf((8, 8));
        let mut fb = Framebuf { color_buf: &mut cbuf, depth_buf: &mut zbuf };

        fill_tri(
            &mut fb,
            [vec3(0.0, 0.0, 0.5), vec3(8.0, 0.0, 0.5), vec3(0.0, 8.0, 0.5)],
            7,
        );

        assert_eq!(cbuf[(1, 1)], 7);
        assert_eq!(cbuf[(3, 3)], 7);
        // The far corner is outside the hypotenuse
        assert_eq!(cbuf[(7, 7)], 0);
    }

    #[test]
    fn winding_does_not_matter() {
        let (mut cbuf, mut zbuf) = framebuf((8, 8));
        let mut fb = Framebuf { color_buf: &mut cbuf, depth_buf: &mut zbuf };

        // Clockwise version of the triangle above
        fill_tri(
            &mut fb,
            [vec3(0.0, 0.0, 0.5), vec3(0.0, 8.0, 0.5), vec3(8.0, 0.0, 0.5)],
            7,
        );
        assert_eq!(cbuf[(1, 1)], 7);
    }

    #[test]
    fn degenerate_triangle_draws_nothing() {
        let (mut cbuf, mut zbuf) = framebuf((8, 8));
        let mut fb = Framebuf { color_buf: &mut cbuf, depth_buf: &mut zbuf };

        fill_tri(
            &mut fb,
            [vec3(1.0, 1.0, 0.5), vec3(4.0, 4.0, 0.5), vec3(7.0, 7.0, 0.5)],
            7,
        );
        assert!(cbuf.data().iter().all(|&c| c == 0));
    }

    #[test]
    fn nearer_triangle_wins_the_depth_test() {
        let (mut cbuf, mut zbuf) = framebuf((8, 8));
        let mut fb = Framebuf { color_buf: &mut cbuf, depth_buf: &mut zbuf };

        let tri = |z| [vec3(0.0, 0.0, z), vec3(8.0, 0.0, z), vec3(0.0, 8.0, z)];
        fill_tri(&mut fb, tri(0.5), 1);
        fill_tri(&mut fb, tri(0.9), 2);
        fill_tri(&mut fb, tri(0.1), 3);

        assert_eq!(cbuf[(2, 2)], 3);
    }

    #[test]
    fn triangles_are_clipped_to_the_buffer() {
        let (mut cbuf, mut zbuf) = framebuf((8, 8));
        let mut fb = Framebuf { color_buf: &mut cbuf, depth_buf: &mut zbuf };

        fill_tri(
            &mut fb,
            [
                vec3(-10.0, -10.0, 0.5),
                vec3(20.0, -10.0, 0.5),
                vec3(-10.0, 20.0, 0.5),
            ],
            7,
        );
        assert_eq!(cbuf[(0, 0)], 7);
    }

    #[test]
    fn plot_is_clipped_to_the_buffer() {
        let mut buf = Buf2::new((4, 4));
        plot(&mut buf, -1, -1, 2, 9);
        plot(&mut buf, 3, 3, 2, 9);

        assert_eq!(buf[(0, 0)], 9);
        assert_eq!(buf[(3, 3)], 9);
        assert_eq!(buf[(2, 2)], 0);
    }
}
