//! A minimal slider panel, painted straight into the framebuffer.
//!
//! Just enough immediate-mode widgetry for the demos: labelled sliders
//! with clamped values and a confirm button. Text is rendered from an
//! embedded 5×7 glyph set, uppercase only.

use rp::util::buf::Buf2;

use crate::input::Mouse;

//
// Types
//

/// A horizontal slider with a clamped value.
#[derive(Clone, Debug)]
pub struct Slider {
    pub label: &'static str,
    value: f32,
    min: f32,
    max: f32,
}

/// A panel of sliders stacked above a confirm button.
#[derive(Clone, Debug)]
pub struct Panel {
    pos: (u32, u32),
    width: u32,
    pub sliders: Vec<Slider>,
    button: &'static str,
    was_down: bool,
}

#[derive(Copy, Clone, Debug)]
struct Rect {
    x: u32,
    y: u32,
    w: u32,
    h: u32,
}

const PAD: u32 = 6;
const ROW_H: u32 = 22;
const BUTTON_H: u32 = 16;
const KNOB_W: u32 = 4;

const BG: u32 = 0xFF_20_20_28;
const TRACK: u32 = 0xFF_60_60_68;
const ACCENT: u32 = 0xFF_E8_E8_F0;

//
// Inherent impls
//

impl Slider {
    /// Creates a slider bounded to `min..=max`, initially centered.
    pub fn new(label: &'static str, min: f32, max: f32) -> Self {
        Self { label, value: (min + max) / 2.0, min, max }
    }

    /// The current value, always within bounds.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Sets the value, clamped to the slider's bounds.
    pub fn set(&mut self, value: f32) {
        self.value = value.clamp(self.min, self.max);
    }

    /// The value's position within the bounds, in [0, 1].
    fn ratio(&self) -> f32 {
        (self.value - self.min) / (self.max - self.min)
    }
}

impl Panel {
    /// Creates an empty panel at `pos` with the given width.
    pub fn new(pos: (u32, u32), width: u32) -> Self {
        Self {
            pos,
            width,
            sliders: vec![],
            button: "OK",
            was_down: false,
        }
    }

    /// Adds a slider row.
    pub fn slider(mut self, label: &'static str, min: f32, max: f32) -> Self {
        self.sliders.push(Slider::new(label, min, max));
        self
    }

    /// Sets the confirm button label.
    pub fn button(mut self, label: &'static str) -> Self {
        self.button = label;
        self
    }

    /// The total height of the panel.
    pub fn height(&self) -> u32 {
        2 * PAD + self.sliders.len() as u32 * ROW_H + BUTTON_H
    }

    /// Feeds the current pointer state into the panel.
    ///
    /// Dragging across a track moves that slider, clamped to its
    /// bounds. Returns `true` on the frame the confirm button is
    /// clicked (press edge, not hold).
    pub fn handle(&mut self, mouse: &Mouse) -> bool {
        if mouse.left {
            for i in 0..self.sliders.len() {
                let track = self.track_rect(i);
                // Accept the whole row height as grab area
                let grab = Rect {
                    y: track.y.saturating_sub(ROW_H / 2),
                    h: ROW_H,
                    ..track
                };
                if grab.contains(mouse.pos) {
                    let t = (mouse.pos.0 - track.x as f32) / track.w as f32;
                    let s = &mut self.sliders[i];
                    s.set(s.min + (s.max - s.min) * t);
                }
            }
        }

        let clicked = mouse.left
            && !self.was_down
            && self.button_rect().contains(mouse.pos);
        self.was_down = mouse.left;
        clicked
    }

    /// Paints the panel into `buf`.
    pub fn paint(&self, buf: &mut Buf2<u32>) {
        let (x, y) = self.pos;
        fill_rect(
            buf,
            Rect { x, y, w: self.width, h: self.height() },
            BG,
        );

        for (i, s) in self.sliders.iter().enumerate() {
            let text = format!("{} {:+.2}", s.label, s.value);
            let row_y = y + PAD + i as u32 * ROW_H;
            font::draw_text(buf, x + PAD, row_y, &text, ACCENT);

            let track = self.track_rect(i);
            fill_rect(buf, track, TRACK);

            let knob_x = track.x
                + ((track.w - KNOB_W) as f32 * s.ratio()) as u32;
            let knob = Rect {
                x: knob_x,
                y: track.y.saturating_sub(3),
                w: KNOB_W,
                h: track.h + 6,
            };
            fill_rect(buf, knob, ACCENT);
        }

        let button = self.button_rect();
        fill_rect(buf, button, TRACK);
        let label_w = 6 * self.button.len() as u32;
        font::draw_text(
            buf,
            button.x + (button.w.saturating_sub(label_w)) / 2,
            button.y + (button.h - 7) / 2,
            self.button,
            ACCENT,
        );
    }

    /// The track area of slider `i`, below its label row.
    fn track_rect(&self, i: usize) -> Rect {
        let (x, y) = self.pos;
        Rect {
            x: x + PAD,
            y: y + PAD + i as u32 * ROW_H + 13,
            w: self.width - 2 * PAD,
            h: 2,
        }
    }

    fn button_rect(&self) -> Rect {
        let (x, y) = self.pos;
        Rect {
            x: x + PAD,
            y: y + PAD + self.sliders.len() as u32 * ROW_H,
            w: self.width - 2 * PAD,
            h: BUTTON_H - 2,
        }
    }
}

impl Rect {
    fn contains(&self, (px, py): (f32, f32)) -> bool {
        px >= self.x as f32
            && px < (self.x + self.w) as f32
            && py >= self.y as f32
            && py < (self.y + self.h) as f32
    }
}

/// Fills a rectangle, clipped to the buffer bounds.
fn fill_rect(buf: &mut Buf2<u32>, r: Rect, color: u32) {
    let (bw, bh) = buf.dims();
    for y in r.y..(r.y + r.h).min(bh) {
        for x in r.x..(r.x + r.w).min(bw) {
            buf[(x, y)] = color;
        }
    }
}

mod font {
    //! An embedded 5×7 pixel font, uppercase letters, digits, and a
    //! little punctuation. Each glyph is seven rows of 5-bit masks,
    //! most significant bit leftmost.

    use rp::util::buf::Buf2;

    /// Draws `text` with its top-left corner at `(x, y)`, clipped to
    /// the buffer. Lowercase letters are drawn as uppercase; unknown
    /// characters as blanks. Each glyph advances the cursor 6 pixels.
    pub fn draw_text(
        buf: &mut Buf2<u32>,
        x: u32,
        y: u32,
        text: &str,
        color: u32,
    ) {
        let (bw, bh) = buf.dims();
        for (i, ch) in text.bytes().enumerate() {
            let rows = glyph(ch.to_ascii_uppercase());
            for (dy, row) in rows.iter().enumerate() {
                for dx in 0..5 {
                    if row & (0x10 >> dx) == 0 {
                        continue;
                    }
                    let (px, py) = (x + 6 * i as u32 + dx, y + dy as u32);
                    if px < bw && py < bh {
                        buf[(px, py)] = color;
                    }
                }
            }
        }
    }

    fn glyph(c: u8) -> [u8; 7] {
        match c {
            b'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
            b'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
            b'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
            b'D' => [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
            b'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
            b'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
            b'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
            b'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
            b'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
            b'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
            b'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
            b'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
            b'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
            b'N' => [0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11],
            b'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
            b'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
            b'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
            b'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
            b'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
            b'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
            b'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
            b'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
            b'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
            b'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
            b'Y' => [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04],
            b'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
            b'0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
            b'1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
            b'2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
            b'3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
            b'4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
            b'5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
            b'6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
            b'7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
            b'8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
            b'9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
            b'+' => [0x00, 0x04, 0x04, 0x1F, 0x04, 0x04, 0x00],
            b'-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
            b'.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
            b':' => [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00],
            _ => [0x00; 7],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> Panel {
        Panel::new((10, 10), 100)
            .slider("ANGLE", -1.0, 1.0)
            .slider("RADIUS", -1.0, 1.0)
            .button("CONFIRM")
    }

    fn press_at(pos: (f32, f32)) -> Mouse {
        Mouse { pos, left: true }
    }

    #[test]
    fn slider_values_are_clamped() {
        let mut s = Slider::new("X", -1.0, 1.0);
        assert_eq!(s.value(), 0.0);

        s.set(0.5);
        assert_eq!(s.value(), 0.5);
        s.set(7.0);
        assert_eq!(s.value(), 1.0);
        s.set(-7.0);
        assert_eq!(s.value(), -1.0);
    }

    #[test]
    fn dragging_a_track_sets_the_value() {
        let mut p = panel();
        let track = p.track_rect(0);

        // Click the far-right end of the first track
        let x = (track.x + track.w) as f32 - 0.5;
        let y = track.y as f32;
        p.handle(&press_at((x, y)));
        assert!(p.sliders[0].value() > 0.9);

        // And the far-left end
        p.handle(&press_at((track.x as f32, y)));
        assert_eq!(p.sliders[0].value(), -1.0);

        // The second slider is untouched
        assert_eq!(p.sliders[1].value(), 0.0);
    }

    #[test]
    fn dragging_cannot_exceed_the_bounds() {
        let mut p = panel();
        let track = p.track_rect(1);

        // Inside the grab area vertically, but way off to the right
        let m = press_at(((track.x + track.w) as f32 - 0.1, track.y as f32));
        p.handle(&m);
        assert!(p.sliders[1].value() <= 1.0);
    }

    #[test]
    fn confirm_fires_on_the_press_edge_only() {
        let mut p = panel();
        let b = p.button_rect();
        let inside = (b.x as f32 + 2.0, b.y as f32 + 2.0);

        assert!(p.handle(&press_at(inside)));
        // Still held: no retrigger
        assert!(!p.handle(&press_at(inside)));
        // Released, pressed again: fires again
        assert!(!p.handle(&Mouse { pos: inside, left: false }));
        assert!(p.handle(&press_at(inside)));
    }

    #[test]
    fn clicks_outside_the_button_do_not_confirm() {
        let mut p = panel();
        assert!(!p.handle(&press_at((0.0, 0.0))));
    }

    #[test]
    fn painting_stays_within_the_buffer() {
        let p = panel();
        // Deliberately too small to hold the whole panel
        let mut buf: Buf2<u32> = Buf2::new((40, 30));
        p.paint(&mut buf);

        // Something got painted, and nothing panicked
        assert!(buf.data().iter().any(|&c| c == BG));
    }

    #[test]
    fn panel_height_grows_with_rows() {
        let two = panel().height();
        let three = panel().slider("EXTRA", 0.0, 1.0).height();
        assert_eq!(three - two, ROW_H);
    }
}
