//! Software-rendered visualizer using `minifb`.
//!
//! Draw order per frame (back to front):
//!
//! ```text
//! backdrop            stands in for the mirrored camera frame
//! filter overlay      full-screen wash while a collision fades out
//! raindrops           pale streaks
//! floating words      drop-shadowed text, alpha = remaining life
//! keypoint markers    one dot per mirrored hand landmark
//! pet                 body, blush, eyes, smile
//! fireworks           shaped particles
//! status + legend
//! ```
//!
//! Everything is rasterised in software into one ARGB buffer: rects,
//! discs, ellipses, Bresenham lines, scanline-filled polygons, sampled
//! beziers for the heart lobes, and a scalable 3x5 bitmap font.

use minifb::{Key, MouseMode, Window, WindowOptions};

use hand_track::HandObservation;
use pet_scene::firework::{FireworkParticle, Shape};
use pet_scene::pet::Pet;
use pet_scene::rain::STREAK_LEN;
use pet_scene::scene::Scene;
use pet_scene::word::{FloatingWord, Rgb};
use pet_scene::VIEW_W;

use crate::sim::SimHandRig;

// ════════════════════════════════════════════════════════════════════════════
// Layout constants
// ════════════════════════════════════════════════════════════════════════════

pub const WIN_W: usize = 640;
pub const WIN_H: usize = 480;

/// Deep-blue backdrop where the host would composite the camera frame.
const BG_COLOR: u32 = 0xFF101628;

const RAIN_COLOR: Rgb = (200, 200, 255);
const RAIN_ALPHA: u8 = 80;
const MARKER_ALPHA: u8 = 150;
const SHADOW_ALPHA: u8 = 100;
const WORD_SCALE: i32 = 4;
const STATUS_COLOR: Rgb = (238, 238, 238);
const LEGEND_COLOR: Rgb = (136, 136, 136);

// ════════════════════════════════════════════════════════════════════════════
// Visualizer
// ════════════════════════════════════════════════════════════════════════════

pub struct Visualizer {
    window: Window,
    buf: Vec<u32>,
}

impl Visualizer {
    pub fn new() -> Result<Self, String> {
        let mut window = Window::new(
            "Palm Pet — hand-tracked toy",
            WIN_W,
            WIN_H,
            WindowOptions {
                resize: false,
                ..WindowOptions::default()
            },
        )
        .map_err(|e| e.to_string())?;

        window.limit_update_rate(Some(std::time::Duration::from_millis(16))); // ~60fps

        Ok(Visualizer {
            window,
            buf: vec![BG_COLOR; WIN_W * WIN_H],
        })
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// Poll window input into the simulation rig.  Returns false when the
    /// user quits.
    pub fn poll_input(&mut self, rig: &mut SimHandRig) -> bool {
        if !self.window.is_open() {
            return false;
        }
        if self.window.is_key_down(Key::Escape) || self.window.is_key_down(Key::Q) {
            return false;
        }

        if let Some((mx, my)) = self.window.get_mouse_pos(MouseMode::Clamp) {
            rig.set_pointer(mx, my);
        }
        if self.window.is_key_down(Key::Up) {
            rig.widen_pinch();
        }
        if self.window.is_key_down(Key::Down) {
            rig.narrow_pinch();
        }
        rig.set_open(self.window.is_key_down(Key::Space));

        true
    }

    /// Render one frame.
    pub fn render(
        &mut self,
        pet: &Pet,
        scene: &Scene,
        obs: Option<&HandObservation>,
        status: &str,
    ) {
        self.buf.fill(BG_COLOR);

        // ── Filter overlay ────────────────────────────────────────────────
        if scene.filter.is_active() {
            if let Some(color) = scene.filter.color {
                self.wash(color, scene.filter.alpha.clamp(0, 255) as u8);
            }
        }

        // ── Raindrops ─────────────────────────────────────────────────────
        for d in &scene.raindrops {
            self.line(
                d.x as i32,
                d.y as i32,
                d.x as i32,
                (d.y + STREAK_LEN) as i32,
                RAIN_COLOR,
                RAIN_ALPHA,
            );
        }

        // ── Floating words ────────────────────────────────────────────────
        for w in &scene.words {
            self.draw_word(w);
        }

        // ── Keypoint markers ──────────────────────────────────────────────
        if let Some(obs) = obs {
            if obs.is_usable() {
                for kp in &obs.keypoints {
                    self.fill_circle(VIEW_W - kp.x, kp.y, 3.0, (255, 255, 255), MARKER_ALPHA);
                }
            }
        }

        // ── Pet ───────────────────────────────────────────────────────────
        self.draw_pet(pet, scene.filter.color);

        // ── Fireworks ─────────────────────────────────────────────────────
        for p in &scene.fireworks {
            self.draw_particle(p);
        }

        // ── Status + legend ───────────────────────────────────────────────
        self.text(status, 8, WIN_H as i32 - 30, 2, STATUS_COLOR, 255);
        let legend = if cfg!(feature = "leap") {
            "leapmotion hardware mode"
        } else {
            "mouse=finger  up/down=pinch  space=open hand  esc=quit"
        };
        self.text(legend, 8, WIN_H as i32 - 12, 1, LEGEND_COLOR, 255);

        self.window.update_with_buffer(&self.buf, WIN_W, WIN_H).ok();
    }

    // ── Scene pieces ──────────────────────────────────────────────────────

    fn draw_word(&mut self, w: &FloatingWord) {
        let alpha = w.life.clamp(0, 255) as u8;
        if alpha == 0 {
            return;
        }
        let width = text_width(w.text, WORD_SCALE);
        let x = w.x as i32 - width / 2;
        let y = w.y as i32 - (5 * WORD_SCALE) / 2;
        self.text(w.text, x + 2, y + 2, WORD_SCALE, (0, 0, 0), SHADOW_ALPHA);
        self.text(w.text, x, y, WORD_SCALE, w.color, alpha);
    }

    fn draw_pet(&mut self, pet: &Pet, filter_color: Option<Rgb>) {
        let (x, y, r) = (pet.x, pet.y, pet.radius);

        // Body
        self.fill_ellipse(x, y, r, r * 0.8, (255, 255, 255), 200);

        // Blush, tinted by the active filter color
        let (blush, blush_alpha) = match filter_color {
            Some(c) => (c, 150),
            None => ((255, 100, 100), 100),
        };
        self.fill_ellipse(x - r * 0.5, y + r * 0.1, r * 0.2, r * 0.15, blush, blush_alpha);
        self.fill_ellipse(x + r * 0.5, y + r * 0.1, r * 0.2, r * 0.15, blush, blush_alpha);

        // Eyes
        self.fill_ellipse(x - r * 0.3, y - r * 0.1, r * 0.1, r * 0.12, (0, 0, 0), 255);
        self.fill_ellipse(x + r * 0.3, y - r * 0.1, r * 0.1, r * 0.12, (0, 0, 0), 255);

        // Smile
        self.stroke_arc(x, y + r * 0.1, r * 0.15, 0.0, std::f32::consts::PI, (0, 0, 0), 255);
    }

    fn draw_particle(&mut self, p: &FireworkParticle) {
        let alpha = p.alpha.clamp(0, 255) as u8;
        if alpha == 0 {
            return;
        }
        let (cx, cy, s) = (p.pos.x, p.pos.y, p.size);

        match p.shape {
            Shape::Circle => self.fill_circle(cx, cy, s * 0.5, p.color, alpha),
            Shape::Star => {
                let pts = star_points(cx, cy, s, p.rotation);
                self.fill_polygon(&pts, p.color, alpha);
            }
            Shape::Triangle => {
                let pts = [(0.0, -s), (-s, s), (s, s)]
                    .iter()
                    .map(|&v| place(v, p.rotation, cx, cy))
                    .collect::<Vec<_>>();
                self.fill_polygon(&pts, p.color, alpha);
            }
            Shape::Heart => {
                let pts = heart_points(cx, cy, s, p.rotation);
                self.fill_polygon(&pts, p.color, alpha);
            }
        }
    }

    // ── Primitive drawing helpers ─────────────────────────────────────────

    fn blend_pixel(&mut self, x: i32, y: i32, color: Rgb, alpha: u8) {
        if x < 0 || y < 0 || x >= WIN_W as i32 || y >= WIN_H as i32 {
            return;
        }
        let idx = y as usize * WIN_W + x as usize;
        let dst = self.buf[idx];
        let a = alpha as u32;
        let inv = 255 - a;
        let mix = |s: u8, d: u32| (s as u32 * a + d * inv) / 255;
        let r = mix(color.0, (dst >> 16) & 0xFF);
        let g = mix(color.1, (dst >> 8) & 0xFF);
        let b = mix(color.2, dst & 0xFF);
        self.buf[idx] = 0xFF00_0000 | (r << 16) | (g << 8) | b;
    }

    /// Full-screen translucent wash.
    fn wash(&mut self, color: Rgb, alpha: u8) {
        for y in 0..WIN_H as i32 {
            for x in 0..WIN_W as i32 {
                self.blend_pixel(x, y, color, alpha);
            }
        }
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Rgb, alpha: u8) {
        let rr = r * r;
        for y in (cy - r).floor() as i32..=(cy + r).ceil() as i32 {
            for x in (cx - r).floor() as i32..=(cx + r).ceil() as i32 {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                if dx * dx + dy * dy <= rr {
                    self.blend_pixel(x, y, color, alpha);
                }
            }
        }
    }

    fn fill_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, color: Rgb, alpha: u8) {
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        for y in (cy - ry).floor() as i32..=(cy + ry).ceil() as i32 {
            for x in (cx - rx).floor() as i32..=(cx + rx).ceil() as i32 {
                let nx = (x as f32 + 0.5 - cx) / rx;
                let ny = (y as f32 + 0.5 - cy) / ry;
                if nx * nx + ny * ny <= 1.0 {
                    self.blend_pixel(x, y, color, alpha);
                }
            }
        }
    }

    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb, alpha: u8) {
        // Bresenham
        let (mut x, mut y) = (x0, y0);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.blend_pixel(x, y, color, alpha);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Scanline polygon fill, even-odd rule.
    fn fill_polygon(&mut self, pts: &[(f32, f32)], color: Rgb, alpha: u8) {
        if pts.len() < 3 {
            return;
        }
        let y_min = pts.iter().map(|p| p.1).fold(f32::INFINITY, f32::min);
        let y_max = pts.iter().map(|p| p.1).fold(f32::NEG_INFINITY, f32::max);
        let y0 = (y_min.floor() as i32).max(0);
        let y1 = (y_max.ceil() as i32).min(WIN_H as i32 - 1);

        let mut xs: Vec<f32> = Vec::with_capacity(8);
        for y in y0..=y1 {
            let sy = y as f32 + 0.5;
            xs.clear();
            for i in 0..pts.len() {
                let (ax, ay) = pts[i];
                let (bx, by) = pts[(i + 1) % pts.len()];
                if (ay <= sy && by > sy) || (by <= sy && ay > sy) {
                    xs.push(ax + (sy - ay) / (by - ay) * (bx - ax));
                }
            }
            xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
            for pair in xs.chunks_exact(2) {
                let (from, to) = (pair[0].round() as i32, pair[1].round() as i32);
                for x in from..=to {
                    self.blend_pixel(x, y, color, alpha);
                }
            }
        }
    }

    fn stroke_arc(&mut self, cx: f32, cy: f32, r: f32, a0: f32, a1: f32, color: Rgb, alpha: u8) {
        const SEGMENTS: usize = 12;
        let mut prev = (cx + a0.cos() * r, cy + a0.sin() * r);
        for i in 1..=SEGMENTS {
            let a = a0 + (a1 - a0) * i as f32 / SEGMENTS as f32;
            let next = (cx + a.cos() * r, cy + a.sin() * r);
            self.line(prev.0 as i32, prev.1 as i32, next.0 as i32, next.1 as i32, color, alpha);
            // Second pass one row down for a 2px stroke
            self.line(
                prev.0 as i32,
                prev.1 as i32 + 1,
                next.0 as i32,
                next.1 as i32 + 1,
                color,
                alpha,
            );
            prev = next;
        }
    }

    /// Scalable 3x5 bitmap text.
    fn text(&mut self, text: &str, x: i32, y: i32, scale: i32, color: Rgb, alpha: u8) {
        let mut cx = x;
        for ch in text.chars() {
            let rows = glyph(ch);
            for (row, &bits) in rows.iter().enumerate() {
                for col in 0..3 {
                    if bits & (1 << (2 - col)) != 0 {
                        for dy in 0..scale {
                            for dx in 0..scale {
                                self.blend_pixel(
                                    cx + col * scale + dx,
                                    y + row as i32 * scale + dy,
                                    color,
                                    alpha,
                                );
                            }
                        }
                    }
                }
            }
            cx += 4 * scale; // 3 wide + 1 gap
            if cx >= WIN_W as i32 {
                break;
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Shape tessellation
// ════════════════════════════════════════════════════════════════════════════

fn place(v: (f32, f32), rotation: f32, cx: f32, cy: f32) -> (f32, f32) {
    let (sin, cos) = rotation.sin_cos();
    (cx + v.0 * cos - v.1 * sin, cy + v.0 * sin + v.1 * cos)
}

/// Five-point star: ten vertices alternating inner (size/2) and outer
/// (size) radius.
fn star_points(cx: f32, cy: f32, size: f32, rotation: f32) -> Vec<(f32, f32)> {
    let step = std::f32::consts::TAU / 10.0;
    (0..10)
        .map(|i| {
            let r = if i % 2 == 0 { size * 0.5 } else { size };
            let a = i as f32 * step;
            place((a.cos() * r, a.sin() * r), rotation, cx, cy)
        })
        .collect()
}

/// Heart outline: two symmetric cubic bezier lobes from the dimple at the
/// origin down to the point at (0, size) and back.
fn heart_points(cx: f32, cy: f32, size: f32, rotation: f32) -> Vec<(f32, f32)> {
    const STEPS: usize = 12;
    let s = size;
    let left = [(0.0, 0.0), (-s * 0.5, -s * 0.5), (-s, s * 0.5), (0.0, s)];
    let right = [(0.0, s), (s, s * 0.5), (s * 0.5, -s * 0.5), (0.0, 0.0)];

    let mut pts = Vec::with_capacity(2 * STEPS);
    for curve in [left, right] {
        for i in 0..STEPS {
            let t = i as f32 / STEPS as f32;
            pts.push(place(cubic(&curve, t), rotation, cx, cy));
        }
    }
    pts
}

fn cubic(p: &[(f32, f32); 4], t: f32) -> (f32, f32) {
    let u = 1.0 - t;
    let (b0, b1, b2, b3) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
    (
        b0 * p[0].0 + b1 * p[1].0 + b2 * p[2].0 + b3 * p[3].0,
        b0 * p[0].1 + b1 * p[1].1 + b2 * p[2].1 + b3 * p[3].1,
    )
}

fn text_width(text: &str, scale: i32) -> i32 {
    text.chars().count() as i32 * 4 * scale - scale
}

// ────────────────────────────────────────────────────────────────────────────
// Minimal 3x5 bitmap font
// ────────────────────────────────────────────────────────────────────────────

fn glyph(c: char) -> [u8; 5] {
    match c.to_ascii_lowercase() {
        '0' | 'o' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        'a' => [0b111, 0b101, 0b111, 0b101, 0b101],
        'b' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'c' => [0b111, 0b100, 0b100, 0b100, 0b111],
        'd' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'e' => [0b111, 0b100, 0b111, 0b100, 0b111],
        'f' => [0b111, 0b100, 0b111, 0b100, 0b100],
        'g' => [0b111, 0b100, 0b101, 0b101, 0b111],
        'h' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'i' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'j' => [0b001, 0b001, 0b001, 0b101, 0b111],
        'k' => [0b101, 0b101, 0b110, 0b101, 0b101],
        'l' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'm' => [0b101, 0b111, 0b101, 0b101, 0b101],
        'n' => [0b111, 0b101, 0b101, 0b101, 0b101],
        'p' => [0b111, 0b101, 0b111, 0b100, 0b100],
        'q' => [0b111, 0b101, 0b101, 0b111, 0b001],
        'r' => [0b110, 0b101, 0b110, 0b101, 0b101],
        's' => [0b111, 0b100, 0b111, 0b001, 0b111],
        't' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'u' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'v' => [0b101, 0b101, 0b101, 0b010, 0b010],
        'w' => [0b101, 0b101, 0b101, 0b111, 0b101],
        'x' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'y' => [0b101, 0b101, 0b111, 0b010, 0b010],
        'z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        '!' => [0b010, 0b010, 0b010, 0b000, 0b010],
        '=' => [0b000, 0b111, 0b000, 0b111, 0b000],
        '/' => [0b001, 0b001, 0b010, 0b100, 0b100],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        ' ' => [0b000, 0b000, 0b000, 0b000, 0b000],
        _ => [0b000, 0b000, 0b010, 0b000, 0b000], // fallback dot
    }
}
