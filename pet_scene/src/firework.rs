//! Firework particles.
//!
//! An open-hand gesture launches a 10-particle burst; word collisions drop a
//! single circle as a feedback cue.  Particles fall under constant gravity
//! and fade by a fixed alpha step until removed.

use std::f32::consts::TAU;

use rand::Rng;

use crate::geom::Vec2;
use crate::word::Rgb;

// ════════════════════════════════════════════════════════════════════════════
// Tuning
// ════════════════════════════════════════════════════════════════════════════

/// Downward acceleration applied to every particle, per frame.
pub const GRAVITY: f32 = 0.1;

/// Alpha lost per update; 255 / 5 = 51 frames of life.
pub const ALPHA_FADE: i32 = 5;

/// Rotation advance per frame, radians.
pub const SPIN: f32 = 0.1;

/// Particles per open-hand burst.
pub const BURST_SIZE: usize = 10;

// ════════════════════════════════════════════════════════════════════════════
// Shape — closed set, fixed at creation
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Circle,
    Star,
    Triangle,
    Heart,
}

impl Shape {
    pub fn pick(rng: &mut impl Rng) -> Shape {
        match rng.gen_range(0..4) {
            0 => Shape::Circle,
            1 => Shape::Star,
            2 => Shape::Heart,
            _ => Shape::Triangle,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// FireworkParticle
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Debug)]
pub struct FireworkParticle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub shape: Shape,
    pub color: Rgb,
    pub size: f32,
    pub alpha: i32,
    pub rotation: f32,
}

impl FireworkParticle {
    /// A single particle flung in a random direction.  `base_size` is
    /// scattered by a [0.5, 1.5) multiplier per particle.
    pub fn new(x: f32, y: f32, shape: Shape, color: Rgb, base_size: f32, rng: &mut impl Rng) -> Self {
        let angle = rng.gen_range(0.0..TAU);
        let speed = rng.gen_range(2.0..6.0);
        FireworkParticle {
            pos: Vec2::new(x, y),
            vel: Vec2::new(angle.cos() * speed, angle.sin() * speed),
            shape,
            color,
            size: base_size * rng.gen_range(0.5..1.5),
            alpha: 255,
            rotation: rng.gen_range(0.0..TAU),
        }
    }

    /// One frame.  Gravity accumulates into the velocity *before* the
    /// position integrates it; the trajectory depends on this order.
    pub fn update(&mut self) {
        self.vel.y += GRAVITY;
        self.pos += self.vel;
        self.alpha -= ALPHA_FADE;
        self.rotation += SPIN;
    }

    pub fn is_dead(&self) -> bool {
        self.alpha <= 0
    }
}

/// Launch a burst: one random shape, color and base size for the whole
/// volley, ten particles scattered from `(x, y)`.
pub fn spawn_burst(x: f32, y: f32, rng: &mut impl Rng) -> Vec<FireworkParticle> {
    let shape = Shape::pick(rng);
    let color = (rng.gen::<u8>(), rng.gen::<u8>(), rng.gen::<u8>());
    let base_size = rng.gen_range(5.0..15.0);
    (0..BURST_SIZE)
        .map(|_| FireworkParticle::new(x, y, shape, color, base_size, rng))
        .collect()
}

/// The small circle dropped where a word was hit.
pub fn collision_cue(x: f32, y: f32, color: Rgb, rng: &mut impl Rng) -> FireworkParticle {
    FireworkParticle::new(x, y, Shape::Circle, color, 30.0, rng)
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
