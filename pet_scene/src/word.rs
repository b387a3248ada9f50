//! Floating words.
//!
//! Words rise from below the bottom edge, fade as their life runs down, and
//! are removed once dead.  Colliding with the pet zeroes the life early and
//! hands the word's color to the filter overlay.

use rand::Rng;

use crate::{VIEW_H, VIEW_W};

// ════════════════════════════════════════════════════════════════════════════
// Word table — text paired with its filter color
// ════════════════════════════════════════════════════════════════════════════

pub type Rgb = (u8, u8, u8);

pub const WORD_TABLE: [(&str, Rgb); 6] = [
    ("Confidence", (255, 100, 100)),
    ("Courage",    (255, 165, 0)),
    ("Wisdom",     (100, 100, 255)),
    ("Kindness",   (255, 100, 255)),
    ("Strength",   (50,  255, 50)),
    ("Joy",        (255, 215, 0)),
];

/// Words above the top edge by more than this are gone for good.
pub const TOP_MARGIN: f32 = -50.0;

/// Life at spawn; doubles as the maximum draw alpha.
pub const START_LIFE: i32 = 255;

// ════════════════════════════════════════════════════════════════════════════
// FloatingWord
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Debug)]
pub struct FloatingWord {
    pub text: &'static str,
    pub color: Rgb,
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub life: i32,
}

impl FloatingWord {
    /// Spawn a word drawn uniformly from [`WORD_TABLE`], starting just below
    /// the visible bottom edge with a random upward speed.
    pub fn spawn(rng: &mut impl Rng) -> Self {
        let (text, color) = WORD_TABLE[rng.gen_range(0..WORD_TABLE.len())];
        FloatingWord {
            text,
            color,
            x: rng.gen_range(50.0..VIEW_W - 50.0),
            y: VIEW_H + 20.0,
            speed: rng.gen_range(1.0..3.0),
            life: START_LIFE,
        }
    }

    /// One frame: rise by `speed`, lose one life.
    pub fn update(&mut self) {
        self.y -= self.speed;
        self.life -= 1;
    }

    pub fn is_dead(&self) -> bool {
        self.y < TOP_MARGIN || self.life <= 0
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
