//! The raindrop field.
//!
//! A fixed population of 50 drops created at startup.  A drop leaving the
//! bottom edge is recycled to a fresh position above the top, never
//! destroyed.

use rand::Rng;

use crate::{VIEW_H, VIEW_W};

/// Population size, constant for the process lifetime.
pub const RAIN_COUNT: usize = 50;

/// Length of the drawn streak, pixels.
pub const STREAK_LEN: f32 = 15.0;

#[derive(Clone, Copy, Debug)]
pub struct Raindrop {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
}

impl Raindrop {
    pub fn new(rng: &mut impl Rng) -> Self {
        let mut drop = Raindrop { x: 0.0, y: 0.0, speed: 0.0 };
        drop.reset(rng);
        drop
    }

    /// Re-seed above the top edge with a fresh fall speed.
    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.x = rng.gen_range(0.0..VIEW_W);
        self.y = rng.gen_range(-100.0..-10.0);
        self.speed = rng.gen_range(5.0..10.0);
    }

    /// One frame: fall, recycling on bottom-edge exit.
    pub fn fall(&mut self, rng: &mut impl Rng) {
        self.y += self.speed;
        if self.y > VIEW_H {
            self.reset(rng);
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn recycles_above_the_top_edge() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut drop = Raindrop::new(&mut rng);
        drop.y = VIEW_H + 1.0;
        drop.fall(&mut rng);
        assert!(drop.y < -10.0);
        assert!(drop.y >= -100.0);
        assert!(drop.speed >= 5.0 && drop.speed < 10.0);
        assert!(drop.x >= 0.0 && drop.x < VIEW_W);
    }

    #[test]
    fn falls_by_speed_while_on_screen() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut drop = Raindrop::new(&mut rng);
        drop.y = 100.0;
        drop.speed = 7.0;
        drop.fall(&mut rng);
        assert_eq!(drop.y, 107.0);
    }

    #[test]
    fn eventually_recycles_from_any_start() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut drop = Raindrop::new(&mut rng);
        let mut recycled = false;
        for _ in 0..200 {
            let before = drop.y;
            drop.fall(&mut rng);
            if drop.y < before {
                recycled = true;
                break;
            }
        }
        assert!(recycled);
    }
}
