//! Scene state: the entity collections and their per-frame bookkeeping.
//!
//! The scene owns the word, firework and raindrop collections plus the
//! filter overlay.  It spawns and prunes entities and runs the pet-vs-word
//! collision pass; it never draws.

use rand::Rng;

use crate::filter::FilterState;
use crate::firework::{self, FireworkParticle};
use crate::geom::dist;
use crate::pet::Pet;
use crate::rain::{Raindrop, RAIN_COUNT};
use crate::word::FloatingWord;

// ════════════════════════════════════════════════════════════════════════════
// Tuning
// ════════════════════════════════════════════════════════════════════════════

/// A fresh word is considered every this-many frames.
pub const WORD_INTERVAL: u64 = 90;

/// Concurrent word cap.
pub const MAX_WORDS: usize = 5;

/// Collision pad added to the pet radius; roughly the word's half-extent.
pub const WORD_HIT_PAD: f32 = 30.0;

// ════════════════════════════════════════════════════════════════════════════
// Scene
// ════════════════════════════════════════════════════════════════════════════

pub struct Scene {
    pub words: Vec<FloatingWord>,
    pub fireworks: Vec<FireworkParticle>,
    pub raindrops: Vec<Raindrop>,
    pub filter: FilterState,
    /// Text of the most recently hit word, for the status line.
    pub last_collision: Option<&'static str>,
}

impl Scene {
    pub fn new(rng: &mut impl Rng) -> Self {
        Scene {
            words: Vec::new(),
            fireworks: Vec::new(),
            raindrops: (0..RAIN_COUNT).map(|_| Raindrop::new(rng)).collect(),
            filter: FilterState::new(),
            last_collision: None,
        }
    }

    /// Spawn cadence: every [`WORD_INTERVAL`]th frame, one new word, while
    /// under the population cap.
    pub fn spawn_words(&mut self, frame: u64, rng: &mut impl Rng) {
        if frame % WORD_INTERVAL == 0 && self.words.len() < MAX_WORDS {
            self.words.push(FloatingWord::spawn(rng));
        }
    }

    /// Advance every word and drop the dead ones.
    pub fn update_words(&mut self) {
        for w in &mut self.words {
            w.update();
        }
        self.words.retain(|w| !w.is_dead());
    }

    /// Pet-vs-word collision pass.  Each hit re-triggers the filter (last
    /// one processed wins the color), zeroes the word's life so the next
    /// update removes it, and drops a circle cue at the word's position.
    pub fn check_word_collisions(&mut self, pet: &Pet, rng: &mut impl Rng) {
        for w in &mut self.words {
            if dist(pet.x, pet.y, w.x, w.y) < pet.radius + WORD_HIT_PAD {
                self.filter.trigger(w.color);
                w.life = 0;
                self.last_collision = Some(w.text);
                self.fireworks.push(firework::collision_cue(w.x, w.y, w.color, rng));
            }
        }
    }

    /// Launch an open-hand burst at `(x, y)`.
    pub fn spawn_burst(&mut self, x: f32, y: f32, rng: &mut impl Rng) {
        self.fireworks.extend(firework::spawn_burst(x, y, rng));
    }

    /// Advance every particle and drop the faded ones.
    pub fn update_fireworks(&mut self) {
        for p in &mut self.fireworks {
            p.update();
        }
        self.fireworks.retain(|p| !p.is_dead());
    }

    /// Advance the raindrop field; population stays constant.
    pub fn update_rain(&mut self, rng: &mut impl Rng) {
        for d in &mut self.raindrops {
            d.fall(rng);
        }
    }

    /// One frame of filter decay.
    pub fn tick_filter(&mut self) {
        self.filter.tick();
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::TRIGGER_ALPHA;
    use crate::firework::Shape;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(21)
    }

    fn scene(rng: &mut StdRng) -> Scene {
        Scene::new(rng)
    }

    #[test]
    fn starts_with_full_rain_population() {
        let mut rng = rng();
        let s = scene(&mut rng);
        assert_eq!(s.raindrops.len(), RAIN_COUNT);
        assert!(s.words.is_empty());
        assert!(s.fireworks.is_empty());
    }

    #[test]
    fn rain_population_is_constant() {
        let mut rng = rng();
        let mut s = scene(&mut rng);
        for _ in 0..500 {
            s.update_rain(&mut rng);
            assert_eq!(s.raindrops.len(), RAIN_COUNT);
        }
    }

    #[test]
    fn words_spawn_only_on_cadence_frames() {
        let mut rng = rng();
        let mut s = scene(&mut rng);
        s.spawn_words(89, &mut rng);
        assert!(s.words.is_empty());
        s.spawn_words(90, &mut rng);
        assert_eq!(s.words.len(), 1);
        s.spawn_words(91, &mut rng);
        assert_eq!(s.words.len(), 1);
    }

    #[test]
    fn word_population_never_exceeds_cap() {
        let mut rng = rng();
        let mut s = scene(&mut rng);
        for i in 0..100 {
            s.spawn_words(i * WORD_INTERVAL, &mut rng);
            assert!(s.words.len() <= MAX_WORDS);
        }
        assert_eq!(s.words.len(), MAX_WORDS);
    }

    #[test]
    fn collision_inside_pad_fires() {
        let mut rng = rng();
        let mut s = scene(&mut rng);
        let pet = Pet::new();

        let mut w = FloatingWord::spawn(&mut rng);
        w.x = pet.x + pet.radius + 29.0;
        w.y = pet.y;
        let (wx, wy, color) = (w.x, w.y, w.color);
        s.words.push(w);

        s.check_word_collisions(&pet, &mut rng);

        assert_eq!(s.filter.alpha, TRIGGER_ALPHA);
        assert_eq!(s.filter.color, Some(color));
        assert_eq!(s.words[0].life, 0);
        assert_eq!(s.fireworks.len(), 1);
        assert_eq!(s.fireworks[0].shape, Shape::Circle);
        assert_eq!(s.fireworks[0].pos.x, wx);
        assert_eq!(s.fireworks[0].pos.y, wy);
    }

    #[test]
    fn collision_outside_pad_does_nothing() {
        let mut rng = rng();
        let mut s = scene(&mut rng);
        let pet = Pet::new();

        let mut w = FloatingWord::spawn(&mut rng);
        w.x = pet.x + pet.radius + 31.0;
        w.y = pet.y;
        let life = w.life;
        s.words.push(w);

        s.check_word_collisions(&pet, &mut rng);

        assert_eq!(s.filter.alpha, 0);
        assert_eq!(s.words[0].life, life);
        assert!(s.fireworks.is_empty());
    }

    #[test]
    fn last_collision_in_order_wins_the_filter() {
        let mut rng = rng();
        let mut s = scene(&mut rng);
        let pet = Pet::new();

        let mut a = FloatingWord::spawn(&mut rng);
        a.x = pet.x;
        a.y = pet.y;
        a.color = (1, 1, 1);
        let mut b = a.clone();
        b.color = (2, 2, 2);
        s.words.push(a);
        s.words.push(b);

        s.check_word_collisions(&pet, &mut rng);
        assert_eq!(s.filter.color, Some((2, 2, 2)));
        assert_eq!(s.fireworks.len(), 2);
    }

    #[test]
    fn collided_word_is_gone_after_next_update() {
        let mut rng = rng();
        let mut s = scene(&mut rng);
        let pet = Pet::new();

        let mut w = FloatingWord::spawn(&mut rng);
        w.x = pet.x;
        w.y = pet.y;
        s.words.push(w);

        s.check_word_collisions(&pet, &mut rng);
        assert_eq!(s.words.len(), 1);
        s.update_words();
        assert!(s.words.is_empty());
    }

    #[test]
    fn burst_adds_ten_and_they_fade_away() {
        let mut rng = rng();
        let mut s = scene(&mut rng);
        s.spawn_burst(320.0, 240.0, &mut rng);
        assert_eq!(s.fireworks.len(), 10);
        for _ in 0..60 {
            s.update_fireworks();
        }
        assert!(s.fireworks.is_empty());
    }
}
