//! The per-frame interaction driver.
//!
//! Consumes the latest hand observation and turns it into pet motion,
//! pet sizing, collision checks and firework bursts.  Entirely stateless
//! per frame: no debouncing, no edge detection.  A held open hand produces
//! a steady burst train, gated only by the frame cadence.

use rand::Rng;

use hand_track::{gesture, HandObservation};
use pet_scene::pet::Pet;
use pet_scene::scene::Scene;
use pet_scene::VIEW_W;

// ════════════════════════════════════════════════════════════════════════════
// Tuning
// ════════════════════════════════════════════════════════════════════════════

/// Thumb-to-little span above which the hand counts as open.  Tuned for
/// the reference camera geometry; scale with camera distance.
pub const SPAN_OPEN: f32 = 180.0;

/// A burst fires only on frames where `frame % BURST_CADENCE == 0`,
/// throttling a held open hand to a train instead of a flood.
pub const BURST_CADENCE: u64 = 8;

// ════════════════════════════════════════════════════════════════════════════
// apply_hand
// ════════════════════════════════════════════════════════════════════════════

/// Run one frame of interaction.
///
/// An absent or too-short observation is a no-op: the pet, words, fireworks
/// and rain keep animating on their own.  Each step degrades independently
/// when the landmark it needs is missing.
pub fn apply_hand(
    obs: Option<&HandObservation>,
    pet: &mut Pet,
    scene: &mut Scene,
    frame: u64,
    rng: &mut impl Rng,
) {
    let Some(obs) = obs else { return };
    if !obs.is_usable() {
        return;
    }

    // Follow first: the bounds clamp uses the radius from the previous
    // frame, then the pinch writes the new one.
    if let Some((ix, iy)) = gesture::fingertip(obs, VIEW_W) {
        pet.follow(ix, iy);
    }
    if let Some(pinch) = gesture::pinch_distance(obs, VIEW_W) {
        pet.resize(pinch);
    }

    scene.check_word_collisions(pet, rng);

    if let Some(span) = gesture::hand_span(obs, VIEW_W) {
        if span > SPAN_OPEN && frame % BURST_CADENCE == 0 {
            if let Some((px, py)) = gesture::palm(obs, VIEW_W) {
                scene.spawn_burst(px, py, rng);
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use hand_track::keypoint::{
        Keypoint, INDEX_TIP, LANDMARK_COUNT, MIDDLE_MCP, PINKY_TIP, THUMB_TIP,
    };
    use pet_scene::firework::BURST_SIZE;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(31)
    }

    /// A full observation with the gesture landmarks pinned.
    fn obs(thumb: (f32, f32), index: (f32, f32), pinky: (f32, f32)) -> HandObservation {
        let mut kps = vec![Keypoint::new(300.0, 300.0); LANDMARK_COUNT];
        kps[THUMB_TIP] = Keypoint::new(thumb.0, thumb.1);
        kps[INDEX_TIP] = Keypoint::new(index.0, index.1);
        kps[PINKY_TIP] = Keypoint::new(pinky.0, pinky.1);
        kps[MIDDLE_MCP] = Keypoint::new(320.0, 320.0);
        HandObservation::new(kps)
    }

    #[test]
    fn absent_observation_is_a_no_op() {
        let mut rng = rng();
        let mut pet = Pet::new();
        let mut scene = Scene::new(&mut rng);
        let (x0, y0, r0) = (pet.x, pet.y, pet.radius);

        apply_hand(None, &mut pet, &mut scene, 8, &mut rng);

        assert_eq!((pet.x, pet.y, pet.radius), (x0, y0, r0));
        assert!(scene.fireworks.is_empty());
    }

    #[test]
    fn short_observation_is_a_no_op() {
        let mut rng = rng();
        let mut pet = Pet::new();
        let mut scene = Scene::new(&mut rng);
        let (x0, y0) = (pet.x, pet.y);

        let short = HandObservation::new(vec![Keypoint::new(10.0, 10.0); 7]);
        apply_hand(Some(&short), &mut pet, &mut scene, 8, &mut rng);

        assert_eq!((pet.x, pet.y), (x0, y0));
        assert!(scene.fireworks.is_empty());
    }

    #[test]
    fn pet_moves_toward_the_mirrored_fingertip() {
        let mut rng = rng();
        let mut pet = Pet::new();
        let mut scene = Scene::new(&mut rng);

        // Fingertip at camera x=100 mirrors to 540, right of center.
        let o = obs((100.0, 240.0), (100.0, 240.0), (100.0, 240.0));
        let x0 = pet.x;
        apply_hand(Some(&o), &mut pet, &mut scene, 1, &mut rng);
        assert!(pet.x > x0);
    }

    #[test]
    fn pinch_drives_the_radius() {
        let mut rng = rng();
        let mut pet = Pet::new();
        let mut scene = Scene::new(&mut rng);

        // Thumb 150 units from the index tip: radius pegs at the maximum.
        let o = obs((100.0, 100.0), (250.0, 100.0), (100.0, 100.0));
        apply_hand(Some(&o), &mut pet, &mut scene, 1, &mut rng);
        assert_eq!(pet.radius, 80.0);
    }

    #[test]
    fn held_open_hand_bursts_on_the_cadence() {
        let mut rng = rng();
        let mut pet = Pet::new();
        let mut scene = Scene::new(&mut rng);

        // Span 181: just over the threshold.
        let o = obs((100.0, 100.0), (100.0, 100.0), (281.0, 100.0));
        for frame in 1..=16 {
            apply_hand(Some(&o), &mut pet, &mut scene, frame, &mut rng);
        }
        // Frames 8 and 16 fire: two bursts, ten particles each.
        assert_eq!(scene.fireworks.len(), 2 * BURST_SIZE);
    }

    #[test]
    fn closed_hand_never_bursts() {
        let mut rng = rng();
        let mut pet = Pet::new();
        let mut scene = Scene::new(&mut rng);

        let o = obs((100.0, 100.0), (100.0, 100.0), (279.0, 100.0));
        for frame in 1..=64 {
            apply_hand(Some(&o), &mut pet, &mut scene, frame, &mut rng);
        }
        assert!(scene.fireworks.is_empty());
    }

    #[test]
    fn burst_spawns_at_the_mirrored_palm() {
        let mut rng = rng();
        let mut pet = Pet::new();
        let mut scene = Scene::new(&mut rng);

        let o = obs((100.0, 100.0), (100.0, 100.0), (281.0, 100.0));
        apply_hand(Some(&o), &mut pet, &mut scene, 8, &mut rng);

        // Palm pinned at camera (320, 320) mirrors to (320, 320).
        assert_eq!(scene.fireworks.len(), BURST_SIZE);
        for p in &scene.fireworks {
            assert_eq!((p.pos.x, p.pos.y), (320.0, 320.0));
        }
    }
}
