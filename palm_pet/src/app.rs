//! Top-level application state and the frame loop.
//!
//! `AppState` owns the pet and the scene; `tick` runs one frame of updates
//! in the fixed order the toy is built around, and `run` wires the
//! observation slot, the input rig and the visualizer into the ~60fps loop.

use rand::Rng;

use hand_track::{HandObservation, ObservationSlot};
use pet_scene::pet::Pet;
use pet_scene::scene::Scene;

use crate::driver;
use crate::sim::SimHandRig;
use crate::visualizer::Visualizer;

#[cfg(feature = "leap")]
use crate::source::{spawn_hand_source, LeapHandSource};

// ════════════════════════════════════════════════════════════════════════════
// AppState
// ════════════════════════════════════════════════════════════════════════════

pub struct AppState {
    pub pet: Pet,
    pub scene: Scene,
    pub frame: u64,
    pub status: String,
}

impl AppState {
    pub fn new(rng: &mut impl Rng) -> Self {
        AppState {
            pet: Pet::new(),
            scene: Scene::new(rng),
            frame: 0,
            status: String::new(),
        }
    }

    /// One frame, in the fixed order: filter decay, rain, word spawn and
    /// lifecycle, hand interaction, firework kinematics.
    pub fn tick(&mut self, obs: Option<&HandObservation>, rng: &mut impl Rng) {
        self.frame += 1;

        self.scene.tick_filter();
        self.scene.update_rain(rng);
        self.scene.spawn_words(self.frame, rng);
        self.scene.update_words();

        driver::apply_hand(obs, &mut self.pet, &mut self.scene, self.frame, rng);

        self.scene.update_fireworks();
        self.refresh_status(obs);
    }

    fn refresh_status(&mut self, obs: Option<&HandObservation>) {
        let hand_seen = obs.map(|o| o.is_usable()).unwrap_or(false);
        self.status = if self.scene.filter.is_active() {
            match self.scene.last_collision {
                Some(word) => format!("{}!", word),
                None => String::new(),
            }
        } else if !hand_seen {
            "show me a hand".to_string()
        } else {
            String::new()
        };
    }
}

// ════════════════════════════════════════════════════════════════════════════
// run() — the main application loop
// ════════════════════════════════════════════════════════════════════════════

/// Run the toy until the window closes.
///
/// In the default build the simulation rig plays detector: it synthesises
/// an observation from mouse/keys each frame and publishes it to the slot.
/// With the `leap` feature, a hardware source thread feeds the slot
/// instead and the rig is just along for the quit keys.
pub fn run() -> Result<(), String> {
    let slot = ObservationSlot::new();

    #[cfg(feature = "leap")]
    spawn_hand_source(LeapHandSource, slot.clone());

    let mut vis = Visualizer::new()?;
    let mut rig = SimHandRig::new();
    let mut rng = rand::thread_rng();
    let mut app = AppState::new(&mut rng);

    while vis.is_open() {
        if !vis.poll_input(&mut rig) {
            break;
        }

        #[cfg(not(feature = "leap"))]
        slot.publish(Some(rig.observe()));

        let obs = slot.latest();
        app.tick(obs.as_ref(), &mut rng);
        vis.render(&app.pet, &app.scene, obs.as_ref(), &app.status);
    }

    Ok(())
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use pet_scene::rain::RAIN_COUNT;
    use pet_scene::scene::MAX_WORDS;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(41)
    }

    #[test]
    fn tick_advances_the_frame_counter() {
        let mut rng = rng();
        let mut app = AppState::new(&mut rng);
        app.tick(None, &mut rng);
        app.tick(None, &mut rng);
        assert_eq!(app.frame, 2);
    }

    #[test]
    fn ambient_scene_runs_without_a_hand() {
        let mut rng = rng();
        let mut app = AppState::new(&mut rng);
        for _ in 0..1000 {
            app.tick(None, &mut rng);
            assert_eq!(app.scene.raindrops.len(), RAIN_COUNT);
            assert!(app.scene.words.len() <= MAX_WORDS);
        }
        // Words did spawn on cadence even with no interaction.
        assert!(!app.scene.words.is_empty());
    }

    #[test]
    fn pet_tracks_the_sim_rig_pointer() {
        let mut rng = rng();
        let mut app = AppState::new(&mut rng);
        let mut rig = SimHandRig::new();
        rig.set_pointer(100.0, 120.0);

        let obs = rig.observe();
        for _ in 0..400 {
            app.tick(Some(&obs), &mut rng);
        }
        assert!((app.pet.x - 100.0).abs() < 2.0);
        assert!((app.pet.y - 120.0).abs() < 2.0);
    }

    #[test]
    fn held_open_hand_feeds_a_burst_train() {
        let mut rng = rng();
        let mut app = AppState::new(&mut rng);
        let mut rig = SimHandRig::new();
        rig.set_open(true);

        let obs = rig.observe();
        for _ in 0..16 {
            app.tick(Some(&obs), &mut rng);
        }
        // Frames 8 and 16 burst; nothing has faded out yet.
        assert_eq!(app.scene.fireworks.len(), 20);
    }

    #[test]
    fn status_reports_a_missing_hand() {
        let mut rng = rng();
        let mut app = AppState::new(&mut rng);
        app.tick(None, &mut rng);
        assert_eq!(app.status, "show me a hand");
    }

    #[test]
    fn status_celebrates_a_collision() {
        let mut rng = rng();
        let mut app = AppState::new(&mut rng);

        // Park a word on the pet and run one interactive frame.
        let mut w = pet_scene::word::FloatingWord::spawn(&mut rng);
        w.x = app.pet.x;
        w.y = app.pet.y;
        let text = w.text;
        app.scene.words.push(w);

        // Keep the fingertip on the pet so it barely moves before colliding.
        let mut rig = SimHandRig::new();
        rig.set_pointer(app.pet.x, app.pet.y);
        app.tick(Some(&rig.observe()), &mut rng);
        assert_eq!(app.status, format!("{}!", text));
    }
}
