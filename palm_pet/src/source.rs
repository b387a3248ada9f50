//! Hand sources — producers that feed the observation slot.
//!
//! A source runs on its own thread for the life of the process and
//! publishes whatever the detector delivers, as fast as it delivers it.
//! The frame loop never waits on a source; it just reads the slot.
//!
//! The default build uses the in-loop simulation rig instead (see
//! [`crate::sim`]); the hardware source below compiles only with the
//! `leap` feature.

use std::thread;

use hand_track::ObservationSlot;

/// Anything that can keep an [`ObservationSlot`] fed.
pub trait HandSource: Send + 'static {
    fn run(self: Box<Self>, slot: ObservationSlot);
}

/// Spawn a source on its own thread.  The thread owns its slot handle and
/// runs until the process exits; there are no cancellation semantics.
pub fn spawn_hand_source<S: HandSource>(source: S, slot: ObservationSlot) {
    thread::spawn(move || Box::new(source).run(slot));
}

// ════════════════════════════════════════════════════════════════════════════
// LeapHandSource — real hardware (feature = "leap")
// ════════════════════════════════════════════════════════════════════════════

/// Hand source backed by a LeapMotion controller.
///
/// Requires the `leap` feature flag and the LeapC shared library installed.
/// Each tracking frame, the first tracked hand's digit joints are mapped
/// onto the standard 21-point layout and projected from sensor millimetres
/// into the 640x480 view; frames with no hands publish an empty delivery so
/// the toy drops back to ambient animation.
#[cfg(feature = "leap")]
pub struct LeapHandSource;

#[cfg(feature = "leap")]
impl HandSource for LeapHandSource {
    fn run(self: Box<Self>, slot: ObservationSlot) {
        use leaprs::*;

        let mut connection = Connection::create(ConnectionConfig::default())
            .expect("Failed to open LeapC connection");
        connection.open().expect("Failed to open LeapMotion device");

        loop {
            let msg = match connection.poll(100) {
                Ok(m) => m,
                Err(_) => continue,
            };

            if let Event::Tracking(frame) = msg.event() {
                let hands: Vec<_> = frame.hands().collect();
                slot.publish(hands.first().map(leap::observation_from));
            }
        }
    }
}

#[cfg(feature = "leap")]
mod leap {
    use hand_track::keypoint::{Keypoint, LANDMARK_COUNT};
    use hand_track::HandObservation;
    use pet_scene::geom::map_range;
    use pet_scene::{VIEW_H, VIEW_W};

    // Interaction box mapped onto the view, millimetres.  Sensor x grows to
    // the user's right and y grows upward; the driver mirrors camera-space
    // x, so x is pre-flipped here and y inverted into pixel rows.
    const BOX_X: (f32, f32) = (-250.0, 250.0);
    const BOX_Y: (f32, f32) = (450.0, 100.0);

    fn project(x_mm: f32, y_mm: f32) -> Keypoint {
        Keypoint::new(
            map_range(x_mm, BOX_X.0, BOX_X.1, VIEW_W, 0.0),
            map_range(y_mm, BOX_Y.0, BOX_Y.1, 0.0, VIEW_H),
        )
    }

    /// Map one tracked hand onto the 21-point layout: palm stands in for
    /// the wrist, then four joints per digit, base to tip.
    pub fn observation_from(hand: &leaprs::Hand) -> HandObservation {
        let mut kps = Vec::with_capacity(LANDMARK_COUNT);

        let palm = hand.palm().position();
        kps.push(project(palm.x, palm.y));

        for digit in hand.digits() {
            let joints = [
                digit.proximal().prev_joint(),
                digit.intermediate().prev_joint(),
                digit.distal().prev_joint(),
                digit.distal().next_joint(),
            ];
            for j in joints {
                kps.push(project(j.x, j.y));
            }
        }

        HandObservation::new(kps)
    }
}
