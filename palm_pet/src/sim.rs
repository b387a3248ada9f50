//! Keyboard/mouse hand simulation.
//!
//! The default build has no camera and no sensor, so the window input
//! stands in for the detector: the mouse is the index fingertip, held keys
//! pinch and splay the hand.  The rig synthesises a full 21-point
//! observation each frame so downstream code cannot tell it from hardware
//! output.
//!
//! Keypoints are produced in *camera space* (pre-mirror): the interaction
//! driver reflects every x it consumes, so the rig flips the pointer first
//! and the on-screen finger lands exactly under the cursor.

use hand_track::keypoint::{Keypoint, LANDMARK_COUNT};
use hand_track::HandObservation;
use pet_scene::{VIEW_H, VIEW_W};

// ════════════════════════════════════════════════════════════════════════════
// Tuning
// ════════════════════════════════════════════════════════════════════════════

/// Pinch adjustment per frame while an arrow key is held.
const PINCH_STEP: f32 = 3.0;

/// Simulated pinch travel; a little past the mapped [20, 150] domain so
/// both radius clamps are reachable.
const PINCH_MIN: f32 = 10.0;
const PINCH_MAX: f32 = 170.0;

/// Rig idles mid-domain so the pet starts near its default radius.
const PINCH_START: f32 = 85.0;

/// Thumb-to-little span for the two hand poses.  Open must clear the
/// driver's 180-unit gesture threshold; closed must stay under it.
const OPEN_SPAN: f32 = 220.0;
const CLOSED_SPAN: f32 = 90.0;

// ════════════════════════════════════════════════════════════════════════════
// SimHandRig
// ════════════════════════════════════════════════════════════════════════════

pub struct SimHandRig {
    pointer: (f32, f32),
    pinch: f32,
    open: bool,
}

impl Default for SimHandRig {
    fn default() -> Self {
        SimHandRig {
            pointer: (VIEW_W / 2.0, VIEW_H / 2.0),
            pinch: PINCH_START,
            open: false,
        }
    }
}

impl SimHandRig {
    pub fn new() -> Self {
        SimHandRig::default()
    }

    /// Mouse position in view space.
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = (x, y);
    }

    pub fn widen_pinch(&mut self) {
        self.pinch = (self.pinch + PINCH_STEP).min(PINCH_MAX);
    }

    pub fn narrow_pinch(&mut self) {
        self.pinch = (self.pinch - PINCH_STEP).max(PINCH_MIN);
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    pub fn pinch(&self) -> f32 {
        self.pinch
    }

    /// Synthesise one camera-space observation for the current rig pose.
    ///
    /// The three gesture-bearing landmarks are exact: index tip at the
    /// (flipped) pointer, thumb tip `pinch` below it, little tip `span`
    /// across from the thumb.  The remaining joints are laid out along
    /// wrist-to-tip chains so keypoint markers draw a plausible hand.
    pub fn observe(&self) -> HandObservation {
        let cx = VIEW_W - self.pointer.0;
        let cy = self.pointer.1;
        let span = if self.open { OPEN_SPAN } else { CLOSED_SPAN };

        let wrist = (cx + 20.0, cy + 110.0);
        let tips = [
            (cx, cy + self.pinch),        // thumb
            (cx, cy),                     // index
            (cx + 18.0, cy + 8.0),        // middle
            (cx + 34.0, cy + 18.0),       // ring
            (cx + span, cy + self.pinch), // little, measured from the thumb
        ];

        let mut kps = Vec::with_capacity(LANDMARK_COUNT);
        kps.push(Keypoint::new(wrist.0, wrist.1));
        for tip in tips {
            for t in [0.4, 0.6, 0.8, 1.0] {
                kps.push(Keypoint::new(
                    wrist.0 + (tip.0 - wrist.0) * t,
                    wrist.1 + (tip.1 - wrist.1) * t,
                ));
            }
        }
        HandObservation::new(kps)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
