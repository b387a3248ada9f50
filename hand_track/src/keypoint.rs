//! Keypoints and hand observations.
//!
//! A hand observation is an ordered, index-addressable list of landmarks in
//! the standard 21-point hand layout.  Observations are produced once per
//! detector result, read by the frame loop, and carry no cross-frame
//! identity.

// ════════════════════════════════════════════════════════════════════════════
// Landmark indices (standard 21-point hand layout)
// ════════════════════════════════════════════════════════════════════════════

pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const PINKY_TIP: usize = 20;

pub const LANDMARK_COUNT: usize = 21;

/// Observations with fewer keypoints than this are treated as absent; the
/// frame simply runs without interaction.  Not an error.
pub const MIN_KEYPOINTS: usize = 8;

// ════════════════════════════════════════════════════════════════════════════
// Keypoint / HandObservation
// ════════════════════════════════════════════════════════════════════════════

/// One landmark: pixel position in the detector's (un-mirrored) camera
/// space, plus the detector's confidence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keypoint {
    pub x: f32,
    pub y: f32,
    pub confidence: f32,
}

impl Keypoint {
    pub fn new(x: f32, y: f32) -> Self {
        Keypoint { x, y, confidence: 1.0 }
    }
}

/// One detected hand, as delivered by the detector.
#[derive(Clone, Debug, Default)]
pub struct HandObservation {
    pub keypoints: Vec<Keypoint>,
}

impl HandObservation {
    pub fn new(keypoints: Vec<Keypoint>) -> Self {
        HandObservation { keypoints }
    }

    /// Whether this observation carries enough landmarks to drive
    /// interaction at all.
    pub fn is_usable(&self) -> bool {
        self.keypoints.len() >= MIN_KEYPOINTS
    }

    /// The landmark at `idx`, mirrored across the vertical midline of a
    /// view `view_w` wide.  The video feed is displayed flipped, so every
    /// coordinate the toy consumes goes through this.
    pub fn mirrored(&self, idx: usize, view_w: f32) -> Option<(f32, f32)> {
        self.keypoints.get(idx).map(|kp| (view_w - kp.x, kp.y))
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn obs_with(n: usize) -> HandObservation {
        HandObservation::new((0..n).map(|i| Keypoint::new(i as f32 * 10.0, 5.0)).collect())
    }

    #[test]
    fn usable_at_threshold() {
        assert!(!obs_with(0).is_usable());
        assert!(!obs_with(MIN_KEYPOINTS - 1).is_usable());
        assert!(obs_with(MIN_KEYPOINTS).is_usable());
        assert!(obs_with(LANDMARK_COUNT).is_usable());
    }

    #[test]
    fn mirrored_reflects_x_only() {
        let obs = obs_with(LANDMARK_COUNT);
        let (x, y) = obs.mirrored(INDEX_TIP, 640.0).unwrap();
        assert_eq!(x, 640.0 - 80.0);
        assert_eq!(y, 5.0);
    }

    #[test]
    fn mirrored_out_of_range_is_none() {
        let obs = obs_with(MIN_KEYPOINTS);
        assert!(obs.mirrored(PINKY_TIP, 640.0).is_none());
    }

    #[test]
    fn mirroring_twice_restores() {
        let obs = obs_with(LANDMARK_COUNT);
        let (x, _) = obs.mirrored(THUMB_TIP, 640.0).unwrap();
        assert_eq!(640.0 - x, obs.keypoints[THUMB_TIP].x);
    }
}
