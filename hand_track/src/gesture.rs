//! Per-frame gesture measurements.
//!
//! Everything here is a pure read of one observation: no smoothing, no
//! debouncing, no state.  Each measurement returns `None` when the landmark
//! it needs is missing, so a short observation degrades feature by feature
//! instead of failing.

use crate::keypoint::{HandObservation, INDEX_TIP, MIDDLE_MCP, PINKY_TIP, THUMB_TIP};

/// Mirrored index fingertip; the pet's follow target.
pub fn fingertip(obs: &HandObservation, view_w: f32) -> Option<(f32, f32)> {
    obs.mirrored(INDEX_TIP, view_w)
}

/// Mirrored middle-finger knuckle; stands in for the palm center and
/// anchors firework bursts.
pub fn palm(obs: &HandObservation, view_w: f32) -> Option<(f32, f32)> {
    obs.mirrored(MIDDLE_MCP, view_w)
}

/// Thumb-tip to index-tip distance; drives the pet's radius.
pub fn pinch_distance(obs: &HandObservation, view_w: f32) -> Option<f32> {
    let (tx, ty) = obs.mirrored(THUMB_TIP, view_w)?;
    let (ix, iy) = obs.mirrored(INDEX_TIP, view_w)?;
    Some(euclid(tx, ty, ix, iy))
}

/// Thumb-tip to little-tip distance; the open-hand proxy.
pub fn hand_span(obs: &HandObservation, view_w: f32) -> Option<f32> {
    let (tx, ty) = obs.mirrored(THUMB_TIP, view_w)?;
    let (px, py) = obs.mirrored(PINKY_TIP, view_w)?;
    Some(euclid(tx, ty, px, py))
}

fn euclid(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    (dx * dx + dy * dy).sqrt()
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
