//! The latest-observation mailbox.
//!
//! The detector delivers results on its own thread with no phase alignment
//! to frame ticks.  The frame loop only ever wants the most recent result,
//! so the meeting point is a single slot with replace semantics: a write
//! swaps the whole delivery in (last write wins, no partial reads), a read
//! clones whatever is there.  Stale observations are reused, silently,
//! until a newer delivery lands.  No queue, no backpressure.

use std::sync::{Arc, Mutex};

use crate::keypoint::HandObservation;

/// Cloneable handle to the shared slot; one clone lives with each producer
/// thread, one with the frame loop.
#[derive(Clone, Default)]
pub struct ObservationSlot {
    inner: Arc<Mutex<Option<HandObservation>>>,
}

impl ObservationSlot {
    pub fn new() -> Self {
        ObservationSlot::default()
    }

    /// Replace the slot with a new delivery.  `None` means the detector saw
    /// no hands this result.
    pub fn publish(&self, delivery: Option<HandObservation>) {
        *self.inner.lock().unwrap() = delivery;
    }

    /// The most recent delivery, cloned out; the slot keeps it for the next
    /// reader.
    pub fn latest(&self) -> Option<HandObservation> {
        self.inner.lock().unwrap().clone()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
