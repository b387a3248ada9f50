//! # hand_track
//!
//! The hand-observation side of the palm pet toy: what a hand-pose detector
//! delivers, how the toy reads it, and the mailbox the two meet in.
//!
//! The detector itself is an external collaborator (hardware or simulated);
//! this crate only models its output:
//!
//! * [`keypoint`] — a 21-landmark observation with the standard index
//!   layout (thumb tip 4, index tip 8, middle knuckle 9, little tip 20)
//!   and the mirroring applied to match the flipped video display.
//! * [`gesture`] — the per-frame measurements the toy derives: fingertip
//!   position, thumb-index pinch, thumb-little hand span.
//! * [`slot`] — the single-slot mailbox between the detector's delivery
//!   thread and the frame loop.  Last write wins; stale observations are
//!   reused until a newer one lands.

pub mod gesture;
pub mod keypoint;
pub mod slot;

pub use keypoint::{HandObservation, Keypoint};
pub use slot::ObservationSlot;
