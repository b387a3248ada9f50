//! # pet_scene
//!
//! Entity models and per-frame scene state for the palm pet toy.
//!
//! Everything in this crate is plain per-frame arithmetic on small structs:
//! no windowing, no threads, no wall-clock time.  A seeded RNG makes every
//! update deterministic, so the whole scene can be driven in tests without a
//! camera or a window.
//!
//! | Module | Owns |
//! |---|---|
//! | [`geom`] | 2D helpers: distance, linear mapping, `Vec2` |
//! | [`pet`] | the follower blob: spring-follow + pinch-sized radius |
//! | [`word`] | floating words and the fixed word/color table |
//! | [`firework`] | burst particles with a closed shape set |
//! | [`rain`] | the recycled raindrop field |
//! | [`filter`] | the full-screen collision-feedback color wash |
//! | [`scene`] | collections, spawn cadence, collisions, pruning |

pub mod geom;
pub mod pet;
pub mod word;
pub mod firework;
pub mod rain;
pub mod filter;
pub mod scene;

/// Fixed view size, matching the 640x480 camera feed the toy is built for.
pub const VIEW_W: f32 = 640.0;
pub const VIEW_H: f32 = 480.0;
