//! # palm_pet
//!
//! A hand-tracked virtual pet toy.  A soft white blob chases your index
//! fingertip, floating words drift up from the bottom and wash the screen
//! in their color when the pet touches them, and opening your hand wide
//! launches bursts of shaped firework particles from your palm.
//!
//! ## Gesture → Action mapping
//!
//! | Gesture | Measurement | Action |
//! |---|---|---|
//! | Point | index fingertip position | pet follows, spring-damped |
//! | Pinch | thumb-tip ↔ index-tip distance | pet radius, 30–80 px |
//! | Touch a word | pet circle overlaps a word | color filter + circle cue |
//! | Open hand | thumb-tip ↔ little-tip span > 180 | firework burst train |
//!
//! ## Feature flags
//!
//! * (default) — **Simulation mode**: mouse and keyboard stand in for the
//!   hand; no camera or sensor needed.
//! * `leap` — **Hardware mode**: polls a LeapMotion controller via LeapC
//!   and maps its digit joints onto the 21-point hand layout.
//!
//! ### Simulation controls
//!
//! | Input | Gesture |
//! |---|---|
//! | Mouse | index fingertip |
//! | `Up` / `Down` (hold) | widen / narrow the pinch |
//! | `Space` (hold) | open hand — firework train |
//! | `Escape` or `Q` | quit |

pub mod app;
pub mod driver;
pub mod sim;
pub mod source;
pub mod visualizer;
