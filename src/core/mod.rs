//! Core engine types: seats, relative positions, settings, RNG.
//!
//! These are the building blocks every other module depends on.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{Settings, AGE_COUNT};
pub use player::{PlayerId, RelativePosition};
pub use rng::GameRng;
