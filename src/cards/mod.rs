//! Card system: cards, colors, requirements, and decks.
//!
//! ## Key Types
//!
//! - `Card`: Static card data with its cost and effects
//! - `Color`: Card color, also the scoring category of its points
//! - `Requirements`: Gold and resources needed to build
//! - `Decks`: Cards of each age, dealt evenly to the players

mod card;
mod decks;

pub use card::{Card, Color, Requirements};
pub use decks::{Decks, Hand};
