//! Player boards and everything they accumulate.
//!
//! - `Board`: one player's state, the surface effects mutate
//! - `ScienceTally`: science symbols and their best score
//! - `Military`: shields, conflict points and defeat tokens
//! - `Score`: end-of-game points by category

mod board;
mod military;
mod science;
mod score;

pub use board::Board;
pub use military::{ConflictOutcome, Military};
pub use science::{ScienceTally, ScienceType, DEFAULT_SET_BONUS};
pub use score::{Score, ScoreCategory};
