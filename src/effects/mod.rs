//! Effect system for cards and wonder stages.
//!
//! - `Effect`: Closed set of effect kinds, dispatched by `match`
//! - `BonusPerBoardElement`: Gold and points per element on chosen boards
//! - `Neighbors`: Read-only view of the owner's neighbors
//!
//! ## Design Philosophy
//!
//! Effects mutate only their owner's board. Neighbor boards are handed in
//! as shared references, so reading them can never change them. Points are
//! never accumulated: `compute_points` re-derives them from the boards as
//! they are at scoring time.

mod bonus;
mod effect;
mod neighbors;

pub use bonus::{BoardElement, BonusPerBoardElement};
pub use effect::{Discount, Effect};
pub use neighbors::Neighbors;
