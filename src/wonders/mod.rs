//! Wonder templates and their stages.

mod wonder;

pub use wonder::{Wonder, WonderStage};
