//! Read-only view of the boards seated next to an effect's owner.

use crate::boards::Board;
use crate::core::RelativePosition;

/// The owner's neighbors, when known.
///
/// Neighbors are shared references: an effect can read them but never
/// mutate them. Wonder stages are applied without neighbors, in which case
/// both sides are `None`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Neighbors<'a> {
    /// Board of the left neighbor.
    pub left: Option<&'a Board>,
    /// Board of the right neighbor.
    pub right: Option<&'a Board>,
}

impl<'a> Neighbors<'a> {
    /// Both neighbors present.
    #[must_use]
    pub fn new(left: &'a Board, right: &'a Board) -> Self {
        Self {
            left: Some(left),
            right: Some(right),
        }
    }

    /// No neighbor context.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Resolve a position against the owner's board.
    #[must_use]
    pub fn resolve<'b>(&self, own: &'b Board, position: RelativePosition) -> Option<&'b Board>
    where
        'a: 'b,
    {
        match position {
            RelativePosition::Own => Some(own),
            RelativePosition::Left => self.left,
            RelativePosition::Right => self.right,
        }
    }
}
