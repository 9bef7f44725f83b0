//! Player seats and relative positions.
//!
//! ## PlayerId
//!
//! Seat index at the table, 0-based. Seats wrap around: the left neighbor
//! of seat 0 is the last seat.
//!
//! ## RelativePosition
//!
//! The three boards an effect can look at: its owner's and the two
//! neighbors'.

use serde::{Deserialize, Serialize};

/// Player seat supporting 1-255 players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Seat of the left neighbor at a table of `player_count` players.
    #[must_use]
    pub fn left(self, player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        let idx = (self.index() + player_count - 1) % player_count;
        Self(idx as u8)
    }

    /// Seat of the right neighbor at a table of `player_count` players.
    #[must_use]
    pub fn right(self, player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Resolve a relative position from this seat.
    #[must_use]
    pub fn at(self, position: RelativePosition, player_count: usize) -> Self {
        match position {
            RelativePosition::Own => self,
            RelativePosition::Left => self.left(player_count),
            RelativePosition::Right => self.right(player_count),
        }
    }

    /// Iterate over all seats for a game with `player_count` players.
    ///
    /// ```
    /// use wonders_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A board position relative to an effect's owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelativePosition {
    /// The owner's own board.
    Own,
    /// The left neighbor's board.
    Left,
    /// The right neighbor's board.
    Right,
}

impl RelativePosition {
    /// Whether this position designates a neighbor.
    #[must_use]
    pub const fn is_neighbor(self) -> bool {
        !matches!(self, RelativePosition::Own)
    }
}
