//! Boards seated around a table.
//!
//! The table resolves neighbors and drives the engine events a turn
//! orchestrator needs: playing a card, building a wonder stage, military
//! conflicts at the end of an age, and final scoring.
//!
//! ## Concurrency
//!
//! All mutations of one game go through `&mut Table`, which serializes
//! them. Wonders and cards are shared through `Arc`, so independent tables
//! can live on separate threads.
//!
//! ## Seating
//!
//! The left neighbor of seat `i` is seat `i - 1` and the right neighbor is
//! seat `i + 1`, wrapping around. A table of one has no neighbors.

use std::sync::Arc;

use crate::boards::{Board, ConflictOutcome, Score};
use crate::cards::Card;
use crate::core::{PlayerId, Settings};
use crate::effects::{Effect, Neighbors};
use crate::error::{EngineError, Result};
use crate::wonders::Wonder;

/// The boards of one game, in seating order.
#[derive(Clone, Debug)]
pub struct Table {
    settings: Settings,
    boards: Vec<Board>,
}

impl Table {
    /// Seat one player per wonder.
    pub fn new(settings: Settings, wonders: impl IntoIterator<Item = Arc<Wonder>>) -> Self {
        let boards: Vec<Board> = wonders
            .into_iter()
            .map(|wonder| Board::new(wonder, &settings))
            .collect();
        assert!(!boards.is_empty(), "Must have at least 1 player");
        assert!(boards.len() <= 255, "At most 255 players supported");

        Self { settings, boards }
    }

    /// Settings of the game.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.boards.len()
    }

    /// All boards, in seating order.
    #[must_use]
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Board of one player.
    pub fn board(&self, player: PlayerId) -> Result<&Board> {
        let idx = self.seat(player)?;
        Ok(&self.boards[idx])
    }

    /// Mutable board of one player.
    pub fn board_mut(&mut self, player: PlayerId) -> Result<&mut Board> {
        let idx = self.seat(player)?;
        Ok(&mut self.boards[idx])
    }

    /// Neighbors of one player.
    pub fn neighbors(&self, player: PlayerId) -> Result<Neighbors<'_>> {
        self.seat(player)?;
        let n = self.boards.len();
        if n == 1 {
            return Ok(Neighbors::none());
        }
        Ok(Neighbors::new(
            &self.boards[player.left(n).index()],
            &self.boards[player.right(n).index()],
        ))
    }

    /// Split the table into one player's board and its neighbors.
    pub fn split_mut(&mut self, player: PlayerId) -> Result<(&mut Board, Neighbors<'_>)> {
        let idx = self.seat(player)?;
        let n = self.boards.len();
        let (left, right) = (player.left(n).index(), player.right(n).index());

        let (before, rest) = self.boards.split_at_mut(idx);
        let Some((own, after)) = rest.split_first_mut() else {
            return Err(EngineError::UnknownSeat { seat: idx, players: n });
        };
        if n == 1 {
            return Ok((own, Neighbors::none()));
        }

        let before: &[Board] = before;
        let after: &[Board] = after;
        let neighbors = Neighbors::new(
            seated(before, after, idx, left),
            seated(before, after, idx, right),
        );
        Ok((own, neighbors))
    }

    /// Play a card on a player's board and apply its effects.
    ///
    /// Costs and prerequisites are the caller's to check.
    pub fn play_card(&mut self, player: PlayerId, card: Arc<Card>) -> Result<()> {
        let (board, neighbors) = self.split_mut(player)?;
        let gold_before = board.gold();
        board.add_card(Arc::clone(&card));
        for effect in &card.effects {
            effect.apply(board, neighbors);
        }
        tracing::debug!(
            %player,
            card = %card.name,
            gold = board.gold(),
            gold_gained = board.gold() - gold_before,
            "card played"
        );
        Ok(())
    }

    /// Apply a single effect on behalf of a player.
    pub fn apply_effect(&mut self, player: PlayerId, effect: &Effect) -> Result<()> {
        let (board, neighbors) = self.split_mut(player)?;
        effect.apply(board, neighbors);
        Ok(())
    }

    /// Build the next stage of a player's wonder.
    pub fn upgrade_wonder(&mut self, player: PlayerId) -> Result<()> {
        self.board_mut(player)?.upgrade_wonder_level()
    }

    /// Resolve the end-of-age conflicts of every player against each
    /// distinct neighbor.
    pub fn resolve_military_conflicts(&mut self, age: u8) {
        let n = self.boards.len();
        let won = self.settings.won_points(age);
        let lost = self.settings.lost_points_per_defeat;

        let outcomes: Vec<Vec<ConflictOutcome>> = PlayerId::all(n)
            .map(|player| {
                let mut opponents = vec![player.left(n), player.right(n)];
                opponents.dedup();
                opponents
                    .into_iter()
                    .filter(|&opponent| opponent != player)
                    .map(|opponent| {
                        let shields = self.boards[opponent.index()].military().shields();
                        self.boards[player.index()].military().confront(shields)
                    })
                    .collect()
            })
            .collect();

        for (board, results) in self.boards.iter_mut().zip(outcomes) {
            for outcome in results {
                match outcome {
                    ConflictOutcome::Victory => board.military_mut().victory(won),
                    ConflictOutcome::Defeat => board.military_mut().defeat(lost),
                    ConflictOutcome::Tie => {}
                }
            }
        }
        tracing::debug!(age, players = n, "military conflicts resolved");
    }

    /// Final score of one player.
    pub fn score(&self, player: PlayerId) -> Result<Score> {
        let board = self.board(player)?;
        let neighbors = self.neighbors(player)?;
        Ok(Score::compute(board, neighbors, &self.settings))
    }

    /// Final scores of every player, in seating order.
    #[must_use]
    pub fn final_scores(&self) -> Vec<Score> {
        PlayerId::all(self.boards.len())
            .filter_map(|player| self.score(player).ok())
            .inspect(|score| tracing::debug!(total = score.total(), "final score"))
            .collect()
    }

    fn seat(&self, player: PlayerId) -> Result<usize> {
        let idx = player.index();
        if idx < self.boards.len() {
            Ok(idx)
        } else {
            Err(EngineError::UnknownSeat {
                seat: idx,
                players: self.boards.len(),
            })
        }
    }
}

/// Board at seat `seat`, given the boards before and after seat `split`.
fn seated<'a>(before: &'a [Board], after: &'a [Board], split: usize, seat: usize) -> &'a Board {
    if seat < split {
        &before[seat]
    } else {
        &after[seat - split - 1]
    }
}
