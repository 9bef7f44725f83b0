//! Decks of cards, one per age.
//!
//! Dealing splits an age's deck evenly between the players in deck order;
//! shuffle first with a seeded [`GameRng`] for a random deal.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::card::Card;
use crate::core::GameRng;
use crate::error::{EngineError, Result};

/// Cards dealt to one player.
pub type Hand = Vec<Arc<Card>>;

/// The cards of every age.
#[derive(Clone, Debug, Default)]
pub struct Decks {
    cards_per_age: FxHashMap<u8, Vec<Arc<Card>>>,
}

impl Decks {
    /// Create decks from the cards of each age.
    pub fn new(cards_per_age: impl IntoIterator<Item = (u8, Vec<Card>)>) -> Self {
        let cards_per_age = cards_per_age
            .into_iter()
            .map(|(age, cards)| (age, cards.into_iter().map(Arc::new).collect()))
            .collect();
        Self { cards_per_age }
    }

    /// Parse decks from a JSON object mapping ages to card lists.
    ///
    /// ```
    /// use wonders_engine::cards::Decks;
    ///
    /// let decks = Decks::from_json(r#"{ "1": [ { "name": "Lumber Yard", "color": "brown" } ] }"#).unwrap();
    /// assert_eq!(decks.count_cards(1).unwrap(), 1);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: FxHashMap<u8, Vec<Card>> = serde_json::from_str(json)?;
        Ok(Self::new(raw))
    }

    /// Number of cards in an age's deck.
    pub fn count_cards(&self, age: u8) -> Result<usize> {
        Ok(self.deck(age)?.len())
    }

    /// Find a card of an age by name.
    pub fn get_card(&self, age: u8, name: &str) -> Result<Arc<Card>> {
        self.deck(age)?
            .iter()
            .find(|card| card.name == name)
            .cloned()
            .ok_or_else(|| EngineError::CardNotFound {
                age,
                name: name.to_string(),
            })
    }

    /// Deal an age's deck evenly between `player_count` players.
    pub fn deal(&self, age: u8, player_count: usize) -> Result<Vec<Hand>> {
        if player_count == 0 {
            return Err(EngineError::NoPlayers);
        }
        let deck = self.deck(age)?;
        if deck.len() % player_count != 0 {
            return Err(EngineError::UnevenDeal {
                cards: deck.len(),
                players: player_count,
            });
        }

        let hand_size = deck.len() / player_count;
        tracing::debug!(age, player_count, hand_size, "dealing age deck");

        let hands = if hand_size == 0 {
            vec![Hand::new(); player_count]
        } else {
            deck.chunks(hand_size).map(<[Arc<Card>]>::to_vec).collect()
        };
        Ok(hands)
    }

    /// Shuffle every age's deck, each from its own stream of `rng`.
    pub fn shuffle(&mut self, rng: &GameRng) {
        for (&age, deck) in &mut self.cards_per_age {
            rng.for_age(age).shuffle(deck);
        }
    }

    fn deck(&self, age: u8) -> Result<&[Arc<Card>]> {
        self.cards_per_age
            .get(&age)
            .map(Vec::as_slice)
            .ok_or(EngineError::MissingAge(age))
    }
}
