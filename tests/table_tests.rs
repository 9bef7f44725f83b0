//! Table integration tests.
//!
//! These tests run small games end to end: decks are dealt, cards played
//! through the table, conflicts resolved, and final scores computed, for
//! several player counts.

use std::sync::Arc;

use wonders_engine::boards::ScoreCategory;
use wonders_engine::cards::{Card, Color, Decks};
use wonders_engine::core::{GameRng, PlayerId, RelativePosition, Settings};
use wonders_engine::effects::{BoardElement, BonusPerBoardElement, Effect};
use wonders_engine::resources::{ResourceSet, ResourceType};
use wonders_engine::table::Table;
use wonders_engine::wonders::{Wonder, WonderStage};

/// Route engine logs to the test harness. Filter with `RUST_LOG`.
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn wonder(name: &str) -> Arc<Wonder> {
    Arc::new(
        Wonder::new(
            name,
            ResourceSet::of(ResourceType::Stone, 1),
            vec![
                WonderStage::new(ResourceSet::of(ResourceType::Stone, 2), Effect::RawPointsIncrease(3)),
                WonderStage::new(ResourceSet::of(ResourceType::Wood, 3), Effect::GoldIncrease(3)),
            ],
        )
        .unwrap(),
    )
}

fn table(players: usize) -> Table {
    Table::new(Settings::default(), (0..players).map(|i| wonder(&format!("Wonder {}", i))))
}

/// Guild paying 1 point per brown card of both neighbors.
fn workers_guild() -> Card {
    Card::new("Workers Guild", Color::Purple).with_effect(Effect::BonusPerBoardElement(
        BonusPerBoardElement::new(
            [RelativePosition::Left, RelativePosition::Right],
            BoardElement::cards([Color::Brown]),
        )
        .with_points(1),
    ))
}

/// Points are derived from the boards at scoring time, not when played.
#[test]
fn test_guild_scores_cards_played_after_it() {
    let mut table = table(3);
    table.play_card(PlayerId::new(0), Arc::new(workers_guild())).unwrap();

    for seat in [1, 2] {
        for name in ["Lumber Yard", "Ore Vein"] {
            table
                .play_card(PlayerId::new(seat), Arc::new(Card::new(name, Color::Brown)))
                .unwrap();
        }
    }

    let score = table.score(PlayerId::new(0)).unwrap();
    assert_eq!(score.get(ScoreCategory::Guild), 4);
    assert_eq!(score.gold, 1);
    assert_eq!(score.total(), 5);
}

/// Every player count from 1 to 7 can be seated and scored.
#[test]
fn test_any_player_count() {
    for players in 1..=7 {
        let mut table = table(players);
        for player in PlayerId::all(players) {
            table.upgrade_wonder(player).unwrap();
            table
                .play_card(player, Arc::new(Card::new("Altar", Color::Blue).with_effect(Effect::RawPointsIncrease(2))))
                .unwrap();
        }
        table.resolve_military_conflicts(1);

        let scores = table.final_scores();
        assert_eq!(scores.len(), players);
        for score in scores {
            assert_eq!(score.civil, 2);
            assert_eq!(score.wonder, 3);
            assert_eq!(score.military, 0);
            assert_eq!(score.gold, 1);
        }
    }
}

/// Full flow: shuffle, deal, play every hand, score.
#[test]
fn test_dealt_game() {
    init_logging();
    let players = 3;
    let cards: Vec<Card> = (0..9)
        .map(|i| match i % 3 {
            0 => Card::new(format!("Tavern {}", i), Color::Yellow).with_effect(Effect::GoldIncrease(5)),
            1 => Card::new(format!("Barracks {}", i), Color::Red).with_effect(Effect::MilitaryReinforcements(1)),
            _ => Card::new(format!("Baths {}", i), Color::Blue).with_effect(Effect::RawPointsIncrease(3)),
        })
        .collect();

    let mut decks = Decks::new([(1, cards)]);
    decks.shuffle(&GameRng::new(42));
    let hands = decks.deal(1, players).unwrap();
    assert_eq!(hands.len(), players);

    let mut table = table(players);
    for (player, hand) in PlayerId::all(players).zip(hands) {
        for card in hand {
            table.play_card(player, card).unwrap();
        }
    }
    table.resolve_military_conflicts(1);

    let boards = table.boards();
    let total_cards: usize = boards.iter().map(|b| b.played_cards().len()).sum();
    assert_eq!(total_cards, 9);

    let total_shields: u32 = boards.iter().map(|b| b.military().shields()).sum();
    assert_eq!(total_shields, 3);

    let scores = table.final_scores();
    let civil: i32 = scores.iter().map(|s| s.civil).sum();
    assert_eq!(civil, 9);
}

/// Playing a card at an unknown seat fails without touching the table.
#[test]
fn test_play_at_unknown_seat() {
    let mut table = table(2);
    let result = table.play_card(PlayerId::new(4), Arc::new(Card::new("Baths", Color::Blue)));
    assert!(result.is_err());
    assert!(table.boards().iter().all(|b| b.played_cards().is_empty()));
}
