//! Effect integration tests.
//!
//! These tests drive effects against real boards seated at a table and
//! check the gold they grant immediately and the points they report at
//! scoring.

use std::sync::Arc;

use wonders_engine::cards::{Card, Color};
use wonders_engine::core::{PlayerId, RelativePosition, Settings};
use wonders_engine::effects::{BoardElement, BonusPerBoardElement, Discount, Effect, Neighbors};
use wonders_engine::resources::{Production, Provider, ResourceSet, ResourceType};
use wonders_engine::table::Table;
use wonders_engine::wonders::{Wonder, WonderStage};
use wonders_engine::boards::{Board, ScienceTally, ScienceType};

/// Wonder whose stages grant nothing, so levels can be raised freely.
fn plain_wonder(name: &str, stages: usize) -> Arc<Wonder> {
    let stages = (0..stages)
        .map(|_| WonderStage::new(ResourceSet::new(), Effect::RawPointsIncrease(0)))
        .collect();
    Arc::new(Wonder::new(name, ResourceSet::new(), stages).unwrap())
}

fn table(players: usize) -> Table {
    Table::new(
        Settings::default(),
        (0..players).map(|i| plain_wonder(&format!("Wonder {}", i), 3)),
    )
}

fn level_up(table: &mut Table, player: u8, levels: usize) {
    for _ in 0..levels {
        table.upgrade_wonder(PlayerId::new(player)).unwrap();
    }
}

/// Bonus on own and left wonder levels: 2 + 1 levels give 3 gold and 3 matches.
#[test]
fn test_wonder_level_bonus_counts_own_and_left() {
    let mut table = table(3);
    let me = PlayerId::new(1);
    level_up(&mut table, 1, 2);
    level_up(&mut table, 0, 1);
    level_up(&mut table, 2, 3);

    let bonus = BonusPerBoardElement::new(
        [RelativePosition::Own, RelativePosition::Left],
        BoardElement::WonderLevel,
    )
    .with_gold(1);
    let effect = Effect::BonusPerBoardElement(bonus.clone());

    let gold_before = table.board(me).unwrap().gold();
    table.apply_effect(me, &effect).unwrap();
    assert_eq!(table.board(me).unwrap().gold(), gold_before + 3);

    let neighbors = table.neighbors(me).unwrap();
    let board = table.board(me).unwrap();
    assert_eq!(bonus.match_count(board, neighbors), 3);
    // Points rate is zero.
    assert_eq!(effect.compute_points(board, neighbors), 0);

    let scoring = Effect::BonusPerBoardElement(bonus.with_points(1));
    assert_eq!(scoring.compute_points(board, neighbors), 3);
}

/// Applying twice doubles the gold, while points are recomputed, not accumulated.
#[test]
fn test_apply_twice_doubles_gold_only() {
    let mut table = table(3);
    let me = PlayerId::new(0);
    let right = PlayerId::new(1);
    for name in ["Lumber Yard", "Clay Pool"] {
        table
            .play_card(right, Arc::new(Card::new(name, Color::Brown)))
            .unwrap();
    }

    let effect = Effect::BonusPerBoardElement(
        BonusPerBoardElement::new(
            [RelativePosition::Left, RelativePosition::Right],
            BoardElement::cards([Color::Brown]),
        )
        .with_gold(1)
        .with_points(2),
    );

    let start = table.board(me).unwrap().gold();
    table.apply_effect(me, &effect).unwrap();
    let points_once = {
        let neighbors = table.neighbors(me).unwrap();
        effect.compute_points(table.board(me).unwrap(), neighbors)
    };
    table.apply_effect(me, &effect).unwrap();
    let points_twice = {
        let neighbors = table.neighbors(me).unwrap();
        effect.compute_points(table.board(me).unwrap(), neighbors)
    };

    assert_eq!(table.board(me).unwrap().gold(), start + 4);
    assert_eq!(points_once, 4);
    assert_eq!(points_twice, 4);
}

/// Neighbors are read, never written.
#[test]
fn test_neighbors_unchanged_by_apply() {
    let mut table = table(3);
    let me = PlayerId::new(2);
    let effect = Effect::batch([
        Effect::GoldIncrease(4),
        Effect::BonusPerBoardElement(
            BonusPerBoardElement::new(
                [RelativePosition::Left, RelativePosition::Right],
                BoardElement::DefeatTokens,
            )
            .with_gold(1),
        ),
    ]);

    table.apply_effect(me, &effect).unwrap();

    assert_eq!(table.board(me).unwrap().gold(), 7);
    assert_eq!(table.board(PlayerId::new(0)).unwrap().gold(), 3);
    assert_eq!(table.board(PlayerId::new(1)).unwrap().gold(), 3);
}

/// Absent neighbors contribute nothing.
#[test]
fn test_absent_neighbors_count_zero() {
    let settings = Settings::default();
    let mut board = Board::new(plain_wonder("Solo", 2), &settings);
    board.upgrade_wonder_level().unwrap();
    board.upgrade_wonder_level().unwrap();

    let bonus = BonusPerBoardElement::new(
        [RelativePosition::Own, RelativePosition::Left, RelativePosition::Right],
        BoardElement::WonderLevel,
    )
    .with_points(1);

    assert_eq!(bonus.match_count(&board, Neighbors::none()), 2);
}

/// Defeat tokens are counted from each board's military.
#[test]
fn test_defeat_token_bonus() {
    let mut table = table(3);
    table
        .board_mut(PlayerId::new(0))
        .unwrap()
        .military_mut()
        .add_shields(5);
    table.resolve_military_conflicts(1);

    // Seats 1 and 2 each lost to seat 0 once.
    let bonus = BonusPerBoardElement::new(
        [RelativePosition::Left, RelativePosition::Right],
        BoardElement::DefeatTokens,
    )
    .with_points(1);
    let board = table.board(PlayerId::new(0)).unwrap();
    let neighbors = table.neighbors(PlayerId::new(0)).unwrap();
    assert_eq!(bonus.match_count(board, neighbors), 2);
}

/// Immediate effects reach the owner's production, science, shields and trading.
#[test]
fn test_immediate_effects_update_board() {
    let mut table = table(2);
    let me = PlayerId::new(0);

    let forum = Production::new().with_choice([
        ResourceSet::of(ResourceType::Glass, 1),
        ResourceSet::of(ResourceType::Papyrus, 1),
        ResourceSet::of(ResourceType::Loom, 1),
    ]);
    let effects = [
        Effect::ProductionIncrease {
            production: forum,
            sellable: false,
        },
        Effect::production(Production::new().with_fixed(ResourceSet::of(ResourceType::Wood, 2))),
        Effect::ScienceProgress(ScienceTally::of(ScienceType::Compass, 1)),
        Effect::MilitaryReinforcements(2),
        Effect::Discount(Discount::new(
            ResourceType::RAW,
            [Provider::LeftPlayer],
            1,
        )),
    ];
    for effect in &effects {
        table.apply_effect(me, effect).unwrap();
    }

    let board = table.board(me).unwrap();
    assert!(board.production().can_produce(&ResourceSet::of(ResourceType::Loom, 1)));
    assert!(!board.public_production().can_produce(&ResourceSet::of(ResourceType::Loom, 1)));
    assert!(board.public_production().can_produce(&ResourceSet::of(ResourceType::Wood, 2)));
    assert_eq!(board.science().count(ScienceType::Compass), 1);
    assert_eq!(board.military().shields(), 2);
    assert_eq!(board.trading_rules().cost(Provider::LeftPlayer, ResourceType::Ore), 1);
    assert_eq!(board.trading_rules().cost(Provider::RightPlayer, ResourceType::Ore), 2);
    assert_eq!(board.trading_rules().cost(Provider::LeftPlayer, ResourceType::Glass), 2);
}

/// Gold from huge content values saturates instead of wrapping.
#[test]
fn test_large_gold_gains_saturate() {
    let mut table = table(3);
    let me = PlayerId::new(0);
    level_up(&mut table, 0, 2);

    let windfall = Effect::GoldIncrease(u32::MAX);
    table.apply_effect(me, &windfall).unwrap();
    assert_eq!(table.board(me).unwrap().gold(), i32::MAX);

    let mut table = table_with_gold(0);
    level_up(&mut table, 0, 2);
    let bonus = Effect::BonusPerBoardElement(
        BonusPerBoardElement::new([RelativePosition::Own], BoardElement::WonderLevel)
            .with_gold(u32::MAX)
            .with_points(u32::MAX),
    );
    table.apply_effect(me, &bonus).unwrap();

    let board = table.board(me).unwrap();
    assert_eq!(board.gold(), i32::MAX);
    assert_eq!(bonus.compute_points(board, Neighbors::none()), u32::MAX);
}

fn table_with_gold(gold: i32) -> Table {
    Table::new(
        Settings::default().with_initial_gold(gold),
        (0..3).map(|i| plain_wonder(&format!("Wonder {}", i), 3)),
    )
}
