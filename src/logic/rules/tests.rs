// src/logic/rules/tests.rs
//! rules モジュール内の関数のユニットテスト。

use super::*;
use crate::components::card::{CardId, Rank, Suit};
use crate::components::stack::PileId;
use crate::config::rules::RankAdjacency;
use crate::error::MoveError;
use crate::pile_store::PileStore;

const W: RankAdjacency = RankAdjacency::Weight;

// --- テスト用ヘルパー関数 ---
fn id(suit: Suit, rank: Rank) -> CardId {
    CardId::of(suit, rank)
}

#[test]
fn test_stock_waste_rules() {
    assert!(can_deal_from_stock(false), "ストックがあれば配れるはず");
    assert!(!can_reset_stock_from_waste(false, false));
    assert!(!can_reset_stock_from_waste(false, true));

    assert!(!can_deal_from_stock(true), "ストックが空なら配れないはず");
    assert!(can_reset_stock_from_waste(true, false), "ストックが空でウェストにあればリセットできるはず");
    assert!(!can_reset_stock_from_waste(true, true), "ストックもウェストも空ならリセットできないはず");
}

#[test]
fn test_win_condition() {
    assert!(check_win_condition(52));
    assert!(!check_win_condition(51));
    assert!(!check_win_condition(0));
}

// --- 空の場札 ---

#[test]
fn only_king_on_empty_tableau() {
    let store = PileStore::from_layout(&[(
        PileId::Tableau(0),
        &[(Suit::Heart, Rank::Ace, true)],
    ), (
        PileId::Tableau(1),
        &[(Suit::Spade, Rank::King, true)],
    )]);

    assert_eq!(
        validate_move_count(&store, PileId::Tableau(0), 1, PileId::Tableau(4), W),
        Err(MoveError::OnlyKingOnEmptyTableau)
    );

    let plan = validate_move_count(&store, PileId::Tableau(1), 1, PileId::Tableau(4), W).unwrap();
    assert_eq!(plan.cards, vec![id(Suit::Spade, Rank::King)]);
    assert_eq!(plan.exposed, None);
}

// --- カードのある場札 ---

#[test]
fn alternating_colors_on_tableau() {
    let store = PileStore::from_layout(&[
        (PileId::Tableau(0), &[(Suit::Diamond, Rank::Five, true)]),
        (PileId::Tableau(1), &[(Suit::Club, Rank::Four, true)]),
        (PileId::Tableau(2), &[(Suit::Diamond, Rank::Four, true)]),
    ]);

    assert!(validate_move_count(&store, PileId::Tableau(1), 1, PileId::Tableau(0), W).is_ok());
    assert_eq!(
        validate_move_count(&store, PileId::Tableau(2), 1, PileId::Tableau(0), W),
        Err(MoveError::ColorConflict)
    );
}

#[test]
fn color_is_checked_before_rank() {
    let store = PileStore::from_layout(&[
        (PileId::Tableau(0), &[(Suit::Heart, Rank::Queen, true)]),
        (PileId::Tableau(1), &[(Suit::Diamond, Rank::Three, true)]),
        (PileId::Tableau(2), &[(Suit::Spade, Rank::Three, true)]),
    ]);

    assert_eq!(
        validate_move_count(&store, PileId::Tableau(1), 1, PileId::Tableau(0), W),
        Err(MoveError::ColorConflict)
    );
    assert_eq!(
        validate_move_count(&store, PileId::Tableau(2), 1, PileId::Tableau(0), W),
        Err(MoveError::RankNotDescending)
    );
}

#[test]
fn ace_may_go_on_two() {
    let store = PileStore::from_layout(&[
        (PileId::Tableau(0), &[(Suit::Club, Rank::Two, true)]),
        (PileId::Waste, &[(Suit::Heart, Rank::Ace, true)]),
    ]);

    assert!(validate_move_count(&store, PileId::Waste, 1, PileId::Tableau(0), W).is_ok());
    assert!(validate_move_count(&store, PileId::Waste, 1, PileId::Tableau(0), RankAdjacency::Ordinal).is_ok());
}

#[test]
fn face_cards_share_a_weight() {
    let store = PileStore::from_layout(&[
        (PileId::Tableau(0), &[(Suit::Heart, Rank::Queen, true)]),
        (PileId::Tableau(1), &[(Suit::Spade, Rank::Jack, true)]),
        (PileId::Tableau(2), &[(Suit::Club, Rank::Nine, true)]),
    ]);

    // 重みモード: J(10) は Q(10) に乗らないけど、9 は乗る
    assert_eq!(
        validate_move_count(&store, PileId::Tableau(1), 1, PileId::Tableau(0), W),
        Err(MoveError::RankNotDescending)
    );
    assert!(validate_move_count(&store, PileId::Tableau(2), 1, PileId::Tableau(0), W).is_ok());

    // 序数モードだと逆になる
    let o = RankAdjacency::Ordinal;
    assert!(validate_move_count(&store, PileId::Tableau(1), 1, PileId::Tableau(0), o).is_ok());
    assert_eq!(
        validate_move_count(&store, PileId::Tableau(2), 1, PileId::Tableau(0), o),
        Err(MoveError::RankNotDescending)
    );
}

// --- 組札 ---

#[test]
fn empty_foundation_takes_only_its_ace() {
    let store = PileStore::from_layout(&[
        (PileId::Tableau(0), &[(Suit::Heart, Rank::Two, true)]),
        (PileId::Tableau(1), &[(Suit::Heart, Rank::Ace, true)]),
        (PileId::Tableau(2), &[(Suit::Spade, Rank::Ace, true)]),
    ]);

    assert_eq!(
        validate_move_count(&store, PileId::Tableau(0), 1, PileId::Foundation(0), W),
        Err(MoveError::FoundationOrderViolation)
    );
    assert!(validate_move_count(&store, PileId::Tableau(1), 1, PileId::Foundation(0), W).is_ok());
    assert_eq!(
        validate_move_count(&store, PileId::Tableau(2), 1, PileId::Foundation(0), W),
        Err(MoveError::WrongSuitForFoundation)
    );
    assert!(validate_move_count(&store, PileId::Tableau(2), 1, PileId::Foundation(3), W).is_ok());
}

#[test]
fn foundation_builds_up_by_ordinal() {
    let store = PileStore::from_layout(&[
        (
            PileId::Foundation(2),
            &[(Suit::Club, Rank::Ace, true), (Suit::Club, Rank::Two, true)],
        ),
        (PileId::Tableau(0), &[(Suit::Club, Rank::Three, true)]),
        (PileId::Tableau(1), &[(Suit::Club, Rank::Four, true)]),
    ]);

    assert!(validate_move_count(&store, PileId::Tableau(0), 1, PileId::Foundation(2), W).is_ok());
    assert_eq!(
        validate_move_count(&store, PileId::Tableau(1), 1, PileId::Foundation(2), W),
        Err(MoveError::FoundationOrderViolation)
    );
}

#[test]
fn foundation_takes_one_card_at_a_time() {
    let store = PileStore::from_layout(&[(
        PileId::Tableau(3),
        &[(Suit::Spade, Rank::Two, true), (Suit::Heart, Rank::Ace, true)],
    )]);

    assert_eq!(
        validate_move_count(&store, PileId::Tableau(3), 2, PileId::Foundation(0), W),
        Err(MoveError::MultiCardToFoundation)
    );
}

// --- 前提条件と移動先 ---

#[test]
fn run_must_be_face_up_top_of_source() {
    let store = PileStore::from_layout(&[
        (
            PileId::Tableau(0),
            &[
                (Suit::Club, Rank::Nine, false),
                (Suit::Heart, Rank::Six, true),
                (Suit::Spade, Rank::Five, true),
            ],
        ),
        (PileId::Tableau(1), &[(Suit::Spade, Rank::Seven, true)]),
    ]);

    // 裏向きのカードを含む
    assert_eq!(
        validate_move_count(&store, PileId::Tableau(0), 3, PileId::Tableau(1), W),
        Err(MoveError::NotATopRun)
    );
    // 枚数が多すぎる / ゼロ
    assert_eq!(
        validate_move_count(&store, PileId::Tableau(0), 4, PileId::Tableau(1), W),
        Err(MoveError::NotATopRun)
    );
    assert_eq!(
        validate_move_count(&store, PileId::Tableau(0), 0, PileId::Tableau(1), W),
        Err(MoveError::NotATopRun)
    );
    // 途中のカードだけを指定 (末尾じゃない)
    assert_eq!(
        validate_move(&store, PileId::Tableau(0), &[id(Suit::Heart, Rank::Six)], PileId::Tableau(1), W),
        Err(MoveError::NotATopRun)
    );

    // 6♥ 5♠ の 2 枚は 7♠ に乗る。下の 9♣ が出てくるので表にする必要がある
    let plan = validate_move_count(&store, PileId::Tableau(0), 2, PileId::Tableau(1), W).unwrap();
    assert_eq!(plan.cards, vec![id(Suit::Heart, Rank::Six), id(Suit::Spade, Rank::Five)]);
    assert_eq!(plan.exposed, Some(id(Suit::Club, Rank::Nine)));

    // 1 枚だけなら下はまだ表向きなので何もめくらない
    let store_one = PileStore::from_layout(&[
        (
            PileId::Tableau(0),
            &[(Suit::Club, Rank::Nine, false), (Suit::Heart, Rank::Six, true), (Suit::Spade, Rank::Five, true)],
        ),
        (PileId::Tableau(1), &[(Suit::Diamond, Rank::Six, true)]),
    ]);
    let plan = validate_move_count(&store_one, PileId::Tableau(0), 1, PileId::Tableau(1), W).unwrap();
    assert_eq!(plan.exposed, None);
}

#[test]
fn stock_and_waste_are_not_destinations() {
    let store = PileStore::from_layout(&[(PileId::Tableau(0), &[(Suit::Spade, Rank::King, true)])]);

    for destination in [PileId::Stock, PileId::Waste, PileId::Tableau(0), PileId::Tableau(9), PileId::Foundation(7)] {
        assert_eq!(
            validate_move_count(&store, PileId::Tableau(0), 1, destination, W),
            Err(MoveError::InvalidDestination),
            "{:?} should be rejected",
            destination
        );
    }
}

#[test]
fn stock_cards_cannot_be_dragged() {
    let store = PileStore::from_layout(&[(PileId::Stock, &[(Suit::Spade, Rank::King, false)])]);

    assert_eq!(
        validate_move_count(&store, PileId::Stock, 1, PileId::Tableau(0), W),
        Err(MoveError::NotATopRun)
    );
}

#[test]
fn validation_does_not_touch_the_store() {
    let store = PileStore::from_layout(&[
        (PileId::Tableau(0), &[(Suit::Club, Rank::Nine, false), (Suit::Spade, Rank::King, true)]),
    ]);
    let before = store.describe_pile(PileId::Tableau(0));

    let _ = validate_move_count(&store, PileId::Tableau(0), 1, PileId::Tableau(1), W);
    let _ = validate_move_count(&store, PileId::Tableau(0), 1, PileId::Foundation(0), W);

    assert_eq!(store.describe_pile(PileId::Tableau(0)), before);
    assert!(store.pile(PileId::Tableau(1)).unwrap().is_empty());
}

// --- 重みモードでは A (11) の上に 10/J/Q/K (10) が乗る ---

#[test]
fn ten_and_faces_onto_ace_depend_on_adjacency() {
    let tens = [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King];
    for rank in tens {
        let store = PileStore::from_layout(&[
            (PileId::Tableau(0), &[(Suit::Heart, Rank::Ace, true)]),
            (PileId::Tableau(1), &[(Suit::Spade, rank, true)]),
            (PileId::Tableau(2), &[(Suit::Diamond, rank, true)]),
        ]);

        let plan = validate_move_count(&store, PileId::Tableau(1), 1, PileId::Tableau(0), W)
            .unwrap_or_else(|e| panic!("{:?}♠ onto A♥ should be accepted, got {:?}", rank, e));
        assert_eq!(plan.cards, vec![id(Suit::Spade, rank)]);

        assert_eq!(
            validate_move_count(&store, PileId::Tableau(1), 1, PileId::Tableau(0), RankAdjacency::Ordinal),
            Err(MoveError::RankNotDescending)
        );
        assert_eq!(
            validate_move_count(&store, PileId::Tableau(2), 1, PileId::Tableau(0), W),
            Err(MoveError::ColorConflict)
        );
    }

    // 逆向き (A を重み 10 の上に) はダメ
    let store = PileStore::from_layout(&[
        (PileId::Tableau(0), &[(Suit::Spade, Rank::King, true)]),
        (PileId::Tableau(1), &[(Suit::Heart, Rank::Ace, true)]),
    ]);
    assert_eq!(
        validate_move_count(&store, PileId::Tableau(1), 1, PileId::Tableau(0), W),
        Err(MoveError::RankNotDescending)
    );
}
