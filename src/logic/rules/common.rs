//! ルール判定で共通して使うヘルパー関数を置くよ。

use crate::components::card::{Rank, Suit, ALL_SUITS};
use crate::config::rules::RankAdjacency;

/// 組札 (Foundation) のインデックス (0-3) から対応するスートを取得する。
/// 約束事: 0: Heart ❤️, 1: Diamond ♦️, 2: Club ♣️, 3: Spade ♠️
pub fn get_foundation_suit(foundation_index: u8) -> Option<Suit> {
    ALL_SUITS.get(foundation_index as usize).copied()
}

/// `moving` が `target` のちょうど 1 つ下のランクか？ (場札に重ねる時のチェック)
///
/// A を 2 に重ねるのは特別にオッケー。重みモードだと A は 11 だけど、この判定の時だけ「1」扱い！
pub fn is_one_rank_below(moving: Rank, target: Rank, adjacency: RankAdjacency) -> bool {
    if moving == Rank::Ace && target == Rank::Two {
        return true;
    }
    match adjacency {
        RankAdjacency::Weight => moving.weight() + 1 == target.weight(),
        RankAdjacency::Ordinal => moving.ordinal() + 1 == target.ordinal(),
    }
}
