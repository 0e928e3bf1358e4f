// src/logic/auto_move.rs
//! カードの自動移動に関するロジックだよ！🪄
//! 山の一番上のカードを、受け入れてくれる組札に送れるか探すんだ。

use log::debug;

use crate::components::stack::PileId;
use crate::config::rules::{RankAdjacency, FOUNDATION_COUNT};
use crate::logic::rules;
use crate::pile_store::PileStore;

/// `source` の一番上のカードを置ける組札を探す。
/// 見つかったら最初の `PileId::Foundation(index)`、なければ `None`。
pub fn find_automatic_foundation_move(
    store: &PileStore,
    source: PileId,
) -> Option<PileId> {
    let target = (0..FOUNDATION_COUNT as u8).map(PileId::Foundation).find(|&foundation| {
        // 組札のルールは隣接モードを使わないので、どっちを渡しても同じ
        rules::validate_move_count(store, source, 1, foundation, RankAdjacency::default()).is_ok()
    });
    debug!("[AutoMove] top of {} -> {:?}", source, target);
    target
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};

    #[test]
    fn test_find_automatic_foundation_move() {
        let store = PileStore::from_layout(&[
            (PileId::Waste, &[(Suit::Heart, Rank::Ace, true)]),
            (PileId::Tableau(0), &[(Suit::Spade, Rank::Ace, true)]),
            (PileId::Tableau(1), &[(Suit::Heart, Rank::Three, true)]),
            (PileId::Foundation(1), &[(Suit::Diamond, Rank::Ace, true)]),
            (PileId::Tableau(2), &[(Suit::Diamond, Rank::Two, true)]),
            (PileId::Tableau(3), &[(Suit::Club, Rank::Five, false)]),
        ]);

        assert_eq!(find_automatic_foundation_move(&store, PileId::Waste), Some(PileId::Foundation(0)));
        assert_eq!(find_automatic_foundation_move(&store, PileId::Tableau(0)), Some(PileId::Foundation(3)));
        assert_eq!(find_automatic_foundation_move(&store, PileId::Tableau(1)), None);
        assert_eq!(find_automatic_foundation_move(&store, PileId::Tableau(2)), Some(PileId::Foundation(1)));
        // 裏向きのカードは動かせない
        assert_eq!(find_automatic_foundation_move(&store, PileId::Tableau(3)), None);
        // 空の山
        assert_eq!(find_automatic_foundation_move(&store, PileId::Tableau(6)), None);
    }
}
