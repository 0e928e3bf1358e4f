//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::debug;

use crate::components::card::{Card, Rank};
use crate::components::stack::PileId;
use crate::error::MoveError;
use crate::pile_store::PileStore;

use super::common::get_foundation_suit;

/// `run` を組札 `foundation_index` に置けるかチェックする。
///
/// 1 枚だけ、スートが一致、ランクが今の一番上のちょうど 1 つ上 (空なら A だけ) の 3 つが条件！
pub fn check_foundation_target(
    store: &PileStore,
    run: &[&Card],
    foundation_index: u8,
) -> Result<(), MoveError> {
    let card = match run {
        [card] => *card,
        _ => return Err(MoveError::MultiCardToFoundation),
    };
    let target_suit = get_foundation_suit(foundation_index).ok_or(MoveError::InvalidDestination)?;

    if card.suit != target_suit {
        debug!("[Foundation Rule] {} does not match {:?} foundation", card, target_suit);
        return Err(MoveError::WrongSuitForFoundation);
    }

    let next_in_order = match store.top_card(PileId::Foundation(foundation_index)) {
        None => card.rank == Rank::Ace,
        Some(top) => card.rank.ordinal() == top.rank.ordinal() + 1,
    };
    debug!(
        "[Foundation Rule] {} onto Foundation({}): next in order? {}",
        card, foundation_index, next_in_order
    );

    if next_in_order {
        Ok(())
    } else {
        Err(MoveError::FoundationOrderViolation)
    }
}
