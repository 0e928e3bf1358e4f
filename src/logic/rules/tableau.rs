//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use log::debug;

use crate::components::card::{Card, Rank};
use crate::components::stack::PileId;
use crate::config::rules::RankAdjacency;
use crate::error::MoveError;
use crate::pile_store::PileStore;

use super::common::is_one_rank_below;

/// `bottom` (動かす列の一番下のカード) を場札 `target` の上に置けるかチェックする。
///
/// - 空の場札: K だけ置ける
/// - カードがある場札: 色が違って、ランクがちょうど 1 つ下 (A→2 は例外でオッケー)
pub fn check_tableau_target(
    store: &PileStore,
    bottom: &Card,
    target: PileId,
    adjacency: RankAdjacency,
) -> Result<(), MoveError> {
    let Some(top) = store.top_card(target) else {
        debug!("[Tableau Rule] {} onto empty {}: king? {}", bottom, target, bottom.rank == Rank::King);
        return if bottom.rank == Rank::King {
            Ok(())
        } else {
            Err(MoveError::OnlyKingOnEmptyTableau)
        };
    };

    debug!(
        "[Tableau Rule] {}({:?}) onto {}({:?}) in {}",
        bottom,
        bottom.color(),
        top,
        top.color(),
        target
    );

    if top.color() == bottom.color() {
        return Err(MoveError::ColorConflict);
    }
    if !is_one_rank_below(bottom.rank, top.rank, adjacency) {
        return Err(MoveError::RankNotDescending);
    }
    Ok(())
}
