// src/logic/rules/move_validation.rs
//! カード移動の全体的な妥当性チェックを行う。

use log::debug;
use serde::{Deserialize, Serialize};

use crate::components::card::{Card, CardId};
use crate::components::stack::PileId;
use crate::config::rules::RankAdjacency;
use crate::error::MoveError;
use crate::pile_store::PileStore;

use super::{foundation, tableau};

/// 検証を通った移動の中身。`systems::move_card_system::execute_move` にそのまま渡すよ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovePlan {
    pub source: PileId,
    pub destination: PileId,
    /// 動かすカード (下から上の順)
    pub cards: Vec<CardId>,
    /// 動かした後に元の山の一番上に残る裏向きカード。これを表にする必要がある！
    pub exposed: Option<CardId>,
}

/// `source` の一番上から `run` を `destination` に動かせるか検証する。副作用はなし！
///
/// 最初に引っかかったルールの理由を返すよ:
/// 1. `run` が元の山の末尾にある表向きの連続カードじゃない → `NotATopRun`
/// 2. 場札へ: 空なら K だけ / 色違い / ランクが 1 つ下
/// 3. 組札へ: 1 枚だけ / スート一致 / 次のランク
/// 4. それ以外 (山札、捨て札、同じ山) → `InvalidDestination`
pub fn validate_move(
    store: &PileStore,
    source: PileId,
    run: &[CardId],
    destination: PileId,
    adjacency: RankAdjacency,
) -> Result<MovePlan, MoveError> {
    let run_cards = top_run_cards(store, source, run)?;
    let bottom = run_cards[0];

    let verdict = if source == destination || !destination.is_valid() {
        Err(MoveError::InvalidDestination)
    } else {
        match destination {
            PileId::Tableau(_) => tableau::check_tableau_target(store, bottom, destination, adjacency),
            PileId::Foundation(index) => foundation::check_foundation_target(store, &run_cards, index),
            PileId::Stock | PileId::Waste => Err(MoveError::InvalidDestination),
        }
    };
    debug!(
        "[Rules Validation] {} card(s) from {} to {}: {:?}",
        run.len(),
        source,
        destination,
        verdict
    );
    verdict?;

    Ok(MovePlan {
        source,
        destination,
        cards: run.to_vec(),
        exposed: exposed_card(store, source, run.len()),
    })
}

/// 枚数で指定するバージョン。プレゼン層からは「上から何枚」しか来ないからね。
pub fn validate_move_count(
    store: &PileStore,
    source: PileId,
    card_count: usize,
    destination: PileId,
    adjacency: RankAdjacency,
) -> Result<MovePlan, MoveError> {
    let run = store
        .pile(source)
        .and_then(|pile| pile.top_run(card_count))
        .ok_or(MoveError::NotATopRun)?
        .to_vec();
    validate_move(store, source, &run, destination, adjacency)
}

/// `run` が `source` の末尾にあって全部表向きなら、そのカードを返す。
fn top_run_cards<'a>(
    store: &'a PileStore,
    source: PileId,
    run: &[CardId],
) -> Result<Vec<&'a Card>, MoveError> {
    let pile = store.pile(source).ok_or(MoveError::NotATopRun)?;
    if !pile.ends_with(run) {
        return Err(MoveError::NotATopRun);
    }
    run.iter()
        .map(|id| store.card(*id).filter(|card| card.is_face_up()))
        .collect::<Option<Vec<_>>>()
        .ok_or(MoveError::NotATopRun)
}

/// `removed` 枚を取った後に一番上に来るカードが裏向きなら、その ID。
fn exposed_card(store: &PileStore, source: PileId, removed: usize) -> Option<CardId> {
    let pile = store.pile(source)?;
    let remaining = pile.len().checked_sub(removed)?;
    let beneath = *pile.cards().get(remaining.checked_sub(1)?)?;
    match store.card(beneath) {
        Some(card) if !card.is_face_up() => Some(beneath),
        _ => None,
    }
}
