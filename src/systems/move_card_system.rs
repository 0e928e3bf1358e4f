// src/systems/move_card_system.rs

use log::{debug, info, warn};

use crate::components::card::CardId;
use crate::logic::rules::MovePlan;
use crate::pile_store::PileStore;

/// 検証済みの移動を実際に PileStore に反映するシステムだよ！🖱️💨
///
/// 必ず `logic::rules::validate_move` の直後に、その結果の `MovePlan` で呼ぶこと。
/// 同じ plan を 2 回適用するのはダメ！(2 回目の結果は決まってない)
#[derive(Default)]
pub struct MoveCardSystem;

impl MoveCardSystem {
    pub fn new() -> Self {
        Self
    }

    /// カードを元の山の末尾から取り出して、移動先の末尾に同じ順番で積む。
    /// 下から出てきた裏向きカードがあれば表にして、その ID を返すよ。
    pub fn execute(&self, store: &mut PileStore, plan: &MovePlan) -> Option<CardId> {
        let source_matches = store
            .pile(plan.source)
            .is_some_and(|pile| pile.ends_with(&plan.cards));
        if !source_matches {
            warn!(
                "MoveCardSystem: plan {:?} no longer matches {}; ignored",
                plan.cards,
                store.describe_pile(plan.source)
            );
            return None;
        }

        let moved = store.take_top(plan.source, plan.cards.len());
        for card_id in moved {
            store.push_card(plan.destination, card_id);
        }

        let flipped = plan.exposed.filter(|&exposed| {
            store.pile(plan.source).and_then(|pile| pile.top()) == Some(exposed)
        });
        if let Some(card_id) = flipped {
            store.set_face_up(card_id, true);
        }

        info!(
            "MoveCardSystem: moved {} card(s) {} -> {}{}",
            plan.cards.len(),
            plan.source,
            plan.destination,
            if flipped.is_some() { " and revealed a card" } else { "" }
        );
        debug!("  {}", store.describe_pile(plan.source));
        debug!("  {}", store.describe_pile(plan.destination));
        flipped
    }
}
