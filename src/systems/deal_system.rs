// src/systems/deal_system.rs

use itertools::Itertools;
use log::{error, info};

use crate::components::card::Card;
use crate::components::stack::PileId;
use crate::config::rules::{INITIAL_TABLEAU_CARDS, TABLEAU_COUNT};
use crate::error::DealError;
use crate::pile_store::PileStore;

// === 初期カード配置システム！ ===
// ゲーム開始時に、山札と7つの場札にカードを配る役割を担うシステムだよ。
#[derive(Default)]
pub struct DealInitialCardsSystem;

impl DealInitialCardsSystem {
    /// シャッフル済みのデッキを PileStore に配るよ！🎉
    ///
    /// # 処理の流れ
    /// 1. PileStore を空にして、全カードを登録する。
    /// 2. デッキの先頭から順に、場札 i 列目 (1 始まり) に i 枚ずつ配る。各列の最後の 1 枚だけ表向き！
    /// 3. 残りは全部裏向きで山札へ。残りの先頭のカードが山札の一番上 (最初に引かれる) になる。
    ///
    /// 28 枚未満だと `DealError::InsufficientCards`、同じカードが 2 枚あると `DealError::DuplicateCard`。
    /// どちらも普通のデッキなら起きないので、呼び出し側のバグだよ。PileStore には触らずに返す。
    pub fn run(&self, store: &mut PileStore, deck: Vec<Card>) -> Result<(), DealError> {
        if deck.len() < INITIAL_TABLEAU_CARDS {
            error!(
                "DealInitialCardsSystem: only {} cards, need at least {}",
                deck.len(),
                INITIAL_TABLEAU_CARDS
            );
            return Err(DealError::InsufficientCards {
                needed: INITIAL_TABLEAU_CARDS,
                got: deck.len(),
            });
        }

        if let Some(duplicate) = deck.iter().map(|card| card.id).duplicates().next() {
            error!("DealInitialCardsSystem: card {:?} appears twice in the deck", duplicate);
            return Err(DealError::DuplicateCard(duplicate));
        }

        store.reset();
        let order: Vec<_> = deck.iter().map(|card| card.id).collect();
        for card in deck {
            store.register(card);
        }

        let mut next = order.iter().copied();
        for column in 0..TABLEAU_COUNT {
            let pile = PileId::Tableau(column as u8);
            for row in 0..=column {
                // 枚数は上でチェック済みなので、ここで尽きることはない
                let Some(card_id) = next.next() else { break };
                store.set_face_up(card_id, row == column);
                store.push_card(pile, card_id);
            }
        }

        let remaining: Vec<_> = next.collect();
        for &card_id in remaining.iter().rev() {
            store.set_face_up(card_id, false);
            store.push_card(PileId::Stock, card_id);
        }

        info!(
            "DealInitialCardsSystem: dealt {} cards to the tableau, {} to the stock",
            order.len() - remaining.len(),
            remaining.len()
        );
        Ok(())
    }
}
