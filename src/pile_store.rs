// src/pile_store.rs

// HashMap: CardId をキーにしてカード本体を持つよ (エンティティ ID → コンポーネントのストアと同じ発想！)
use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use log::warn;

use crate::components::card::{Card, CardId};
use crate::components::pile::Pile;
use crate::components::stack::{PileId, PileKind};
use crate::config::rules::DECK_SIZE;
use crate::error::IntegrityError;

/// 「どのカードがどこに、どの順番で」あるかの唯一の正解を持つ構造体だよ！🗂️
///
/// - `cards`: 52 枚のカード本体 (CardId → Card)
/// - `piles`: 場札 7 + 組札 4 + 山札 + 捨て札 の 13 個の山
///
/// 外からは読み取り専用。書き換えは配札 (`systems::deal_system`)、移動 (`systems::move_card_system`)、
/// 山札処理 (`app::stock_handler`) だけが `pub(crate)` のメソッド経由で行うよ。
#[derive(Debug, Clone)]
pub struct PileStore {
    cards: HashMap<CardId, Card>,
    piles: Vec<Pile>,
}

impl Default for PileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PileStore {
    /// 空っぽの PileStore を作る。山は 13 個ぜんぶ用意しておくよ。
    pub fn new() -> Self {
        Self {
            cards: HashMap::with_capacity(DECK_SIZE),
            piles: PileId::all().map(Pile::new).collect(),
        }
    }

    // --- 読み取り ---

    pub fn pile(&self, id: PileId) -> Option<&Pile> {
        id.slot().and_then(|slot| self.piles.get(slot))
    }

    pub fn piles(&self) -> &[Pile] {
        &self.piles
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// 指定した山のカードを下から上の順で返すよ。
    pub fn cards_in(&self, id: PileId) -> Vec<&Card> {
        self.pile(id)
            .map(|pile| pile.cards().iter().filter_map(|card_id| self.card(*card_id)).collect())
            .unwrap_or_default()
    }

    pub fn top_card(&self, id: PileId) -> Option<&Card> {
        self.pile(id).and_then(Pile::top).and_then(|card_id| self.card(card_id))
    }

    /// 一番上から連続してる表向きカードの枚数。
    pub fn face_up_run_len(&self, id: PileId) -> usize {
        self.pile(id)
            .map(|pile| {
                pile.cards()
                    .iter()
                    .rev()
                    .take_while(|card_id| self.card(**card_id).is_some_and(Card::is_face_up))
                    .count()
            })
            .unwrap_or(0)
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn foundation_card_count(&self) -> usize {
        self.piles
            .iter()
            .filter(|pile| pile.kind() == PileKind::Foundation)
            .map(Pile::len)
            .sum()
    }

    /// 52 種類のカードがちょうど 1 枚ずつ登録されてる？
    pub fn is_full_deck(&self) -> bool {
        self.cards.len() == DECK_SIZE
            && self.cards.iter().all(|(id, card)| *id == card.id && CardId::of(card.suit, card.rank) == *id)
            && self.cards.values().map(|card| (card.suit, card.rank)).all_unique()
    }

    /// 全部の山を見て、カードがちょうど 1 つの山にだけいること、
    /// そして `location` がその山を指していることを確かめるよ。
    pub fn check_integrity(&self) -> Result<(), IntegrityError> {
        let mut seen = HashSet::with_capacity(self.cards.len());
        for pile in &self.piles {
            for &card_id in pile.cards() {
                let card = self.cards.get(&card_id).ok_or(IntegrityError::UnknownCard {
                    pile: pile.id,
                    card: card_id,
                })?;
                if !seen.insert(card_id) {
                    return Err(IntegrityError::DuplicateCard(card_id));
                }
                if card.location != Some(pile.id) {
                    return Err(IntegrityError::LocationMismatch {
                        card: card_id,
                        actual: pile.id,
                        recorded: card.location,
                    });
                }
            }
        }
        match self.cards.keys().find(|id| !seen.contains(*id)) {
            Some(missing) => Err(IntegrityError::MissingCard(*missing)),
            None => Ok(()),
        }
    }

    /// ログ用の短い表示。裏向きは `XX` になるよ。例: `tableau-3: [XX XX 5♦]`
    pub fn describe_pile(&self, id: PileId) -> String {
        let cards = self
            .cards_in(id)
            .into_iter()
            .map(|card| if card.is_face_up { card.to_string() } else { "XX".to_string() })
            .join(" ");
        format!("{}: [{}]", id, cards)
    }

    // --- 書き換え (クレート内専用) ---

    /// 全部のカードと山を空にする。新しく配る前に呼ぶよ。
    pub(crate) fn reset(&mut self) {
        self.cards.clear();
        for pile in &mut self.piles {
            pile.clear();
        }
    }

    /// カードを登録する (まだどの山にも置かない)。
    pub(crate) fn register(&mut self, mut card: Card) {
        card.location = None;
        self.cards.insert(card.id, card);
    }

    /// カードを山の一番上に積んで、`location` も更新する。
    pub(crate) fn push_card(&mut self, pile_id: PileId, card_id: CardId) {
        let Some(slot) = pile_id.slot() else {
            warn!("PileStore: push to invalid pile {:?} ignored", pile_id);
            return;
        };
        match self.cards.get_mut(&card_id) {
            Some(card) => card.location = Some(pile_id),
            None => {
                warn!("PileStore: card {:?} is not registered", card_id);
                return;
            }
        }
        self.piles[slot].push(card_id);
    }

    /// 上から `count` 枚を順番そのままで取り出す。取り出したカードはすぐ別の山に積むこと！
    pub(crate) fn take_top(&mut self, pile_id: PileId, count: usize) -> Vec<CardId> {
        self.pile_mut(pile_id).map(|pile| pile.split_top(count)).unwrap_or_default()
    }

    pub(crate) fn pop_top(&mut self, pile_id: PileId) -> Option<CardId> {
        self.pile_mut(pile_id).and_then(Pile::pop)
    }

    pub(crate) fn take_all(&mut self, pile_id: PileId) -> Vec<CardId> {
        self.pile_mut(pile_id).map(Pile::take_all).unwrap_or_default()
    }

    pub(crate) fn set_face_up(&mut self, card_id: CardId, face_up: bool) {
        if let Some(card) = self.cards.get_mut(&card_id) {
            card.is_face_up = face_up;
        }
    }

    fn pile_mut(&mut self, id: PileId) -> Option<&mut Pile> {
        id.slot().and_then(|slot| self.piles.get_mut(slot))
    }

    /// テスト用: 山ごとに (スート, ランク, 表向き?) を並べて PileStore を組み立てる。
    #[cfg(test)]
    pub(crate) fn from_layout(
        layout: &[(PileId, &[(crate::components::card::Suit, crate::components::card::Rank, bool)])],
    ) -> Self {
        let mut store = Self::new();
        for (pile_id, cards) in layout {
            for &(suit, rank, face_up) in cards.iter() {
                let card = Card::new(suit, rank);
                let card_id = card.id;
                store.register(card);
                store.set_face_up(card_id, face_up);
                store.push_card(*pile_id, card_id);
            }
        }
        store
    }
}
