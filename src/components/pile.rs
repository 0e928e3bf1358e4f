// src/components/pile.rs

use serde::{Deserialize, Serialize};

use crate::components::card::CardId;
use crate::components::stack::{PileId, PileKind};

/// カードの山 1 つ分。中身は下から上への `CardId` の並びで、最後の要素が「一番上」！
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    pub id: PileId,
    cards: Vec<CardId>,
}

impl Pile {
    pub fn new(id: PileId) -> Self {
        Self { id, cards: Vec::new() }
    }

    pub fn kind(&self) -> PileKind {
        self.id.kind()
    }

    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// 一番上のカード。空なら `None`。
    pub fn top(&self) -> Option<CardId> {
        self.cards.last().copied()
    }

    /// 上から `count` 枚 (下から上の順)。枚数が足りなければ `None`。
    pub fn top_run(&self, count: usize) -> Option<&[CardId]> {
        if count == 0 || count > self.cards.len() {
            return None;
        }
        Some(&self.cards[self.cards.len() - count..])
    }

    /// `run` がこの山の末尾とぴったり一致するか？
    pub fn ends_with(&self, run: &[CardId]) -> bool {
        !run.is_empty() && self.cards.ends_with(run)
    }

    pub(crate) fn push(&mut self, card: CardId) {
        self.cards.push(card);
    }

    pub(crate) fn pop(&mut self) -> Option<CardId> {
        self.cards.pop()
    }

    /// 上から `count` 枚を順番を保ったまま取り出すよ。
    pub(crate) fn split_top(&mut self, count: usize) -> Vec<CardId> {
        let at = self.cards.len().saturating_sub(count);
        self.cards.split_off(at)
    }

    pub(crate) fn take_all(&mut self) -> Vec<CardId> {
        std::mem::take(&mut self.cards)
    }

    pub(crate) fn clear(&mut self) {
        self.cards.clear();
    }
}
