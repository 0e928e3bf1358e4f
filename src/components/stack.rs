// src/components/stack.rs

use std::fmt;

// serde を使うためにインポート！プレゼン層から JSON で山の名前を受け取るよ。
use serde::{Deserialize, Serialize};

use crate::config::rules::{FOUNDATION_COUNT, TABLEAU_COUNT};

/// カードが置かれる山 (Pile) を指す ID だよ。
/// Clone, Copy: 値を簡単に複製できるようにする。
/// Serialize, Deserialize: JSON にしたり戻したりできる！`{"Tableau":2}` とか `"Waste"` みたいな形になるよ ✨
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PileId {
    /// 場札 (Tableau)。7 列あるので列番号 (0-6) を持つ。
    Tableau(u8),
    /// 組札 (Foundation)。0: Heart, 1: Diamond, 2: Club, 3: Spade
    Foundation(u8),
    /// 山札 (Stock)。裏向きのカードを引く元の場所。
    Stock,
    /// 山札からめくったカードを置く場所 (Waste)。
    Waste,
}

/// 山の種類。受け入れルールがそれぞれ違う！
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileKind {
    Tableau,
    Foundation,
    Stock,
    Waste,
}

impl PileId {
    pub fn kind(self) -> PileKind {
        match self {
            PileId::Tableau(_) => PileKind::Tableau,
            PileId::Foundation(_) => PileKind::Foundation,
            PileId::Stock => PileKind::Stock,
            PileId::Waste => PileKind::Waste,
        }
    }

    /// この ID が実在する山を指してるか？ (Tableau(9) みたいなのは false)
    pub fn is_valid(self) -> bool {
        match self {
            PileId::Tableau(index) => (index as usize) < TABLEAU_COUNT,
            PileId::Foundation(index) => (index as usize) < FOUNDATION_COUNT,
            PileId::Stock | PileId::Waste => true,
        }
    }

    /// ゲームに存在する 13 個の山を、場札 → 組札 → 山札 → 捨て札 の順で返すよ。
    pub fn all() -> impl Iterator<Item = PileId> {
        let tableaus = (0..TABLEAU_COUNT as u8).map(PileId::Tableau);
        let foundations = (0..FOUNDATION_COUNT as u8).map(PileId::Foundation);
        tableaus
            .chain(foundations)
            .chain([PileId::Stock, PileId::Waste])
    }

    /// `PileStore` の中の配列インデックス。無効な ID なら `None`。
    pub(crate) fn slot(self) -> Option<usize> {
        if !self.is_valid() {
            return None;
        }
        Some(match self {
            PileId::Tableau(index) => index as usize,
            PileId::Foundation(index) => TABLEAU_COUNT + index as usize,
            PileId::Stock => TABLEAU_COUNT + FOUNDATION_COUNT,
            PileId::Waste => TABLEAU_COUNT + FOUNDATION_COUNT + 1,
        })
    }
}

impl fmt::Display for PileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PileId::Tableau(index) => write!(f, "tableau-{}", index + 1),
            PileId::Foundation(index) => write!(f, "foundation-{}", index + 1),
            PileId::Stock => f.write_str("stock"),
            PileId::Waste => f.write_str("waste"),
        }
    }
}
