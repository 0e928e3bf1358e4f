// src/protocol.rs

// このファイルは、コアとプレゼン層 (JS とか) の間でやり取りするデータの形を定義するよ！💌
// `Serialize` は Rust のデータ構造 -> JSON 文字列、`Deserialize` は JSON 文字列 -> Rust のデータ構造。
use serde::{Deserialize, Serialize};

use crate::components::card::{Card, CardId, Rank, Suit};
use crate::components::game_state::GameStatus;
pub use crate::components::stack::PileId;
use crate::error::MoveError;

/// カード 1 枚の見た目の情報。描画に必要なのはこれだけ！
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CardSnapshot {
    pub id: CardId,
    pub rank: Rank,
    pub suit: Suit,
    pub face_up: bool,
}

impl From<&Card> for CardSnapshot {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id,
            rank: card.rank,
            suit: card.suit,
            face_up: card.is_face_up(),
        }
    }
}

/// 山 1 つ分 (下から上の順)。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PileSnapshot {
    pub pile: PileId,
    pub cards: Vec<CardSnapshot>,
}

/// ゲーム全体のスナップショット。新しいゲームの開始時とかに丸ごと渡すよ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// このレイアウトを作ったシード。同じシードで始めれば同じ配札になる！
    pub seed: u64,
    pub status: GameStatus,
    pub piles: Vec<PileSnapshot>,
    /// 捨て札の見えてる部分 (最大 3 枚、新しいのが最後)
    pub waste_window: Vec<CardSnapshot>,
}

impl GameSnapshot {
    pub fn pile(&self, id: PileId) -> Option<&PileSnapshot> {
        self.piles.iter().find(|pile| pile.pile == id)
    }
}

/// プレゼン層からの「移動したい！」リクエスト。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    pub source: PileId,
    pub card_count: usize,
    pub destination: PileId,
}

/// `on_move_attempt` の結果。却下されても状態は何も変わってないよ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub accepted: bool,
    pub reason: Option<MoveError>,
    /// 移動で表になったカード (元の山の新しい一番上)
    pub flipped_card: Option<CardId>,
    pub status: GameStatus,
}

impl MoveResult {
    pub fn accepted(flipped_card: Option<CardId>, status: GameStatus) -> Self {
        Self {
            accepted: true,
            reason: None,
            flipped_card,
            status,
        }
    }

    pub fn rejected(reason: MoveError, status: GameStatus) -> Self {
        Self {
            accepted: false,
            reason: Some(reason),
            flipped_card: None,
            status,
        }
    }
}

/// `on_stock_click` の結果。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DrawResult {
    pub drawn_cards: Vec<CardSnapshot>,
    /// 処理の後で山札が空か
    pub stock_exhausted: bool,
    /// 捨て札を山札に戻したか
    pub recycled: bool,
}
