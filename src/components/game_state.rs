// src/components/game_state.rs

// serde を使う宣言！結果と一緒にプレゼン層へ送るよ。
use serde::{Deserialize, Serialize};

/// ゲーム全体の今の状態だよ！🏆
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// ゲームが進行中
    #[default]
    Playing,
    /// 52 枚ぜんぶ組札に乗った！
    Won,
}

impl GameStatus {
    pub fn from_foundation_count(foundation_card_count: usize) -> Self {
        if crate::logic::rules::check_win_condition(foundation_card_count) {
            GameStatus::Won
        } else {
            GameStatus::Playing
        }
    }
}
