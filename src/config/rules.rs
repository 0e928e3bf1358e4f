// src/config/rules.rs
//! ゲームのルールに関する定数と、ホストから渡せる設定を定義するよ！

use serde::{Deserialize, Serialize};

pub const DECK_SIZE: usize = 52; // 1 デッキの枚数
pub const TABLEAU_COUNT: usize = 7; // 場札の列数
pub const FOUNDATION_COUNT: usize = 4; // 組札の数 (スートごと)
pub const INITIAL_TABLEAU_CARDS: usize = 28; // 1 + 2 + ... + 7

pub const DEFAULT_DRAW_COUNT: usize = 3; // 山札を 1 回クリックで何枚めくるか
pub const DEFAULT_WASTE_WINDOW: usize = 3; // 捨て札の見える枚数
pub const DEFAULT_SHUFFLE_SWAPS: usize = 1000; // シャッフルで入れ替える回数

/// 場札に重ねる時の「ひとつ下」の数え方。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankAdjacency {
    /// ランクの重み (J/Q/K=10, A=11) で比べる。
    #[default]
    Weight,
    /// 序数 (A=1 ... K=13) で比べる。普通のクロンダイクと同じ。
    Ordinal,
}

/// ルール設定。JSON の一部だけ指定しても、残りはデフォルト値になるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    pub draw_count: usize,
    pub waste_window: usize,
    pub shuffle_swaps: usize,
    pub rank_adjacency: RankAdjacency,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            draw_count: DEFAULT_DRAW_COUNT,
            waste_window: DEFAULT_WASTE_WINDOW,
            shuffle_swaps: DEFAULT_SHUFFLE_SWAPS,
            rank_adjacency: RankAdjacency::Weight,
        }
    }
}

impl RuleConfig {
    /// ホストから渡された JSON を読み込む。`draw_count` は 1 以上に丸めるよ。
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut config: RuleConfig = serde_json::from_str(json)?;
        config.draw_count = config.draw_count.max(1);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config = RuleConfig::from_json(r#"{ "rank_adjacency": "ordinal" }"#).unwrap();
        assert_eq!(config.rank_adjacency, RankAdjacency::Ordinal);
        assert_eq!(config.draw_count, DEFAULT_DRAW_COUNT);
        assert_eq!(config.waste_window, DEFAULT_WASTE_WINDOW);
        assert_eq!(config.shuffle_swaps, DEFAULT_SHUFFLE_SWAPS);
    }

    #[test]
    fn zero_draw_count_is_clamped() {
        let config = RuleConfig::from_json(r#"{ "draw_count": 0 }"#).unwrap();
        assert_eq!(config.draw_count, 1);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(RuleConfig::from_json("{ draw_count: 3").is_err());
    }
}
