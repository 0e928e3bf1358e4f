// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod logic;
pub mod pile_store;
pub mod protocol;
pub mod systems;

pub use app::bindings::SolitaireGame;
pub use app::GameApp;
pub use components::{Card, CardColor, CardId, GameStatus, PileId, PileKind, Rank, Suit};
pub use config::{RankAdjacency, RuleConfig};
pub use error::{DealError, IntegrityError, MoveError};
pub use logic::rules::{validate_move, validate_move_count, MovePlan};
pub use pile_store::PileStore;
pub use protocol::{CardSnapshot, DrawResult, GameSnapshot, MoveRequest, MoveResult, PileSnapshot};

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}
