// src/components/mod.rs

// この components モジュールに属するサブモジュールを宣言するよ！
pub mod card;
pub mod stack;
pub mod pile;
pub mod game_state;

pub use card::{Card, CardColor, CardId, Rank, Suit, ALL_RANKS, ALL_SUITS};
pub use game_state::GameStatus;
pub use pile::Pile;
pub use stack::{PileId, PileKind};
