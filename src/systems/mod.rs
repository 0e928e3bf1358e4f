// src/systems/mod.rs
//! PileStore を書き換えるシステムたち。配札と移動の 2 つだけ！

pub mod deal_system;
pub mod move_card_system;

pub use deal_system::DealInitialCardsSystem;
pub use move_card_system::MoveCardSystem;
