// src/logic/mod.rs
//! デッキ作り、ルール判定、自動移動みたいな「状態を書き換えない」ロジックをまとめるよ。

pub mod auto_move;
pub mod deck;
pub mod rules;
