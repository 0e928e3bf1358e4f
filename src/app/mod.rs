// src/app/mod.rs
//! プレゼン層に見せる入口 (GameApp) と、その周りのヘルパーを役割ごとに分けて置くモジュールだよ！

pub mod bindings;
pub mod game_app;
pub mod state_getter;
pub mod stock_handler;

pub use game_app::GameApp;
