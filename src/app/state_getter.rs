// src/app/state_getter.rs
//! GameApp の状態を JSON にしてプレゼン層に渡すためのヘルパーだよ。

use crate::app::game_app::GameApp;
use crate::components::stack::PileId;

/// ゲーム全体のスナップショットを JSON 文字列にする。
pub fn get_game_state_json(app: &GameApp) -> Result<String, serde_json::Error> {
    serde_json::to_string(&app.snapshot())
}

/// JSON で指定された山 (例: `{"Tableau":2}`) の中身を JSON で返す。
pub fn get_pile_state_json(app: &GameApp, pile_json: &str) -> Result<String, serde_json::Error> {
    let pile: PileId = serde_json::from_str(pile_json)?;
    serde_json::to_string(&app.get_pile_state(pile))
}
