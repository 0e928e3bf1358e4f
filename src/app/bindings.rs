// src/app/bindings.rs
//! JavaScript から呼ぶための wasm-bindgen の窓口だよ！🌐
//! 中身は GameApp に丸投げして、やり取りは全部 JSON 文字列。

use log::error;
use wasm_bindgen::prelude::*;

use crate::app::game_app::GameApp;
use crate::app::state_getter;
use crate::components::stack::PileId;
use crate::config::rules::RuleConfig;
use crate::protocol::MoveRequest;

#[wasm_bindgen]
pub struct SolitaireGame {
    app: GameApp,
}

#[wasm_bindgen]
impl SolitaireGame {
    /// `config_json` は省略可。例: `{ "draw_count": 1, "rank_adjacency": "ordinal" }`
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<SolitaireGame, JsValue> {
        let config = match config_json {
            Some(json) => RuleConfig::from_json(&json).map_err(to_js_error)?,
            None => RuleConfig::default(),
        };
        Ok(Self { app: GameApp::new(config) })
    }

    /// 新しく配って、ゲーム全体のスナップショット (JSON) を返す。
    pub fn start_new_game(&mut self, seed: Option<u64>) -> Result<String, JsValue> {
        let snapshot = self.app.start_new_game(seed).map_err(to_js_error)?;
        serde_json::to_string(&snapshot).map_err(to_js_error)
    }

    pub fn get_game_state_json(&self) -> Result<String, JsValue> {
        state_getter::get_game_state_json(&self.app).map_err(to_js_error)
    }

    pub fn get_pile_state(&self, pile_json: &str) -> Result<String, JsValue> {
        state_getter::get_pile_state_json(&self.app, pile_json).map_err(to_js_error)
    }

    /// ドラッグ＆ドロップの結果をここに渡してね。返り値は MoveResult の JSON。
    pub fn on_move_attempt(
        &mut self,
        source_json: &str,
        card_count: usize,
        destination_json: &str,
    ) -> Result<String, JsValue> {
        let source: PileId = serde_json::from_str(source_json).map_err(to_js_error)?;
        let destination: PileId = serde_json::from_str(destination_json).map_err(to_js_error)?;
        let result = self.app.on_move_attempt(source, card_count, destination);
        serde_json::to_string(&result).map_err(to_js_error)
    }

    /// `{"source":"Waste","card_count":1,"destination":{"Foundation":0}}` みたいな形でも受け付けるよ。
    pub fn on_move_request(&mut self, request_json: &str) -> Result<String, JsValue> {
        let request: MoveRequest = serde_json::from_str(request_json).map_err(to_js_error)?;
        serde_json::to_string(&self.app.on_move_request(request)).map_err(to_js_error)
    }

    pub fn on_auto_move(&mut self, source_json: &str) -> Result<String, JsValue> {
        let source: PileId = serde_json::from_str(source_json).map_err(to_js_error)?;
        serde_json::to_string(&self.app.on_auto_move(source)).map_err(to_js_error)
    }

    pub fn on_stock_click(&mut self) -> Result<String, JsValue> {
        serde_json::to_string(&self.app.on_stock_click()).map_err(to_js_error)
    }
}

fn to_js_error<E: std::fmt::Display>(e: E) -> JsValue {
    error!("SolitaireGame: {}", e);
    JsValue::from_str(&e.to_string())
}
