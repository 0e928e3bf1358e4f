// src/app/game_app.rs

use log::{error, info};
use rand::Rng;

use crate::app::stock_handler;
use crate::components::card::CardId;
use crate::components::game_state::GameStatus;
use crate::components::stack::PileId;
use crate::config::rules::RuleConfig;
use crate::error::{DealError, MoveError};
use crate::logic::auto_move::find_automatic_foundation_move;
use crate::logic::deck::{create_standard_deck, shuffle_deck_with_seed};
use crate::logic::rules;
use crate::pile_store::PileStore;
use crate::protocol::{CardSnapshot, DrawResult, GameSnapshot, MoveRequest, MoveResult, PileSnapshot};
use crate::systems::{DealInitialCardsSystem, MoveCardSystem};

/// ゲーム 1 回分の状態をまるごと持つ構造体だよ！🎮
///
/// グローバル変数は一切なし。PileStore はこの中にだけあるので、
/// GameApp を 2 つ作れば 2 つのゲームが独立して動く！
///
/// プレゼン層はここのメソッドだけを呼べば OK:
/// - `start_new_game`: 新しく配る
/// - `get_pile_state` / `snapshot`: 描画用に読む
/// - `on_move_attempt` / `on_auto_move`: カードを動かす
/// - `on_stock_click`: 山札をめくる
#[derive(Debug, Clone)]
pub struct GameApp {
    store: PileStore,
    config: RuleConfig,
    seed: u64,
    status: GameStatus,
}

impl Default for GameApp {
    fn default() -> Self {
        Self::new(RuleConfig::default())
    }
}

impl GameApp {
    /// 空っぽの GameApp を作る。カードは `start_new_game` を呼ぶまで配られないよ。
    /// `draw_count` は 1 以上に丸める (0 だと山札クリックが何もしなくなるから)。
    pub fn new(mut config: RuleConfig) -> Self {
        config.draw_count = config.draw_count.max(1);
        Self {
            store: PileStore::new(),
            config,
            seed: 0,
            status: GameStatus::Playing,
        }
    }

    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// 読み取り専用で PileStore を覗く。
    pub fn store(&self) -> &PileStore {
        &self.store
    }

    /// 新しいゲームを始める！シードを渡せば同じ配札が再現できるよ。
    /// `None` ならランダムにシードを決めて、スナップショットに残しておく。
    pub fn start_new_game(&mut self, seed: Option<u64>) -> Result<GameSnapshot, DealError> {
        let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
        let mut deck = create_standard_deck();
        shuffle_deck_with_seed(&mut deck, seed, self.config.shuffle_swaps);
        DealInitialCardsSystem.run(&mut self.store, deck)?;

        self.seed = seed;
        self.status = GameStatus::Playing;
        self.verify_integrity("start_new_game");
        info!("GameApp: new game started with seed {}", seed);
        Ok(self.snapshot())
    }

    /// 指定した山のカードを下から上の順で返す。無効な山なら空っぽ。
    pub fn get_pile_state(&self, pile: PileId) -> Vec<CardSnapshot> {
        self.store.cards_in(pile).into_iter().map(CardSnapshot::from).collect()
    }

    /// 捨て札の見えてる部分。
    pub fn waste_window(&self) -> Vec<CardSnapshot> {
        stock_handler::waste_window(&self.store, self.config.waste_window)
            .into_iter()
            .filter_map(|card_id| self.card_snapshot(card_id))
            .collect()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            seed: self.seed,
            status: self.status,
            piles: PileId::all()
                .map(|pile| PileSnapshot {
                    pile,
                    cards: self.get_pile_state(pile),
                })
                .collect(),
            waste_window: self.waste_window(),
        }
    }

    /// カード移動の唯一の入口！`source` の上から `card_count` 枚を `destination` へ。
    /// 検証を通ったらその場で反映、ダメなら理由を返して何も変えない。
    pub fn on_move_attempt(&mut self, source: PileId, card_count: usize, destination: PileId) -> MoveResult {
        let plan = match rules::validate_move_count(
            &self.store,
            source,
            card_count,
            destination,
            self.config.rank_adjacency,
        ) {
            Ok(plan) => plan,
            Err(reason) => {
                info!(
                    "GameApp: move of {} card(s) {} -> {} rejected: {}",
                    card_count, source, destination, reason
                );
                return MoveResult::rejected(reason, self.status);
            }
        };

        let flipped = MoveCardSystem::new().execute(&mut self.store, &plan);
        self.status = GameStatus::from_foundation_count(self.store.foundation_card_count());
        self.verify_integrity("on_move_attempt");
        if self.status == GameStatus::Won {
            info!("GameApp: all cards are on the foundations! 🏆");
        }
        MoveResult::accepted(flipped, self.status)
    }

    /// JSON で届いた MoveRequest をそのまま流す版。
    pub fn on_move_request(&mut self, request: MoveRequest) -> MoveResult {
        self.on_move_attempt(request.source, request.card_count, request.destination)
    }

    /// `source` の一番上のカードを組札へ自動で送る (ダブルクリック用)。
    /// 送れる組札がなければ、スートの合う組札に送った時の却下理由を返すよ。
    pub fn on_auto_move(&mut self, source: PileId) -> MoveResult {
        let target = find_automatic_foundation_move(&self.store, source).or_else(|| {
            self.store
                .top_card(source)
                .map(|card| PileId::Foundation(card.suit.index()))
        });
        match target {
            Some(destination) => self.on_move_attempt(source, 1, destination),
            None => MoveResult::rejected(MoveError::NotATopRun, self.status),
        }
    }

    /// 山札がクリックされた！まだカードがあればめくる、空なら捨て札を戻す、両方空なら何もしない。
    pub fn on_stock_click(&mut self) -> DrawResult {
        let drawn = stock_handler::draw_from_stock(&mut self.store, self.config.draw_count);
        let recycled = drawn.is_empty() && stock_handler::recycle_waste(&mut self.store);
        self.verify_integrity("on_stock_click");

        DrawResult {
            drawn_cards: drawn
                .into_iter()
                .filter_map(|card_id| self.card_snapshot(card_id))
                .collect(),
            stock_exhausted: self.store.pile(PileId::Stock).map_or(true, |pile| pile.is_empty()),
            recycled,
        }
    }

    fn card_snapshot(&self, card_id: CardId) -> Option<CardSnapshot> {
        self.store.card(card_id).map(CardSnapshot::from)
    }

    fn verify_integrity(&self, after: &str) {
        if let Err(e) = self.store.check_integrity() {
            error!("GameApp: pile store is inconsistent after {}: {}", after, e);
        }
    }
}
