// src/logic/deck.rs

use itertools::iproduct;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use crate::config::rules::DECK_SIZE;

/// 標準的な52枚のカードデッキ（ソリティア用）を生成する関数だよ！🃏
///
/// 並びはランク (2, 3, ..., K, A) ごとに Heart → Diamond → Club → Spade。
/// 生成された時点では、すべてのカードは裏向きで、どの山にも属してないよ！
pub fn create_standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for (rank, suit) in iproduct!(ALL_RANKS, ALL_SUITS) {
        deck.push(Card::new(suit, rank));
    }
    deck
}

/// カードデッキをシャッフルする関数だよ。🎲
///
/// ランダムな 2 枚を選んで入れ替える、を `swaps` 回くり返すだけ！
/// カードの中身はいじらないので、並び替え (順列) にしかならないよ。
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R, swaps: usize) {
    if deck.len() < 2 {
        return;
    }
    for _ in 0..swaps {
        let first = rng.gen_range(0..deck.len());
        let second = rng.gen_range(0..deck.len());
        deck.swap(first, second);
    }
}

/// シード付きシャッフル。同じシードなら必ず同じ並びになる！
pub fn shuffle_deck_with_seed(deck: &mut [Card], seed: u64, swaps: usize) {
    let mut rng = StdRng::seed_from_u64(seed);
    shuffle_deck(deck, &mut rng, swaps);
}
