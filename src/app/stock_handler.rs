// src/app/stock_handler.rs
//! Handles clicks on the Stock pile (dealing to Waste, recycling Waste back to Stock).

use log::{debug, info};

use crate::components::card::CardId;
use crate::components::stack::PileId;
use crate::logic::rules::stock_waste;
use crate::pile_store::PileStore;

/// Deals up to `draw_count` cards from the top of the Stock onto the Waste.
/// Only the newest Waste card ends up face up.
/// Returns the drawn cards in draw order (empty if the Stock was empty).
pub fn draw_from_stock(store: &mut PileStore, draw_count: usize) -> Vec<CardId> {
    let stock_is_empty = store.pile(PileId::Stock).map_or(true, |pile| pile.is_empty());
    if !stock_waste::can_deal_from_stock(stock_is_empty) {
        debug!("  Stock is empty. Cannot deal.");
        return Vec::new();
    }

    let mut drawn = Vec::with_capacity(draw_count);
    while drawn.len() < draw_count {
        let Some(card_id) = store.pop_top(PileId::Stock) else {
            break;
        };
        store.push_card(PileId::Waste, card_id);
        drawn.push(card_id);
    }

    let waste: Vec<CardId> = store
        .pile(PileId::Waste)
        .map(|pile| pile.cards().to_vec())
        .unwrap_or_default();
    if let Some((&newest, older)) = waste.split_last() {
        for &card_id in older {
            store.set_face_up(card_id, false);
        }
        store.set_face_up(newest, true);
    }

    info!("  Drew {} card(s) from Stock to Waste.", drawn.len());
    drawn
}

/// Turns the Waste back into the Stock when the Stock is empty.
/// Every card goes face down and the newest Waste card becomes the Stock top,
/// so the next cycle draws the cards in the reverse order of the last one.
/// Returns true if the reset was performed; false (a no-op) otherwise.
pub fn recycle_waste(store: &mut PileStore) -> bool {
    let stock_is_empty = store.pile(PileId::Stock).map_or(true, |pile| pile.is_empty());
    let waste_is_empty = store.pile(PileId::Waste).map_or(true, |pile| pile.is_empty());
    if !stock_waste::can_reset_stock_from_waste(stock_is_empty, waste_is_empty) {
        debug!("  Cannot reset Waste to Stock (Stock not empty or Waste empty).");
        return false;
    }

    let waste = store.take_all(PileId::Waste);
    info!("  Resetting {} cards from Waste to Stock.", waste.len());
    for card_id in waste {
        store.set_face_up(card_id, false);
        store.push_card(PileId::Stock, card_id);
    }
    true
}

/// The visible part of the Waste: the last `size` cards, newest last.
pub fn waste_window(store: &PileStore, size: usize) -> Vec<CardId> {
    store
        .pile(PileId::Waste)
        .map(|pile| {
            let cards = pile.cards();
            cards[cards.len().saturating_sub(size)..].to_vec()
        })
        .unwrap_or_default()
}
