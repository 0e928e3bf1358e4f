// src/error.rs
//! コアが返すエラーの種類をまとめるよ。

use serde::{Deserialize, Serialize};

use crate::components::card::CardId;
use crate::components::stack::PileId;

/// 移動が却下された理由。どれも「ユーザーの操作ミス」で、状態は何も変わらないよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
pub enum MoveError {
    #[error("the dragged cards are not a face-up run at the top of the source pile")]
    NotATopRun,
    #[error("only a King can be placed on an empty tableau pile")]
    OnlyKingOnEmptyTableau,
    #[error("a card cannot be placed on a card of the same color")]
    ColorConflict,
    #[error("the card must be exactly one rank below the destination's top card")]
    RankNotDescending,
    #[error("the card is not the next rank for this foundation")]
    FoundationOrderViolation,
    #[error("the card's suit does not match this foundation")]
    WrongSuitForFoundation,
    #[error("only a single card can be moved onto a foundation")]
    MultiCardToFoundation,
    #[error("cards cannot be moved to this pile")]
    InvalidDestination,
}

/// 配札の入力がおかしい時のエラー。普通のデッキなら絶対に起きない (起きたら呼び出し側のバグ)。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DealError {
    #[error("insufficient cards to deal: needed at least {needed}, got {got}")]
    InsufficientCards { needed: usize, got: usize },
    #[error("the deck contains card {0:?} more than once")]
    DuplicateCard(CardId),
}

/// `PileStore::check_integrity` が見つけた不整合。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntegrityError {
    #[error("card {0:?} appears in more than one pile slot")]
    DuplicateCard(CardId),
    #[error("card {0:?} is registered but not in any pile")]
    MissingCard(CardId),
    #[error("pile {pile} holds unknown card {card:?}")]
    UnknownCard { pile: PileId, card: CardId },
    #[error("card {card:?} sits in {actual} but its location says {recorded:?}")]
    LocationMismatch {
        card: CardId,
        actual: PileId,
        recorded: Option<PileId>,
    },
}
