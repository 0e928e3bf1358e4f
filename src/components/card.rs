// src/components/card.rs

use std::fmt;

// serde を使う宣言！スナップショットを JSON にしてプレゼン層に渡す時に使うよ。
use serde::{Deserialize, Serialize};

use crate::components::stack::PileId;

/// カードのスート（マーク）を表す列挙型だよ！❤️♦️♣️♠️
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Heart,   // ❤️
    Diamond, // ♦️
    Club,    // ♣️
    Spade,   // ♠️
}

/// 全スート。組札のインデックス (0: Heart, 1: Diamond, 2: Club, 3: Spade) もこの並び！
pub const ALL_SUITS: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

impl Suit {
    /// ALL_SUITS の中での位置 (0-3)。
    pub const fn index(self) -> u8 {
        match self {
            Suit::Heart => 0,
            Suit::Diamond => 1,
            Suit::Club => 2,
            Suit::Spade => 3,
        }
    }

    /// スートからカードの色を決めるよ。ハートとダイヤは赤、クラブとスペードは黒！
    pub const fn color(self) -> CardColor {
        match self {
            Suit::Heart | Suit::Diamond => CardColor::Red,
            Suit::Club | Suit::Spade => CardColor::Black,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Suit::Heart => '♥',
            Suit::Diamond => '♦',
            Suit::Club => '♣',
            Suit::Spade => '♠',
        }
    }
}

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// 値そのもの (`Rank::Ace as u8 == 1`) は組札で使う「序数」。
/// 場札の隣接チェックで使う「重み」は [`Rank::weight`] の方だから注意してね！
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

/// デッキを作る時のランクの並び。2 から始まって A が最後！
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

impl Rank {
    /// 序数 (A=1 ... K=13)。組札の昇順チェックはこっちを使う。
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// ランクの重み (2-11)。2〜10 はそのまま、J/Q/K は 10、A は 11！
    pub const fn weight(self) -> u8 {
        match self {
            Rank::Ace => 11,
            Rank::Jack | Rank::Queen | Rank::King => 10,
            other => other as u8,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// カードの色（赤か黒か）だよ。場札の「色違い」ルールで使う！❤️🖤
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    pub fn from_suit(suit: Suit) -> Self {
        suit.color()
    }
}

/// カード 1 枚を一意に指す ID (0-51)。スートとランクから決まるので、ゲーム中ずっと変わらない！
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u8);

impl CardId {
    pub const fn of(suit: Suit, rank: Rank) -> Self {
        CardId(suit.index() * 13 + (rank.ordinal() - 1))
    }
}

/// カードそのものを表す構造体だよ！🃏
///
/// - `id` / `suit` / `rank`: 作った後は変わらない「正体」
/// - `is_face_up`: 表向きかどうか
/// - `location`: 今どの山にいるか (配る前は `None`)
///
/// 置き場所の情報は `PileStore` と配札・移動・山札処理からしか書き換えないよ。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub suit: Suit,
    pub rank: Rank,
    pub(crate) is_face_up: bool,
    pub(crate) location: Option<PileId>,
}

impl Card {
    /// 新しいカードを作るよ。最初は裏向きで、どの山にも属してない！
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            id: CardId::of(suit, rank),
            suit,
            rank,
            is_face_up: false,
            location: None,
        }
    }

    pub fn weight(&self) -> u8 {
        self.rank.weight()
    }

    pub fn color(&self) -> CardColor {
        self.suit.color()
    }

    pub fn is_face_up(&self) -> bool {
        self.is_face_up
    }

    pub fn location(&self) -> Option<PileId> {
        self.location
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}
