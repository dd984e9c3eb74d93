use serde::{Deserialize, Serialize};

/// The four French suits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All four suits, in canonical order.  This order doubles as the AI's
    /// suit tie-break precedence, so it must not be reordered.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Single-character symbol used in CLI rendering.
    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
    }

    /// Full lowercase name, as it appears in card ids and messages.
    pub fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
            Suit::Spades => "spades",
        }
    }

    pub fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }
}

/// The thirteen ranks, ace low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
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

impl Rank {
    /// All thirteen ranks, in canonical order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
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
    ];

    /// Point value: ace counts 1, face cards count 10.  Not consulted by the
    /// play rules; reserved for scoring variants.
    pub fn value(self) -> u8 {
        match self {
            Rank::Ace => 1,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
        }
    }

    /// Short label used in CLI rendering ("A", "2", …, "10", "J", "Q", "K").
    pub fn label(self) -> &'static str {
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

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Card { suit, rank }
    }

    /// Unique id, e.g. "8-hearts".  One per card in a 52-card deck.
    pub fn id(self) -> String {
        format!("{}-{}", self.rank.label(), self.suit.name())
    }

    /// Compact label for rendering, e.g. "8♥".
    pub fn label(self) -> String {
        format!("{}{}", self.rank.label(), self.suit.symbol())
    }

    /// A crazy eight is always playable and triggers a suit change.
    pub fn is_eight(self) -> bool {
        self.rank == Rank::Eight
    }

    /// Can this card legally be played on `top` while `active` is the suit
    /// in force?  An eight always can; any other card must match the active
    /// suit or the top card's rank.  An unset active suit never occurs after
    /// a deal, so a non-8 against `None` is simply invalid.
    pub fn can_play_on(self, top: Card, active: Option<Suit>) -> bool {
        if self.is_eight() {
            return true;
        }
        match active {
            Some(suit) => self.suit == suit || self.rank == top.rank,
            None => false,
        }
    }
}

/// The full 52-card deck in canonical order: suits in `Suit::ALL` order,
/// ranks in `Rank::ALL` order within each suit.  Deterministic.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(52);

    for &suit in &Suit::ALL {
        for &rank in &Rank::ALL {
            deck.push(Card::new(suit, rank));
        }
    }

    debug_assert_eq!(deck.len(), 52, "Deck must have exactly 52 cards");
    deck
}

/// A fresh uniformly random permutation of `cards`.  The input is left
/// untouched; the output holds exactly the same multiset of cards.
pub fn shuffled<R: rand::Rng>(cards: &[Card], rng: &mut R) -> Vec<Card> {
    use rand::seq::SliceRandom;

    let mut deck = cards.to_vec();
    deck.shuffle(rng);
    deck
}
