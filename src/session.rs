use std::sync::atomic::{AtomicU64, Ordering};

use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::card::{Card, Suit, full_deck, shuffled};

/// Cards dealt to each side at the start of a game.
pub const HAND_SIZE: usize = 8;

/// The two sides of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seat {
    Player,
    Ai,
}

impl Seat {
    pub fn other(self) -> Seat {
        match self {
            Seat::Player => Seat::Ai,
            Seat::Ai => Seat::Player,
        }
    }
}

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No deal yet (the menu screen).
    NotStarted,
    /// Waiting for the side on turn to play or draw.
    AwaitingMove,
    /// An 8 was just played by the human; waiting for the new suit.
    AwaitingSuitChoice,
    /// A hand emptied; no further actions are accepted.
    Finished,
}

/// Why an action was rejected.  Every rejection leaves the session untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// A gameplay mistake: the card matches neither the active suit nor the
    /// discard top's rank and is not an 8.  The turn does not advance.
    #[error("Invalid move! Match the suit or rank.")]
    InvalidMove,
    /// A contract violation by the caller: wrong phase, wrong turn, or a card
    /// that is not in the acting hand.
    #[error("Illegal action: {0}")]
    IllegalAction(&'static str),
    /// An AI decision computed for a session that has since been replaced.
    #[error("Stale AI decision for a previous session")]
    StaleDecision,
}

/// The game session – the single source of truth for all game state.
///
/// Every card is in exactly one of the four zones (draw pile, discard pile,
/// player hand, AI hand) at all times after a deal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Face-down stock; cards are drawn from the back.
    pub draw_pile: Vec<Card>,
    /// Played cards, oldest first; the last element is the visible top.
    /// The full history is kept for future rule extensions (reshuffling).
    pub discard: Vec<Card>,
    pub player_hand: Vec<Card>,
    pub ai_hand: Vec<Card>,
    /// The suit in force for non-rank matches.  `None` only before a deal.
    pub active_suit: Option<Suit>,
    pub turn: Seat,
    pub phase: Phase,
    pub winner: Option<Seat>,
    /// Process-unique identity.  AI decisions record the id they were
    /// computed for, so a decision in flight across a reset is discarded
    /// instead of landing on the new session.
    pub id: u64,
}

fn next_session_id() -> u64 {
    static NEXT: AtomicU64 = AtomicU64::new(1);
    NEXT.fetch_add(1, Ordering::Relaxed)
}

impl Session {
    // -------------------------------------------------------------------------
    // Construction / Dealing
    // -------------------------------------------------------------------------

    /// An undealt session (the menu state).  Every action is illegal until a
    /// deal replaces it.
    pub fn empty() -> Self {
        Session {
            draw_pile: Vec::new(),
            discard: Vec::new(),
            player_hand: Vec::new(),
            ai_hand: Vec::new(),
            active_suit: None,
            turn: Seat::Player,
            phase: Phase::NotStarted,
            winner: None,
            id: next_session_id(),
        }
    }

    /// Deal a fresh shuffled session using a random seed.
    pub fn deal_random() -> Self {
        let mut rng = rand::rngs::SmallRng::from_os_rng();
        Self::deal_from_deck(shuffled(&full_deck(), &mut rng))
    }

    /// Deal from a specific seed (useful for reproducible games).
    pub fn deal_seeded(seed: u64) -> Self {
        let mut rng = rand::rngs::SmallRng::seed_from_u64(seed);
        Self::deal_from_deck(shuffled(&full_deck(), &mut rng))
    }

    /// Deal from an already-ordered deck (for testing).
    ///
    /// Eight cards go to the player, then eight to the AI, both from the
    /// deck's front.  The first non-8 scanned from the remaining front seeds
    /// the discard pile and sets the active suit; the rest form the draw
    /// pile, drawn from the back.
    pub fn deal_from_deck(mut deck: Vec<Card>) -> Self {
        assert_eq!(deck.len(), 52, "Need exactly 52 cards to deal");

        let player_hand: Vec<Card> = deck.drain(..HAND_SIZE).collect();
        let ai_hand: Vec<Card> = deck.drain(..HAND_SIZE).collect();

        // An 8 on top at the start would force a suit choice before any play,
        // so skip past leading 8s.  A remainder of nothing but 8s cannot
        // happen with four 8s and 36 cards left, but the scan must stay
        // bounded, so fall back to the front card.
        let first = deck.iter().position(|c| !c.is_eight()).unwrap_or(0);
        let first_discard = deck.remove(first);

        Session {
            active_suit: Some(first_discard.suit),
            draw_pile: deck,
            discard: vec![first_discard],
            player_hand,
            ai_hand,
            turn: Seat::Player,
            phase: Phase::AwaitingMove,
            winner: None,
            id: next_session_id(),
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// The visible top of the discard pile, if any.
    pub fn discard_top(&self) -> Option<Card> {
        self.discard.last().copied()
    }

    pub fn draw_count(&self) -> usize {
        self.draw_pile.len()
    }

    pub fn hand(&self, seat: Seat) -> &[Card] {
        match seat {
            Seat::Player => &self.player_hand,
            Seat::Ai => &self.ai_hand,
        }
    }

    fn hand_mut(&mut self, seat: Seat) -> &mut Vec<Card> {
        match seat {
            Seat::Player => &mut self.player_hand,
            Seat::Ai => &mut self.ai_hand,
        }
    }

    /// Total cards across all four zones.  Always 52 after a deal.
    pub fn total_cards(&self) -> usize {
        self.draw_pile.len() + self.discard.len() + self.player_hand.len() + self.ai_hand.len()
    }

    /// Human-readable outcome once the session is finished.
    pub fn outcome(&self) -> Option<&'static str> {
        match self.winner? {
            Seat::Player => Some("Congratulations! You won!"),
            Seat::Ai => Some("AI won! Better luck next time."),
        }
    }

    // -------------------------------------------------------------------------
    // Actions
    // -------------------------------------------------------------------------

    /// Play `card` from `seat`'s hand onto the discard pile.
    ///
    /// Emptying the hand finishes the game immediately, even on an 8.
    /// Otherwise an 8 parks the session in `AwaitingSuitChoice` (the active
    /// suit is deliberately left as it was until the choice lands); any
    /// other card sets the active suit and hands the turn over.
    pub fn play(&mut self, seat: Seat, card: Card) -> Result<(), ActionError> {
        self.expect(seat, Phase::AwaitingMove)?;

        let idx = self
            .hand(seat)
            .iter()
            .position(|c| *c == card)
            .ok_or(ActionError::IllegalAction("card is not in the acting hand"))?;

        let top = self
            .discard_top()
            .ok_or(ActionError::IllegalAction("discard pile is empty"))?;
        if !card.can_play_on(top, self.active_suit) {
            return Err(ActionError::InvalidMove);
        }

        let card = self.hand_mut(seat).remove(idx);
        self.discard.push(card);

        if self.hand(seat).is_empty() {
            self.phase = Phase::Finished;
            self.winner = Some(seat);
            return Ok(());
        }

        if card.is_eight() {
            self.phase = Phase::AwaitingSuitChoice;
        } else {
            self.active_suit = Some(card.suit);
            self.turn = seat.other();
        }
        Ok(())
    }

    /// Resolve the suit choice after an 8: set the active suit, hand the turn
    /// over, and return to `AwaitingMove`.
    pub fn choose_suit(&mut self, seat: Seat, suit: Suit) -> Result<(), ActionError> {
        self.expect(seat, Phase::AwaitingSuitChoice)?;

        self.active_suit = Some(suit);
        self.turn = seat.other();
        self.phase = Phase::AwaitingMove;
        Ok(())
    }

    /// Draw the top card of the draw pile into `seat`'s hand.
    ///
    /// An empty pile is not an error: the turn is skipped (`Ok(None)`).
    /// Either way the turn flips – a drawn card is never played in the same
    /// turn, even when it would have been valid.
    pub fn draw(&mut self, seat: Seat) -> Result<Option<Card>, ActionError> {
        self.expect(seat, Phase::AwaitingMove)?;

        let drawn = self.draw_pile.pop();
        if let Some(card) = drawn {
            self.hand_mut(seat).push(card);
        }
        self.turn = seat.other();
        Ok(drawn)
    }

    // -------------------------------------------------------------------------
    // Internal helpers
    // -------------------------------------------------------------------------

    fn expect(&self, seat: Seat, phase: Phase) -> Result<(), ActionError> {
        if self.phase != phase {
            return Err(ActionError::IllegalAction("action out of phase"));
        }
        if self.turn != seat {
            return Err(ActionError::IllegalAction("not this side's turn"));
        }
        Ok(())
    }
}
