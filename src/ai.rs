//! The computer opponent: a greedy one-action policy.
//!
//! `decide` is pure and deterministic for a given table; the caller owns the
//! "thinking" delay and applies the decision afterwards through `apply`,
//! which refuses decisions computed for a session that no longer exists.

use crate::card::{Card, Suit};
use crate::session::{ActionError, Phase, Seat, Session};

/// What the AI resolved to do with its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiMove {
    /// Play this card.  For an 8 the replacement suit is decided up front
    /// from the remaining hand, so the AI never rests in the suit-choice
    /// phase the way the human does.
    Play {
        card: Card,
        chosen_suit: Option<Suit>,
    },
    /// Nothing playable: draw a card, or skip on an empty pile.
    Draw,
}

/// A decision bound to the identity of the session it was computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiDecision {
    pub session_id: u64,
    pub action: AiMove,
}

/// Pick the AI's next action, or `None` when it is not the AI's move.
///
/// The hand is scanned in its current order and the first legal card wins –
/// a simple greedy policy, not a search.
pub fn decide(session: &Session) -> Option<AiDecision> {
    if session.phase != Phase::AwaitingMove || session.turn != Seat::Ai {
        return None;
    }
    let top = session.discard_top()?;

    let action = match session
        .ai_hand
        .iter()
        .position(|c| c.can_play_on(top, session.active_suit))
    {
        Some(idx) => {
            let card = session.ai_hand[idx];
            let chosen_suit = if card.is_eight() {
                let mut remaining = session.ai_hand.clone();
                remaining.remove(idx);
                Some(best_suit(&remaining))
            } else {
                None
            };
            AiMove::Play { card, chosen_suit }
        }
        None => AiMove::Draw,
    };

    Some(AiDecision {
        session_id: session.id,
        action,
    })
}

/// The suit the AI holds the most of, for replacing an 8.
///
/// Strict maximum over a left-to-right fold of `Suit::ALL`, so ties go to
/// the earlier suit (hearts before diamonds before clubs before spades).
pub fn best_suit(hand: &[Card]) -> Suit {
    let mut best = Suit::ALL[0];
    let mut best_count = 0usize;
    for &suit in &Suit::ALL {
        let count = hand.iter().filter(|c| c.suit == suit).count();
        if count > best_count {
            best = suit;
            best_count = count;
        }
    }
    best
}

/// Apply a decision to the session.
///
/// A decision carried across a reset is rejected with `StaleDecision` and
/// must be dropped by the caller.  Playing an 8 and choosing its suit happen
/// as one step; the turn always ends with the player to move (unless the AI
/// just won).
pub fn apply(session: &mut Session, decision: AiDecision) -> Result<(), ActionError> {
    if decision.session_id != session.id {
        return Err(ActionError::StaleDecision);
    }

    match decision.action {
        AiMove::Play { card, chosen_suit } => {
            session.play(Seat::Ai, card)?;
            if session.phase == Phase::AwaitingSuitChoice {
                let suit = chosen_suit
                    .ok_or(ActionError::IllegalAction("8 played without a suit choice"))?;
                session.choose_suit(Seat::Ai, suit)?;
            }
            Ok(())
        }
        AiMove::Draw => {
            session.draw(Seat::Ai)?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Rank;

    fn card(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    /// A hand-built table with the AI to move.
    fn table(ai_hand: Vec<Card>, top: Card, active: Suit) -> Session {
        let mut s = Session::empty();
        s.discard.push(top);
        s.active_suit = Some(active);
        s.ai_hand = ai_hand;
        s.player_hand = vec![card(Suit::Clubs, Rank::King)];
        s.turn = Seat::Ai;
        s.phase = Phase::AwaitingMove;
        s
    }

    #[test]
    fn greedy_scan_plays_the_first_legal_card() {
        // 2♣ matches nothing, 8♠ is always legal; the later 9♥ is ignored.
        let s = table(
            vec![
                card(Suit::Clubs, Rank::Two),
                card(Suit::Spades, Rank::Eight),
                card(Suit::Hearts, Rank::Nine),
            ],
            card(Suit::Diamonds, Rank::Five),
            Suit::Hearts,
        );

        let decision = decide(&s).unwrap();
        assert_eq!(
            decision.action,
            AiMove::Play {
                card: card(Suit::Spades, Rank::Eight),
                // Remaining hand is one club and one heart: a tie, and the
                // fold order makes hearts win it.
                chosen_suit: Some(Suit::Hearts),
            }
        );
    }

    #[test]
    fn playing_an_eight_resolves_the_suit_in_the_same_step() {
        let mut s = table(
            vec![
                card(Suit::Clubs, Rank::Two),
                card(Suit::Spades, Rank::Eight),
                card(Suit::Diamonds, Rank::Nine),
                card(Suit::Diamonds, Rank::Two),
            ],
            card(Suit::Diamonds, Rank::Five),
            Suit::Hearts,
        );

        let decision = decide(&s).unwrap();
        apply(&mut s, decision).unwrap();

        assert_eq!(s.discard_top(), Some(card(Suit::Spades, Rank::Eight)));
        assert_eq!(s.active_suit, Some(Suit::Diamonds));
        assert_eq!(s.turn, Seat::Player);
        assert_eq!(s.phase, Phase::AwaitingMove);
    }

    #[test]
    fn draws_when_nothing_is_playable() {
        let mut s = table(
            vec![card(Suit::Clubs, Rank::Two)],
            card(Suit::Diamonds, Rank::Five),
            Suit::Hearts,
        );
        s.draw_pile.push(card(Suit::Spades, Rank::Four));

        let decision = decide(&s).unwrap();
        assert_eq!(decision.action, AiMove::Draw);

        apply(&mut s, decision).unwrap();
        assert!(s.ai_hand.contains(&card(Suit::Spades, Rank::Four)));
        // The drawn card is never played in the same turn.
        assert_eq!(s.turn, Seat::Player);
    }

    #[test]
    fn skips_on_an_empty_draw_pile() {
        let mut s = table(
            vec![card(Suit::Clubs, Rank::Two)],
            card(Suit::Diamonds, Rank::Five),
            Suit::Hearts,
        );

        let decision = decide(&s).unwrap();
        assert_eq!(decision.action, AiMove::Draw);

        apply(&mut s, decision).unwrap();
        assert_eq!(s.ai_hand.len(), 1);
        assert_eq!(s.turn, Seat::Player);
    }

    #[test]
    fn wins_by_playing_the_last_card() {
        let mut s = table(
            vec![card(Suit::Hearts, Rank::Nine)],
            card(Suit::Diamonds, Rank::Five),
            Suit::Hearts,
        );

        let decision = decide(&s).unwrap();
        apply(&mut s, decision).unwrap();
        assert_eq!(s.phase, Phase::Finished);
        assert_eq!(s.winner, Some(Seat::Ai));
        assert_eq!(s.outcome(), Some("AI won! Better luck next time."));
    }

    #[test]
    fn no_decision_when_it_is_not_the_ai_turn() {
        let mut s = table(
            vec![card(Suit::Hearts, Rank::Nine)],
            card(Suit::Diamonds, Rank::Five),
            Suit::Hearts,
        );
        s.turn = Seat::Player;
        assert_eq!(decide(&s), None);

        s.turn = Seat::Ai;
        s.phase = Phase::Finished;
        assert_eq!(decide(&s), None);
    }

    #[test]
    fn a_decision_does_not_survive_a_reset() {
        let s = table(
            vec![card(Suit::Hearts, Rank::Nine)],
            card(Suit::Diamonds, Rank::Five),
            Suit::Hearts,
        );
        let decision = decide(&s).unwrap();

        // The session is replaced while the AI is "thinking".
        let mut fresh = Session::deal_seeded(9);
        fresh.turn = Seat::Ai;
        assert_eq!(apply(&mut fresh, decision), Err(ActionError::StaleDecision));
    }

    #[test]
    fn best_suit_takes_the_strict_maximum() {
        let hand = vec![
            card(Suit::Clubs, Rank::Two),
            card(Suit::Spades, Rank::Three),
            card(Suit::Spades, Rank::Four),
            card(Suit::Spades, Rank::Five),
            card(Suit::Diamonds, Rank::Six),
        ];
        assert_eq!(best_suit(&hand), Suit::Spades);
    }

    #[test]
    fn best_suit_breaks_ties_in_enumeration_order() {
        // Equal hearts and diamonds: hearts wins, it is enumerated first.
        let hand = vec![
            card(Suit::Diamonds, Rank::Two),
            card(Suit::Hearts, Rank::Three),
            card(Suit::Diamonds, Rank::Four),
            card(Suit::Hearts, Rank::Five),
            card(Suit::Clubs, Rank::Six),
        ];
        assert_eq!(best_suit(&hand), Suit::Hearts);
    }
}
