use crate::card::{Card, Suit};
use crate::session::{Phase, Seat, Session};

/// Trait that abstracts the rendering layer.
///
/// The game loop talks only to this trait, so the engine stays
/// renderer-agnostic (plain ANSI CLI today).
pub trait Renderer {
    /// Render the full table.
    fn render(&mut self, session: &Session);
    /// Display an informational message.
    fn info(&mut self, msg: &str);
    /// Display an error message.
    fn error(&mut self, msg: &str);
    /// Display the help text.
    fn help(&mut self);
    /// Display the game-over screen with the outcome message.
    fn game_over(&mut self, msg: &str);
}

// ---------------------------------------------------------------------------
// CLI Renderer
// ---------------------------------------------------------------------------

/// A simple ANSI-color CLI renderer.
pub struct CliRenderer;

impl CliRenderer {
    pub fn new() -> Self {
        CliRenderer
    }

    fn card_str(&self, card: Card) -> String {
        let label = format!("{:>3}", card.label());
        if card.suit.is_red() {
            format!("\x1b[31m{}\x1b[0m", label) // red
        } else {
            format!("\x1b[90m{}\x1b[0m", label) // dark gray
        }
    }

    fn suit_str(&self, suit: Suit) -> String {
        if suit.is_red() {
            format!("\x1b[31m{}\x1b[0m", suit.symbol())
        } else {
            format!("\x1b[90m{}\x1b[0m", suit.symbol())
        }
    }
}

impl Renderer for CliRenderer {
    fn render(&mut self, session: &Session) {
        println!();

        if session.phase == Phase::NotStarted {
            println!("  (no game in progress – type 'new' to deal)");
            println!();
            return;
        }

        // ---- AI row: face-down hand ----
        print!("  AI ({} cards):      ", session.ai_hand.len());
        for _ in &session.ai_hand {
            print!("[***]");
        }
        println!();
        println!();

        // ---- Center row: draw pile, discard top, active suit ----
        print!("  DRAW: [###] ×{:<2}", session.draw_count());
        match session.discard_top() {
            Some(top) => print!("    DISCARD: [{}]", self.card_str(top)),
            None => print!("    DISCARD: [   ]"),
        }
        if let Some(suit) = session.active_suit {
            print!("    ACTIVE SUIT: {}", self.suit_str(suit));
        }
        println!();
        println!();

        // ---- Player row: indexed hand, unplayable cards dimmed ----
        let my_move = session.turn == Seat::Player && session.phase == Phase::AwaitingMove;
        print!("  IDX:  ");
        for i in 0..session.player_hand.len() {
            print!("{:^7}", i);
        }
        println!();
        print!("  HAND: ");
        for &card in &session.player_hand {
            let playable = my_move
                && session
                    .discard_top()
                    .is_some_and(|top| card.can_play_on(top, session.active_suit));
            if my_move && !playable {
                // Dimmed, uncolored: this card cannot be played right now.
                print!(" \x1b[2m[{:>3}]\x1b[0m ", card.label());
            } else {
                print!(" [{}] ", self.card_str(card));
            }
        }
        println!();
        println!();
    }

    fn info(&mut self, msg: &str) {
        println!("\x1b[36m[INFO]\x1b[0m {}", msg);
    }

    fn error(&mut self, msg: &str) {
        println!("\x1b[31m[ERR ]\x1b[0m {}", msg);
    }

    fn help(&mut self) {
        println!(
            r#"
╔══════════════════════════════════════════════════════════════╗
║          Crazy Eights vs. Computer – CLI Help                ║
╠══════════════════════════════════════════════════════════════╣
║  GOAL: Be the first to empty your hand. You and the AI each  ║
║        start with 8 cards.                                   ║
║                                                              ║
║  RULES:                                                      ║
║    · Play a card matching the ACTIVE SUIT or the rank of     ║
║      the discard top.                                        ║
║    · Any 8 is always playable and lets you pick a new suit.  ║
║    · No playable card? Draw one – your turn ends either way. ║
║    · Empty draw pile: drawing just passes the turn.          ║
╠══════════════════════════════════════════════════════════════╣
║  COMMANDS (case-insensitive):                                ║
║                                                              ║
║  play <idx>  | p    Play the hand card at that index (0=left)║
║  draw        | d    Draw a card / pass                       ║
║  suit h|d|c|s| s    Pick the new suit after playing an 8     ║
║  new         | n    Deal a new game                          ║
║  quit        | q    Exit                                     ║
║  help | h | ?       Show this help                           ║
╚══════════════════════════════════════════════════════════════╝
"#
        );
    }

    fn game_over(&mut self, msg: &str) {
        println!(
            "\n\x1b[33m  ════════════ GAME OVER ════════════\x1b[0m\
             \n  {}\
             \n  Type 'new' for another game.\n",
            msg
        );
    }
}
