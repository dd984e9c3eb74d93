/// All commands a player can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play the hand card at `idx` (0 = leftmost, as rendered).
    Play { idx: usize },
    /// Draw a card from the draw pile (or pass when it is empty).
    Draw,
    /// Pick the new suit after playing an 8.
    ChooseSuit { suit: crate::card::Suit },
    /// Abandon the current game and deal a new one.
    NewGame,
    /// Quit the game.
    Quit,
    /// Print help.
    Help,
}

/// Parse a single line of text input into a `Command`.
///
/// Syntax reference (case-insensitive):
/// ```text
/// play <idx>   | p <idx>   -- Play the card at that hand position (0 = left)
/// draw         | d         -- Draw a card (passes when the pile is empty)
/// suit h|d|c|s | s h|d|c|s -- Choose the new suit after playing an 8
/// new          | n         -- Deal a new game
/// quit         | q         -- Quit
/// help         | h | ?     -- Help
/// ```
pub fn parse_command(input: &str) -> Result<Command, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }

    let tokens: Vec<&str> = input.split_whitespace().collect();
    let cmd = tokens[0].to_lowercase();

    match cmd.as_str() {
        "play" | "p" => {
            if tokens.len() < 2 {
                return Err("Usage: play <idx>".to_string());
            }
            Ok(Command::Play {
                idx: parse_hand_idx(tokens[1])?,
            })
        }
        "draw" | "d" => Ok(Command::Draw),
        "suit" | "s" => {
            if tokens.len() < 2 {
                return Err("Usage: suit h|d|c|s".to_string());
            }
            Ok(Command::ChooseSuit {
                suit: parse_suit(tokens[1])?,
            })
        }
        "new" | "n" => Ok(Command::NewGame),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        "help" | "h" | "?" => Ok(Command::Help),
        _ => Err(format!("Unknown command '{}'. Type 'help' for help.", tokens[0])),
    }
}

fn parse_hand_idx(s: &str) -> Result<usize, String> {
    // Range against the current hand size is checked at dispatch time.
    s.parse()
        .map_err(|_| format!("'{}' is not a valid hand index", s))
}

fn parse_suit(s: &str) -> Result<crate::card::Suit, String> {
    use crate::card::Suit;
    match s.to_lowercase().as_str() {
        "h" | "hearts" => Ok(Suit::Hearts),
        "d" | "diamonds" => Ok(Suit::Diamonds),
        "c" | "clubs" => Ok(Suit::Clubs),
        "s" | "spades" => Ok(Suit::Spades),
        _ => Err(format!("'{}' is not a valid suit. Use h, d, c, or s.", s)),
    }
}
