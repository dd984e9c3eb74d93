use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use crate::ai::{self, AiMove};
use crate::command::{Command, parse_command};
use crate::renderer::Renderer;
use crate::session::{Phase, Seat, Session};

/// How long the AI pretends to think before acting.  Presentation only:
/// the decision is computed independently of the delay.
const AI_THINK_DELAY: Duration = Duration::from_millis(1500);

/// The main game loop.  `renderer` is injected so the engine stays
/// renderer-agnostic.
pub struct Game<R: Renderer> {
    session: Session,
    renderer: R,
    /// Seed for the first deal, taken from the command line.
    first_seed: Option<u64>,
    think_delay: Duration,
}

impl<R: Renderer> Game<R> {
    pub fn init(seed: Option<u64>, renderer: R) -> Self {
        Game {
            session: Session::empty(),
            renderer,
            first_seed: seed,
            think_delay: AI_THINK_DELAY,
        }
    }

    /// Run the interactive game loop until the player quits.
    pub fn run(&mut self) {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        self.renderer.render(&self.session);

        loop {
            print!("> ");
            stdout.flush().unwrap();

            let mut line = String::new();
            if stdin.lock().read_line(&mut line).unwrap() == 0 {
                // EOF
                break;
            }

            match parse_command(&line) {
                Err(e) => self.renderer.error(&e),
                Ok(cmd) => {
                    let quit = self.handle(cmd);
                    if quit {
                        break;
                    }

                    // A successful player action may hand the turn to the AI.
                    if self.session.phase == Phase::AwaitingMove && self.session.turn == Seat::Ai {
                        self.ai_turn();
                    }

                    self.renderer.render(&self.session);

                    if self.session.phase == Phase::Finished {
                        if let Some(msg) = self.session.outcome() {
                            self.renderer.game_over(msg);
                        }
                    }
                }
            }
        }
    }

    /// Dispatch a command.  Returns `true` if the game should exit.
    fn handle(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::Quit => {
                self.renderer.info("Thanks for playing. Goodbye!");
                return true;
            }
            Command::Help => {
                self.renderer.help();
            }
            Command::NewGame => {
                // The command-line seed applies to the first deal only.
                self.session = match self.first_seed.take() {
                    Some(seed) => Session::deal_seeded(seed),
                    None => Session::deal_random(),
                };
                self.renderer
                    .info("A new game has been dealt. Your turn! Match the suit or rank.");
            }
            Command::Play { idx } => {
                if idx >= self.session.player_hand.len() {
                    self.renderer.error("Hand index out of range.");
                    return false;
                }
                let card = self.session.player_hand[idx];
                match self.session.play(Seat::Player, card) {
                    Ok(()) => {
                        if self.session.phase == Phase::AwaitingSuitChoice {
                            self.renderer
                                .info("You played an 8 – choose a new suit (suit h|d|c|s).");
                        }
                    }
                    Err(e) => self.renderer.error(&e.to_string()),
                }
            }
            Command::Draw => match self.session.draw(Seat::Player) {
                Ok(Some(card)) => {
                    self.renderer
                        .info(&format!("You drew {}. AI's turn.", card.label()));
                }
                Ok(None) => self.renderer.info("Deck empty! Skipping turn."),
                Err(e) => self.renderer.error(&e.to_string()),
            },
            Command::ChooseSuit { suit } => {
                match self.session.choose_suit(Seat::Player, suit) {
                    Ok(()) => {
                        self.renderer
                            .info(&format!("Suit changed to {}. AI's turn.", suit.name()));
                    }
                    Err(e) => self.renderer.error(&e.to_string()),
                }
            }
        }
        false
    }

    /// Run the AI's single action: think, then decide and apply.
    fn ai_turn(&mut self) {
        let Some(decision) = ai::decide(&self.session) else {
            return;
        };

        self.renderer.info("AI is thinking...");
        thread::sleep(self.think_delay);

        let pile_was_empty = self.session.draw_count() == 0;
        match ai::apply(&mut self.session, decision) {
            Ok(()) => match decision.action {
                AiMove::Play { card, chosen_suit } => match chosen_suit {
                    Some(suit) => self
                        .renderer
                        .info(&format!("AI played an 8 and chose {}.", suit.name())),
                    None => self
                        .renderer
                        .info(&format!("AI played {}.", card.label())),
                },
                AiMove::Draw => {
                    if pile_was_empty {
                        self.renderer
                            .info("AI couldn't move and deck is empty. Your turn.");
                    } else {
                        self.renderer.info("AI drew a card and ended its turn.");
                    }
                }
            },
            // A stale decision belongs to a replaced session; drop it.
            Err(crate::session::ActionError::StaleDecision) => {}
            Err(e) => self.renderer.error(&e.to_string()),
        }
    }
}
