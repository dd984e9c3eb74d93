use crazy8s_rs::game::Game;
use crazy8s_rs::renderer::CliRenderer;

fn main() {
    println!(
        r#"
┌─────────────────────────────────────────┐
│   Crazy Eights vs. Computer (CLI)       │
│   Type 'new' to deal, 'help' for help.  │
└─────────────────────────────────────────┘
"#
    );

    // Parse optional seed from command-line arguments for reproducible games.
    let seed: Option<u64> = std::env::args().nth(1).and_then(|s| s.parse().ok());

    let renderer = CliRenderer::new();
    let mut game = Game::init(seed, renderer);
    game.run();
}
