use std::io;
use std::process;

use clap::Parser;
use glyph_snake::config::{
    GameConfig, DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS, DEFAULT_SNAKE_LEN,
};
use glyph_snake::game::{GameState, GameStatus, LossReason};
use glyph_snake::input::{self, Command};
use glyph_snake::renderer;
use glyph_snake::terminal::{install_panic_hook, AppTerminal, TerminalSession};
use glyph_snake::theme::THEME_CLASSIC;

#[derive(Debug, Parser)]
#[command(name = "glyph-snake", about = "Turn-based terminal Snake", version)]
struct Cli {
    /// Number of grid rows.
    #[arg(short = 'm', long = "rows", default_value_t = DEFAULT_GRID_ROWS)]
    rows: u16,

    /// Number of grid columns.
    #[arg(short = 'n', long = "cols", default_value_t = DEFAULT_GRID_COLS)]
    cols: u16,

    /// Initial snake length.
    #[arg(short = 'l', long = "snake-len", default_value_t = DEFAULT_SNAKE_LEN)]
    snake_len: u16,
}

/// How the session ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Ending {
    Quit,
    Won,
    Lost,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let config = match GameConfig::new(cli.rows, cli.cols, cli.snake_len) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("glyph-snake: {error}");
            process::exit(2);
        }
    };

    install_panic_hook();

    let mut state = GameState::new(config);
    let ending = {
        let mut session = TerminalSession::enter()?;
        run(session.terminal_mut(), &mut state)?
        // Dropping the session restores the normal screen.
    };

    print!("{}", renderer::final_screen(&state));
    println!("{}", ending_message(ending, &state));
    Ok(())
}

/// The turn loop: draw, block for one keystroke, step.
///
/// Unbound keys redraw and wait again without consuming a turn.
fn run(terminal: &mut AppTerminal, state: &mut GameState) -> io::Result<Ending> {
    loop {
        terminal.draw(|frame| renderer::render(frame, state, &THEME_CLASSIC))?;

        let Some(command) = input::next_command()? else {
            continue;
        };

        match command {
            Command::Quit => return Ok(Ending::Quit),
            Command::Move(direction) => {
                let outcome = state
                    .step(direction)
                    .expect("the loop returns before a finished game is stepped");

                if outcome.done {
                    return Ok(match state.status() {
                        GameStatus::Won => Ending::Won,
                        _ => Ending::Lost,
                    });
                }
            }
        }
    }
}

fn ending_message(ending: Ending, state: &GameState) -> &'static str {
    match ending {
        Ending::Quit => "Thanks for playing!",
        Ending::Won => "You win!",
        Ending::Lost => match state.loss_reason() {
            Some(LossReason::OutOfBounds) => "You lose! (ran into the wall)",
            Some(LossReason::SelfCollision) => "You lose! (ran into yourself)",
            None => "You lose!",
        },
    }
}
