use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use sapper_core::{BoardConfig, Game, GameState, MineRatio, Outcome, RandomBoardGenerator};
use std::io::{self, BufRead, Write};

use prompt::Prompt;
use render::render;

mod prompt;
mod render;

/// Flag every mine without stepping on one.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Board width, 1 to 255
    width: usize,

    /// Board height, 1 to 255
    height: usize,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let config = BoardConfig::new(args.width, args.height, MineRatio::DEFAULT)
        .context("Please pass valid width and height (max 255 each), e.g. `sapper 10 10`")?;
    let generator = match args.seed {
        Some(seed) => RandomBoardGenerator::new(seed),
        None => RandomBoardGenerator::from_entropy(),
    };
    log::debug!("seed: {}", generator.seed());

    println!("Setting up the game...");
    let game = Game::generate(config, generator);

    let state = run(game, io::stdin().lock(), io::stdout().lock())?;
    log::debug!("Finished in state {:?}", state);
    Ok(())
}

/// Drives one session until the player wins, loses, quits, or input runs out.
fn run(mut game: Game, input: impl BufRead, mut out: impl Write) -> Result<GameState> {
    let mut prompt = Prompt::new(input);

    loop {
        render(game.board(), &mut out).context("Could not draw the board")?;
        let action = prompt
            .next_action(game.board().size(), &mut out)
            .context("Could not read the next move")?;

        match game.apply(action)? {
            Outcome::Continue => writeln!(out, "OK!")?,
            Outcome::Loss => {
                render(game.board(), &mut out).context("Could not draw the board")?;
                writeln!(out, "BOOM! Game over.")?;
                break;
            }
            Outcome::Win => {
                writeln!(out, "CONGRATS! You win.")?;
                break;
            }
            Outcome::Quit => break,
        }
    }

    writeln!(out, "Ending the game...\n")?;
    Ok(game.state())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sapper_core::Board;
    use std::io::Cursor;

    fn play(mines: &[(u8, u8)], input: &str) -> (GameState, String) {
        let game = Game::new(Board::from_mine_coords((3, 3), mines).unwrap());
        let mut out = Vec::new();
        let state = run(game, Cursor::new(input.as_bytes()), &mut out).unwrap();
        (state, String::from_utf8(out).unwrap())
    }

    #[test]
    fn stepping_on_a_mine_shows_the_board() {
        let (state, out) = play(&[(0, 0), (2, 2)], "a\n0\n0\n");

        assert_eq!(state, GameState::Lost);
        assert!(out.contains("＠＇＇\n＇＇＇\n＇＇＠\n"));
        assert!(out.ends_with("BOOM! Game over.\nEnding the game...\n\n"));
    }

    #[test]
    fn flagging_the_only_mine_wins() {
        let (state, out) = play(&[(1, 1)], "f\n1\n1\n");

        assert_eq!(state, GameState::Won);
        assert!(out.contains("CONGRATS! You win."));
    }

    #[test]
    fn safe_move_then_quit() {
        let (state, out) = play(&[(2, 2)], "a\n0\n0\nq\n");

        assert_eq!(state, GameState::Quit);
        assert!(out.contains("OK!"));
        assert!(out.contains("０００\n０１１\n０１＇\n"));
    }

    #[test]
    fn empty_input_quits_cleanly() {
        let (state, out) = play(&[(0, 1)], "");

        assert_eq!(state, GameState::Quit);
        assert!(out.starts_with("＇＇＇\n"));
    }
}
