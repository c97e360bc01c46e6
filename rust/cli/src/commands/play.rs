//! # Play Command
//!
//! Interactive game on the terminal.
//!
//! - **single**: the user is player 1 (X), the computer is player 2 (O)
//! - **multi**: two humans take turns at the same prompt
//!
//! Empty cells show their index; the user types that index to move, or `q`
//! to abandon the game. Rejected moves (occupied or out-of-range cells) are
//! reported and the same player is asked again.

use crate::cli::PlayArgs;
use crate::config;
use crate::error::CliError;
use crate::formatters::{format_board, format_outcome, format_player, mark};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_cell_input};
use std::io::{BufRead, Write};
use tictactoe_engine::engine::{Engine, GameMode, TurnOutcome};

/// Handle the play command: one interactive game.
///
/// Settings come from the resolved configuration with any flags in `args`
/// applied on top.
///
/// # Returns
///
/// * `Ok(())` when the game finishes or the user quits
/// * `Err(CliError)` on configuration, engine or I/O errors
pub fn handle_play_command(
    args: PlayArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = match config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(e.to_string()));
        }
    };
    let difficulty_given = args.difficulty.is_some();
    let cfg = args.apply(cfg);
    if difficulty_given && cfg.mode == GameMode::Multiplayer {
        ui::display_warning(err, "--difficulty has no effect in multiplayer games")?;
    }
    let mut eng = Engine::new(cfg.engine_settings());
    play_game(&mut eng, out, err, stdin)
}

/// Drive `eng` until the game ends or input runs out.
fn play_game(
    eng: &mut Engine,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    writeln!(
        out,
        "play: mode={} difficulty={} seed={}",
        eng.mode().as_str(),
        eng.difficulty(),
        eng.seed()
    )?;
    for player in eng.players() {
        writeln!(out, "{}", format_player(player))?;
    }

    let mut last = TurnOutcome::rejected();
    while !eng.is_game_over() {
        writeln!(out, "\n{}", format_board(eng.board()))?;
        let current = eng.current_player()?;
        let (id, is_computer) = (current.id(), current.is_computer());

        if is_computer {
            last = eng.apply_computer_move()?;
            if let Some(m) = eng.history().last() {
                writeln!(out, "Computer ({}) plays {}", mark(id), m.cell)?;
            }
            continue;
        }

        write!(out, "{} {} to move (0-8, q to quit): ", mark(id), id)?;
        out.flush()?;
        let Some(line) = read_stdin_line(stdin) else {
            writeln!(out)?;
            break;
        };
        match parse_cell_input(&line) {
            ParseResult::Cell(cell) => {
                let outcome = eng.apply_move(cell)?;
                if !outcome.accepted {
                    ui::write_error(err, &format!("Cell {} is not available", cell))?;
                    continue;
                }
                last = outcome;
            }
            ParseResult::Quit => break,
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }

    writeln!(out, "\n{}", format_board(eng.board()))?;
    if last.game_over {
        writeln!(out, "{}", format_outcome(&last))?;
        if let Some(line) = eng.winning_line() {
            writeln!(out, "Winning line: {:?}", line)?;
        }
    } else {
        writeln!(out, "Game abandoned after {} moves.", eng.history().len())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tictactoe_engine::ai::Difficulty;
    use tictactoe_engine::board::PlayerId;
    use tictactoe_engine::engine::{EngineSettings, GameStatus};

    fn run_game(settings: EngineSettings, input: &str) -> (Engine, String, String) {
        let mut eng = Engine::new(settings);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input.as_bytes().to_vec());
        play_game(&mut eng, &mut out, &mut err, &mut stdin).expect("game runs");
        (
            eng,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_multiplayer_game_to_win() {
        let (eng, out, err) = run_game(
            EngineSettings {
                mode: GameMode::Multiplayer,
                ..EngineSettings::default()
            },
            "0\n3\n1\n4\n2\n",
        );
        assert_eq!(eng.status(), GameStatus::Won(PlayerId::One));
        assert!(out.contains("player 1 (X) wins!"), "{}", out);
        assert!(out.contains("Winning line: [0, 1, 2]"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_rejected_and_invalid_input_reprompts() {
        let (eng, out, err) = run_game(
            EngineSettings {
                mode: GameMode::Multiplayer,
                ..EngineSettings::default()
            },
            "4\n4\n9\nabc\n0\nq\n",
        );
        assert_eq!(eng.history().len(), 2);
        assert!(err.contains("Cell 4 is not available"));
        assert!(err.contains("Cell 9 is not available"));
        assert!(err.contains("Unrecognized input"));
        assert!(out.contains("Game abandoned after 2 moves."));
    }

    #[test]
    fn test_single_player_against_easy_computer() {
        let (eng, out, _) = run_game(
            EngineSettings {
                difficulty: Difficulty::Easy,
                seed: Some(1),
                ..EngineSettings::default()
            },
            "4\n8\n2\n6\n",
        );
        assert_eq!(eng.status(), GameStatus::Won(PlayerId::One));
        assert!(out.contains("Computer (O) plays 0"));
        assert!(out.contains("Computer (O) plays 1"));
        assert!(out.contains("Computer (O) plays 3"));
    }

    #[test]
    fn test_eof_abandons_game() {
        let (eng, out, _) = run_game(EngineSettings::default(), "");
        assert_eq!(eng.status(), GameStatus::InProgress);
        assert!(out.contains("Game abandoned after 0 moves."));
    }
}
