//! Simulation command handler.
//!
//! Plays many single-player games without a terminal. Player 1 is driven by
//! a "challenger" strategy whose picks go through the human-move path
//! (`Engine::apply_move`); player 2 is the engine's own computer at the
//! configured difficulty. Prints win/draw tallies and optionally appends one
//! JSON record per game.
//!
//! # Examples
//!
//! ```no_run
//! use tictactoe_cli::cli::{Level, SimArgs};
//! use tictactoe_cli::commands::handle_sim_command;
//! use std::io;
//!
//! let args = SimArgs {
//!     games: 500,
//!     difficulty: Some(Level::Hard),
//!     challenger: Level::Medium,
//!     seed: Some(42),
//!     output: Some("data/games.jsonl".to_string()),
//! };
//! handle_sim_command(args, &mut io::stdout(), &mut io::stderr()).unwrap();
//! ```

use crate::cli::SimArgs;
use crate::config;
use crate::error::CliError;
use crate::ui;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::io::Write;
use tictactoe_engine::ai::{MoveStrategy, create_strategy};
use tictactoe_engine::board::PlayerId;
use tictactoe_engine::engine::{Engine, EngineSettings, GameMode, GameStatus};
use tictactoe_engine::errors::EngineError;
use tictactoe_engine::logger::{GameLogger, GameRecord};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Tally {
    challenger_wins: u32,
    computer_wins: u32,
    draws: u32,
}

/// Handle the sim command.
///
/// # Errors
///
/// - `CliError::InvalidInput` if `games` is zero
/// - `CliError::Config` if configuration loading fails
/// - `CliError::Io` if the output file cannot be written
pub fn handle_sim_command(
    args: SimArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if args.games == 0 {
        ui::write_error(err, "games must be >= 1")?;
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }
    let cfg = match config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(e.to_string()));
        }
    };

    let difficulty = args.difficulty.map(Into::into).unwrap_or(cfg.difficulty);
    let base_seed = args.seed.or(cfg.seed).unwrap_or_else(rand::random);
    let challenger = create_strategy(args.challenger.into());
    let mut challenger_rng = ChaCha20Rng::seed_from_u64(base_seed);

    let mut logger = match args.output.as_deref().map(GameLogger::create).transpose() {
        Ok(logger) => logger,
        Err(e) => {
            ui::write_error(err, &format!("Failed to open output file: {}", e))?;
            return Err(CliError::Io(e));
        }
    };

    writeln!(
        out,
        "sim: games={} difficulty={} challenger={} seed={}",
        args.games,
        difficulty,
        challenger.name(),
        base_seed
    )?;

    let mut tally = Tally::default();
    for i in 0..args.games {
        let mut eng = Engine::new(EngineSettings {
            mode: GameMode::Singleplayer,
            player1_avatar: cfg.player1_avatar.clone(),
            player2_avatar: cfg.player2_avatar.clone(),
            difficulty,
            seed: Some(base_seed.wrapping_add(u64::from(i))),
        });
        play_to_completion(&mut eng, challenger.as_ref(), &mut challenger_rng)?;

        match eng.status() {
            GameStatus::Won(PlayerId::One) => tally.challenger_wins += 1,
            GameStatus::Won(PlayerId::Two) => tally.computer_wins += 1,
            GameStatus::Draw => tally.draws += 1,
            GameStatus::InProgress => {}
        }
        if let Some(logger) = logger.as_mut() {
            let id = logger.next_id();
            logger.write(&GameRecord::from_engine(id, &eng))?;
        }
        tracing::debug!(game = i, status = ?eng.status(), "sim game finished");
    }

    writeln!(out, "Challenger wins: {}", tally.challenger_wins)?;
    writeln!(out, "Computer wins: {}", tally.computer_wins)?;
    writeln!(out, "Draws: {}", tally.draws)?;
    if let Some(path) = &args.output {
        writeln!(out, "Records appended to {}", path)?;
    }
    Ok(())
}

fn play_to_completion(
    eng: &mut Engine,
    challenger: &dyn MoveStrategy,
    rng: &mut ChaCha20Rng,
) -> Result<(), CliError> {
    while !eng.is_game_over() {
        let current = eng.current_player()?;
        let (id, is_computer) = (current.id(), current.is_computer());
        let outcome = if is_computer {
            eng.apply_computer_move()?
        } else {
            let cell = challenger
                .select_cell(eng.board(), id, rng)
                .ok_or(EngineError::NoMoveAvailable)?;
            eng.apply_move(cell)?
        };
        if !outcome.accepted {
            return Err(CliError::InvalidInput(format!(
                "{} move by {} was rejected",
                challenger.name(),
                id
            )));
        }
    }
    Ok(())
}
