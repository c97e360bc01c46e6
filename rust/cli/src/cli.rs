//! Command-line argument definitions.

use crate::config::Config;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tictactoe_engine::ai::Difficulty;
use tictactoe_engine::engine::GameMode;

#[derive(Parser, Debug)]
#[command(
    name = "tictactoe",
    version,
    about = "Play tic-tac-toe against a friend or the computer"
)]
pub struct TictactoeCli {
    /// Log engine decisions to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play one interactive game
    Play(PlayArgs),
    /// Pit a strategy (as player 1) against the computer over many games
    Sim(SimArgs),
    /// Display the resolved configuration and where each value came from
    Cfg,
}

#[derive(Args, Debug, Clone, Default)]
pub struct PlayArgs {
    /// single: you against the computer; multi: two humans at one terminal
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,
    /// Computer strength in single-player games
    #[arg(long, value_enum)]
    pub difficulty: Option<Level>,
    /// Seed for the computer's tie-breaks
    #[arg(long)]
    pub seed: Option<u64>,
    /// Avatar reference for player 1
    #[arg(long)]
    pub avatar1: Option<String>,
    /// Avatar reference for player 2
    #[arg(long)]
    pub avatar2: Option<String>,
}

impl PlayArgs {
    /// Overlay the flags that were given on top of `cfg`.
    pub fn apply(self, mut cfg: Config) -> Config {
        if let Some(mode) = self.mode {
            cfg.mode = mode.into();
        }
        if let Some(level) = self.difficulty {
            cfg.difficulty = level.into();
        }
        if self.seed.is_some() {
            cfg.seed = self.seed;
        }
        if let Some(avatar) = self.avatar1 {
            cfg.player1_avatar = avatar;
        }
        if let Some(avatar) = self.avatar2 {
            cfg.player2_avatar = avatar;
        }
        cfg
    }
}

#[derive(Args, Debug, Clone)]
pub struct SimArgs {
    /// Number of games to play
    #[arg(long, default_value_t = 100)]
    pub games: u32,
    /// Computer strength (player 2)
    #[arg(long, value_enum)]
    pub difficulty: Option<Level>,
    /// Strategy driving player 1 through the human-move path
    #[arg(long, value_enum, default_value_t = Level::Easy)]
    pub challenger: Level,
    /// Base seed; game i uses seed + i
    #[arg(long)]
    pub seed: Option<u64>,
    /// Append one JSON record per game to this file
    #[arg(long)]
    pub output: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Single,
    Multi,
}

impl From<Mode> for GameMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Single => GameMode::Singleplayer,
            Mode::Multi => GameMode::Multiplayer,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Level {
    Easy,
    Medium,
    Hard,
}

impl From<Level> for Difficulty {
    fn from(level: Level) -> Self {
        match level {
            Level::Easy => Difficulty::Easy,
            Level::Medium => Difficulty::Medium,
            Level::Hard => Difficulty::Hard,
        }
    }
}
