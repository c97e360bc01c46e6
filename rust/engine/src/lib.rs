//! # tictactoe-engine: Tic-Tac-Toe Game Engine Core
//!
//! A turn-based engine for the 3x3 game, for human-vs-human or
//! human-vs-computer play with three computer strengths. The engine owns the
//! board, the two players and turn order, detects wins and draws, and picks
//! computer moves. Rendering and input are left to the caller.
//!
//! ## Core Modules
//!
//! - [`board`] - Cells, the 9-cell board and the fixed winning lines
//! - [`player`] - Player records and roles
//! - [`engine`] - Game orchestration: moves, turn order, outcomes
//! - [`rules`] - Win and draw detection
//! - [`ai`] - Easy, Medium and Hard computer strategies
//! - [`logger`] - GameRecord serialization to JSONL
//! - [`errors`] - Fatal engine errors
//!
//! ## Quick Start
//!
//! ```rust
//! use tictactoe_engine::ai::Difficulty;
//! use tictactoe_engine::engine::{Engine, EngineSettings, GameMode};
//! use tictactoe_engine::player::Role;
//!
//! let mut engine = Engine::new(EngineSettings {
//!     mode: GameMode::Singleplayer,
//!     difficulty: Difficulty::Hard,
//!     seed: Some(42),
//!     ..EngineSettings::default()
//! });
//!
//! // Human takes a corner, the computer answers
//! let outcome = engine.apply_move(0).unwrap();
//! assert!(outcome.accepted);
//! assert_eq!(engine.current_player().unwrap().role(), Role::Computer);
//!
//! let outcome = engine.apply_computer_move().unwrap();
//! assert!(outcome.accepted);
//! // Hard grabs the free center
//! assert!(!engine.board().is_empty_at(4));
//! ```
//!
//! ## Rejected Moves vs Errors
//!
//! An out-of-range or occupied cell is ordinary bad input: the returned
//! [`engine::TurnOutcome`] has `accepted == false` and nothing changes.
//! [`errors::EngineError`] is reserved for caller misuse, such as asking for a
//! computer move while a human holds the turn.
//!
//! ```rust
//! use tictactoe_engine::engine::{Engine, EngineSettings, GameMode};
//! use tictactoe_engine::errors::EngineError;
//!
//! let mut engine = Engine::new(EngineSettings {
//!     mode: GameMode::Multiplayer,
//!     ..EngineSettings::default()
//! });
//! assert!(!engine.apply_move(42).unwrap().accepted);
//! assert!(matches!(
//!     engine.apply_computer_move(),
//!     Err(EngineError::NotComputerTurn { .. })
//! ));
//! ```

pub mod ai;
pub mod board;
pub mod engine;
pub mod errors;
pub mod logger;
pub mod player;
pub mod rules;
