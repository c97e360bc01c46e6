//! Computer opponent strategies.
//!
//! Each [`Difficulty`] maps to one [`MoveStrategy`]:
//!
//! - [`easy::EasyStrategy`] - first empty cell, no look-ahead
//! - [`medium::MediumStrategy`] - blocks the opponent's lines, random tie-break
//! - [`hard::HardStrategy`] - completes its own line, takes the center, then blocks
//!
//! Strategies only read the board; the engine applies the chosen cell through
//! the same path as a human move.
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//! use tictactoe_engine::ai::{create_strategy, Difficulty};
//! use tictactoe_engine::board::{Board, PlayerId};
//!
//! let strategy = create_strategy(Difficulty::Easy);
//! let mut rng = ChaCha20Rng::seed_from_u64(7);
//! let board = Board::new();
//! assert_eq!(strategy.select_cell(&board, PlayerId::Two, &mut rng), Some(0));
//! ```

use crate::board::{Board, PlayerId};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod easy;
pub mod hard;
pub mod medium;

/// Computer opponent strength, used only in single-player games.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("Unknown difficulty: {}", other)),
        }
    }
}

/// Picks the next cell for a computer-controlled player.
pub trait MoveStrategy: Send + Sync {
    /// Choose a cell for `me` on `board`.
    ///
    /// Only empty cells are ever returned. `None` means the board has no
    /// empty cell left.
    fn select_cell(&self, board: &Board, me: PlayerId, rng: &mut dyn RngCore) -> Option<usize>;

    fn name(&self) -> &str;
}

/// Factory for the strategy that plays at `difficulty`.
///
/// ```rust
/// use tictactoe_engine::ai::{create_strategy, Difficulty};
///
/// assert_eq!(create_strategy(Difficulty::Hard).name(), "hard");
/// ```
pub fn create_strategy(difficulty: Difficulty) -> Box<dyn MoveStrategy> {
    match difficulty {
        Difficulty::Easy => Box::new(easy::EasyStrategy),
        Difficulty::Medium => Box::new(medium::MediumStrategy),
        Difficulty::Hard => Box::new(hard::HardStrategy),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_parses_case_insensitively() {
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(" easy ".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert!("impossible".parse::<Difficulty>().is_err());
    }

    #[test]
    fn factory_matches_difficulty_name() {
        for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(create_strategy(d).name(), d.as_str());
        }
    }
}
