use crate::board::PlayerId;
use thiserror::Error;

/// Caller or state-machine misuse of the engine.
///
/// Rejected moves (bad index, occupied cell) are not errors; they come back
/// as a `TurnOutcome` with `accepted == false`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Cannot find the player whose turn it is")]
    NoCurrentPlayer,
    #[error("Cannot take a computer turn for {player}, who is not a computer")]
    NotComputerTurn { player: PlayerId },
    #[error("Computer strategy found no empty cell on an unfinished board")]
    NoMoveAvailable,
}
