use crate::ai::MoveStrategy;
use crate::board::{Board, PlayerId};
use rand::RngCore;

/// Always takes the lowest-indexed empty cell. Deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct EasyStrategy;

impl MoveStrategy for EasyStrategy {
    fn select_cell(&self, board: &Board, _me: PlayerId, _rng: &mut dyn RngCore) -> Option<usize> {
        board.first_empty()
    }

    fn name(&self) -> &str {
        "easy"
    }
}
