use crate::ai::medium::MediumStrategy;
use crate::ai::MoveStrategy;
use crate::board::{Board, PlayerId, CENTER_CELL, WINNING_LINES};
use rand::RngCore;

/// Win-seeking strategy with center preference.
///
/// Completes the first line (in table order) holding two of its own marks and
/// an empty third cell, otherwise takes the center, otherwise plays like
/// [`MediumStrategy`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HardStrategy;

impl HardStrategy {
    fn winning_cell(board: &Board, me: PlayerId) -> Option<usize> {
        WINNING_LINES
            .iter()
            .filter(|line| board.count_owned(line, me) == 2)
            .find_map(|line| board.empty_in_line(line).first().copied())
    }
}

impl MoveStrategy for HardStrategy {
    fn select_cell(&self, board: &Board, me: PlayerId, rng: &mut dyn RngCore) -> Option<usize> {
        if let Some(cell) = Self::winning_cell(board, me) {
            tracing::trace!(cell, "hard: completing line");
            return Some(cell);
        }
        if board.is_empty_at(CENTER_CELL) {
            return Some(CENTER_CELL);
        }
        MediumStrategy.select_cell(board, me, rng)
    }

    fn name(&self) -> &str {
        "hard"
    }
}
