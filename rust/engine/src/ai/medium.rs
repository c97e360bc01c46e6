//! One-ply blocking against the opponent.
//!
//! Lines are bucketed by how many of their cells the opponent holds. Only lines
//! that still have an empty cell are candidates, since a full line cannot be
//! blocked.
//!
//! 1. A line with two opponent cells is chosen uniformly at random and its
//!    first empty cell (in line order) is taken.
//! 2. Otherwise a line with at least one opponent cell is chosen uniformly at
//!    random, then one of its empty cells uniformly at random.
//! 3. Otherwise the first empty cell on the board.

use crate::ai::MoveStrategy;
use crate::board::{Board, PlayerId, WINNING_LINES};
use rand::seq::IndexedRandom;
use rand::RngCore;

#[derive(Debug, Clone, Copy, Default)]
pub struct MediumStrategy;

impl MoveStrategy for MediumStrategy {
    fn select_cell(&self, board: &Board, me: PlayerId, rng: &mut dyn RngCore) -> Option<usize> {
        let opponent = me.other();
        let open: Vec<(&[usize; 3], usize)> = WINNING_LINES
            .iter()
            .filter(|line| !board.empty_in_line(line).is_empty())
            .map(|line| (line, board.count_owned(line, opponent)))
            .collect();

        let threats: Vec<&[usize; 3]> = open
            .iter()
            .filter(|(_, taken)| *taken >= 2)
            .map(|(line, _)| *line)
            .collect();
        if let Some(line) = threats.choose(&mut *rng) {
            tracing::trace!(?line, "medium: blocking imminent win");
            return board.empty_in_line(line).first().copied();
        }

        let contested: Vec<&[usize; 3]> = open
            .iter()
            .filter(|(_, taken)| *taken >= 1)
            .map(|(line, _)| *line)
            .collect();
        if let Some(line) = contested.choose(&mut *rng) {
            tracing::trace!(?line, "medium: contesting opponent line");
            return board.empty_in_line(line).choose(&mut *rng).copied();
        }

        board.first_empty()
    }

    fn name(&self) -> &str {
        "medium"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn falls_back_to_first_empty_without_opponent_marks() {
        let mut board = Board::new();
        board.claim(0, PlayerId::Two);
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        assert_eq!(
            MediumStrategy.select_cell(&board, PlayerId::Two, &mut rng),
            Some(1)
        );
    }

    #[test]
    fn ignores_lines_that_are_already_blocked() {
        // Opponent holds 0 and 1 but 2 is ours; the only live threat is 0-3-6.
        let mut board = Board::new();
        for cell in [0, 1, 3] {
            board.claim(cell, PlayerId::One);
        }
        board.claim(2, PlayerId::Two);
        board.claim(8, PlayerId::Two);
        for seed in 0..32 {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            let pick = MediumStrategy.select_cell(&board, PlayerId::Two, &mut rng);
            assert_eq!(pick, Some(6), "seed {}", seed);
        }
    }
}
