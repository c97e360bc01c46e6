use crate::board::{Board, PlayerId, WINNING_LINES};

/// Returns true when any winning line is fully owned by `player`.
///
/// # Examples
///
/// ```
/// use tictactoe_engine::board::{Board, PlayerId};
/// use tictactoe_engine::rules::game_is_won;
///
/// let mut board = Board::new();
/// for cell in [2, 4, 6] {
///     board.claim(cell, PlayerId::Two);
/// }
/// assert!(game_is_won(&board, PlayerId::Two));
/// assert!(!game_is_won(&board, PlayerId::One));
/// ```
pub fn game_is_won(board: &Board, player: PlayerId) -> bool {
    winning_line(board, player).is_some()
}

/// Returns the first winning line (in table order) fully owned by `player`.
pub fn winning_line(board: &Board, player: PlayerId) -> Option<[usize; 3]> {
    WINNING_LINES
        .iter()
        .copied()
        .find(|line| board.count_owned(line, player) == 3)
}

/// Returns true when no cell is empty.
///
/// Callers check [`game_is_won`] first: a full board that also holds a
/// winning line is a win, not a draw.
pub fn game_is_draw(board: &Board) -> bool {
    board.is_full()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_is_neither_won_nor_drawn() {
        let b = Board::new();
        assert!(!game_is_won(&b, PlayerId::One));
        assert!(!game_is_won(&b, PlayerId::Two));
        assert!(!game_is_draw(&b));
    }

    #[test]
    fn mixed_line_does_not_win() {
        let mut b = Board::new();
        b.claim(0, PlayerId::One);
        b.claim(1, PlayerId::One);
        b.claim(2, PlayerId::Two);
        assert!(!game_is_won(&b, PlayerId::One));
        assert_eq!(winning_line(&b, PlayerId::One), None);
    }
}
