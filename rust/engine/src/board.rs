use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of cells on the fixed 3x3 board.
pub const BOARD_SIZE: usize = 9;

/// Index of the center cell.
pub const CENTER_CELL: usize = 4;

/// The 8 lines that win the game when fully owned by one player.
///
/// Cells are indexed in row-major order:
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Identity of one of the two seats.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    /// Player 1, always moves first
    One,
    /// Player 2, the computer seat in single-player games
    Two,
}

impl PlayerId {
    /// Numeric identity (1 or 2).
    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    /// The other player of the two-player roster.
    pub fn other(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Cell state produced when this player claims a cell.
    pub fn cell_state(self) -> CellState {
        match self {
            PlayerId::One => CellState::OwnedByPlayer1,
            PlayerId::Two => CellState::OwnedByPlayer2,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.number())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Empty,
    OwnedByPlayer1,
    OwnedByPlayer2,
}

/// A single board position.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
pub struct Cell {
    state: CellState,
    owner: Option<PlayerId>,
}

impl Cell {
    pub fn state(&self) -> CellState {
        self.state
    }

    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    pub fn is_empty(&self) -> bool {
        self.state == CellState::Empty
    }

    /// Moves the cell from `Empty` to owned by `player`.
    ///
    /// Returns `false` without touching the cell if it is already owned;
    /// an owned cell never changes hands or reverts.
    pub fn claim(&mut self, player: PlayerId) -> bool {
        if !self.is_empty() {
            return false;
        }
        self.state = player.cell_state();
        self.owner = Some(player);
        true
    }
}

/// The 9-cell board in row-major order.
#[derive(Debug, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    /// Returns the cell at `index`, or `None` outside `0..9`.
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.cell(index).is_some_and(Cell::is_empty)
    }

    /// Claims `index` for `player`. Returns `false` for out-of-range or occupied cells.
    pub fn claim(&mut self, index: usize, player: PlayerId) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) => cell.claim(player),
            None => false,
        }
    }

    /// Indices of all empty cells in ascending order.
    pub fn empty_cells(&self) -> Vec<usize> {
        (0..BOARD_SIZE).filter(|&i| self.is_empty_at(i)).collect()
    }

    /// Lowest-indexed empty cell.
    pub fn first_empty(&self) -> Option<usize> {
        (0..BOARD_SIZE).find(|&i| self.is_empty_at(i))
    }

    /// Number of cells of `line` owned by `player`.
    pub fn count_owned(&self, line: &[usize; 3], player: PlayerId) -> usize {
        line.iter()
            .filter(|&&i| self.cells[i].owner == Some(player))
            .count()
    }

    /// Empty cells of `line`, in the line's own order.
    pub fn empty_in_line(&self, line: &[usize; 3]) -> Vec<usize> {
        line.iter()
            .copied()
            .filter(|&i| self.is_empty_at(i))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_all_empty() {
        let b = Board::new();
        assert_eq!(b.empty_cells(), (0..9).collect::<Vec<_>>());
        assert_eq!(b.first_empty(), Some(0));
        assert!(!b.is_full());
    }

    #[test]
    fn claim_is_one_way() {
        let mut b = Board::new();
        assert!(b.claim(4, PlayerId::One));
        assert!(!b.claim(4, PlayerId::Two));
        let cell = b.cell(4).unwrap();
        assert_eq!(cell.state(), CellState::OwnedByPlayer1);
        assert_eq!(cell.owner(), Some(PlayerId::One));
    }

    #[test]
    fn claim_out_of_range_is_refused() {
        let mut b = Board::new();
        assert!(!b.claim(9, PlayerId::One));
        assert!(b.cell(9).is_none());
        assert_eq!(b, Board::new());
    }

    #[test]
    fn count_owned_only_counts_that_player() {
        let mut b = Board::new();
        b.claim(0, PlayerId::One);
        b.claim(1, PlayerId::Two);
        b.claim(2, PlayerId::One);
        assert_eq!(b.count_owned(&[0, 1, 2], PlayerId::One), 2);
        assert_eq!(b.count_owned(&[0, 1, 2], PlayerId::Two), 1);
        assert!(b.empty_in_line(&[0, 1, 2]).is_empty());
    }

    #[test]
    fn other_player_is_symmetric() {
        assert_eq!(PlayerId::One.other(), PlayerId::Two);
        assert_eq!(PlayerId::Two.other(), PlayerId::One);
    }
}
