//! Board and outcome formatters for terminal display.
//!
//! Player 1 is drawn as `X`, player 2 as `O`; empty cells show their index so
//! the user knows what to type.
//!
//! ## Example
//!
//! ```rust
//! use tictactoe_engine::board::{Board, PlayerId};
//! use tictactoe_cli::formatters::format_board;
//!
//! let mut board = Board::new();
//! board.claim(4, PlayerId::One);
//! let text = format_board(&board);
//! assert!(text.contains(" 3 | X | 5"));
//! ```

use tictactoe_engine::board::{Board, PlayerId, BOARD_SIZE};
use tictactoe_engine::engine::TurnOutcome;
use tictactoe_engine::player::{Player, Role};

pub fn mark(player: PlayerId) -> char {
    match player {
        PlayerId::One => 'X',
        PlayerId::Two => 'O',
    }
}

/// Render the board as three rows separated by rules.
pub fn format_board(board: &Board) -> String {
    let cells: Vec<String> = (0..BOARD_SIZE)
        .map(|i| match board.cell(i).and_then(|c| c.owner()) {
            Some(owner) => mark(owner).to_string(),
            None => i.to_string(),
        })
        .collect();
    cells
        .chunks(3)
        .map(|row| format!(" {} | {} | {}", row[0], row[1], row[2]))
        .collect::<Vec<_>>()
        .join("\n---+---+---\n")
}

/// One-line description of a player: mark, id, avatar and role.
pub fn format_player(player: &Player) -> String {
    let role = match player.role() {
        Role::Human => "human",
        Role::Computer => "computer",
    };
    format!(
        "{} {} [{}] ({})",
        mark(player.id()),
        player.id(),
        player.avatar(),
        role
    )
}

pub fn format_outcome(outcome: &TurnOutcome) -> String {
    match (outcome.accepted, outcome.game_over, outcome.winner) {
        (false, _, _) => "Move rejected".to_string(),
        (true, true, Some(winner)) => format!("{} ({}) wins!", winner, mark(winner)),
        (true, true, None) => "Draw.".to_string(),
        (true, false, _) => "Move accepted".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_empty_board_shows_indices() {
        let text = format_board(&Board::new());
        assert_eq!(
            text,
            " 0 | 1 | 2\n---+---+---\n 3 | 4 | 5\n---+---+---\n 6 | 7 | 8"
        );
    }

    #[test]
    fn test_format_outcome_variants() {
        assert_eq!(format_outcome(&TurnOutcome::rejected()), "Move rejected");
        assert_eq!(format_outcome(&TurnOutcome::draw()), "Draw.");
        assert_eq!(
            format_outcome(&TurnOutcome::won(PlayerId::Two)),
            "player 2 (O) wins!"
        );
    }
}
