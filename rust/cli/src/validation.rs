//! Input parsing for the interactive `play` command.

/// Result of parsing one line of player input.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// A cell index. Range is checked by the engine, not here.
    Cell(usize),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input into a cell index or the quit command.
///
/// Accepts a non-negative integer (the engine rejects anything past 8) or
/// `q` / `quit`, case-insensitive.
///
/// # Example
///
/// ```rust
/// # use tictactoe_cli::validation::{parse_cell_input, ParseResult};
/// assert_eq!(parse_cell_input("4"), ParseResult::Cell(4));
/// assert_eq!(parse_cell_input("Q"), ParseResult::Quit);
///
/// match parse_cell_input("top-left") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_cell_input(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }
    if input == "q" || input == "quit" {
        return ParseResult::Quit;
    }
    match input.parse::<usize>() {
        Ok(cell) => ParseResult::Cell(cell),
        Err(_) => ParseResult::Invalid(format!(
            "Unrecognized input '{}'. Enter a cell number 0-8 or 'q' to quit",
            input
        )),
    }
}
