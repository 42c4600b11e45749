use crate::engine::{Board, Cell};
use crate::error::BoardError;

/// Parses an array of string slices into a `Board`.
///
/// Each string slice is one row, starting from the top (row 0). The board is
/// as wide as the first row; every other row must have the same number of
/// characters.
///
/// Characters map to cells as follows:
/// - `'.'`: `Cell::Empty`
/// - `'#'`: `Cell::Obstacle`
/// - any other visible character: `Cell::Tile` of that kind (letters in
///   tests, emoji in real play)
///
/// Whitespace and control characters are rejected.
///
/// # Returns
/// * `Ok(Board)` on success.
/// * `Err(BoardError::NoRows)` if `s` is empty or the first row is empty.
/// * `Err(BoardError::RaggedRow)` if a row's length differs from the first row's.
/// * `Err(BoardError::UnrecognizedChar)` for whitespace or control characters.
///
/// # Examples
/// ```
/// use lianliankan_solver::engine::{Cell, Position};
/// use lianliankan_solver::utils::board_from_str_array;
///
/// let board = board_from_str_array(&[
///     "A.#",
///     "🦄.A",
/// ]).unwrap();
/// assert_eq!(board.width(), 3);
/// assert_eq!(board.height(), 2);
/// assert_eq!(board.get(Position::new(0, 0)), Cell::Tile('A'));
/// assert_eq!(board.get(Position::new(2, 0)), Cell::Obstacle);
/// assert_eq!(board.get(Position::new(0, 1)), Cell::Tile('🦄'));
///
/// assert!(board_from_str_array(&["A.", "A"]).is_err());
/// assert!(board_from_str_array(&["A B"]).is_err());
/// ```
pub fn board_from_str_array(s: &[&str]) -> Result<Board, BoardError> {
    let width = s.first().map_or(0, |row| row.chars().count());
    if width == 0 {
        return Err(BoardError::NoRows);
    }

    let mut cells = Vec::with_capacity(width * s.len());
    for (r, row_str) in s.iter().enumerate() {
        let found = row_str.chars().count();
        if found != width {
            return Err(BoardError::RaggedRow {
                row: r,
                found,
                expected: width,
            });
        }

        for (c, ch) in row_str.chars().enumerate() {
            let cell = match ch {
                '.' => Cell::Empty,
                '#' => Cell::Obstacle,
                ch if ch.is_whitespace() || ch.is_control() => {
                    return Err(BoardError::UnrecognizedChar { ch, row: r, col: c })
                }
                ch => Cell::Tile(ch),
            };
            cells.push(cell);
        }
    }

    Board::from_cells(width, s.len(), cells)
}

/// Parses a board file's contents: one row per line, blank lines and
/// surrounding whitespace ignored.
pub fn board_from_text(text: &str) -> Result<Board, BoardError> {
    let rows: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    board_from_str_array(&rows)
}
