use crate::engine::{Board, Position};
use crate::pathfinding::connect;

/// Finds the first pair of same-kind tiles that can be linked.
///
/// Tiles are collected in row-major order. Pairs `(i, j)` with `i < j` are
/// tried with `i` ascending, then `j` ascending, and only pairs of equal kind
/// reach the path search. Obstacles never take part.
///
/// This is quadratic in the tile count with a linear path search per pair,
/// which is fine for boards of a few dozen cells.
///
/// # Returns
/// * `Some((first, second))` with `first` earlier in scan order.
/// * `None` if no pair can be linked: the board is deadlocked (or cleared).
pub fn find_available_pair(board: &Board) -> Option<(Position, Position)> {
    let tiles: Vec<(Position, char)> = board.tiles().collect();

    for (i, &(first, kind)) in tiles.iter().enumerate() {
        for &(second, other) in &tiles[i + 1..] {
            if kind == other && connect(board, first, second).is_some() {
                return Some((first, second));
            }
        }
    }
    None
}

/// True if at least one pair on the board can be linked.
pub fn has_possible_moves(board: &Board) -> bool {
    find_available_pair(board).is_some()
}
