//! Connectivity checker: finds a link between two tiles with at most two bends.
//!
//! A link is a chain of axis-aligned segments whose interior cells and corner
//! cells are all empty. The endpoint cells hold the tiles being linked and
//! are never tested for emptiness. The board edge is a hard wall.
//!
//! Candidates are tried cheapest first:
//! 1. a straight run (0 bends),
//! 2. the L corner `(p1.x, p2.y)`, then `(p2.x, p1.y)` (1 bend),
//! 3. Z/U shapes with a horizontal first leg, pivot columns ascending, then
//!    with a vertical first leg, pivot rows ascending (2 bends).
//!
//! `p1` is the endpoint that comes first in row-major scan order. Queries made
//! the other way round get the same link reversed.
use crate::engine::{Board, Cell, Position};
use crate::error::PathError;

/// A link between two tiles: both endpoints plus zero, one or two corners.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Path {
    points: Vec<Position>,
}

impl Path {
    fn new(points: Vec<Position>) -> Self {
        debug_assert!((2..=4).contains(&points.len()));
        Path { points }
    }

    /// Endpoints and corners, in travel order.
    pub fn points(&self) -> &[Position] {
        &self.points
    }

    pub fn start(&self) -> Position {
        self.points[0]
    }

    pub fn end(&self) -> Position {
        self.points[self.points.len() - 1]
    }

    /// The corner points, without the endpoints.
    pub fn corners(&self) -> &[Position] {
        &self.points[1..self.points.len() - 1]
    }

    /// Number of 90° turns: 0, 1 or 2.
    pub fn bends(&self) -> usize {
        self.points.len() - 2
    }

    /// The same link travelled from the other end.
    pub fn reversed(&self) -> Path {
        let mut points = self.points.clone();
        points.reverse();
        Path { points }
    }

    /// Every cell the link passes through, endpoints included, in travel order.
    pub fn cells(&self) -> Vec<Position> {
        let mut cells = vec![self.start()];
        for leg in self.points.windows(2) {
            let (from, to) = (leg[0], leg[1]);
            if from.x == to.x {
                let ys: Vec<usize> = if from.y < to.y {
                    (from.y + 1..=to.y).collect()
                } else {
                    (to.y..from.y).rev().collect()
                };
                cells.extend(ys.into_iter().map(|y| Position::new(from.x, y)));
            } else {
                let xs: Vec<usize> = if from.x < to.x {
                    (from.x + 1..=to.x).collect()
                } else {
                    (to.x..from.x).rev().collect()
                };
                cells.extend(xs.into_iter().map(|x| Position::new(x, from.y)));
            }
        }
        cells
    }
}

/// Checks that `p1` and `p2` are distinct, on the board, and hold tiles.
pub(crate) fn check_endpoints(board: &Board, p1: Position, p2: Position) -> Result<(), PathError> {
    board.check_bounds(p1)?;
    board.check_bounds(p2)?;
    if p1 == p2 {
        return Err(PathError::SameEndpoints { x: p1.x, y: p1.y });
    }
    for p in [p1, p2] {
        match board.get(p) {
            Cell::Tile(_) => {}
            Cell::Obstacle => return Err(PathError::ObstacleEndpoint { x: p.x, y: p.y }),
            Cell::Empty => return Err(PathError::NotATile { x: p.x, y: p.y }),
        }
    }
    Ok(())
}

/// Finds a link between the tiles at `p1` and `p2`.
///
/// Only geometry is checked: whether the two tiles are of the same kind is
/// the caller's concern.
///
/// The tie-break order applies in scan order, not argument order: candidates
/// are tried from whichever endpoint comes first row-major. Swapping `p1`
/// and `p2` returns the same link reversed.
///
/// # Returns
/// * `Ok(Some(path))` with the first link found, starting at `p1`.
/// * `Ok(None)` if no link with at most two bends exists.
/// * `Err(PathError)` if a position is off the board, the positions are
///   equal, or either cell does not hold a tile.
///
/// # Examples
/// ```
/// use lianliankan_solver::engine::Position;
/// use lianliankan_solver::pathfinding::find_path;
/// use lianliankan_solver::utils::board_from_str_array;
///
/// let board = board_from_str_array(&[
///     "A#..",
///     "...A",
/// ]).unwrap();
/// let path = find_path(&board, Position::new(0, 0), Position::new(3, 1))
///     .unwrap()
///     .unwrap();
/// assert_eq!(
///     path.points(),
///     &[Position::new(0, 0), Position::new(0, 1), Position::new(3, 1)]
/// );
/// ```
pub fn find_path(board: &Board, p1: Position, p2: Position) -> Result<Option<Path>, PathError> {
    check_endpoints(board, p1, p2)?;
    Ok(connect(board, p1, p2))
}

/// Unchecked core of [`find_path`]. Callers guarantee distinct in-bounds endpoints.
pub(crate) fn connect(board: &Board, p1: Position, p2: Position) -> Option<Path> {
    if p1.precedes(&p2) {
        search(board, p1, p2).map(Path::new)
    } else {
        search(board, p2, p1).map(|points| Path::new(points).reversed())
    }
}

fn search(board: &Board, p1: Position, p2: Position) -> Option<Vec<Position>> {
    // 0 bends
    if p1.x == p2.x && is_vertical_clear(board, p1.x, p1.y, p2.y) {
        return Some(vec![p1, p2]);
    }
    if p1.y == p2.y && is_horizontal_clear(board, p1.y, p1.x, p2.x) {
        return Some(vec![p1, p2]);
    }

    // 1 bend
    let corner = Position::new(p1.x, p2.y);
    if board.is_empty_at(corner)
        && is_vertical_clear(board, p1.x, p1.y, corner.y)
        && is_horizontal_clear(board, corner.y, corner.x, p2.x)
    {
        return Some(vec![p1, corner, p2]);
    }
    let corner = Position::new(p2.x, p1.y);
    if board.is_empty_at(corner)
        && is_horizontal_clear(board, p1.y, p1.x, corner.x)
        && is_vertical_clear(board, corner.x, corner.y, p2.y)
    {
        return Some(vec![p1, corner, p2]);
    }

    // 2 bends, horizontal first leg
    for x in (0..board.width()).filter(|&x| x != p1.x) {
        let a = Position::new(x, p1.y);
        if !board.is_empty_at(a) || !is_horizontal_clear(board, p1.y, p1.x, x) {
            continue;
        }
        let b = Position::new(x, p2.y);
        if board.is_empty_at(b)
            && is_vertical_clear(board, x, a.y, b.y)
            && is_horizontal_clear(board, b.y, b.x, p2.x)
        {
            return Some(vec![p1, a, b, p2]);
        }
    }

    // 2 bends, vertical first leg
    for y in (0..board.height()).filter(|&y| y != p1.y) {
        let a = Position::new(p1.x, y);
        if !board.is_empty_at(a) || !is_vertical_clear(board, p1.x, p1.y, y) {
            continue;
        }
        let b = Position::new(p2.x, y);
        if board.is_empty_at(b)
            && is_horizontal_clear(board, y, a.x, b.x)
            && is_vertical_clear(board, b.x, b.y, p2.y)
        {
            return Some(vec![p1, a, b, p2]);
        }
    }

    None
}

/// True if every cell strictly between columns `x1` and `x2` on row `y` is empty.
fn is_horizontal_clear(board: &Board, y: usize, x1: usize, x2: usize) -> bool {
    let (lo, hi) = (x1.min(x2), x1.max(x2));
    (lo + 1..hi).all(|x| board.is_empty_at(Position::new(x, y)))
}

/// True if every cell strictly between rows `y1` and `y2` in column `x` is empty.
fn is_vertical_clear(board: &Board, x: usize, y1: usize, y2: usize) -> bool {
    let (lo, hi) = (y1.min(y2), y1.max(y2));
    (lo + 1..hi).all(|y| board.is_empty_at(Position::new(x, y)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{BOARD_HEIGHT, BOARD_WIDTH};
    use crate::utils::board_from_str_array;

    fn pos(x: usize, y: usize) -> Position {
        Position::new(x, y)
    }

    fn path_points(board: &Board, p1: Position, p2: Position) -> Option<Vec<Position>> {
        find_path(board, p1, p2)
            .unwrap()
            .map(|path| path.points().to_vec())
    }

    /// Reference-size board with the given cells filled in; the rest is empty.
    fn reference_board(cells: &[(usize, usize, Cell)]) -> Board {
        let mut board = Board::new_empty(BOARD_WIDTH, BOARD_HEIGHT);
        for &(x, y, cell) in cells {
            board.set(pos(x, y), cell);
        }
        board
    }

    #[test]
    fn test_straight_row_clear() {
        let board = reference_board(&[(0, 0, Cell::Tile('A')), (4, 0, Cell::Tile('A'))]);
        assert_eq!(path_points(&board, pos(0, 0), pos(4, 0)), Some(vec![pos(0, 0), pos(4, 0)]));
    }

    #[test]
    fn test_straight_column_clear() {
        let board = board_from_str_array(&["A.", "..", "A."]).unwrap();
        assert_eq!(path_points(&board, pos(0, 0), pos(0, 2)), Some(vec![pos(0, 0), pos(0, 2)]));
    }

    #[test]
    fn test_adjacent_tiles_connect_directly() {
        let board = board_from_str_array(&["AA", "BC"]).unwrap();
        assert_eq!(path_points(&board, pos(0, 0), pos(1, 0)), Some(vec![pos(0, 0), pos(1, 0)]));
    }

    #[test]
    fn test_one_bend_through_open_corner() {
        // (0, 2) is blocked by the tile at (0, 1); only the (2, 0) corner works.
        let board = reference_board(&[
            (0, 0, Cell::Tile('A')),
            (2, 2, Cell::Tile('A')),
            (0, 1, Cell::Tile('B')),
        ]);
        assert_eq!(
            path_points(&board, pos(0, 0), pos(2, 2)),
            Some(vec![pos(0, 0), pos(2, 0), pos(2, 2)])
        );
    }

    #[test]
    fn test_one_bend_corner_order() {
        // Both corners are open: (p1.x, p2.y) is tried first.
        let board = reference_board(&[(0, 0, Cell::Tile('A')), (2, 2, Cell::Tile('A'))]);
        assert_eq!(
            path_points(&board, pos(0, 0), pos(2, 2)),
            Some(vec![pos(0, 0), pos(0, 2), pos(2, 2)])
        );
    }

    #[test]
    fn test_one_bend_corner_cell_must_be_empty() {
        let board = board_from_str_array(&[
            "A.#", //
            "...", //
            "B.A", //
        ])
        .unwrap();
        // (0, 2) holds B and (2, 0) is an obstacle; falls through to a 2-bend link.
        let path = find_path(&board, pos(0, 0), pos(2, 2)).unwrap().unwrap();
        assert_eq!(path.bends(), 2);
        assert_eq!(path.points(), &[pos(0, 0), pos(1, 0), pos(1, 2), pos(2, 2)]);
    }

    #[test]
    fn test_two_bends_around_obstacle_wall() {
        // Column 0 blocked between the tiles, columns 1 and 2 blocked mid-way,
        // column 3 open from top to bottom.
        let mut cells = vec![(0, 0, Cell::Tile('A')), (0, 5, Cell::Tile('A'))];
        for y in 1..5 {
            cells.push((0, y, Cell::Obstacle));
        }
        cells.push((1, 2, Cell::Obstacle));
        cells.push((2, 3, Cell::Obstacle));
        for x in 4..BOARD_WIDTH {
            for y in 0..BOARD_HEIGHT {
                cells.push((x, y, Cell::Tile('Z')));
            }
        }
        for y in 6..BOARD_HEIGHT {
            for x in 0..3 {
                cells.push((x, y, Cell::Tile('Z')));
            }
        }
        let board = reference_board(&cells);

        assert_eq!(
            path_points(&board, pos(0, 0), pos(0, 5)),
            Some(vec![pos(0, 0), pos(3, 0), pos(3, 5), pos(0, 5)])
        );
    }

    #[test]
    fn test_two_bends_horizontal_scan_before_vertical() {
        // A Z through column 1 (horizontal first leg) and a Z through row 2
        // (vertical first leg) both exist; the horizontal scan wins.
        let board = board_from_str_array(&[
            "....", //
            "A.B.", //
            "....", //
            "B.A.", //
        ])
        .unwrap();
        let path = find_path(&board, pos(0, 1), pos(2, 3)).unwrap().unwrap();
        assert_eq!(path.points(), &[pos(0, 1), pos(1, 1), pos(1, 3), pos(2, 3)]);
    }

    #[test]
    fn test_two_bends_vertical_scan_lowest_row_first() {
        // Pair on the same row, separated by a tile; both the row above and the
        // row below are open. Row 0 comes first.
        let board = board_from_str_array(&[
            "...", //
            "ABA", //
            "...", //
        ])
        .unwrap();
        assert_eq!(
            path_points(&board, pos(0, 1), pos(2, 1)),
            Some(vec![pos(0, 1), pos(0, 0), pos(2, 0), pos(2, 1)])
        );
    }

    #[test]
    fn test_boxed_in_tile_has_no_path() {
        let board = reference_board(&[
            (0, 0, Cell::Tile('A')),
            (1, 0, Cell::Obstacle),
            (0, 1, Cell::Obstacle),
            (5, 5, Cell::Tile('A')),
            (7, 0, Cell::Tile('A')),
            (0, 9, Cell::Tile('A')),
        ]);
        for target in [pos(5, 5), pos(7, 0), pos(0, 9)] {
            assert_eq!(path_points(&board, pos(0, 0), target), None);
            assert_eq!(path_points(&board, target, pos(0, 0)), None);
        }
    }

    #[test]
    fn test_unreachable_within_two_bends() {
        // The only routes between the A tiles wind around both walls.
        let board = board_from_str_array(&[
            "A#...", //
            ".#.#.", //
            "...#A", //
        ])
        .unwrap();
        assert_eq!(path_points(&board, pos(0, 0), pos(4, 2)), None);
    }

    #[test]
    fn test_board_corners_scan_without_overflow() {
        let mut board = Board::new_empty(BOARD_WIDTH, BOARD_HEIGHT);
        let corners = [pos(0, 0), pos(7, 0), pos(0, 9), pos(7, 9)];
        for &corner in &corners {
            board.set(corner, Cell::Tile('A'));
        }
        for &p1 in &corners {
            for &p2 in &corners {
                if p1 != p2 {
                    assert!(find_path(&board, p1, p2).unwrap().is_some());
                }
            }
        }
        // Both L corners of the diagonal pair hold tiles, so the link hugs column 1.
        assert_eq!(
            path_points(&board, pos(0, 0), pos(7, 9)),
            Some(vec![pos(0, 0), pos(1, 0), pos(1, 9), pos(7, 9)])
        );
    }

    #[test]
    fn test_reverse_query_returns_reversed_path() {
        let board = reference_board(&[(0, 0, Cell::Tile('A')), (2, 2, Cell::Tile('A'))]);
        let forward = find_path(&board, pos(0, 0), pos(2, 2)).unwrap().unwrap();
        let backward = find_path(&board, pos(2, 2), pos(0, 0)).unwrap().unwrap();
        assert_eq!(backward, forward.reversed());
        // The (0, 2) corner is the first candidate from (0, 0), whichever end is passed first.
        assert_eq!(backward.points(), &[pos(2, 2), pos(0, 2), pos(0, 0)]);
    }

    #[test]
    fn test_contract_violations_are_errors() {
        let board = board_from_str_array(&["A#", ".A"]).unwrap();
        assert_eq!(
            find_path(&board, pos(0, 0), pos(0, 0)),
            Err(PathError::SameEndpoints { x: 0, y: 0 })
        );
        assert_eq!(
            find_path(&board, pos(0, 0), pos(2, 0)),
            Err(PathError::OutOfBounds {
                x: 2,
                y: 0,
                width: 2,
                height: 2
            })
        );
        assert_eq!(
            find_path(&board, pos(1, 0), pos(1, 1)),
            Err(PathError::ObstacleEndpoint { x: 1, y: 0 })
        );
        assert_eq!(
            find_path(&board, pos(0, 1), pos(1, 1)),
            Err(PathError::NotATile { x: 0, y: 1 })
        );
    }

    #[test]
    fn test_path_cells_walk_every_leg() {
        let board = board_from_str_array(&[
            "....", //
            "A.B.", //
            "#.#.", //
            "B.A.", //
        ])
        .unwrap();
        let path = find_path(&board, pos(2, 3), pos(0, 1)).unwrap().unwrap();
        assert_eq!(path.points(), &[pos(2, 3), pos(1, 3), pos(1, 1), pos(0, 1)]);
        assert_eq!(path.corners(), &[pos(1, 3), pos(1, 1)]);

        let cells = path.cells();
        assert_eq!(
            cells,
            vec![pos(2, 3), pos(1, 3), pos(1, 2), pos(1, 1), pos(0, 1)]
        );
        for cell in &cells[1..cells.len() - 1] {
            assert_eq!(board.get(*cell), Cell::Empty);
        }
    }
}
