//! Board model and game session for the link-path tile puzzle.
//!
//! This module defines:
//! - `Cell`: what a single grid cell holds (nothing, an obstacle, or a tile).
//! - `Position`: an `(x, y)` grid coordinate.
//! - `Board`: an immutable-by-convention snapshot of the grid, stored row-major.
//! - `Game`: a play session that owns a board, the hint and bomb inventories,
//!   and the RNG used for dealing and reshuffling.
use crate::error::{BoardError, PathError};
use crate::level::LevelConfig;
use crate::pathfinding::{self, Path};
use crate::solver;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Width of the reference board, in columns.
pub const BOARD_WIDTH: usize = 8;
/// Height of the reference board, in rows.
pub const BOARD_HEIGHT: usize = 10;

/// Contents of a single board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Nothing here; paths may pass through.
    Empty,
    /// Permanent blocker. Never matched, never an endpoint.
    Obstacle,
    /// A matchable tile. Two tiles match when their glyphs are equal.
    Tile(char),
}

impl Cell {
    /// Converts the cell to its character representation.
    ///
    /// # Examples
    ///
    /// ```
    /// use lianliankan_solver::engine::Cell;
    /// assert_eq!(Cell::Empty.to_char(), '.');
    /// assert_eq!(Cell::Obstacle.to_char(), '#');
    /// assert_eq!(Cell::Tile('A').to_char(), 'A');
    /// ```
    pub fn to_char(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Obstacle => '#',
            Cell::Tile(kind) => *kind,
        }
    }

    /// Returns the tile kind, or `None` for empty and obstacle cells.
    pub fn kind(&self) -> Option<char> {
        match self {
            Cell::Tile(kind) => Some(*kind),
            _ => None,
        }
    }
}

/// A grid coordinate. `x` is the column, `y` is the row; `(0, 0)` is top-left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Position { x, y }
    }

    /// True if `self` comes before `other` in row-major scan order.
    pub fn precedes(&self, other: &Position) -> bool {
        (self.y, self.x) < (other.y, other.x)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A rectangular grid of cells, stored as a row-major flat buffer.
///
/// The pathfinding and scanning functions only ever borrow a `Board`; the
/// mutating methods exist for the game session and for setting up test boards.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates a `width` x `height` board with every cell `Cell::Empty`.
    ///
    /// # Examples
    /// ```
    /// use lianliankan_solver::engine::{Board, Cell, Position};
    /// let board = Board::new_empty(8, 10);
    /// assert_eq!(board.get(Position::new(7, 9)), Cell::Empty);
    /// assert!(board.is_cleared());
    /// ```
    pub fn new_empty(width: usize, height: usize) -> Self {
        Board {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    /// Creates a board from a row-major list of cells.
    ///
    /// # Returns
    /// * `Err(BoardError::CellCount)` if `cells.len()` is not `width * height`.
    pub fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Result<Self, BoardError> {
        let expected = width * height;
        if cells.len() != expected {
            return Err(BoardError::CellCount {
                width,
                height,
                found: cells.len(),
                expected,
            });
        }
        Ok(Board {
            width,
            height,
            cells,
        })
    }

    /// Deals a fresh board for `config`.
    ///
    /// Obstacles and tile pairs are laid out, shuffled uniformly, and written
    /// row-major from the top-left. Cells left over stay empty.
    pub fn generate<R: Rng + ?Sized>(config: &LevelConfig, rng: &mut R) -> Self {
        let total = config.width() * config.height();
        let mut cells = Vec::with_capacity(total);
        cells.extend(std::iter::repeat(Cell::Obstacle).take(config.obstacles()));
        for i in 0..config.pairs() {
            let kind = config.kind_for_pair(i);
            cells.push(Cell::Tile(kind));
            cells.push(Cell::Tile(kind));
        }
        cells.shuffle(rng);
        cells.resize(total, Cell::Empty);

        Board {
            width: config.width(),
            height: config.height(),
            cells,
        }
    }

    /// Deals a reference-size board for `level` from a seeded `SmallRng`.
    ///
    /// The same `(level, seed)` always produces the same board.
    pub fn new_random_with_seed(level: u32, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        Self::generate(&LevelConfig::for_level(level), &mut rng)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// True if `pos` lies on the board.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Returns `Ok(())` if `pos` lies on the board, `PathError::OutOfBounds` otherwise.
    pub fn check_bounds(&self, pos: Position) -> Result<(), PathError> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(PathError::OutOfBounds {
                x: pos.x,
                y: pos.y,
                width: self.width,
                height: self.height,
            })
        }
    }

    fn index(&self, pos: Position) -> usize {
        pos.y * self.width + pos.x
    }

    /// Returns the cell at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is outside the board.
    pub fn get(&self, pos: Position) -> Cell {
        assert!(self.contains(pos), "position {} outside board", pos);
        self.cells[self.index(pos)]
    }

    /// Overwrites the cell at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is outside the board.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        assert!(self.contains(pos), "position {} outside board", pos);
        let idx = self.index(pos);
        self.cells[idx] = cell;
    }

    /// True if the cell at `pos` is `Cell::Empty`. Callers keep `pos` in bounds.
    pub(crate) fn is_empty_at(&self, pos: Position) -> bool {
        self.cells[self.index(pos)] == Cell::Empty
    }

    /// Iterates the matchable tiles in row-major order (top row first, left to
    /// right within a row), yielding each position with its kind.
    pub fn tiles(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        let width = self.width;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.kind()
                .map(|kind| (Position::new(i % width, i / width), kind))
        })
    }

    /// Number of matchable tiles still on the board. Obstacles are not counted.
    pub fn remaining_tiles(&self) -> usize {
        self.tiles().count()
    }

    /// True once no matchable tile is left. Obstacles may remain.
    pub fn is_cleared(&self) -> bool {
        self.tiles().next().is_none()
    }

    /// Clears both cells of a matched pair.
    ///
    /// # Panics
    /// Panics if either position is outside the board.
    pub fn remove_pair(&mut self, first: Position, second: Position) {
        self.set(first, Cell::Empty);
        self.set(second, Cell::Empty);
    }

    /// Shuffles every occupied cell (tiles and obstacles) uniformly and packs
    /// them back row-major from the top-left, leaving the tail empty.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let total = self.cells.len();
        let mut occupied: Vec<Cell> = self
            .cells
            .iter()
            .copied()
            .filter(|cell| *cell != Cell::Empty)
            .collect();
        occupied.shuffle(rng);
        occupied.resize(total, Cell::Empty);
        self.cells = occupied;
    }

    /// Renders the board with the empty cells along `path` marked.
    ///
    /// Corners are drawn as `+` and straight runs as `*`; endpoints keep their
    /// glyphs. Layout matches the `Display` output.
    pub fn to_string_with_path(&self, path: Option<&Path>) -> String {
        let mut marks = vec![None; self.cells.len()];
        if let Some(path) = path {
            for pos in path.cells() {
                if self.contains(pos) && self.is_empty_at(pos) {
                    marks[self.index(pos)] = Some('*');
                }
            }
            for &corner in path.corners() {
                if self.contains(corner) && self.is_empty_at(corner) {
                    marks[self.index(corner)] = Some('+');
                }
            }
        }

        // Column labels are stacked one digit per header row, most significant first.
        let label_rows = digits(self.width.saturating_sub(1));
        let gutter = digits(self.height.saturating_sub(1)) + 2;

        let mut output = String::new();
        for row in (0..label_rows).rev() {
            let scale = 10usize.pow(row as u32);
            output.push_str(&" ".repeat(gutter));
            for x in 0..self.width {
                if row > 0 && x < scale {
                    output.push_str("  ");
                } else {
                    output.push_str(&format!("{:<2}", (x / scale) % 10));
                }
            }
            output.push('\n');
        }

        for y in 0..self.height {
            output.push_str(&format!("{:<gutter$}", y, gutter = gutter));
            for x in 0..self.width {
                let idx = y * self.width + x;
                let ch = marks[idx].unwrap_or_else(|| self.cells[idx].to_char());
                output.push(ch);
                output.push(' ');
            }
            if y + 1 < self.height {
                output.push('\n');
            }
        }
        output
    }
}

/// Number of decimal digits in `n`.
fn digits(n: usize) -> usize {
    n.to_string().len()
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_with_path(None))
    }
}

/// Hints and bombs a session starts with.
pub const STARTING_HINTS: u32 = 1;
pub const STARTING_BOMBS: u32 = 1;

/// Reshuffles tried when a freshly dealt board has no legal pair.
pub const MAX_DEAL_RESHUFFLES: usize = 32;

/// Result of trying to match two selected tiles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The pair was cleared along this path.
    Matched(Path),
    /// The tiles are of different kinds; nothing changed.
    KindMismatch,
    /// Same kind, but no path with at most two bends; nothing changed.
    NoPath,
}

/// Result of spending a hint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HintOutcome {
    /// A connectable pair; one hint was spent.
    Pair(Position, Position),
    /// The board was deadlocked and has been reshuffled; no hint was spent.
    Reshuffled,
    /// No tiles are left; nothing changed.
    LevelCleared,
    /// No hints left.
    NoneLeft,
}

/// Result of spending a bomb.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BombOutcome {
    /// This pair was cleared along `path`; one bomb was spent.
    Cleared {
        first: Position,
        second: Position,
        path: Path,
    },
    /// The board was deadlocked and has been reshuffled; no bomb was spent.
    Reshuffled,
    /// No tiles are left; nothing changed.
    LevelCleared,
    /// No bombs left.
    NoneLeft,
}

/// A play session: the current board plus hint and bomb inventories.
///
/// Timers, scoring and combo rewards are left to the caller.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    level: u32,
    hints: u32,
    bombs: u32,
    rng: SmallRng,
}

impl Game {
    /// Starts a session at `level`, dealing from an RNG seeded with `seed`.
    ///
    /// A dealt board with no legal pair is reshuffled, up to
    /// `MAX_DEAL_RESHUFFLES` times.
    pub fn new(level: u32, seed: u64) -> Self {
        let level = level.max(1);
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = Board::generate(&LevelConfig::for_level(level), &mut rng);
        let mut game = Game {
            board,
            level,
            hints: STARTING_HINTS,
            bombs: STARTING_BOMBS,
            rng,
        };
        game.settle();
        game
    }

    /// Starts a level-1 session on a prepared board.
    pub fn new_with_board(board: Board, seed: u64) -> Self {
        Game {
            board,
            level: 1,
            hints: STARTING_HINTS,
            bombs: STARTING_BOMBS,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn hints(&self) -> u32 {
        self.hints
    }

    pub fn bombs(&self) -> u32 {
        self.bombs
    }

    /// Adds to the inventories, e.g. when the caller hands out a reward.
    pub fn grant(&mut self, hints: u32, bombs: u32) {
        self.hints = self.hints.saturating_add(hints);
        self.bombs = self.bombs.saturating_add(bombs);
    }

    /// Tries to match the tiles at `first` and `second`.
    ///
    /// Both cells must hold tiles. On success both tiles are cleared.
    ///
    /// # Returns
    /// * `Ok(MatchOutcome::Matched(path))` when the pair was cleared.
    /// * `Ok(MatchOutcome::KindMismatch)` or `Ok(MatchOutcome::NoPath)` when
    ///   the board is unchanged.
    /// * `Err(PathError)` for out-of-bounds, identical, or non-tile positions.
    pub fn try_match(&mut self, first: Position, second: Position) -> Result<MatchOutcome, PathError> {
        pathfinding::check_endpoints(&self.board, first, second)?;
        if self.board.get(first) != self.board.get(second) {
            return Ok(MatchOutcome::KindMismatch);
        }
        match pathfinding::connect(&self.board, first, second) {
            Some(path) => {
                self.board.remove_pair(first, second);
                Ok(MatchOutcome::Matched(path))
            }
            None => Ok(MatchOutcome::NoPath),
        }
    }

    /// Spends a hint to reveal a connectable pair.
    pub fn use_hint(&mut self) -> HintOutcome {
        if self.board.is_cleared() {
            return HintOutcome::LevelCleared;
        }
        if self.hints == 0 {
            return HintOutcome::NoneLeft;
        }
        match solver::find_available_pair(&self.board) {
            Some((first, second)) => {
                self.hints -= 1;
                HintOutcome::Pair(first, second)
            }
            None => {
                self.shuffle();
                HintOutcome::Reshuffled
            }
        }
    }

    /// Spends a bomb to clear a connectable pair.
    pub fn use_bomb(&mut self) -> BombOutcome {
        if self.board.is_cleared() {
            return BombOutcome::LevelCleared;
        }
        if self.bombs == 0 {
            return BombOutcome::NoneLeft;
        }
        let link = solver::find_available_pair(&self.board).and_then(|(first, second)| {
            pathfinding::connect(&self.board, first, second).map(|path| (first, second, path))
        });
        match link {
            Some((first, second, path)) => {
                self.bombs -= 1;
                self.board.remove_pair(first, second);
                BombOutcome::Cleared {
                    first,
                    second,
                    path,
                }
            }
            None => {
                self.shuffle();
                BombOutcome::Reshuffled
            }
        }
    }

    /// Reshuffles the board once.
    pub fn shuffle(&mut self) {
        self.board.shuffle(&mut self.rng);
    }

    /// True when a board with tiles left has no legal pair.
    pub fn is_deadlocked(&self) -> bool {
        !self.board.is_cleared() && !solver::has_possible_moves(&self.board)
    }

    pub fn is_level_cleared(&self) -> bool {
        self.board.is_cleared()
    }

    /// Moves on to the next level with a freshly dealt board.
    ///
    /// Empty inventories are topped up to one each; non-empty ones carry over.
    pub fn advance_level(&mut self) {
        self.level = self.level.saturating_add(1);
        self.board = Board::generate(&LevelConfig::for_level(self.level), &mut self.rng);
        self.hints = self.hints.max(1);
        self.bombs = self.bombs.max(1);
        self.settle();
    }

    fn settle(&mut self) {
        for _ in 0..MAX_DEAL_RESHUFFLES {
            if !self.is_deadlocked() {
                break;
            }
            self.shuffle();
        }
    }
}
