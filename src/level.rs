//! Difficulty policy: maps a level number to the board layout it should get.
//!
//! Higher levels add obstacles, widen the glyph palette, and shorten the time
//! limit. The policy is a pure function of the level and the board size.

use crate::engine::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::error::BoardError;

/// Glyph palette. Levels draw their tile kinds from the front of this list.
pub const EMOJIS: [char; 23] = [
    '🤪', '🤡', '👽', '👻', '🤖', '🎃', '🤥', '🤢', '🤠', '🥶', '🤯', '🥳', '😎', '🤓', '👿', '🦄',
    '🐷', '🙈', '🔥', '😻', '🐶', '🐯', '🦁',
];

/// Upper bound on obstacles placed by the level policy.
pub const MAX_OBSTACLES: usize = 20;
/// Obstacles added per level after the first.
pub const OBSTACLES_PER_LEVEL: usize = 2;
/// Number of tile kinds on level 1.
pub const BASE_KINDS: usize = 5;

pub const BASE_TIME_SECS: u32 = 60;
pub const TIME_DECREMENT_PER_LEVEL: u32 = 2;
pub const MIN_TIME_SECS: u32 = 20;

/// Board layout and limits for one level.
///
/// Only built through [`LevelConfig::for_level`] and [`LevelConfig::for_board`],
/// so the obstacles always fit on the board with an even number of playable
/// cells left, and `kinds` is always within `1..=EMOJIS.len()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LevelConfig {
    level: u32,
    width: usize,
    height: usize,
    obstacles: usize,
    kinds: usize,
    time_limit_secs: u32,
}

impl LevelConfig {
    /// Returns the configuration for `level` on the reference 8x10 board.
    ///
    /// Level 0 is treated as level 1.
    ///
    /// # Examples
    /// ```
    /// use lianliankan_solver::level::LevelConfig;
    ///
    /// let first = LevelConfig::for_level(1);
    /// assert_eq!(first.obstacles(), 0);
    /// assert_eq!(first.kinds(), 5);
    /// assert_eq!(first.pairs(), 40);
    ///
    /// let fifth = LevelConfig::for_level(5);
    /// assert_eq!(fifth.obstacles(), 8);
    /// assert_eq!(fifth.time_limit_secs(), 52);
    /// ```
    pub fn for_level(level: u32) -> Self {
        Self::build(level, BOARD_WIDTH, BOARD_HEIGHT)
    }

    /// Returns the configuration for `level` on a `width` x `height` board.
    ///
    /// Fails if the board is too small to hold the level's obstacles.
    pub fn for_board(level: u32, width: usize, height: usize) -> Result<Self, BoardError> {
        let config = Self::build(level, width, height);
        let cells = width * height;
        if config.obstacles > cells {
            return Err(BoardError::TooManyObstacles {
                needed: config.obstacles,
                cells,
            });
        }
        Ok(config)
    }

    fn build(level: u32, width: usize, height: usize) -> Self {
        let level = level.max(1);
        let total_cells = width * height;

        let mut obstacles = (OBSTACLES_PER_LEVEL * (level as usize - 1)).min(MAX_OBSTACLES);
        if total_cells.saturating_sub(obstacles) % 2 != 0 {
            obstacles += 1;
        }

        let kinds = (BASE_KINDS + level as usize / 2).min(EMOJIS.len());
        let time_limit_secs = BASE_TIME_SECS
            .saturating_sub((level - 1).saturating_mul(TIME_DECREMENT_PER_LEVEL))
            .max(MIN_TIME_SECS);

        LevelConfig {
            level,
            width,
            height,
            obstacles,
            kinds,
            time_limit_secs,
        }
    }

    /// Returns a copy dealing `kinds` distinct tile kinds instead of the
    /// level's default.
    ///
    /// # Returns
    /// * `Err(BoardError::KindCount)` unless `1 <= kinds <= EMOJIS.len()`.
    pub fn with_kinds(self, kinds: usize) -> Result<Self, BoardError> {
        if kinds == 0 || kinds > EMOJIS.len() {
            return Err(BoardError::KindCount {
                kinds,
                max: EMOJIS.len(),
            });
        }
        Ok(LevelConfig { kinds, ..self })
    }

    /// Level number, starting at 1.
    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Obstacle count, always leaving an even number of playable cells.
    pub fn obstacles(&self) -> usize {
        self.obstacles
    }

    /// Number of distinct tile kinds, taken from the front of [`EMOJIS`].
    pub fn kinds(&self) -> usize {
        self.kinds
    }

    /// Time allowed for the level. Counting it down is the caller's job.
    pub fn time_limit_secs(&self) -> u32 {
        self.time_limit_secs
    }

    /// Number of cells left for tiles once obstacles are placed.
    pub fn playable_cells(&self) -> usize {
        (self.width * self.height).saturating_sub(self.obstacles)
    }

    /// Number of tile pairs the level starts with.
    pub fn pairs(&self) -> usize {
        self.playable_cells() / 2
    }

    /// The glyphs in play on this level.
    pub fn palette(&self) -> &'static [char] {
        &EMOJIS[..self.kinds]
    }

    /// Glyph used for the `i`-th pair. Kinds are dealt round-robin.
    pub fn kind_for_pair(&self, i: usize) -> char {
        EMOJIS[i % self.kinds]
    }
}
