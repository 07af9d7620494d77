//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The board is a fixed 7x7 square:
//!
//! - **Rows**: indexed 0-6 from top to bottom
//! - **Columns**: indexed 0-6 from left to right
//! - Gravity pulls tiles toward row 6
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BOARD_SIZE` | 7 | Rows and columns of the square board |
//! | `ANIMAL_TYPES` | 5 | Number of distinct animal kinds |
//! | `MIN_MATCH` | 3 | Shortest run that counts as a match |
//! | `INITIAL_MOVES` | 30 | Moves available at the start of a game |
//! | `POINTS_PER_TILE` | 10 | Score awarded per removed tile |
//! | `MAX_CASCADE_PASSES` | 10000 | Safety valve for a single cascade |
//!
//! # Examples
//!
//! ```
//! use tui_match3_types::{Direction, Pos, Swap, Tile, BOARD_SIZE};
//!
//! let tile = Tile::from_char('D').unwrap();
//! assert_eq!(tile, Tile::Dog);
//! assert!(Tile::Empty.is_empty());
//!
//! let pos = Pos::new(0, 0);
//! assert_eq!(pos.step(Direction::Up), None);
//! assert_eq!(pos.step(Direction::Right), Some(Pos::new(0, 1)));
//!
//! let swap = Swap::new(Pos::new(2, 3), Pos::new(2, 4));
//! assert!(swap.is_adjacent());
//!
//! assert_eq!(BOARD_SIZE, 7);
//! ```

/// Rows and columns of the square board
pub const BOARD_SIZE: usize = 7;

/// Total number of cells on the board
pub const BOARD_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Number of distinct animal kinds
pub const ANIMAL_TYPES: u8 = 5;

/// Shortest run of equal tiles that is removed
pub const MIN_MATCH: usize = 3;

/// Moves available at the start of a game
pub const INITIAL_MOVES: u32 = 30;

/// Score awarded for every removed tile
pub const POINTS_PER_TILE: u32 = 10;

/// Upper bound on remove/drop/refill passes within one cascade.
///
/// Tripping it means match detection and refill disagree; it is not a
/// normal game outcome.
pub const MAX_CASCADE_PASSES: u32 = 10_000;


/// Content of one board cell
///
/// Animal kinds compare only for equality. `Empty` is a transient marker used
/// while a cascade is removing and refilling tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    #[default]
    Empty,
    Dog,
    Cat,
    Rabbit,
    Panda,
    Koala,
}

impl Tile {
    /// Every animal kind, in draw-index order
    pub const ANIMALS: [Tile; ANIMAL_TYPES as usize] =
        [Tile::Dog, Tile::Cat, Tile::Rabbit, Tile::Panda, Tile::Koala];

    /// Map a random draw in `[0, ANIMAL_TYPES)` to an animal.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_match3_types::Tile;
    ///
    /// assert_eq!(Tile::from_index(0), Some(Tile::Dog));
    /// assert_eq!(Tile::from_index(4), Some(Tile::Koala));
    /// assert_eq!(Tile::from_index(5), None);
    /// ```
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ANIMALS.get(index as usize).copied()
    }

    /// Draw index of an animal, `None` for `Empty`
    pub fn index(self) -> Option<u8> {
        Self::ANIMALS
            .iter()
            .position(|&t| t == self)
            .map(|i| i as u8)
    }

    pub fn is_empty(self) -> bool {
        self == Tile::Empty
    }

    /// Parse the single-letter board notation (case-insensitive).
    ///
    /// `D`og, `C`at, `R`abbit, `P`anda, `K`oala, and `.` for empty.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'd' => Some(Tile::Dog),
            'c' => Some(Tile::Cat),
            'r' => Some(Tile::Rabbit),
            'p' => Some(Tile::Panda),
            'k' => Some(Tile::Koala),
            '.' => Some(Tile::Empty),
            _ => None,
        }
    }

    /// Single-letter board notation, inverse of [`Tile::from_char`]
    pub fn as_char(self) -> char {
        match self {
            Tile::Empty => '.',
            Tile::Dog => 'D',
            Tile::Cat => 'C',
            Tile::Rabbit => 'R',
            Tile::Panda => 'P',
            Tile::Koala => 'K',
        }
    }
}

/// Board coordinate, `row` counted from the top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Neighbor one cell away in `dir`, or `None` when it would leave the board
    pub fn step(self, dir: Direction) -> Option<Pos> {
        let (dr, dc) = dir.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        let next = Pos::new(row, col);
        next.in_bounds().then_some(next)
    }

    /// True when `other` is exactly one cell away along a single axis
    pub fn is_adjacent(self, other: Pos) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }

    /// In-bounds orthogonal neighbors (N, S, W, E)
    pub fn neighbors(self) -> impl Iterator<Item = Pos> {
        Direction::ALL.into_iter().filter_map(move |d| self.step(d))
    }
}

/// Cardinal direction on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(row, col)` offset of one step
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Row or column orientation of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    /// The two half-directions along this axis, `(backward, forward)`
    pub fn directions(self) -> (Direction, Direction) {
        match self {
            Axis::Horizontal => (Direction::Left, Direction::Right),
            Axis::Vertical => (Direction::Up, Direction::Down),
        }
    }
}

/// A requested exchange of two cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Swap {
    pub a: Pos,
    pub b: Pos,
}

impl Swap {
    pub const fn new(a: Pos, b: Pos) -> Self {
        Self { a, b }
    }

    pub fn is_adjacent(&self) -> bool {
        self.a.is_adjacent(self.b)
    }

    /// Both endpoints of the swap
    pub fn cells(&self) -> [Pos; 2] {
        [self.a, self.b]
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.a == pos || self.b == pos
    }
}

/// Player intents produced by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    /// Select the cell under the cursor, or swap with the selected cell
    Select,
    /// Drop the current selection
    Cancel,
    Hint,
    Restart,
}

impl GameAction {
    /// Direction for cursor movement actions
    pub fn direction(self) -> Option<Direction> {
        match self {
            GameAction::CursorUp => Some(Direction::Up),
            GameAction::CursorDown => Some(Direction::Down),
            GameAction::CursorLeft => Some(Direction::Left),
            GameAction::CursorRight => Some(Direction::Right),
            _ => None,
        }
    }
}
