//! Grid module - owns the tile array
//!
//! The grid is a 7x7 square where each cell holds one [`Tile`].
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (row, col) where row ranges 0..6 (top to bottom), col ranges 0..6
//! (left to right). Gravity pulls toward row 6.
//!
//! Every read and write goes through the bounds-checked accessors below.

use std::fmt;
use std::str::FromStr;

use crate::error::{GridError, GridParseError};
use crate::types::{Pos, Tile, BOARD_CELLS, BOARD_SIZE};

/// The match-3 board - 7 rows x 7 columns using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Flat array of tiles, row-major order (row * SIZE + col)
    cells: [Tile; BOARD_CELLS],
}

impl Grid {
    /// Create a grid with every cell `Empty`
    pub fn new() -> Self {
        Self {
            cells: [Tile::Empty; BOARD_CELLS],
        }
    }

    /// Build a grid from explicit rows, top row first
    pub fn from_rows(rows: [[Tile; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut cells = [Tile::Empty; BOARD_CELLS];
        for (row, tiles) in rows.iter().enumerate() {
            cells[row * BOARD_SIZE..(row + 1) * BOARD_SIZE].copy_from_slice(tiles);
        }
        Self { cells }
    }

    /// Calculate flat index from a position
    #[inline(always)]
    fn index(pos: Pos) -> Result<usize, GridError> {
        if !pos.in_bounds() {
            return Err(GridError::OutOfBounds {
                row: pos.row,
                col: pos.col,
            });
        }
        Ok(pos.row * BOARD_SIZE + pos.col)
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    pub fn get(&self, pos: Pos) -> Result<Tile, GridError> {
        Self::index(pos).map(|idx| self.cells[idx])
    }

    pub fn set(&mut self, pos: Pos, tile: Tile) -> Result<(), GridError> {
        let idx = Self::index(pos)?;
        self.cells[idx] = tile;
        Ok(())
    }

    /// Exchange two cells.
    ///
    /// Both positions are checked before anything is written, so a failed
    /// swap leaves the grid untouched.
    pub fn swap(&mut self, a: Pos, b: Pos) -> Result<(), GridError> {
        let ia = Self::index(a)?;
        let ib = Self::index(b)?;
        self.cells.swap(ia, ib);
        Ok(())
    }

    /// Swap two cells for the lifetime of the returned guard.
    ///
    /// Dropping the guard swaps the cells back unless [`TrialSwap::commit`]
    /// was called, so early returns and `?` always restore the grid.
    pub fn try_swap(&mut self, a: Pos, b: Pos) -> Result<TrialSwap<'_>, GridError> {
        self.swap(a, b)?;
        Ok(TrialSwap { grid: self, a, b })
    }

    /// Every board position in row-major order
    pub fn positions() -> impl Iterator<Item = Pos> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Pos::new(row, col)))
    }

    /// Row-major iterator over `(position, tile)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Tile)> + '_ {
        Self::positions().zip(self.cells.iter().copied())
    }

    /// Copy out as rows, top row first
    pub fn to_rows(&self) -> [[Tile; BOARD_SIZE]; BOARD_SIZE] {
        let mut rows = [[Tile::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (row, out) in rows.iter_mut().enumerate() {
            out.copy_from_slice(&self.cells[row * BOARD_SIZE..(row + 1) * BOARD_SIZE]);
        }
        rows
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|t| t.is_empty()).count()
    }

    /// True when no cell is `Empty`
    pub fn is_full(&self) -> bool {
        self.count_empty() == 0
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

/// Letter notation, one row per line (see [`Tile::from_char`])
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for tile in row {
                write!(f, "{}", tile.as_char())?;
            }
        }
        Ok(())
    }
}

/// Parse rows of letter notation separated by whitespace.
///
/// ```
/// use tui_match3_core::Grid;
/// use tui_match3_types::{Pos, Tile};
///
/// let grid: Grid = "DDCDDDC
///                   CCDCCDD
///                   RRPRRPP
///                   PPKPPKK
///                   KKRKKRR
///                   DDCDDCC
///                   CCDCCDD".parse().unwrap();
/// assert_eq!(grid.get(Pos::new(0, 2)).unwrap(), Tile::Cat);
/// ```
impl FromStr for Grid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.split_whitespace().collect();
        if rows.len() != BOARD_SIZE {
            return Err(GridParseError::RowCount {
                expected: BOARD_SIZE,
                found: rows.len(),
            });
        }

        let mut cells = [Tile::Empty; BOARD_CELLS];
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != BOARD_SIZE {
                return Err(GridParseError::RowLength {
                    row,
                    expected: BOARD_SIZE,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                cells[row * BOARD_SIZE + col] =
                    Tile::from_char(ch).ok_or(GridParseError::UnknownTile { row, col, ch })?;
            }
        }
        Ok(Self { cells })
    }
}

/// A swap that undoes itself on drop unless committed
#[derive(Debug)]
pub struct TrialSwap<'a> {
    grid: &'a mut Grid,
    a: Pos,
    b: Pos,
}

impl TrialSwap<'_> {
    /// The grid with the trial swap applied
    pub fn grid(&self) -> &Grid {
        &*self.grid
    }

    /// Keep the swap
    pub fn commit(self) {
        std::mem::forget(self);
    }
}

impl Drop for TrialSwap<'_> {
    fn drop(&mut self) {
        // Both positions were validated by `try_swap`.
        let _ = self.grid.swap(self.a, self.b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_index_calculation() {
        assert_eq!(Grid::index(Pos::new(0, 0)), Ok(0));
        assert_eq!(Grid::index(Pos::new(0, 6)), Ok(6));
        assert_eq!(Grid::index(Pos::new(1, 0)), Ok(7));
        assert_eq!(Grid::index(Pos::new(6, 6)), Ok(48));
        assert_eq!(
            Grid::index(Pos::new(7, 0)),
            Err(GridError::OutOfBounds { row: 7, col: 0 })
        );
        assert_eq!(
            Grid::index(Pos::new(0, 7)),
            Err(GridError::OutOfBounds { row: 0, col: 7 })
        );
    }

    #[test]
    fn test_grid_flat_array() {
        let mut grid = Grid::new();
        grid.set(Pos::new(0, 0), Tile::Dog).unwrap();
        grid.set(Pos::new(3, 5), Tile::Koala).unwrap();

        assert_eq!(grid.cells[0], Tile::Dog);
        assert_eq!(grid.cells[3 * 7 + 5], Tile::Koala);
        assert_eq!(grid.count_empty(), BOARD_CELLS - 2);
    }

    #[test]
    fn test_failed_swap_leaves_grid_untouched() {
        let mut grid = Grid::new();
        grid.set(Pos::new(0, 0), Tile::Cat).unwrap();
        let before = grid.clone();

        assert!(grid.swap(Pos::new(0, 0), Pos::new(0, 7)).is_err());
        assert_eq!(grid, before);
    }

    #[test]
    fn test_trial_swap_restores_on_drop() {
        let mut grid = Grid::new();
        grid.set(Pos::new(2, 2), Tile::Panda).unwrap();
        let before = grid.clone();

        {
            let trial = grid.try_swap(Pos::new(2, 2), Pos::new(2, 3)).unwrap();
            assert_eq!(trial.grid().get(Pos::new(2, 3)), Ok(Tile::Panda));
        }
        assert_eq!(grid, before);

        grid.try_swap(Pos::new(2, 2), Pos::new(2, 3))
            .unwrap()
            .commit();
        assert_eq!(grid.get(Pos::new(2, 3)), Ok(Tile::Panda));
        assert_eq!(grid.get(Pos::new(2, 2)), Ok(Tile::Empty));
    }

    #[test]
    fn test_rows_roundtrip_and_display() {
        let text = "DCRPKDC\nCRPKDCR\nRPKDCRP\nPKDCRPK\nKDCRPKD\nDCRPKDC\n.......";
        let grid: Grid = text.parse().unwrap();
        assert_eq!(grid.to_string(), text);
        assert_eq!(Grid::from_rows(grid.to_rows()), grid);
        assert_eq!(grid.count_empty(), 7);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "DDD".parse::<Grid>(),
            Err(GridParseError::RowCount {
                expected: 7,
                found: 1
            })
        );
        let bad = "DCRPKDC CRPKDCR RPKDCRP PKDCRPK KDCRPKD DCRPKDC DCRPKDX";
        assert_eq!(
            bad.parse::<Grid>(),
            Err(GridParseError::UnknownTile {
                row: 6,
                col: 6,
                ch: 'X'
            })
        );
    }
}
