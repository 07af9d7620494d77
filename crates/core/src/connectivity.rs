//! Same-kind region counting
//!
//! Counts 4-connected regions with an explicit frontier stack, so the traversal
//! depth does not depend on region shape. The caller owns the visited mask,
//! which lets one mask be shared across many seeds in a single sweep.

use arrayvec::ArrayVec;

use crate::error::GridError;
use crate::grid::Grid;
use crate::types::{Pos, Tile, BOARD_CELLS, BOARD_SIZE};

/// Per-cell visited marker sized to the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitedMask {
    cells: [bool; BOARD_CELLS],
    count: usize,
}

impl VisitedMask {
    pub fn new() -> Self {
        Self {
            cells: [false; BOARD_CELLS],
            count: 0,
        }
    }

    pub fn clear(&mut self) {
        self.cells = [false; BOARD_CELLS];
        self.count = 0;
    }

    pub fn is_visited(&self, pos: Pos) -> bool {
        pos.in_bounds() && self.cells[pos.row * BOARD_SIZE + pos.col]
    }

    /// Mark `pos`; returns false if it was already marked or off the board
    pub fn mark(&mut self, pos: Pos) -> bool {
        if !pos.in_bounds() || self.is_visited(pos) {
            return false;
        }
        self.cells[pos.row * BOARD_SIZE + pos.col] = true;
        self.count += 1;
        true
    }

    /// Number of marked cells
    pub fn count(&self) -> usize {
        self.count
    }
}

impl Default for VisitedMask {
    fn default() -> Self {
        Self::new()
    }
}

/// A connected group of equal tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    pub seed: Pos,
    pub tile: Tile,
    pub size: usize,
}

/// Size of the 4-connected region of `tile` containing `seed`.
///
/// Returns 0 when the seed is empty, holds a different kind, or was already
/// visited. Every counted cell is marked in `visited`.
pub fn count_connected(
    grid: &Grid,
    seed: Pos,
    tile: Tile,
    visited: &mut VisitedMask,
) -> Result<usize, GridError> {
    let current = grid.get(seed)?;
    if current.is_empty() || current != tile || !visited.mark(seed) {
        return Ok(0);
    }

    // Cells are marked when pushed, so each enters the frontier at most once.
    let mut frontier: ArrayVec<Pos, BOARD_CELLS> = ArrayVec::new();
    frontier.push(seed);
    let mut count = 0;

    while let Some(pos) = frontier.pop() {
        count += 1;
        for next in pos.neighbors() {
            if grid.get(next)? == tile && visited.mark(next) {
                frontier.push(next);
            }
        }
    }

    Ok(count)
}

/// Largest same-kind region on the board; ties keep the first in row-major order
pub fn largest_region(grid: &Grid) -> Result<Option<Region>, GridError> {
    let mut visited = VisitedMask::new();
    let mut best: Option<Region> = None;

    for (pos, tile) in grid.iter() {
        let size = count_connected(grid, pos, tile, &mut visited)?;
        if size > 0 && best.map_or(true, |b| size > b.size) {
            best = Some(Region {
                seed: pos,
                tile,
                size,
            });
        }
    }

    Ok(best)
}
