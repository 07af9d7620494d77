//! Cascade resolution - remove, compact, refill, repeat
//!
//! One pass clears the full match set, lets every column fall, and refills the
//! vacated cells. Passes repeat until the board is match-free. Each pass is one
//! scoring event over its deduplicated match set.

use tracing::{debug, error};

use crate::config::GameConfig;
use crate::error::{EngineError, GridError};
use crate::grid::Grid;
use crate::matcher::{MatchFinder, MatchSet};
use crate::rng::TileSource;
use crate::scoring::pass_score;
use crate::types::{Pos, Tile, BOARD_SIZE};

/// Totals for one resolved cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CascadeReport {
    /// Remove/drop/refill passes performed
    pub passes: u32,
    /// Tiles removed across all passes
    pub removed: u32,
    /// Qualifying runs across all passes
    pub runs: u32,
    /// Points earned across all passes
    pub points: u32,
}

impl CascadeReport {
    /// True when the board was already match-free
    pub fn is_noop(&self) -> bool {
        self.passes == 0
    }
}

/// Mark every matched cell `Empty`
pub fn clear_matches(grid: &mut Grid, matches: &MatchSet) -> Result<(), GridError> {
    for pos in matches.iter() {
        grid.set(pos, Tile::Empty)?;
    }
    Ok(())
}

/// Compact each column toward the bottom, keeping tile order.
///
/// Uses a two-pointer pass per column: `write` trails the bottom-most free
/// slot while `row` scans upward. Empty cells end up on top.
pub fn drop_blocks(grid: &mut Grid) -> Result<(), GridError> {
    for col in 0..BOARD_SIZE {
        let mut write = BOARD_SIZE;
        for row in (0..BOARD_SIZE).rev() {
            let from = Pos::new(row, col);
            let tile = grid.get(from)?;
            if tile.is_empty() {
                continue;
            }
            write -= 1;
            if write != row {
                grid.set(Pos::new(write, col), tile)?;
                grid.set(from, Tile::Empty)?;
            }
        }
    }
    Ok(())
}

/// Replace every `Empty` cell with a fresh tile; returns how many were filled
pub fn fill_empty_spaces<S: TileSource + ?Sized>(
    grid: &mut Grid,
    source: &mut S,
    kinds: u8,
) -> Result<usize, GridError> {
    let mut filled = 0;
    for pos in Grid::positions() {
        if grid.get(pos)?.is_empty() {
            grid.set(pos, source.next_tile(kinds))?;
            filled += 1;
        }
    }
    Ok(filled)
}

/// Runs the cascade loop with a fixed rule set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CascadeResolver {
    finder: MatchFinder,
    animal_kinds: u8,
    points_per_tile: u32,
    max_passes: u32,
}

impl CascadeResolver {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            finder: MatchFinder::new(config.min_match),
            animal_kinds: config.animal_kinds,
            points_per_tile: config.points_per_tile,
            max_passes: config.max_cascade_passes,
        }
    }

    pub fn finder(&self) -> &MatchFinder {
        &self.finder
    }

    /// Resolve until no matches remain.
    ///
    /// Returns [`EngineError::CascadeLimit`] if the board is still matching
    /// after `max_passes` passes; the grid is then mid-cascade.
    pub fn resolve<S: TileSource + ?Sized>(
        &self,
        grid: &mut Grid,
        source: &mut S,
    ) -> Result<CascadeReport, EngineError> {
        let mut report = CascadeReport::default();

        loop {
            let matches = self.finder.find_all(grid);
            if matches.is_empty() {
                return Ok(report);
            }
            if report.passes >= self.max_passes {
                error!(passes = report.passes, "cascade pass cap reached");
                return Err(EngineError::CascadeLimit {
                    passes: report.passes,
                });
            }

            clear_matches(grid, &matches)?;
            let points = pass_score(matches.len(), self.points_per_tile);
            report.passes += 1;
            report.removed += matches.len() as u32;
            report.runs += matches.runs() as u32;
            report.points = report.points.saturating_add(points);
            debug!(
                pass = report.passes,
                removed = matches.len(),
                runs = matches.runs(),
                points,
                "cascade pass"
            );

            drop_blocks(grid)?;
            fill_empty_spaces(grid, source, self.animal_kinds)?;
        }
    }
}

impl Default for CascadeResolver {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
