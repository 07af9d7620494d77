//! Match detection
//!
//! A match is a run of at least `min_match` equal, non-empty tiles along one row
//! or column. Both queries here are built on a single bounded directional scan,
//! so rows and columns share exactly the same code path.

use arrayvec::ArrayVec;

use crate::error::GridError;
use crate::grid::Grid;
use crate::types::{Axis, Direction, Pos, Tile, BOARD_CELLS, BOARD_SIZE, MIN_MATCH};

/// A contiguous line of equal tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    /// Top-most or left-most cell
    pub start: Pos,
    pub axis: Axis,
    pub len: usize,
    pub tile: Tile,
}

impl Run {
    /// Member positions, from `start` forward
    pub fn cells(&self) -> impl Iterator<Item = Pos> {
        let Run { start, axis, len, .. } = *self;
        (0..len).map(move |i| match axis {
            Axis::Horizontal => Pos::new(start.row, start.col + i),
            Axis::Vertical => Pos::new(start.row + i, start.col),
        })
    }
}

/// Deduplicated set of matched positions
///
/// Membership is tracked with a per-cell mask; insertion order is kept for
/// deterministic iteration. A cell on both a horizontal and a vertical run is
/// stored once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSet {
    marked: [bool; BOARD_CELLS],
    cells: ArrayVec<Pos, BOARD_CELLS>,
    runs: usize,
}

impl MatchSet {
    pub fn new() -> Self {
        Self {
            marked: [false; BOARD_CELLS],
            cells: ArrayVec::new(),
            runs: 0,
        }
    }

    fn insert(&mut self, pos: Pos) {
        let idx = pos.row * BOARD_SIZE + pos.col;
        if !self.marked[idx] {
            self.marked[idx] = true;
            self.cells.push(pos);
        }
    }

    /// Add every member of a qualifying run
    pub fn insert_run(&mut self, run: &Run) {
        self.runs += 1;
        for pos in run.cells() {
            self.insert(pos);
        }
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.in_bounds() && self.marked[pos.row * BOARD_SIZE + pos.col]
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of qualifying runs that contributed to the set
    pub fn runs(&self) -> usize {
        self.runs
    }

    pub fn iter(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells.iter().copied()
    }
}

impl Default for MatchSet {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a Pos;
    type IntoIter = std::slice::Iter<'a, Pos>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Count tiles equal to `tile` walking from `from` (exclusive) in `dir`.
///
/// Stops at the board edge, at the first different tile, or after `limit` steps.
fn scan(grid: &Grid, from: Pos, dir: Direction, tile: Tile, limit: usize) -> usize {
    let mut count = 0;
    let mut cur = from;
    while count < limit {
        match cur.step(dir) {
            Some(next) if grid.get(next) == Ok(tile) => {
                count += 1;
                cur = next;
            }
            _ => break,
        }
    }
    count
}

/// The run of `tile` through `pos` along `axis`, scanning at most `limit` cells each way.
fn run_through(grid: &Grid, pos: Pos, tile: Tile, axis: Axis, limit: usize) -> Run {
    let (back, forward) = axis.directions();
    let before = scan(grid, pos, back, tile, limit);
    let after = scan(grid, pos, forward, tile, limit);
    let start = match axis {
        Axis::Horizontal => Pos::new(pos.row, pos.col - before),
        Axis::Vertical => Pos::new(pos.row - before, pos.col),
    };
    Run {
        start,
        axis,
        len: before + after + 1,
        tile,
    }
}

/// Run-length match detector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchFinder {
    min_match: usize,
}

impl MatchFinder {
    pub fn new(min_match: usize) -> Self {
        Self { min_match }
    }

    pub fn min_match(&self) -> usize {
        self.min_match
    }

    /// True if `pos` lies on a horizontal or vertical match.
    ///
    /// Each half-scan looks at most `min_match - 1` cells, which is enough to
    /// decide the threshold.
    pub fn is_match_at(&self, grid: &Grid, pos: Pos) -> Result<bool, GridError> {
        let tile = grid.get(pos)?;
        if tile.is_empty() {
            return Ok(false);
        }
        let reach = self.min_match.saturating_sub(1);
        Ok(Axis::ALL
            .iter()
            .any(|&axis| run_through(grid, pos, tile, axis, reach).len >= self.min_match))
    }

    /// Maximal runs of at least `min_match` tiles, in row-major discovery order
    pub fn find_runs(&self, grid: &Grid) -> ArrayVec<Run, BOARD_CELLS> {
        let mut runs = ArrayVec::new();
        for (pos, tile) in grid.iter() {
            if tile.is_empty() {
                continue;
            }
            for axis in Axis::ALL {
                // Only measure a run from its first cell.
                let (back, _) = axis.directions();
                if pos.step(back).is_some_and(|p| grid.get(p) == Ok(tile)) {
                    continue;
                }
                let run = run_through(grid, pos, tile, axis, BOARD_SIZE);
                if run.len >= self.min_match {
                    runs.push(run);
                }
            }
        }
        runs
    }

    /// Every matched position on the board
    pub fn find_all(&self, grid: &Grid) -> MatchSet {
        let mut set = MatchSet::new();
        for run in self.find_runs(grid) {
            set.insert_run(&run);
        }
        set
    }
}

impl Default for MatchFinder {
    fn default() -> Self {
        Self::new(MIN_MATCH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(text: &str) -> Grid {
        text.parse().unwrap()
    }

    #[test]
    fn scan_respects_limit_and_edges() {
        let g = grid("DDDDDDD CCCCCCC RRRRRRR PPPPPPP KKKKKKK DDDDDDD CCCCCCC");
        assert_eq!(scan(&g, Pos::new(0, 3), Direction::Left, Tile::Dog, 2), 2);
        assert_eq!(scan(&g, Pos::new(0, 3), Direction::Left, Tile::Dog, 10), 3);
        assert_eq!(scan(&g, Pos::new(0, 0), Direction::Left, Tile::Dog, 10), 0);
        assert_eq!(scan(&g, Pos::new(0, 0), Direction::Down, Tile::Dog, 10), 0);
    }

    #[test]
    fn run_through_reports_start_and_length() {
        let g = grid("CDDDDCK RKPRKPR PRKPRKP KPRKPRK RKPRKPR PRKPRKP KPRKPRK");
        let run = run_through(&g, Pos::new(0, 3), Tile::Dog, Axis::Horizontal, BOARD_SIZE);
        assert_eq!(run.start, Pos::new(0, 1));
        assert_eq!(run.len, 4);
        let cells: Vec<Pos> = run.cells().collect();
        assert_eq!(cells.first(), Some(&Pos::new(0, 1)));
        assert_eq!(cells.last(), Some(&Pos::new(0, 4)));
    }

    #[test]
    fn intersecting_runs_are_stored_once() {
        // Plus shape of Dogs centred on (2, 2).
        let g = grid("KPDRKPR PRDKPRK DDDDRKP RKDRKPR PRKPRKP KPRKPRK RKPRKPR");
        let finder = MatchFinder::default();
        let set = finder.find_all(&g);
        assert_eq!(set.runs(), 2);
        assert_eq!(set.len(), 4 + 4 - 1);
        assert!(set.contains(Pos::new(2, 2)));
        assert!(set.contains(Pos::new(0, 2)));
        assert!(set.contains(Pos::new(2, 3)));
        assert!(!set.contains(Pos::new(4, 2)));
    }

    #[test]
    fn empty_cells_never_match() {
        let g = Grid::new();
        let finder = MatchFinder::default();
        assert!(finder.find_all(&g).is_empty());
        assert_eq!(finder.is_match_at(&g, Pos::new(3, 3)), Ok(false));
    }

    #[test]
    fn is_match_at_rejects_out_of_bounds() {
        let g = Grid::new();
        assert_eq!(
            MatchFinder::default().is_match_at(&g, Pos::new(0, 9)),
            Err(GridError::OutOfBounds { row: 0, col: 9 })
        );
    }

    #[test]
    fn longer_minimum_ignores_triples() {
        let g = grid("DDDCKPR PRKPRKP KPRKPRK RKPRKPR PRKPRKP KPRKPRK RKPRKPR");
        assert!(MatchFinder::new(3).is_match_at(&g, Pos::new(0, 0)).unwrap());
        assert!(!MatchFinder::new(4).is_match_at(&g, Pos::new(0, 0)).unwrap());
        assert!(MatchFinder::new(4).find_all(&g).is_empty());
    }
}
