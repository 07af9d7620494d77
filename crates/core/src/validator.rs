//! Valid-move search
//!
//! Tries every adjacent swap once (each cell with its right and down neighbor)
//! and asks the match finder about both endpoints. Swaps are made through
//! [`Grid::try_swap`], so the grid is restored even when a check fails early.

use crate::error::GridError;
use crate::grid::Grid;
use crate::matcher::MatchFinder;
use crate::types::{Direction, Swap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveValidator {
    finder: MatchFinder,
}

impl MoveValidator {
    pub fn new(finder: MatchFinder) -> Self {
        Self { finder }
    }

    /// Would applying `swap` put either endpoint on a match?
    ///
    /// The grid is unchanged when this returns, whatever the result.
    pub fn swap_creates_match(&self, grid: &mut Grid, swap: Swap) -> Result<bool, GridError> {
        let trial = grid.try_swap(swap.a, swap.b)?;
        let hit = self.finder.is_match_at(trial.grid(), swap.a)?
            || self.finder.is_match_at(trial.grid(), swap.b)?;
        Ok(hit)
    }

    /// First matching swap in row-major order, or `None` if the board is stuck
    pub fn find_valid_move(&self, grid: &mut Grid) -> Result<Option<Swap>, GridError> {
        for pos in Grid::positions() {
            for dir in [Direction::Right, Direction::Down] {
                let Some(next) = pos.step(dir) else {
                    continue;
                };
                let swap = Swap::new(pos, next);
                if self.swap_creates_match(grid, swap)? {
                    return Ok(Some(swap));
                }
            }
        }
        Ok(None)
    }

    pub fn has_valid_moves(&self, grid: &mut Grid) -> Result<bool, GridError> {
        Ok(self.find_valid_move(grid)?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Pos;

    fn grid(text: &str) -> Grid {
        text.parse().unwrap()
    }

    #[test]
    fn finds_horizontal_completion() {
        // Swapping (0, 2) and (1, 2) completes D D D on the top row.
        let mut g = grid("DDCKPCK PRDPRKP KPRKPRK RKPRKPR PRKPRKP KPRKPRK RKPRKPR");
        let before = g.clone();
        let validator = MoveValidator::default();

        let swap = validator.find_valid_move(&mut g).unwrap();
        assert_eq!(swap, Some(Swap::new(Pos::new(0, 2), Pos::new(1, 2))));
        assert_eq!(g, before);
    }

    #[test]
    fn stuck_board_has_no_moves() {
        // Checkerboard-like stripes where no swap can line up three.
        let mut g = grid("DCDCDCD RKRKRKR CDCDCDC KRKRKRK DCDCDCD RKRKRKR CDCDCDC");
        let before = g.clone();
        let validator = MoveValidator::default();

        assert_eq!(validator.has_valid_moves(&mut g), Ok(false));
        assert_eq!(g, before);
    }

    #[test]
    fn swap_check_restores_grid_on_both_outcomes() {
        let mut g = grid("DDCKPCK PRDPRKP KPRKPRK RKPRKPR PRKPRKP KPRKPRK RKPRKPR");
        let before = g.clone();
        let validator = MoveValidator::default();

        let hit = Swap::new(Pos::new(0, 2), Pos::new(1, 2));
        let miss = Swap::new(Pos::new(6, 0), Pos::new(6, 1));
        assert_eq!(validator.swap_creates_match(&mut g, hit), Ok(true));
        assert_eq!(g, before);
        assert_eq!(validator.swap_creates_match(&mut g, miss), Ok(false));
        assert_eq!(g, before);
    }

    #[test]
    fn out_of_bounds_swap_is_an_error_and_harmless() {
        let mut g = grid("DDCKPCK PRDPRKP KPRKPRK RKPRKPR PRKPRKP KPRKPRK RKPRKPR");
        let before = g.clone();
        let result = MoveValidator::default()
            .swap_creates_match(&mut g, Swap::new(Pos::new(6, 6), Pos::new(7, 6)));
        assert_eq!(result, Err(GridError::OutOfBounds { row: 7, col: 6 }));
        assert_eq!(g, before);
    }
}
