//! Board engine - owns the grid, score, and move budget
//!
//! This module ties together all core components: grid, match finder, cascade
//! resolver, move validator, and the tile source. It is the only writer of the
//! grid outside the cascade itself.

use tracing::{info, trace};

use crate::cascade::{CascadeReport, CascadeResolver};
use crate::config::GameConfig;
use crate::connectivity::{largest_region, Region};
use crate::error::EngineError;
use crate::grid::Grid;
use crate::rng::{SimpleRng, TileSource};
use crate::snapshot::GameSnapshot;
use crate::validator::MoveValidator;
use crate::types::{Pos, Swap};

/// Why a move was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    /// The two cells are not orthogonal neighbors
    NotAdjacent,
    /// The swap would not create any match
    NoMatch,
    /// The move budget is spent
    NoMovesLeft,
}

impl RejectReason {
    pub fn as_str(self) -> &'static str {
        match self {
            RejectReason::NotAdjacent => "not adjacent",
            RejectReason::NoMatch => "no match",
            RejectReason::NoMovesLeft => "no moves left",
        }
    }
}

/// Result of an accepted move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub swap: Swap,
    pub cascade: CascadeReport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Accepted(MoveReport),
    /// Nothing changed: grid, score, and moves are as before the call
    Rejected(RejectReason),
}

impl MoveOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted(_))
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct BoardEngine<S = SimpleRng> {
    grid: Grid,
    score: u32,
    moves_left: u32,
    config: GameConfig,
    resolver: CascadeResolver,
    validator: MoveValidator,
    source: S,
}

impl BoardEngine<SimpleRng> {
    /// Create a new game with the given RNG seed and default rules
    pub fn new(seed: u32) -> Result<Self, EngineError> {
        Self::with_config(GameConfig::default().with_seed(seed))
    }

    /// Create a new game seeded from `config.seed`
    pub fn with_config(config: GameConfig) -> Result<Self, EngineError> {
        let source = SimpleRng::new(config.seed);
        Self::with_source(config, source)
    }
}

impl<S: TileSource> BoardEngine<S> {
    /// Create a game drawing tiles from `source`, then fill and settle the board
    pub fn with_source(config: GameConfig, source: S) -> Result<Self, EngineError> {
        let mut engine = Self::assemble(config, Grid::new(), source)?;
        engine.initialize()?;
        Ok(engine)
    }

    /// Wrap an existing board as-is, without filling or settling it.
    ///
    /// Score starts at 0 and moves at `config.initial_moves`.
    pub fn from_grid(config: GameConfig, grid: Grid, source: S) -> Result<Self, EngineError> {
        Self::assemble(config, grid, source)
    }

    fn assemble(config: GameConfig, grid: Grid, source: S) -> Result<Self, EngineError> {
        config.validate()?;
        let resolver = CascadeResolver::new(&config);
        let validator = MoveValidator::new(*resolver.finder());
        Ok(Self {
            grid,
            score: 0,
            moves_left: config.initial_moves,
            config,
            resolver,
            validator,
            source,
        })
    }

    /// Fill every cell at random and clear any matches that fell out of it.
    ///
    /// Matches removed here are not the player's doing, so score resets to 0.
    pub fn initialize(&mut self) -> Result<(), EngineError> {
        for pos in Grid::positions() {
            let tile = self.source.next_tile(self.config.animal_kinds);
            self.grid.set(pos, tile)?;
        }
        let cleanup = self.resolver.resolve(&mut self.grid, &mut self.source)?;

        self.score = 0;
        self.moves_left = self.config.initial_moves;
        info!(
            seed = self.config.seed,
            cleanup_passes = cleanup.passes,
            cleanup_removed = cleanup.removed,
            "board initialized"
        );
        Ok(())
    }

    /// Swap two cells and resolve the resulting cascade.
    ///
    /// Out-of-bounds coordinates are an error. Every other refusal is a
    /// [`MoveOutcome::Rejected`] that leaves the engine exactly as it was.
    pub fn attempt_move(&mut self, a: Pos, b: Pos) -> Result<MoveOutcome, EngineError> {
        self.grid.get(a)?;
        self.grid.get(b)?;

        if !a.is_adjacent(b) {
            trace!(?a, ?b, "move rejected: not adjacent");
            return Ok(MoveOutcome::Rejected(RejectReason::NotAdjacent));
        }
        if self.moves_left == 0 {
            return Ok(MoveOutcome::Rejected(RejectReason::NoMovesLeft));
        }

        let before = self.grid.clone();
        let trial = self.grid.try_swap(a, b)?;
        if self.resolver.finder().find_all(trial.grid()).is_empty() {
            trace!(?a, ?b, "move rejected: no match");
            return Ok(MoveOutcome::Rejected(RejectReason::NoMatch));
        }
        trial.commit();

        // A cascade that never settles leaves the board as it was before the swap.
        let cascade = match self.resolver.resolve(&mut self.grid, &mut self.source) {
            Ok(cascade) => cascade,
            Err(err) => {
                self.grid = before;
                return Err(err);
            }
        };
        self.score = self.score.saturating_add(cascade.points);
        self.moves_left -= 1;

        info!(
            ?a,
            ?b,
            passes = cascade.passes,
            removed = cascade.removed,
            points = cascade.points,
            score = self.score,
            moves_left = self.moves_left,
            "move accepted"
        );
        Ok(MoveOutcome::Accepted(MoveReport {
            swap: Swap::new(a, b),
            cascade,
        }))
    }

    /// Convenience form of [`attempt_move`](Self::attempt_move) taking a [`Swap`]
    pub fn apply_swap(&mut self, swap: Swap) -> Result<MoveOutcome, EngineError> {
        self.attempt_move(swap.a, swap.b)
    }
}

impl<S> BoardEngine<S> {
    /// True when the move budget is spent or no swap anywhere would match
    pub fn is_terminal(&self) -> Result<bool, EngineError> {
        if self.moves_left == 0 {
            return Ok(true);
        }
        Ok(self.hint()?.is_none())
    }

    /// First swap (row-major) that would produce a match.
    ///
    /// Works on a scratch copy so the live grid is never touched.
    pub fn hint(&self) -> Result<Option<Swap>, EngineError> {
        let mut scratch = self.grid.clone();
        Ok(self.validator.find_valid_move(&mut scratch)?)
    }

    pub fn largest_region(&self) -> Result<Option<Region>, EngineError> {
        Ok(largest_region(&self.grid)?)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves_left(&self) -> u32 {
        self.moves_left
    }

    pub fn seed(&self) -> u32 {
        self.config.seed
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) -> Result<(), EngineError> {
        let hint = self.hint()?;
        out.board = self.grid.to_rows();
        out.score = self.score;
        out.moves_left = self.moves_left;
        out.game_over = self.moves_left == 0 || hint.is_none();
        out.seed = self.config.seed;
        out.hint = hint;
        out.largest_region = self.largest_region()?;
        Ok(())
    }

    pub fn snapshot(&self) -> Result<GameSnapshot, EngineError> {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s)?;
        Ok(s)
    }
}
