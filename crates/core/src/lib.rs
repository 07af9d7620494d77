//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the board rules for a 7x7 match-3 puzzle: match
//! detection, cascade resolution, valid-move search, and scoring. It has
//! **zero dependencies** on UI or terminal I/O; the only side channel is
//! `tracing` events, which cost nothing when no subscriber is installed.
//!
//! # Module Structure
//!
//! - [`grid`]: 7x7 tile storage with bounds-checked access and trial swaps
//! - [`matcher`]: row/column run detection and the per-pass match set
//! - [`cascade`]: clear, gravity, refill loop with a hard pass cap
//! - [`validator`]: search for a swap that would create a match
//! - [`connectivity`]: flood fill over same-kind regions
//! - [`engine`]: [`BoardEngine`], which owns score and the move budget
//! - [`rng`]: deterministic tile source
//! - [`config`]: rule set and environment overrides
//!
//! # Game Rules
//!
//! - A swap is legal only between orthogonal neighbors and only if it creates
//!   a run of 3 or more equal animals in a row or column
//! - Every matched tile is removed, columns fall, and new tiles drop in from
//!   the top; this repeats until the board is still
//! - Each pass scores 10 points per distinct tile removed
//! - The game ends when the 30-move budget is spent or no legal swap remains
//!
//! # Example
//!
//! ```
//! use tui_match3_core::{BoardEngine, MoveOutcome};
//!
//! let mut engine = BoardEngine::new(12345).unwrap();
//! assert_eq!(engine.score(), 0);
//! assert_eq!(engine.moves_left(), 30);
//!
//! if let Some(swap) = engine.hint().unwrap() {
//!     let outcome = engine.attempt_move(swap.a, swap.b).unwrap();
//!     assert!(matches!(outcome, MoveOutcome::Accepted(_)));
//!     assert!(engine.score() >= 30);
//!     assert_eq!(engine.moves_left(), 29);
//! }
//! ```

pub mod cascade;
pub mod config;
pub mod connectivity;
pub mod engine;
pub mod error;
pub mod grid;
pub mod matcher;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod validator;

pub use tui_match3_types as types;

// Re-export commonly used types for convenience
pub use cascade::{CascadeReport, CascadeResolver};
pub use config::GameConfig;
pub use connectivity::{count_connected, largest_region, Region, VisitedMask};
pub use engine::{BoardEngine, MoveOutcome, MoveReport, RejectReason};
pub use error::{ConfigError, EngineError, GridError, GridParseError};
pub use grid::{Grid, TrialSwap};
pub use matcher::{MatchFinder, MatchSet, Run};
pub use rng::{SimpleRng, TileSource};
pub use scoring::pass_score;
pub use snapshot::GameSnapshot;
pub use validator::MoveValidator;
