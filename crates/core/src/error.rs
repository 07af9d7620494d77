//! Error types for the board engine.
//!
//! Rejected moves are not errors; they are reported through
//! [`MoveOutcome`](crate::engine::MoveOutcome). Everything here is either a
//! caller bug (bad coordinates, bad configuration) or a broken engine invariant.

use thiserror::Error;

/// Bounds violation at the grid accessor boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("position ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },
}

/// Failure to read a board from its letter notation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridParseError {
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("row {row} has {found} tiles, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown tile '{ch}' at ({row}, {col})")]
    UnknownTile { row: usize, col: usize, ch: char },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("min_match must be between 2 and {max}, got {value}")]
    MinMatch { value: usize, max: usize },
    #[error("animal_kinds must be between 3 and {max}, got {value}")]
    AnimalKinds { value: u8, max: u8 },
    #[error("max_cascade_passes must be at least 1")]
    CascadePasses,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(transparent)]
    OutOfBounds(#[from] GridError),
    /// The cascade kept finding matches past the pass cap.
    #[error("cascade did not settle after {passes} passes")]
    CascadeLimit { passes: u32 },
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
