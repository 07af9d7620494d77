//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and keeps the
//! board cursor and pending selection that turn those actions into swaps.

pub mod cursor;
pub mod map;

pub use tui_match3_types as types;

pub use cursor::Cursor;
pub use map::{handle_key_event, should_quit};
