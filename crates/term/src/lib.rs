//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal play. It avoids widget toolkits and
//! renders into a plain framebuffer that is diffed and flushed to the
//! terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Redraw only what changed between frames
//! - Allow precise control over aspect ratio (3 columns per board cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_match3_core as core;
pub use tui_match3_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, PlayerView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, DirtySpans, Span, TerminalRenderer};
