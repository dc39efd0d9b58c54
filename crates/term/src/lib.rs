//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal play. It avoids widget toolkits and
//! renders into a plain framebuffer that is diffed and flushed to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep view code pure so it can be tested without a terminal
//! - Control the aspect ratio of board cells directly

pub mod cursor;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_mahjong_core as core;
pub use tui_mahjong_types as types;

pub use cursor::BoardCursor;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Overlay, ViewState, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
