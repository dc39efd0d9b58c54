//! TUI Mahjong (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_mahjong::{core, input, term, types}`
//! and holds the binary's controller and command-line configuration.

pub mod app;
pub mod config;

pub use tui_mahjong_core as core;
pub use tui_mahjong_input as input;
pub use tui_mahjong_term as term;
pub use tui_mahjong_types as types;
