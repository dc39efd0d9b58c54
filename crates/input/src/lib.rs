//! Terminal input module.
//!
//! Independent of any UI framework: maps `crossterm` key events into
//! [`crate::types::GameAction`] and collects modal input (the game-number
//! prompt and yes/no confirmations).

pub mod map;
pub mod prompt;

pub use tui_mahjong_types as types;

pub use map::{handle_key_event, should_quit};
pub use prompt::{yes_no, NumberPrompt, PromptEvent};
