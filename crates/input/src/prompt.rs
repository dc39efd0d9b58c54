//! Modal keyboard input: the game-number prompt and yes/no questions.
//!
//! Prompts collect raw text only. Validation of the number belongs to the core
//! session, which reports a bad entry as an error the view can show.

use crate::types::GAME_NUMBER_DIGITS;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Result of feeding one key to a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEvent {
    /// Keep prompting
    Pending,
    /// Enter was pressed with this text
    Submit(String),
    /// Esc, or Ctrl-C
    Cancel,
}

/// Digit buffer for typing a game number
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberPrompt {
    buffer: String,
}

impl NumberPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text typed so far
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Feed a key
    ///
    /// Only ASCII digits are accepted, at most six of them. Enter submits the
    /// buffer as typed, even when empty, and resets the prompt.
    pub fn handle_key(&mut self, key: KeyEvent) -> PromptEvent {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.clear();
            return PromptEvent::Cancel;
        }

        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if self.buffer.len() < GAME_NUMBER_DIGITS {
                    self.buffer.push(c);
                }
                PromptEvent::Pending
            }
            KeyCode::Backspace => {
                self.buffer.pop();
                PromptEvent::Pending
            }
            KeyCode::Enter => PromptEvent::Submit(std::mem::take(&mut self.buffer)),
            KeyCode::Esc => {
                self.clear();
                PromptEvent::Cancel
            }
            _ => PromptEvent::Pending,
        }
    }
}

/// Answer to a yes/no question; `None` for unrelated keys
pub fn yes_no(key: KeyEvent) -> Option<bool> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(true),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(false),
        _ => None,
    }
}
