//! Front-end controller: routes keys to the session and manages overlays.
//!
//! Kept free of terminal I/O so whole games can be driven from tests; the
//! binary only polls events, feeds them in, and renders.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};
use tracing::{debug, info};

use crate::core::{GameSession, MahjongError, SelectOutcome};
use crate::input::{handle_key_event, should_quit, yes_no, NumberPrompt, PromptEvent};
use crate::term::{Overlay, ViewState};
use crate::types::{GameAction, Position, HINT_FLASH_MS};

/// How long the loop may sleep when nothing is scheduled.
const IDLE_POLL: Duration = Duration::from_millis(500);

/// Whether the game loop keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App {
    session: GameSession,
    view: ViewState,
    prompt: NumberPrompt,
    hint_until: Option<Instant>,
}

impl App {
    pub fn new(session: GameSession) -> Self {
        let mut app = Self {
            session,
            view: ViewState::default(),
            prompt: NumberPrompt::new(),
            hint_until: None,
        };
        app.check_fresh_deal();
        app
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    /// Time until the loop has something to do without input.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        match self.hint_until {
            Some(deadline) => deadline.saturating_duration_since(now).min(IDLE_POLL),
            None => IDLE_POLL,
        }
    }

    /// Expire the hint highlight.
    pub fn tick(&mut self, now: Instant) {
        if self.hint_until.is_some_and(|deadline| now >= deadline) {
            self.session.clear_hint();
            self.hint_until = None;
        }
    }

    /// Handle one key press.
    ///
    /// Only a fatal dealing error is returned; rejected moves become a status
    /// message.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Result<Flow, MahjongError> {
        match self.view.overlay {
            Overlay::None => self.handle_board_key(key, now),
            Overlay::Help => {
                self.view.overlay = Overlay::None;
                Ok(Flow::Continue)
            }
            Overlay::NumberPrompt { .. } => self.handle_prompt_key(key),
            Overlay::HintConfirm => {
                match yes_no(key) {
                    Some(true) => {
                        self.view.overlay = Overlay::None;
                        self.show_hint(now);
                    }
                    Some(false) => self.view.overlay = Overlay::None,
                    None => {}
                }
                Ok(Flow::Continue)
            }
            Overlay::AbandonConfirm { action } => {
                match yes_no(key) {
                    Some(true) => {
                        self.view.overlay = Overlay::None;
                        self.leave_game(action)?;
                    }
                    Some(false) => self.view.overlay = Overlay::None,
                    None => {}
                }
                Ok(Flow::Continue)
            }
            Overlay::Stuck | Overlay::Won => self.handle_end_key(key),
        }
    }

    fn handle_board_key(&mut self, key: KeyEvent, now: Instant) -> Result<Flow, MahjongError> {
        if should_quit(key) {
            return Ok(Flow::Quit);
        }
        let Some(action) = handle_key_event(key) else {
            return Ok(Flow::Continue);
        };
        self.apply_action(action, now)?;
        Ok(Flow::Continue)
    }

    /// Apply a board action; the hint highlight reverts on any of them.
    pub fn apply_action(&mut self, action: GameAction, now: Instant) -> Result<(), MahjongError> {
        self.session.clear_hint();
        self.hint_until = None;
        self.view.message = None;

        match action {
            GameAction::CursorLeft
            | GameAction::CursorRight
            | GameAction::CursorUp
            | GameAction::CursorDown => {
                self.view.cursor.apply(action);
            }
            GameAction::Select => self.select_at_cursor(),
            GameAction::Undo => {
                if !self.session.undo() {
                    self.say("Nothing to undo");
                }
            }
            GameAction::Redo => {
                if self.session.redo() {
                    self.show_end_state(self.session.is_won(), self.session.is_stuck());
                } else {
                    self.say("Nothing to redo");
                }
            }
            GameAction::Hint => {
                if self.session.hint_used() {
                    self.show_hint(now);
                } else {
                    self.view.overlay = Overlay::HintConfirm;
                }
            }
            GameAction::NewGame | GameAction::NumberedGame | GameAction::Restart => {
                if self.session.can_undo() {
                    self.view.overlay = Overlay::AbandonConfirm { action };
                } else {
                    self.leave_game(action)?;
                }
            }
            GameAction::Help => self.view.overlay = Overlay::Help,
        }
        Ok(())
    }

    /// Run a confirmed new game, numbered game or restart.
    fn leave_game(&mut self, action: GameAction) -> Result<(), MahjongError> {
        match action {
            GameAction::NewGame => self.deal(None)?,
            GameAction::NumberedGame => {
                self.prompt.clear();
                self.view.overlay = Overlay::NumberPrompt {
                    buffer: String::new(),
                };
            }
            GameAction::Restart => {
                self.session.restart()?;
                info!(game_number = self.session.game_number(), "restarted");
                self.check_fresh_deal();
            }
            _ => {}
        }
        Ok(())
    }

    fn select_at_cursor(&mut self) {
        let cursor = self.view.cursor;
        let Some(pos) = self
            .session
            .board()
            .top_at(cursor.x, cursor.y)
            .map(|t| t.home)
        else {
            self.say("No tile here");
            return;
        };
        self.select(pos);
    }

    fn select(&mut self, pos: Position) {
        match self.session.attempt_select(pos) {
            Ok(SelectOutcome::Removed(removal)) => self.show_end_state(removal.won, removal.stuck),
            Ok(outcome) => debug!(?outcome, "selection changed"),
            Err(err) => self.say(&err.to_string()),
        }
    }

    fn show_end_state(&mut self, won: bool, stuck: bool) {
        if won {
            self.view.overlay = Overlay::Won;
        } else if stuck {
            self.view.overlay = Overlay::Stuck;
        }
    }

    fn show_hint(&mut self, now: Instant) {
        if self.session.hint(true) {
            self.hint_until = Some(now + Duration::from_millis(HINT_FLASH_MS as u64));
        } else {
            self.view.overlay = Overlay::Stuck;
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) -> Result<Flow, MahjongError> {
        match self.prompt.handle_key(key) {
            PromptEvent::Pending => {
                self.view.overlay = Overlay::NumberPrompt {
                    buffer: self.prompt.buffer().to_string(),
                };
            }
            PromptEvent::Cancel => self.view.overlay = Overlay::None,
            PromptEvent::Submit(text) => match GameSession::parse_game_number(&text) {
                Ok(number) => {
                    self.view.overlay = Overlay::None;
                    self.deal(Some(number))?;
                }
                Err(err) => {
                    self.say(&err.to_string());
                    self.view.overlay = Overlay::NumberPrompt {
                        buffer: String::new(),
                    };
                }
            },
        }
        Ok(Flow::Continue)
    }

    fn handle_end_key(&mut self, key: KeyEvent) -> Result<Flow, MahjongError> {
        if should_quit(key) {
            return Ok(Flow::Quit);
        }
        match key.code {
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.view.overlay = Overlay::None;
                self.deal(None)?;
            }
            // Cancel leaves the stuck board up so the player can undo.
            KeyCode::Esc if self.view.overlay == Overlay::Stuck => {
                self.view.overlay = Overlay::None;
            }
            _ => {}
        }
        Ok(Flow::Continue)
    }

    fn deal(&mut self, game_number: Option<u32>) -> Result<(), MahjongError> {
        self.session = GameSession::new_game(game_number)?;
        self.hint_until = None;
        self.say(&format!("Game {}", self.session.game_number()));
        self.check_fresh_deal();
        Ok(())
    }

    fn check_fresh_deal(&mut self) {
        self.view.overlay = if self.session.is_stuck() {
            Overlay::Stuck
        } else {
            Overlay::None
        };
    }

    fn say(&mut self, message: &str) {
        self.view.message = Some(message.to_string());
    }
}
