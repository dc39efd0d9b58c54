//! Keyboard cursor over the board's columns.

use crate::types::{GameAction, MAX_X, MAX_Y, MIN_X, MIN_Y};

/// A column `(x, y)` of the top-down view
///
/// The centre column `x = 0` only exists on the middle row (the apex), so the
/// cursor steps over it everywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardCursor {
    pub x: i8,
    pub y: i8,
}

impl BoardCursor {
    pub fn new(x: i8, y: i8) -> Self {
        let mut cursor = Self {
            x: x.clamp(MIN_X, MAX_X),
            y: y.clamp(MIN_Y, MAX_Y),
        };
        cursor.leave_centre();
        cursor
    }

    /// Apply a cursor action; returns whether the cursor moved.
    ///
    /// Other actions are ignored.
    pub fn apply(&mut self, action: GameAction) -> bool {
        let before = *self;
        match action {
            GameAction::CursorLeft => self.step_x(-1),
            GameAction::CursorRight => self.step_x(1),
            GameAction::CursorUp => self.step_y(-1),
            GameAction::CursorDown => self.step_y(1),
            _ => {}
        }
        *self != before
    }

    fn step_x(&mut self, dx: i8) {
        let mut x = self.x + dx;
        if x == 0 && self.y != 0 {
            x += dx;
        }
        if (MIN_X..=MAX_X).contains(&x) {
            self.x = x;
        }
    }

    fn step_y(&mut self, dy: i8) {
        let y = self.y + dy;
        if (MIN_Y..=MAX_Y).contains(&y) {
            self.y = y;
            self.leave_centre();
        }
    }

    fn leave_centre(&mut self) {
        if self.x == 0 && self.y != 0 {
            self.x = 1;
        }
    }
}
