//! Session module - one game from deal to win or give-up
//!
//! [`GameSession`] owns the board, the history stacks, the current selection
//! and the hint state. Every player operation either succeeds completely or
//! returns an error with nothing changed.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, info, warn};

use crate::board::{Board, Tile, TileId};
use crate::deck::DeckBuilder;
use crate::error::MahjongError;
use crate::hint::HintSearch;
use crate::history::{HistoryEngine, Removal};
use crate::rng::SimpleRng;
use crate::rules::matches;
use crate::snapshot::{GameSnapshot, TileSnapshot};
use crate::types::{Position, TileKind, BACKDROP_COUNT, GAME_NUMBER_DIGITS, GAME_NUMBER_MODULUS};

/// A successful pair removal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairRemoval {
    /// The tile that was selected first
    pub initiating: TileId,
    pub other: TileId,
    /// The board is empty
    pub won: bool,
    /// Tiles remain but no open pair does
    pub stuck: bool,
}

/// What a click on an open tile did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Nothing was selected; now this tile is
    Selected(TileId),
    /// The selected tile was clicked again
    Deselected(TileId),
    /// A non-matching open tile took over the selection
    Reselected { from: TileId, to: TileId },
    /// The click completed a pair
    Removed(PairRemoval),
}

/// One dealt tile as seen from outside the core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileState {
    pub tile: Tile,
    /// `None` once removed
    pub position: Option<Position>,
    pub open: bool,
    pub removed: bool,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    game_number: u32,
    backdrop: u32,
    board: Board,
    history: HistoryEngine,
    selected: Option<TileId>,
    hint: Option<(TileId, TileId)>,
    hint_used: bool,
}

impl GameSession {
    /// Deal a game
    ///
    /// Without a number one is derived from the clock; read it back with
    /// [`game_number`](Self::game_number) to show the player.
    pub fn new_game(game_number: Option<u32>) -> Result<Self, MahjongError> {
        let game_number = game_number.unwrap_or_else(clock_game_number) % GAME_NUMBER_MODULUS;
        let mut rng = SimpleRng::for_game(game_number);
        let backdrop = rng.next_range(BACKDROP_COUNT);
        let deck = DeckBuilder::shuffled(&mut rng);
        let board = Board::deal(&deck)?;

        info!(game_number, backdrop, "new game dealt");
        Ok(Self::from_board(game_number, backdrop, board))
    }

    /// Deal `kinds` onto the turtle without shuffling
    ///
    /// For scripted boards; the game number is only a label here.
    pub fn from_kinds(game_number: u32, kinds: &[TileKind]) -> Result<Self, MahjongError> {
        let board = Board::deal(kinds)?;
        Ok(Self::from_board(game_number, 0, board))
    }

    fn from_board(game_number: u32, backdrop: u32, board: Board) -> Self {
        Self {
            game_number,
            backdrop,
            board,
            history: HistoryEngine::new(),
            selected: None,
            hint: None,
            hint_used: false,
        }
    }

    /// Validate a typed game number: one to six decimal digits
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_mahjong_core::GameSession;
    ///
    /// assert_eq!(GameSession::parse_game_number("000123"), Ok(123));
    /// assert!(GameSession::parse_game_number("1234567").is_err());
    /// assert!(GameSession::parse_game_number("12a").is_err());
    /// ```
    pub fn parse_game_number(input: &str) -> Result<u32, MahjongError> {
        let trimmed = input.trim();
        let valid = !trimmed.is_empty()
            && trimmed.len() <= GAME_NUMBER_DIGITS
            && trimmed.bytes().all(|b| b.is_ascii_digit());
        if !valid {
            return Err(MahjongError::InvalidGameNumber {
                input: input.to_string(),
            });
        }
        trimmed
            .parse()
            .map_err(|_| MahjongError::InvalidGameNumber {
                input: input.to_string(),
            })
    }

    /// Redeal the same number: fresh board, empty history, hint flag reset
    pub fn restart(&mut self) -> Result<(), MahjongError> {
        *self = Self::new_game(Some(self.game_number))?;
        Ok(())
    }

    pub fn game_number(&self) -> u32 {
        self.game_number
    }

    /// Index in `0..BACKDROP_COUNT`
    pub fn backdrop(&self) -> u32 {
        self.backdrop
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selected(&self) -> Option<TileId> {
        self.selected
    }

    /// The pair currently highlighted by a hint
    pub fn hint_pair(&self) -> Option<(TileId, TileId)> {
        self.hint
    }

    /// A hint has been highlighted at least once this game
    pub fn hint_used(&self) -> bool {
        self.hint_used
    }

    pub fn remaining(&self) -> usize {
        self.board.remaining()
    }

    pub fn is_won(&self) -> bool {
        self.board.is_empty()
    }

    pub fn moves_remain(&self) -> bool {
        HintSearch::any_move(&self.board)
    }

    /// Tiles remain but none can be paired
    pub fn is_stuck(&self) -> bool {
        !self.is_won() && !self.moves_remain()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Click on the tile at `pos`
    ///
    /// Absent and closed tiles are rejected and the selection stays as it was.
    pub fn attempt_select(&mut self, pos: Position) -> Result<SelectOutcome, MahjongError> {
        let (id, kind) = match self.board.tile_at(pos) {
            Some(tile) => (tile.id, tile.kind),
            None => {
                warn!(%pos, "select on empty slot");
                return Err(MahjongError::NotFound { position: pos });
            }
        };
        if !self.board.is_open(pos) {
            warn!(%pos, "select on closed tile");
            return Err(MahjongError::NotOpen { position: pos });
        }
        self.hint = None;

        let outcome = match self.selected {
            None => {
                self.selected = Some(id);
                SelectOutcome::Selected(id)
            }
            Some(current) if current == id => {
                self.selected = None;
                SelectOutcome::Deselected(id)
            }
            Some(current) => match self.board.position_of(current) {
                Some(from) if self.board.tile(current).is_some_and(|t| matches(t.kind, kind)) => {
                    SelectOutcome::Removed(self.attempt_remove_pair(from, pos)?)
                }
                _ => {
                    self.selected = Some(id);
                    SelectOutcome::Reselected { from: current, to: id }
                }
            },
        };

        debug!(%pos, ?outcome, "select");
        Ok(outcome)
    }

    /// Remove the tiles at `a` (initiating) and `b` as a pair
    pub fn attempt_remove_pair(
        &mut self,
        a: Position,
        b: Position,
    ) -> Result<PairRemoval, MahjongError> {
        let (first, second) = match self.validate_pair(a, b) {
            Ok(pair) => pair,
            Err(err) => {
                warn!(%err, "pair rejected");
                return Err(err);
            }
        };

        self.history
            .remove_pair(&mut self.board, first, second, Removal::Player)?;
        self.selected = None;
        self.hint = None;

        let won = self.board.is_empty();
        let stuck = !won && !HintSearch::any_move(&self.board);
        if won {
            info!(game_number = self.game_number, "board cleared");
        } else if stuck {
            info!(game_number = self.game_number, remaining = self.remaining(), "no moves left");
        }

        Ok(PairRemoval {
            initiating: first,
            other: second,
            won,
            stuck,
        })
    }

    fn validate_pair(&self, a: Position, b: Position) -> Result<(TileId, TileId), MahjongError> {
        let first = self
            .board
            .tile_at(a)
            .ok_or(MahjongError::NotFound { position: a })?;
        let second = self
            .board
            .tile_at(b)
            .ok_or(MahjongError::NotFound { position: b })?;
        if first.id == second.id {
            return Err(MahjongError::SameTile { position: a });
        }
        for pos in [a, b] {
            if !self.board.is_open(pos) {
                return Err(MahjongError::NotOpen { position: pos });
            }
        }
        if !matches(first.kind, second.kind) {
            return Err(MahjongError::NoMatch {
                first: a,
                second: b,
            });
        }
        Ok((first.id, second.id))
    }

    /// Put the last pair back; false when there is nothing to undo
    pub fn undo(&mut self) -> bool {
        self.selected = None;
        self.hint = None;
        self.history.undo(&mut self.board)
    }

    /// Remove the last undone pair again; false when there is nothing to redo
    pub fn redo(&mut self) -> bool {
        self.selected = None;
        self.hint = None;
        self.history.redo(&mut self.board)
    }

    /// Look for an open pair
    ///
    /// With `highlight` the pair is remembered for display and the game is
    /// marked as assisted. Without it this is only the "moves remain" check.
    pub fn hint(&mut self, highlight: bool) -> bool {
        let found = HintSearch::find_match(&self.board, false);
        if highlight {
            self.hint = found;
            if found.is_some() && !self.hint_used {
                self.hint_used = true;
                info!(game_number = self.game_number, "hint used");
            }
        }
        found.is_some()
    }

    /// Drop the hint highlight
    pub fn clear_hint(&mut self) {
        self.hint = None;
    }

    /// Every dealt tile with its current state, in deal order
    pub fn all_tiles(&self) -> impl Iterator<Item = TileState> + '_ {
        self.board.tiles().map(|tile| {
            let position = self.board.position_of(tile.id);
            TileState {
                tile: *tile,
                position,
                open: position.is_some_and(|p| self.board.is_open(p)),
                removed: position.is_none(),
            }
        })
    }

    /// Removed tiles, oldest first
    pub fn removed_order(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.history
            .removed()
            .iter()
            .filter_map(|id| self.board.tile(*id))
    }

    /// Serializable view of the whole game
    pub fn snapshot(&self) -> GameSnapshot {
        let hinted = |id: TileId| self.hint.is_some_and(|(a, b)| a == id || b == id);
        let tiles = self
            .all_tiles()
            .map(|state| TileSnapshot {
                index: state.tile.id.index(),
                kind: state.tile.kind,
                position: state.tile.home,
                open: state.open,
                present: state.position.is_some(),
                selected: self.selected == Some(state.tile.id),
                hinted: hinted(state.tile.id),
            })
            .collect();

        GameSnapshot {
            game_number: self.game_number,
            backdrop: self.backdrop,
            remaining: self.remaining(),
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
            moves_remain: self.moves_remain(),
            won: self.is_won(),
            hint_used: self.hint_used,
            removed: self.removed_order().map(|t| t.kind).collect(),
            tiles,
        }
    }
}

/// Wall-clock milliseconds reduced to a game number
pub fn clock_game_number() -> u32 {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    (millis % GAME_NUMBER_MODULUS as u128) as u32
}
