//! History module - pairwise removal with undo and redo
//!
//! Two stacks of [`TileId`]s:
//!
//! - `removed`: every pair taken off the table, in removal order
//! - `restored`: pairs put back by undo, waiting for redo
//!
//! Both only ever change two entries at a time. A tile is on the board, on
//! `removed`, or on `restored`, never in two places. A fresh player removal
//! empties `restored`; a redo replays through the same removal path without
//! doing so.

use tracing::{debug, warn};

use crate::board::{Board, TileId};
use crate::error::MahjongError;

/// Who asked for a removal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// A fresh move; invalidates pending redos
    Player,
    /// Redo replaying an undone pair
    Replay,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryEngine {
    removed: Vec<TileId>,
    restored: Vec<TileId>,
}

impl HistoryEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a pair off `board` and record it
    ///
    /// The caller has already checked openness and matching. `other` is pushed
    /// first and `initiating` last, so undo pops the initiating tile first.
    /// Nothing changes unless both tiles are on the board.
    pub fn remove_pair(
        &mut self,
        board: &mut Board,
        initiating: TileId,
        other: TileId,
        origin: Removal,
    ) -> Result<(), MahjongError> {
        let init_pos = present_position(board, initiating)?;
        let other_pos = present_position(board, other)?;
        if initiating == other {
            return Err(MahjongError::SameTile { position: init_pos });
        }

        board.remove(other_pos)?;
        board.remove(init_pos)?;
        self.removed.push(other);
        self.removed.push(initiating);

        if origin == Removal::Player {
            self.restored.clear();
        }

        debug!(%init_pos, %other_pos, ?origin, remaining = board.remaining(), "pair removed");
        Ok(())
    }

    /// Put the last removed pair back on the board
    ///
    /// Returns false when fewer than two tiles have been removed.
    pub fn undo(&mut self, board: &mut Board) -> bool {
        let n = self.removed.len();
        if n < 2 {
            return false;
        }
        let (first, second) = (self.removed[n - 1], self.removed[n - 2]);
        if board.is_present(first) || board.is_present(second) {
            warn!(?first, ?second, "undo target already on the board");
            return false;
        }

        self.removed.truncate(n - 2);
        for id in [first, second] {
            if let Err(err) = board.restore(id) {
                // Unreachable while the stacks and the board agree.
                warn!(%err, "undo could not restore tile");
            }
        }
        self.restored.push(second);
        self.restored.push(first);

        debug!(remaining = board.remaining(), "pair restored");
        true
    }

    /// Remove the last undone pair again
    ///
    /// Returns false when there is nothing to redo.
    pub fn redo(&mut self, board: &mut Board) -> bool {
        let n = self.restored.len();
        if n < 2 {
            debug!("no redo");
            return false;
        }
        let (initiating, other) = (self.restored[n - 1], self.restored[n - 2]);
        if !board.is_present(initiating) || !board.is_present(other) {
            warn!(?initiating, ?other, "redo target no longer on the board");
            return false;
        }

        self.restored.truncate(n - 2);
        match self.remove_pair(board, initiating, other, Removal::Replay) {
            Ok(()) => true,
            Err(err) => {
                warn!(%err, "redo failed");
                self.restored.push(other);
                self.restored.push(initiating);
                false
            }
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.removed.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.restored.is_empty()
    }

    /// Removed tiles, oldest first
    pub fn removed(&self) -> &[TileId] {
        &self.removed
    }

    /// Undone tiles awaiting redo, oldest first
    pub fn restored(&self) -> &[TileId] {
        &self.restored
    }

    pub fn clear(&mut self) {
        self.removed.clear();
        self.restored.clear();
    }
}

fn present_position(board: &Board, id: TileId) -> Result<crate::types::Position, MahjongError> {
    match board.position_of(id) {
        Some(pos) => Ok(pos),
        None => match board.tile(id) {
            Some(tile) => Err(MahjongError::NotFound { position: tile.home }),
            None => Err(MahjongError::UnknownTile { index: id.index() }),
        },
    }
}
