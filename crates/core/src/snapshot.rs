use serde::Serialize;

use crate::types::{Position, TileKind};

/// One dealt tile, present or removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TileSnapshot {
    /// Deal order
    pub index: usize,
    pub kind: TileKind,
    /// Slot assigned at deal time
    pub position: Position,
    pub open: bool,
    pub present: bool,
    pub selected: bool,
    pub hinted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub game_number: u32,
    pub backdrop: u32,
    pub remaining: usize,
    pub can_undo: bool,
    pub can_redo: bool,
    pub moves_remain: bool,
    pub won: bool,
    pub hint_used: bool,
    /// Removed kinds, oldest first
    pub removed: Vec<TileKind>,
    pub tiles: Vec<TileSnapshot>,
}

impl GameSnapshot {
    /// Tiles still on the table
    pub fn present(&self) -> impl Iterator<Item = &TileSnapshot> {
        self.tiles.iter().filter(|t| t.present)
    }

    /// Whether the game still takes moves
    pub fn playable(&self) -> bool {
        !self.won && self.moves_remain
    }
}
