//! Board module - tile arena and occupancy map
//!
//! Tiles live in an arena indexed by [`TileId`] in deal order. The occupancy
//! map says which of them are currently on the table. Removing a tile only
//! drops it from the map, so the same `TileId` (and its remembered slot) can be
//! put back by undo.
//!
//! # Openness
//!
//! A tile is open when nothing sits on it (the slot at `z - 1`) and at least one
//! long side is free:
//!
//! - the neighbour at `x ± 1` on the same row and layer is empty
//! - at `x = ±1` the neighbour across the missing centre column (`x ∓ 1`) is empty too
//! - on rows `|y| = 1` the neighbour's slot on row 0 (a wing) is empty
//! - on row 0 the neighbour's slots on rows 1 and -1 are empty
//!
//! While the apex is on the board it caps the four `|x| = |y| = 1` tiles of
//! every layer.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::MahjongError;
use crate::layout::LayoutGenerator;
use crate::types::{Position, TileKind};

/// Stable handle of a tile within one deal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TileId(usize);

impl TileId {
    /// Position of the tile in deal order
    pub fn index(self) -> usize {
        self.0
    }
}

/// One physical piece
///
/// `home` is assigned at deal time and never changes; whether the tile is on
/// the table is a property of the [`Board`], not of the tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tile {
    pub id: TileId,
    pub kind: TileKind,
    pub home: Position,
}

/// The table: every dealt tile plus the map of occupied slots
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    tiles: Vec<Tile>,
    occupancy: HashMap<Position, TileId>,
}

impl Board {
    /// Zip kinds and positions index by index
    ///
    /// Fails when the sequences differ in length or a position repeats; both
    /// mean the deck or layout is misconfigured.
    pub fn assign(kinds: &[TileKind], positions: &[Position]) -> Result<Self, MahjongError> {
        if kinds.len() != positions.len() {
            return Err(MahjongError::ConfigurationFault {
                kinds: kinds.len(),
                positions: positions.len(),
            });
        }

        let mut tiles = Vec::with_capacity(kinds.len());
        let mut occupancy = HashMap::with_capacity(kinds.len());

        for (idx, (&kind, &home)) in kinds.iter().zip(positions).enumerate() {
            let id = TileId(idx);
            if occupancy.insert(home, id).is_some() {
                return Err(MahjongError::DuplicatePosition { position: home });
            }
            tiles.push(Tile { id, kind, home });
        }

        Ok(Self { tiles, occupancy })
    }

    /// Lay `kinds` out on the turtle
    pub fn deal(kinds: &[TileKind]) -> Result<Self, MahjongError> {
        Self::assign(kinds, &LayoutGenerator::generate())
    }

    /// Number of tiles still on the table
    pub fn remaining(&self) -> usize {
        self.occupancy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupancy.is_empty()
    }

    pub fn is_occupied(&self, pos: Position) -> bool {
        self.occupancy.contains_key(&pos)
    }

    pub fn tile_at(&self, pos: Position) -> Option<&Tile> {
        self.occupancy.get(&pos).map(|id| &self.tiles[id.0])
    }

    /// Arena lookup, present or not
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.0)
    }

    pub fn is_present(&self, id: TileId) -> bool {
        self.tile(id)
            .is_some_and(|t| self.occupancy.get(&t.home) == Some(&id))
    }

    /// Current slot of the tile, `None` once removed
    pub fn position_of(&self, id: TileId) -> Option<Position> {
        if self.is_present(id) {
            self.tile(id).map(|t| t.home)
        } else {
            None
        }
    }

    /// Every dealt tile in deal order
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Tiles on the table in deal order
    pub fn present(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(|t| self.is_present(t.id))
    }

    /// Open tiles in deal order
    pub fn open_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.present().filter(|t| self.is_open(t.home))
    }

    /// The shallowest tile stacked on column `(x, y)`
    pub fn top_at(&self, x: i8, y: i8) -> Option<&Tile> {
        (0..crate::types::LAYER_COUNT).find_map(|z| self.tile_at(Position::new(x, y, z)))
    }

    /// Whether the tile at `pos` can be picked
    ///
    /// Empty slots are never open.
    pub fn is_open(&self, pos: Position) -> bool {
        if !self.is_occupied(pos) || self.is_occupied(pos.above()) {
            return false;
        }
        if pos.x.abs() == 1 && pos.y.abs() == 1 && self.is_occupied(Position::APEX) {
            return false;
        }
        self.side_clear(pos, -1) || self.side_clear(pos, 1)
    }

    /// `dir` is -1 for the left side, 1 for the right
    fn side_clear(&self, pos: Position, dir: i8) -> bool {
        let next = pos.offset(dir, 0);
        if self.is_occupied(next) {
            return false;
        }
        if pos.x == -dir && self.is_occupied(pos.offset(2 * dir, 0)) {
            return false;
        }
        match pos.y.abs() {
            0 => !self.is_occupied(next.with_y(1)) && !self.is_occupied(next.with_y(-1)),
            1 => !self.is_occupied(next.with_y(0)),
            _ => true,
        }
    }

    /// Take the tile at `pos` off the table
    pub fn remove(&mut self, pos: Position) -> Result<TileId, MahjongError> {
        self.occupancy
            .remove(&pos)
            .ok_or(MahjongError::NotFound { position: pos })
    }

    /// Put a removed tile back on its remembered slot
    pub fn restore(&mut self, id: TileId) -> Result<Position, MahjongError> {
        let home = self
            .tile(id)
            .map(|t| t.home)
            .ok_or(MahjongError::UnknownTile { index: id.0 })?;
        if self.is_occupied(home) {
            return Err(MahjongError::Occupied { position: home });
        }
        self.occupancy.insert(home, id);
        Ok(home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Suit;

    fn bamboo(rank: u8) -> TileKind {
        TileKind::Numeral {
            suit: Suit::Bamboo,
            rank,
        }
    }

    fn board_with(positions: &[Position]) -> Board {
        let kinds: Vec<TileKind> = positions.iter().map(|_| bamboo(1)).collect();
        Board::assign(&kinds, positions).unwrap()
    }

    #[test]
    fn test_assign_rejects_length_mismatch() {
        let err = Board::assign(&[bamboo(1)], &[]).unwrap_err();
        assert_eq!(
            err,
            MahjongError::ConfigurationFault {
                kinds: 1,
                positions: 0
            }
        );
        assert!(err.is_fatal());
    }

    #[test]
    fn test_assign_rejects_duplicate_positions() {
        let p = Position::new(2, 2, 2);
        let err = Board::assign(&[bamboo(1), bamboo(2)], &[p, p]).unwrap_err();
        assert_eq!(err, MahjongError::DuplicatePosition { position: p });
    }

    #[test]
    fn test_empty_slot_is_not_open() {
        let board = board_with(&[Position::APEX]);
        assert!(!board.is_open(Position::new(5, 5, 4)));
    }

    #[test]
    fn test_covered_tile_is_closed() {
        let board = board_with(&[Position::new(3, 3, 3), Position::new(3, 3, 2)]);
        assert!(!board.is_open(Position::new(3, 3, 3)));
        assert!(board.is_open(Position::new(3, 3, 2)));
    }

    #[test]
    fn test_hemmed_in_tile_is_closed() {
        let board = board_with(&[
            Position::new(2, 3, 4),
            Position::new(3, 3, 4),
            Position::new(4, 3, 4),
        ]);
        assert!(board.is_open(Position::new(2, 3, 4)));
        assert!(!board.is_open(Position::new(3, 3, 4)));
        assert!(board.is_open(Position::new(4, 3, 4)));
    }

    #[test]
    fn test_centre_gap_counts_as_adjacent() {
        let board = board_with(&[
            Position::new(-1, 2, 4),
            Position::new(1, 2, 4),
            Position::new(2, 2, 4),
        ]);
        // (1, 2) has (-1, 2) across the gap and (2, 2) to its right.
        assert!(!board.is_open(Position::new(1, 2, 4)));
        assert!(board.is_open(Position::new(-1, 2, 4)));
    }

    #[test]
    fn test_wing_blocks_end_of_middle_rows() {
        let mut board = board_with(&[
            Position::new(-7, 0, 4),
            Position::new(-6, 1, 4),
            Position::new(-5, 1, 4),
        ]);
        assert!(!board.is_open(Position::new(-6, 1, 4)));
        board.remove(Position::new(-7, 0, 4)).unwrap();
        assert!(board.is_open(Position::new(-6, 1, 4)));
    }

    #[test]
    fn test_wing_row_needs_both_neighbour_rows_clear() {
        let mut board = board_with(&[
            Position::new(7, 0, 4),
            Position::new(8, 0, 4),
            Position::new(6, 1, 4),
        ]);
        assert!(!board.is_open(Position::new(7, 0, 4)));
        assert!(board.is_open(Position::new(8, 0, 4)));
        board.remove(Position::new(6, 1, 4)).unwrap();
        assert!(board.is_open(Position::new(7, 0, 4)));
    }

    #[test]
    fn test_apex_caps_quadrant_seeds() {
        let seeds = [
            Position::new(1, 1, 1),
            Position::new(1, -1, 1),
            Position::new(-1, -1, 1),
            Position::new(-1, 1, 1),
        ];
        let mut all = vec![Position::APEX];
        all.extend_from_slice(&seeds);
        let mut board = board_with(&all);

        assert!(board.is_open(Position::APEX));
        for seed in seeds {
            assert!(!board.is_open(seed), "{} should be capped", seed);
        }

        board.remove(Position::APEX).unwrap();
        for seed in seeds {
            assert!(board.is_open(seed), "{} should be open", seed);
        }
    }

    #[test]
    fn test_remove_and_restore_keep_identity() {
        let mut board = board_with(&[Position::APEX, Position::new(1, 1, 1)]);
        let id = board.remove(Position::APEX).unwrap();
        assert_eq!(id.index(), 0);
        assert!(!board.is_present(id));
        assert_eq!(board.position_of(id), None);
        assert_eq!(board.remaining(), 1);

        assert_eq!(board.restore(id), Ok(Position::APEX));
        assert_eq!(board.tile_at(Position::APEX).map(|t| t.id), Some(id));
        assert_eq!(
            board.restore(id),
            Err(MahjongError::Occupied {
                position: Position::APEX
            })
        );
    }

    #[test]
    fn test_remove_missing_is_not_found() {
        let mut board = board_with(&[Position::APEX]);
        let pos = Position::new(1, 1, 1);
        assert_eq!(
            board.remove(pos),
            Err(MahjongError::NotFound { position: pos })
        );
        assert_eq!(board.remaining(), 1);
    }

    #[test]
    fn test_top_at_returns_shallowest() {
        let board = board_with(&[Position::new(2, 2, 4), Position::new(2, 2, 3)]);
        assert_eq!(board.top_at(2, 2).map(|t| t.home.z), Some(3));
        assert!(board.top_at(0, 4).is_none());
    }
}
