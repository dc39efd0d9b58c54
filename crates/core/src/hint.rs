//! Hint module - search for an open matching pair
//!
//! The same scan answers two questions: which pair to highlight for the player,
//! and whether any move is left after a removal.

use arrayvec::ArrayVec;
use tracing::debug;

use crate::board::{Board, TileId};
use crate::rules::matches;
use crate::types::{TileKind, DECK_SIZE};

pub struct HintSearch;

impl HintSearch {
    /// First open matching pair, or `None` when the board is stuck
    ///
    /// Open tiles are visited in deal order; each one is compared with the open
    /// tiles dealt before it. The pair is `(later, earlier)`.
    ///
    /// `best_move` asks for the most useful pair instead of the first one. No
    /// ranking exists yet, so both modes return the first pair found.
    pub fn find_match(board: &Board, best_move: bool) -> Option<(TileId, TileId)> {
        let open: ArrayVec<(TileId, TileKind), DECK_SIZE> = board
            .open_tiles()
            .take(DECK_SIZE)
            .map(|t| (t.id, t.kind))
            .collect();

        for (i, &(later, kind)) in open.iter().enumerate() {
            if let Some(&(earlier, _)) = open[..i].iter().find(|(_, k)| matches(kind, *k)) {
                debug!(
                    later = later.index(),
                    earlier = earlier.index(),
                    open = open.len(),
                    best_move,
                    "hint found"
                );
                return Some((later, earlier));
            }
        }

        debug!(open = open.len(), "no open pair");
        None
    }

    /// Whether the player can still remove a pair
    pub fn any_move(board: &Board) -> bool {
        Self::find_match(board, false).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Flower, Position, Season, Suit, Wind};

    fn numeral(suit: Suit, rank: u8) -> TileKind {
        TileKind::Numeral { suit, rank }
    }

    fn row(kinds: &[TileKind]) -> Board {
        // Spread along y = 3 with gaps so every tile is open.
        let positions: Vec<Position> = (0..kinds.len())
            .map(|i| Position::new(2 + 2 * i as i8, 3, 4))
            .collect();
        Board::assign(kinds, &positions).unwrap()
    }

    #[test]
    fn test_finds_first_pair_in_deal_order() {
        let board = row(&[
            numeral(Suit::Circle, 1),
            TileKind::Wind(Wind::East),
            TileKind::Wind(Wind::East),
            numeral(Suit::Circle, 1),
        ]);
        let (later, earlier) = HintSearch::find_match(&board, false).unwrap();
        assert_eq!((later.index(), earlier.index()), (2, 1));
    }

    #[test]
    fn test_best_move_agrees_with_first_found() {
        let board = row(&[
            TileKind::Flower(Flower::Orchid),
            TileKind::Season(Season::Fall),
            TileKind::Flower(Flower::Plum),
        ]);
        assert_eq!(
            HintSearch::find_match(&board, true),
            HintSearch::find_match(&board, false)
        );
        let (later, earlier) = HintSearch::find_match(&board, true).unwrap();
        assert_eq!((later.index(), earlier.index()), (2, 0));
    }

    #[test]
    fn test_closed_tiles_are_ignored() {
        let kinds = [
            numeral(Suit::Bamboo, 5),
            numeral(Suit::Bamboo, 5),
            numeral(Suit::Bamboo, 7),
        ];
        // The middle tile is hemmed in.
        let positions = [
            Position::new(2, 3, 4),
            Position::new(3, 3, 4),
            Position::new(4, 3, 4),
        ];
        let board = Board::assign(&kinds, &positions).unwrap();
        assert!(!board.is_open(Position::new(3, 3, 4)));
        assert_eq!(HintSearch::find_match(&board, false), None);
        assert!(!HintSearch::any_move(&board));
    }

    #[test]
    fn test_empty_board_has_no_move() {
        let mut board = row(&[TileKind::WhiteDragon, TileKind::WhiteDragon]);
        assert!(HintSearch::any_move(&board));
        board.remove(Position::new(2, 3, 4)).unwrap();
        board.remove(Position::new(4, 3, 4)).unwrap();
        assert!(!HintSearch::any_move(&board));
    }
}
