//! Layout module - the turtle shape
//!
//! The layout is a fixed walk over 144 slots, independent of the deck and of
//! the game number. Slot `i` of the walk receives card `i` of the shuffled deck.
//!
//! Walk order:
//!
//! 1. The apex `(0, 0, 0)`
//! 2. Layers `z = 1..=4`, each visited quadrant by quadrant starting at the seed
//!    `(1, 1)`, then `(1, -1)`, `(-1, -1)`, `(-1, 1)`. Inside a quadrant the
//!    cursor runs along a row until the row's half-width, then steps one row out
//!    and restarts at `|x| = 1`
//! 3. The three wing tiles on the base row `y = 0`: `x = -7`, `x = 7`, `x = 8`
//!
//! Square layers have half-width `z`. The base layer narrows with `|y|`:
//!
//! | `\|y\|` | half-width |
//! |---------|------------|
//! | 1 | 6 |
//! | 2 | 5 |
//! | 3 | 4 |
//! | 4 | 6 |

use crate::types::{Position, BASE_LAYER, DECK_SIZE};

/// Single tiles protruding from the base row, in the order they are dealt
pub const WINGS: [Position; 3] = [
    Position::new(-7, 0, BASE_LAYER),
    Position::new(7, 0, BASE_LAYER),
    Position::new(8, 0, BASE_LAYER),
];

/// Produces the ordered turtle positions
pub struct LayoutGenerator;

impl LayoutGenerator {
    /// All 144 positions in deal order
    pub fn generate() -> Vec<Position> {
        let positions: Vec<Position> = Self::walk().collect();
        debug_assert_eq!(positions.len(), DECK_SIZE);
        positions
    }

    /// Lazily walk the layout
    pub fn walk() -> LayoutCursor {
        LayoutCursor {
            next: Some(Position::APEX),
        }
    }
}

/// Horizontal half-width of row `y` on layer `z`
///
/// Rows outside a layer (including `y = 0` below the apex) have width 0.
pub fn half_width(z: i8, y: i8) -> i8 {
    if z < BASE_LAYER {
        return z;
    }
    match y.abs() {
        1 | 4 => 6,
        2 => 5,
        3 => 4,
        _ => 0,
    }
}

/// Whether `pos` is one of the wing tiles
pub fn is_wing(pos: Position) -> bool {
    WINGS.contains(&pos)
}

/// Iterator over the layout walk
#[derive(Debug, Clone)]
pub struct LayoutCursor {
    next: Option<Position>,
}

impl Iterator for LayoutCursor {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        let current = self.next?;
        self.next = advance(current);
        Some(current)
    }
}

fn advance(pos: Position) -> Option<Position> {
    if pos == Position::APEX {
        return Some(Position::new(1, 1, 1));
    }

    if pos.y == 0 {
        let idx = WINGS.iter().position(|w| *w == pos)?;
        return WINGS.get(idx + 1).copied();
    }

    let (sx, sy) = (pos.x.signum(), pos.y.signum());

    // Along the row.
    if pos.x.abs() < half_width(pos.z, pos.y) {
        return Some(Position::new(pos.x + sx, pos.y, pos.z));
    }

    // Next row out, back to the centre column. Every layer is `z` rows deep.
    if pos.y.abs() < pos.z {
        return Some(Position::new(sx, pos.y + sy, pos.z));
    }

    // Quadrant exhausted.
    let next = match (sx, sy) {
        (1, 1) => Position::new(1, -1, pos.z),
        (1, -1) => Position::new(-1, -1, pos.z),
        (-1, -1) => Position::new(-1, 1, pos.z),
        _ if pos.z < BASE_LAYER => Position::new(1, 1, pos.z + 1),
        _ => WINGS[0],
    };
    Some(next)
}
