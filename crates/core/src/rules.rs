//! Matching rule between two tile kinds.

use crate::types::TileKind;

/// Whether two kinds form a removable pair
///
/// Numerals need the same suit and rank, winds and dragons the same symbol.
/// Flower and season names are decorative: any flower pairs with any flower and
/// any season with any season.
pub fn matches(a: TileKind, b: TileKind) -> bool {
    match (a, b) {
        (TileKind::Flower(_), TileKind::Flower(_)) => true,
        (TileKind::Season(_), TileKind::Season(_)) => true,
        _ => a == b,
    }
}
