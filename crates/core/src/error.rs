//! Error types for dealing and player actions.
//!
//! `ConfigurationFault` and `DuplicatePosition` abort session construction.
//! Every other variant is a rejected player action that left the board and
//! history untouched.

use derive_more::{Display, Error};

use crate::types::Position;

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MahjongError {
    /// Deck and layout disagree on the number of tiles.
    #[display("deck has {kinds} kinds but layout has {positions} positions")]
    ConfigurationFault { kinds: usize, positions: usize },

    /// The layout emitted the same slot twice.
    #[display("layout emits {position} more than once")]
    DuplicatePosition { position: Position },

    /// Nothing occupies the position.
    #[display("no tile at {position}")]
    NotFound { position: Position },

    /// The tile is covered or hemmed in on both sides.
    #[display("tile at {position} is not open")]
    NotOpen { position: Position },

    /// The two tiles are not a pair.
    #[display("tiles at {first} and {second} do not match")]
    NoMatch { first: Position, second: Position },

    /// A pair needs two different tiles.
    #[display("tile at {position} cannot pair with itself")]
    SameTile { position: Position },

    /// The handle does not belong to this deal.
    #[display("no tile with index {index} in this deal")]
    UnknownTile { index: usize },

    /// A tile is being put back onto an occupied slot.
    #[display("position {position} is already occupied")]
    Occupied { position: Position },

    /// Game numbers are one to six decimal digits.
    #[display("invalid game number {input:?}: must be one to six digits")]
    InvalidGameNumber { input: String },
}

impl MahjongError {
    /// Fatal errors cannot be recovered from inside a session.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            MahjongError::ConfigurationFault { .. } | MahjongError::DuplicatePosition { .. }
        )
    }
}
