//! Core game logic - pure, deterministic, and testable
//!
//! Everything needed to deal and play a turtle layout of Mahjong solitaire.
//! There are **no dependencies** on the terminal or any other I/O:
//!
//! - **Deterministic**: the same game number always deals the same board
//! - **Testable**: every rule is a plain function over a [`Board`]
//! - **Portable**: drive it from the terminal, a script, or a test
//!
//! # Module Structure
//!
//! - [`rng`]: seeded LCG owned by each session
//! - [`deck`]: the 144-kind rule-set deck and its shuffle
//! - [`layout`]: the fixed walk over the turtle's 144 slots
//! - [`board`]: tile arena, occupancy and the openness rule
//! - [`rules`]: the matching predicate
//! - [`history`]: pairwise removal with undo and redo
//! - [`hint`]: search for an open matching pair
//! - [`session`]: one game, as driven by the player
//! - [`snapshot`]: serializable view of a session
//!
//! # Game Rules
//!
//! - **Open tile**: nothing on top and at least one long side free
//! - **Pair**: two open tiles of the same kind; any flower pairs with any
//!   flower and any season with any season
//! - **Win**: the board is empty
//! - **Stuck**: tiles remain but no open pair does
//!
//! # Example
//!
//! ```
//! use tui_mahjong_core::{GameSession, SelectOutcome};
//!
//! let mut game = GameSession::new_game(Some(123456)).unwrap();
//! assert_eq!(game.remaining(), 144);
//!
//! // Ask for a pair and take it.
//! assert!(game.hint(true));
//! let (a, b) = game.hint_pair().unwrap();
//! let pos_a = game.board().position_of(a).unwrap();
//! let pos_b = game.board().position_of(b).unwrap();
//!
//! game.attempt_select(pos_a).unwrap();
//! let outcome = game.attempt_select(pos_b).unwrap();
//! assert!(matches!(outcome, SelectOutcome::Removed(_)));
//! assert_eq!(game.remaining(), 142);
//!
//! assert!(game.undo());
//! assert_eq!(game.remaining(), 144);
//! ```

pub mod board;
pub mod deck;
pub mod error;
pub mod hint;
pub mod history;
pub mod layout;
pub mod rng;
pub mod rules;
pub mod session;
pub mod snapshot;

pub use tui_mahjong_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Tile, TileId};
pub use deck::DeckBuilder;
pub use error::MahjongError;
pub use hint::HintSearch;
pub use history::{HistoryEngine, Removal};
pub use layout::LayoutGenerator;
pub use rng::SimpleRng;
pub use rules::matches;
pub use session::{clock_game_number, GameSession, PairRemoval, SelectOutcome, TileState};
pub use snapshot::{GameSnapshot, TileSnapshot};
