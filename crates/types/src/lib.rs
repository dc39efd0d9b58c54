//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures, usable in any context (core logic,
//! terminal rendering, JSON dumps of a deal).
//!
//! # Board Geometry
//!
//! The turtle layout is addressed with signed coordinates `(x, y, z)`:
//!
//! - **z**: depth index. `z = 0` is the single apex tile, `z = 4` is the wide base
//! - **x**: column, `-7..=8`. There is no `x = 0` column below the apex (double-wide centre)
//! - **y**: row, `-4..=4`. Row `y = 0` only holds the apex and the three wing tiles
//!
//! # Deck Composition
//!
//! | Kind | Copies | Tiles |
//! |------|--------|-------|
//! | Character / Bamboo / Circle 1-9 | 4 | 108 |
//! | Winds N, S, E, W | 4 | 16 |
//! | Dragons C, F | 4 | 8 |
//! | White dragon | 4 | 4 |
//! | Flowers (4 names) | 1 | 4 |
//! | Seasons (4 names) | 1 | 4 |
//!
//! # Examples
//!
//! ```
//! use tui_mahjong_types::{Position, Suit, TileKind, DECK_SIZE};
//!
//! let kind = TileKind::Numeral { suit: Suit::Bamboo, rank: 7 };
//! assert_eq!(kind.label(), ['B', '7']);
//!
//! let apex = Position::APEX;
//! assert_eq!(apex.above(), Position::new(0, 0, -1));
//!
//! assert_eq!(DECK_SIZE, 144);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of tiles in a deal (and positions in the layout)
pub const DECK_SIZE: usize = 144;

/// Number of layers in the turtle, apex included
pub const LAYER_COUNT: i8 = 5;

/// Depth index of the wide base layer
pub const BASE_LAYER: i8 = LAYER_COUNT - 1;

/// Game numbers are reduced modulo this value (six decimal digits)
pub const GAME_NUMBER_MODULUS: u32 = 1_000_000;

/// Maximum number of digits in a game number
pub const GAME_NUMBER_DIGITS: usize = 6;

/// Number of backdrops the session RNG chooses from before shuffling
pub const BACKDROP_COUNT: u32 = 7;

/// How long a hint highlight stays up before the UI reverts it
pub const HINT_FLASH_MS: u32 = 1000;

/// Copies of every numeral, wind, dragon and white dragon kind
pub const COPIES_PER_KIND: usize = 4;

/// Leftmost and rightmost columns any layout position can use
pub const MIN_X: i8 = -7;
pub const MAX_X: i8 = 8;

/// Topmost and bottommost rows any layout position can use
pub const MIN_Y: i8 = -4;
pub const MAX_Y: i8 = 4;


/// A slot in the turtle layout
///
/// Positions are only meaningful when the layout emits them; the board never
/// treats them as a dense grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i8,
    pub y: i8,
    pub z: i8,
}

impl Position {
    /// The single tile capping the turtle
    pub const APEX: Position = Position { x: 0, y: 0, z: 0 };

    pub const fn new(x: i8, y: i8, z: i8) -> Self {
        Self { x, y, z }
    }

    /// The slot one layer shallower at the same column (the tile that would cover this one)
    pub const fn above(&self) -> Self {
        Self {
            x: self.x,
            y: self.y,
            z: self.z - 1,
        }
    }

    /// Same layer, shifted by `(dx, dy)`
    pub const fn offset(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z,
        }
    }

    /// Same layer and column, on row `y`
    pub const fn with_y(&self, y: i8) -> Self {
        Self {
            x: self.x,
            y,
            z: self.z,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Suits of the ranked tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Character,
    Bamboo,
    Circle,
}

impl Suit {
    pub const ALL: [Suit; 3] = [Suit::Character, Suit::Bamboo, Suit::Circle];

    pub fn letter(&self) -> char {
        match self {
            Suit::Character => 'C',
            Suit::Bamboo => 'B',
            Suit::Circle => 'O',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Suit::Character => "Character",
            Suit::Bamboo => "Bamboo",
            Suit::Circle => "Circle",
        }
    }
}

/// Wind tiles, identified by compass symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Wind {
    North,
    South,
    East,
    West,
}

impl Wind {
    pub const ALL: [Wind; 4] = [Wind::North, Wind::South, Wind::East, Wind::West];

    pub fn symbol(&self) -> char {
        match self {
            Wind::North => 'N',
            Wind::South => 'S',
            Wind::East => 'E',
            Wind::West => 'W',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Wind::North => "North",
            Wind::South => "South",
            Wind::East => "East",
            Wind::West => "West",
        }
    }
}

/// Coloured dragons: `C` (red, chung) and `F` (green, fa)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dragon {
    Red,
    Green,
}

impl Dragon {
    pub const ALL: [Dragon; 2] = [Dragon::Red, Dragon::Green];

    pub fn symbol(&self) -> char {
        match self {
            Dragon::Red => 'C',
            Dragon::Green => 'F',
        }
    }
}

/// Flower names; display only, every flower matches every other flower
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Flower {
    Chrysanthemum,
    Orchid,
    Plum,
    Bamboo,
}

impl Flower {
    pub const ALL: [Flower; 4] = [
        Flower::Chrysanthemum,
        Flower::Orchid,
        Flower::Plum,
        Flower::Bamboo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Flower::Chrysanthemum => "Chrysanthemum",
            Flower::Orchid => "Orchid",
            Flower::Plum => "Plum",
            Flower::Bamboo => "Bamboo",
        }
    }

    fn ordinal(&self) -> u8 {
        match self {
            Flower::Chrysanthemum => 1,
            Flower::Orchid => 2,
            Flower::Plum => 3,
            Flower::Bamboo => 4,
        }
    }
}

/// Season names; display only, every season matches every other season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }

    fn ordinal(&self) -> u8 {
        match self {
            Season::Spring => 1,
            Season::Summer => 2,
            Season::Fall => 3,
            Season::Winter => 4,
        }
    }
}

/// The matchable identity of a tile
///
/// One tagged union covers every category; matching lives in
/// `tui_mahjong_core::rules::matches`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    /// Ranked suit tile, rank in `1..=9`
    Numeral { suit: Suit, rank: u8 },
    Wind(Wind),
    Dragon(Dragon),
    WhiteDragon,
    Flower(Flower),
    Season(Season),
}

impl TileKind {
    /// Two-character label used by the terminal view
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_mahjong_types::{Dragon, Suit, TileKind};
    ///
    /// assert_eq!(TileKind::Numeral { suit: Suit::Character, rank: 3 }.label(), ['C', '3']);
    /// assert_eq!(TileKind::Dragon(Dragon::Green).label(), ['D', 'F']);
    /// ```
    pub fn label(&self) -> [char; 2] {
        match self {
            TileKind::Numeral { suit, rank } => [suit.letter(), digit(*rank)],
            TileKind::Wind(w) => ['W', w.symbol()],
            TileKind::Dragon(d) => ['D', d.symbol()],
            TileKind::WhiteDragon => ['D', 'W'],
            TileKind::Flower(f) => ['F', digit(f.ordinal())],
            TileKind::Season(s) => ['S', digit(s.ordinal())],
        }
    }
}

fn digit(n: u8) -> char {
    char::from_digit(n as u32, 10).unwrap_or('?')
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileKind::Numeral { suit, rank } => write!(f, "{} {}", suit.as_str(), rank),
            TileKind::Wind(w) => write!(f, "{} Wind", w.as_str()),
            TileKind::Dragon(Dragon::Red) => f.write_str("Red Dragon"),
            TileKind::Dragon(Dragon::Green) => f.write_str("Green Dragon"),
            TileKind::WhiteDragon => f.write_str("White Dragon"),
            TileKind::Flower(name) => f.write_str(name.as_str()),
            TileKind::Season(name) => f.write_str(name.as_str()),
        }
    }
}

/// Player actions understood by the game loop
///
/// Both keyboard input and scripted play map onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the board cursor one column left
    CursorLeft,
    /// Move the board cursor one column right
    CursorRight,
    /// Move the board cursor one row up
    CursorUp,
    /// Move the board cursor one row down
    CursorDown,
    /// Select (or deselect, or match) the tile under the cursor
    Select,
    /// Put the last removed pair back
    Undo,
    /// Remove the last undone pair again
    Redo,
    /// Highlight a matching open pair
    Hint,
    /// Deal a fresh game from a clock-derived number
    NewGame,
    /// Ask for a game number and deal it
    NumberedGame,
    /// Redeal the current game number, dropping history
    Restart,
    /// Toggle the help overlay
    Help,
}
