//! Deck module - the 144 tile kinds and their seeded shuffle

use tracing::debug;

use crate::rng::SimpleRng;
use crate::types::{Dragon, Flower, Season, Suit, TileKind, Wind, COPIES_PER_KIND, DECK_SIZE};

/// Builds and shuffles the fixed rule-set deck
pub struct DeckBuilder;

impl DeckBuilder {
    /// Every kind in the deck, unshuffled
    ///
    /// Four passes over the numerals, winds, dragons and white dragon, then one
    /// of each flower and season. The order only matters because the shuffle is
    /// applied to it, which is what makes a game number reproducible.
    pub fn build() -> Vec<TileKind> {
        let mut deck = Vec::with_capacity(DECK_SIZE);

        for _ in 0..COPIES_PER_KIND {
            for suit in Suit::ALL {
                for rank in 1..=9 {
                    deck.push(TileKind::Numeral { suit, rank });
                }
            }
            deck.extend(Wind::ALL.into_iter().map(TileKind::Wind));
            deck.extend(Dragon::ALL.into_iter().map(TileKind::Dragon));
            deck.push(TileKind::WhiteDragon);
        }

        deck.extend(Flower::ALL.into_iter().map(TileKind::Flower));
        deck.extend(Season::ALL.into_iter().map(TileKind::Season));

        debug_assert_eq!(deck.len(), DECK_SIZE);
        deck
    }

    /// Permute `deck` in place with the session RNG
    pub fn shuffle(deck: &mut [TileKind], rng: &mut SimpleRng) {
        rng.shuffle(deck);
    }

    /// Convenience: a freshly built deck, shuffled
    pub fn shuffled(rng: &mut SimpleRng) -> Vec<TileKind> {
        let mut deck = Self::build();
        Self::shuffle(&mut deck, rng);
        debug!(first = %deck[0], last = %deck[deck.len() - 1], "deck shuffled");
        deck
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn counts(deck: &[TileKind]) -> HashMap<TileKind, usize> {
        let mut out = HashMap::new();
        for kind in deck {
            *out.entry(*kind).or_insert(0) += 1;
        }
        out
    }

    #[test]
    fn test_deck_has_144_tiles() {
        assert_eq!(DeckBuilder::build().len(), DECK_SIZE);
    }

    #[test]
    fn test_deck_composition() {
        let counts = counts(&DeckBuilder::build());

        for suit in Suit::ALL {
            for rank in 1..=9 {
                assert_eq!(counts[&TileKind::Numeral { suit, rank }], 4, "{:?} {}", suit, rank);
            }
        }
        for wind in Wind::ALL {
            assert_eq!(counts[&TileKind::Wind(wind)], 4);
        }
        for dragon in Dragon::ALL {
            assert_eq!(counts[&TileKind::Dragon(dragon)], 4);
        }
        assert_eq!(counts[&TileKind::WhiteDragon], 4);
        for flower in Flower::ALL {
            assert_eq!(counts[&TileKind::Flower(flower)], 1);
        }
        for season in Season::ALL {
            assert_eq!(counts[&TileKind::Season(season)], 1);
        }
        assert_eq!(counts.len(), 27 + 4 + 2 + 1 + 4 + 4);
    }

    #[test]
    fn test_shuffle_keeps_composition() {
        let mut rng = SimpleRng::new(424242);
        let shuffled = DeckBuilder::shuffled(&mut rng);
        assert_eq!(counts(&shuffled), counts(&DeckBuilder::build()));
        assert_ne!(shuffled, DeckBuilder::build());
    }

    #[test]
    fn test_shuffle_is_reproducible() {
        let a = DeckBuilder::shuffled(&mut SimpleRng::for_game(123456));
        let b = DeckBuilder::shuffled(&mut SimpleRng::for_game(123456));
        let c = DeckBuilder::shuffled(&mut SimpleRng::for_game(654321));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
