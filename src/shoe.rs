//! The shoe cards are dealt from.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// An ordered, shuffleable, depletable sequence of cards.
///
/// A fresh shoe holds each of the 52 rank/suit combinations exactly once.
/// The top of the shoe is the end of the sequence; [`Shoe::deal`] removes
/// and returns the top card. The round controller refills and reshuffles
/// the shoe once it runs low; the shoe itself never reshuffles on its own.
///
/// The serialized form is the exact remaining sequence, bottom to top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Shoe {
    cards: Vec<Card>,
}

impl Shoe {
    /// Creates a full, unshuffled shoe.
    #[must_use]
    pub fn fresh() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// Creates a shoe holding exactly `cards`, bottom to top.
    ///
    /// Used to restore a persisted shoe and to stack decks in tests; no
    /// uniqueness check is applied.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Permutes the remaining cards in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Discards whatever remains and refills to a full 52-card deck.
    ///
    /// The caller is expected to shuffle afterwards.
    pub fn refill(&mut self) {
        *self = Self::fresh();
    }

    /// Removes and returns the top card, or `None` if the shoe is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The remaining cards, bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Shoe {
    fn default() -> Self {
        Self::fresh()
    }
}
