//! Hands and the multi-valued scoring engine.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::card::{Card, Rank, Suit};
use crate::error::HandError;

/// A hand of cards plus derived scoring state.
///
/// Besides the cards themselves, a hand maintains per-rank and per-suit
/// counts and the set of every total the hand can be worth once each Ace
/// independently counts as 1 or 11. With `k` Aces held there are exactly
/// `k + 1` distinct totals, descending by 10 from the all-Aces-high total
/// at index 0 to the all-Aces-low total at the end. The set is updated
/// incrementally on every add and remove.
///
/// Cards can be sorted for display without losing the order they were
/// dealt in; [`Hand::cards`] is the display order and [`Hand::dealt`]
/// the dealt order.
///
/// The serialized form is the dealt-card list; deserializing replays the
/// cards through [`Hand::add`], so the counts and totals of a restored
/// hand are always consistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Card>", from = "Vec<Card>")]
pub struct Hand {
    /// Display order; sorts and reversals apply here.
    cards: Vec<Card>,
    /// The order cards were added, untouched by sorting.
    dealt: Vec<Card>,
    /// Cards held per rank, indexed by rank order.
    rank_counts: [u8; 13],
    /// Cards held per suit, indexed by suit order.
    suit_counts: [u8; 4],
    /// Every achievable total, descending; always `aces + 1` entries.
    totals: Vec<u32>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: Vec::new(),
            dealt: Vec::new(),
            rank_counts: [0; 13],
            suit_counts: [0; 4],
            totals: vec![0],
        }
    }

    /// Adds a card to the hand and updates the counts and totals.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
        self.dealt.push(card);
        self.rank_counts[card.rank as usize] += 1;
        self.suit_counts[card.suit as usize] += 1;
        self.totals[0] += card.value();
        self.rebuild_alternatives();
    }

    /// Removes the first card equal to `card` by rank and suit.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::CardNotPresent`] if no such card is held; the
    /// hand is left untouched in that case.
    #[expect(
        clippy::missing_panics_doc,
        reason = "internal expects are guaranteed to succeed"
    )]
    pub fn remove_card(&mut self, card: Card) -> Result<(), HandError> {
        let position = self
            .cards
            .iter()
            .position(|held| *held == card)
            .ok_or(HandError::CardNotPresent)?;
        self.cards.remove(position);

        // cards and dealt always hold the same multiset
        let dealt_position = self
            .dealt
            .iter()
            .position(|held| *held == card)
            .expect("dealt order holds every card the display order holds");
        self.dealt.remove(dealt_position);

        self.rank_counts[card.rank as usize] -= 1;
        self.suit_counts[card.suit as usize] -= 1;
        self.totals[0] -= card.value();
        self.rebuild_alternatives();
        Ok(())
    }

    /// Removes the card at `index` in display order and returns it.
    ///
    /// Removal itself goes through [`Hand::remove_card`], so the first
    /// card of equal value is dropped; equal cards are interchangeable.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::OutOfBounds`] if `index` is past the end of
    /// the hand.
    pub fn remove_at(&mut self, index: usize) -> Result<Card, HandError> {
        let card = *self
            .cards
            .get(index)
            .ok_or(HandError::OutOfBounds(index))?;
        self.remove_card(card)?;
        Ok(card)
    }

    /// Drains the hand to empty through the value-removal path.
    ///
    /// # Errors
    ///
    /// Returns the first removal failure. A well-formed hand never fails
    /// here; an error means the derived state went out of sync with the
    /// cards and should be treated as a bug, not swallowed.
    pub fn remove_all(&mut self) -> Result<(), HandError> {
        while let Some(card) = self.cards.first().copied() {
            self.remove_card(card)?;
        }
        Ok(())
    }

    /// Recomputes the soft alternatives below the base total.
    ///
    /// `totals[0]` (every Ace counted 11) is maintained by add/remove;
    /// each held Ace contributes one further total 10 below the previous.
    fn rebuild_alternatives(&mut self) {
        let aces = usize::from(self.rank_counts[Rank::Ace as usize]);
        self.totals.truncate(1);
        for _ in 0..aces {
            let next = self.totals[self.totals.len() - 1] - 10;
            self.totals.push(next);
        }
    }

    /// Every achievable total, highest (all Aces 11) first.
    #[must_use]
    pub fn totals(&self) -> &[u32] {
        &self.totals
    }

    /// The highest achievable total (every Ace counted 11).
    #[must_use]
    pub fn max_total(&self) -> u32 {
        self.totals[0]
    }

    /// The lowest achievable total (every Ace counted 1).
    #[must_use]
    pub fn min_total(&self) -> u32 {
        self.totals[self.totals.len() - 1]
    }

    /// Returns whether even the lowest achievable total exceeds
    /// `threshold`.
    ///
    /// This is the bust test: a hand is only bust when its most
    /// favorable Ace assignment is over the limit.
    #[must_use]
    pub fn is_over(&self, threshold: u32) -> bool {
        self.min_total() > threshold
    }

    /// The largest achievable total that is at most `threshold`, or the
    /// lowest achievable total when every total is over.
    #[must_use]
    pub fn best_total_at_most(&self, threshold: u32) -> u32 {
        self.totals
            .iter()
            .copied()
            .find(|&total| total <= threshold)
            .unwrap_or_else(|| self.min_total())
    }

    /// Number of held cards of the given rank.
    #[must_use]
    pub fn count_rank(&self, rank: Rank) -> usize {
        usize::from(self.rank_counts[rank as usize])
    }

    /// Number of held cards of the given suit.
    #[must_use]
    pub fn count_suit(&self, suit: Suit) -> usize {
        usize::from(self.suit_counts[suit as usize])
    }

    /// Sorts the display order ascending by rank, then suit.
    pub fn sort_ascending(&mut self) {
        self.cards.sort_unstable();
    }

    /// Sorts the display order descending by rank, then suit.
    pub fn sort_descending(&mut self) {
        self.cards.sort_unstable();
        self.cards.reverse();
    }

    /// Returns a new hand whose display order is reversed; the original
    /// is left untouched.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut copy = self.clone();
        copy.cards.reverse();
        copy
    }

    /// The cards in display order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The cards in the order they were added, regardless of any sorting
    /// applied since.
    #[must_use]
    pub fn dealt(&self) -> &[Card] {
        &self.dealt
    }

    /// Number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        let mut hand = Self::new();
        hand.extend(cards);
        hand
    }
}

impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        hand.dealt
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut hand = Self::new();
        hand.extend(iter);
        hand
    }
}

impl Extend<Card> for Hand {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        for card in iter {
            self.add(card);
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
