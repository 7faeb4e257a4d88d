//! Player strategies.
//!
//! Every playing style, human play included, is an implementation of the
//! single [`Strategy`] trait. The built-in strategies form a ladder:
//! [`BasicStrategy`] plays a fixed threshold, [`IntermediateStrategy`]
//! adds awareness of the dealer's up-card and of soft totals, and
//! [`CountingStrategy`] adds count-scaled bet sizing on top. A
//! human-driven game implements the trait over whatever input source it
//! likes (see `demos/table_cli.rs`).

use crate::card::Card;
use crate::hand::Hand;
use crate::rules::TableRules;

/// The default flat betting unit.
pub const DEFAULT_BET: usize = 10;

/// A seat's playing policy.
///
/// The decision methods take everything they need as arguments; in
/// particular the dealer's up-card is a parameter of [`Strategy::wants_card`]
/// rather than state remembered between calls, so a decision can never act
/// on a stale card from an earlier round.
pub trait Strategy {
    /// The bet the strategy would like to place.
    ///
    /// The seat clamps this into the table limits and to the available
    /// balance; returning 0 sits the round out.
    fn bet_size(&mut self, balance: usize, rules: &TableRules) -> usize;

    /// Whether to draw another card.
    fn wants_card(&mut self, hand: &Hand, dealer_up: Card, rules: &TableRules) -> bool;

    /// Shown every card played in the round just finished.
    fn saw_played_cards(&mut self, _cards: &[Card]) {}

    /// Told that the shoe was refilled and reshuffled.
    fn shoe_shuffled(&mut self) {}

    /// Short name for display.
    fn label(&self) -> &str {
        "custom"
    }
}

/// Hit while the best total within the target is below the threshold.
///
/// A bust hand has no total within the target, so this always stands on
/// one.
fn hit_below(hand: &Hand, threshold: u32, rules: &TableRules) -> bool {
    hand.best_total_at_most(rules.blackjack) < threshold
}

/// The intermediate decision rule, shared by the counting strategy.
fn dealer_aware_wants_card(hand: &Hand, dealer_up: Card, rules: &TableRules) -> bool {
    use crate::card::Rank;

    // With an Ace in hand the soft total short-circuits the threshold
    // logic: stand pat on a soft 9 or 10, always draw under a soft 8.
    if hand.count_rank(Rank::Ace) > 0 {
        let soft = hand.min_total();
        if soft == 9 || soft == 10 {
            return false;
        }
        if soft < 8 {
            return true;
        }
    }

    const LOW_DEALER_CARD: u32 = 7;
    const LOWERED_THRESHOLD: u32 = 12;
    const THRESHOLD: u32 = 17;

    let threshold = if dealer_up.value() < LOW_DEALER_CARD {
        LOWERED_THRESHOLD
    } else {
        THRESHOLD
    };
    hit_below(hand, threshold, rules)
}

/// Flat bet, fixed stand threshold, blind to the dealer and the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasicStrategy {
    /// The flat bet placed every round.
    pub unit: usize,
    /// Stands once the best total within the target reaches this.
    pub stand_at: u32,
}

impl BasicStrategy {
    /// Creates a basic strategy betting `unit` per round.
    #[must_use]
    pub const fn new(unit: usize) -> Self {
        Self { unit, stand_at: 17 }
    }
}

impl Default for BasicStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_BET)
    }
}

impl Strategy for BasicStrategy {
    fn bet_size(&mut self, _balance: usize, _rules: &TableRules) -> usize {
        self.unit
    }

    fn wants_card(&mut self, hand: &Hand, _dealer_up: Card, rules: &TableRules) -> bool {
        hit_below(hand, self.stand_at, rules)
    }

    fn label(&self) -> &str {
        "basic"
    }
}

/// Flat bet with the dealer-aware decision rule.
///
/// Plays like [`BasicStrategy`] except that the stand threshold drops to
/// 12 against a dealer up-card worth less than 7, and soft totals of
/// 9–10 stand while soft totals under 8 draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntermediateStrategy {
    /// The flat bet placed every round.
    pub unit: usize,
}

impl IntermediateStrategy {
    /// Creates an intermediate strategy betting `unit` per round.
    #[must_use]
    pub const fn new(unit: usize) -> Self {
        Self { unit }
    }
}

impl Default for IntermediateStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_BET)
    }
}

impl Strategy for IntermediateStrategy {
    fn bet_size(&mut self, _balance: usize, _rules: &TableRules) -> usize {
        self.unit
    }

    fn wants_card(&mut self, hand: &Hand, dealer_up: Card, rules: &TableRules) -> bool {
        dealer_aware_wants_card(hand, dealer_up, rules)
    }

    fn label(&self) -> &str {
        "intermediate"
    }
}

/// The dealer-aware decision rule plus count-scaled bet sizing.
///
/// Keeps a running count over the cards shown at the end of each round:
/// up one per card worth less than 6, down one per card worth 10 or
/// more. While the count is positive the bet scales to `count * unit`;
/// a reshuffle resets the count to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountingStrategy {
    /// The betting unit the count scales.
    pub unit: usize,
    count: i32,
}

impl CountingStrategy {
    /// Creates a counting strategy with a zero count, betting in
    /// multiples of `unit`.
    #[must_use]
    pub const fn new(unit: usize) -> Self {
        Self { unit, count: 0 }
    }

    /// The current running count.
    #[must_use]
    pub const fn count(&self) -> i32 {
        self.count
    }
}

impl Default for CountingStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_BET)
    }
}

impl Strategy for CountingStrategy {
    fn bet_size(&mut self, _balance: usize, _rules: &TableRules) -> usize {
        if self.count > 0 {
            self.unit * self.count as usize
        } else {
            self.unit
        }
    }

    fn wants_card(&mut self, hand: &Hand, dealer_up: Card, rules: &TableRules) -> bool {
        dealer_aware_wants_card(hand, dealer_up, rules)
    }

    fn saw_played_cards(&mut self, cards: &[Card]) {
        const LOW_CARD: u32 = 6;
        const HIGH_CARD: u32 = 10;

        for card in cards {
            if card.value() < LOW_CARD {
                self.count += 1;
            } else if card.value() >= HIGH_CARD {
                self.count -= 1;
            }
        }
    }

    fn shoe_shuffled(&mut self) {
        self.count = 0;
    }

    fn label(&self) -> &str {
        "counting"
    }
}
