//! Settlement report types.

use serde::{Deserialize, Serialize};

/// How a seat fared against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Seat beat the dealer's score, or the dealer busted.
    Win,
    /// Seat busted, lost the comparison, or lost to a dealer blackjack.
    Lose,
    /// Scores tied; the bet is returned.
    Push,
    /// Seat hit the target total and the dealer did not; pays double.
    Blackjack,
    /// Seat bet nothing and was dealt no cards this round.
    SatOut,
}

/// Settlement for a single seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatResult {
    /// Seat position at the time of settlement.
    pub seat: usize,
    /// How the seat fared.
    pub outcome: Outcome,
    /// Signed balance adjustment applied to the seat.
    pub stake: isize,
    /// The seat's final score (least-bust total when bust).
    pub score: u32,
    /// Balance after the stake was applied.
    pub balance: usize,
    /// Whether the seat fell below the minimum bet and left the table.
    pub eliminated: bool,
}

/// Settlement for a whole round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// Per-seat settlements, in seating order.
    pub seats: Vec<SeatResult>,
    /// The dealer's final score (least-bust total when bust).
    pub dealer_score: u32,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer's score hit the target total.
    pub dealer_blackjack: bool,
}
