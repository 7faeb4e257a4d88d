//! Round phases.

use serde::{Deserialize, Serialize};

/// The phase a round is in.
///
/// Rounds cycle `AwaitingBets → Dealing → PlayerTurns → DealerTurn →
/// Settling → AwaitingBets`. There is no terminal phase; play stops when
/// the caller stops requesting rounds or the roster empties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Collecting bets for the next round.
    AwaitingBets,
    /// Bets taken; initial cards not yet dealt.
    Dealing,
    /// Seats resolve their hands one at a time.
    PlayerTurns,
    /// The dealer plays out its own hand.
    DealerTurn,
    /// Scores are final; bets settle and the table resets.
    Settling,
}
