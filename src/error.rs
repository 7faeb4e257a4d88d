//! Error types for hand and round operations.

use thiserror::Error;

use crate::dealer::RoundPhase;

/// Errors from hand mutation.
///
/// These indicate a modeling bug in the caller rather than a gameplay
/// condition; gameplay outcomes (bust, insufficient funds, elimination)
/// are ordinary return values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The card to remove is not in the hand.
    #[error("card is not present in the hand")]
    CardNotPresent,
    /// No card exists at the given position.
    #[error("no card at index {0}")]
    OutOfBounds(usize),
}

/// Errors from driving the round state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The operation is not valid in the current phase.
    #[error("operation requires the {expected:?} phase but the round is in {found:?}")]
    WrongPhase {
        /// Phase the operation requires.
        expected: RoundPhase,
        /// Phase the round is actually in.
        found: RoundPhase,
    },
    /// No player is seated at the given position.
    #[error("no player is seated at position {0}")]
    NoSuchSeat(usize),
    /// A hand invariant was violated while clearing the table.
    #[error(transparent)]
    Hand(#[from] HandError),
}

/// Errors from restoring a table snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RestoreError {
    /// The snapshot and the supplied strategies disagree on seat count.
    #[error("snapshot has {seats} seats but {strategies} strategies were supplied")]
    StrategyCountMismatch {
        /// Seats recorded in the snapshot.
        seats: usize,
        /// Strategies supplied by the caller.
        strategies: usize,
    },
}
