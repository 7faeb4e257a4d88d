//! Persistable table state.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::error::{RestoreError, RoundError};
use crate::hand::Hand;
use crate::player::Player;
use crate::rules::TableRules;
use crate::shoe::Shoe;
use crate::strategy::Strategy;

use super::{Dealer, RoundPhase};

/// Persisted state of one seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatSnapshot {
    /// The seat's balance.
    pub balance: usize,
    /// The seat's most recent bet.
    pub bet: usize,
}

/// Persisted state of a table between rounds.
///
/// Plain data only: how it reaches a file is the embedder's business.
/// Strategies are policy objects, not data, and are supplied again on
/// [`Dealer::restore`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSnapshot {
    /// The table rules.
    pub rules: TableRules,
    /// The exact remaining shoe sequence, bottom to top.
    pub shoe: Shoe,
    /// Per-seat balances and bets, in seating order.
    pub seats: Vec<SeatSnapshot>,
}

impl Dealer {
    /// Captures the table state between rounds.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::WrongPhase`] while a round is in progress.
    pub fn snapshot(&self) -> Result<TableSnapshot, RoundError> {
        self.ensure_phase(RoundPhase::AwaitingBets)?;
        Ok(TableSnapshot {
            rules: self.rules,
            shoe: self.shoe.clone(),
            seats: self
                .players
                .iter()
                .map(|player| SeatSnapshot {
                    balance: player.balance(),
                    bet: player.bet(),
                })
                .collect(),
        })
    }

    /// Rebuilds a table from a snapshot, reseating one strategy per
    /// persisted seat.
    ///
    /// # Errors
    ///
    /// Returns [`RestoreError::StrategyCountMismatch`] if the number of
    /// strategies does not match the snapshot's seats.
    pub fn restore(
        snapshot: TableSnapshot,
        strategies: Vec<Box<dyn Strategy>>,
        seed: u64,
    ) -> Result<Self, RestoreError> {
        if strategies.len() != snapshot.seats.len() {
            return Err(RestoreError::StrategyCountMismatch {
                seats: snapshot.seats.len(),
                strategies: strategies.len(),
            });
        }

        let players = snapshot
            .seats
            .iter()
            .zip(strategies)
            .map(|(seat, strategy)| Player::from_snapshot(seat.balance, seat.bet, strategy))
            .collect();

        Ok(Self {
            rules: snapshot.rules,
            shoe: snapshot.shoe,
            hand: Hand::new(),
            players,
            played: Vec::new(),
            phase: RoundPhase::AwaitingBets,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }
}
