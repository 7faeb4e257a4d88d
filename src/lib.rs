//! A multi-player blackjack table engine with pluggable player
//! strategies.
//!
//! The crate provides a [`Dealer`] that owns the shoe and drives the
//! full round state machine (betting, dealing, each seat's turn, the
//! dealer's own hand, and settlement) over a roster of [`Player`]s
//! whose bet sizing and hit/stand decisions come from pluggable
//! [`Strategy`] implementations. A [`Hand`] tracks every total it can
//! be worth at once, so each Ace counts as 1 and 11 simultaneously
//! until the round resolves.
//!
//! # Example
//!
//! ```no_run
//! use pontoon::{BasicStrategy, Dealer, Player, TableRules};
//!
//! let mut dealer = Dealer::new(TableRules::default(), 42);
//! dealer.assign_players(vec![Player::new(200, BasicStrategy::default())])?;
//! let summary = dealer.play_round()?;
//! println!("dealer scored {}", summary.dealer_score);
//! # Ok::<(), pontoon::RoundError>(())
//! ```

pub mod card;
pub mod dealer;
pub mod error;
pub mod hand;
pub mod player;
pub mod result;
pub mod rules;
pub mod shoe;
pub mod strategy;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use dealer::{Dealer, RoundPhase, SeatSnapshot, TableSnapshot};
pub use error::{HandError, RestoreError, RoundError};
pub use hand::Hand;
pub use player::Player;
pub use result::{Outcome, RoundSummary, SeatResult};
pub use rules::TableRules;
pub use shoe::Shoe;
pub use strategy::{
    BasicStrategy, CountingStrategy, DEFAULT_BET, IntermediateStrategy, Strategy,
};
