//! The dealer and the round state machine.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::RoundError;
use crate::hand::Hand;
use crate::player::Player;
use crate::result::RoundSummary;
use crate::rules::TableRules;
use crate::shoe::Shoe;

mod deal;
mod phase;
mod settle;
mod snapshot;
mod turns;

pub use phase::RoundPhase;
pub use snapshot::{SeatSnapshot, TableSnapshot};

/// The house: one shoe, one hand, and the roster of seated players.
///
/// The dealer drives a round through its phases, from collecting bets
/// to settlement, and is the only thing that ever touches the shoe.
/// Players interact with the round
/// purely through their capability methods. Every operation checks the
/// current [`RoundPhase`] first and refuses to run out of order, so no
/// partially settled state is ever observable.
///
/// Shuffling uses a ChaCha RNG seeded at construction, which makes whole
/// games reproducible from a seed.
pub struct Dealer {
    rules: TableRules,
    shoe: Shoe,
    hand: Hand,
    players: Vec<Player>,
    /// Every card dealt in the current round, shown to the seats at
    /// settlement.
    played: Vec<Card>,
    phase: RoundPhase,
    rng: ChaCha8Rng,
}

impl Dealer {
    /// Creates a dealer with a freshly shuffled shoe and an empty
    /// roster.
    #[must_use]
    pub fn new(rules: TableRules, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut shoe = Shoe::fresh();
        shoe.shuffle(&mut rng);
        Self {
            rules,
            shoe,
            hand: Hand::new(),
            players: Vec::new(),
            played: Vec::new(),
            phase: RoundPhase::AwaitingBets,
            rng,
        }
    }

    /// Replaces the roster of seated players.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::WrongPhase`] if a round is in progress.
    pub fn assign_players(&mut self, players: Vec<Player>) -> Result<(), RoundError> {
        self.ensure_phase(RoundPhase::AwaitingBets)?;
        self.players = players;
        Ok(())
    }

    /// Plays one complete round: bets, deal, every seat's turn, the
    /// dealer's hand, settlement.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::WrongPhase`] unless called between rounds,
    /// or a propagated [`crate::HandError`] on a scoring-state bug.
    pub fn play_round(&mut self) -> Result<RoundSummary, RoundError> {
        self.take_bets()?;
        self.deal_first_cards()?;
        for seat in 0..self.players.len() {
            self.play(seat)?;
        }
        self.play_dealer_hand()?;
        self.settle_bets()
    }

    /// Abandons the round in progress without settling any bet and
    /// returns to awaiting bets.
    ///
    /// # Errors
    ///
    /// Returns a propagated [`crate::HandError`] if a hand failed to
    /// drain cleanly.
    pub fn abort_round(&mut self) -> Result<(), RoundError> {
        for player in &mut self.players {
            player.new_hand()?;
        }
        self.hand.remove_all()?;
        self.played.clear();
        self.phase = RoundPhase::AwaitingBets;
        Ok(())
    }

    /// Scores a hand: the best total within the target, or the
    /// least-bust total when every total is over.
    #[must_use]
    pub fn score_hand(&self, hand: &Hand) -> u32 {
        hand.best_total_at_most(self.rules.blackjack)
    }

    /// The dealer's visible card, once the first cards are dealt.
    #[must_use]
    pub fn up_card(&self) -> Option<Card> {
        self.hand.dealt().first().copied()
    }

    /// The seated players.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The table rules.
    #[must_use]
    pub fn rules(&self) -> &TableRules {
        &self.rules
    }

    /// The phase the round is in.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// The shoe.
    #[must_use]
    pub fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// The dealer's own hand.
    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Replaces the shoe, e.g. with a stacked deck for a scripted game.
    pub fn load_shoe(&mut self, shoe: Shoe) {
        self.shoe = shoe;
    }

    fn ensure_phase(&self, expected: RoundPhase) -> Result<(), RoundError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(RoundError::WrongPhase {
                expected,
                found: self.phase,
            })
        }
    }

    /// Refills the shoe to a fresh shuffled deck and tells every seat.
    fn restock_shoe(&mut self) {
        self.shoe.refill();
        self.shoe.shuffle(&mut self.rng);
        for player in &mut self.players {
            player.new_deck();
        }
    }

    fn restock_shoe_if_low(&mut self) {
        if self.shoe.len() < self.rules.restock_at {
            self.restock_shoe();
        }
    }

    /// Draws the next card, restocking on the spot if the shoe ran dry
    /// mid-turn.
    fn draw_card(&mut self) -> Card {
        if self.shoe.is_empty() {
            self.restock_shoe();
        }
        self.shoe
            .deal()
            .expect("a restocked shoe holds a full deck")
    }
}
