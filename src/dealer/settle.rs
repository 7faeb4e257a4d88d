use crate::error::RoundError;
use crate::result::{Outcome, RoundSummary, SeatResult};

use super::{Dealer, RoundPhase};

impl Dealer {
    /// Settles every seat against the dealer's final score and resets
    /// the table for the next round.
    ///
    /// Stakes: a bust seat loses its bet; a dealer blackjack beats every
    /// seat that does not have one; a seat blackjack against no dealer
    /// blackjack pays double; otherwise the scores compare, with a
    /// dealer bust counting as a seat win and a tie pushing. Every seat
    /// is shown the round's cards before hands are cleared, and seats
    /// whose balance fell below the table minimum leave the roster.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::WrongPhase`] unless the dealer hand has
    /// been played, or a propagated [`crate::HandError`] if a hand
    /// failed to drain cleanly.
    pub fn settle_bets(&mut self) -> Result<RoundSummary, RoundError> {
        self.ensure_phase(RoundPhase::Settling)?;

        let dealer_score = self.score_hand(&self.hand);
        let dealer_bust = self.hand.is_over(self.rules.blackjack);
        let dealer_blackjack = dealer_score == self.rules.blackjack;

        // Every seat sees the full round before any hand is cleared;
        // counting strategies update here.
        for player in &mut self.players {
            player.view_cards(&self.played);
        }

        let mut seats = Vec::with_capacity(self.players.len());
        for (seat, player) in self.players.iter_mut().enumerate() {
            let bet = player.bet() as isize;
            let score = player.hand_total(&self.rules);

            let (outcome, stake) = if player.hand().is_empty() && player.bet() == 0 {
                (Outcome::SatOut, 0)
            } else if player.is_bust(&self.rules) {
                (Outcome::Lose, -bet)
            } else if dealer_blackjack && !player.blackjack(&self.rules) {
                (Outcome::Lose, -bet)
            } else if player.blackjack(&self.rules) && !dealer_blackjack {
                (Outcome::Blackjack, 2 * bet)
            } else if score > dealer_score || dealer_bust {
                (Outcome::Win, bet)
            } else if score < dealer_score {
                (Outcome::Lose, -bet)
            } else {
                (Outcome::Push, 0)
            };

            let solvent = player.settle_bet(stake, &self.rules);
            player.new_hand()?;
            seats.push(SeatResult {
                seat,
                outcome,
                stake,
                score,
                balance: player.balance(),
                eliminated: !solvent,
            });
        }

        // Insolvent seats leave before the next round's bets.
        let mut keep = seats.iter().map(|settled| !settled.eliminated);
        self.players.retain(|_| keep.next().unwrap_or(true));

        self.hand.remove_all()?;
        self.played.clear();
        self.phase = RoundPhase::AwaitingBets;

        Ok(RoundSummary {
            seats,
            dealer_score,
            dealer_bust,
            dealer_blackjack,
        })
    }
}
