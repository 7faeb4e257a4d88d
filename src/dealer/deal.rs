use crate::error::RoundError;

use super::{Dealer, RoundPhase};

impl Dealer {
    /// Collects a bet from every seated player.
    ///
    /// Seats whose balance is below the table minimum bet 0 and sit the
    /// round out (unless the rules deal to zero bets).
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::WrongPhase`] unless the round is awaiting
    /// bets.
    pub fn take_bets(&mut self) -> Result<(), RoundError> {
        self.ensure_phase(RoundPhase::AwaitingBets)?;
        for player in &mut self.players {
            player.make_bet(&self.rules);
        }
        self.phase = RoundPhase::Dealing;
        Ok(())
    }

    /// Deals two cards to each betting seat and one to the dealer.
    ///
    /// The shoe is restocked first if it has fallen below the restock
    /// threshold. With no players seated the round is a no-op and no
    /// card moves.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::WrongPhase`] unless bets were just taken.
    pub fn deal_first_cards(&mut self) -> Result<(), RoundError> {
        self.ensure_phase(RoundPhase::Dealing)?;
        self.restock_shoe_if_low();

        if !self.players.is_empty() {
            for seat in 0..self.players.len() {
                if self.players[seat].bet() == 0 && !self.rules.deal_on_zero_bet {
                    continue;
                }
                for _ in 0..2 {
                    let card = self.draw_card();
                    self.players[seat].take_card(card);
                    self.played.push(card);
                }
            }

            // The dealer's single visible card; no hole card is drawn
            // until the dealer's own turn.
            let card = self.draw_card();
            self.hand.add(card);
            self.played.push(card);
        }

        self.phase = RoundPhase::PlayerTurns;
        Ok(())
    }
}
