use crate::error::RoundError;
use crate::hand::Hand;
use crate::rules::TableRules;

use super::{Dealer, RoundPhase};

impl Dealer {
    /// Resolves one seat's turn and returns its final score.
    ///
    /// The seat is shown the dealer's up-card with every decision and is
    /// dealt a card for as long as it asks for one and its best total is
    /// still under the target. Seats that sat the round out (no cards)
    /// resolve immediately. A shoe that runs dry mid-turn is restocked
    /// on the spot.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::WrongPhase`] outside the player-turns
    /// phase, or [`RoundError::NoSuchSeat`] for an unknown seat.
    pub fn play(&mut self, seat: usize) -> Result<u32, RoundError> {
        self.ensure_phase(RoundPhase::PlayerTurns)?;
        if seat >= self.players.len() {
            return Err(RoundError::NoSuchSeat(seat));
        }
        self.restock_shoe_if_low();

        if self.players[seat].hand().is_empty() {
            return Ok(self.players[seat].hand_total(&self.rules));
        }
        let Some(up) = self.up_card() else {
            return Ok(self.players[seat].hand_total(&self.rules));
        };

        loop {
            let player = &mut self.players[seat];
            if !player.hit(up, &self.rules) || player.hand_total(&self.rules) >= self.rules.blackjack
            {
                break;
            }
            let card = self.draw_card();
            self.players[seat].take_card(card);
            self.played.push(card);
        }

        Ok(self.players[seat].hand_total(&self.rules))
    }

    /// Plays out the dealer's own hand and returns its final score.
    ///
    /// The dealer draws while any achievable total is below the stand
    /// threshold and stands on the first achievable total between the
    /// threshold and the target. When every total is over the target the
    /// dealer is bust and scores its least-bust total.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::WrongPhase`] outside the player-turns
    /// phase.
    pub fn play_dealer_hand(&mut self) -> Result<u32, RoundError> {
        self.ensure_phase(RoundPhase::PlayerTurns)?;
        self.phase = RoundPhase::DealerTurn;

        // An empty hand means nobody was dealt in this round.
        if self.hand.is_empty() {
            self.phase = RoundPhase::Settling;
            return Ok(0);
        }

        let score = loop {
            match dealer_call(&self.hand, &self.rules) {
                Some(total) => break total,
                None => {
                    let card = self.draw_card();
                    self.hand.add(card);
                    self.played.push(card);
                }
            }
        };

        self.phase = RoundPhase::Settling;
        Ok(score)
    }
}

/// Decides whether the dealer stands (`Some(score)`) or draws (`None`).
///
/// Scans the achievable totals from hard to soft: the first total below
/// the stand threshold draws, the first within the stand window stands.
/// Exhausting the scan means every total busts, and the least-bust total
/// is the score. The caller rescans from the top after every draw, since
/// a new card changes every total.
fn dealer_call(hand: &Hand, rules: &TableRules) -> Option<u32> {
    for &total in hand.totals() {
        if total < rules.dealer_stand {
            return None;
        }
        if total <= rules.blackjack {
            return Some(total);
        }
    }
    Some(hand.min_total())
}
