//! A seated player.

use core::fmt;

use crate::card::Card;
use crate::error::HandError;
use crate::hand::Hand;
use crate::rules::TableRules;
use crate::strategy::Strategy;

/// A seat at the table: one hand, a balance, the most recent bet, and
/// the strategy making its decisions.
///
/// The balance persists across rounds; once it falls below the table
/// minimum the dealer removes the seat at settlement. All mutation goes
/// through the capability methods below; a player never touches the
/// shoe.
pub struct Player {
    hand: Hand,
    balance: usize,
    bet: usize,
    strategy: Box<dyn Strategy>,
}

impl Player {
    /// Seats a player with a starting balance and a strategy.
    #[must_use]
    pub fn new(balance: usize, strategy: impl Strategy + 'static) -> Self {
        Self {
            hand: Hand::new(),
            balance,
            bet: 0,
            strategy: Box::new(strategy),
        }
    }

    /// Rebuilds a seat from persisted balance and bet.
    pub(crate) fn from_snapshot(balance: usize, bet: usize, strategy: Box<dyn Strategy>) -> Self {
        Self {
            hand: Hand::new(),
            balance,
            bet,
            strategy,
        }
    }

    /// Places the strategy's bet for the coming round and returns it.
    ///
    /// A balance below the table minimum bets 0 (the seat sits the round
    /// out); otherwise the strategy's size is clamped into the table
    /// limits and to the available balance, so the balance can never go
    /// negative at settlement.
    pub fn make_bet(&mut self, rules: &TableRules) -> usize {
        self.bet = if self.balance < rules.min_bet {
            0
        } else {
            let ceiling = rules.max_bet.min(self.balance);
            let asked = self.strategy.bet_size(self.balance, rules);
            asked.max(rules.min_bet).min(ceiling)
        };
        self.bet
    }

    /// Adds a dealt card to the hand.
    pub fn take_card(&mut self, card: Card) {
        self.hand.add(card);
    }

    /// Asks the strategy whether to draw another card, given the
    /// dealer's visible card.
    pub fn hit(&mut self, dealer_up: Card, rules: &TableRules) -> bool {
        self.strategy.wants_card(&self.hand, dealer_up, rules)
    }

    /// The best total within the target, or the least-bust total when
    /// every total is over.
    #[must_use]
    pub fn hand_total(&self, rules: &TableRules) -> u32 {
        self.hand.best_total_at_most(rules.blackjack)
    }

    /// Returns whether the hand's best total hits the target exactly.
    #[must_use]
    pub fn blackjack(&self, rules: &TableRules) -> bool {
        self.hand_total(rules) == rules.blackjack
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self, rules: &TableRules) -> bool {
        self.hand.is_over(rules.blackjack)
    }

    /// Applies a signed stake to the balance and reports solvency.
    ///
    /// A positive stake is a win, a negative one a loss, and zero is a
    /// plain solvency probe. Returns whether the resulting balance still
    /// meets the table minimum.
    pub fn settle_bet(&mut self, stake: isize, rules: &TableRules) -> bool {
        if stake < 0 {
            self.balance = self.balance.saturating_sub(stake.unsigned_abs());
        } else {
            self.balance += stake as usize;
        }
        self.balance >= rules.min_bet
    }

    /// Clears the hand for the next round, returning the finished hand.
    ///
    /// # Errors
    ///
    /// Returns a [`HandError`] if the hand failed to drain cleanly; that
    /// signals a scoring-state bug and is propagated, never ignored.
    pub fn new_hand(&mut self) -> Result<Hand, HandError> {
        let finished = self.hand.clone();
        self.hand.remove_all()?;
        Ok(finished)
    }

    /// Shows the player every card played in the round just finished.
    pub fn view_cards(&mut self, cards: &[Card]) {
        self.strategy.saw_played_cards(cards);
    }

    /// Tells the player the shoe was refilled and reshuffled.
    pub fn new_deck(&mut self) {
        self.strategy.shoe_shuffled();
    }

    /// The current hand.
    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// The current balance.
    #[must_use]
    pub fn balance(&self) -> usize {
        self.balance
    }

    /// The most recent bet.
    #[must_use]
    pub fn bet(&self) -> usize {
        self.bet
    }

    /// The strategy's display name.
    #[must_use]
    pub fn label(&self) -> &str {
        self.strategy.label()
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("strategy", &self.strategy.label())
            .field("balance", &self.balance)
            .field("bet", &self.bet)
            .field("hand", &self.hand)
            .finish()
    }
}
