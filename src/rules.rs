//! Table configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a blackjack table.
///
/// Use the builder pattern to customize rules:
///
/// ```
/// use pontoon::TableRules;
///
/// let rules = TableRules::default()
///     .with_min_bet(5)
///     .with_dealer_stand(16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRules {
    /// Smallest bet a seat may place; a balance below this is insolvent.
    pub min_bet: usize,
    /// Largest bet a seat may place.
    pub max_bet: usize,
    /// The target total (21 in the standard game).
    pub blackjack: u32,
    /// The dealer draws below this total and stands at or above it.
    pub dealer_stand: u32,
    /// The shoe is refilled and reshuffled once it holds fewer cards
    /// than this.
    pub restock_at: usize,
    /// Whether seats that bet nothing are still dealt cards.
    pub deal_on_zero_bet: bool,
}

impl Default for TableRules {
    fn default() -> Self {
        Self {
            min_bet: 1,
            max_bet: 500,
            blackjack: 21,
            dealer_stand: 17,
            restock_at: 13,
            deal_on_zero_bet: false,
        }
    }
}

impl TableRules {
    /// Sets the minimum bet.
    ///
    /// # Example
    ///
    /// ```
    /// use pontoon::TableRules;
    ///
    /// let rules = TableRules::default().with_min_bet(5);
    /// assert_eq!(rules.min_bet, 5);
    /// ```
    #[must_use]
    pub const fn with_min_bet(mut self, min_bet: usize) -> Self {
        self.min_bet = min_bet;
        self
    }

    /// Sets the maximum bet.
    ///
    /// # Example
    ///
    /// ```
    /// use pontoon::TableRules;
    ///
    /// let rules = TableRules::default().with_max_bet(1000);
    /// assert_eq!(rules.max_bet, 1000);
    /// ```
    #[must_use]
    pub const fn with_max_bet(mut self, max_bet: usize) -> Self {
        self.max_bet = max_bet;
        self
    }

    /// Sets the target total.
    ///
    /// # Example
    ///
    /// ```
    /// use pontoon::TableRules;
    ///
    /// let rules = TableRules::default().with_blackjack(24);
    /// assert_eq!(rules.blackjack, 24);
    /// ```
    #[must_use]
    pub const fn with_blackjack(mut self, blackjack: u32) -> Self {
        self.blackjack = blackjack;
        self
    }

    /// Sets the total the dealer stands at.
    ///
    /// # Example
    ///
    /// ```
    /// use pontoon::TableRules;
    ///
    /// let rules = TableRules::default().with_dealer_stand(16);
    /// assert_eq!(rules.dealer_stand, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_stand(mut self, dealer_stand: u32) -> Self {
        self.dealer_stand = dealer_stand;
        self
    }

    /// Sets the shoe size below which the dealer restocks.
    ///
    /// # Example
    ///
    /// ```
    /// use pontoon::TableRules;
    ///
    /// let rules = TableRules::default().with_restock_at(26);
    /// assert_eq!(rules.restock_at, 26);
    /// ```
    #[must_use]
    pub const fn with_restock_at(mut self, restock_at: usize) -> Self {
        self.restock_at = restock_at;
        self
    }

    /// Sets whether zero-bet seats are still dealt cards.
    ///
    /// # Example
    ///
    /// ```
    /// use pontoon::TableRules;
    ///
    /// let rules = TableRules::default().with_deal_on_zero_bet(true);
    /// assert!(rules.deal_on_zero_bet);
    /// ```
    #[must_use]
    pub const fn with_deal_on_zero_bet(mut self, deal: bool) -> Self {
        self.deal_on_zero_bet = deal;
        self
    }
}
