//! Hand scoring engine tests.

use pontoon::{Card, Hand, HandError, Rank, Suit};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn hand_of(cards: &[Card]) -> Hand {
    cards.iter().copied().collect()
}

#[test]
fn empty_hand_scores_zero() {
    let hand = Hand::new();
    assert_eq!(hand.totals(), &[0]);
    assert_eq!(hand.best_total_at_most(21), 0);
    assert!(!hand.is_over(21));
    assert!(hand.is_empty());
}

#[test]
fn each_ace_adds_one_total() {
    let mut hand = Hand::new();

    hand.add(card(Rank::Ace, Suit::Clubs));
    assert_eq!(hand.totals(), &[11, 1]);

    hand.add(card(Rank::Ace, Suit::Spades));
    assert_eq!(hand.totals(), &[22, 12, 2]);

    hand.add(card(Rank::Nine, Suit::Hearts));
    assert_eq!(hand.totals(), &[31, 21, 11]);

    // Two aces and a nine make 21 with one ace high, so not bust.
    assert!(!hand.is_over(21));
    assert_eq!(hand.best_total_at_most(21), 21);
    assert_eq!(hand.max_total(), 31);
    assert_eq!(hand.min_total(), 11);
}

#[test]
fn hand_without_aces_has_a_single_total() {
    let hand = hand_of(&[
        card(Rank::King, Suit::Clubs),
        card(Rank::Queen, Suit::Spades),
        card(Rank::Five, Suit::Hearts),
    ]);
    assert_eq!(hand.totals(), &[25]);
    assert!(hand.is_over(21));
    // Every total busts, so the least-bust total is reported.
    assert_eq!(hand.best_total_at_most(21), 25);
}

#[test]
fn totals_step_down_ten_per_ace() {
    let hand = hand_of(&[
        card(Rank::Ace, Suit::Clubs),
        card(Rank::Ace, Suit::Diamonds),
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Seven, Suit::Spades),
    ]);
    assert_eq!(hand.totals(), &[40, 30, 20, 10]);
    assert_eq!(hand.totals().len(), hand.count_rank(Rank::Ace) + 1);
    assert_eq!(hand.best_total_at_most(21), 20);
}

#[test]
fn add_then_remove_restores_scoring_state() {
    let mut hand = hand_of(&[card(Rank::Ace, Suit::Clubs), card(Rank::Five, Suit::Hearts)]);
    let before = hand.clone();

    hand.add(card(Rank::King, Suit::Diamonds));
    assert_eq!(hand.totals(), &[26, 16]);

    hand.remove_card(card(Rank::King, Suit::Diamonds)).unwrap();
    assert_eq!(hand, before);
}

#[test]
fn removing_an_absent_card_changes_nothing() {
    let mut hand = hand_of(&[card(Rank::Ace, Suit::Clubs), card(Rank::Five, Suit::Hearts)]);
    let before = hand.clone();

    assert_eq!(
        hand.remove_card(card(Rank::King, Suit::Hearts)),
        Err(HandError::CardNotPresent)
    );
    assert_eq!(hand, before);
}

#[test]
fn remove_at_returns_the_card_and_checks_bounds() {
    let mut hand = hand_of(&[
        card(Rank::Two, Suit::Clubs),
        card(Rank::Nine, Suit::Spades),
    ]);

    assert_eq!(hand.remove_at(5), Err(HandError::OutOfBounds(5)));

    let removed = hand.remove_at(1).unwrap();
    assert_eq!(removed, card(Rank::Nine, Suit::Spades));
    assert_eq!(hand.totals(), &[2]);
    assert_eq!(hand.len(), 1);
}

#[test]
fn remove_all_drains_every_card() {
    let mut hand = hand_of(&[
        card(Rank::Ace, Suit::Clubs),
        card(Rank::Ace, Suit::Diamonds),
        card(Rank::King, Suit::Hearts),
        card(Rank::Two, Suit::Spades),
    ]);

    hand.remove_all().unwrap();
    assert!(hand.is_empty());
    assert_eq!(hand.totals(), &[0]);
    assert_eq!(hand.count_rank(Rank::Ace), 0);
    assert_eq!(hand.count_suit(Suit::Hearts), 0);
}

#[test]
fn histograms_count_ranks_and_suits() {
    let mut hand = hand_of(&[
        card(Rank::Five, Suit::Hearts),
        card(Rank::Five, Suit::Clubs),
        card(Rank::Ace, Suit::Hearts),
    ]);

    assert_eq!(hand.count_rank(Rank::Five), 2);
    assert_eq!(hand.count_rank(Rank::Ace), 1);
    assert_eq!(hand.count_rank(Rank::King), 0);
    assert_eq!(hand.count_suit(Suit::Hearts), 2);
    assert_eq!(hand.count_suit(Suit::Clubs), 1);
    assert_eq!(hand.count_suit(Suit::Spades), 0);

    hand.remove_card(card(Rank::Five, Suit::Hearts)).unwrap();
    assert_eq!(hand.count_rank(Rank::Five), 1);
    assert_eq!(hand.count_suit(Suit::Hearts), 1);
}

#[test]
fn sorting_changes_display_order_only() {
    let mut hand = hand_of(&[
        card(Rank::King, Suit::Spades),
        card(Rank::Two, Suit::Hearts),
        card(Rank::Two, Suit::Clubs),
    ]);
    let dealt = hand.dealt().to_vec();
    let totals = hand.totals().to_vec();

    hand.sort_ascending();
    assert_eq!(
        hand.cards(),
        &[
            card(Rank::Two, Suit::Clubs),
            card(Rank::Two, Suit::Hearts),
            card(Rank::King, Suit::Spades),
        ]
    );
    // The dealt order and the scoring state survive the sort.
    assert_eq!(hand.dealt(), dealt.as_slice());
    assert_eq!(hand.totals(), totals.as_slice());

    hand.sort_descending();
    assert_eq!(
        hand.cards(),
        &[
            card(Rank::King, Suit::Spades),
            card(Rank::Two, Suit::Hearts),
            card(Rank::Two, Suit::Clubs),
        ]
    );
    assert_eq!(hand.dealt(), dealt.as_slice());
}

#[test]
fn reversed_returns_a_copy() {
    let hand = hand_of(&[
        card(Rank::Two, Suit::Clubs),
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Ace, Suit::Spades),
    ]);

    let reversed = hand.reversed();
    assert_eq!(
        reversed.cards(),
        &[
            card(Rank::Ace, Suit::Spades),
            card(Rank::Nine, Suit::Hearts),
            card(Rank::Two, Suit::Clubs),
        ]
    );
    assert_eq!(reversed.totals(), hand.totals());
    // The original keeps its order.
    assert_eq!(
        hand.cards(),
        &[
            card(Rank::Two, Suit::Clubs),
            card(Rank::Nine, Suit::Hearts),
            card(Rank::Ace, Suit::Spades),
        ]
    );
}

#[test]
fn serialized_hand_rebuilds_derived_state() {
    let hand = hand_of(&[card(Rank::Ace, Suit::Clubs), card(Rank::Five, Suit::Hearts)]);

    let json = serde_json::to_string(&hand).unwrap();
    let restored: Hand = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.totals(), &[16, 6]);
    assert_eq!(restored.count_rank(Rank::Ace), 1);
    assert_eq!(restored.count_suit(Suit::Hearts), 1);
    assert_eq!(restored.dealt(), hand.dealt());
}
