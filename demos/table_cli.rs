//! Interactive blackjack: a human seat against the house policy.
//!
//! Bets and hit/stand decisions are prompted on stdin; everything else
//! runs through the same engine the automated strategies use.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use pontoon::{
    BasicStrategy, Card, Dealer, Hand, Outcome, Player, Strategy, TableRules,
};

/// Bets and decisions supplied from the terminal.
struct PromptStrategy;

impl Strategy for PromptStrategy {
    fn bet_size(&mut self, balance: usize, rules: &TableRules) -> usize {
        println!("your balance: {balance}");
        loop {
            let Some(bet) =
                prompt_usize(&format!("bet amount ({}-{}): ", rules.min_bet, rules.max_bet))
            else {
                // quitting mid-prompt sits the round out
                return 0;
            };
            if bet >= rules.min_bet {
                return bet;
            }
            println!("the table minimum is {}.", rules.min_bet);
        }
    }

    fn wants_card(&mut self, hand: &Hand, dealer_up: Card, rules: &TableRules) -> bool {
        let total = hand.best_total_at_most(rules.blackjack);
        println!("dealer shows: {dealer_up}");
        println!("your hand ({total}): {hand}");

        // Nothing to decide once bust or on the target.
        if hand.is_over(rules.blackjack) || total == rules.blackjack {
            return false;
        }
        matches!(prompt_line("hit? (y/n): ").as_str(), "y" | "yes")
    }

    fn saw_played_cards(&mut self, cards: &[Card]) {
        println!("cards played this round:");
        for card in cards {
            println!("  {card}");
        }
    }

    fn shoe_shuffled(&mut self) {
        println!("the dealer reshuffled the shoe.");
    }

    fn label(&self) -> &str {
        "you"
    }
}

fn main() {
    println!("Blackjack (type 'q' at a prompt to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let rules = TableRules::default();
    let mut dealer = Dealer::new(rules, seed);
    dealer
        .assign_players(vec![
            Player::new(200, PromptStrategy),
            Player::new(200, BasicStrategy::default()),
        ])
        .expect("a fresh table is between rounds");

    loop {
        if dealer.players().is_empty() {
            println!("everyone is out of money. game over.");
            break;
        }

        let labels: Vec<String> = dealer
            .players()
            .iter()
            .map(|player| player.label().to_owned())
            .collect();

        match dealer.play_round() {
            Ok(summary) => {
                println!("round complete. dealer scored {}.", summary.dealer_score);
                for seat in &summary.seats {
                    let flag = match seat.outcome {
                        Outcome::Win => "won",
                        Outcome::Lose => "lost",
                        Outcome::Push => "pushed",
                        Outcome::Blackjack => "hit blackjack",
                        Outcome::SatOut => "sat out",
                    };
                    println!(
                        "{} {} (stake {:+}, balance {})",
                        labels[seat.seat], flag, seat.stake, seat.balance
                    );
                }
            }
            Err(err) => {
                println!("round error: {err}");
                break;
            }
        }

        if prompt_line("another round? (y/n): ").as_str() != "y" {
            println!("thanks for playing.");
            break;
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("please enter a number."),
        }
    }
}
