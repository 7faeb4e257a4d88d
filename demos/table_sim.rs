//! Multi-strategy table simulation.
//!
//! Seats a basic, an intermediate, and a counting player at one table
//! and plays a number of rounds (first argument, default 20), printing
//! each settlement.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use pontoon::{
    BasicStrategy, CountingStrategy, Dealer, IntermediateStrategy, Outcome, Player, TableRules,
};

const STARTING_BALANCE: usize = 200;

fn main() {
    let rounds: u32 = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(20);

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let rules = TableRules::default().with_min_bet(5);
    let mut dealer = Dealer::new(rules, seed);
    dealer
        .assign_players(vec![
            Player::new(STARTING_BALANCE, BasicStrategy::default()),
            Player::new(STARTING_BALANCE, IntermediateStrategy::default()),
            Player::new(STARTING_BALANCE, CountingStrategy::default()),
        ])
        .expect("a fresh table is between rounds");

    println!(
        "table minimum {}, {} rounds, seed {seed}",
        dealer.rules().min_bet,
        rounds
    );

    for round in 1..=rounds {
        if dealer.players().is_empty() {
            println!("every seat went broke after {} round(s)", round - 1);
            break;
        }

        // Labels by seat, captured before eliminations reshuffle the roster.
        let labels: Vec<String> = dealer
            .players()
            .iter()
            .map(|player| player.label().to_owned())
            .collect();

        println!("--- round {round} ---");
        match dealer.play_round() {
            Ok(summary) => {
                for seat in &summary.seats {
                    let flag = match seat.outcome {
                        Outcome::Win => "wins",
                        Outcome::Lose => "loses",
                        Outcome::Push => "pushes",
                        Outcome::Blackjack => "blackjack!",
                        Outcome::SatOut => "sits out",
                    };
                    println!(
                        "{:>12}  {:<10} score {:>2}  stake {:>4}  balance {}{}",
                        labels[seat.seat],
                        flag,
                        seat.score,
                        seat.stake,
                        seat.balance,
                        if seat.eliminated { "  (leaves the table)" } else { "" },
                    );
                }
                let dealer_note = if summary.dealer_bust { " (bust)" } else { "" };
                println!("{:>12}  score {}{}", "dealer", summary.dealer_score, dealer_note);
            }
            Err(err) => {
                eprintln!("round failed: {err}");
                break;
            }
        }
    }

    println!("--- final balances ---");
    for player in dealer.players() {
        println!("{:>12}  {}", player.label(), player.balance());
    }
}
