//! Output formatting for CLI

use serde::Serialize;

use crate::{analysis::OutcomeTally, tictactoe::Side};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print win, draw and loss counts with their rates
pub fn print_tally(tally: &OutcomeTally) {
    let total = tally.total();
    print_kv("Games", &format_number(total));
    print_kv(
        "Player one wins",
        &format!(
            "{} ({:.1}%)",
            format_number(tally.player_one_wins),
            tally.win_rate(Side::PlayerOne) * 100.0
        ),
    );
    print_kv(
        "Player two wins",
        &format!(
            "{} ({:.1}%)",
            format_number(tally.player_two_wins),
            tally.win_rate(Side::PlayerTwo) * 100.0
        ),
    );
    print_kv(
        "Draws",
        &format!(
            "{} ({:.1}%)",
            format_number(tally.draws),
            tally.draw_rate() * 100.0
        ),
    );
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
