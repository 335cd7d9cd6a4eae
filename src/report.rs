//! Verbose diagnostics: for each legal root move, one line with
//! the move, its share of total merged visits, and its win rate among those
//! visits (both rounded to the nearest integer), followed by an unrounded
//! "Best: …" line. Formatting is advisory, no other code depends on the
//! exact text, but it's a pure function so it can be tested without a
//! `tracing` subscriber attached.

use std::collections::BTreeMap;
use std::fmt::Display;

fn win_percentage(wins: f64, visits: u64) -> f64 {
    if visits == 0 {
        0.0
    } else {
        100.0 * wins / visits as f64
    }
}

fn visit_share(visits: u64, total_visits: u64) -> f64 {
    if total_visits == 0 {
        0.0
    } else {
        100.0 * visits as f64 / total_visits as f64
    }
}

pub(crate) fn move_line<M: Display>(mv: M, visits: u64, wins: f64, total_visits: u64) -> String {
    format!(
        "{mv}: {:.0}% of visits, {:.0}% wins",
        visit_share(visits, total_visits),
        win_percentage(wins, visits)
    )
}

pub(crate) fn best_line<M: Display>(mv: M, visits: u64, wins: f64, total_visits: u64) -> String {
    format!(
        "Best: {mv} ({:.2}% of visits, {:.2}% wins)",
        visit_share(visits, total_visits),
        win_percentage(wins, visits)
    )
}

/// Emit one `tracing::info!` line per move in `merged`, plus a final "Best:
/// …" line for `best_move`.
pub(crate) fn log_summary<M: Copy + Ord + Display>(merged: &BTreeMap<M, (f64, u64)>, best_move: M) {
    let total_visits: u64 = merged.values().map(|&(_, visits)| visits).sum();

    for (&mv, &(wins, visits)) in merged {
        tracing::info!("{}", move_line(mv, visits, wins, total_visits));
    }

    if let Some(&(wins, visits)) = merged.get(&best_move) {
        tracing::info!("{}", best_line(best_move, visits, wins, total_visits));
    }
}
