//! Plain-text rendering of a [`GameSnapshot`].

use std::fmt::Write;

use crate::domain::bidding::{BidVerdict, Entry};
use crate::domain::snapshot::GameSnapshot;
use crate::domain::state::{RoundOutcome, Standing};

const LABEL_WIDTH: usize = 6;
const MIN_COLUMN: usize = 5;

/// Score grid: names, pending entries, one row per round, totals.
pub fn render_grid(snap: &GameSnapshot) -> String {
    let widths: Vec<usize> = snap
        .players
        .iter()
        .map(|p| p.name.chars().count().max(MIN_COLUMN))
        .collect();
    let mut out = String::new();

    row(&mut out, "", snap.players.iter().map(|p| p.name.clone()), &widths);
    if let (false, Some(target)) = (snap.is_complete(), snap.current_target) {
        let _ = writeln!(
            out,
            "Round {}/{}, target {target}",
            snap.round_index + 1,
            snap.total_rounds
        );
        row(&mut out, "Bid", snap.players.iter().map(|p| entry(p.pending_bid)), &widths);
        row(&mut out, "Got", snap.players.iter().map(|p| entry(p.pending_achieved)), &widths);
        if let BidVerdict::Invalid { target, .. } = snap.bid_verdict {
            let _ = writeln!(out, "! Total bids cannot equal {target}");
        }
    }

    let _ = writeln!(out, "{}", "-".repeat(separator_width(&widths)));
    for (round, target) in snap.targets.iter().enumerate() {
        let marker = if round == snap.round_index && !snap.is_complete() {
            ">"
        } else {
            ""
        };
        let label = format!("{marker}{target}");
        row(
            &mut out,
            &label,
            snap.players
                .iter()
                .map(|p| p.round_scores[round].map(|s| s.to_string()).unwrap_or_default()),
            &widths,
        );
    }
    let _ = writeln!(out, "{}", "-".repeat(separator_width(&widths)));
    row(&mut out, "Total", snap.players.iter().map(|p| p.total.to_string()), &widths);

    if let Some(standings) = &snap.final_standings {
        out.push('\n');
        out.push_str(&render_final(standings));
    }
    out
}

/// Per-player scores of a just-committed round.
pub fn render_outcome(outcome: &RoundOutcome) -> String {
    let mut out = format!(
        "Round {} (target {}) scored:\n",
        outcome.round_index + 1,
        outcome.target
    );
    for s in &outcome.scores {
        let _ = writeln!(
            out,
            "  {}: bid {}, got {} -> {:+}",
            s.player, s.bid, s.achieved, s.score
        );
    }
    out
}

pub fn render_totals(standings: &[Standing]) -> String {
    let mut out = String::new();
    for s in standings {
        let _ = writeln!(out, "  {}: {}", s.player, s.total);
    }
    out
}

pub fn render_final(standings: &[Standing]) -> String {
    format!("Game Complete! Final scores:\n{}", render_totals(standings))
}

fn entry(value: Entry) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn separator_width(widths: &[usize]) -> usize {
    LABEL_WIDTH + widths.iter().map(|w| w + 1).sum::<usize>()
}

fn row<I>(out: &mut String, label: &str, cells: I, widths: &[usize])
where
    I: Iterator<Item = String>,
{
    let _ = write!(out, "{:<width$}", label, width = LABEL_WIDTH);
    for (cell, width) in cells.zip(widths.iter().copied()) {
        let _ = write!(out, " {cell:>width$}");
    }
    out.push('\n');
}
