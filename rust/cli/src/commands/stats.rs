//! # Stats Command
//!
//! Aggregates a JSONL match record file (plain or .zst) into a summary:
//! match and round counts, the win/push/loss split, and the net score
//! movement across all recorded matches.
//!
//! Lines that fail to parse as JSON are reported and skipped; card codes
//! that fail validation are a hard error, since they mean the file was not
//! produced by this game.

use crate::error::CliError;
use crate::io_utils::read_text_auto;
use crate::parse_json_or_continue;
use hilo_engine::cards::Card;
use hilo_engine::logger::MatchRecord;
use hilo_engine::session::RoundClass;
use std::io::Write;

#[derive(Debug, Default)]
struct Totals {
    matches: u64,
    rounds: u64,
    wins: u64,
    pushes: u64,
    losses: u64,
    cost: u64,
    banked: u64,
}

fn check_codes(record: &MatchRecord) -> Result<(), CliError> {
    for round in &record.rounds {
        for code in [&round.house, &round.player] {
            Card::from_code(code)
                .map_err(|e| CliError::Record(format!("{}: {}", record.match_id, e)))?;
        }
    }
    Ok(())
}

/// Handle the stats command: read `input`, aggregate its records, and
/// print the summary to `out`. Parse failures go to `err` as warnings.
pub fn handle_stats_command(
    input: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let text = read_text_auto(input).map_err(CliError::Record)?;

    let mut totals = Totals::default();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record: MatchRecord = parse_json_or_continue!(line, err, format!("line {}", idx + 1));
        check_codes(&record)?;

        totals.matches += 1;
        totals.rounds += record.rounds.len() as u64;
        for round in &record.rounds {
            match round.class {
                RoundClass::Win => totals.wins += 1,
                RoundClass::Push => totals.pushes += 1,
                RoundClass::Loss => totals.losses += 1,
            }
        }
        totals.cost += record.cost;
        totals.banked += record.banked;
    }

    if totals.matches == 0 {
        return Err(CliError::Record(format!("no records found in {}", input)));
    }

    let net = totals.banked as i64 - totals.cost as i64;
    writeln!(out, "Matches: {}", totals.matches)?;
    writeln!(
        out,
        "Rounds: {} (win {} / push {} / loss {})",
        totals.rounds, totals.wins, totals.pushes, totals.losses
    )?;
    writeln!(out, "Total cost: {}", totals.cost)?;
    writeln!(out, "Total banked: {}", totals.banked)?;
    writeln!(out, "Net: {:+}", net)?;
    Ok(())
}
