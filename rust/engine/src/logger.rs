use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::compare::RoundOutcome;
use crate::session::{Guess, MatchSummary, RoundClass, RoundReport};

/// One round of a recorded match. Cards are stored as compact codes
/// ("AS", "10H") so records stay greppable; readers must re-validate the
/// codes through [`crate::cards::Card::from_code`].
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub house: String,
    pub player: String,
    pub guess: Guess,
    pub outcome: RoundOutcome,
    pub class: RoundClass,
    /// Reward that was at stake when the round resolved
    pub reward: u64,
}

impl From<&RoundReport> for RoundRecord {
    fn from(r: &RoundReport) -> Self {
        Self {
            house: r.house.code(),
            player: r.player.code(),
            guess: r.guess,
            outcome: r.outcome,
            class: r.class,
            reward: r.reward,
        }
    }
}

/// Complete record of one match, serialized to JSONL for later analysis.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Unique identifier for this match (format: YYYYMMDD-NNNNNN)
    pub match_id: String,
    /// RNG seed the deck was built with (enables deterministic replay)
    pub seed: Option<u64>,
    /// Match number within its session, starting at 1
    pub match_no: u32,
    /// Entry cost paid for the match
    pub cost: u64,
    /// Every round of the match in play order
    pub rounds: Vec<RoundRecord>,
    /// Score delta the match produced (0 on a loss)
    pub banked: u64,
    /// Player score after the match concluded
    pub score_after: u64,
    /// Timestamp when the match was recorded (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl MatchRecord {
    pub fn from_summary(
        match_id: String,
        seed: Option<u64>,
        match_no: u32,
        cost: u64,
        score_after: u64,
        summary: &MatchSummary,
    ) -> Self {
        Self {
            match_id,
            seed,
            match_no,
            cost,
            rounds: summary.rounds.iter().map(RoundRecord::from).collect(),
            banked: summary.banked,
            score_after,
            ts: None,
        }
    }
}

pub fn format_match_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Appends [`MatchRecord`]s to a JSONL file, one record per line.
pub struct SessionLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl SessionLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_match_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &MatchRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
