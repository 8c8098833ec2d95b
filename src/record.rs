//! Persisted game records and derived statistics.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::dart::DartOutcome;
use crate::rules::{DEFAULT_TARGET, GameType, Scoreboard};

#[cfg(feature = "std")]
fn round(value: f64) -> f64 {
    value.round()
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round(value: f64) -> f64 {
    libm::round(value)
}

/// Rounds to two decimal places.
fn round2(value: f64) -> f64 {
    round(value * 100.0) / 100.0
}

/// Score snapshot at the end of a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ScoreAfter {
    /// Remaining (01) or accumulated (count-up) points.
    Points(i64),
    /// Cricket marks keyed by number.
    Marks(BTreeMap<u8, u8>),
}

// Untagged content buffering cannot read integer map keys back from JSON
// strings, so marks go through string keys.
impl<'de> Deserialize<'de> for ScoreAfter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Points(i64),
            Marks(BTreeMap<String, u8>),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Points(points) => Ok(Self::Points(points)),
            Raw::Marks(marks) => marks
                .into_iter()
                .map(|(number, count)| {
                    number
                        .parse::<u8>()
                        .map(|number| (number, count))
                        .map_err(serde::de::Error::custom)
                })
                .collect::<Result<_, _>>()
                .map(Self::Marks),
        }
    }
}

/// One round of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// One-based round number.
    pub round: u32,
    /// Darts thrown, at most three in a played round.
    pub throws: Vec<DartOutcome>,
    /// Score state after the round.
    #[serde(rename = "scoreAfter")]
    pub score_after: ScoreAfter,
}

/// Scoring-rate statistics.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GameStats {
    /// Points per dart.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ppd: Option<f64>,
    /// Points per round (three darts).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ppr: Option<f64>,
    /// Marks per round (cricket).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mpr: Option<f64>,
}

impl GameStats {
    /// Computes the statistics for a whole record.
    ///
    /// 01 scores `target - final_score` points, count-up scores
    /// `final_score`, cricket uses the raw mark tally. Every rate is rounded
    /// to two decimals, and PPR is derived from the rounded PPD.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "dart and point counts are far below f64 precision"
    )]
    pub fn compute(
        game_type: GameType,
        target_score: Option<u32>,
        final_score: i64,
        darts: usize,
        marks: u32,
    ) -> Self {
        let mut stats = Self::default();
        if darts == 0 {
            return stats;
        }

        let points = match game_type {
            GameType::ZeroOne => target_score.map(|target| i64::from(target) - final_score),
            GameType::CountUp => Some(final_score),
            GameType::Cricket => None,
        };

        if let Some(points) = points {
            let ppd = round2(points as f64 / darts as f64);
            stats.ppd = Some(ppd);
            stats.ppr = Some(round2(ppd * 3.0));
        }

        if game_type == GameType::Cricket {
            let rounds = darts as f64 / 3.0;
            stats.mpr = Some(round2(f64::from(marks) / rounds));
        }

        stats
    }
}

/// A finished or shared game.
///
/// Records are values: the codec and the history store only ever hand out
/// copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Store key.
    pub id: String,
    /// Ruleset.
    #[serde(rename = "type")]
    pub game_type: GameType,
    /// Start score for 01.
    #[serde(
        default,
        rename = "targetScore",
        skip_serializing_if = "Option::is_none"
    )]
    pub target_score: Option<u32>,
    /// Milliseconds since the Unix epoch.
    pub date: u64,
    /// Winner text, e.g. `"Win"`, `"Finish"` or `"Lose"`.
    pub winner: String,
    /// Remaining (01), points (cricket) or total (count-up) at the end.
    #[serde(rename = "finalScore")]
    pub final_score: i64,
    /// Rounds in play order.
    pub rounds: Vec<RoundRecord>,
    /// Derived statistics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<GameStats>,
}

/// Fields of a record that are stored as-is rather than derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordHeader {
    /// Store key.
    pub id: String,
    /// Ruleset.
    pub game_type: GameType,
    /// Start score for 01.
    pub target_score: Option<u32>,
    /// Milliseconds since the Unix epoch.
    pub date: u64,
    /// Winner text.
    pub winner: String,
    /// Final score.
    pub final_score: i64,
}

impl GameRecord {
    /// Builds a record from raw throws, replaying them through the ruleset
    /// reducer to fill in each round's `score_after` and the statistics.
    ///
    /// Rounds without a dart are dropped and the rest renumbered from 1, so
    /// every round holds one to three darts.
    #[must_use]
    pub fn rebuild(header: RecordHeader, rounds: Vec<Vec<DartOutcome>>) -> Self {
        let target = header.target_score.unwrap_or(DEFAULT_TARGET);
        let mut board = Scoreboard::new(header.game_type, target);
        let mut darts = 0;
        let mut marks = 0;

        let rounds: Vec<RoundRecord> = rounds
            .into_iter()
            .filter(|throws| !throws.is_empty())
            .enumerate()
            .map(|(index, throws)| {
                darts += throws.len();
                let mut bust = false;
                for dart in &throws {
                    if bust {
                        // a bust ends the turn; later darts never scored
                        continue;
                    }
                    let effect = board.apply(dart);
                    marks += u32::from(effect.marks);
                    bust = effect.bust;
                }
                let score_after = board.score_after();
                board.end_round(bust);
                RoundRecord {
                    round: index as u32 + 1,
                    throws,
                    score_after,
                }
            })
            .collect();

        let stats = GameStats::compute(
            header.game_type,
            header.target_score,
            header.final_score,
            darts,
            marks,
        );

        Self {
            id: header.id,
            game_type: header.game_type,
            target_score: header.target_score,
            date: header.date,
            winner: header.winner,
            final_score: header.final_score,
            rounds,
            stats: Some(stats),
        }
    }

    /// Total darts across all rounds.
    #[must_use]
    pub fn dart_count(&self) -> usize {
        self.rounds.iter().map(|round| round.throws.len()).sum()
    }

    /// Raw throws grouped per round.
    #[must_use]
    pub fn throws(&self) -> Vec<Vec<DartOutcome>> {
        self.rounds.iter().map(|round| round.throws.clone()).collect()
    }
}
