//! Prior-generation JSON payload.
//!
//! ```json
//! {"t":0,"ts":301,"d":1700000000000,"w":"Win","fs":0,"r":[{"t":[[20,3],[20,3]]}]}
//! ```

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::dart::{DartOutcome, Multiplier};
use crate::error::CodecError;
use crate::rules::GameType;

use super::Payload;

#[derive(Debug, Serialize, Deserialize)]
struct LegacyRound {
    #[serde(default)]
    t: Vec<(u8, u8)>,
}

#[derive(Debug, Serialize, Deserialize)]
struct LegacyRecord {
    #[serde(default)]
    t: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ts: Option<u32>,
    #[serde(default)]
    d: u64,
    #[serde(default)]
    w: String,
    #[serde(default)]
    fs: serde_json::Value,
    #[serde(default)]
    r: Vec<LegacyRound>,
}

/// Serialises the payload as legacy JSON.
#[must_use]
pub fn write(payload: &Payload) -> String {
    let record = LegacyRecord {
        t: payload.game_type.index(),
        ts: payload.target_score,
        d: payload.date,
        w: payload.winner.clone(),
        fs: serde_json::Value::from(payload.final_score),
        r: payload
            .rounds
            .iter()
            .map(|round| LegacyRound {
                t: round
                    .iter()
                    .map(|dart| (dart.score, dart.multiplier.factor()))
                    .collect(),
            })
            .collect(),
    };
    serde_json::to_string(&record).unwrap_or_default()
}

fn final_score(value: &serde_json::Value) -> i64 {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f as i64))
        .unwrap_or_else(|| {
            warn!(%value, "non-numeric final score, defaulting");
            0
        })
}

/// Parses legacy JSON text.
///
/// # Errors
///
/// Returns [`CodecError::InvalidJson`] if the text is not a JSON object of
/// the legacy layout, or [`CodecError::UnknownGameType`] for a ruleset index
/// outside 0..=2.
pub fn parse(text: &str) -> Result<Payload, CodecError> {
    let record: LegacyRecord =
        serde_json::from_str(text).map_err(|_| CodecError::InvalidJson)?;
    let game_type = GameType::from_index(record.t).ok_or(CodecError::UnknownGameType(record.t))?;

    let rounds = record
        .r
        .into_iter()
        .map(|round| {
            round
                .t
                .into_iter()
                .map(|(score, factor)| {
                    let multiplier = Multiplier::from_factor(factor).unwrap_or_else(|| {
                        warn!(factor, "invalid multiplier, counting as single");
                        Multiplier::Single
                    });
                    DartOutcome::new(score, multiplier)
                })
                .collect()
        })
        .collect();

    Ok(Payload {
        game_type,
        target_score: record.ts,
        date: record.d,
        winner: record.w,
        final_score: final_score(&record.fs),
        rounds,
    })
}
