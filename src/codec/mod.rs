//! Compact, URL-safe encoding of [`GameRecord`]s for sharing.
//!
//! Two payload generations are understood:
//!
//! - **V3** (current): a `|`-delimited text payload tagged `v3|` with one
//!   character per dart. See [`v3`].
//! - **Legacy JSON** (prior): a minified JSON object. See [`legacy`].
//!
//! Either payload is passed through LZ-String's URI-component compression.
//! Decoding sniffs the version tag, parses with the matching generation and
//! then rebuilds the derived fields (`score_after`, stats) by replaying the
//! darts through the ruleset reducer, since neither wire format stores them.
//!
//! ```
//! use dartrs::codec::{decode, encode};
//! use dartrs::{DartOutcome, Game, GameOptions};
//!
//! let game = Game::new(GameOptions::default());
//! game.record_throw(DartOutcome::triple(20));
//! let record = game.to_record("local-1", 1_700_000_000_000);
//!
//! let shared = decode(&encode(&record)).unwrap();
//! assert_eq!(shared.id, "shared-1700000000000");
//! assert_eq!(shared.final_score, record.final_score);
//! ```

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use tracing::debug;

use crate::dart::DartOutcome;
use crate::error::CodecError;
use crate::record::{GameRecord, RecordHeader};
use crate::rules::GameType;

pub mod legacy;
pub mod v3;

/// Payload generation to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WireFormat {
    /// Delimited text payload tagged `v3|`.
    #[default]
    V3,
    /// Minified JSON object used by earlier share links.
    LegacyJson,
}

/// The raw fields carried by either wire format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
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
    /// Darts per round.
    pub rounds: Vec<Vec<DartOutcome>>,
}

impl Payload {
    fn from_record(record: &GameRecord) -> Self {
        Self {
            game_type: record.game_type,
            target_score: record.target_score,
            date: record.date,
            winner: record.winner.clone(),
            final_score: record.final_score,
            rounds: record.throws(),
        }
    }

    fn into_record(self) -> GameRecord {
        GameRecord::rebuild(
            RecordHeader {
                id: format!("shared-{}", self.date),
                game_type: self.game_type,
                target_score: self.target_score,
                date: self.date,
                winner: self.winner,
                final_score: self.final_score,
            },
            self.rounds,
        )
    }
}

/// Encodes a record with the current (V3) format.
#[must_use]
pub fn encode(record: &GameRecord) -> String {
    encode_with(record, WireFormat::V3)
}

/// Encodes a record with the given format.
#[must_use]
pub fn encode_with(record: &GameRecord, format: WireFormat) -> String {
    let payload = Payload::from_record(record);
    let text = match format {
        WireFormat::V3 => v3::write(&payload),
        WireFormat::LegacyJson => legacy::write(&payload),
    };
    lz_str::compress_to_encoded_uri_component(text.as_str())
}

/// Decodes a shared record produced by either format generation.
///
/// The returned record gets a fresh id, `"shared-" + date`.
///
/// # Errors
///
/// Returns [`CodecError::DecompressionFailed`] if the input does not
/// decompress to text, and a legacy parsing error if an untagged payload is
/// not a legacy JSON record. A V3 payload never fails: missing or malformed
/// numeric fields default to 0.
pub fn decode(input: &str) -> Result<GameRecord, CodecError> {
    let text = decompress(input)?;
    let payload = if let Some(body) = text.strip_prefix(v3::TAG) {
        debug!(format = "v3", "decoding shared record");
        v3::parse(body)
    } else {
        debug!(format = "legacy", "decoding shared record");
        legacy::parse(&text)?
    };
    Ok(payload.into_record())
}

fn decompress(input: &str) -> Result<String, CodecError> {
    let units = lz_str::decompress_from_encoded_uri_component(input)
        .ok_or(CodecError::DecompressionFailed)?;
    if units.is_empty() {
        return Err(CodecError::DecompressionFailed);
    }
    String::from_utf16(&units).map_err(|_| CodecError::DecompressionFailed)
}

/// Winner code for the V3 format. Only `"Win"`/`"Player 1"` and `"Finish"`
/// survive; everything else becomes `"Lose"`.
#[must_use]
pub fn winner_code(winner: &str) -> char {
    match winner {
        "Win" | "Player 1" => '1',
        "Finish" => '2',
        _ => '0',
    }
}

/// Winner text for a V3 winner code.
#[must_use]
pub const fn winner_from_code(code: char) -> &'static str {
    match code {
        '1' => "Win",
        '2' => "Finish",
        _ => "Lose",
    }
}
