//! Current delimited payload.
//!
//! ```text
//! v3|<type 0-2>|<target base36>|<date base36>|<winner 0-2>|<final base36>|<darts>
//! ```
//!
//! Each dart is one character at code point `1000 + score * 3 + (multiplier - 1)`;
//! rounds are separated by code point 999. An absent target is an empty field.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use tracing::warn;

use crate::dart::{DartOutcome, Multiplier};
use crate::rules::GameType;

use super::{Payload, winner_code, winner_from_code};

/// Version tag that opens every V3 payload.
pub const TAG: &str = "v3|";

/// Code point of the first packed dart.
pub const DART_OFFSET: u32 = 1000;

/// Round separator.
pub const ROUND_SEPARATOR: char = '\u{3e7}';

const FIELD_SEPARATOR: char = '|';

/// Packed values for every `u8` score and multiplier.
const PACKED_DARTS: usize = (u8::MAX as usize + 1) * 3;

/// Payload characters indexed by packed value. The whole range sits below the
/// surrogate block, which the `const` evaluation checks.
const DART_CHARS: [char; PACKED_DARTS] = {
    let mut chars = ['\0'; PACKED_DARTS];
    let mut packed = 0;
    while packed < PACKED_DARTS {
        chars[packed] = match char::from_u32(DART_OFFSET + packed as u32) {
            Some(c) => c,
            None => panic!("packed dart outside the scalar value range"),
        };
        packed += 1;
    }
    chars
};

/// Packs a dart into its payload character.
#[must_use]
pub fn pack(dart: &DartOutcome) -> char {
    let packed = usize::from(dart.score) * 3 + usize::from(dart.multiplier.factor() - 1);
    DART_CHARS[packed]
}

/// Unpacks a payload character. Returns `None` below the dart range.
#[must_use]
pub fn unpack(c: char) -> Option<DartOutcome> {
    let packed = u32::from(c).checked_sub(DART_OFFSET)?;
    let score = u8::try_from(packed / 3).ok()?;
    let multiplier = Multiplier::from_factor((packed % 3) as u8 + 1)?;
    Some(DartOutcome::new(score, multiplier))
}

fn base36(mut value: u64) -> String {
    let mut digits = Vec::new();
    loop {
        let digit = (value % 36) as u32;
        digits.push(char::from_digit(digit, 36).unwrap_or('0'));
        value /= 36;
        if value == 0 {
            break;
        }
    }
    digits.iter().rev().collect()
}

fn signed_base36(value: i64) -> String {
    let digits = base36(value.unsigned_abs());
    if value < 0 {
        let mut signed = String::from("-");
        signed.push_str(&digits);
        signed
    } else {
        digits
    }
}

/// Serialises the payload to V3 text.
#[must_use]
pub fn write(payload: &Payload) -> String {
    let mut text = String::from(TAG);
    let fields = [
        base36(u64::from(payload.game_type.index())),
        payload
            .target_score
            .map(|target| base36(u64::from(target)))
            .unwrap_or_default(),
        base36(payload.date),
        String::from(winner_code(&payload.winner)),
        signed_base36(payload.final_score),
    ];
    for field in fields {
        text.push_str(&field);
        text.push(FIELD_SEPARATOR);
    }
    for (index, round) in payload.rounds.iter().enumerate() {
        if index > 0 {
            text.push(ROUND_SEPARATOR);
        }
        text.extend(round.iter().map(pack));
    }
    text
}

fn field<T: Default>(name: &str, raw: Option<&str>, parse: impl Fn(&str) -> Option<T>) -> T {
    let raw = raw.unwrap_or_default();
    parse(raw).unwrap_or_else(|| {
        warn!(field = name, raw, "malformed field, defaulting");
        T::default()
    })
}

/// Parses V3 text with the tag already stripped.
///
/// Parsing is lenient: a missing or malformed numeric field becomes 0 and
/// characters outside the dart range are skipped.
#[must_use]
pub fn parse(body: &str) -> Payload {
    let mut fields = body.splitn(6, FIELD_SEPARATOR);

    let game_type = field("type", fields.next(), |raw| {
        raw.parse::<u8>().ok().and_then(GameType::from_index)
    });
    let target_score = match fields.next() {
        None | Some("") => None,
        raw => Some(field("target", raw, |raw| {
            u32::from_str_radix(raw, 36).ok()
        })),
    };
    let date = field("date", fields.next(), |raw| u64::from_str_radix(raw, 36).ok());
    let winner = fields
        .next()
        .and_then(|raw| raw.chars().next())
        .map_or("Lose", winner_from_code);
    let final_score = field("final", fields.next(), |raw| {
        i64::from_str_radix(raw, 36).ok()
    });

    let darts = fields.next().unwrap_or_default();
    let rounds = if darts.is_empty() {
        Vec::new()
    } else {
        darts
            .split(ROUND_SEPARATOR)
            .map(|round| round.chars().filter_map(unpack).collect())
            .collect()
    };

    Payload {
        game_type,
        target_score,
        date,
        winner: String::from(winner),
        final_score,
        rounds,
    }
}
