//! Per-ruleset scoring.
//!
//! [`Scoreboard`] holds one state shape per ruleset and applies a single dart
//! at a time. Both the live [`Game`](crate::Game) and record reconstruction in
//! the codec drive the same reducer, so a replayed record always scores the
//! way the game did.

extern crate alloc;

use alloc::collections::BTreeMap;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::dart::{DartOutcome, INNER_BULL, Multiplier, OUTER_BULL};
use crate::record::ScoreAfter;

/// Numbers in play for cricket, the bull last.
pub const CRICKET_NUMBERS: [u8; 7] = [15, 16, 17, 18, 19, 20, 25];

/// Marks needed to close a cricket number.
pub const MARKS_TO_CLOSE: u8 = 3;

/// Points any bull is worth in 01 and count-up (the soft-tip "fat bull").
pub const BULL_POINTS: u32 = 50;

/// Start score used when a 01 record carries no target.
pub const DEFAULT_TARGET: u32 = 301;

/// Ruleset variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameType {
    /// Count down from a target to exactly zero.
    #[default]
    #[serde(rename = "01")]
    ZeroOne,
    /// Close 15-20 and the bull, scoring surplus hits.
    #[serde(rename = "cricket")]
    Cricket,
    /// Accumulate points with no finish condition.
    #[serde(rename = "count_up")]
    CountUp,
}

impl GameType {
    /// Index used by the compact wire formats.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::ZeroOne => 0,
            Self::Cricket => 1,
            Self::CountUp => 2,
        }
    }

    /// Inverse of [`GameType::index`].
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::ZeroOne),
            1 => Some(Self::Cricket),
            2 => Some(Self::CountUp),
            _ => None,
        }
    }

    /// Persisted name of the ruleset.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ZeroOne => "01",
            Self::Cricket => "cricket",
            Self::CountUp => "count_up",
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a single dart did to the scoreboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThrowEffect {
    /// Points scored by the dart (0 for a bust).
    pub points: u32,
    /// Cricket marks hit on an in-play number, surplus included.
    pub marks: u8,
    /// The dart broke a 01 score and the round was reverted.
    pub bust: bool,
    /// The dart finished the game.
    pub finished: bool,
}

/// 01 state: remaining score and the baseline to revert to on a bust.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZeroOneBoard {
    /// Score still to be checked out.
    pub remaining: i64,
    /// Remaining score when the current round began.
    pub round_start: i64,
}

/// Cricket state for the player at the oche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CricketBoard {
    /// Marks per number, in [`CRICKET_NUMBERS`] order, capped at 3.
    pub marks: [u8; 7],
    /// Numbers the opponent has closed; surplus hits there score nothing.
    pub opponent_closed: [bool; 7],
    /// Running point score.
    pub points: u32,
}

impl CricketBoard {
    /// Position of `number` in [`CRICKET_NUMBERS`].
    #[must_use]
    pub fn slot(number: u8) -> Option<usize> {
        CRICKET_NUMBERS.iter().position(|&n| n == number)
    }

    /// Marks on `number`, or `None` if it is not in play.
    #[must_use]
    pub fn marks_on(&self, number: u8) -> Option<u8> {
        Self::slot(number).map(|slot| self.marks[slot])
    }

    /// Returns whether every number is closed.
    #[must_use]
    pub fn all_closed(&self) -> bool {
        self.marks.iter().all(|&m| m >= MARKS_TO_CLOSE)
    }

    /// Flips the opponent-closed flag. Returns `false` if `number` is not in
    /// play.
    pub fn toggle_opponent_closed(&mut self, number: u8) -> bool {
        match Self::slot(number) {
            Some(slot) => {
                self.opponent_closed[slot] = !self.opponent_closed[slot];
                true
            }
            None => false,
        }
    }

    /// Marks keyed by number.
    #[must_use]
    pub fn mark_map(&self) -> BTreeMap<u8, u8> {
        CRICKET_NUMBERS
            .iter()
            .copied()
            .zip(self.marks.iter().copied())
            .collect()
    }

    fn apply(&mut self, dart: &DartOutcome) -> ThrowEffect {
        // Any bull targets 25; the inner bull is always two marks.
        let (target, mut hits) = match dart.score {
            INNER_BULL => (OUTER_BULL, Multiplier::Double.factor()),
            n => (n, dart.multiplier.factor()),
        };

        let Some(slot) = Self::slot(target) else {
            return ThrowEffect::default();
        };
        let marks = hits;

        let current = self.marks[slot];
        if current < MARKS_TO_CLOSE {
            let used = hits.min(MARKS_TO_CLOSE - current);
            self.marks[slot] += used;
            hits -= used;
        }

        let mut points = 0;
        if hits > 0 && !self.opponent_closed[slot] {
            points = u32::from(hits) * u32::from(target);
            self.points += points;
        }

        ThrowEffect {
            points,
            marks,
            bust: false,
            finished: self.all_closed(),
        }
    }
}

/// Count-up state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountUpBoard {
    /// Points accumulated so far.
    pub total: u32,
}

/// Ruleset-specific scoring state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scoreboard {
    /// 01 count-down.
    ZeroOne(ZeroOneBoard),
    /// Cricket.
    Cricket(CricketBoard),
    /// Count-up.
    CountUp(CountUpBoard),
}

/// Points a dart is worth in 01 and count-up.
#[must_use]
pub const fn points_value(dart: &DartOutcome) -> u32 {
    if dart.is_bull() {
        BULL_POINTS
    } else {
        dart.value()
    }
}

impl Scoreboard {
    /// Canonical start state for a ruleset.
    #[must_use]
    pub fn new(game_type: GameType, target_score: u32) -> Self {
        match game_type {
            GameType::ZeroOne => Self::ZeroOne(ZeroOneBoard {
                remaining: i64::from(target_score),
                round_start: i64::from(target_score),
            }),
            GameType::Cricket => Self::Cricket(CricketBoard::default()),
            GameType::CountUp => Self::CountUp(CountUpBoard::default()),
        }
    }

    /// The ruleset this board scores.
    #[must_use]
    pub const fn game_type(&self) -> GameType {
        match self {
            Self::ZeroOne(_) => GameType::ZeroOne,
            Self::Cricket(_) => GameType::Cricket,
            Self::CountUp(_) => GameType::CountUp,
        }
    }

    /// Applies one dart.
    ///
    /// A 01 bust reverts the remaining score to the round baseline; the caller
    /// decides how to end the turn.
    pub fn apply(&mut self, dart: &DartOutcome) -> ThrowEffect {
        match self {
            Self::ZeroOne(board) => {
                let points = points_value(dart);
                let next = board.remaining - i64::from(points);
                if next < 0 {
                    board.remaining = board.round_start;
                    ThrowEffect {
                        bust: true,
                        ..ThrowEffect::default()
                    }
                } else {
                    board.remaining = next;
                    ThrowEffect {
                        points,
                        finished: next == 0,
                        ..ThrowEffect::default()
                    }
                }
            }
            Self::Cricket(board) => board.apply(dart),
            Self::CountUp(board) => {
                let points = points_value(dart);
                board.total += points;
                ThrowEffect {
                    points,
                    ..ThrowEffect::default()
                }
            }
        }
    }

    /// Closes a round. A non-bust 01 round becomes the new baseline; a bust
    /// round was already reverted.
    pub const fn end_round(&mut self, bust: bool) {
        if let Self::ZeroOne(board) = self {
            if !bust {
                board.round_start = board.remaining;
            }
        }
    }

    /// Headline score: remaining (01), points (cricket) or total (count-up).
    #[must_use]
    pub fn score(&self) -> i64 {
        match self {
            Self::ZeroOne(board) => board.remaining,
            Self::Cricket(board) => i64::from(board.points),
            Self::CountUp(board) => i64::from(board.total),
        }
    }

    /// Per-round snapshot stored in a [`RoundRecord`](crate::RoundRecord).
    #[must_use]
    pub fn score_after(&self) -> ScoreAfter {
        match self {
            Self::Cricket(board) => ScoreAfter::Marks(board.mark_map()),
            _ => ScoreAfter::Points(self.score()),
        }
    }

    /// The cricket board, if this is a cricket game.
    #[must_use]
    pub const fn cricket(&self) -> Option<&CricketBoard> {
        match self {
            Self::Cricket(board) => Some(board),
            _ => None,
        }
    }

    /// Mutable access to the cricket board.
    pub const fn cricket_mut(&mut self) -> Option<&mut CricketBoard> {
        match self {
            Self::Cricket(board) => Some(board),
            _ => None,
        }
    }
}
