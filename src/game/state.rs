//! Game state types.

use crate::dart::DartOutcome;

/// Where the game is in its flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Initialised, no dart recorded yet.
    Idle,
    /// Darts are being thrown in the current round.
    InProgress,
    /// Three darts are in; waiting for [`Game::next_round`](super::Game::next_round).
    RoundComplete,
    /// The game has been won or the round cap reached.
    GameOver,
}

/// Represents the current turn position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnPosition {
    /// One-based round number.
    pub round: u32,
    /// Darts already thrown this round (0..=3).
    pub throw_index: u8,
    /// Player at the oche.
    pub player_index: u8,
}

/// One entry of the append-only throw history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrowRecord {
    /// The dart.
    pub outcome: DartOutcome,
    /// Player who threw it.
    pub player_index: u8,
    /// Round it was thrown in.
    pub round: u32,
    /// Position within the round (0..=2).
    pub throw_index: u8,
}

/// A cricket opponent-closed flip, logged with the number of darts recorded
/// when it was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagToggle {
    /// History length at the time of the toggle.
    pub at: usize,
    /// Cricket number whose flag was flipped.
    pub number: u8,
}
