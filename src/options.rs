//! Game configuration options.

extern crate alloc;

use alloc::string::String;

use crate::rules::{DEFAULT_TARGET, GameType};

/// Winner text used when the player finishes.
pub const DEFAULT_WINNER: &str = "Player 1";

/// Configuration options for a darts game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use dartrs::{GameOptions, GameType};
///
/// let options = GameOptions::default()
///     .with_game_type(GameType::ZeroOne)
///     .with_target_score(501);
/// assert_eq!(options.target_score, 501);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Ruleset to play.
    pub game_type: GameType,
    /// Start score for 01.
    pub target_score: u32,
    /// Winner text recorded when the game is won.
    pub winner_label: String,
    /// Ends the game once this many rounds are complete. `None` plays on.
    pub max_rounds: Option<u32>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            game_type: GameType::ZeroOne,
            target_score: DEFAULT_TARGET,
            winner_label: String::from(DEFAULT_WINNER),
            max_rounds: None,
        }
    }
}

impl GameOptions {
    /// Sets the ruleset.
    ///
    /// # Example
    ///
    /// ```
    /// use dartrs::{GameOptions, GameType};
    ///
    /// let options = GameOptions::default().with_game_type(GameType::Cricket);
    /// assert_eq!(options.game_type, GameType::Cricket);
    /// ```
    #[must_use]
    pub const fn with_game_type(mut self, game_type: GameType) -> Self {
        self.game_type = game_type;
        self
    }

    /// Sets the 01 start score.
    #[must_use]
    pub const fn with_target_score(mut self, target_score: u32) -> Self {
        self.target_score = target_score;
        self
    }

    /// Sets the winner text.
    #[must_use]
    pub fn with_winner_label(mut self, label: impl Into<String>) -> Self {
        self.winner_label = label.into();
        self
    }

    /// Caps the number of rounds.
    ///
    /// # Example
    ///
    /// ```
    /// use dartrs::{GameOptions, GameType};
    ///
    /// let options = GameOptions::default()
    ///     .with_game_type(GameType::CountUp)
    ///     .with_max_rounds(8);
    /// assert_eq!(options.max_rounds, Some(8));
    /// ```
    #[must_use]
    pub const fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = Some(rounds);
        self
    }
}
