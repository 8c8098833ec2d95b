extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::dart::DartOutcome;
use crate::record::{GameRecord, RecordHeader};
use crate::rules::GameType;

use super::{Game, GameSession};

/// Winner text for a count-up that ran to its round cap.
pub const FINISH: &str = "Finish";

/// Winner text for a game that was not won.
pub const LOSE: &str = "Lose";

impl GameSession {
    /// Darts from history grouped by round, in play order.
    #[must_use]
    pub fn rounds(&self) -> Vec<Vec<DartOutcome>> {
        let mut rounds: Vec<(u32, Vec<DartOutcome>)> = Vec::new();
        for record in self.history() {
            match rounds.last_mut() {
                Some((round, darts)) if *round == record.round => darts.push(record.outcome),
                _ => rounds.push((record.round, alloc::vec![record.outcome])),
            }
        }
        rounds.into_iter().map(|(_, darts)| darts).collect()
    }

    /// Exports the session as a [`GameRecord`].
    #[must_use]
    pub fn to_record(&self, id: impl Into<String>, date: u64) -> GameRecord {
        let winner = match self.winner() {
            Some(winner) => String::from(winner),
            None if self.is_game_over() && self.game_type() == GameType::CountUp => {
                String::from(FINISH)
            }
            None => String::from(LOSE),
        };
        let target_score = match self.game_type() {
            GameType::ZeroOne => Some(self.target_score()),
            GameType::Cricket | GameType::CountUp => None,
        };

        GameRecord::rebuild(
            RecordHeader {
                id: id.into(),
                game_type: self.game_type(),
                target_score,
                date,
                winner,
                final_score: self.score(),
            },
            self.rounds(),
        )
    }
}

impl Game {
    /// Exports the current game as a [`GameRecord`] with the given store key
    /// and timestamp (milliseconds since the Unix epoch).
    ///
    /// # Example
    ///
    /// ```
    /// use dartrs::{DartOutcome, Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default());
    /// game.record_throw(DartOutcome::triple(20));
    /// let record = game.to_record("game-1", 1_700_000_000_000);
    /// assert_eq!(record.final_score, 241);
    /// assert_eq!(record.rounds.len(), 1);
    /// ```
    pub fn to_record(&self, id: impl Into<String>, date: u64) -> GameRecord {
        self.session.lock().to_record(id, date)
    }
}
