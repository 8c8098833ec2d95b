use tracing::debug;

use crate::dart::DartOutcome;
use crate::result::ThrowResult;

use super::{Game, GameSession};

impl Game {
    /// Records a dart.
    ///
    /// Calls after the game is over, while the round awaits
    /// [`Game::next_round`], or beyond the third dart are ignored and return
    /// [`ThrowResult::Ignored`].
    ///
    /// # Example
    ///
    /// ```
    /// use dartrs::{DartOutcome, Game, GameOptions, ThrowResult};
    ///
    /// let game = Game::new(GameOptions::default().with_target_score(40));
    /// assert_eq!(game.record_throw(DartOutcome::triple(20)), ThrowResult::Bust);
    /// assert_eq!(game.score(), 40);
    /// assert!(game.is_bust());
    /// ```
    pub fn record_throw(&self, outcome: DartOutcome) -> ThrowResult {
        self.session.lock().record_throw(outcome)
    }

    /// Starts the next round.
    pub fn next_round(&self) {
        self.session.lock().next_round();
    }

    /// Removes the most recent dart.
    ///
    /// The session is rebuilt by replaying the remaining history and the
    /// opponent-closed toggles from a fresh start, so bust reversions and
    /// wins unwind exactly and every dart scores against the flags that were
    /// set when it was thrown. Toggles made after the removed dart stay in
    /// effect. Returns `false` when there is nothing to undo.
    pub fn undo(&self) -> bool {
        let options = self.options();
        let mut session = self.session.lock();

        let Some((last, remaining)) = session.history().split_last() else {
            return false;
        };
        let last = *last;

        let mut rebuilt = GameSession::replay(&options, remaining, session.toggles());
        rebuilt.rebuild_turn();

        // undoing the first dart of a round leaves the replay at the end of
        // the previous one
        if rebuilt.position().round < last.round {
            rebuilt.next_round();
        }

        debug!(
            replayed = remaining.len(),
            round = rebuilt.position().round,
            "undo"
        );
        *session = rebuilt;
        true
    }

    /// Flips the opponent-closed flag for a cricket number.
    ///
    /// Returns `false` if not playing cricket or `number` is not one of
    /// 15-20 or 25.
    pub fn toggle_opponent_closed(&self, number: u8) -> bool {
        self.session.lock().toggle_opponent_closed(number)
    }
}
