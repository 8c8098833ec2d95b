//! Game engine and state management.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::dart::DartOutcome;
use crate::options::GameOptions;
use crate::rules::{CricketBoard, GameType};
use crate::sync::Mutex;

mod actions;
mod export;
pub mod session;
pub mod state;

pub use session::{DARTS_PER_ROUND, GameSession};
pub use state::{FlagToggle, GamePhase, ThrowRecord, TurnPosition};

/// A darts game engine that owns one game's session state.
///
/// All commands take `&self`; the session sits behind a lock and every
/// command either completes or leaves the previous state in place.
pub struct Game {
    /// Options the current game was started with.
    options: Mutex<GameOptions>,
    /// Session state.
    session: Mutex<GameSession>,
}

impl Game {
    /// Creates a game and starts it with the given options.
    ///
    /// # Example
    ///
    /// ```
    /// use dartrs::{Game, GameOptions, GamePhase};
    ///
    /// let game = Game::new(GameOptions::default().with_target_score(501));
    /// assert_eq!(game.score(), 501);
    /// assert_eq!(game.phase(), GamePhase::Idle);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions) -> Self {
        let session = GameSession::new(&options);
        Self {
            options: Mutex::new(options),
            session: Mutex::new(session),
        }
    }

    /// Resets to the canonical start state for `game_type`.
    ///
    /// `target_score` is the 01 start score; other rulesets ignore it. The
    /// throw history is cleared, whatever state the game was in.
    pub fn init_game(&self, game_type: GameType, target_score: u32) {
        let mut options = self.options.lock();
        options.game_type = game_type;
        options.target_score = target_score;
        let session = GameSession::new(&options);
        drop(options);
        self.session.replace(session);
    }

    /// Returns the options the current game was started with.
    pub fn options(&self) -> GameOptions {
        self.options.lock().clone()
    }

    /// Returns a copy of the full session state.
    pub fn snapshot(&self) -> GameSession {
        self.session.lock().clone()
    }

    /// Returns the current phase.
    pub fn phase(&self) -> GamePhase {
        self.session.lock().phase()
    }

    /// Returns the ruleset being played.
    pub fn game_type(&self) -> GameType {
        self.session.lock().game_type()
    }

    /// Returns the current turn position.
    pub fn position(&self) -> TurnPosition {
        self.session.lock().position()
    }

    /// Returns the headline score: remaining (01), points (cricket) or total
    /// (count-up).
    pub fn score(&self) -> i64 {
        self.session.lock().score()
    }

    /// Returns the cricket state, if playing cricket.
    pub fn cricket(&self) -> Option<CricketBoard> {
        self.session.lock().cricket().copied()
    }

    /// Returns the darts thrown in the current round.
    pub fn turn(&self) -> Vec<DartOutcome> {
        self.session.lock().turn().to_vec()
    }

    /// Returns the throw history.
    pub fn history(&self) -> Vec<ThrowRecord> {
        self.session.lock().history().to_vec()
    }

    /// Returns the opponent-closed toggle log.
    pub fn toggles(&self) -> Vec<FlagToggle> {
        self.session.lock().toggles().to_vec()
    }

    /// Returns whether the last dart was a bust.
    pub fn is_bust(&self) -> bool {
        self.session.lock().is_bust()
    }

    /// Returns whether the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.session.lock().is_game_over()
    }

    /// Returns the winner text, once the game is won.
    pub fn winner(&self) -> Option<String> {
        self.session.lock().winner().map(String::from)
    }
}
