//! Per-game session state and its reducer.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use tracing::{debug, trace};

use crate::dart::DartOutcome;
use crate::options::GameOptions;
use crate::result::ThrowResult;
use crate::rules::{CricketBoard, GameType, Scoreboard};

use super::state::{FlagToggle, GamePhase, ThrowRecord, TurnPosition};

/// Darts per round.
pub const DARTS_PER_ROUND: u8 = 3;

/// The complete state of one game.
///
/// Every transition goes through [`GameSession::record_throw`],
/// [`GameSession::next_round`] or [`GameSession::toggle_opponent_closed`], so
/// folding the throw and toggle logs over a fresh session with
/// [`GameSession::replay`] reproduces the live state exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    target_score: u32,
    board: Scoreboard,
    round: u32,
    throw_index: u8,
    player_index: u8,
    turn: Vec<DartOutcome>,
    history: Vec<ThrowRecord>,
    toggles: Vec<FlagToggle>,
    bust: bool,
    game_over: bool,
    awaiting_next_round: bool,
    winner: Option<String>,
    winner_label: String,
    max_rounds: Option<u32>,
}

impl GameSession {
    /// Canonical start state for the given options.
    #[must_use]
    pub fn new(options: &GameOptions) -> Self {
        debug!(
            game_type = %options.game_type,
            target = options.target_score,
            "starting game"
        );
        Self {
            target_score: options.target_score,
            board: Scoreboard::new(options.game_type, options.target_score),
            round: 1,
            throw_index: 0,
            player_index: 0,
            turn: Vec::new(),
            history: Vec::new(),
            toggles: Vec::new(),
            bust: false,
            game_over: false,
            awaiting_next_round: false,
            winner: None,
            winner_label: options.winner_label.clone(),
            max_rounds: options.max_rounds,
        }
    }

    /// Rebuilds a session from scratch by replaying `events` in order.
    ///
    /// Each toggle is re-applied once the history holds `toggle.at` darts;
    /// toggles past the end of `events` are applied after the last dart.
    /// Rounds are advanced as needed to reach each event's round. Any prefix
    /// of a history is a valid input.
    #[must_use]
    pub fn replay(options: &GameOptions, events: &[ThrowRecord], toggles: &[FlagToggle]) -> Self {
        Self::new(options).fold(events, toggles)
    }

    /// Applies `events` and `toggles` on top of this session, advancing
    /// rounds as needed.
    #[must_use]
    pub fn fold(mut self, events: &[ThrowRecord], toggles: &[FlagToggle]) -> Self {
        let mut pending = toggles.iter().peekable();
        for (index, event) in events.iter().enumerate() {
            while let Some(toggle) = pending.next_if(|toggle| toggle.at <= index) {
                self.toggle_opponent_closed(toggle.number);
            }
            while self.round < event.round && !self.game_over {
                self.next_round();
            }
            self.record_throw(event.outcome);
        }
        for toggle in pending {
            self.toggle_opponent_closed(toggle.number);
        }
        self
    }

    /// Records a dart and applies the ruleset.
    ///
    /// Ignored once the game is over, while the round awaits an advance, or
    /// when three darts are already in.
    pub fn record_throw(&mut self, outcome: DartOutcome) -> ThrowResult {
        if self.game_over || self.awaiting_next_round || self.throw_index >= DARTS_PER_ROUND {
            return ThrowResult::Ignored;
        }
        debug_assert!(
            outcome.score <= 20 || outcome.is_bull(),
            "dart score {} is outside the board",
            outcome.score
        );

        self.bust = false;
        self.history.push(ThrowRecord {
            outcome,
            player_index: self.player_index,
            round: self.round,
            throw_index: self.throw_index,
        });
        self.turn.push(outcome);
        trace!(round = self.round, dart = %outcome, "throw recorded");

        let effect = self.board.apply(&outcome);

        if effect.bust {
            debug!(round = self.round, "bust");
            self.bust = true;
            self.advance_round(false);
            return ThrowResult::Bust;
        }

        if effect.finished {
            debug!(round = self.round, winner = %self.winner_label, "game won");
            self.game_over = true;
            self.winner = Some(self.winner_label.clone());
        }

        self.throw_index += 1;
        if self.throw_index >= DARTS_PER_ROUND {
            self.awaiting_next_round = true;
            if self.max_rounds.is_some_and(|cap| self.round >= cap) && !self.game_over {
                debug!(round = self.round, "round cap reached");
                self.game_over = true;
            }
        }

        if self.game_over {
            ThrowResult::GameOver(effect)
        } else if self.awaiting_next_round {
            ThrowResult::RoundComplete(effect)
        } else {
            ThrowResult::Continue(effect)
        }
    }

    /// Starts the next round. No effect once the game is over.
    ///
    /// A bust has already moved the game into a fresh round, so calling this
    /// right after a bust advances a second time and leaves that round empty.
    pub fn next_round(&mut self) {
        // the bust round was reverted, so no baseline snapshot
        self.advance_round(!self.bust);
    }

    fn advance_round(&mut self, snapshot: bool) {
        if self.game_over {
            return;
        }
        self.awaiting_next_round = false;
        self.round += 1;
        self.throw_index = 0;
        self.turn.clear();
        self.board.end_round(!snapshot);
    }

    /// Rebuilds the current-turn buffer from history.
    pub(crate) fn rebuild_turn(&mut self) {
        let mut current: Vec<ThrowRecord> = self
            .history
            .iter()
            .filter(|record| record.round == self.round)
            .copied()
            .collect();
        current.sort_by_key(|record| record.throw_index);
        self.turn = current.into_iter().map(|record| record.outcome).collect();
    }

    /// Flips the opponent-closed flag for a cricket number and logs the flip.
    ///
    /// Returns `false` if this is not a cricket game or `number` is not in
    /// play. Marks and points already recorded are not affected.
    pub fn toggle_opponent_closed(&mut self, number: u8) -> bool {
        let flipped = self
            .board
            .cricket_mut()
            .is_some_and(|board| board.toggle_opponent_closed(number));
        if flipped {
            debug!(number, at = self.history.len(), "opponent closed toggled");
            self.toggles.push(FlagToggle {
                at: self.history.len(),
                number,
            });
        }
        flipped
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        if self.game_over {
            GamePhase::GameOver
        } else if self.awaiting_next_round {
            GamePhase::RoundComplete
        } else if self.history.is_empty() {
            GamePhase::Idle
        } else {
            GamePhase::InProgress
        }
    }

    /// Ruleset being played.
    #[must_use]
    pub const fn game_type(&self) -> GameType {
        self.board.game_type()
    }

    /// 01 start score.
    #[must_use]
    pub const fn target_score(&self) -> u32 {
        self.target_score
    }

    /// Current turn position.
    #[must_use]
    pub const fn position(&self) -> TurnPosition {
        TurnPosition {
            round: self.round,
            throw_index: self.throw_index,
            player_index: self.player_index,
        }
    }

    /// Ruleset state.
    #[must_use]
    pub const fn board(&self) -> &Scoreboard {
        &self.board
    }

    /// Cricket state, if playing cricket.
    #[must_use]
    pub const fn cricket(&self) -> Option<&CricketBoard> {
        self.board.cricket()
    }

    /// Headline score: remaining (01), points (cricket) or total (count-up).
    #[must_use]
    pub fn score(&self) -> i64 {
        self.board.score()
    }

    /// Darts thrown in the current round.
    #[must_use]
    pub fn turn(&self) -> &[DartOutcome] {
        &self.turn
    }

    /// Every dart recorded, in order.
    #[must_use]
    pub fn history(&self) -> &[ThrowRecord] {
        &self.history
    }

    /// Every opponent-closed flip, in order.
    #[must_use]
    pub fn toggles(&self) -> &[FlagToggle] {
        &self.toggles
    }

    /// Whether the last dart was a bust.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.bust
    }

    /// Whether the game has ended.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Whether the round is complete and awaits an advance.
    #[must_use]
    pub const fn is_awaiting_next_round(&self) -> bool {
        self.awaiting_next_round
    }

    /// Winner text, once the game is won.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }
}
