//! A darts scorekeeping engine with optional `no_std` support.
//!
//! The crate turns a dart's landing position into a score ([`board`]),
//! suggests finishing routes ([`checkout`]), tracks a game of 01, cricket or
//! count-up through the [`Game`] type, and packs finished games into short
//! shareable strings ([`codec`], `std` only).
//!
//! # Example
//!
//! ```
//! use dartrs::{Game, GameOptions, board, checkout};
//!
//! let game = Game::new(GameOptions::default().with_target_score(301));
//! game.record_throw(board::resolve(0.0, -60.0)); // T20
//! assert_eq!(game.score(), 241);
//!
//! let guide = checkout::solve(40, 1).unwrap();
//! assert_eq!(guide.steps[0].value(), 40);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod board;
pub mod checkout;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod codec;
pub mod dart;
pub mod error;
pub mod game;
pub mod history;
pub mod options;
pub mod record;
pub mod result;
pub mod rules;
mod sync;

// Re-export main types
pub use checkout::{CheckoutGuide, CheckoutStep};
pub use dart::{DartOutcome, Multiplier};
pub use error::{CodecError, HistoryError};
pub use game::{FlagToggle, Game, GamePhase, GameSession, ThrowRecord, TurnPosition};
pub use history::GameHistory;
pub use options::GameOptions;
pub use record::{GameRecord, GameStats, RecordHeader, RoundRecord, ScoreAfter};
pub use result::ThrowResult;
pub use rules::{CricketBoard, GameType, Scoreboard, ThrowEffect};
