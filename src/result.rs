//! Results of recording a dart.

use crate::rules::ThrowEffect;

/// What happened when a dart was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrowResult {
    /// The dart was not accepted: the game is over, the round is complete, or
    /// three darts are already in.
    Ignored,
    /// Scored; the turn continues.
    Continue(ThrowEffect),
    /// Scored with the third dart; the round now awaits an advance.
    RoundComplete(ThrowEffect),
    /// The dart broke the score. The round was reverted and the next round
    /// has already begun.
    Bust,
    /// The dart ended the game.
    GameOver(ThrowEffect),
}

impl ThrowResult {
    /// Returns whether the dart was applied.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        !matches!(self, Self::Ignored)
    }

    /// The scoring effect, when the dart scored.
    #[must_use]
    pub const fn effect(&self) -> Option<ThrowEffect> {
        match self {
            Self::Continue(effect) | Self::RoundComplete(effect) | Self::GameOver(effect) => {
                Some(*effect)
            }
            Self::Ignored | Self::Bust => None,
        }
    }
}
