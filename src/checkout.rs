//! Checkout (finishing route) search.
//!
//! The solver is a bounded greedy search over a fixed throw universe. Any
//! valid combination is a finish (open out), so it stops at the first route it
//! finds rather than looking for an optimal one.

extern crate alloc;

use alloc::vec::Vec;

use crate::dart::{Multiplier, OUTER_BULL};

/// Leaves a setup shot aims for, in priority order.
pub const PREFERRED_LEAVES: [i32; 6] = [32, 40, 24, 36, 16, 20];

/// Highest score any single dart can leave as a one-dart finish.
const MAX_ONE_DART: i32 = 60;

/// Highest score reachable with three darts.
pub const MAX_CHECKOUT: i32 = 180;

/// A single proposed throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CheckoutStep {
    /// Segment number (1..=20) or 25 for the bull.
    pub score: u8,
    /// Ring to aim for.
    pub multiplier: Multiplier,
}

impl CheckoutStep {
    /// Creates a new step.
    #[must_use]
    pub const fn new(score: u8, multiplier: Multiplier) -> Self {
        Self { score, multiplier }
    }

    /// Points this throw is worth (the inner bull counts as 25 x 2).
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.score as i32 * self.multiplier.factor() as i32
    }
}

/// A suggested route for the remaining score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutGuide {
    /// Throws to make, in order (one to three).
    pub steps: Vec<CheckoutStep>,
    /// Every single throw that finishes, when a one-dart finish exists.
    pub final_options: Option<Vec<CheckoutStep>>,
    /// `true` when `steps` is a leave-improving shot rather than a finish.
    pub is_setup: bool,
}

fn band(multiplier: Multiplier) -> impl Iterator<Item = CheckoutStep> {
    (1..=20).map(move |score| CheckoutStep::new(score, multiplier))
}

/// Every aimable throw: doubles (with the inner bull), triples, then singles
/// (with the outer bull).
fn universe() -> Vec<CheckoutStep> {
    band(Multiplier::Double)
        .chain(core::iter::once(CheckoutStep::new(
            OUTER_BULL,
            Multiplier::Double,
        )))
        .chain(band(Multiplier::Triple))
        .chain(band(Multiplier::Single))
        .chain(core::iter::once(CheckoutStep::new(
            OUTER_BULL,
            Multiplier::Single,
        )))
        .collect()
}

/// Order used when choosing a setup shot: singles, triples, then doubles.
fn setup_candidates(all: &[CheckoutStep]) -> Vec<CheckoutStep> {
    let rank = |step: &CheckoutStep| match step.multiplier {
        Multiplier::Single => 0,
        Multiplier::Triple => 1,
        Multiplier::Double => 2,
    };
    let mut candidates = all.to_vec();
    candidates.sort_by_key(rank);
    candidates
}

fn find_exact(all: &[CheckoutStep], value: i32) -> Option<CheckoutStep> {
    all.iter().copied().find(|step| step.value() == value)
}

fn two_dart(all: &[CheckoutStep], sorted: &[CheckoutStep], score: i32) -> Option<[CheckoutStep; 2]> {
    sorted.iter().find_map(|&first| {
        let remainder = score - first.value();
        if remainder < 1 {
            return None;
        }
        find_exact(all, remainder).map(|second| [first, second])
    })
}

fn three_dart(
    all: &[CheckoutStep],
    sorted: &[CheckoutStep],
    score: i32,
) -> Option<[CheckoutStep; 3]> {
    sorted.iter().find_map(|&first| {
        let remainder = score - first.value();
        if remainder < 1 {
            return None;
        }
        two_dart(all, sorted, remainder).map(|[second, third]| [first, second, third])
    })
}

fn setup_shot(all: &[CheckoutStep], score: i32) -> Option<CheckoutStep> {
    let candidates = setup_candidates(all);

    let preferred = PREFERRED_LEAVES.iter().find_map(|&leave| {
        let needed = score - leave;
        if needed <= 0 {
            return None;
        }
        find_exact(&candidates, needed)
    });

    preferred.or_else(|| {
        candidates.iter().copied().find(|step| {
            let leave = score - step.value();
            leave > 0 && leave <= MAX_ONE_DART
        })
    })
}

/// Finds a finishing route for `score` with `darts_remaining` darts.
///
/// Fewer darts always win: a one-dart finish is preferred over two, two over
/// three. Multi-dart routes greedily take the highest first dart. With one
/// dart left and no finish, a setup shot is suggested instead.
///
/// Returns `None` for scores outside `1..=180` or when nothing fits.
///
/// # Example
///
/// ```
/// use dartrs::checkout::solve;
///
/// let guide = solve(180, 3).unwrap();
/// assert_eq!(guide.steps.len(), 3);
/// assert!(solve(180, 2).is_none());
/// ```
#[must_use]
pub fn solve(score: i32, darts_remaining: u8) -> Option<CheckoutGuide> {
    if !(1..=MAX_CHECKOUT).contains(&score) {
        return None;
    }

    let all = universe();

    if darts_remaining >= 1 {
        let options: Vec<CheckoutStep> = all
            .iter()
            .copied()
            .filter(|step| step.value() == score)
            .collect();
        if let Some(&first) = options.first() {
            return Some(CheckoutGuide {
                steps: alloc::vec![first],
                final_options: Some(options),
                is_setup: false,
            });
        }
    }

    let mut sorted = all.clone();
    sorted.sort_by(|a, b| b.value().cmp(&a.value()));

    if darts_remaining >= 2 {
        if let Some(route) = two_dart(&all, &sorted, score) {
            return Some(CheckoutGuide {
                steps: route.to_vec(),
                final_options: None,
                is_setup: false,
            });
        }
    }

    if darts_remaining >= 3 {
        if let Some(route) = three_dart(&all, &sorted, score) {
            return Some(CheckoutGuide {
                steps: route.to_vec(),
                final_options: None,
                is_setup: false,
            });
        }
    }

    if darts_remaining == 1 {
        return setup_shot(&all, score).map(|step| CheckoutGuide {
            steps: alloc::vec![step],
            final_options: None,
            is_setup: true,
        });
    }

    None
}
