//! Board geometry: maps a landing coordinate to a [`DartOutcome`].
//!
//! Coordinates are relative to the board centre in normalised units where the
//! outer edge of the double ring sits at 100. The y axis points down, so the
//! 20 segment is at negative y.

use crate::dart::{DartOutcome, INNER_BULL, Multiplier, OUTER_BULL};

/// Segment numbers clockwise from 12 o'clock.
pub const SEGMENTS: [u8; 20] = [
    20, 1, 18, 4, 13, 6, 10, 15, 2, 17, 3, 19, 7, 16, 8, 11, 14, 9, 12, 5,
];

/// Outer radius of the inner bull.
pub const R_BULL_INNER: f64 = 6.0;
/// Outer radius of the outer bull.
pub const R_BULL_OUTER: f64 = 15.0;
/// Inner radius of the triple ring.
pub const R_TRIPLE_INNER: f64 = 55.0;
/// Outer radius of the triple ring.
pub const R_TRIPLE_OUTER: f64 = 65.0;
/// Inner radius of the double ring.
pub const R_DOUBLE_INNER: f64 = 90.0;
/// Outer radius of the double ring (edge of the scoring area).
pub const R_DOUBLE_OUTER: f64 = 100.0;

const SEGMENT_DEGREES: f64 = 18.0;

#[cfg(feature = "std")]
fn polar(x: f64, y: f64) -> (f64, f64) {
    (x.hypot(y), y.atan2(x).to_degrees())
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn polar(x: f64, y: f64) -> (f64, f64) {
    (libm::hypot(x, y), libm::atan2(y, x).to_degrees())
}

#[cfg(feature = "std")]
fn floor(value: f64) -> f64 {
    value.floor()
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn floor(value: f64) -> f64 {
    libm::floor(value)
}

/// Returns the segment number under a clockwise angle from 12 o'clock.
fn segment_at(degrees: f64) -> u8 {
    let index = floor(((degrees + SEGMENT_DEGREES / 2.0) % 360.0) / SEGMENT_DEGREES) as usize;
    SEGMENTS[index.min(SEGMENTS.len() - 1)]
}

/// Resolves a landing coordinate into a dart outcome.
///
/// Every input classifies: bulls are checked before rings, the triple ring
/// before the double ring, and boundaries are inclusive on each band. Non
/// finite coordinates count as a miss.
///
/// # Example
///
/// ```
/// use dartrs::board::resolve;
///
/// let dart = resolve(0.0, -60.0);
/// assert_eq!(dart.label(), "T20");
/// ```
#[must_use]
pub fn resolve(x: f64, y: f64) -> DartOutcome {
    let (distance, angle) = polar(x, y);

    if !distance.is_finite() {
        return DartOutcome::miss();
    }
    if distance <= R_BULL_INNER {
        return DartOutcome::single(INNER_BULL);
    }
    if distance <= R_BULL_OUTER {
        return DartOutcome::single(OUTER_BULL);
    }
    if distance > R_DOUBLE_OUTER {
        return DartOutcome::miss();
    }

    let mut degrees = angle + 90.0;
    if degrees < 0.0 {
        degrees += 360.0;
    }
    let score = segment_at(degrees);

    if (R_TRIPLE_INNER..=R_TRIPLE_OUTER).contains(&distance) {
        DartOutcome::triple(score)
    } else if (R_DOUBLE_INNER..=R_DOUBLE_OUTER).contains(&distance) {
        DartOutcome::double(score)
    } else {
        DartOutcome {
            score,
            multiplier: Multiplier::Single,
            is_inner: distance < R_TRIPLE_INNER,
        }
    }
}
