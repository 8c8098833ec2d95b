//! Checkout solver tests.

use dartrs::checkout::solve;
use dartrs::{CheckoutStep, Multiplier};

const fn step(score: u8, multiplier: Multiplier) -> CheckoutStep {
    CheckoutStep::new(score, multiplier)
}

#[test]
fn out_of_range_scores_have_no_route() {
    assert!(solve(0, 3).is_none());
    assert!(solve(181, 3).is_none());
    assert!(solve(-1, 3).is_none());
    assert!(solve(20, 0).is_none());
}

#[test]
fn one_dart_finish_lists_every_option() {
    let guide = solve(20, 3).unwrap();
    assert!(!guide.is_setup);
    assert_eq!(guide.steps, vec![step(10, Multiplier::Double)]);

    let options = guide.final_options.unwrap();
    assert_eq!(
        options,
        vec![step(10, Multiplier::Double), step(20, Multiplier::Single)]
    );
}

#[test]
fn bull_finish() {
    let guide = solve(50, 3).unwrap();
    assert!(
        guide
            .final_options
            .unwrap()
            .contains(&step(25, Multiplier::Double))
    );
}

#[test]
fn two_dart_finish_takes_highest_first_dart() {
    let guide = solve(100, 3).unwrap();
    assert_eq!(
        guide.steps,
        vec![step(20, Multiplier::Triple), step(20, Multiplier::Double)]
    );
    assert!(guide.final_options.is_none());
}

#[test]
fn three_dart_finish() {
    let guide = solve(180, 3).unwrap();
    assert_eq!(guide.steps, vec![step(20, Multiplier::Triple); 3]);
    assert!(!guide.is_setup);

    let guide = solve(140, 3).unwrap();
    assert!(guide.steps[0].value() >= guide.steps[1].value());
    assert_eq!(guide.steps.iter().map(CheckoutStep::value).sum::<i32>(), 140);
}

#[test]
fn not_enough_darts() {
    assert!(solve(180, 2).is_none());
    assert!(solve(121, 2).is_none());
}

#[test]
fn setup_prefers_listed_leaves() {
    // 32 is out of reach in one dart, 40 is not
    let guide = solve(100, 1).unwrap();
    assert!(guide.is_setup);
    assert_eq!(guide.steps, vec![step(20, Multiplier::Triple)]);

    // leaving 32 takes a D16
    let guide = solve(64, 1).unwrap();
    assert!(guide.is_setup);
    assert_eq!(guide.steps, vec![step(16, Multiplier::Double)]);
}

#[test]
fn setup_falls_back_to_any_one_dart_leave() {
    // 99 cannot leave any preferred score with one dart
    let guide = solve(99, 1).unwrap();
    assert!(guide.is_setup);
    assert_eq!(guide.steps, vec![step(13, Multiplier::Triple)]);
    assert_eq!(99 - guide.steps[0].value(), 60);

    // nothing leaves a one-dart finish
    assert!(solve(179, 1).is_none());
}

#[test]
fn direct_finish_beats_setup() {
    let guide = solve(20, 1).unwrap();
    assert!(!guide.is_setup);
}

#[test]
fn low_scores() {
    assert_eq!(solve(1, 3).unwrap().steps, vec![step(1, Multiplier::Single)]);
    assert_eq!(solve(2, 3).unwrap().steps, vec![step(1, Multiplier::Double)]);
}
