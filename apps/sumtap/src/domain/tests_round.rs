use crate::domain::round::RoundStatus;
use crate::domain::test_state_helpers::{make_engine, MakeRoundArgs};

#[test]
fn scenario_a_reference_solution_wins() {
    let mut engine = make_engine(MakeRoundArgs::default());
    assert_eq!(engine.instance().target(), 12);
    assert_eq!(engine.instance().display_order(), &[2, 3, 4, 7, 5]);

    let solution = engine.instance().reference_solution();
    let mut last = RoundStatus::Playing;
    for index in solution {
        last = engine.select(index);
    }
    assert_eq!(last, RoundStatus::Won);
    assert_eq!(engine.snapshot().selected_sum, 12);
}

#[test]
fn scenario_a_coincidental_subsets_also_win() {
    // 7 + 5 at display 3 and 4
    let mut engine = make_engine(MakeRoundArgs::default());
    assert_eq!(engine.select(3), RoundStatus::Playing);
    assert_eq!(engine.select(4), RoundStatus::Won);

    // 2 + 3 + 7 at display 0, 1 and 3
    let mut engine = make_engine(MakeRoundArgs::default());
    engine.select(0);
    engine.select(1);
    assert_eq!(engine.select(3), RoundStatus::Won);
}

#[test]
fn scenario_b_single_tick_times_out() {
    let mut engine = make_engine(MakeRoundArgs {
        initial_seconds: 1,
        ..Default::default()
    });
    assert_eq!(engine.tick(), RoundStatus::Lost);
    let snap = engine.snapshot();
    assert_eq!(snap.status, RoundStatus::Lost);
    assert_eq!(snap.remaining_seconds, 0);
    assert!(snap.selected_indices.is_empty());
}

#[test]
fn scenario_c_overshoot_loses_immediately() {
    let mut engine = make_engine(MakeRoundArgs::default());
    assert_eq!(engine.select(3), RoundStatus::Playing); // 7
    assert_eq!(engine.select(2), RoundStatus::Playing); // 11
    assert_eq!(engine.select(4), RoundStatus::Lost); // 16
    assert_eq!(engine.remaining_seconds(), 10);
}

#[test]
fn scenario_d_incomplete_sum_times_out() {
    let mut engine = make_engine(MakeRoundArgs {
        initial_seconds: 3,
        ..Default::default()
    });
    assert_eq!(engine.select(0), RoundStatus::Playing);
    assert_eq!(engine.tick(), RoundStatus::Playing);
    assert_eq!(engine.tick(), RoundStatus::Playing);
    assert_eq!(engine.tick(), RoundStatus::Lost);
    assert_eq!(engine.remaining_seconds(), 0);
    assert_eq!(engine.snapshot().selected_indices, vec![0]);
}

#[test]
fn select_twice_equals_select_once() {
    let mut once = make_engine(MakeRoundArgs::default());
    once.select(2);

    let mut twice = make_engine(MakeRoundArgs::default());
    twice.select(2);
    twice.select(2);

    assert_eq!(once.snapshot(), twice.snapshot());
    assert_eq!(twice.snapshot().selected_sum, 4);
}

#[test]
fn out_of_range_select_is_ignored() {
    let mut engine = make_engine(MakeRoundArgs::default());
    let before = engine.snapshot();
    assert_eq!(engine.select(5), RoundStatus::Playing);
    assert_eq!(engine.select(usize::MAX), RoundStatus::Playing);
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn won_round_is_frozen() {
    let mut engine = make_engine(MakeRoundArgs::default());
    engine.select(3);
    engine.select(4);
    let won = engine.snapshot();
    assert_eq!(won.status, RoundStatus::Won);

    assert_eq!(engine.select(0), RoundStatus::Won);
    assert_eq!(engine.tick(), RoundStatus::Won);
    assert_eq!(engine.snapshot(), won);
}

#[test]
fn timed_out_round_ignores_winning_taps() {
    let mut engine = make_engine(MakeRoundArgs {
        initial_seconds: 1,
        ..Default::default()
    });
    engine.tick();
    let lost = engine.snapshot();

    for index in engine.instance().reference_solution() {
        assert_eq!(engine.select(index), RoundStatus::Lost);
    }
    assert_eq!(engine.tick(), RoundStatus::Lost);
    assert_eq!(engine.snapshot(), lost);
}

#[test]
fn overshot_round_keeps_clock_frozen() {
    let mut engine = make_engine(MakeRoundArgs::default());
    engine.select(3);
    engine.select(2);
    engine.select(4);
    assert_eq!(engine.status(), RoundStatus::Lost);

    // A stale tick must not run the clock down on a finished round
    engine.tick();
    assert_eq!(engine.remaining_seconds(), 10);
}

#[test]
fn snapshot_is_pure() {
    let mut engine = make_engine(MakeRoundArgs::default());
    engine.select(1);
    let a = engine.snapshot();
    let b = engine.snapshot();
    assert_eq!(a, b);
    assert_eq!(a.selected_indices, vec![1]);
}
