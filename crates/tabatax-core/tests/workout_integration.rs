//! Integration tests for the workout timer.
//!
//! These drive full runs through the public API and verify the ordering
//! guarantees, the completion ledger, and the document round-trip.

use proptest::prelude::*;

use tabatax_core::workout::{
    format_clock, resolve_rest, resolve_work, total_duration, Circuit, Exercise, Phase, Status,
    TimingConfig, WorkoutTimer,
};
use tabatax_core::{Event, WorkoutDocument};

fn config(work: u32, rest: u32, set_rest: u32, sets: u32) -> TimingConfig {
    TimingConfig {
        work_duration: work,
        rest_duration: rest,
        set_rest_duration: set_rest,
        num_sets: sets,
    }
}

/// Tick until the run leaves the running status, recording each phase
/// the timer passes through (the starting phase included).
fn run_phases(timer: &mut WorkoutTimer) -> Vec<Phase> {
    let mut phases = vec![timer.state().phase];
    let mut guard = 0;
    while timer.status() == Status::Running {
        timer.tick();
        if timer.state().phase != *phases.last().unwrap() {
            phases.push(timer.state().phase);
        }
        guard += 1;
        assert!(guard < 10_000, "run never finished");
    }
    phases
}

#[test]
fn two_exercises_two_sets_follow_the_exact_phase_sequence() {
    let circuit = Circuit::from_exercises(vec![Exercise::new("A"), Exercise::new("B")]);
    let mut timer = WorkoutTimer::new(config(2, 1, 1, 2), circuit);
    timer.start();

    let phases = run_phases(&mut timer);
    assert_eq!(
        phases,
        [
            Phase::GetReady,
            Phase::Work, // A, set 1
            Phase::Rest,
            Phase::Work, // B, set 1
            Phase::SetRest,
            Phase::Work, // A, set 2
            Phase::Rest,
            Phase::Work, // B, set 2
            Phase::Finished,
        ]
    );
    assert_eq!(timer.status(), Status::Finished);
}

#[test]
fn a_full_run_completes_every_set_exercise_pair() {
    let exercises: Vec<Exercise> = ["A", "B", "C"].map(Exercise::new).into();
    let ids: Vec<String> = exercises.iter().map(|ex| ex.id.clone()).collect();
    let mut timer = WorkoutTimer::new(config(1, 1, 1, 4), Circuit::from_exercises(exercises));
    timer.start();
    run_phases(&mut timer);

    let completed = &timer.state().completed;
    assert_eq!(completed.len(), 3 * 4);
    for set in 1..=4 {
        for id in &ids {
            assert!(completed.contains(&(set, id.clone())), "missing ({set}, {id})");
        }
    }
}

#[test]
fn completion_event_reports_the_work_units() {
    let circuit = Circuit::from_exercises(vec![Exercise::new("A"), Exercise::new("B")]);
    let mut timer = WorkoutTimer::new(config(1, 0, 0, 2), circuit);
    timer.start();

    let mut completed_event = None;
    while timer.status() == Status::Running {
        let outcome = timer.tick();
        if let Some(event @ Event::WorkoutCompleted { .. }) = outcome.event {
            completed_event = Some(event);
        }
    }
    match completed_event {
        Some(Event::WorkoutCompleted { sets, work_units, .. }) => {
            assert_eq!(sets, 2);
            assert_eq!(work_units, 4);
        }
        other => panic!("expected WorkoutCompleted, got {other:?}"),
    }
}

#[test]
fn reset_always_lands_on_a_fresh_lead_in() {
    let circuit = Circuit::from_exercises(vec![Exercise::new("A"), Exercise::new("B")]);
    let mut timer = WorkoutTimer::new(config(2, 1, 1, 2), circuit);

    // From idle.
    timer.reset();
    assert_eq!(timer.status(), Status::Idle);
    assert_eq!(timer.state().phase, Phase::GetReady);

    // From running, mid-set.
    timer.start();
    for _ in 0..7 {
        timer.tick();
    }
    assert!(!timer.state().completed.is_empty());
    timer.reset();
    assert_eq!(timer.status(), Status::Idle);
    assert_eq!(timer.state().phase, Phase::GetReady);
    assert!(timer.state().completed.is_empty());

    // From paused.
    timer.start();
    timer.tick();
    timer.pause();
    timer.reset();
    assert_eq!(timer.status(), Status::Idle);

    // From finished.
    timer.start();
    run_phases(&mut timer);
    assert_eq!(timer.status(), Status::Finished);
    timer.reset();
    assert_eq!(timer.status(), Status::Idle);
    assert_eq!(timer.state().phase, Phase::GetReady);
}

#[test]
fn removing_the_active_exercise_mid_run_degrades_to_idle() {
    let circuit = Circuit::from_exercises(vec![Exercise::new("A"), Exercise::new("B")]);
    let mut timer = WorkoutTimer::new(config(20, 10, 30, 2), circuit);
    timer.start();
    for _ in 0..5 {
        timer.tick();
    }
    assert_eq!(timer.state().phase, Phase::Work);

    let id = timer.active_exercise().unwrap().id.clone();
    timer.remove_exercise(&id);
    assert_eq!(timer.status(), Status::Idle);
    assert_eq!(timer.circuit().len(), 1);
    assert!(timer.circuit().index_of(&id).is_none());

    // The reduced circuit still runs to completion.
    timer.start();
    let phases = run_phases(&mut timer);
    assert_eq!(*phases.last().unwrap(), Phase::Finished);
}

#[test]
fn document_round_trip_reproduces_config_and_circuit() {
    let mut circuit = Circuit::starter();
    circuit.push(Exercise::new("Jump Rope"));
    let doc = WorkoutDocument::new(config(25, 5, 45, 4), circuit);

    let json = doc.to_json().unwrap();
    let parsed = WorkoutDocument::from_json(&json).unwrap();
    assert_eq!(parsed, doc);
}

#[test]
fn export_import_through_a_file_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let doc = WorkoutDocument::starter();
    let path = doc.export_to(dir.path()).unwrap();
    assert!(path.file_name().unwrap().to_string_lossy().starts_with("tabata-workout-"));

    let imported = WorkoutDocument::import_from(&path).unwrap();
    assert_eq!(imported, doc);
}

#[test]
fn worked_example_totals_130_seconds() {
    let circuit = Circuit::from_exercises(vec![Exercise::new("A"), Exercise::new("B")]);
    let cfg = config(20, 10, 30, 2);
    assert_eq!(total_duration(&cfg, &circuit), 130);
    assert_eq!(format_clock(130), "2:10");
}

#[test]
fn a_single_set_never_charges_set_rest() {
    let circuit = Circuit::from_exercises(vec![Exercise::new("A"), Exercise::new("B")]);
    let cfg = config(20, 10, 600, 1);
    assert_eq!(total_duration(&cfg, &circuit), 50);
}

fn exercise_strategy() -> impl Strategy<Value = Exercise> {
    (
        "[a-z]{1,8}",
        proptest::option::of(1u32..500),
        proptest::option::of(0u32..500),
    )
        .prop_map(|(name, work, rest)| {
            let mut ex = Exercise::new(name);
            ex.custom_duration = work;
            ex.custom_rest = rest;
            ex
        })
}

proptest! {
    /// total-duration(C, E) == Σ_sets(Σ_i work_i + Σ_{i<last} rest_i)
    ///                          + (num_sets - 1) * set_rest
    #[test]
    fn total_duration_matches_the_spelled_out_sum(
        work in 0u32..10_000,
        rest in 0u32..10_000,
        set_rest in 0u32..10_000,
        sets in 1u32..6,
        exercises in proptest::collection::vec(exercise_strategy(), 1..8),
    ) {
        let cfg = config(work, rest, set_rest, sets);
        let circuit = Circuit::from_exercises(exercises);

        let last = circuit.len() - 1;
        let mut expected: u64 = 0;
        for _ in 0..sets {
            for (i, ex) in circuit.iter().enumerate() {
                expected += u64::from(resolve_work(ex, &cfg));
                if i < last {
                    expected += u64::from(resolve_rest(ex, &cfg));
                }
            }
        }
        expected += u64::from(sets - 1) * u64::from(set_rest);

        prop_assert_eq!(u64::from(total_duration(&cfg, &circuit)), expected);
    }

    #[test]
    fn empty_circuits_always_total_zero(
        work in 0u32..10_000,
        rest in 0u32..10_000,
        set_rest in 0u32..10_000,
        sets in 0u32..6,
    ) {
        let cfg = config(work, rest, set_rest, sets);
        prop_assert_eq!(total_duration(&cfg, &Circuit::new()), 0);
    }
}
