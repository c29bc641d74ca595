// tests/elimination.rs
mod common;

use std::collections::BTreeSet;

use common::weighing;
use odd_weight::{
    AnomalyPolicy, Candidate, Direction, Outcome, initial_candidates, resolve, resolve_traced,
};

/* ──────────────────────────────────────────────────────────────────────────
1) Starting sets
────────────────────────────────────────────────────────────────────────── */

#[test]
fn empty_history_under_heavier_lists_every_object_once() {
    let set = resolve(&[], 12, AnomalyPolicy::AlwaysHeavier);
    assert_eq!(set.len(), 12);
    for i in 0..12 {
        assert!(set.contains(&Candidate::new(i, Direction::Heavier)));
    }
    assert_eq!(set, initial_candidates(12, AnomalyPolicy::AlwaysHeavier));
}

#[test]
fn either_starts_with_both_directions_per_object() {
    let set = initial_candidates(5, AnomalyPolicy::Either);
    assert_eq!(set.len(), 10);
    for i in 0..5 {
        assert_eq!(set.directions_of(i), vec![Direction::Heavier, Direction::Lighter]);
    }
}

#[test]
fn forced_policies_degenerate_to_plain_objects() {
    for (policy, dir) in [
        (AnomalyPolicy::AlwaysHeavier, Direction::Heavier),
        (AnomalyPolicy::AlwaysLighter, Direction::Lighter),
    ] {
        let h = [weighing(&[0, 1, 2], &[3, 4, 5], 9, Outcome::Right)];
        let set = resolve(&h, 9, policy);
        assert_eq!(set.len(), set.objects().len());
        assert!(set.iter().all(|c| c.direction == dir));
    }
}

/* ──────────────────────────────────────────────────────────────────────────
2) Worked scenarios
────────────────────────────────────────────────────────────────────────── */

#[test]
fn balanced_equal_pans_leave_only_off_scale_objects() {
    let h = [weighing(&[0, 1, 2, 3], &[4, 5, 6, 7], 12, Outcome::Equal)];
    let set = resolve(&h, 12, AnomalyPolicy::AlwaysHeavier);
    let expected: Vec<Candidate> = (8..12).map(|i| Candidate::new(i, Direction::Heavier)).collect();
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), expected);
}

#[test]
fn left_tip_under_either_splits_directions_by_pan() {
    let h = [weighing(&[0, 1, 2], &[3, 4, 5], 12, Outcome::Left)];
    let set = resolve(&h, 12, AnomalyPolicy::Either);
    let expected: BTreeSet<Candidate> = [
        (0, Direction::Heavier),
        (1, Direction::Heavier),
        (2, Direction::Heavier),
        (3, Direction::Lighter),
        (4, Direction::Lighter),
        (5, Direction::Lighter),
    ]
    .into_iter()
    .map(|(o, d)| Candidate::new(o, d))
    .collect();
    assert_eq!(set.iter().copied().collect::<BTreeSet<_>>(), expected);
    assert_eq!(set.len(), 6);
}

#[test]
fn right_tip_mirrors_left_tip() {
    let layouts: [(&[usize], &[usize]); 5] = [
        (&[0, 1], &[2, 3]),
        (&[0, 1], &[2, 3, 4]),
        (&[0, 1], &[2]),
        (&[0, 1, 2], &[3]),
        (&[0, 1, 2], &[3, 4]),
    ];
    let policies = [
        AnomalyPolicy::AlwaysHeavier,
        AnomalyPolicy::AlwaysLighter,
        AnomalyPolicy::Either,
    ];
    for policy in policies {
        for (l, r) in layouts {
            for outcome in Outcome::PRIORITY {
                let direct = resolve(&[weighing(l, r, 6, outcome)], 6, policy);
                let swapped = resolve(&[weighing(r, l, 6, outcome.mirrored())], 6, policy);
                assert_eq!(direct, swapped, "{policy} {l:?} vs {r:?} {outcome:?}");
            }
        }
    }
}

#[test]
fn classic_twelve_in_three_weighings() {
    // Object 10 is light.
    let h = [
        weighing(&[0, 1, 2, 3], &[4, 5, 6, 7], 12, Outcome::Equal),
        weighing(&[8, 9, 10], &[0, 1, 2], 12, Outcome::Right),
        weighing(&[8], &[9], 12, Outcome::Equal),
    ];
    let set = resolve(&h, 12, AnomalyPolicy::Either);
    assert_eq!(set.sole(), Some(Candidate::new(10, Direction::Lighter)));
}

/* ──────────────────────────────────────────────────────────────────────────
3) Contradictions and purity
────────────────────────────────────────────────────────────────────────── */

#[test]
fn contradictory_step_is_refused_and_reported() {
    let h = [
        weighing(&[0, 1], &[2, 3], 6, Outcome::Equal),
        weighing(&[4], &[5], 6, Outcome::Equal),
        weighing(&[4], &[0], 6, Outcome::Left),
    ];
    let r = resolve_traced(&h, 6, AnomalyPolicy::AlwaysHeavier);
    assert_eq!(r.contradictions, vec![1]);
    assert!(!r.is_consistent());
    // Step 1 refused, so {4, 5} stood; step 2 leaves 4.
    assert_eq!(r.candidates.objects(), BTreeSet::from([4]));
}

#[test]
fn resolve_is_idempotent_and_leaves_history_alone() {
    let h = vec![
        weighing(&[0, 1, 2], &[3, 4, 5], 9, Outcome::Left),
        weighing(&[0, 3], &[6, 7], 9, Outcome::Equal),
    ];
    let before = h.clone();
    let a = resolve(&h, 9, AnomalyPolicy::Either);
    let b = resolve(&h, 9, AnomalyPolicy::Either);
    assert_eq!(a, b);
    assert_eq!(h, before);
}
