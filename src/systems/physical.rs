//! Physical weighing against a concrete anomaly.
//!
//! Used by random mode, where the odd object is fixed up front, and by the
//! adversary once only one candidate is left.

use std::cmp::Ordering;

use rand_core::RngCore;

use crate::mechanics::stoch;
use crate::mechanics::weight::{AnomalyPolicy, WeightModel, resolve_direction};
use crate::systems::candidates::{Candidate, CandidateSet};
use crate::systems::weighing::{Outcome, Pan, Pans};

/// Compare the pans with `anomaly` weighing `model`'s factor.
pub fn weigh(pans: &Pans, anomaly: Candidate, model: &WeightModel) -> Outcome {
    let side = pans.side_of(anomaly.object);
    let load = |pan: Pan| {
        let odd = (side == Some(pan)).then_some(anomaly.direction);
        model.pan_weight(pans.get(pan).len(), odd)
    };
    match load(Pan::Left).partial_cmp(&load(Pan::Right)) {
        Some(Ordering::Greater) => Outcome::Left,
        Some(Ordering::Less) => Outcome::Right,
        _ => Outcome::Equal,
    }
}

/// Pick a fresh anomaly: uniform object, direction from the policy.
pub fn materialize<R: RngCore + ?Sized>(
    total_objects: usize,
    policy: AnomalyPolicy,
    rng: &mut R,
) -> Candidate {
    let object = stoch::uniform_index(rng, total_objects.max(1));
    Candidate::new(object, resolve_direction(policy, rng))
}

/// Uniform pick from a candidate pool.
pub fn sample_candidate<R>(pool: &CandidateSet, rng: &mut R) -> Option<Candidate>
where
    R: RngCore + ?Sized,
{
    if pool.is_empty() {
        return None;
    }
    pool.iter().nth(stoch::uniform_index(rng, pool.len())).copied()
}
