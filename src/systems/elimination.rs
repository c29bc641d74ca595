//! Replays a weighing history from scratch into a candidate set.
//!
//! This is the only way a candidate set gets produced after game start:
//! callers never patch a cached set, they re-resolve the whole history.

use serde::Serialize;
use tracing::warn;

use crate::mechanics::weight::AnomalyPolicy;
use crate::systems::candidates::CandidateSet;
use crate::systems::weighing::Weighing;

/// Candidates after a replay, plus the history indices that were refused
/// because they would have emptied the set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub candidates: CandidateSet,
    pub contradictions: Vec<usize>,
}

impl Resolution {
    pub fn is_consistent(&self) -> bool {
        self.contradictions.is_empty()
    }
}

/// Fold of `apply_weighing` over `history`, starting from the initial set.
pub fn resolve(history: &[Weighing], total_objects: usize, policy: AnomalyPolicy) -> CandidateSet {
    resolve_traced(history, total_objects, policy).candidates
}

/// Like [`resolve`], but reports which weighings were refused.
pub fn resolve_traced(
    history: &[Weighing],
    total_objects: usize,
    policy: AnomalyPolicy,
) -> Resolution {
    let mut candidates = CandidateSet::initial(total_objects, policy);
    let mut contradictions = Vec::new();
    for (i, weighing) in history.iter().enumerate() {
        match candidates.try_apply_weighing(weighing, policy) {
            Ok(next) => candidates = next,
            Err(_) => {
                warn!(
                    index = i,
                    outcome = ?weighing.outcome(),
                    remaining = candidates.len(),
                    "contradictory weighing in history, keeping previous candidates"
                );
                contradictions.push(i);
            }
        }
    }
    Resolution { candidates, contradictions }
}

/// Candidate set after each prefix of `history`; entry `i` is the set once
/// weighing `i` has been applied.
pub fn trajectory(
    history: &[Weighing],
    total_objects: usize,
    policy: AnomalyPolicy,
) -> Vec<CandidateSet> {
    let mut candidates = CandidateSet::initial(total_objects, policy);
    history
        .iter()
        .map(|w| {
            candidates = candidates.apply_weighing(w, policy);
            candidates.clone()
        })
        .collect()
}
