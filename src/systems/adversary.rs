//! Worst-case outcome selection.
//!
//! The adversary has not committed to an anomaly. For each possible outcome
//! of the pending weighing it replays the history extended by that outcome
//! and reports the outcome that leaves the most candidates alive. An outcome
//! whose final step would empty the set counts as zero: it cannot physically
//! happen.

use rand_core::RngCore;
use serde::Serialize;
use tracing::{debug, warn};

use crate::mechanics::stoch;
use crate::mechanics::weight::{AnomalyPolicy, WeightModel};
use crate::systems::candidates::{Candidate, CandidateSet};
use crate::systems::elimination::resolve;
use crate::systems::physical;
use crate::systems::weighing::{Outcome, Pans, Weighing};

/// Surviving candidate count per simulated outcome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct OutcomeSizes {
    pub equal: usize,
    pub left: usize,
    pub right: usize,
}

impl OutcomeSizes {
    pub fn get(&self, outcome: Outcome) -> usize {
        match outcome {
            Outcome::Equal => self.equal,
            Outcome::Left => self.left,
            Outcome::Right => self.right,
        }
    }

    pub fn max(&self) -> usize {
        self.equal.max(self.left).max(self.right)
    }

    fn all_tied(&self) -> bool {
        self.equal == self.left && self.left == self.right
    }
}

/// How the adversary arrived at its outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Decision {
    /// One candidate left; the physical result is reported.
    Forced { outcome: Outcome, anomaly: Candidate },
    /// Strict or priority-broken maximum.
    Chosen { outcome: Outcome, sizes: OutcomeSizes },
    /// All three outcomes tied; picked uniformly.
    RandomTie { outcome: Outcome, sizes: OutcomeSizes },
    /// Every outcome contradicts the history.
    Fallback { sizes: OutcomeSizes },
}

impl Decision {
    pub fn outcome(&self) -> Outcome {
        match *self {
            Decision::Forced { outcome, .. }
            | Decision::Chosen { outcome, .. }
            | Decision::RandomTie { outcome, .. } => outcome,
            Decision::Fallback { .. } => Outcome::Left,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Decision::Fallback { .. })
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Adversary {
    pub weights: WeightModel,
}

impl Adversary {
    pub fn new(weights: WeightModel) -> Self {
        Self { weights }
    }

    pub fn decide<R: RngCore + ?Sized>(
        &self,
        pans: &Pans,
        policy: AnomalyPolicy,
        history: &[Weighing],
        total_objects: usize,
        rng: &mut R,
    ) -> Decision {
        let current = resolve(history, total_objects, policy);
        if let Some(anomaly) = current.sole() {
            let outcome = physical::weigh(pans, anomaly, &self.weights);
            return Decision::Forced { outcome, anomaly };
        }

        let sizes = OutcomeSizes {
            equal: extend(&current, pans, Outcome::Equal, policy),
            left: extend(&current, pans, Outcome::Left, policy),
            right: extend(&current, pans, Outcome::Right, policy),
        };
        debug!(?sizes, "simulated remaining candidates per outcome");

        let best = sizes.max();
        if best == 0 {
            warn!(?pans, "every outcome contradicts the history, falling back to left");
            return Decision::Fallback { sizes };
        }
        if sizes.all_tied() {
            let outcome = Outcome::PRIORITY[stoch::uniform_index(rng, Outcome::PRIORITY.len())];
            return Decision::RandomTie { outcome, sizes };
        }
        let outcome = Outcome::PRIORITY
            .into_iter()
            .find(|&o| sizes.get(o) == best)
            .unwrap_or(Outcome::Left);
        Decision::Chosen { outcome, sizes }
    }
}

/// Candidates left if `pans` came out as `outcome` after `history`; zero
/// if that outcome is impossible.
pub fn simulate(
    pans: &Pans,
    outcome: Outcome,
    policy: AnomalyPolicy,
    history: &[Weighing],
    total_objects: usize,
) -> usize {
    extend(&resolve(history, total_objects, policy), pans, outcome, policy)
}

// One more fold step on an already resolved history.
fn extend(current: &CandidateSet, pans: &Pans, outcome: Outcome, policy: AnomalyPolicy) -> usize {
    current
        .try_apply_weighing(&pans.clone().record(outcome), policy)
        .map_or(0, |next| next.len())
}

/// Worst-case outcome with the default weight model.
pub fn choose_outcome<R: RngCore + ?Sized>(
    pans: &Pans,
    policy: AnomalyPolicy,
    history: &[Weighing],
    total_objects: usize,
    rng: &mut R,
) -> Outcome {
    Adversary::default()
        .decide(pans, policy, history, total_objects, rng)
        .outcome()
}
