/*!
`odd_weight` — reasoning core for the "find the odd-weighted object" balance
puzzle.

What it does
- Keeps the exact set of (object, direction) candidates consistent with a
  history of weighings, by replaying the history from scratch every time.
- Plays the adversary in worst-case mode: for a pending weighing it simulates
  all three outcomes and reports the one that leaves the most candidates,
  skipping outcomes that are physically impossible.

How to use (call surface only)
- `initial_candidates(total, policy) -> CandidateSet` on a new game.
- `resolve(history, total, policy) -> CandidateSet` after every weighing.
- `choose_outcome(pans, policy, history, total, rng) -> Outcome` in
  worst-case mode, before the weighing is recorded.
- Validate the groups with `Pans::new` first; the core assumes disjoint,
  in-range pans.

What it does NOT do
- No rendering, no end-of-game decision inside the core, no storage format.
  Randomness is injected (`rand_core::RngCore`). The optional `play` module
  (default feature) wraps the core in a session with key-value persistence.
*/

pub mod mechanics;
pub mod systems;

#[cfg(feature = "play")]
pub mod play;

pub use mechanics::weight::{AnomalyPolicy, Direction, WeightModel, resolve_direction};
pub use systems::{
    Adversary, Candidate, CandidateSet, Contradiction, Decision, ObjectId, Outcome, OutcomeSizes,
    Pan, Pans, Resolution, Weighing, WeighingError, choose_outcome, resolve, resolve_traced,
};

/// Candidates at game start: every object, in every direction the policy allows.
pub fn initial_candidates(total_objects: usize, policy: AnomalyPolicy) -> CandidateSet {
    CandidateSet::initial(total_objects, policy)
}
