//! # Candidate set
//!
//! The (object, direction) pairs still consistent with what the balance has
//! shown. Every operation is a pure filter: it returns a new set and leaves
//! the input untouched.
//!
//! ## Elimination rules
//! A weighing is judged on `(outcome, |left| vs |right|, policy)`. Tipped
//! outcomes are oriented so that `down` is the pan that went down and `up`
//! the other one; balanced outcomes with unequal counts are oriented so that
//! `big` is the pan with more objects.
//!
//! - balanced, equal counts: nothing on the scale is odd.
//! - balanced, unequal counts: the anomaly is pinned to `big` under the forced
//!   policies; under `Either` it is a lighter object on `big` or a heavier one
//!   on `small`.
//! - tipped, `|down| <= |up|`: the anomaly is a heavier object on `down` or a
//!   lighter one on `up`.
//! - tipped, `|down| > |up|`: the count advantage explains the tip on its own;
//!   only the narrow-gap cases drop lighter objects on `down`.
//!
//! A step that would leave nothing is refused; see [`Contradiction`].

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::mechanics::weight::{AnomalyPolicy, Direction};
use crate::systems::weighing::{ObjectId, Outcome, Pan, Pans, Weighing};

/// An object that may still be the odd one, with the way it would deviate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Candidate {
    pub object: ObjectId,
    pub direction: Direction,
}

impl Candidate {
    pub fn new(object: ObjectId, direction: Direction) -> Self {
        Self { object, direction }
    }
}

/// Weighing would have eliminated every remaining candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("weighing contradicts every remaining candidate")]
pub struct Contradiction;

/// Set of candidates; equality ignores insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct CandidateSet {
    inner: BTreeSet<Candidate>,
}

impl CandidateSet {
    /// Every object, once per direction the policy allows.
    pub fn initial(total_objects: usize, policy: AnomalyPolicy) -> Self {
        let inner = (0..total_objects)
            .flat_map(|object| {
                policy
                    .directions()
                    .iter()
                    .map(move |&direction| Candidate { object, direction })
            })
            .collect();
        Self { inner }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn contains(&self, candidate: &Candidate) -> bool {
        self.inner.contains(candidate)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candidate> + '_ {
        self.inner.iter()
    }

    /// Distinct objects that may still be odd.
    pub fn objects(&self) -> BTreeSet<ObjectId> {
        self.inner.iter().map(|c| c.object).collect()
    }

    /// Directions still open for `object`.
    pub fn directions_of(&self, object: ObjectId) -> Vec<Direction> {
        self.inner
            .iter()
            .filter(|c| c.object == object)
            .map(|c| c.direction)
            .collect()
    }

    /// The only candidate left, once the anomaly is pinned.
    pub fn sole(&self) -> Option<Candidate> {
        let mut it = self.inner.iter();
        match (it.next(), it.next()) {
            (Some(&c), None) => Some(c),
            _ => None,
        }
    }

    pub(crate) fn filtered<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&Candidate) -> bool,
    {
        Self {
            inner: self.inner.iter().copied().filter(|c| keep(c)).collect(),
        }
    }

    /// Apply one weighing, refusing a result that would be empty.
    pub fn try_apply_weighing(
        &self,
        weighing: &Weighing,
        policy: AnomalyPolicy,
    ) -> Result<Self, Contradiction> {
        let next = self.filtered(|c| survives(c, weighing.pans(), weighing.outcome(), policy));
        if next.is_empty() {
            Err(Contradiction)
        } else {
            Ok(next)
        }
    }

    /// Apply one weighing. On a contradiction the current set is kept and
    /// the condition is logged.
    pub fn apply_weighing(&self, weighing: &Weighing, policy: AnomalyPolicy) -> Self {
        match self.try_apply_weighing(weighing, policy) {
            Ok(next) => next,
            Err(Contradiction) => {
                warn!(
                    left = ?weighing.left(),
                    right = ?weighing.right(),
                    outcome = ?weighing.outcome(),
                    remaining = self.len(),
                    "weighing would empty the candidate set, keeping previous candidates"
                );
                self.clone()
            }
        }
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Candidate;
    type IntoIter = std::collections::btree_set::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

/// Where a candidate sits relative to an oriented weighing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Place {
    /// The pan that went down, or the bigger pan of a balanced weighing.
    Major,
    /// The other pan.
    Minor,
    Off,
}

fn place(pans: &Pans, major: Pan, object: ObjectId) -> Place {
    match pans.side_of(object) {
        Some(p) if p == major => Place::Major,
        Some(_) => Place::Minor,
        None => Place::Off,
    }
}

fn survives(c: &Candidate, pans: &Pans, outcome: Outcome, policy: AnomalyPolicy) -> bool {
    debug_assert!(
        pans.left().is_disjoint(pans.right()),
        "weighing with overlapping pans reached elimination"
    );
    let (nl, nr) = (pans.left().len(), pans.right().len());
    match outcome {
        Outcome::Equal if nl == nr => pans.side_of(c.object).is_none(),
        Outcome::Equal => {
            let big = if nl > nr { Pan::Left } else { Pan::Right };
            survives_balanced(c, place(pans, big, c.object), policy)
        }
        Outcome::Left => survives_tipped(c, place(pans, Pan::Left, c.object), nl, nr, policy),
        Outcome::Right => survives_tipped(c, place(pans, Pan::Right, c.object), nr, nl, policy),
    }
}

/// Balanced despite unequal counts.
fn survives_balanced(c: &Candidate, at: Place, policy: AnomalyPolicy) -> bool {
    match policy {
        AnomalyPolicy::AlwaysHeavier | AnomalyPolicy::AlwaysLighter => at == Place::Major,
        AnomalyPolicy::Either => matches!(
            (at, c.direction),
            (Place::Major, Direction::Lighter) | (Place::Minor, Direction::Heavier)
        ),
    }
}

/// `down` went down; `n_down`/`n_up` are the pan counts.
fn survives_tipped(
    c: &Candidate,
    at: Place,
    n_down: usize,
    n_up: usize,
    policy: AnomalyPolicy,
) -> bool {
    if n_down <= n_up {
        // Forced policies only ever carry their own direction, so one rule
        // covers all three.
        return matches!(
            (at, c.direction),
            (Place::Major, Direction::Heavier) | (Place::Minor, Direction::Lighter)
        );
    }
    let narrow_gap = match policy {
        AnomalyPolicy::AlwaysLighter => n_down > n_up + 1,
        AnomalyPolicy::Either => n_down == n_up + 1,
        AnomalyPolicy::AlwaysHeavier => false,
    };
    !(narrow_gap && at == Place::Major && c.direction == Direction::Lighter)
}
