//! Weighings: the two pans of a pending comparison and the recorded result.
//!
//! `Pans` is validated once at the boundary (`Pans::new` / `Pans::check`);
//! everything downstream assumes the groups are disjoint and in range.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opaque object identifier in `0..total_objects`.
pub type ObjectId = usize;

/// Which pan went down, or neither.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Left,
    Right,
    Equal,
}

impl Outcome {
    /// Every outcome, in adversary tie-break priority.
    pub const PRIORITY: [Outcome; 3] = [Outcome::Equal, Outcome::Left, Outcome::Right];

    pub fn mirrored(self) -> Self {
        match self {
            Outcome::Left => Outcome::Right,
            Outcome::Right => Outcome::Left,
            Outcome::Equal => Outcome::Equal,
        }
    }
}

/// One side of the balance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pan {
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WeighingError {
    #[error("object {object} is out of range for {total} objects")]
    OutOfRange { object: ObjectId, total: usize },
    #[error("object {0} is on both pans")]
    Overlap(ObjectId),
    #[error("object {0} is placed twice on the same pan")]
    Duplicate(ObjectId),
}

/// The two groups of a weighing whose outcome is not known yet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pans {
    left: BTreeSet<ObjectId>,
    right: BTreeSet<ObjectId>,
}

impl Pans {
    pub fn new<L, R>(left: L, right: R, total: usize) -> Result<Self, WeighingError>
    where
        L: IntoIterator<Item = ObjectId>,
        R: IntoIterator<Item = ObjectId>,
    {
        let pans = Self {
            left: collect_unique(left)?,
            right: collect_unique(right)?,
        };
        pans.check(total)?;
        Ok(pans)
    }

    /// Re-validate pans that did not come through `new` (e.g. decoded ones).
    pub fn check(&self, total: usize) -> Result<(), WeighingError> {
        if let Some(&object) = self.left.iter().chain(&self.right).find(|&&o| o >= total) {
            return Err(WeighingError::OutOfRange { object, total });
        }
        match self.left.intersection(&self.right).next() {
            Some(&o) => Err(WeighingError::Overlap(o)),
            None => Ok(()),
        }
    }

    pub fn left(&self) -> &BTreeSet<ObjectId> {
        &self.left
    }

    pub fn right(&self) -> &BTreeSet<ObjectId> {
        &self.right
    }

    pub fn get(&self, pan: Pan) -> &BTreeSet<ObjectId> {
        match pan {
            Pan::Left => &self.left,
            Pan::Right => &self.right,
        }
    }

    /// Both pans empty.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    /// Pan holding `object`, `None` when it is off the scale.
    pub fn side_of(&self, object: ObjectId) -> Option<Pan> {
        if self.left.contains(&object) {
            Some(Pan::Left)
        } else if self.right.contains(&object) {
            Some(Pan::Right)
        } else {
            None
        }
    }

    /// Tag these pans with an outcome.
    pub fn record(self, outcome: Outcome) -> Weighing {
        Weighing { pans: self, outcome }
    }
}

fn collect_unique<I>(ids: I) -> Result<BTreeSet<ObjectId>, WeighingError>
where
    I: IntoIterator<Item = ObjectId>,
{
    let mut set = BTreeSet::new();
    for id in ids {
        if !set.insert(id) {
            return Err(WeighingError::Duplicate(id));
        }
    }
    Ok(set)
}

/// A recorded comparison. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Weighing {
    pans: Pans,
    outcome: Outcome,
}

impl Weighing {
    pub fn pans(&self) -> &Pans {
        &self.pans
    }

    pub fn left(&self) -> &BTreeSet<ObjectId> {
        &self.pans.left
    }

    pub fn right(&self) -> &BTreeSet<ObjectId> {
        &self.pans.right
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_overlap_range_and_duplicates() {
        assert_eq!(Pans::new([0, 1], [1, 2], 4), Err(WeighingError::Overlap(1)));
        assert_eq!(
            Pans::new([0], [4], 4),
            Err(WeighingError::OutOfRange { object: 4, total: 4 })
        );
        assert_eq!(Pans::new([0, 0], [1], 4), Err(WeighingError::Duplicate(0)));
    }

    #[test]
    fn locates_objects() {
        let p = Pans::new([0, 1], [2], 4).unwrap();
        assert_eq!(p.side_of(1), Some(Pan::Left));
        assert_eq!(p.side_of(2), Some(Pan::Right));
        assert_eq!(p.side_of(3), None);
        assert!(!p.is_empty());
        assert!(Pans::default().is_empty());
    }
}
