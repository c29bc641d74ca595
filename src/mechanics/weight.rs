//! Weight model: anomaly directions, anomaly policies and how an anomaly
//! shifts the weight of the pan it sits on.
//!
//! Only the sign of a delta matters to the elimination rules; the magnitudes
//! are used when a concrete anomaly has to be weighed physically.

use std::fmt;
use std::str::FromStr;

use rand_core::RngCore;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::mechanics::stoch;

/// Which way the odd object deviates from the nominal unit weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    Heavier,
    Lighter,
}

impl Direction {
    pub const BOTH: [Direction; 2] = [Direction::Heavier, Direction::Lighter];
}

/// What the players are told about the anomaly before the game starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnomalyPolicy {
    #[default]
    AlwaysHeavier,
    AlwaysLighter,
    Either,
}

impl AnomalyPolicy {
    /// The direction every candidate carries, or `None` under `Either`.
    pub fn forced(self) -> Option<Direction> {
        match self {
            AnomalyPolicy::AlwaysHeavier => Some(Direction::Heavier),
            AnomalyPolicy::AlwaysLighter => Some(Direction::Lighter),
            AnomalyPolicy::Either => None,
        }
    }

    /// Directions a candidate may start with under this policy.
    pub fn directions(self) -> &'static [Direction] {
        match self {
            AnomalyPolicy::AlwaysHeavier => &[Direction::Heavier],
            AnomalyPolicy::AlwaysLighter => &[Direction::Lighter],
            AnomalyPolicy::Either => &Direction::BOTH,
        }
    }

    /// Stable name, used as the persisted setting value.
    pub fn as_str(self) -> &'static str {
        match self {
            AnomalyPolicy::AlwaysHeavier => "heavy",
            AnomalyPolicy::AlwaysLighter => "light",
            AnomalyPolicy::Either => "either",
        }
    }
}

impl fmt::Display for AnomalyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown anomaly policy `{0}` (expected heavy, light or either)")]
pub struct UnknownPolicy(pub String);

impl FromStr for AnomalyPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "heavy" => Ok(AnomalyPolicy::AlwaysHeavier),
            "light" => Ok(AnomalyPolicy::AlwaysLighter),
            "either" => Ok(AnomalyPolicy::Either),
            other => Err(UnknownPolicy(other.to_owned())),
        }
    }
}

/// Weight factors relative to a nominal object of weight 1.
/// Must satisfy `0 < lighter < 1 < heavier`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeightModel {
    pub heavier: f64,
    pub lighter: f64,
}

impl Default for WeightModel {
    fn default() -> Self {
        Self {
            heavier: 2.0,
            lighter: 0.5,
        }
    }
}

impl WeightModel {
    /// Nominal weight of every ordinary object.
    pub const UNIT: f64 = 1.0;

    pub fn is_valid(&self) -> bool {
        0.0 < self.lighter
            && self.lighter < Self::UNIT
            && Self::UNIT < self.heavier
            && self.heavier.is_finite()
    }

    /// Weight the anomaly adds to (or removes from) its pan.
    #[inline]
    pub fn quantify(&self, direction: Direction) -> f64 {
        match direction {
            Direction::Heavier => self.heavier - Self::UNIT,
            Direction::Lighter => self.lighter - Self::UNIT,
        }
    }

    /// Total weight of a pan holding `count` objects, `anomaly` of them odd.
    #[inline]
    pub fn pan_weight(&self, count: usize, anomaly: Option<Direction>) -> f64 {
        count as f64 * Self::UNIT + anomaly.map_or(0.0, |d| self.quantify(d))
    }
}

/// Direction of a concretely materialized anomaly. Forced policies return
/// their direction; `Either` flips a fair coin.
pub fn resolve_direction<R: RngCore + ?Sized>(policy: AnomalyPolicy, rng: &mut R) -> Direction {
    match policy.forced() {
        Some(d) => d,
        None if stoch::coin_flip(rng) => Direction::Heavier,
        None => Direction::Lighter,
    }
}
