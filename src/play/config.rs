//! Game configuration and the persisted settings it is read from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::mechanics::weight::{AnomalyPolicy, WeightModel};
use crate::play::store::{KeyValueStore, StoreError, keys};

/// Who decides the outcome of a weighing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// The anomaly is drawn up front and weighings are physical.
    #[default]
    Random,
    /// No anomaly is fixed; the adversary answers every weighing.
    WorstCase,
}

impl GameMode {
    pub fn as_str(self) -> &'static str {
        match self {
            GameMode::Random => "random",
            GameMode::WorstCase => "worst",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown game mode `{0}` (expected random or worst)")]
pub struct UnknownMode(pub String);

impl FromStr for GameMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(GameMode::Random),
            "worst" => Ok(GameMode::WorstCase),
            other => Err(UnknownMode(other.to_owned())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("a game needs at least one object")]
    NoObjects,
    #[error("weight factors must satisfy 0 < lighter < 1 < heavier (got lighter={lighter}, heavier={heavier})")]
    BadWeights { heavier: f64, lighter: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub total_objects: usize,
    pub policy: AnomalyPolicy,
    pub mode: GameMode,
    pub weights: WeightModel,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            total_objects: 12,
            policy: AnomalyPolicy::default(),
            mode: GameMode::default(),
            weights: WeightModel::default(),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_objects == 0 {
            return Err(ConfigError::NoObjects);
        }
        if !self.weights.is_valid() {
            return Err(ConfigError::BadWeights {
                heavier: self.weights.heavier,
                lighter: self.weights.lighter,
            });
        }
        Ok(())
    }

    /// Defaults overridden by the saved mode and policy. Missing or
    /// unrecognized values keep the default.
    pub fn from_store(store: &dyn KeyValueStore) -> Self {
        let mut cfg = Self::default();
        if let Some(raw) = store.get(keys::MODE) {
            match raw.parse() {
                Ok(mode) => cfg.mode = mode,
                Err(e) => debug!("ignoring saved mode: {e}"),
            }
        }
        if let Some(raw) = store.get(keys::POLICY) {
            match raw.parse() {
                Ok(policy) => cfg.policy = policy,
                Err(e) => debug!("ignoring saved policy: {e}"),
            }
        }
        cfg
    }

    pub fn save_settings(&self, store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
        store.set(keys::MODE, self.mode.as_str().to_owned())?;
        store.set(keys::POLICY, self.policy.as_str().to_owned())
    }
}
