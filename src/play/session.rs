//! # Game session
//!
//! Owns the weighing history of one game and drives the oracles:
//!
//! - **random** mode draws the anomaly at reset and weighs physically;
//! - **worst case** mode asks the [`Adversary`] and pins the anomaly once a
//!   single candidate is left.
//!
//! After every weighing the candidate set is re-resolved from the full
//! history. Each recorded weighing keeps a snapshot of the candidates that
//! were left right after it, for display.
//!
//! Persistence goes through an injected [`KeyValueStore`]: only the weighings
//! are saved (as JSON); snapshots are re-derived on restore.

use rand_core::RngCore;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::play::config::{ConfigError, GameConfig, GameMode};
use crate::play::store::{KeyValueStore, StoreError, keys};
use crate::systems::adversary::{Adversary, Decision};
use crate::systems::candidates::{Candidate, CandidateSet};
use crate::systems::elimination::{resolve_traced, trajectory};
use crate::systems::physical;
use crate::systems::weighing::{ObjectId, Outcome, Pans, Weighing, WeighingError};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid weighing: {0}")]
    Weighing(#[from] WeighingError),
    #[error("weighing needs at least one object on the scale")]
    EmptyWeighing,
    #[error("object {object} is out of range for {total} objects")]
    GuessOutOfRange { object: ObjectId, total: usize },
    #[error("saved history could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// What one weighing produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Turn {
    pub outcome: Outcome,
    /// Set in worst-case mode.
    pub decision: Option<Decision>,
    /// Candidate count after the weighing.
    pub remaining: usize,
    /// The weighing contradicted every candidate and was not applied.
    pub contradicted: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Guess {
    Correct,
    Incorrect,
}

#[derive(Clone, Debug)]
pub struct Session {
    config: GameConfig,
    adversary: Adversary,
    history: Vec<Weighing>,
    snapshots: Vec<CandidateSet>,
    candidates: CandidateSet,
    hidden: Option<Candidate>,
}

impl Session {
    pub fn new<R: RngCore + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self, SessionError> {
        config.validate()?;
        let mut session = Self {
            config,
            adversary: Adversary::new(config.weights),
            history: Vec::new(),
            snapshots: Vec::new(),
            candidates: CandidateSet::default(),
            hidden: None,
        };
        session.reset(rng);
        Ok(session)
    }

    /// Start over with the same configuration.
    pub fn reset<R: RngCore + ?Sized>(&mut self, rng: &mut R) {
        let cfg = self.config;
        self.history.clear();
        self.snapshots.clear();
        self.candidates = CandidateSet::initial(cfg.total_objects, cfg.policy);
        self.hidden = match cfg.mode {
            GameMode::Random => Some(physical::materialize(cfg.total_objects, cfg.policy, rng)),
            GameMode::WorstCase => None,
        };
        info!(mode = %cfg.mode, policy = %cfg.policy, objects = cfg.total_objects, "session reset");
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn history(&self) -> &[Weighing] {
        &self.history
    }

    /// Each recorded weighing with the candidates left right after it.
    pub fn records(&self) -> impl Iterator<Item = (&Weighing, &CandidateSet)> + '_ {
        self.history.iter().zip(&self.snapshots)
    }

    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// The fixed anomaly, if one has been drawn or pinned.
    pub fn hidden(&self) -> Option<Candidate> {
        self.hidden
    }

    pub fn turns(&self) -> usize {
        self.history.len()
    }

    pub fn weigh<R>(&mut self, pans: Pans, rng: &mut R) -> Result<Turn, SessionError>
    where
        R: RngCore + ?Sized,
    {
        let cfg = self.config;
        pans.check(cfg.total_objects)?;
        if pans.is_empty() {
            return Err(SessionError::EmptyWeighing);
        }

        let (outcome, decision) = match (cfg.mode, self.hidden) {
            (GameMode::Random, Some(anomaly)) => {
                (physical::weigh(&pans, anomaly, &cfg.weights), None)
            }
            (GameMode::Random, None) => {
                // Restored without a draw: take one from what is left.
                let anomaly = physical::sample_candidate(&self.candidates, rng)
                    .unwrap_or_else(|| physical::materialize(cfg.total_objects, cfg.policy, rng));
                self.hidden = Some(anomaly);
                (physical::weigh(&pans, anomaly, &cfg.weights), None)
            }
            (GameMode::WorstCase, _) => {
                let d = self
                    .adversary
                    .decide(&pans, cfg.policy, &self.history, cfg.total_objects, rng);
                (d.outcome(), Some(d))
            }
        };

        self.history.push(pans.record(outcome));
        let resolution = resolve_traced(&self.history, cfg.total_objects, cfg.policy);
        let contradicted = resolution.contradictions.last() == Some(&(self.history.len() - 1));
        self.candidates = resolution.candidates;
        self.snapshots.push(self.candidates.clone());

        if cfg.mode == GameMode::WorstCase
            && let Some(pinned) = self.candidates.sole()
        {
            self.hidden = Some(pinned);
        }

        Ok(Turn {
            outcome,
            decision,
            remaining: self.candidates.len(),
            contradicted,
        })
    }

    /// Correct only once the anomaly is fixed and `object` is it.
    pub fn guess(&self, object: ObjectId) -> Result<Guess, SessionError> {
        let total = self.config.total_objects;
        if object >= total {
            return Err(SessionError::GuessOutOfRange { object, total });
        }
        Ok(match self.hidden {
            Some(anomaly) if anomaly.object == object => Guess::Correct,
            _ => Guess::Incorrect,
        })
    }

    /// Persist settings and weighings.
    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<(), SessionError> {
        self.config.save_settings(store)?;
        let json = serde_json::to_string(&self.history)?;
        store.set(keys::HISTORY, json)?;
        Ok(())
    }

    /// Drop any saved history.
    pub fn discard_saved(store: &mut dyn KeyValueStore) {
        store.remove(keys::HISTORY);
    }

    /// Rebuild a session from saved weighings. A history that cannot be
    /// decoded or does not fit `config` is discarded and a fresh game starts.
    pub fn restore<R: RngCore + ?Sized>(
        store: &mut dyn KeyValueStore,
        config: GameConfig,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        let mut session = Self::new(config, rng)?;
        let Some(raw) = store.get(keys::HISTORY) else {
            return Ok(session);
        };
        match decode_history(&raw, config.total_objects) {
            Ok(history) if history.is_empty() => {}
            Ok(history) => {
                session.replay(history, rng);
                info!(
                    turns = session.turns(),
                    remaining = session.candidates.len(),
                    "session restored"
                );
            }
            Err(e) => {
                error!("discarding saved history: {e}");
                Self::discard_saved(store);
            }
        }
        Ok(session)
    }

    fn replay<R: RngCore + ?Sized>(&mut self, history: Vec<Weighing>, rng: &mut R) {
        let cfg = self.config;
        self.snapshots = trajectory(&history, cfg.total_objects, cfg.policy);
        self.history = history;
        if let Some(last) = self.snapshots.last() {
            self.candidates = last.clone();
        }
        self.hidden = match cfg.mode {
            GameMode::WorstCase => self.candidates.sole(),
            GameMode::Random => physical::sample_candidate(&self.candidates, rng),
        };
        if self.hidden.is_none() && cfg.mode == GameMode::Random {
            warn!("restored game has no candidates to draw from");
        }
    }
}

fn decode_history(raw: &str, total_objects: usize) -> Result<Vec<Weighing>, SessionError> {
    let history: Vec<Weighing> = serde_json::from_str(raw)?;
    for w in &history {
        w.pans().check(total_objects)?;
    }
    Ok(history)
}
