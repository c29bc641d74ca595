// tests/common/mod.rs
#![allow(dead_code)]

use bevy_prng::WyRand;
use rand_core::{RngCore, SeedableRng};

use odd_weight::mechanics::stoch;
use odd_weight::systems::physical;
use odd_weight::{AnomalyPolicy, Candidate, ObjectId, Outcome, Pans, Weighing};

pub fn pans(left: &[ObjectId], right: &[ObjectId], total: usize) -> Pans {
    Pans::new(left.iter().copied(), right.iter().copied(), total).expect("valid pans")
}

pub fn weighing(left: &[ObjectId], right: &[ObjectId], total: usize, outcome: Outcome) -> Weighing {
    pans(left, right, total).record(outcome)
}

pub fn rng(seed: u64) -> WyRand {
    WyRand::from_seed(seed.to_le_bytes())
}

/// Replays a fixed list of `next_u64` values (then zeros).
pub struct ScriptedRng {
    values: Vec<u64>,
    at: usize,
}

impl ScriptedRng {
    pub fn new(values: Vec<u64>) -> Self {
        Self { values, at: 0 }
    }

    /// A source whose next `uniform_index(_, of)` draw returns `k`.
    pub fn picking(k: usize, of: usize) -> Self {
        let u = (k as f64 + 0.5) / of as f64;
        Self::new(vec![((u * (1u64 << 53) as f64) as u64) << 11])
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let v = self.values.get(self.at).copied().unwrap_or(0);
        self.at += 1;
        v
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

fn shuffled(total: usize, rng: &mut WyRand) -> Vec<ObjectId> {
    let mut ids: Vec<ObjectId> = (0..total).collect();
    for i in (1..ids.len()).rev() {
        let j = stoch::uniform_index(rng, i + 1);
        ids.swap(i, j);
    }
    ids
}

/// Equal-count weighings answered physically against `anomaly`.
pub fn consistent_history(
    total: usize,
    anomaly: Candidate,
    steps: usize,
    rng: &mut WyRand,
) -> Vec<Weighing> {
    let model = odd_weight::WeightModel::default();
    (0..steps)
        .map(|_| {
            let ids = shuffled(total, rng);
            let k = 1 + stoch::uniform_index(rng, (total / 2).max(1));
            let p = Pans::new(ids[..k].iter().copied(), ids[k..2 * k].iter().copied(), total)
                .expect("shuffled ids are disjoint");
            let outcome = physical::weigh(&p, anomaly, &model);
            p.record(outcome)
        })
        .collect()
}

/// Arbitrary pans: every object lands left, right or off at random.
pub fn arbitrary_pans(total: usize, rng: &mut WyRand) -> Pans {
    let (mut left, mut right) = (Vec::new(), Vec::new());
    for id in 0..total {
        match stoch::uniform_index(rng, 3) {
            0 => left.push(id),
            1 => right.push(id),
            _ => {}
        }
    }
    Pans::new(left, right, total).expect("each id placed once")
}

pub fn arbitrary_outcome(rng: &mut WyRand) -> Outcome {
    Outcome::PRIORITY[stoch::uniform_index(rng, 3)]
}

pub fn policy_from(i: u8) -> AnomalyPolicy {
    match i % 3 {
        0 => AnomalyPolicy::AlwaysHeavier,
        1 => AnomalyPolicy::AlwaysLighter,
        _ => AnomalyPolicy::Either,
    }
}
