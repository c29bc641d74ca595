pub mod weighing;
pub mod candidates;
pub mod elimination;
pub mod physical;
pub mod adversary;

pub use adversary::{Adversary, Decision, OutcomeSizes, choose_outcome};
pub use candidates::{Candidate, CandidateSet, Contradiction};
pub use elimination::{Resolution, resolve, resolve_traced, trajectory};
pub use weighing::{ObjectId, Outcome, Pan, Pans, Weighing, WeighingError};
