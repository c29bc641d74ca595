pub mod stoch;
pub mod weight;

pub use stoch::*;
pub use weight::*;
