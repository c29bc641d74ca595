// demos/replay.rs
// Run with:
//   cargo run --example replay

use odd_weight::{AnomalyPolicy, Outcome, Pans, resolve_traced};

fn main() -> Result<(), odd_weight::WeighingError> {
    let total = 12;
    let history = vec![
        Pans::new([0, 1, 2, 3], [4, 5, 6, 7], total)?.record(Outcome::Left),
        Pans::new([0, 1, 4], [2, 5, 8], total)?.record(Outcome::Right),
        Pans::new([2], [3], total)?.record(Outcome::Equal),
    ];

    for policy in [AnomalyPolicy::AlwaysHeavier, AnomalyPolicy::AlwaysLighter, AnomalyPolicy::Either] {
        let res = resolve_traced(&history, total, policy);
        let names: Vec<String> = res
            .candidates
            .iter()
            .map(|c| format!("{}{}", c.object, if c.direction == odd_weight::Direction::Heavier { "+" } else { "-" }))
            .collect();
        println!("{policy:>6}: {} (refused steps: {:?})", names.join(" "), res.contradictions);
    }
    Ok(())
}
