// demos/worst_case.rs
// Run with:
//   RUST_LOG=odd_weight=debug cargo run --example worst_case

use odd_weight::mechanics::stoch;
use odd_weight::play::{GameConfig, GameMode, MemoryStore, Session};
use odd_weight::{AnomalyPolicy, Pans};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = GameConfig {
        total_objects: 12,
        policy: AnomalyPolicy::Either,
        mode: GameMode::WorstCase,
        ..GameConfig::default()
    };
    let mut rng = stoch::seeded(2024);
    let mut session = Session::new(cfg, &mut rng)?;

    // A fixed opening; the adversary answers each weighing.
    let plan: [(&[usize], &[usize]); 3] = [
        (&[0, 1, 2, 3], &[4, 5, 6, 7]),
        (&[8, 9, 10], &[0, 1, 2]),
        (&[8], &[9]),
    ];
    for (left, right) in plan {
        let pans = Pans::new(left.iter().copied(), right.iter().copied(), cfg.total_objects)?;
        let turn = session.weigh(pans, &mut rng)?;
        println!(
            "{left:?} vs {right:?} -> {:?} ({} candidates left)",
            turn.outcome, turn.remaining
        );
    }

    println!("== Remaining ==");
    for c in session.candidates() {
        println!("object {} ({:?})", c.object, c.direction);
    }

    let mut store = MemoryStore::new();
    session.save(&mut store)?;
    let restored = Session::restore(&mut store, cfg, &mut rng)?;
    println!("restored {} turns, pinned: {:?}", restored.turns(), restored.hidden());
    Ok(())
}
