//! Patrol Demo
//!
//! This demo runs the reference enemy for ten simulated seconds.
//!
//! Key concepts:
//! - Idle hovering followed by a square patrol
//! - Driving the machine from a manual clock at 60 fps
//! - Tuning loaded from an optional JSON file
//! - Snapshotting the enemy at the end of the run
//!
//! Run with: cargo run --example patrol_demo [config.json]
//! Set RUST_LOG=debug to see every patrol turn.

use warden::machine::TickOutcome;
use warden::npc::{Enemy, NpcConfig};
use warden::world::{Clock, ManualClock, Transform3};

const FRAME: f32 = 1.0 / 60.0;
const RUN_FOR: f32 = 10.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    warden::logging::init();

    let config = match std::env::args().nth(1) {
        Some(path) => NpcConfig::from_path(path)?,
        None => NpcConfig::default(),
    };

    println!("=== Patrol Demo ===\n");
    println!("Config: {config:?}\n");

    let mut clock = ManualClock::new();
    let mut enemy = Enemy::spawn(config, Transform3::default(), clock.now())?;

    while clock.now() < RUN_FOR {
        clock.advance(FRAME);
        if let TickOutcome::Entered { from, to } = enemy.update(&clock)? {
            println!(
                "{:>6.2}s  {:?} -> {:?} at {:?}",
                clock.now(),
                from,
                to,
                enemy.position()
            );
        }
    }

    println!("\nHistory:");
    for transition in enemy.machine().history().transitions() {
        println!("  {:?} -> {:?} at {:.2}s", transition.from, transition.to, transition.at);
    }

    println!("\nSnapshot:");
    println!("{}", enemy.snapshot().to_json()?);

    Ok(())
}
