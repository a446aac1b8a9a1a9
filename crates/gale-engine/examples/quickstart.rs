//! Gale quickstart: a pressure dipole spinning up wind.
//!
//! Builds a 64×64 world, drops a high in the southern hemisphere and a
//! low in the northern one, runs past the forcing threshold and prints
//! the strongest wind and Coriolis deflection every few ticks.
//!
//! Run with:
//!   RUST_LOG=info cargo run --example quickstart

use gale_engine::{ClearScope, Preset, SimConfig, TickEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = SimConfig {
        world_name: "quickstart".to_string(),
        n: 64,
        begin_pgf_tick: 5,
        ..SimConfig::default()
    };
    let mut engine = TickEngine::new(config)?;
    let cells = engine.apply_preset(Preset::A);
    println!("preset A touched {cells} cells");

    engine.start();
    for _ in 0..6 {
        let ran = engine.run(5)?;
        let snapshot = engine.snapshot();
        println!(
            "tick {:>3} ({ran} run): |u| {:.3e}  |v| {:.3e}  coriolis |v| {:.3e}  ({}us last tick)",
            engine.current_tick(),
            snapshot.u.max_abs_interior(),
            snapshot.v.max_abs_interior(),
            snapshot.coriolis_v.max_abs_interior(),
            engine.last_metrics().total_us,
        );
    }

    let centre = engine.config().n / 4;
    let probe = engine.probe(centre, engine.config().n / 2)?;
    println!(
        "at the high: u={:.3e} v={:.3e} p={:.3}",
        probe.u, probe.v, probe.pressure
    );

    engine.pause();
    engine.clear(ClearScope::Full)?;
    println!("cleared, back at tick {}", engine.current_tick());
    Ok(())
}
