//! lift-server — elevator-bank simulation with HTTP observability.
//!
//! A five-floor building, three cars, stochastic hall traffic, and two
//! read-only JSON endpoints (`/state`, `/stats`) on port 8080.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;

use lift_core::time::TICK_MILLIS;
use lift_core::SimConfig;
use lift_http::HttpServer;
use lift_sim::{SharedWorld, WorldBuilder};

const LISTEN_ADDR: &str = "0.0.0.0:8080";

fn main() -> Result<()> {
    env_logger::init();

    // 1. Build the world, seeded from entropy.
    let config = SimConfig {
        seed: rand::random(),
        ..SimConfig::default()
    };
    let world = WorldBuilder::new(config.clone()).build(Instant::now())?;
    let shared = SharedWorld::new(world);
    log::info!(
        "simulating {} floors, {} cars (capacity {})",
        config.floor_count,
        config.elevator_count,
        config.capacity
    );

    // 2. Detached simulation thread: tick under the lock, sleep outside it.
    {
        let world = shared.clone();
        thread::spawn(move || loop {
            world.tick(Instant::now());
            thread::sleep(Duration::from_millis(TICK_MILLIS));
        });
    }

    // 3. Serve /state and /stats until the process is killed.
    HttpServer::new(LISTEN_ADDR, shared).run()?;
    Ok(())
}
