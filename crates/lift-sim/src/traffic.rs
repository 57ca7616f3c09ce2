//! Stochastic passenger arrivals.
//!
//! Each tick runs one Bernoulli trial per floor with success probability
//! `rate_per_minute / 60`, where the rate depends on the simulated hour.
//! The trial cadence is per *tick*, not per second — this is the model's
//! long-standing calibration and must not be "corrected" in isolation.
//! On success, a passenger with a uniformly random distinct destination
//! joins the matching hall queue.

use std::time::Instant;

use lift_core::SimRng;

use crate::board::CallBoard;
use crate::stats::StatsLedger;
use crate::Passenger;

/// Hall-call arrival rate per minute for a simulated hour-of-day.
///
/// Morning rush 07–10, lunch 11–14, evening rush 16–19, trickle otherwise.
pub fn arrival_rate_per_min(hour: usize) -> f64 {
    match hour % 24 {
        7..=9 => 0.25,
        11..=13 => 0.15,
        16..=18 => 0.30,
        _ => 0.05,
    }
}

/// Run one generation pass: at most one new passenger per floor.
pub fn generate(
    board: &mut CallBoard,
    rng: &mut SimRng,
    stats: &mut StatsLedger,
    hour: usize,
    now: Instant,
) {
    let p = arrival_rate_per_min(hour) / 60.0;
    for floor in 1..=board.floor_count() {
        if !rng.gen_bool(p) {
            continue;
        }
        let dest = random_destination(rng, floor, board.floor_count());
        log::trace!("passenger at floor {floor} for {dest}");
        board.enqueue(Passenger::new(floor, dest, now));
        stats.record_spawned();
    }
}

/// Uniform over every floor except `origin`: sample from `F − 1` values
/// and shift the upper half past the origin.
fn random_destination(rng: &mut SimRng, origin: i32, floor_count: i32) -> i32 {
    let d = rng.gen_range(1..floor_count);
    if d >= origin {
        d + 1
    } else {
        d
    }
}
