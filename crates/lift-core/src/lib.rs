//! `lift-core` — foundational types for the `rust_lift` elevator-bank
//! simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It
//! intentionally has no `lift-*` dependencies and a single external one
//! (`rand`).
//!
//! # What lives here
//!
//! | Module        | Contents                                            |
//! |---------------|-----------------------------------------------------|
//! | [`config`]    | `SimConfig` — the per-deployment knobs              |
//! | [`coords`]    | internal ↔ public floor/direction transform         |
//! | [`direction`] | `Direction` (hall-call / travel direction)          |
//! | [`energy`]    | counter-weighted lift energy model, TOU tariff      |
//! | [`rng`]       | `SimRng` (seeded, world-owned generator)            |
//! | [`time`]      | `SimClock`, simulated hour, travel-time curve       |

pub mod config;
pub mod coords;
pub mod direction;
pub mod energy;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use coords::{public_direction, public_floor};
pub use direction::Direction;
pub use energy::{energy_for_leg, tou_rate_cad_per_kwh, LegEnergy};
pub use rng::SimRng;
pub use time::{travel_time_secs, SimClock};
