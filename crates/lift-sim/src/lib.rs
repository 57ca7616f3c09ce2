//! `lift-sim` — the elevator-bank simulation world.
//!
//! # Tick pipeline
//!
//! ```text
//! every 100 ms, under the world lock:
//!   ① Traffic   — per-floor Bernoulli trial; each new passenger joins a
//!                 hall queue and sets that queue's call latch.
//!   ② Dispatch  — every latched call is scored against the nearest cars
//!                 and appended to the winner's stop list.
//!   ③ Cars      — each car, in id order, advances its timed state machine
//!                 (Idle → Moving → DoorOpen → Idle); an arrival accounts
//!                 the leg's energy, discharges, and boards.
//! ```
//!
//! Snapshots (`/state`, `/stats`) are built under the same lock and are
//! therefore atomic with respect to ticks.
//!
//! # Coordinates
//!
//! Everything in this crate runs on the internal floor numbering
//! (1 = top).  [`snapshot`] is the single place where the public inversion
//! is applied.

pub mod board;
pub mod builder;
pub mod dispatch;
pub mod elevator;
pub mod error;
pub mod passenger;
pub mod snapshot;
pub mod stats;
pub mod traffic;
pub mod world;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use board::{CallBoard, HallLane};
pub use builder::WorldBuilder;
pub use elevator::{Elevator, Phase};
pub use error::{SimError, SimResult};
pub use passenger::Passenger;
pub use snapshot::{StateSnapshot, StatsSnapshot};
pub use stats::{GlobalStats, HourlyBucket, StatsLedger};
pub use world::{SharedWorld, World};
