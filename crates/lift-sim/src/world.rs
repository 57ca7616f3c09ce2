//! The simulation world: single owner of every mutable entity.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use lift_core::{SimClock, SimConfig, SimRng};

use crate::board::CallBoard;
use crate::dispatch;
use crate::elevator::Elevator;
use crate::snapshot::{StateSnapshot, StatsSnapshot};
use crate::stats::StatsLedger;
use crate::traffic;
use crate::Passenger;

// ── World ─────────────────────────────────────────────────────────────────────

/// Everything the simulation mutates, behind one owner.
///
/// `World` methods are the only mutators; concurrent access goes through
/// [`SharedWorld`], which holds the single mutex.  Tick phases run in a
/// fixed order — traffic, dispatch, then each car by ascending id — so a
/// snapshot taken between ticks is always consistent.
pub struct World {
    pub config: SimConfig,
    pub clock: SimClock,
    rng: SimRng,
    pub board: CallBoard,
    pub elevators: Vec<Elevator>,
    pub stats: StatsLedger,
}

impl World {
    pub(crate) fn new(config: SimConfig, clock: SimClock, elevators: Vec<Elevator>) -> Self {
        Self {
            rng: SimRng::new(config.seed),
            board: CallBoard::new(config.floor_count),
            config,
            clock,
            elevators,
            stats: StatsLedger::new(),
        }
    }

    /// One 100 ms simulation step at wall time `now`.
    pub fn tick(&mut self, now: Instant) {
        let hour = self.clock.hour_at(now);

        if self.config.traffic_enabled {
            traffic::generate(&mut self.board, &mut self.rng, &mut self.stats, hour, now);
        }

        dispatch::assign_calls(&self.board, &mut self.elevators);

        for car in &mut self.elevators {
            car.advance(now, hour, &mut self.board, &mut self.stats);
        }
    }

    /// Put a passenger on the board directly, bypassing the generator.
    /// Scenario tests drive the world exclusively through this.
    pub fn inject_passenger(&mut self, start_floor: i32, dest_floor: i32, now: Instant) {
        self.board.enqueue(Passenger::new(start_floor, dest_floor, now));
        self.stats.record_spawned();
    }

    pub fn snapshot_state(&self, now: Instant) -> StateSnapshot {
        StateSnapshot::new(self.config.floor_count, &self.elevators, now)
    }

    pub fn snapshot_stats(&self) -> StatsSnapshot {
        StatsSnapshot::new(self.config.floor_count, &self.elevators, &self.stats)
    }
}

// ── SharedWorld ───────────────────────────────────────────────────────────────

/// Cloneable handle to the mutex-guarded [`World`].
///
/// The simulation thread and every HTTP worker hold one of these.  The
/// lock is held for a whole tick or a whole snapshot, never across a sleep
/// or a socket operation.
#[derive(Clone)]
pub struct SharedWorld(Arc<Mutex<World>>);

impl SharedWorld {
    pub fn new(world: World) -> Self {
        SharedWorld(Arc::new(Mutex::new(world)))
    }

    fn lock(&self) -> MutexGuard<'_, World> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run one tick under the lock.
    pub fn tick(&self, now: Instant) {
        self.lock().tick(now);
    }

    /// Serialize the `/state` document under the lock.
    pub fn state_json(&self, now: Instant) -> String {
        let world = self.lock();
        serde_json::to_string(&world.snapshot_state(now)).unwrap_or_else(|_| "{}".into())
    }

    /// Serialize the `/stats` document under the lock.
    pub fn stats_json(&self) -> String {
        let world = self.lock();
        serde_json::to_string(&world.snapshot_stats()).unwrap_or_else(|_| "{}".into())
    }

    /// Run `f` with the locked world.  Test and tooling hook; the server
    /// itself only ticks and snapshots.
    pub fn with<R>(&self, f: impl FnOnce(&mut World) -> R) -> R {
        f(&mut self.lock())
    }
}
