//! One elevator car: kinematic phase, stop list, onboard passengers, and
//! the timed state machine that advances them.
//!
//! # Phase machine
//!
//! ```text
//!          stops / fallback               deadline
//!   Idle ─────────────────────▶ Moving ─────────────▶ DoorOpen
//!    ▲                                                   │
//!    └───────────────────────────────────────────────────┘
//!                        doors close (5 s)
//! ```
//!
//! Every transition fires when the wall clock passes the phase deadline.
//! The deadline lives *inside* each [`Phase`] variant, and a car's
//! direction and door state are read straight off the variant, so they can
//! never disagree with it.

use std::time::{Duration, Instant};

use lift_core::time::{DOOR_OPEN_SECS, IDLE_REARM_SECS};
use lift_core::{energy_for_leg, travel_time_secs, Direction};

use crate::board::CallBoard;
use crate::stats::StatsLedger;
use crate::Passenger;

// ── Phase ─────────────────────────────────────────────────────────────────────

/// Kinematic phase of a car.
#[derive(Copy, Clone, Debug)]
pub enum Phase {
    /// Parked, doors closed; re-evaluates its stop list when `until` passes.
    Idle { until: Instant },
    /// Under way to `target`; arrives when `until` passes.
    Moving {
        target: i32,
        direction: Direction,
        until: Instant,
    },
    /// Doors open after an arrival; they close when `until` passes.
    DoorOpen { until: Instant },
}

impl Phase {
    /// Deadline at which the phase ends.
    pub fn until(&self) -> Instant {
        match *self {
            Phase::Idle { until } | Phase::DoorOpen { until } => until,
            Phase::Moving { until, .. } => until,
        }
    }

    /// Signed travel direction: ±1 only while moving.
    pub fn direction_sign(&self) -> i32 {
        match self {
            Phase::Moving { direction, .. } => direction.as_sign(),
            _ => 0,
        }
    }

    pub fn door_open(&self) -> bool {
        matches!(self, Phase::DoorOpen { .. })
    }

    /// Phase name as exposed in the state snapshot.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle { .. } => "Idle",
            Phase::Moving { .. } => "Moving",
            Phase::DoorOpen { .. } => "DoorOpen",
        }
    }
}

// ── Counters ──────────────────────────────────────────────────────────────────

/// Rolling per-car counters surfaced in the stats snapshot.
#[derive(Clone, Debug, Default)]
pub struct CarCounters {
    pub trips: u64,
    pub passengers_moved: u64,
    /// Net grid energy attributed to this car, kWh.
    pub energy_kwh: f64,
    pub door_open_count: u64,
    pub stop_count: u64,
}

// ── Elevator ──────────────────────────────────────────────────────────────────

pub struct Elevator {
    pub id: u8,
    pub current_floor: i32,
    /// Last commanded target; equals `current_floor` when parked.
    pub target_floor: i32,
    pub capacity: usize,
    pub phase: Phase,
    /// Passengers riding the car, boarding order.
    pub onboard: Vec<Passenger>,
    /// Planned stops, oldest first, no duplicates.  Serves both dispatched
    /// hall calls and the destinations of onboard passengers.
    pub stops: Vec<i32>,
    pub counters: CarCounters,
}

impl Elevator {
    /// A car parked at `floor` with its doors open, as at startup.
    pub fn new(id: u8, floor: i32, capacity: usize, now: Instant) -> Self {
        Self {
            id,
            current_floor: floor,
            target_floor: floor,
            capacity,
            phase: Phase::DoorOpen {
                until: now + Duration::from_secs_f64(DOOR_OPEN_SECS),
            },
            onboard: Vec::new(),
            stops: Vec::new(),
            counters: CarCounters::default(),
        }
    }

    /// Queue `floor` unless it is already planned.
    pub fn push_stop(&mut self, floor: i32) {
        if !self.stops.contains(&floor) {
            self.stops.push(floor);
        }
    }

    #[inline]
    pub fn load(&self) -> usize {
        self.onboard.len()
    }

    /// Advance the state machine to `now`.  A no-op until the current
    /// phase's deadline has passed.
    pub fn advance(
        &mut self,
        now: Instant,
        hour: usize,
        board: &mut CallBoard,
        stats: &mut StatsLedger,
    ) {
        let phase = self.phase;
        if now < phase.until() {
            return;
        }
        match phase {
            Phase::Idle { .. } => self.leave_idle(now, hour, board, stats),
            Phase::Moving { target, .. } => self.arrive(target, now, hour, board, stats),
            Phase::DoorOpen { .. } => self.rearm_idle(now),
        }
    }

    // ── Idle → Moving ─────────────────────────────────────────────────────

    fn leave_idle(&mut self, now: Instant, hour: usize, board: &CallBoard, stats: &mut StatsLedger) {
        if let Some(&next) = self.stops.first() {
            if next == self.current_floor {
                // Stale entry: the call here was served by an earlier stop.
                self.stops.remove(0);
                self.rearm_idle(now);
            } else {
                self.depart(next, now, hour, stats);
            }
            return;
        }
        // Nothing planned: head for the nearest floor with somebody waiting.
        match board.nearest_waiting_floor(self.current_floor) {
            Some(floor) if floor != self.current_floor => self.depart(floor, now, hour, stats),
            _ => self.rearm_idle(now),
        }
    }

    fn rearm_idle(&mut self, now: Instant) {
        self.phase = Phase::Idle {
            until: now + Duration::from_secs_f64(IDLE_REARM_SECS),
        };
    }

    fn depart(&mut self, target: i32, now: Instant, hour: usize, stats: &mut StatsLedger) {
        let floors = (target - self.current_floor).abs();
        let travel_secs = travel_time_secs(floors);

        self.target_floor = target;
        self.phase = Phase::Moving {
            target,
            direction: Direction::of_travel(self.current_floor, target),
            until: now + Duration::from_secs_f64(travel_secs),
        };

        self.counters.trips += 1;
        stats.record_trip_start(hour, travel_secs);
        log::debug!(
            "car {}: {} -> {} ({floors} floors, {travel_secs:.1} s)",
            self.id,
            self.current_floor,
            target
        );
    }

    // ── Moving → DoorOpen ─────────────────────────────────────────────────

    /// Account the completed leg's energy, then discharge and board at the
    /// new floor.
    fn arrive(
        &mut self,
        target: i32,
        now: Instant,
        hour: usize,
        board: &mut CallBoard,
        stats: &mut StatsLedger,
    ) {
        // Energy for the leg, with the load that actually rode it.
        let leg = energy_for_leg(self.current_floor, target, self.onboard.len());
        self.counters.energy_kwh += leg.net_wh() / 1000.0;
        stats.record_leg_energy(hour, leg);

        self.current_floor = target;
        self.phase = Phase::DoorOpen {
            until: now + Duration::from_secs_f64(DOOR_OPEN_SECS),
        };
        self.counters.stop_count += 1;
        self.counters.door_open_count += 1;
        self.stops.retain(|&floor| floor != target);

        self.discharge(stats);
        self.board(now, hour, board, stats);
    }

    fn discharge(&mut self, stats: &mut StatsLedger) {
        let here = self.current_floor;
        let before = self.onboard.len();
        self.onboard.retain(|p| p.dest_floor != here);

        let discharged = before - self.onboard.len();
        self.counters.passengers_moved += discharged as u64;
        stats.record_discharged(discharged);
        if discharged > 0 {
            log::trace!("car {}: {discharged} out at floor {here}", self.id);
        }
    }

    /// Board from the Up queue first, then Down, while capacity remains.
    /// A queue that is empty after its pass clears its latch.
    fn board(&mut self, now: Instant, hour: usize, board: &mut CallBoard, stats: &mut StatsLedger) {
        for direction in [Direction::Up, Direction::Down] {
            let lane = board.lane_mut(self.current_floor, direction);
            let mut boarded = 0usize;

            while self.onboard.len() < self.capacity {
                let Some(passenger) = lane.queue.pop_front() else {
                    break;
                };
                let wait_secs = now.saturating_duration_since(passenger.created).as_secs_f64();
                stats.record_wait(hour, wait_secs);

                self.push_stop(passenger.dest_floor);
                self.onboard.push(passenger);
                boarded += 1;
            }

            if lane.queue.is_empty() {
                lane.latched = false;
            }
            if boarded > 0 {
                log::trace!(
                    "car {}: {boarded} in ({direction}) at floor {}",
                    self.id,
                    self.current_floor
                );
            }
        }
    }
}
