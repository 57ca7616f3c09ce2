//! Read-only JSON views of the world.
//!
//! Everything here is in *public* coordinates: the floor inversion and the
//! direction flip happen in these constructors and nowhere else.  Field
//! names serialize to the camelCase wire shape the dashboard expects;
//! the handful of acronym fields (`…KWh`, `…CAD`) carry explicit renames
//! because the blanket rule would lowercase them.

use std::time::Instant;

use serde::Serialize;

use lift_core::{public_direction, public_floor};

use crate::elevator::Elevator;
use crate::stats::{HourlyBucket, StatsLedger};

/// `a / b`, or 0.0 for an empty denominator.
#[inline]
fn ratio(num: f64, den: f64) -> f64 {
    if den > 0.0 {
        num / den
    } else {
        0.0
    }
}

// ── /state ────────────────────────────────────────────────────────────────────

/// `GET /state` — the live position of every car.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSnapshot {
    pub floor_count: i32,
    pub elevators: Vec<CarState>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarState {
    pub id: u8,
    pub current_floor: i32,
    pub target_floor: i32,
    pub direction: i32,
    pub door_open: bool,
    pub load: usize,
    pub capacity: usize,
    pub state: &'static str,
    /// Milliseconds until the current phase ends; 0 if already due.
    pub remaining_ms: u64,
}

impl StateSnapshot {
    pub fn new(floor_count: i32, elevators: &[Elevator], now: Instant) -> Self {
        Self {
            floor_count,
            elevators: elevators
                .iter()
                .map(|car| CarState::new(car, floor_count, now))
                .collect(),
        }
    }
}

impl CarState {
    fn new(car: &Elevator, floor_count: i32, now: Instant) -> Self {
        let remaining = car.phase.until().saturating_duration_since(now);
        Self {
            id: car.id,
            current_floor: public_floor(floor_count, car.current_floor),
            target_floor: public_floor(floor_count, car.target_floor),
            direction: public_direction(car.phase.direction_sign()),
            door_open: car.phase.door_open(),
            load: car.load(),
            capacity: car.capacity,
            state: car.phase.as_str(),
            remaining_ms: remaining.as_millis() as u64,
        }
    }
}

// ── /stats ────────────────────────────────────────────────────────────────────

/// `GET /stats` — cumulative counters and derived averages.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    pub floor_count: i32,
    pub total_trips: u64,
    pub total_passengers: u64,
    pub avg_wait_sec: f64,
    pub avg_trip_sec: f64,
    #[serde(rename = "avgEnergyKWh")]
    pub avg_energy_kwh: f64,
    pub peak_hour: usize,
    pub total_energy_consumed_wh: f64,
    pub total_energy_regenerated_wh: f64,
    pub total_net_energy_wh: f64,
    #[serde(rename = "totalCostCAD")]
    pub total_cost_cad: f64,
    #[serde(rename = "costTraditionalCAD")]
    pub cost_traditional_cad: f64,
    #[serde(rename = "dailySavingsCAD")]
    pub daily_savings_cad: f64,
    pub regen_percent: f64,
    pub elevators: Vec<CarStats>,
    pub hourly: Vec<HourlyStats>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarStats {
    pub id: u8,
    pub trips: u64,
    pub passengers_moved: u64,
    #[serde(rename = "energyKWh")]
    pub energy_kwh: f64,
    pub door_open_count: u64,
    pub stop_count: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyStats {
    pub hour: usize,
    pub trips: u64,
    pub avg_wait_sec: f64,
    #[serde(rename = "energyKWh")]
    pub energy_kwh: f64,
}

impl StatsSnapshot {
    pub fn new(floor_count: i32, elevators: &[Elevator], ledger: &StatsLedger) -> Self {
        let g = &ledger.global;
        Self {
            floor_count,
            total_trips: g.total_trips,
            total_passengers: g.total_passengers,
            avg_wait_sec: ratio(g.total_wait_secs, g.boarded_passengers as f64),
            avg_trip_sec: ratio(g.total_trip_secs, g.completed_trips as f64),
            avg_energy_kwh: ratio(g.net_kwh, g.total_trips as f64),
            peak_hour: ledger.peak_hour(),
            total_energy_consumed_wh: g.consumed_wh,
            total_energy_regenerated_wh: g.regenerated_wh,
            total_net_energy_wh: g.net_wh,
            total_cost_cad: g.cost_cad,
            cost_traditional_cad: g.cost_traditional_cad,
            daily_savings_cad: g.cost_traditional_cad - g.cost_cad,
            regen_percent: 100.0 * ratio(g.regenerated_wh, g.consumed_wh),
            elevators: elevators.iter().map(CarStats::new).collect(),
            hourly: ledger
                .hourly
                .iter()
                .enumerate()
                .map(|(hour, bucket)| HourlyStats::new(hour, bucket))
                .collect(),
        }
    }
}

impl CarStats {
    fn new(car: &Elevator) -> Self {
        Self {
            id: car.id,
            trips: car.counters.trips,
            passengers_moved: car.counters.passengers_moved,
            energy_kwh: car.counters.energy_kwh,
            door_open_count: car.counters.door_open_count,
            stop_count: car.counters.stop_count,
        }
    }
}

impl HourlyStats {
    fn new(hour: usize, bucket: &HourlyBucket) -> Self {
        Self {
            hour,
            trips: bucket.trips,
            avg_wait_sec: ratio(bucket.total_wait_secs, bucket.wait_count as f64),
            energy_kwh: bucket.energy_kwh,
        }
    }
}
