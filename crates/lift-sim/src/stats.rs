//! Global, per-hour, and cost statistics.
//!
//! All aggregates are plain counters mutated through named `record_*`
//! methods; ratios are computed at snapshot time only, so a half-updated
//! average can never be observed.

use lift_core::{tou_rate_cad_per_kwh, LegEnergy};

// ── Buckets ───────────────────────────────────────────────────────────────────

/// Counters for one simulated hour-of-day.  24 buckets, never reset: the
/// same hour accumulates across simulated days.
#[derive(Copy, Clone, Debug, Default)]
pub struct HourlyBucket {
    pub trips: u64,
    /// Net energy drawn from the grid, kWh.
    pub energy_kwh: f64,
    pub total_wait_secs: f64,
    pub wait_count: u64,
}

/// Building-wide aggregates.
#[derive(Clone, Debug, Default)]
pub struct GlobalStats {
    pub total_trips: u64,
    pub completed_trips: u64,
    pub total_trip_secs: f64,

    /// Passengers spawned by the generator (or injected).
    pub total_passengers: u64,
    /// Passengers discharged at their destination.
    pub completed_passengers: u64,
    /// Passengers who have boarded a car — the wait-average denominator.
    pub boarded_passengers: u64,
    pub total_wait_secs: f64,

    pub consumed_wh: f64,
    pub regenerated_wh: f64,
    pub net_wh: f64,
    /// Net energy again, in the kWh unit the snapshots report.
    pub net_kwh: f64,

    /// Net grid cost under the time-of-use tariff.
    pub cost_cad: f64,
    /// What the same consumption would cost with no regeneration credit.
    pub cost_traditional_cad: f64,
}

// ── Ledger ────────────────────────────────────────────────────────────────────

/// The single statistics sink the world writes into.
#[derive(Clone, Debug, Default)]
pub struct StatsLedger {
    pub global: GlobalStats,
    pub hourly: [HourlyBucket; 24],
}

impl StatsLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// A passenger entered a hall queue.
    pub fn record_spawned(&mut self) {
        self.global.total_passengers += 1;
    }

    /// A car committed to a trip lasting `travel_secs`.
    pub fn record_trip_start(&mut self, hour: usize, travel_secs: f64) {
        self.global.total_trips += 1;
        self.global.completed_trips += 1;
        self.global.total_trip_secs += travel_secs;
        self.hourly[hour % 24].trips += 1;
    }

    /// Energy and tariff accounting for one completed movement leg.
    pub fn record_leg_energy(&mut self, hour: usize, leg: LegEnergy) {
        let net_wh = leg.net_wh();
        let g = &mut self.global;
        g.consumed_wh += leg.consumed_wh;
        g.regenerated_wh += leg.regenerated_wh;
        g.net_wh += net_wh;
        g.net_kwh += net_wh / 1000.0;

        let rate = tou_rate_cad_per_kwh(hour);
        g.cost_cad += net_wh * rate / 1000.0;
        g.cost_traditional_cad += leg.consumed_wh * rate / 1000.0;

        self.hourly[hour % 24].energy_kwh += net_wh / 1000.0;
    }

    /// A passenger boarded after waiting `wait_secs`.
    pub fn record_wait(&mut self, hour: usize, wait_secs: f64) {
        self.global.boarded_passengers += 1;
        self.global.total_wait_secs += wait_secs;

        let bucket = &mut self.hourly[hour % 24];
        bucket.total_wait_secs += wait_secs;
        bucket.wait_count += 1;
    }

    /// `count` passengers left a car at their destination.
    pub fn record_discharged(&mut self, count: usize) {
        self.global.completed_passengers += count as u64;
    }

    /// The hour with the most trips; the earliest hour wins ties.
    pub fn peak_hour(&self) -> usize {
        let mut peak = 0;
        for (hour, bucket) in self.hourly.iter().enumerate() {
            if bucket.trips > self.hourly[peak].trips {
                peak = hour;
            }
        }
        peak
    }
}
