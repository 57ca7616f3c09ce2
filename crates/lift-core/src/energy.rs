//! Counter-weighted lift energy model and time-of-use tariff.
//!
//! # Model
//!
//! The car and counter-weight hang on opposite ends of the hoist rope, so
//! the motor works only against their imbalance (the *net mass*).  Which
//! side is heavier, together with the leg's orientation, decides whether a
//! leg motors or regenerates.  Legs are classified by raw floor indices
//! (`end > start` is "ascending") — the same orientation the state machine
//! moves in; the public floor inversion never reaches this module.
//!
//! Recovered energy passes through the regenerative drive and a
//! supercapacitor bank, each with its own efficiency.  Imbalances under
//! 400 kg recover at half effectiveness.

/// Metres between adjacent floors.
pub const FLOOR_HEIGHT_M: f64 = 5.0;
/// Empty car mass, kg.
pub const CAR_MASS_KG: f64 = 500.0;
/// Counter-weight mass, kg.
pub const COUNTERWEIGHT_KG: f64 = 1400.0;
/// Electrical → mechanical efficiency when motoring.
pub const MOTOR_EFFICIENCY: f64 = 0.85;
/// Mechanical → electrical efficiency when regenerating.
pub const REGEN_EFFICIENCY: f64 = 0.78;
/// Supercapacitor round-trip efficiency applied to recovered energy.
pub const SUPERCAP_EFFICIENCY: f64 = 0.95;
/// Average passenger mass, kg.
pub const PERSON_MASS_KG: f64 = 65.0;
/// Standard gravity, m/s².
pub const GRAVITY: f64 = 9.8;

/// Net-mass imbalance below which regeneration runs at half effectiveness.
const FULL_REGEN_THRESHOLD_KG: f64 = 400.0;

// ── LegEnergy ─────────────────────────────────────────────────────────────────

/// Energy consumed and recovered over one movement leg, in watt-hours.
///
/// Both components are always ≥ 0.  [`net_wh`](Self::net_wh) may go
/// negative on a heavily loaded leg where recovery outweighs the drive's
/// own draw.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LegEnergy {
    pub consumed_wh: f64,
    pub regenerated_wh: f64,
}

impl LegEnergy {
    /// Grid draw after subtracting what the supercap bank recovered.
    #[inline]
    pub fn net_wh(self) -> f64 {
        self.consumed_wh - self.regenerated_wh
    }
}

// ── Leg computation ───────────────────────────────────────────────────────────

/// Energy for one leg from `start` to `end` (floor indices) carrying
/// `pax_count` passengers.
pub fn energy_for_leg(start: i32, end: i32, pax_count: usize) -> LegEnergy {
    let load_kg = pax_count as f64 * PERSON_MASS_KG;
    let net_mass = load_kg + CAR_MASS_KG - COUNTERWEIGHT_KG;
    let distance = f64::from((end - start).abs()) * FLOOR_HEIGHT_M;
    let potential_wh = net_mass.abs() * GRAVITY * distance / 3600.0;

    if end > start {
        // Ascending leg.
        if net_mass > 0.0 {
            LegEnergy {
                consumed_wh: potential_wh / MOTOR_EFFICIENCY,
                regenerated_wh: 0.0,
            }
        } else {
            // Counter-weight does the lifting; only friction and control
            // electronics draw power.
            LegEnergy {
                consumed_wh: 0.1 * distance,
                regenerated_wh: 0.0,
            }
        }
    } else if net_mass > 0.0 {
        // Overhauling descent: the heavy side drives the motor as a
        // generator while the drive idles at a fraction of the potential.
        let recovery = REGEN_EFFICIENCY * SUPERCAP_EFFICIENCY;
        let regenerated_wh = if net_mass > FULL_REGEN_THRESHOLD_KG {
            potential_wh * recovery
        } else {
            0.5 * potential_wh * recovery
        };
        LegEnergy {
            consumed_wh: 0.15 * potential_wh,
            regenerated_wh,
        }
    } else {
        LegEnergy {
            consumed_wh: potential_wh / MOTOR_EFFICIENCY,
            regenerated_wh: 0.0,
        }
    }
}

// ── Time-of-use tariff ────────────────────────────────────────────────────────

/// Grid rate in CAD per kWh for a simulated hour-of-day.
///
/// | Band     | Hours         | CAD/kWh |
/// |----------|---------------|---------|
/// | Off-peak | 23–07         | 0.028   |
/// | Mid-peak | 07–16, 21–23  | 0.122   |
/// | On-peak  | 16–21         | 0.284   |
pub fn tou_rate_cad_per_kwh(hour: usize) -> f64 {
    match hour % 24 {
        0..=6 | 23 => 0.028,
        16..=20 => 0.284,
        _ => 0.122,
    }
}
