//! Unit tests for lift-core primitives.

#[cfg(test)]
mod time {
    use std::time::{Duration, Instant};

    use crate::time::{travel_time_secs, SimClock, SECS_PER_SIM_HOUR};

    #[test]
    fn travel_curve_anchor_points() {
        assert_eq!(travel_time_secs(0), 7.5);
        assert_eq!(travel_time_secs(1), 7.5);
        assert_eq!(travel_time_secs(2), 15.0);
        assert_eq!(travel_time_secs(3), 22.0);
        assert_eq!(travel_time_secs(4), 29.0);
    }

    #[test]
    fn travel_single_hop_is_half_a_double() {
        assert_eq!(travel_time_secs(1), travel_time_secs(2) / 2.0);
    }

    #[test]
    fn travel_strictly_increasing_beyond_two() {
        for n in 2..50 {
            assert!(
                travel_time_secs(n + 1) > travel_time_secs(n),
                "curve must grow at n = {n}"
            );
        }
    }

    #[test]
    fn travel_sign_agnostic() {
        assert_eq!(travel_time_secs(-3), travel_time_secs(3));
    }

    #[test]
    fn hour_advances_every_thirty_seconds() {
        let start = Instant::now();
        let clock = SimClock::new(start);
        assert_eq!(clock.hour_at(start), 0);
        assert_eq!(clock.hour_at(start + Duration::from_secs(29)), 0);
        assert_eq!(clock.hour_at(start + Duration::from_secs(30)), 1);
        assert_eq!(clock.hour_at(start + Duration::from_secs(17 * 30)), 17);
    }

    #[test]
    fn hour_wraps_at_midnight() {
        let start = Instant::now();
        let clock = SimClock::new(start);
        let full_day = Duration::from_secs(24 * SECS_PER_SIM_HOUR);
        assert_eq!(clock.hour_at(start + full_day), 0);
        assert_eq!(clock.hour_at(start + full_day + Duration::from_secs(30)), 1);
    }

    #[test]
    fn elapsed_saturates_before_reference() {
        let later = Instant::now() + Duration::from_secs(100);
        let clock = SimClock::new(later);
        assert_eq!(clock.elapsed_secs(Instant::now()), 0);
    }
}

#[cfg(test)]
mod coords {
    use crate::{public_direction, public_floor};

    #[test]
    fn five_floor_mapping() {
        assert_eq!(public_floor(5, 1), 5); // internal top is public 5
        assert_eq!(public_floor(5, 3), 3);
        assert_eq!(public_floor(5, 5), 1); // internal bottom is public ground
    }

    #[test]
    fn floor_transform_is_involution() {
        for floor_count in 2..10 {
            for internal in 1..=floor_count {
                let twice = public_floor(floor_count, public_floor(floor_count, internal));
                assert_eq!(twice, internal);
            }
        }
    }

    #[test]
    fn direction_transform_is_involution() {
        for sign in [-1, 0, 1] {
            assert_eq!(public_direction(public_direction(sign)), sign);
        }
    }
}

#[cfg(test)]
mod direction {
    use crate::Direction;

    #[test]
    fn of_travel_follows_index_order() {
        assert_eq!(Direction::of_travel(2, 5), Direction::Up);
        assert_eq!(Direction::of_travel(5, 2), Direction::Down);
    }

    #[test]
    fn signs() {
        assert_eq!(Direction::Up.as_sign(), 1);
        assert_eq!(Direction::Down.as_sign(), -1);
    }

    #[test]
    fn display() {
        assert_eq!(Direction::Up.to_string(), "up");
        assert_eq!(Direction::Down.to_string(), "down");
    }
}

#[cfg(test)]
mod energy {
    use crate::energy::{
        energy_for_leg, CAR_MASS_KG, COUNTERWEIGHT_KG, FLOOR_HEIGHT_M, GRAVITY, MOTOR_EFFICIENCY,
        PERSON_MASS_KG, REGEN_EFFICIENCY, SUPERCAP_EFFICIENCY,
    };

    fn potential_wh(net_mass: f64, floors: i32) -> f64 {
        net_mass.abs() * GRAVITY * f64::from(floors) * FLOOR_HEIGHT_M / 3600.0
    }

    #[test]
    fn components_never_negative() {
        for start in 1..=5 {
            for end in 1..=5 {
                for pax in 0..=25 {
                    let leg = energy_for_leg(start, end, pax);
                    assert!(leg.consumed_wh >= 0.0, "{start}->{end} pax {pax}");
                    assert!(leg.regenerated_wh >= 0.0, "{start}->{end} pax {pax}");
                }
            }
        }
    }

    #[test]
    fn zero_distance_is_free() {
        let leg = energy_for_leg(3, 3, 8);
        assert_eq!(leg.consumed_wh, 0.0);
        assert_eq!(leg.regenerated_wh, 0.0);
    }

    #[test]
    fn ascending_heavy_motors_against_imbalance() {
        // 14 passengers tip the balance: 910 + 500 − 1400 = +10 kg.
        let net_mass = 14.0 * PERSON_MASS_KG + CAR_MASS_KG - COUNTERWEIGHT_KG;
        assert!(net_mass > 0.0);

        let leg = energy_for_leg(1, 5, 14);
        let expected = potential_wh(net_mass, 4) / MOTOR_EFFICIENCY;
        assert!((leg.consumed_wh - expected).abs() < 1e-9);
        assert_eq!(leg.regenerated_wh, 0.0);
    }

    #[test]
    fn ascending_light_uses_distance_heuristic() {
        // Empty car: the counter-weight lifts it, draw is 0.1 Wh per metre.
        let leg = energy_for_leg(1, 4, 0);
        assert!((leg.consumed_wh - 0.1 * 3.0 * FLOOR_HEIGHT_M).abs() < 1e-9);
        assert_eq!(leg.regenerated_wh, 0.0);
    }

    #[test]
    fn descending_heavy_regenerates() {
        // 21 passengers: net mass 465 kg, above the full-recovery threshold.
        let net_mass = 21.0 * PERSON_MASS_KG + CAR_MASS_KG - COUNTERWEIGHT_KG;
        assert!(net_mass > 400.0);

        let leg = energy_for_leg(5, 1, 21);
        let pot = potential_wh(net_mass, 4);
        assert!((leg.consumed_wh - 0.15 * pot).abs() < 1e-9);
        let expected_regen = pot * REGEN_EFFICIENCY * SUPERCAP_EFFICIENCY;
        assert!((leg.regenerated_wh - expected_regen).abs() < 1e-9);
        // Recovery outweighs the drive's own draw.
        assert!(leg.net_wh() < 0.0);
    }

    #[test]
    fn light_imbalance_recovers_at_half_rate() {
        // 20 passengers: net mass exactly 400 kg — not *above* the
        // threshold, so the half rate applies.
        let net_mass = 20.0 * PERSON_MASS_KG + CAR_MASS_KG - COUNTERWEIGHT_KG;
        assert_eq!(net_mass, 400.0);

        let leg = energy_for_leg(5, 1, 20);
        let pot = potential_wh(net_mass, 4);
        let expected_regen = 0.5 * pot * REGEN_EFFICIENCY * SUPERCAP_EFFICIENCY;
        assert!((leg.regenerated_wh - expected_regen).abs() < 1e-9);
    }

    #[test]
    fn descending_light_motors() {
        // Counter-weight heavier than the car: descending must be driven.
        let net_mass = CAR_MASS_KG - COUNTERWEIGHT_KG;
        let leg = energy_for_leg(4, 1, 0);
        let expected = potential_wh(net_mass, 3) / MOTOR_EFFICIENCY;
        assert!((leg.consumed_wh - expected).abs() < 1e-9);
        assert_eq!(leg.regenerated_wh, 0.0);
    }

    #[test]
    fn net_identity() {
        let leg = energy_for_leg(5, 1, 21);
        assert!((leg.net_wh() - (leg.consumed_wh - leg.regenerated_wh)).abs() < 1e-12);
    }
}

#[cfg(test)]
mod tariff {
    use crate::tou_rate_cad_per_kwh;

    #[test]
    fn band_boundaries() {
        assert_eq!(tou_rate_cad_per_kwh(0), 0.028);
        assert_eq!(tou_rate_cad_per_kwh(6), 0.028);
        assert_eq!(tou_rate_cad_per_kwh(7), 0.122);
        assert_eq!(tou_rate_cad_per_kwh(15), 0.122);
        assert_eq!(tou_rate_cad_per_kwh(16), 0.284);
        assert_eq!(tou_rate_cad_per_kwh(20), 0.284);
        assert_eq!(tou_rate_cad_per_kwh(21), 0.122);
        assert_eq!(tou_rate_cad_per_kwh(22), 0.122);
        assert_eq!(tou_rate_cad_per_kwh(23), 0.028);
    }

    #[test]
    fn wraps_out_of_range_hours() {
        assert_eq!(tou_rate_cad_per_kwh(24), tou_rate_cad_per_kwh(0));
        assert_eq!(tou_rate_cad_per_kwh(41), tou_rate_cad_per_kwh(17));
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: u64 = r1.gen_range(0..u64::MAX);
            let b: u64 = r2.gen_range(0..u64::MAX);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(1..5);
            assert!((1..5).contains(&v));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
        // Out-of-range probabilities clamp instead of panicking.
        assert!(rng.gen_bool(1.5));
        assert!(!rng.gen_bool(-0.5));
    }
}

#[cfg(test)]
mod config {
    use crate::SimConfig;

    #[test]
    fn defaults_match_reference_deployment() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.floor_count, 5);
        assert_eq!(cfg.elevator_count, 3);
        assert_eq!(cfg.capacity, 10);
        assert!(cfg.traffic_enabled);
    }
}
