//! Hall-call assignment: a nearest-K filter, then a weighted cost score.
//!
//! # Why two stages
//!
//! Scoring every car for every latched call would let far-away cars compete
//! on queue length alone and drag the whole bank toward busy floors.  The
//! distance pre-filter keeps only the `K` closest cars in the running; the
//! score then arbitrates between them on pickup time, travel direction, and
//! how much work they already have queued.
//!
//! The score is a heuristic, not an optimiser: all weights are in
//! seconds-equivalent units and were tuned against the reference traffic
//! profile.

use lift_core::Direction;

use crate::board::CallBoard;
use crate::elevator::Elevator;

/// Cars surviving the distance pre-filter.
const NEAREST_K: usize = 2;

/// Seconds per floor of separation, the pickup-time proxy.
const SECS_PER_FLOOR: f64 = 7.5;

/// Charged when a car is moving away from the call's direction.
const REVERSAL_PENALTY_SECS: f64 = 14.0;
/// Charged per stop already queued on the car.
const QUEUE_PENALTY_SECS: f64 = 18.0;
/// Flat surcharge for having any queue at all.
const STOP_PENALTY_SECS: f64 = 6.0;
/// Subtracted from candidates tied on the minimum distance.
const NEAREST_TIE_BONUS: f64 = 1.0;

const PICKUP_WEIGHT: f64 = 1.8;
const REVERSAL_WEIGHT: f64 = 1.3;
const QUEUE_WEIGHT: f64 = 1.4;
const STOP_WEIGHT: f64 = 0.8;

/// Distribute every latched hall call into some car's stop list.
///
/// Floors are visited in ascending internal order, Up before Down, so
/// assignment is deterministic for a given world state.  The two calls at
/// one floor may land on different cars; only the queue a car actually
/// empties clears its latch.  Assignments are deduplicated by
/// [`Elevator::push_stop`].
pub fn assign_calls(board: &CallBoard, elevators: &mut [Elevator]) {
    for floor in 1..=board.floor_count() {
        for direction in [Direction::Up, Direction::Down] {
            if !board.is_latched(floor, direction) {
                continue;
            }
            if let Some(winner) = select_car(elevators, floor, direction) {
                elevators[winner].push_stop(floor);
            }
        }
    }
}

/// Pick the car to serve a hall call at `floor` going `direction`.
///
/// Returns an index into `elevators`, or `None` for an empty bank.
pub fn select_car(elevators: &[Elevator], floor: i32, direction: Direction) -> Option<usize> {
    // Stage 1: keep the K closest cars.  The sort is stable, so equal
    // distances preserve id order and the final tie-break is well defined.
    let mut candidates: Vec<usize> = (0..elevators.len()).collect();
    candidates.sort_by_key(|&i| (elevators[i].current_floor - floor).abs());
    candidates.truncate(NEAREST_K.min(elevators.len()));

    let min_distance = (elevators[*candidates.first()?].current_floor - floor).abs();

    // Stage 2: least cost wins; the first candidate keeps a cost tie.
    let mut best: Option<(usize, f64)> = None;
    for &i in &candidates {
        let cost = call_cost(&elevators[i], floor, direction, min_distance);
        match best {
            Some((_, incumbent)) if incumbent <= cost => {}
            _ => best = Some((i, cost)),
        }
    }
    best.map(|(i, _)| i)
}

fn call_cost(car: &Elevator, floor: i32, direction: Direction, min_distance: i32) -> f64 {
    let distance = (car.current_floor - floor).abs();
    let pickup_secs = f64::from(distance) * SECS_PER_FLOOR;

    // ±1 only while moving, so an idle car never pays the reversal.
    let reversing = car.phase.direction_sign() * direction.as_sign() == -1;

    let mut cost = PICKUP_WEIGHT * pickup_secs
        + REVERSAL_WEIGHT * if reversing { REVERSAL_PENALTY_SECS } else { 0.0 }
        + QUEUE_WEIGHT * car.stops.len() as f64 * QUEUE_PENALTY_SECS
        + STOP_WEIGHT * if car.stops.is_empty() { 0.0 } else { STOP_PENALTY_SECS };

    if distance == min_distance {
        cost -= NEAREST_TIE_BONUS;
    }
    cost
}
