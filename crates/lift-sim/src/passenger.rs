//! A passenger waiting at a floor or riding a car.

use std::time::Instant;

use lift_core::Direction;

/// Created by the traffic generator (or injected by a test); destroyed on
/// discharge at the destination floor.
#[derive(Clone, Debug)]
pub struct Passenger {
    /// Floor the hall call was made from (internal index).
    pub start_floor: i32,
    /// Where they are going (internal index, never equal to `start_floor`).
    pub dest_floor: i32,
    /// Travel direction implied by the two floors.
    pub direction: Direction,
    /// When they arrived at the floor; wait time is measured from here.
    pub created: Instant,
}

impl Passenger {
    /// Debug-asserts the floors are distinct.
    pub fn new(start_floor: i32, dest_floor: i32, created: Instant) -> Self {
        Self {
            start_floor,
            dest_floor,
            direction: Direction::of_travel(start_floor, dest_floor),
            created,
        }
    }
}
