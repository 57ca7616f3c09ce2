//! Validated construction of a [`World`].

use std::time::Instant;

use lift_core::{SimClock, SimConfig};

use crate::elevator::Elevator;
use crate::error::{SimError, SimResult};
use crate::world::World;

/// Builder for [`World`].
///
/// # Example
///
/// ```rust,ignore
/// let world = WorldBuilder::new(SimConfig::default()).build(Instant::now())?;
/// ```
pub struct WorldBuilder {
    config: SimConfig,
}

impl WorldBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config }
    }

    /// Validate the configuration and assemble a world whose clock starts
    /// at `start`.  Cars begin spread across the shaft, doors open.
    pub fn build(self, start: Instant) -> SimResult<World> {
        let config = self.config;
        if config.floor_count < 2 {
            return Err(SimError::FloorCount(config.floor_count));
        }
        if config.elevator_count == 0 {
            return Err(SimError::NoElevators);
        }
        if config.capacity == 0 {
            return Err(SimError::ZeroCapacity);
        }

        let elevators = (0..config.elevator_count)
            .map(|i| {
                let floor = initial_floor(i, config.elevator_count, config.floor_count);
                Elevator::new(i as u8 + 1, floor, config.capacity, start)
            })
            .collect();

        Ok(World::new(config, SimClock::new(start), elevators))
    }
}

/// Starting floor for car `i` of `n`, spread evenly top to bottom; a lone
/// car parks mid-shaft.
fn initial_floor(i: usize, n: usize, floor_count: i32) -> i32 {
    if n == 1 {
        return (floor_count + 1) / 2;
    }
    let span = f64::from(floor_count - 1);
    1 + (span * i as f64 / (n - 1) as f64).round() as i32
}
