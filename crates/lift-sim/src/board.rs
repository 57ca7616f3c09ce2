//! Per-floor hall-call state: two FIFO queues and two call latches.
//!
//! # Latch lifecycle
//!
//! A latch is set the moment a passenger joins the matching queue and
//! cleared only when a boarding pass leaves that queue empty.  The latch —
//! not the queue — is what the dispatcher reads, so a call stays visible
//! to dispatch across ticks until a car has actually drained it.  The
//! invariant is one-directional: a non-empty queue implies a set latch,
//! while a set latch may briefly outlive its queue between the last
//! boarding and the next dispatch pass.

use std::collections::VecDeque;

use lift_core::Direction;

use crate::Passenger;

/// One directional hall queue and its call latch.
#[derive(Debug, Default)]
pub struct HallLane {
    /// Waiting passengers, oldest first.
    pub queue: VecDeque<Passenger>,
    /// True while the hall call is outstanding.
    pub latched: bool,
}

/// Hall-call queues and latches for every floor of the building.
///
/// Floor `f` (internal, 1-based) lives at index `f − 1`.
pub struct CallBoard {
    floor_count: i32,
    up: Vec<HallLane>,
    down: Vec<HallLane>,
}

impl CallBoard {
    pub fn new(floor_count: i32) -> Self {
        let lanes = floor_count.max(0) as usize;
        Self {
            floor_count,
            up: (0..lanes).map(|_| HallLane::default()).collect(),
            down: (0..lanes).map(|_| HallLane::default()).collect(),
        }
    }

    #[inline]
    pub fn floor_count(&self) -> i32 {
        self.floor_count
    }

    #[inline]
    fn idx(&self, floor: i32) -> usize {
        debug_assert!((1..=self.floor_count).contains(&floor), "floor {floor} out of range");
        (floor - 1) as usize
    }

    pub fn lane(&self, floor: i32, direction: Direction) -> &HallLane {
        let i = self.idx(floor);
        match direction {
            Direction::Up => &self.up[i],
            Direction::Down => &self.down[i],
        }
    }

    pub fn lane_mut(&mut self, floor: i32, direction: Direction) -> &mut HallLane {
        let i = self.idx(floor);
        match direction {
            Direction::Up => &mut self.up[i],
            Direction::Down => &mut self.down[i],
        }
    }

    /// Queue a passenger at their start floor and latch the call.
    pub fn enqueue(&mut self, passenger: Passenger) {
        let lane = self.lane_mut(passenger.start_floor, passenger.direction);
        lane.queue.push_back(passenger);
        lane.latched = true;
    }

    #[inline]
    pub fn is_latched(&self, floor: i32, direction: Direction) -> bool {
        self.lane(floor, direction).latched
    }

    /// Passengers waiting at `floor` in either direction.
    pub fn waiting_at(&self, floor: i32) -> usize {
        let i = self.idx(floor);
        self.up[i].queue.len() + self.down[i].queue.len()
    }

    /// Waiting passengers across the whole building.
    pub fn total_waiting(&self) -> usize {
        (1..=self.floor_count).map(|f| self.waiting_at(f)).sum()
    }

    /// The closest floor to `from` with at least one waiting passenger;
    /// the lower index wins a distance tie.  Idle cars with nothing queued
    /// fall back to this.
    pub fn nearest_waiting_floor(&self, from: i32) -> Option<i32> {
        let mut best: Option<(i32, i32)> = None; // (distance, floor)
        for floor in 1..=self.floor_count {
            if self.waiting_at(floor) == 0 {
                continue;
            }
            let dist = (floor - from).abs();
            if best.map_or(true, |(d, _)| dist < d) {
                best = Some((dist, floor));
            }
        }
        best.map(|(_, floor)| floor)
    }
}
