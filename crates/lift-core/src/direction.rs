//! Hall-call / travel direction under the internal floor ordering.
//!
//! Internal floors number 1 at the top of the shaft down to `floor_count`
//! at the bottom, so `Up` here means *increasing* internal index.  The
//! public inversion happens once, at the snapshot boundary (see
//! [`coords`](crate::coords)).

/// The direction of a hall call or a moving car, in internal ordering.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    /// Towards higher internal floor indices.
    Up,
    /// Towards lower internal floor indices.
    Down,
}

impl Direction {
    /// The direction a passenger travelling `start → dest` needs.
    ///
    /// Debug-asserts that the floors are distinct.
    #[inline]
    pub fn of_travel(start: i32, dest: i32) -> Direction {
        debug_assert_ne!(start, dest);
        if dest > start {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    /// Signed unit step: `+1` for `Up`, `-1` for `Down`.
    #[inline]
    pub fn as_sign(self) -> i32 {
        match self {
            Direction::Up => 1,
            Direction::Down => -1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
