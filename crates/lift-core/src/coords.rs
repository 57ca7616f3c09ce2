//! Internal ↔ public coordinate transform.
//!
//! All simulation logic runs on the internal numbering (1 = top of shaft,
//! `floor_count` = bottom).  Clients see the conventional numbering
//! (1 = ground).  The two are mirror images, so the transform is its own
//! inverse; it is applied exactly once, when a snapshot is built.

/// Map an internal floor index to the public one (and back).
#[inline]
pub fn public_floor(floor_count: i32, floor: i32) -> i32 {
    floor_count - floor + 1
}

/// Map an internal direction sign to the public one (and back).
#[inline]
pub fn public_direction(sign: i32) -> i32 {
    -sign
}
