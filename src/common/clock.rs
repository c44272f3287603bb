//! Simulation clock.
//!
//! Weapons reason in whole milliseconds (fire intervals, overheat cooldowns).
//! Motion reasons in seconds (`Time::delta_secs`).

use bevy::prelude::*;

/// Monotonic simulation time in milliseconds.
pub type Millis = u64;

#[inline]
pub fn now_ms<T: Default>(time: &Time<T>) -> Millis {
    time.elapsed().as_millis() as Millis
}
