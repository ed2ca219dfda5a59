// src/common/timing.rs

use core::time::Duration;

/// Delay after every integration-time change, letting the sensor readjust.
/// Determined experimentally; the datasheet gives no figure.
pub const SETTLE_TIME: Duration = Duration::from_millis(200);

/// A read waits this many refresh times after enabling, so that a cycle
/// started with old settings has completed before the count is sampled.
pub const REFRESH_SAFETY_FACTOR: u32 = 2;

/// Interval between completion checks in deadline-bounded reads.
pub const POLL_INTERVAL: Duration = Duration::from_millis(1);
