//! Latest-reading hand-off between a sampling task and the control loop
//!
//! The ultrasonic sampling task publishes each finished measurement; the
//! control loop reads whatever was last published without waiting. A single
//! 16-bit atomic is enough, so no lock is involved.

use portable_atomic::{AtomicU16, Ordering};
use scout_core::traits::RangeSensor;

/// Most recent range reading (cm, 0 = no detection)
pub struct RangeLatch {
    value: AtomicU16,
}

impl Default for RangeLatch {
    fn default() -> Self {
        Self::new()
    }
}

impl RangeLatch {
    /// Create a latch reading "no detection"
    pub const fn new() -> Self {
        Self {
            value: AtomicU16::new(0),
        }
    }

    /// Publish a new reading
    pub fn publish(&self, cm: u16) {
        self.value.store(cm, Ordering::Relaxed);
    }

    /// Get the last published reading
    pub fn latest(&self) -> u16 {
        self.value.load(Ordering::Relaxed)
    }
}

impl RangeSensor for &RangeLatch {
    fn read_distance(&mut self) -> u16 {
        self.latest()
    }
}
