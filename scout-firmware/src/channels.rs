//! Inter-task communication
//!
//! Static hand-off points between the Embassy tasks.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use scout_drivers::sensor::RangeLatch;

/// Latest left rangefinder reading (cm, 0 = no detection)
pub static LEFT_RANGE: RangeLatch = RangeLatch::new();

/// Latest right rangefinder reading (cm, 0 = no detection)
pub static RIGHT_RANGE: RangeLatch = RangeLatch::new();

/// Control cycle tick, carrying milliseconds since boot
pub static CYCLE_TICK: Signal<CriticalSectionRawMutex, u32> = Signal::new();
