//! Range sensor implementations
//!
//! - HC-SR04: trigger/echo ultrasonic ranging
//! - Latch: lock-free hand-off of the latest reading to the control loop

pub mod hcsr04;
pub mod latch;

pub use hcsr04::{Hcsr04, Hcsr04Config, MicrosClock, SonarError};
pub use latch::RangeLatch;
