//! Hardware abstraction traits
//!
//! These traits define the interface between the navigation logic
//! and hardware-specific implementations.

pub mod motor;
pub mod sensor;

pub use motor::{MotorChannel, MotorPort};
pub use sensor::RangeSensor;
