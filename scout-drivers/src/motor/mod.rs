//! Motor driver implementations

pub mod hbridge;

pub use hbridge::{HBridgeChannel, HBridgeConfig, MotorError};
