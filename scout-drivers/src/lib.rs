//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in scout-core for the robot's hardware:
//!
//! - Motor channels (H-bridge with PWM speed and direction pin)
//! - Range sensors (HC-SR04 ultrasonic, latched readings)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod motor;
pub mod sensor;
