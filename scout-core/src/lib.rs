//! Board-agnostic navigation logic for the Scout robot
//!
//! This crate contains all control logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (range sensor, motor channel)
//! - Sensor acquisition with zero-reading substitution
//! - Motion policy (ordered first-match rule table)
//! - Differential drive mapping
//! - Actuation onto the four drive channels
//! - The [`Navigator`] context tying one control cycle together
//! - Configuration type definitions and parsing

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod actuation;
pub mod config;
pub mod controller;
pub mod drive;
pub mod field;
pub mod policy;
pub mod sensing;
pub mod traits;

pub use controller::{CycleReport, Navigator};
