//! Configuration types
//!
//! Board-agnostic configuration structures and the TOML subset parser used
//! to load them from the embedded robot description.

pub mod parse;
pub mod types;

pub use parse::{parse_config, ParseError};
pub use types::*;
