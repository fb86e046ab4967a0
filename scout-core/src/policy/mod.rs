//! Motion policy
//!
//! Chooses what the robot does this cycle from the two effective distances.
//! The decision is an ordered rule table evaluated first-match-wins.

pub mod command;
pub mod rules;

pub use command::{Direction, MotionCommand};
pub use rules::{decide, Behavior, Rule, RULES};
