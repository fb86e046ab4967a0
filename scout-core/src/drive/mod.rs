//! Differential drive mapping
//!
//! Converts a [`MotionCommand`] into per-side wheel values. One side always
//! runs at the full commanded magnitude; the other is multiplied by an
//! integer turn magnitude derived from the turn angle:
//!
//! ```text
//! turn_magnitude = -((|turn_angle| - scale) / scale)     (truncating)
//!
//! |turn_angle|     0      1..=89    90..=134    135..=179   ...
//! magnitude        1      0         -1          -2
//! ```
//!
//! So a zero angle drives straight, small angles pivot on the inner wheel,
//! and larger angles counter-rotate it. The quantisation is coarse on
//! purpose: only the exact-zero case yields a matched pair.
//!
//! No clamping happens here; wheel values may exceed the motor command
//! range and are saturated by the channel drivers.

use crate::policy::MotionCommand;

/// Left/right wheel values for one cycle
///
/// Positive drives the side forward. The right value is the logical
/// value; its physical channels receive the negation (see
/// [`crate::actuation`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WheelCommand {
    /// Left side value
    pub left: i32,
    /// Right side value
    pub right: i32,
}

impl WheelCommand {
    /// Both sides stopped
    pub const ZERO: WheelCommand = WheelCommand::new(0, 0);

    /// Create a wheel command pair
    pub const fn new(left: i32, right: i32) -> Self {
        Self { left, right }
    }

    /// Check if both sides receive the same value
    pub fn is_straight(&self) -> bool {
        self.left == self.right
    }
}

/// Integer scaling factor applied to the inner wheel
///
/// `turn_scale` must be positive, which [`NavConfig::validate`] enforces.
///
/// [`NavConfig::validate`]: crate::config::NavConfig::validate
pub fn turn_magnitude(turn_angle: i32, turn_scale: i32) -> i32 {
    debug_assert!(turn_scale > 0, "turn scale must be positive");
    (turn_angle.saturating_abs().saturating_sub(turn_scale) / turn_scale).saturating_neg()
}

/// Map a motion command onto the two wheels
///
/// Positive turn angles keep the left wheel at full magnitude and scale the
/// right; zero and negative angles scale the left and keep the right.
pub fn mix(cmd: &MotionCommand, turn_scale: i32) -> WheelCommand {
    let full = cmd.direction.sign() * cmd.speed as i32;
    let scaled = full.saturating_mul(turn_magnitude(cmd.turn_angle, turn_scale));

    if cmd.turn_angle > 0 {
        WheelCommand::new(full, scaled)
    } else {
        WheelCommand::new(scaled, full)
    }
}
