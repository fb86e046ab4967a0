//! Actuation
//!
//! Writes wheel values onto the four motor channels. Each side has two
//! motors driven with the same value. The right-side motors are mounted
//! mirrored, so they receive the negated right value.

use crate::drive::WheelCommand;
use crate::traits::{MotorChannel, MotorPort};

/// Physical values written to each port, in [`MotorPort::ALL`] order
pub type ChannelWrites = [i32; 4];

/// Compute the per-port values for a wheel command
pub fn channel_values(wheels: &WheelCommand) -> ChannelWrites {
    let mut writes = [0; 4];
    for (slot, port) in writes.iter_mut().zip(MotorPort::ALL) {
        *slot = if port.is_right() {
            wheels.right.saturating_neg()
        } else {
            wheels.left
        };
    }
    writes
}

/// Four-motor differential drivetrain
pub struct DriveTrain<LF, LR, RF, RR> {
    left_front: LF,
    left_rear: LR,
    right_front: RF,
    right_rear: RR,
}

impl<LF, LR, RF, RR> DriveTrain<LF, LR, RF, RR>
where
    LF: MotorChannel,
    LR: MotorChannel,
    RF: MotorChannel,
    RR: MotorChannel,
{
    /// Create a drivetrain from its four channels
    pub fn new(left_front: LF, left_rear: LR, right_front: RF, right_rear: RR) -> Self {
        Self {
            left_front,
            left_rear,
            right_front,
            right_rear,
        }
    }

    /// Write a wheel command to all four channels
    ///
    /// Returns the values actually written.
    pub fn apply(&mut self, wheels: &WheelCommand) -> ChannelWrites {
        let writes = channel_values(wheels);
        let [lf, lr, rf, rr] = writes;
        self.left_front.set_command(lf);
        self.left_rear.set_command(lr);
        self.right_front.set_command(rf);
        self.right_rear.set_command(rr);
        writes
    }

    /// Stop every motor
    pub fn halt(&mut self) {
        self.left_front.stop();
        self.left_rear.stop();
        self.right_front.stop();
        self.right_rear.stop();
    }

    /// Release the channels
    pub fn into_inner(self) -> (LF, LR, RF, RR) {
        (
            self.left_front,
            self.left_rear,
            self.right_front,
            self.right_rear,
        )
    }
}
