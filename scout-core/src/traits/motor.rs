//! Motor channel traits
//!
//! The drivetrain has two sides with two motors each. Every motor sits on its
//! own output channel that accepts a signed command: the sign selects the
//! rotation direction, the magnitude the drive strength.

/// Full-scale motor command magnitude
///
/// Commands outside `-MOTOR_COMMAND_MAX..=MOTOR_COMMAND_MAX` are accepted by
/// [`MotorChannel::set_command`]; implementations saturate them.
pub const MOTOR_COMMAND_MAX: i32 = 127;

/// Physical motor output position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorPort {
    /// First left motor
    LeftFront,
    /// Second left motor
    LeftRear,
    /// First right motor (mirrored mounting)
    RightFront,
    /// Second right motor (mirrored mounting)
    RightRear,
}

impl MotorPort {
    /// All ports in write order
    pub const ALL: [MotorPort; 4] = [
        MotorPort::LeftFront,
        MotorPort::LeftRear,
        MotorPort::RightFront,
        MotorPort::RightRear,
    ];

    /// Check if this port drives the right side of the robot
    pub fn is_right(&self) -> bool {
        matches!(self, MotorPort::RightFront | MotorPort::RightRear)
    }
}

/// A single motor output channel
///
/// Writes are fire-and-forget: no acknowledgement, no error reporting.
/// Implementations that can fail internally (PWM or pin errors) swallow
/// the failure and keep the last good output.
pub trait MotorChannel {
    /// Write a signed drive command
    fn set_command(&mut self, value: i32);

    /// Stop the motor
    fn stop(&mut self) {
        self.set_command(0);
    }
}

impl<T: MotorChannel + ?Sized> MotorChannel for &mut T {
    fn set_command(&mut self, value: i32) {
        (**self).set_command(value)
    }
}
