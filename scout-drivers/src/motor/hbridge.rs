//! H-bridge motor channel with PWM speed control
//!
//! This driver provides:
//! - Signed command mapping: sign → direction pin, magnitude → PWM duty
//! - Saturation at the full-scale command (±127)
//! - Minimum duty handling (below which the motor won't turn)
//! - Per-channel wiring inversion
//!
//! # Usage
//!
//! ```ignore
//! let mut motor = HBridgeChannel::new(pwm, dir_pin, HBridgeConfig::default());
//! motor.apply(64)?;   // ~half speed forward
//! motor.apply(-127)?; // full speed reverse
//! ```
//!
//! As a [`MotorChannel`] the channel is fire-and-forget: a failed PWM or pin
//! write is dropped and the previous output stays in effect.

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;
use scout_core::traits::motor::{MotorChannel, MOTOR_COMMAND_MAX};

/// Duty cycle resolution used for PWM writes (per mille)
const DUTY_SCALE: u16 = 1000;

/// Errors that can occur writing a motor channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorError {
    /// PWM duty write failed
    Pwm,
    /// Direction pin write failed
    DirectionPin,
}

/// H-bridge channel configuration
#[derive(Debug, Clone, Copy)]
pub struct HBridgeConfig {
    /// Minimum duty cycle in per mille (below this the motor won't start)
    pub min_duty: u16,
    /// Motor wired backwards: flip the commanded direction
    pub inverted: bool,
}

impl Default for HBridgeConfig {
    fn default() -> Self {
        Self {
            min_duty: 0,
            inverted: false,
        }
    }
}

/// One H-bridge output: a PWM line for speed and a pin for direction
pub struct HBridgeChannel<PWM, DIR> {
    pwm: PWM,
    dir: DIR,
    config: HBridgeConfig,
    /// Last command successfully applied (after saturation)
    command: i32,
}

impl<PWM, DIR> HBridgeChannel<PWM, DIR>
where
    PWM: SetDutyCycle,
    DIR: OutputPin,
{
    /// Create a new channel
    ///
    /// The output is not touched until the first command.
    pub fn new(pwm: PWM, dir: DIR, config: HBridgeConfig) -> Self {
        Self {
            pwm,
            dir,
            config,
            command: 0,
        }
    }

    /// Get the last applied command
    pub fn command(&self) -> i32 {
        self.command
    }

    /// Get the configuration
    pub fn config(&self) -> &HBridgeConfig {
        &self.config
    }

    /// Scale a command magnitude to duty (per mille)
    ///
    /// Maps 1..=127 to min_duty..=1000, so 0 is off and full scale is
    /// full power, with the dead zone below min_duty skipped.
    fn scale_duty(&self, magnitude: u32) -> u16 {
        if magnitude == 0 {
            return 0;
        }
        let max = MOTOR_COMMAND_MAX as u32;
        let min = self.config.min_duty.min(DUTY_SCALE) as u32;
        let range = DUTY_SCALE as u32 - min;
        let scaled = min + magnitude.min(max) * range / max;
        scaled.min(DUTY_SCALE as u32) as u16
    }

    /// Apply a signed command
    ///
    /// Values beyond ±127 saturate.
    pub fn apply(&mut self, value: i32) -> Result<(), MotorError> {
        let value = value.clamp(-MOTOR_COMMAND_MAX, MOTOR_COMMAND_MAX);
        let physical = if self.config.inverted { -value } else { value };

        // Direction first so the motor never pulses the wrong way
        if physical >= 0 {
            self.dir.set_high().map_err(|_| MotorError::DirectionPin)?;
        } else {
            self.dir.set_low().map_err(|_| MotorError::DirectionPin)?;
        }

        let duty = self.scale_duty(physical.unsigned_abs());
        self.pwm
            .set_duty_cycle_fraction(duty, DUTY_SCALE)
            .map_err(|_| MotorError::Pwm)?;

        self.command = value;
        Ok(())
    }

    /// Release the PWM output and direction pin
    pub fn into_inner(self) -> (PWM, DIR) {
        (self.pwm, self.dir)
    }
}

impl<PWM, DIR> MotorChannel for HBridgeChannel<PWM, DIR>
where
    PWM: SetDutyCycle,
    DIR: OutputPin,
{
    fn set_command(&mut self, value: i32) {
        let _ = self.apply(value);
    }
}
