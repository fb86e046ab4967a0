//! Configuration type definitions
//!
//! These types hold the tunable parameters of the robot. Defaults match the
//! competition setup; the firmware overrides them from `robot.toml`.

use crate::traits::motor::MOTOR_COMMAND_MAX;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default turn threshold (cm)
pub const DEFAULT_TURN_DISTANCE: u16 = 35;

/// Default backup threshold (cm)
pub const DEFAULT_BACKUP_DISTANCE: u16 = 20;

/// Default drive speed (motor command units)
pub const DEFAULT_SPEED: u8 = 50;

/// Distance substituted for a zero ("no detection") reading (cm)
pub const SENTINEL_DISTANCE: u16 = 300;

/// Default control period in milliseconds
pub const DEFAULT_CYCLE_PERIOD_MS: u16 = 20;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Backup threshold is not below the turn threshold
    ThresholdOrder,
    /// Drive speed is zero or exceeds the motor command range
    InvalidSpeed,
    /// Sentinel distance is zero
    InvalidSentinel,
    /// Turn scale is not positive
    InvalidTurnScale,
    /// Steering gain is not positive
    InvalidSteeringGain,
    /// Minimum steering denominator is zero
    InvalidDenominator,
    /// Control period is zero
    InvalidPeriod,
    /// Sonar timing parameters are zero
    InvalidSonar,
    /// PWM top value is zero
    InvalidPwm,
}

/// Navigation parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NavConfig {
    /// Both readings above this: drive straight ahead (cm)
    pub turn_distance: u16,
    /// Both readings below this: back straight up (cm)
    pub backup_distance: u16,
    /// Drive speed for every behavior (motor command units)
    pub default_speed: u8,
    /// Distance substituted for zero readings (cm)
    pub sentinel_distance: u16,
    /// Multiplier applied to the distance ratio when steering
    pub steering_gain: i32,
    /// Divisor of the turn-magnitude quantisation
    pub turn_scale: i32,
    /// Floor applied to the steering denominators
    pub min_denominator: u16,
    /// Control period in milliseconds
    pub cycle_period_ms: u16,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            turn_distance: DEFAULT_TURN_DISTANCE,
            backup_distance: DEFAULT_BACKUP_DISTANCE,
            default_speed: DEFAULT_SPEED,
            sentinel_distance: SENTINEL_DISTANCE,
            steering_gain: 15,
            turn_scale: 45,
            min_denominator: 1,
            cycle_period_ms: DEFAULT_CYCLE_PERIOD_MS,
        }
    }
}

impl NavConfig {
    /// Check the parameters for values the control loop cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.backup_distance >= self.turn_distance {
            return Err(ConfigError::ThresholdOrder);
        }
        if self.default_speed == 0 || self.default_speed as i32 > MOTOR_COMMAND_MAX {
            return Err(ConfigError::InvalidSpeed);
        }
        if self.sentinel_distance == 0 {
            return Err(ConfigError::InvalidSentinel);
        }
        if self.turn_scale <= 0 {
            return Err(ConfigError::InvalidTurnScale);
        }
        if self.steering_gain <= 0 {
            return Err(ConfigError::InvalidSteeringGain);
        }
        if self.min_denominator == 0 {
            return Err(ConfigError::InvalidDenominator);
        }
        if self.cycle_period_ms == 0 {
            return Err(ConfigError::InvalidPeriod);
        }
        Ok(())
    }
}

/// Ultrasonic rangefinder parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SonarConfig {
    /// Give up on an echo after this long (ms)
    pub echo_timeout_ms: u16,
    /// Echoes beyond this range read as "no detection" (cm)
    pub max_range_cm: u16,
    /// Pause between consecutive pings of one sensor (ms)
    pub ping_interval_ms: u16,
}

impl Default for SonarConfig {
    fn default() -> Self {
        Self {
            echo_timeout_ms: 30,
            max_range_cm: 400,
            ping_interval_ms: 25,
        }
    }
}

/// Drive output parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DriveConfig {
    /// PWM counter top value (sets the PWM frequency)
    pub pwm_top: u16,
    /// Per-channel wiring inversion, in [`MotorPort::ALL`] order
    ///
    /// [`MotorPort::ALL`]: crate::traits::MotorPort::ALL
    pub invert: [bool; 4],
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            pwm_top: 6250, // 125MHz / 6250 / 2 = 10kHz
            invert: [false; 4],
        }
    }
}

/// Complete robot configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RobotConfig {
    /// Navigation thresholds and gains
    pub navigation: NavConfig,
    /// Rangefinder timing
    pub sonar: SonarConfig,
    /// Motor outputs
    pub drive: DriveConfig,
}

impl RobotConfig {
    /// Validate every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.navigation.validate()?;
        if self.sonar.echo_timeout_ms == 0 || self.sonar.max_range_cm == 0 {
            return Err(ConfigError::InvalidSonar);
        }
        if self.drive.pwm_top == 0 {
            return Err(ConfigError::InvalidPwm);
        }
        Ok(())
    }
}
