//! HC-SR04 ultrasonic rangefinder
//!
//! A 10µs pulse on TRIG starts a measurement; the module answers with a
//! pulse on ECHO whose width is the round-trip time of the sound burst.
//! At ~343 m/s that is 58µs per centimetre of distance.
//!
//! A module that never raises ECHO would stall [`Hcsr04::measure`] forever,
//! so callers wrap it in a timeout (e.g. `embassy_time::with_timeout`) and
//! treat expiry as "no detection".
//!
//! Readings follow the [`RangeSensor`] convention: `0` means nothing was
//! detected within range.
//!
//! [`RangeSensor`]: scout_core::traits::RangeSensor

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::digital::Wait;

/// Echo round-trip time per centimetre (µs)
pub const US_PER_CM: u64 = 58;

/// Trigger pulse width (µs)
const TRIGGER_PULSE_US: u32 = 10;

/// Microsecond time source used to time the echo pulse
pub trait MicrosClock {
    /// Monotonic time in microseconds
    fn now_us(&self) -> u64;
}

/// Errors that can occur during a measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SonarError {
    /// Trigger pin write failed
    Trigger,
    /// Waiting on the echo pin failed
    Echo,
}

/// HC-SR04 configuration
#[derive(Debug, Clone, Copy)]
pub struct Hcsr04Config {
    /// Echoes beyond this distance read as 0 (cm)
    pub max_range_cm: u16,
}

impl Default for Hcsr04Config {
    fn default() -> Self {
        // Datasheet range is 2cm-400cm
        Self { max_range_cm: 400 }
    }
}

/// HC-SR04 driver
pub struct Hcsr04<TRIG, ECHO> {
    trig: TRIG,
    echo: ECHO,
    config: Hcsr04Config,
}

impl<TRIG, ECHO> Hcsr04<TRIG, ECHO>
where
    TRIG: OutputPin,
    ECHO: Wait,
{
    /// Create a new driver
    pub fn new(trig: TRIG, echo: ECHO, config: Hcsr04Config) -> Self {
        Self { trig, echo, config }
    }

    /// Trigger one measurement and time the echo
    ///
    /// Returns the distance in centimetres, or 0 when the echo is out of range.
    pub async fn measure<D, C>(&mut self, delay: &mut D, clock: &C) -> Result<u16, SonarError>
    where
        D: DelayNs,
        C: MicrosClock,
    {
        self.trig.set_low().map_err(|_| SonarError::Trigger)?;
        delay.delay_us(2).await;
        self.trig.set_high().map_err(|_| SonarError::Trigger)?;
        delay.delay_us(TRIGGER_PULSE_US).await;
        self.trig.set_low().map_err(|_| SonarError::Trigger)?;

        self.echo
            .wait_for_high()
            .await
            .map_err(|_| SonarError::Echo)?;
        let start = clock.now_us();
        self.echo
            .wait_for_low()
            .await
            .map_err(|_| SonarError::Echo)?;
        let width_us = clock.now_us().saturating_sub(start);

        Ok(self.pulse_to_cm(width_us))
    }

    /// Convert an echo pulse width to centimetres
    ///
    /// Pulses shorter than one centimetre or longer than the configured
    /// range read as 0.
    pub fn pulse_to_cm(&self, width_us: u64) -> u16 {
        let cm = width_us / US_PER_CM;
        if cm > self.config.max_range_cm as u64 {
            0
        } else {
            cm as u16
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Hcsr04Config {
        &self.config
    }
}
