//! Ultrasonic sampling task
//!
//! Pings one HC-SR04 continuously and publishes each reading to its latch.
//! A missing echo (timeout) or pin error publishes 0, which the control
//! loop treats as "nothing in range".

use defmt::*;
use embassy_rp::gpio::{Input, Output};
use embassy_time::{with_timeout, Delay, Duration, Instant, Timer};

use scout_core::config::SonarConfig;
use scout_drivers::sensor::{Hcsr04, MicrosClock, RangeLatch};

/// HC-SR04 wired to RP2040 GPIO
pub type Sonar = Hcsr04<Output<'static>, Input<'static>>;

/// Embassy time driver as echo clock
struct EmbassyClock;

impl MicrosClock for EmbassyClock {
    fn now_us(&self) -> u64 {
        Instant::now().as_micros()
    }
}

/// Sonar sampling task (one instance per sensor)
///
/// `phase_ms` delays the first ping to stagger the two sensors. It does not
/// keep their echo windows apart once ping durations vary.
#[embassy_executor::task(pool_size = 2)]
pub async fn sonar_task(
    name: &'static str,
    mut sonar: Sonar,
    latch: &'static RangeLatch,
    config: SonarConfig,
    phase_ms: u16,
) {
    info!("Sonar task started: {}", name);

    let timeout = Duration::from_millis(config.echo_timeout_ms as u64);
    let interval = Duration::from_millis(config.ping_interval_ms as u64);
    let mut delay = Delay;

    Timer::after_millis(phase_ms as u64).await;

    loop {
        let cm = match with_timeout(timeout, sonar.measure(&mut delay, &EmbassyClock)).await {
            Ok(Ok(cm)) => cm,
            Ok(Err(e)) => {
                trace!("{} sonar error: {:?}", name, e);
                0
            }
            Err(_) => 0,
        };

        latch.publish(cm);
        Timer::after(interval).await;
    }
}
