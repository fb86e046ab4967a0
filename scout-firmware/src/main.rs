//! Scout - Reactive Obstacle-Avoidance Firmware
//!
//! Main firmware binary for RP2040-based competition robots.
//! Two ultrasonic rangefinders, four drive motors on two H-bridges, and a
//! competition-switch input that gates autonomous mode.
//!
//! Pin assignments (Raspberry Pi Pico):
//!
//! | Function            | GPIO        |
//! |---------------------|-------------|
//! | Left motors PWM     | 2 (F), 3 (R) |
//! | Right motors PWM    | 4 (F), 5 (R) |
//! | Motor direction     | 6, 7, 8, 9  |
//! | Left sonar trig/echo  | 10 / 11   |
//! | Right sonar trig/echo | 12 / 13   |
//! | Autonomous enable   | 14          |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::pwm::{Config as PwmConfig, Pwm, PwmOutput};
use {defmt_rtt as _, panic_probe as _};

use scout_core::actuation::DriveTrain;
use scout_core::config::{DriveConfig, RobotConfig};
use scout_core::Navigator;
use scout_drivers::motor::{HBridgeChannel, HBridgeConfig};
use scout_drivers::sensor::{Hcsr04, Hcsr04Config};

use crate::channels::{LEFT_RANGE, RIGHT_RANGE};
use crate::config::load_config;
use crate::tasks::DriveMotor;

mod channels;
mod config;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Scout firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let RobotConfig {
        navigation,
        sonar,
        drive,
    } = load_config();

    // Setup PWM for the drive motors
    // Slice 1 drives the left side (GPIO2/3), slice 2 the right (GPIO4/5)
    let mut pwm_config = PwmConfig::default();
    pwm_config.top = drive.pwm_top;
    pwm_config.compare_a = 0;
    pwm_config.compare_b = 0;

    let left_pwm = Pwm::new_output_ab(p.PWM_SLICE1, p.PIN_2, p.PIN_3, pwm_config.clone());
    let right_pwm = Pwm::new_output_ab(p.PWM_SLICE2, p.PIN_4, p.PIN_5, pwm_config);
    let (Some(left_front_pwm), Some(left_rear_pwm)) = left_pwm.split() else {
        defmt::panic!("Left PWM slice has no outputs");
    };
    let (Some(right_front_pwm), Some(right_rear_pwm)) = right_pwm.split() else {
        defmt::panic!("Right PWM slice has no outputs");
    };

    let drivetrain = DriveTrain::new(
        motor(left_front_pwm, Output::new(p.PIN_6, Level::High), &drive, 0),
        motor(left_rear_pwm, Output::new(p.PIN_7, Level::High), &drive, 1),
        motor(right_front_pwm, Output::new(p.PIN_8, Level::High), &drive, 2),
        motor(right_rear_pwm, Output::new(p.PIN_9, Level::High), &drive, 3),
    );
    info!("Drive PWM initialized (top={})", drive.pwm_top);

    // Setup ultrasonic rangefinders
    let sonar_config = Hcsr04Config {
        max_range_cm: sonar.max_range_cm,
    };
    let left_sonar = Hcsr04::new(
        Output::new(p.PIN_10, Level::Low),
        Input::new(p.PIN_11, Pull::Down),
        sonar_config,
    );
    let right_sonar = Hcsr04::new(
        Output::new(p.PIN_12, Level::Low),
        Input::new(p.PIN_13, Pull::Down),
        sonar_config,
    );
    info!("Sonars initialized");

    // Competition switch: high = autonomous enabled
    let enable = Input::new(p.PIN_14, Pull::Down);

    let navigator = Navigator::new(navigation, &LEFT_RANGE, &RIGHT_RANGE, drivetrain);

    // Spawn tasks
    spawner.spawn(tasks::tick_task(navigation.cycle_period_ms)).unwrap();
    spawner
        .spawn(tasks::sonar_task("left", left_sonar, &LEFT_RANGE, sonar, 0))
        .unwrap();
    spawner
        .spawn(tasks::sonar_task(
            "right",
            right_sonar,
            &RIGHT_RANGE,
            sonar,
            sonar.ping_interval_ms / 2,
        ))
        .unwrap();
    spawner
        .spawn(tasks::autonomous_task(navigator, enable))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}

/// Build one drive channel, applying the configured wiring inversion
fn motor(
    pwm: PwmOutput<'static>,
    dir: Output<'static>,
    drive: &DriveConfig,
    index: usize,
) -> DriveMotor {
    HBridgeChannel::new(
        pwm,
        dir,
        HBridgeConfig {
            min_duty: 0,
            inverted: drive.invert[index],
        },
    )
}
