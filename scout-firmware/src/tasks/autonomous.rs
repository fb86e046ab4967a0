//! Autonomous control task
//!
//! Owns the [`Navigator`] and runs one sense-decide-act cycle per tick while
//! the autonomous-enable input is high. Dropping the input (field disable,
//! match end, lost link) halts the motors between cycles; raising it again
//! restarts from a clean cycle, since nothing carries over.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::{Input, Output};
use embassy_rp::pwm::PwmOutput;

use scout_core::Navigator;
use scout_drivers::motor::HBridgeChannel;
use scout_drivers::sensor::RangeLatch;

use crate::channels::CYCLE_TICK;

/// One H-bridge channel on RP2040 PWM + GPIO
pub type DriveMotor = HBridgeChannel<PwmOutput<'static>, Output<'static>>;

/// Navigator as wired on the robot
pub type RobotNavigator = Navigator<
    &'static RangeLatch,
    &'static RangeLatch,
    DriveMotor,
    DriveMotor,
    DriveMotor,
    DriveMotor,
>;

/// Autonomous task
#[embassy_executor::task]
pub async fn autonomous_task(mut navigator: RobotNavigator, mut enable: Input<'static>) {
    info!("Autonomous task started");

    navigator.halt();

    loop {
        if enable.is_low() {
            info!("Waiting for autonomous enable");
            enable.wait_for_high().await;
        }

        info!("Autonomous enabled");
        navigator.init();

        // Discard a tick left over from before the enable
        CYCLE_TICK.reset();

        let mut cycles: u32 = 0;
        loop {
            match select(CYCLE_TICK.wait(), enable.wait_for_low()).await {
                Either::First(now_ms) => {
                    let report = navigator.run_cycle();
                    cycles = cycles.wrapping_add(1);
                    trace!("[{}ms] {:?}", now_ms, report);
                }
                Either::Second(()) => break,
            }
        }

        navigator.halt();
        info!("Autonomous disabled after {} cycles, motors halted", cycles);
    }
}
