//! Navigation controller
//!
//! The [`Navigator`] owns the configuration, both rangefinders and the
//! drivetrain, and runs one sense-decide-act cycle per call:
//!
//! ```text
//! acquire ──▶ decide ──▶ mix ──▶ apply
//! (sensing)   (policy)   (drive)  (actuation)
//! ```
//!
//! Nothing carries over between cycles. The cadence is owned by the caller;
//! a cycle never blocks, sleeps or allocates.

use crate::actuation::{ChannelWrites, DriveTrain};
use crate::config::NavConfig;
use crate::drive::{self, WheelCommand};
use crate::policy::{self, Behavior, MotionCommand};
use crate::sensing::{self, Readings};
use crate::traits::{MotorChannel, RangeSensor};

/// Everything one cycle computed, for tracing and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReport {
    /// Effective distances after zero substitution
    pub readings: Readings,
    /// Rule that fired
    pub behavior: Behavior,
    /// Command chosen by that rule
    pub command: MotionCommand,
    /// Logical wheel values
    pub wheels: WheelCommand,
    /// Values written to the four ports
    pub writes: ChannelWrites,
}

/// Sense-decide-act controller context
pub struct Navigator<L, R, LF, LR, RF, RR> {
    config: NavConfig,
    left_sensor: L,
    right_sensor: R,
    drivetrain: DriveTrain<LF, LR, RF, RR>,
}

impl<L, R, LF, LR, RF, RR> Navigator<L, R, LF, LR, RF, RR>
where
    L: RangeSensor,
    R: RangeSensor,
    LF: MotorChannel,
    LR: MotorChannel,
    RF: MotorChannel,
    RR: MotorChannel,
{
    /// Create a navigator
    pub fn new(
        config: NavConfig,
        left_sensor: L,
        right_sensor: R,
        drivetrain: DriveTrain<LF, LR, RF, RR>,
    ) -> Self {
        Self {
            config,
            left_sensor,
            right_sensor,
            drivetrain,
        }
    }

    /// Initialization hook
    ///
    /// Announces readiness. Performs no state setup.
    pub fn init(&self) {
        #[cfg(feature = "defmt")]
        defmt::info!(
            "Navigator ready: turn={}cm backup={}cm speed={}",
            self.config.turn_distance,
            self.config.backup_distance,
            self.config.default_speed
        );
    }

    /// Run one control cycle
    pub fn run_cycle(&mut self) -> CycleReport {
        let readings = sensing::acquire(
            &mut self.left_sensor,
            &mut self.right_sensor,
            self.config.sentinel_distance,
        );
        let (behavior, command) = policy::decide(&readings, &self.config);
        let wheels = drive::mix(&command, self.config.turn_scale);
        let writes = self.drivetrain.apply(&wheels);

        CycleReport {
            readings,
            behavior,
            command,
            wheels,
            writes,
        }
    }

    /// Stop all motors
    ///
    /// Used by the runtime when autonomous mode is disabled between cycles.
    pub fn halt(&mut self) {
        self.drivetrain.halt();
    }

    /// Get the active configuration
    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// Release sensors and drivetrain
    pub fn into_parts(self) -> (L, R, DriveTrain<LF, LR, RF, RR>) {
        (self.left_sensor, self.right_sensor, self.drivetrain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Direction;
    use proptest::prelude::*;

    /// Sensor returning a settable raw value
    struct Sonar(u16);

    impl RangeSensor for Sonar {
        fn read_distance(&mut self) -> u16 {
            self.0
        }
    }

    #[derive(Default)]
    struct Motor(i32);

    impl MotorChannel for Motor {
        fn set_command(&mut self, value: i32) {
            self.0 = value;
        }
    }

    type TestNavigator = Navigator<Sonar, Sonar, Motor, Motor, Motor, Motor>;

    fn navigator(left: u16, right: u16) -> TestNavigator {
        Navigator::new(
            NavConfig::default(),
            Sonar(left),
            Sonar(right),
            DriveTrain::new(
                Motor::default(),
                Motor::default(),
                Motor::default(),
                Motor::default(),
            ),
        )
    }

    fn motor_values(nav: TestNavigator) -> [i32; 4] {
        let (_, _, dt) = nav.into_parts();
        let (lf, lr, rf, rr) = dt.into_inner();
        [lf.0, lr.0, rf.0, rr.0]
    }

    #[test]
    fn test_no_obstacles_drives_forward() {
        // Both sensors see nothing: sentinel on both sides, straight ahead
        let mut nav = navigator(0, 0);
        let report = nav.run_cycle();

        assert_eq!(report.readings, Readings::new(300, 300));
        assert_eq!(report.behavior, Behavior::Advance);
        assert_eq!(report.wheels, WheelCommand::new(50, 50));
        assert_eq!(motor_values(nav), [50, 50, -50, -50]);
    }

    #[test]
    fn test_boxed_in_backs_up() {
        let mut nav = navigator(10, 12);
        let report = nav.run_cycle();

        assert_eq!(report.behavior, Behavior::Retreat);
        assert_eq!(report.command.direction, Direction::Reverse);
        assert_eq!(report.wheels, WheelCommand::new(-50, -50));
        assert_eq!(motor_values(nav), [-50, -50, 50, 50]);
    }

    #[test]
    fn test_obstacle_on_right_pivots() {
        let mut nav = navigator(40, 20);
        let report = nav.run_cycle();

        assert_eq!(report.behavior, Behavior::SteerLeftFar);
        assert_eq!(report.command.turn_angle, -30);
        // Negative turn scales the left wheel: magnitude 0 at |30|
        assert_eq!(report.wheels, WheelCommand::new(0, 50));
        assert_eq!(motor_values(nav), [0, 0, -50, -50]);
    }

    #[test]
    fn test_obstacle_on_left_pivots() {
        let mut nav = navigator(20, 40);
        let report = nav.run_cycle();

        assert_eq!(report.behavior, Behavior::SteerRightFar);
        assert_eq!(report.command.turn_angle, 30);
        assert_eq!(report.wheels, WheelCommand::new(50, 0));
        assert_eq!(motor_values(nav), [50, 50, 0, 0]);
    }

    #[test]
    fn test_one_blind_sensor_spins() {
        // Right sees nothing (sentinel 300), left sees a wall at 10cm
        let mut nav = navigator(10, 0);
        let report = nav.run_cycle();

        assert_eq!(report.readings, Readings::new(10, 300));
        assert_eq!(report.behavior, Behavior::SteerRightFar);
        assert_eq!(report.command.turn_angle, 30 * 15);
        // |450| → magnitude -9 on the right wheel
        assert_eq!(report.wheels, WheelCommand::new(50, -450));
        assert_eq!(report.writes, [50, 50, 450, 450]);
    }

    #[test]
    fn test_cycles_are_independent() {
        let mut nav = navigator(10, 12);
        nav.run_cycle();

        nav.left_sensor.0 = 0;
        nav.right_sensor.0 = 0;
        let after_retreat = nav.run_cycle();

        let fresh = navigator(0, 0).run_cycle();
        assert_eq!(after_retreat, fresh);
    }

    #[test]
    fn test_halt_zeroes_outputs() {
        let mut nav = navigator(0, 0);
        nav.init();
        nav.run_cycle();
        nav.halt();
        assert_eq!(motor_values(nav), [0; 4]);
    }

    #[test]
    fn test_borrowed_hardware() {
        let mut left = Sonar(40);
        let mut right = Sonar(20);
        let mut motors = [Motor(0), Motor(0), Motor(0), Motor(0)];
        {
            let [lf, lr, rf, rr] = &mut motors;
            let mut nav = Navigator::new(
                NavConfig::default(),
                &mut left,
                &mut right,
                DriveTrain::new(lf, lr, rf, rr),
            );
            nav.run_cycle();
        }
        assert_eq!(motors.map(|m| m.0), [0, 0, -50, -50]);
    }

    proptest! {
        #[test]
        fn prop_right_writes_negated(l in any::<u16>(), r in any::<u16>()) {
            let mut nav = navigator(l, r);
            let report = nav.run_cycle();
            prop_assert_eq!(report.writes[0], report.wheels.left);
            prop_assert_eq!(report.writes[1], report.wheels.left);
            prop_assert_eq!(report.writes[2], -report.wheels.right);
            prop_assert_eq!(report.writes[3], -report.wheels.right);
        }

        #[test]
        fn prop_straight_behaviors_match_wheels(l in any::<u16>(), r in any::<u16>()) {
            let mut nav = navigator(l, r);
            let report = nav.run_cycle();
            if matches!(report.behavior, Behavior::Retreat | Behavior::Advance) {
                prop_assert_eq!(report.command.turn_angle, 0);
                prop_assert!(report.wheels.is_straight());
            }
        }
    }
}
