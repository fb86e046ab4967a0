//! Priority-ordered behavior rules
//!
//! Rules are evaluated top to bottom; the first whose condition holds
//! produces the command and no later rule is consulted. The last rule
//! always matches, so every reading pair yields exactly one behavior.

use super::command::{Direction, MotionCommand};
use crate::config::NavConfig;
use crate::sensing::Readings;

/// Behavior selected for a cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Behavior {
    /// Both sides blocked: back straight up
    Retreat,
    /// Both sides clear: drive straight ahead
    Advance,
    /// Left is farther than right: steer with a negative turn
    SteerLeftFar,
    /// Right is at least as far as left: steer with a positive turn
    SteerRightFar,
}

/// One entry of the decision table
pub struct Rule {
    /// Behavior this rule produces
    pub behavior: Behavior,
    /// Condition under which the rule fires
    pub condition: fn(&Readings, &NavConfig) -> bool,
    /// Command issued when the rule fires
    pub command: fn(&Readings, &NavConfig) -> MotionCommand,
}

/// Decision table, highest priority first
pub static RULES: [Rule; 4] = [
    Rule {
        behavior: Behavior::Retreat,
        condition: both_blocked,
        command: retreat,
    },
    Rule {
        behavior: Behavior::Advance,
        condition: both_clear,
        command: advance,
    },
    Rule {
        behavior: Behavior::SteerLeftFar,
        condition: left_farther,
        command: steer_left_far,
    },
    Rule {
        behavior: Behavior::SteerRightFar,
        condition: always,
        command: steer_right_far,
    },
];

/// Pick the behavior and command for this cycle
pub fn decide(readings: &Readings, config: &NavConfig) -> (Behavior, MotionCommand) {
    let rule = RULES
        .iter()
        .find(|rule| (rule.condition)(readings, config))
        .unwrap_or(&RULES[RULES.len() - 1]);

    (rule.behavior, (rule.command)(readings, config))
}

fn both_blocked(r: &Readings, c: &NavConfig) -> bool {
    r.left < c.backup_distance && r.right < c.backup_distance
}

fn both_clear(r: &Readings, c: &NavConfig) -> bool {
    r.left > c.turn_distance && r.right > c.turn_distance
}

fn left_farther(r: &Readings, _: &NavConfig) -> bool {
    r.left > r.right
}

fn always(_: &Readings, _: &NavConfig) -> bool {
    true
}

fn retreat(_: &Readings, c: &NavConfig) -> MotionCommand {
    MotionCommand::straight(c.default_speed, Direction::Reverse)
}

fn advance(_: &Readings, c: &NavConfig) -> MotionCommand {
    MotionCommand::straight(c.default_speed, Direction::Forward)
}

fn steer_left_far(r: &Readings, c: &NavConfig) -> MotionCommand {
    let ratio = distance_ratio(r.left, r.right, c.min_denominator);
    MotionCommand::steer(c.default_speed, -ratio.saturating_mul(c.steering_gain))
}

fn steer_right_far(r: &Readings, c: &NavConfig) -> MotionCommand {
    let ratio = distance_ratio(r.right, r.left, c.min_denominator);
    MotionCommand::steer(c.default_speed, ratio.saturating_mul(c.steering_gain))
}

/// Truncating `num / den` with the denominator floored to `min_den`
///
/// Zero readings are already replaced upstream; the floor keeps the
/// division total even when that substitution is bypassed.
fn distance_ratio(num: u16, den: u16, min_den: u16) -> i32 {
    num as i32 / den.max(min_den).max(1) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn run(left: u16, right: u16) -> (Behavior, MotionCommand) {
        decide(&Readings::new(left, right), &NavConfig::default())
    }

    #[test]
    fn test_retreat() {
        let (behavior, cmd) = run(10, 15);
        assert_eq!(behavior, Behavior::Retreat);
        assert_eq!(cmd, MotionCommand::straight(50, Direction::Reverse));
    }

    #[test]
    fn test_advance() {
        let (behavior, cmd) = run(36, 300);
        assert_eq!(behavior, Behavior::Advance);
        assert_eq!(cmd, MotionCommand::straight(50, Direction::Forward));
    }

    #[test]
    fn test_steer_left_far() {
        let (behavior, cmd) = run(40, 20);
        assert_eq!(behavior, Behavior::SteerLeftFar);
        assert_eq!(cmd.direction, Direction::Forward);
        assert_eq!(cmd.turn_angle, -30);
        assert_eq!(cmd.speed, 50);
    }

    #[test]
    fn test_steer_right_far() {
        let (behavior, cmd) = run(20, 40);
        assert_eq!(behavior, Behavior::SteerRightFar);
        assert_eq!(cmd.direction, Direction::Forward);
        assert_eq!(cmd.turn_angle, 30);
    }

    #[test]
    fn test_thresholds_are_strict() {
        // Exactly at the backup threshold is not a retreat
        assert_ne!(run(20, 19).0, Behavior::Retreat);
        assert_eq!(run(19, 19).0, Behavior::Retreat);

        // Exactly at the turn threshold is not an advance
        assert_ne!(run(35, 36).0, Behavior::Advance);
        assert_eq!(run(36, 36).0, Behavior::Advance);
    }

    #[test]
    fn test_equal_readings_fall_to_last_rule() {
        let (behavior, cmd) = run(30, 30);
        assert_eq!(behavior, Behavior::SteerRightFar);
        assert_eq!(cmd.turn_angle, 15);
    }

    #[test]
    fn test_ratio_truncates() {
        // 59 / 30 = 1 (truncated), not 2
        let (_, cmd) = run(59, 30);
        assert_eq!(cmd.turn_angle, -15);

        let (behavior, cmd) = run(30, 25);
        assert_eq!(behavior, Behavior::SteerLeftFar);
        assert_eq!(cmd.turn_angle, -15);
        let (_, cmd) = run(25, 30);
        assert_eq!(cmd.turn_angle, 15);
    }

    #[test]
    fn test_retreat_takes_priority_over_steering() {
        // left > right would steer, but both are below the backup threshold
        assert_eq!(run(18, 2).0, Behavior::Retreat);
    }

    #[test]
    fn test_zero_reading_does_not_divide_by_zero() {
        // Sentinel substitution bypassed: the denominator floor takes over
        let (behavior, cmd) = run(30, 0);
        assert_eq!(behavior, Behavior::SteerLeftFar);
        assert_eq!(cmd.turn_angle, -30 * 15);

        let (behavior, cmd) = run(0, 30);
        assert_eq!(behavior, Behavior::SteerRightFar);
        assert_eq!(cmd.turn_angle, 30 * 15);
    }

    #[test]
    fn test_custom_min_denominator() {
        let config = NavConfig {
            min_denominator: 10,
            ..Default::default()
        };
        let (_, cmd) = decide(&Readings::new(30, 2), &config);
        assert_eq!(cmd.turn_angle, -(30 / 10) * 15);
    }

    #[test]
    fn test_each_rule_condition_in_isolation() {
        let c = NavConfig::default();
        assert!((RULES[0].condition)(&Readings::new(1, 1), &c));
        assert!(!(RULES[0].condition)(&Readings::new(1, 20), &c));
        assert!((RULES[1].condition)(&Readings::new(300, 300), &c));
        assert!(!(RULES[1].condition)(&Readings::new(300, 35), &c));
        assert!((RULES[2].condition)(&Readings::new(2, 1), &c));
        assert!(!(RULES[2].condition)(&Readings::new(1, 1), &c));
        assert!((RULES[3].condition)(&Readings::new(0, 0), &c));
    }

    proptest! {
        #[test]
        fn prop_both_below_backup_retreats(l in 1u16..20, r in 1u16..20) {
            let (behavior, cmd) = run(l, r);
            prop_assert_eq!(behavior, Behavior::Retreat);
            prop_assert_eq!(cmd.direction, Direction::Reverse);
            prop_assert_eq!(cmd.turn_angle, 0);
        }

        #[test]
        fn prop_both_above_turn_advances(l in 36u16.., r in 36u16..) {
            let (behavior, cmd) = run(l, r);
            prop_assert_eq!(behavior, Behavior::Advance);
            prop_assert_eq!(cmd.direction, Direction::Forward);
            prop_assert_eq!(cmd.turn_angle, 0);
        }

        #[test]
        fn prop_steering_is_forward_and_signed(l in 1u16..=300, r in 1u16..=300) {
            let (behavior, cmd) = run(l, r);
            match behavior {
                Behavior::SteerLeftFar => {
                    prop_assert_eq!(cmd.direction, Direction::Forward);
                    prop_assert!(cmd.turn_angle <= 0);
                    prop_assert_eq!(cmd.turn_angle, -((l / r) as i32) * 15);
                }
                Behavior::SteerRightFar => {
                    prop_assert_eq!(cmd.direction, Direction::Forward);
                    prop_assert!(cmd.turn_angle >= 0);
                    prop_assert_eq!(cmd.turn_angle, ((r / l) as i32) * 15);
                }
                _ => {
                    prop_assert_eq!(cmd.turn_angle, 0);
                }
            }
        }

        #[test]
        fn prop_exactly_one_rule_chosen_first(l in any::<u16>(), r in any::<u16>()) {
            let readings = Readings::new(l, r);
            let c = NavConfig::default();
            let first = RULES.iter().position(|rule| (rule.condition)(&readings, &c));
            let (behavior, _) = decide(&readings, &c);
            prop_assert_eq!(first.map(|i| RULES[i].behavior), Some(behavior));
        }
    }
}
