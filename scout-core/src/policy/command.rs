//! Abstract motion commands

/// Drive direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

impl Direction {
    /// Signed multiplier: +1 forward, -1 reverse
    pub const fn sign(self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Reverse => -1,
        }
    }
}

/// Speed/direction/turn triple produced by the policy
///
/// Consumed by the differential drive mapper within the same cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionCommand {
    /// Drive magnitude (motor command units)
    pub speed: u8,
    /// Forward or reverse
    pub direction: Direction,
    /// Signed turn parameter; 0 drives straight
    pub turn_angle: i32,
}

impl MotionCommand {
    /// Straight-line command
    pub const fn straight(speed: u8, direction: Direction) -> Self {
        Self {
            speed,
            direction,
            turn_angle: 0,
        }
    }

    /// Forward command with a turn
    pub const fn steer(speed: u8, turn_angle: i32) -> Self {
        Self {
            speed,
            direction: Direction::Forward,
            turn_angle,
        }
    }
}
