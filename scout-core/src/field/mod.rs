//! Field description types (future extension)
//!
//! Static map of the competition field and the mission state a planner
//! would track. Nothing in the reactive control loop reads or writes these;
//! they exist for a future localization/planning layer.

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum cubes on the field
pub const MAX_CUBES: usize = 10;

/// Maximum lines (tape or walls) on the field
pub const MAX_LINES: usize = 8;

/// A scoring cube position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cube {
    pub x: i32,
    pub y: i32,
}

/// A straight line on the field, `y = slope * x + y_intercept`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Line {
    pub slope: i32,
    pub y_intercept: i32,
    /// Physical wall (true) or floor tape (false)
    pub is_wall: bool,
}

/// Mission phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SearchState {
    /// Looking for a cube
    #[default]
    Searching,
    /// Carrying a cube to the goal
    Depositing,
}

/// Robot pose estimate
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pose {
    pub x: i32,
    pub y: i32,
    /// Heading in degrees
    pub heading: f32,
}

/// Field map: cubes and lines, no occupancy grid
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldMap {
    pub cubes: Vec<Cube, MAX_CUBES>,
    pub lines: Vec<Line, MAX_LINES>,
}

impl FieldMap {
    /// Create an empty map
    pub const fn new() -> Self {
        Self {
            cubes: Vec::new(),
            lines: Vec::new(),
        }
    }

    /// Add a cube, handing it back if the map is full
    pub fn add_cube(&mut self, cube: Cube) -> Result<(), Cube> {
        self.cubes.push(cube)
    }

    /// Add a line, handing it back if the map is full
    pub fn add_line(&mut self, line: Line) -> Result<(), Line> {
        self.lines.push(line)
    }

    /// Iterate over the walls only
    pub fn walls(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(|l| l.is_wall)
    }
}
