//! Sensor acquisition
//!
//! Reads the left and right rangefinders once per cycle. A raw reading of
//! zero means the sensor saw nothing (or is faulted); it is replaced by the
//! sentinel distance so downstream logic treats that side as clear.
//! No smoothing, clamping or debouncing happens here.

use crate::traits::RangeSensor;

/// Effective distances for one control cycle (cm)
///
/// Both values are non-zero whenever produced by [`acquire`] with a
/// non-zero sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Readings {
    /// Left sensor distance
    pub left: u16,
    /// Right sensor distance
    pub right: u16,
}

impl Readings {
    /// Create a reading pair
    pub const fn new(left: u16, right: u16) -> Self {
        Self { left, right }
    }
}

/// Replace a "no detection" reading with the sentinel
#[inline]
pub fn substitute_zero(raw: u16, sentinel: u16) -> u16 {
    if raw == 0 {
        sentinel
    } else {
        raw
    }
}

/// Read both sensors and apply zero substitution
pub fn acquire<L, R>(left: &mut L, right: &mut R, sentinel: u16) -> Readings
where
    L: RangeSensor + ?Sized,
    R: RangeSensor + ?Sized,
{
    Readings {
        left: substitute_zero(left.read_distance(), sentinel),
        right: substitute_zero(right.read_distance(), sentinel),
    }
}
