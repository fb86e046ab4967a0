//! Distance sensor trait

/// Trait for distance (range) sensors
///
/// Implementations wrap a specific device (ultrasonic, IR, lidar). The
/// reading is an integer in the sensor's native resolution, centimetres for
/// the ultrasonic modules this robot carries.
///
/// A raw reading of `0` means "no detection". Hardware faults, missing
/// echoes and out-of-range targets all surface as `0`; there is no error
/// path. The navigation loop substitutes a sentinel distance for it.
pub trait RangeSensor {
    /// Read the latest distance
    ///
    /// Takes `&mut self` because device reads typically require mutable access.
    fn read_distance(&mut self) -> u16;
}

impl<T: RangeSensor + ?Sized> RangeSensor for &mut T {
    fn read_distance(&mut self) -> u16 {
        (**self).read_distance()
    }
}
