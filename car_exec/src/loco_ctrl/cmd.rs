//! Wheel commands produced by LocoCtrl

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::Serialize;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Demands for both wheels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct WheelDems {
    /// Direction of the left wheel
    pub left_dir: MotorDir,

    /// Speed of the left wheel, non-negative
    pub left_speed: u8,

    /// Direction of the right wheel
    pub right_dir: MotorDir,

    /// Speed of the right wheel, non-negative
    pub right_speed: u8,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// A command to be executed by the motor driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DriveCommand {
    /// Drive both wheels with the given demands.
    Wheels(WheelDems),

    /// Bring the car to a full stop.
    Stop,
}

/// Wheel spin direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum MotorDir {
    Forward,
    Backward,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for DriveCommand {
    fn default() -> Self {
        DriveCommand::Stop
    }
}

impl WheelDems {

    /// Build wheel demands from signed speeds.
    ///
    /// A negative speed flips that wheel's direction and takes the floored
    /// magnitude, so the demanded speeds are always non-negative.
    pub fn from_signed(left: f64, right: f64) -> Self {
        let (left_dir, left_speed) = split_signed(left);
        let (right_dir, right_speed) = split_signed(right);

        Self {
            left_dir,
            left_speed,
            right_dir,
            right_speed,
        }
    }

    /// Build demands driving both wheels forward at the same speed.
    pub fn forward(speed: u8) -> Self {
        Self {
            left_dir: MotorDir::Forward,
            left_speed: speed,
            right_dir: MotorDir::Forward,
            right_speed: speed,
        }
    }
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

fn split_signed(speed: f64) -> (MotorDir, u8) {
    if speed < 0.0 {
        (MotorDir::Backward, speed.abs().floor() as u8)
    }
    else {
        (MotorDir::Forward, speed.floor() as u8)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_signed_flips_direction() {
        let dems = WheelDems::from_signed(-70.2, 70.8);

        assert_eq!(dems.left_dir, MotorDir::Backward);
        assert_eq!(dems.left_speed, 70);
        assert_eq!(dems.right_dir, MotorDir::Forward);
        assert_eq!(dems.right_speed, 70);
    }

    #[test]
    fn test_forward() {
        let dems = WheelDems::forward(40);

        assert_eq!(dems, WheelDems::from_signed(40.0, 40.0));
    }
}
