//! # Motor driver module
//!
//! This module interfaces with the car's motor controller board and issues
//! the wheel commands produced by LocoCtrl. The board sits on an I2C bus and
//! accepts direction+speed demands for both wheels, plus a dedicated stop
//! command.
//!
//! The bus itself sits behind the [`MotorBus`] trait so the same driver runs
//! against the real hardware on the Pi and against a logging simulation
//! everywhere else.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

mod driver;
mod i2c;
mod sim;

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

// Internal
pub use driver::*;
pub use i2c::*;
pub use sim::*;

use crate::loco_ctrl::MotorDir;

// ------------------------------------------------------------------------------------------------
// TRAITS
// ------------------------------------------------------------------------------------------------

/// A bus carrying commands to the motor controller board.
pub trait MotorBus {

    /// Set the direction and speed of both wheels.
    fn set_wheel_commands(
        &mut self,
        left_dir: MotorDir,
        left_speed: u8,
        right_dir: MotorDir,
        right_speed: u8
    ) -> Result<(), MotorError>;

    /// Bring both wheels to a stop.
    fn stop(&mut self) -> Result<(), MotorError>;
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

/// Errors which can occur when commanding the motors.
#[derive(Debug, thiserror::Error)]
pub enum MotorError {

    #[error("I2C write to the motor board failed")]
    BusWriteFailed,
}
