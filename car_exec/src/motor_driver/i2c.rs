//! [`MotorBus`] implementation for the I2C motor controller board

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use embedded_hal::blocking::i2c::Write;

use super::{MotorBus, MotorError};
use crate::loco_ctrl::MotorDir;

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// Register accepting `[left_dir, left_speed, right_dir, right_speed]`.
const REG_WHEEL_DEMS: u8 = 0x01;

/// Register accepting the stop command.
const REG_STOP: u8 = 0x02;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// The motor controller board on an I2C bus.
pub struct I2cMotorBus<I2C> {
    i2c: I2C,

    addr: u8,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl<I2C> I2cMotorBus<I2C> {
    /// Create a new bus handle for the board at the given address.
    pub fn new(i2c: I2C, addr: u8) -> Self {
        Self { i2c, addr }
    }
}

impl<I2C, E> MotorBus for I2cMotorBus<I2C>
where
    I2C: Write<Error = E>
{
    fn set_wheel_commands(
        &mut self,
        left_dir: MotorDir,
        left_speed: u8,
        right_dir: MotorDir,
        right_speed: u8
    ) -> Result<(), MotorError> {
        self.i2c
            .write(
                self.addr,
                &[
                    REG_WHEEL_DEMS,
                    dir_byte(left_dir),
                    left_speed,
                    dir_byte(right_dir),
                    right_speed
                ]
            )
            .map_err(|_| MotorError::BusWriteFailed)
    }

    fn stop(&mut self) -> Result<(), MotorError> {
        self.i2c
            .write(self.addr, &[REG_STOP, 0x00])
            .map_err(|_| MotorError::BusWriteFailed)
    }
}

// ------------------------------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ------------------------------------------------------------------------------------------------

/// Wire encoding of a wheel direction: forward is 1, backward is 0.
fn dir_byte(dir: MotorDir) -> u8 {
    match dir {
        MotorDir::Forward => 1,
        MotorDir::Backward => 0,
    }
}
