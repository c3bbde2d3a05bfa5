//! Simulated [`MotorBus`] for running off the car

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use log::trace;

use super::{MotorBus, MotorError};
use crate::loco_ctrl::MotorDir;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// A motor bus which logs demands instead of actuating anything. Used when
/// the executable runs on a host without the motor board.
#[derive(Default)]
pub struct SimBus;

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl SimBus {
    pub fn new() -> Self {
        Self
    }
}

impl MotorBus for SimBus {
    fn set_wheel_commands(
        &mut self,
        left_dir: MotorDir,
        left_speed: u8,
        right_dir: MotorDir,
        right_speed: u8
    ) -> Result<(), MotorError> {
        trace!(
            "SimBus wheel demands: left {:?} {}, right {:?} {}",
            left_dir,
            left_speed,
            right_dir,
            right_speed
        );

        Ok(())
    }

    fn stop(&mut self) -> Result<(), MotorError> {
        trace!("SimBus stop");

        Ok(())
    }
}
