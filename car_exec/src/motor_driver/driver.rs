//! Dispatch of drive commands onto a motor bus

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use super::{MotorBus, MotorError};
use crate::loco_ctrl::DriveCommand;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Issues [`DriveCommand`]s over a [`MotorBus`].
///
/// The driver tracks whether the car is already stopped so that repeated
/// stop commands don't generate bus traffic.
pub struct MotorDriver<B> {
    bus: B,

    stopped: bool,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl<B: MotorBus> MotorDriver<B> {

    /// Create a new driver over the given bus.
    pub fn new(bus: B) -> Self {
        Self {
            bus,
            stopped: false,
        }
    }

    /// Dispatch a drive command to the bus.
    ///
    /// A stop command after a successfully dispatched stop is a no-op. A
    /// failed stop is not recorded as stopped, so it is retried on the next
    /// dispatch.
    pub fn dispatch(&mut self, cmd: &DriveCommand) -> Result<(), MotorError> {
        match cmd {
            DriveCommand::Stop => {
                if self.stopped {
                    return Ok(());
                }

                self.bus.stop()?;
                self.stopped = true;

                Ok(())
            }
            DriveCommand::Wheels(dems) => {
                self.bus.set_wheel_commands(
                    dems.left_dir,
                    dems.left_speed,
                    dems.right_dir,
                    dems.right_speed
                )?;
                self.stopped = false;

                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::loco_ctrl::{MotorDir, WheelDems};

    /// A bus which counts commands and can be made to fail.
    #[derive(Default)]
    struct CountingBus {
        wheel_count: u32,
        stop_count: u32,
        fail: bool,
    }

    impl MotorBus for CountingBus {
        fn set_wheel_commands(
            &mut self,
            _left_dir: MotorDir,
            _left_speed: u8,
            _right_dir: MotorDir,
            _right_speed: u8
        ) -> Result<(), MotorError> {
            if self.fail {
                return Err(MotorError::BusWriteFailed);
            }
            self.wheel_count += 1;
            Ok(())
        }

        fn stop(&mut self) -> Result<(), MotorError> {
            if self.fail {
                return Err(MotorError::BusWriteFailed);
            }
            self.stop_count += 1;
            Ok(())
        }
    }

    #[test]
    fn test_repeated_stop_sent_once() {
        let mut driver = MotorDriver::new(CountingBus::default());

        driver.dispatch(&DriveCommand::Stop).unwrap();
        driver.dispatch(&DriveCommand::Stop).unwrap();
        driver.dispatch(&DriveCommand::Stop).unwrap();

        assert_eq!(driver.bus.stop_count, 1);
    }

    #[test]
    fn test_wheels_rearm_stop() {
        let mut driver = MotorDriver::new(CountingBus::default());

        driver.dispatch(&DriveCommand::Stop).unwrap();
        driver
            .dispatch(&DriveCommand::Wheels(WheelDems::forward(40)))
            .unwrap();
        driver.dispatch(&DriveCommand::Stop).unwrap();

        assert_eq!(driver.bus.stop_count, 2);
        assert_eq!(driver.bus.wheel_count, 1);
    }

    #[test]
    fn test_failed_stop_retried() {
        let mut driver = MotorDriver::new(CountingBus::default());

        driver.bus.fail = true;
        assert!(driver.dispatch(&DriveCommand::Stop).is_err());

        driver.bus.fail = false;
        driver.dispatch(&DriveCommand::Stop).unwrap();

        assert_eq!(driver.bus.stop_count, 1);
    }
}
