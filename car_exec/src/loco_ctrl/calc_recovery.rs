//! Hard turn and loss-of-track recovery calculations

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal imports
use super::{DriveCommand, DriveMode, InputData, LocoCtrl, WheelDems};

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl LocoCtrl {

    /// Perform the loss-of-track recovery calculations.
    ///
    /// The miss counters say which side of the track has been losing signal.
    /// If they differ the car pivots away from the losing side to bring the
    /// track back into view. Equal counters carry no direction at all, so
    /// the car stops rather than spinning blind.
    pub(crate) fn calc_recovery(&mut self, input_data: &InputData) -> DriveCommand {
        if input_data.left_miss_count == input_data.right_miss_count {
            self.report.mode = DriveMode::Stopped;
            return DriveCommand::Stop;
        }

        self.report.mode = DriveMode::Recovery;

        let spin_left = input_data.left_miss_count < input_data.right_miss_count;

        self.pivot(spin_left)
    }

    /// Perform the hard turn calculations.
    ///
    /// The offset has saturated, so the car pivots on the spot. The spin
    /// heads towards the side with fewer recent misses; with no bias between
    /// the sides the offset sign decides (a positive offset means the lane
    /// is left of centre, so spin left).
    pub(crate) fn calc_hard_turn(&mut self, input_data: &InputData) -> DriveCommand {
        self.report.mode = DriveMode::HardTurn;

        let spin_left = if input_data.left_miss_count != input_data.right_miss_count {
            input_data.left_miss_count < input_data.right_miss_count
        }
        else {
            input_data.offset_px > 0.0
        };

        self.pivot(spin_left)
    }

    /// Build a pivot spin command in the given direction.
    ///
    /// A left spin runs the left wheel backwards and the right wheel
    /// forwards.
    fn pivot(&self, spin_left: bool) -> DriveCommand {
        let speed = self.params.pivot_speed;

        if spin_left {
            DriveCommand::Wheels(WheelDems::from_signed(-speed, speed))
        }
        else {
            DriveCommand::Wheels(WheelDems::from_signed(speed, -speed))
        }
    }
}
