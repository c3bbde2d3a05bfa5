//! Proportional turn calculations

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal imports
use super::{DriveCommand, DriveMode, InputData, LocoCtrl, WheelDems};
use util::maths::clamp;

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl LocoCtrl {

    /// Perform the proportional turn calculations.
    ///
    /// The steering demand is split across the wheels around the cruise
    /// speed. A negative demand slows the left wheel (turning left), a
    /// positive one slows the right. If the split drives a wheel speed
    /// negative the command becomes a sharp pivot, with that wheel running
    /// backwards.
    pub(crate) fn calc_prop_turn(&mut self, input_data: &InputData) -> DriveCommand {
        self.report.mode = DriveMode::PropTurn;

        let left = self.params.cruise_speed + input_data.steer_dem;
        let right = self.params.cruise_speed - input_data.steer_dem;

        // Limit to the car's capabilities
        let max = self.params.max_speed;
        let left_lim = clamp(&left, &-max, &max);
        let right_lim = clamp(&right, &-max, &max);

        if left_lim != left || right_lim != right {
            self.report.speed_limited = true;
        }

        if left_lim < 0.0 || right_lim < 0.0 {
            self.report.spin_fallback = true;
        }

        DriveCommand::Wheels(WheelDems::from_signed(left_lim, right_lim))
    }
}
