//! Implementations for the LocoCtrl state structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::trace;
use serde::Serialize;

// Internal
use super::{DriveCommand, LocoCtrlError, Params, WheelDems};
use util::{module::State, params, session::Session};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Locomotion control module state
#[derive(Default)]
pub struct LocoCtrl {

    pub(crate) params: Params,

    pub(crate) report: StatusReport,
}

/// Input data to locomotion control.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputData {
    /// The lateral offset of the lane from the frame centre. On a miss this
    /// is the last offset the lane was seen at.
    ///
    /// Units: pixels
    pub offset_px: f64,

    /// The steering demand from SteerCtrl.
    pub steer_dem: f64,

    /// True if the lane was detected this cycle.
    pub lane_detected: bool,

    /// Cycles so far on which the left side of the track had no signal.
    pub left_miss_count: u64,

    /// Cycles so far on which the right side of the track had no signal.
    pub right_miss_count: u64,
}

/// Status report for LocoCtrl processing.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct StatusReport {
    /// The drive mode selected this cycle.
    pub mode: DriveMode,

    /// True if a wheel speed was limited to the maximum.
    pub speed_limited: bool,

    /// True if a proportional turn drove a wheel backwards.
    pub spin_fallback: bool,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// The qualitative drive modes LocoCtrl can select.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DriveMode {
    /// Both wheels at cruise speed.
    Straight,

    /// Steering demand split across the wheels.
    PropTurn,

    /// Pivot spin commanded by a saturated offset.
    HardTurn,

    /// Pivot spin commanded by a loss of track.
    Recovery,

    /// No signal to act on, car stopped.
    Stopped,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for DriveMode {
    fn default() -> Self {
        DriveMode::Stopped
    }
}

impl LocoCtrl {
    /// Build the module directly from a set of parameters.
    pub fn from_params(params: Params) -> Self {
        Self {
            params,
            report: StatusReport::default(),
        }
    }
}

impl State for LocoCtrl {
    type InitData = &'static str;
    type InitError = params::LoadError;

    type InputData = InputData;
    type OutputData = DriveCommand;
    type StatusReport = StatusReport;
    type ProcError = LocoCtrlError;

    /// Initialise the LocoCtrl module.
    ///
    /// Expected init data is the path to the parameter file
    fn init(&mut self, init_data: Self::InitData, _session: &Session)
        -> Result<(), Self::InitError>
    {
        *self = Self::from_params(params::load(init_data)?);

        Ok(())
    }

    /// Perform cyclic processing of locomotion control.
    ///
    /// Selects a drive mode for the cycle and builds the wheel command for
    /// it. The mode checks run in order of severity: loss of track first
    /// (the offset is stale on a miss), then the offset sanity bound, the
    /// saturated offset, the dead zone, and finally the proportional turn.
    fn proc(&mut self, input_data: &Self::InputData)
        -> Result<(Self::OutputData, Self::StatusReport), Self::ProcError>
    {
        // Clear the status report
        self.report = StatusReport::default();

        if !input_data.offset_px.is_finite() || !input_data.steer_dem.is_finite() {
            return Err(LocoCtrlError::NonFiniteInput {
                offset_px: input_data.offset_px,
                steer_dem: input_data.steer_dem,
            });
        }

        let offset_mag = input_data.offset_px.abs();

        let cmd = if !input_data.lane_detected {
            self.calc_recovery(input_data)
        }
        else if offset_mag > self.params.max_offset_px {
            self.report.mode = DriveMode::Stopped;
            DriveCommand::Stop
        }
        else if offset_mag >= self.params.saturation_offset_px {
            self.calc_hard_turn(input_data)
        }
        else if offset_mag < self.params.dead_zone_px {
            self.report.mode = DriveMode::Straight;
            DriveCommand::Wheels(WheelDems::forward(self.params.cruise_speed as u8))
        }
        else {
            self.calc_prop_turn(input_data)
        };

        trace!("LocoCtrl output: {:?} ({:?})", cmd, self.report.mode);

        Ok((cmd, self.report))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::loco_ctrl::MotorDir;

    fn input(offset_px: f64, steer_dem: f64) -> InputData {
        InputData {
            offset_px,
            steer_dem,
            lane_detected: true,
            left_miss_count: 0,
            right_miss_count: 0,
        }
    }

    #[test]
    fn test_dead_zone_drives_straight() {
        let mut ctrl = LocoCtrl::from_params(Params::default());

        let (cmd, report) = ctrl.proc(&input(0.0, 0.0)).unwrap();

        assert_eq!(cmd, DriveCommand::Wheels(WheelDems::forward(40)));
        assert_eq!(report.mode, DriveMode::Straight);

        // Just inside the dead zone
        let (cmd, _) = ctrl.proc(&input(2.9, -1.0)).unwrap();
        assert_eq!(cmd, DriveCommand::Wheels(WheelDems::forward(40)));
    }

    #[test]
    fn test_prop_turn_splits_cruise() {
        let mut ctrl = LocoCtrl::from_params(Params::default());

        // Lane left of centre, negative demand: left slows, right speeds up
        let (cmd, report) = ctrl.proc(&input(30.0, -12.0)).unwrap();

        assert_eq!(report.mode, DriveMode::PropTurn);
        match cmd {
            DriveCommand::Wheels(dems) => {
                assert_eq!(dems.left_dir, MotorDir::Forward);
                assert_eq!(dems.left_speed, 28);
                assert_eq!(dems.right_dir, MotorDir::Forward);
                assert_eq!(dems.right_speed, 52);
            }
            _ => panic!("expected a wheel command"),
        }
    }

    #[test]
    fn test_prop_turn_negative_wheel_becomes_spin() {
        let mut ctrl = LocoCtrl::from_params(Params::default());

        let (cmd, report) = ctrl.proc(&input(100.0, -55.0)).unwrap();

        assert!(report.spin_fallback);
        match cmd {
            DriveCommand::Wheels(dems) => {
                // No negative speeds: the left wheel reverses instead
                assert_eq!(dems.left_dir, MotorDir::Backward);
                assert_eq!(dems.left_speed, 15);
                assert_eq!(dems.right_dir, MotorDir::Forward);
            }
            _ => panic!("expected a wheel command"),
        }
    }

    #[test]
    fn test_prop_turn_speed_limited() {
        let mut ctrl = LocoCtrl::from_params(Params::default());

        // cruise + 55 exceeds max_speed = 70
        let (cmd, report) = ctrl.proc(&input(-100.0, 55.0)).unwrap();

        assert!(report.speed_limited);
        match cmd {
            DriveCommand::Wheels(dems) => {
                assert_eq!(dems.left_speed, 70);
            }
            _ => panic!("expected a wheel command"),
        }
    }

    #[test]
    fn test_saturated_offset_pivots_with_bias() {
        let mut ctrl = LocoCtrl::from_params(Params::default());

        // Fewer misses on the right: spin towards the right
        let mut input_data = input(150.0, -60.0);
        input_data.left_miss_count = 5;
        input_data.right_miss_count = 1;

        let (cmd, report) = ctrl.proc(&input_data).unwrap();

        assert_eq!(report.mode, DriveMode::HardTurn);
        assert_eq!(
            cmd,
            DriveCommand::Wheels(WheelDems::from_signed(70.0, -70.0))
        );
    }

    #[test]
    fn test_saturated_offset_tie_follows_offset_sign() {
        let mut ctrl = LocoCtrl::from_params(Params::default());

        // No bias: positive offset means the lane is left, spin left
        let (cmd, _) = ctrl.proc(&input(150.0, -60.0)).unwrap();
        assert_eq!(
            cmd,
            DriveCommand::Wheels(WheelDems::from_signed(-70.0, 70.0))
        );

        let (cmd, _) = ctrl.proc(&input(-150.0, 60.0)).unwrap();
        assert_eq!(
            cmd,
            DriveCommand::Wheels(WheelDems::from_signed(70.0, -70.0))
        );
    }

    #[test]
    fn test_offset_beyond_max_stops() {
        let mut ctrl = LocoCtrl::from_params(Params::default());

        let (cmd, report) = ctrl.proc(&input(600.0, -60.0)).unwrap();

        assert_eq!(cmd, DriveCommand::Stop);
        assert_eq!(report.mode, DriveMode::Stopped);
    }

    #[test]
    fn test_miss_with_no_bias_stops() {
        let mut ctrl = LocoCtrl::from_params(Params::default());

        let mut input_data = input(0.0, 0.0);
        input_data.lane_detected = false;

        let (cmd, report) = ctrl.proc(&input_data).unwrap();

        assert_eq!(cmd, DriveCommand::Stop);
        assert_eq!(report.mode, DriveMode::Stopped);
    }

    #[test]
    fn test_miss_spins_away_from_losing_side() {
        let mut ctrl = LocoCtrl::from_params(Params::default());

        // The left side has been losing signal: spin right, away from it
        let mut input_data = input(0.0, 0.0);
        input_data.lane_detected = false;
        input_data.left_miss_count = 8;
        input_data.right_miss_count = 2;

        let (cmd, report) = ctrl.proc(&input_data).unwrap();

        assert_eq!(report.mode, DriveMode::Recovery);
        assert_eq!(
            cmd,
            DriveCommand::Wheels(WheelDems::from_signed(70.0, -70.0))
        );
    }

    #[test]
    fn test_non_finite_input_rejected() {
        let mut ctrl = LocoCtrl::from_params(Params::default());

        assert!(ctrl.proc(&input(f64::NAN, 0.0)).is_err());
    }
}
