//! # Data Store

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::Serialize;

// Internal
use crate::{lane_est, loco_ctrl, steer_ctrl};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Global data store for the executable.
#[derive(Default)]
pub struct DataStore {
    // Cycle management
    /// Number of cycles already executed
    pub num_cycles: u128,

    // LaneEst
    pub lane_est: lane_est::LaneEst,
    pub lane_est_output: lane_est::LaneEstimate,
    pub lane_est_status_rpt: lane_est::StatusReport,

    // SteerCtrl
    pub steer_ctrl: steer_ctrl::SteerCtrl,
    pub steer_ctrl_input: steer_ctrl::InputData,
    pub steer_ctrl_output: steer_ctrl::OutputData,
    pub steer_ctrl_status_rpt: steer_ctrl::StatusReport,

    // LocoCtrl
    pub loco_ctrl: loco_ctrl::LocoCtrl,
    pub loco_ctrl_input: loco_ctrl::InputData,
    pub loco_ctrl_output: loco_ctrl::DriveCommand,
    pub loco_ctrl_status_rpt: loco_ctrl::StatusReport,

    // Loss of track tracking
    /// Which side of the track has been losing signal over recent cycles.
    pub loss_history: LossOfTrackHistory,

    /// The offset the lane was last seen at. Carried into cycles where the
    /// estimator misses.
    ///
    /// Units: pixels
    pub last_offset_px: f64,

    // Monitoring counters
    /// Number of consecutive cycle overruns
    pub num_consec_cycle_overruns: u64,

    /// Number of consecutive motor bus write failures
    pub num_consec_bus_errors: u64,
}

/// Counters tracking which side of the track has been losing signal.
///
/// A side's counter is incremented on every cycle whose estimate is missing
/// that side's bound. The counters are never reset after the loop starts, so
/// their difference is what carries the recent directional information.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct LossOfTrackHistory {
    /// Cycles on which the left side had no signal.
    pub left_miss_count: u64,

    /// Cycles on which the right side had no signal.
    pub right_miss_count: u64,
}

// ---------------------------------------------------------------------------
// IMPLS
// ---------------------------------------------------------------------------

impl DataStore {
    /// Perform actions required at the start of a cycle.
    ///
    /// Clears those items that need clearing at the start of a cycle. The
    /// cleared drive command is `Stop`, so a cycle which fails part way
    /// through never re-issues the previous cycle's command.
    pub fn cycle_start(&mut self) {
        self.lane_est_output = lane_est::LaneEstimate::default();
        self.lane_est_status_rpt = lane_est::StatusReport::default();

        self.steer_ctrl_input = steer_ctrl::InputData::default();
        self.steer_ctrl_output = steer_ctrl::OutputData::default();
        self.steer_ctrl_status_rpt = steer_ctrl::StatusReport::default();

        self.loco_ctrl_input = loco_ctrl::InputData::default();
        self.loco_ctrl_output = loco_ctrl::DriveCommand::default();
        self.loco_ctrl_status_rpt = loco_ctrl::StatusReport::default();
    }
}

impl LossOfTrackHistory {
    /// Update the counters from this cycle's estimate.
    pub fn update(&mut self, estimate: &lane_est::LaneEstimate) {
        if estimate.left_bound.is_none() {
            self.left_miss_count += 1;
        }
        if estimate.right_bound.is_none() {
            self.right_miss_count += 1;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::lane_est::LaneEstimate;

    #[test]
    fn test_loss_history_counts_sides() {
        let mut history = LossOfTrackHistory::default();

        // Full detection changes nothing
        history.update(&LaneEstimate {
            center_x: Some(160),
            center_y: 48,
            left_bound: Some(140),
            right_bound: Some(180),
            detected: true,
        });
        assert_eq!(history.left_miss_count, 0);
        assert_eq!(history.right_miss_count, 0);

        // One sided loss counts one side
        history.update(&LaneEstimate {
            center_x: None,
            center_y: 0,
            left_bound: Some(20),
            right_bound: None,
            detected: false,
        });
        assert_eq!(history.left_miss_count, 0);
        assert_eq!(history.right_miss_count, 1);

        // Total loss counts both
        history.update(&LaneEstimate::default());
        assert_eq!(history.left_miss_count, 1);
        assert_eq!(history.right_miss_count, 2);
    }
}
