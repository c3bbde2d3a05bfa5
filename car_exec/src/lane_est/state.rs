//! Implementations for the LaneEst state structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::Serialize;

// Internal
use super::{EstMethod, LaneEstError, LaneEstimate, Params};

use crate::vision::BinaryFrame;
use util::{module::State, params, session::Session};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Lane estimation module state
#[derive(Default)]
pub struct LaneEst {
    pub(crate) params: Params,

    pub(crate) report: StatusReport,
}

/// Status report for LaneEst processing.
#[derive(Clone, Copy, Default, Serialize, Debug)]
pub struct StatusReport {
    /// Number of columns which cleared the pixel count threshold.
    pub valid_columns: u32,

    /// True if the frame had no pixels in one or both dimensions.
    pub frame_degenerate: bool,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl LaneEst {
    /// Build the module directly from a set of parameters.
    pub fn from_params(params: Params) -> Self {
        Self {
            params,
            report: StatusReport::default(),
        }
    }
}

impl State for LaneEst {
    type InitData = &'static str;
    type InitError = params::LoadError;

    type InputData = BinaryFrame;
    type OutputData = LaneEstimate;
    type StatusReport = StatusReport;
    type ProcError = LaneEstError;

    /// Initialise the LaneEst module.
    ///
    /// Expected init data is the path to the parameter file
    fn init(&mut self, init_data: Self::InitData, _session: &Session)
        -> Result<(), Self::InitError>
    {
        *self = Self::from_params(params::load(init_data)?);

        Ok(())
    }

    /// Perform cyclic processing of lane estimation.
    ///
    /// This function cannot fail: frames without usable signal produce an
    /// estimate with `detected` cleared.
    fn proc(&mut self, frame: &Self::InputData)
        -> Result<(Self::OutputData, Self::StatusReport), Self::ProcError>
    {
        // Clear the status report
        self.report = StatusReport::default();

        let estimate = match self.params.method {
            EstMethod::ColumnSum => self.calc_column_sum(frame),
            EstMethod::EdgeBased => self.calc_edge_based(frame),
        };

        Ok((estimate, self.report))
    }
}
