//! Implementations for the SteerCtrl state structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::trace;
use serde::Serialize;

// Internal
use super::{
    IncrementalPid, InertialFilter, Params, PidForm, PositionalPid,
    SteerCtrlError};
use util::{maths, module::State, params, session::Session};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Steering control module state
#[derive(Default)]
pub struct SteerCtrl {

    pub(crate) params: Params,

    pub(crate) pid: Pid,

    pub(crate) filter: InertialFilter,

    pub(crate) report: StatusReport,
}

/// Input data to steering control.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputData {
    /// The lateral offset of the lane from the frame centre. Positive when
    /// the lane sits left of centre.
    ///
    /// Units: pixels
    pub offset_px: f64,
}

/// Output demand from SteerCtrl that the wheel mapper must execute.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct OutputData {
    /// The smoothed, saturated steering demand. Negative when the car should
    /// turn left (slow the left wheel).
    pub steer_dem: f64,
}

/// Status report for SteerCtrl processing.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct StatusReport {
    /// True if the output hit the saturation band this cycle.
    pub output_limited: bool,

    /// True if the positional accumulator hit an anti-windup bound this
    /// cycle.
    pub accumulator_limited: bool,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// The controller selected by the parameters, with its state.
#[derive(Debug, Clone, Serialize)]
pub enum Pid {
    Incremental(IncrementalPid),
    Positional(PositionalPid),
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for Pid {
    fn default() -> Self {
        Pid::Positional(PositionalPid::default())
    }
}

impl SteerCtrl {
    /// Build the module directly from a set of parameters.
    pub fn from_params(params: Params) -> Self {
        let pid = match params.form {
            PidForm::Incremental => Pid::Incremental(
                IncrementalPid::new(params.k_p, params.k_i, params.k_d)
            ),
            PidForm::Positional => Pid::Positional(
                PositionalPid::new(params.k_p, params.k_i, params.k_d)
            ),
        };

        Self {
            params,
            pid,
            filter: InertialFilter::default(),
            report: StatusReport::default(),
        }
    }
}

impl State for SteerCtrl {
    type InitData = &'static str;
    type InitError = params::LoadError;

    type InputData = InputData;
    type OutputData = OutputData;
    type StatusReport = StatusReport;
    type ProcError = SteerCtrlError;

    /// Initialise the SteerCtrl module.
    ///
    /// Expected init data is the path to the parameter file. Initialising
    /// discards any controller memory.
    fn init(&mut self, init_data: Self::InitData, _session: &Session)
        -> Result<(), Self::InitError>
    {
        *self = Self::from_params(params::load(init_data)?);

        Ok(())
    }

    /// Perform cyclic processing of steering control.
    ///
    /// The offset is regulated towards zero, the raw controller output is
    /// smoothed by the inertial filter, and the smoothed output is clamped
    /// to the saturation band.
    fn proc(&mut self, input_data: &Self::InputData)
        -> Result<(Self::OutputData, Self::StatusReport), Self::ProcError>
    {
        // Clear the status report
        self.report = StatusReport::default();

        let raw = match self.pid {
            Pid::Incremental(ref mut pid) => pid.step(0.0, input_data.offset_px),
            Pid::Positional(ref mut pid) => {
                let out = pid.step(0.0, input_data.offset_px);
                self.report.accumulator_limited = pid.accumulator_limited();
                out
            }
        };

        let filtered = self.filter.apply(
            raw,
            self.params.inertia_time_s,
            self.params.sample_time_s
        );

        let limit = self.params.output_limit;
        let steer_dem = maths::clamp(&filtered, &-limit, &limit);

        if steer_dem != filtered {
            self.report.output_limited = true;
        }

        trace!("SteerCtrl output: raw {:.3}, steer_dem {:.3}", raw, steer_dem);

        Ok((OutputData { steer_dem }, self.report))
    }
}
