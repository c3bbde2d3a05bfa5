//! Parameters structure for SteerCtrl

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::Deserialize;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for steering control.
#[derive(Debug, Deserialize, Clone)]
pub struct Params {

    /// The controller form to run.
    pub form: PidForm,

    // ---- GAINS ----

    /// Proportional gain
    pub k_p: f64,

    /// Integral gain
    pub k_i: f64,

    /// Derivative gain
    pub k_d: f64,

    // ---- FILTER ----

    /// Inertia time constant of the smoothing filter.
    ///
    /// Units: seconds
    pub inertia_time_s: f64,

    /// Sample period of the smoothing filter.
    ///
    /// Units: seconds
    pub sample_time_s: f64,

    // ---- SATURATION ----

    /// Half width of the symmetric band the steering demand is clamped to.
    pub output_limit: f64,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Selectable PID controller forms.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PidForm {
    /// Per-step increments accumulated into the output.
    Incremental,

    /// Full PID sum each step with an accumulated error term.
    Positional,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for Params {
    fn default() -> Self {
        Self {
            form: PidForm::Positional,
            k_p: 0.6,
            k_i: 0.0,
            k_d: 1.0,
            inertia_time_s: 0.4,
            sample_time_s: 0.1,
            output_limit: 60.0,
        }
    }
}
