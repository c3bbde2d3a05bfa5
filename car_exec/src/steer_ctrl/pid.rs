//! PID controllers and the inertial smoothing filter
//!
//! Both controller forms regulate a measured signal towards a target by
//! stepping once per control cycle. They hold their error memory across
//! cycles and are reset only by constructing a new controller.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::Serialize;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Upper bound on the positional form's accumulated error.
pub const ERROR_ACC_MAX: f64 = 2000.0;

/// Lower bound on the positional form's accumulated error. The bounds are
/// deliberately asymmetric: negative windup is cut off sooner.
pub const ERROR_ACC_MIN: f64 = -2500.0;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// An incremental form PID controller.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IncrementalPid {
    /// Proportional gain
    k_p: f64,

    /// Integral gain
    k_i: f64,

    /// Derivative gain
    k_d: f64,

    /// Accumulated controller output
    output: f64,

    /// Previous error
    prev_error: f64,

    /// Error before the previous error
    prev_prev_error: f64,
}

/// A positional form PID controller.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PositionalPid {
    /// Proportional gain
    k_p: f64,

    /// Integral gain
    k_i: f64,

    /// Derivative gain
    k_d: f64,

    /// Accumulated error, clamped to [`ERROR_ACC_MIN`, `ERROR_ACC_MAX`]
    error_acc: f64,

    /// Previous error
    prev_error: f64,

    /// True if the last step hit an accumulator bound
    acc_limited: bool,
}

/// A first order low-pass filter blending the previous filtered output with
/// the raw controller output.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct InertialFilter {
    prev_output: f64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl IncrementalPid {

    /// Create a new controller with the given gains.
    pub fn new(k_p: f64, k_i: f64, k_d: f64) -> Self {
        Self {
            k_p, k_i, k_d,
            ..Default::default()
        }
    }

    /// Step the controller once for the given target and measurement.
    pub fn step(&mut self, target: f64, measurement: f64) -> f64 {
        let error = target - measurement;

        let increment = self.k_p * (error - self.prev_error)
            + self.k_i * error
            + self.k_d * (error - 2.0 * self.prev_error + self.prev_prev_error);

        self.output += increment;

        self.prev_prev_error = self.prev_error;
        self.prev_error = error;

        self.output
    }
}

impl PositionalPid {

    /// Create a new controller with the given gains.
    pub fn new(k_p: f64, k_i: f64, k_d: f64) -> Self {
        Self {
            k_p, k_i, k_d,
            ..Default::default()
        }
    }

    /// Step the controller once for the given target and measurement.
    ///
    /// The error accumulated for the integral term is clamped after the
    /// output is computed, so the first step after a large error still sees
    /// the accumulator the previous step left behind.
    pub fn step(&mut self, target: f64, measurement: f64) -> f64 {
        let error = target - measurement;

        let output = self.k_p * error
            + self.k_i * self.error_acc
            + self.k_d * (error - self.prev_error);

        self.error_acc += error;
        self.acc_limited = false;

        if self.error_acc > ERROR_ACC_MAX {
            self.error_acc = ERROR_ACC_MAX;
            self.acc_limited = true;
        }
        if self.error_acc < ERROR_ACC_MIN {
            self.error_acc = ERROR_ACC_MIN;
            self.acc_limited = true;
        }

        self.prev_error = error;

        output
    }

    /// The current accumulated error.
    pub fn accumulator(&self) -> f64 {
        self.error_acc
    }

    /// True if the last step hit an accumulator bound.
    pub fn accumulator_limited(&self) -> bool {
        self.acc_limited
    }
}

impl InertialFilter {

    /// Blend the raw output with the previous filtered output.
    pub fn apply(&mut self, raw: f64, inertia_time_s: f64, sample_time_s: f64) -> f64 {
        let output = (inertia_time_s * self.prev_output + sample_time_s * raw)
            / (sample_time_s + inertia_time_s);

        self.prev_output = output;

        output
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_positional_first_step() {
        let mut pid = PositionalPid::new(0.6, 0.5, 1.0);

        // First step: no accumulator, no previous error
        let out = pid.step(0.0, 10.0);
        assert!((out - (0.6 * -10.0 + 1.0 * -10.0)).abs() < 1e-9);
        assert_eq!(pid.accumulator(), -10.0);
    }

    #[test]
    fn test_positional_accumulator_bounds() {
        let mut pid = PositionalPid::new(0.6, 0.0, 1.0);

        for _ in 0..10 {
            pid.step(0.0, -1000.0);
        }
        assert_eq!(pid.accumulator(), ERROR_ACC_MAX);
        assert!(pid.accumulator_limited());

        let mut pid = PositionalPid::new(0.6, 0.0, 1.0);

        for _ in 0..10 {
            pid.step(0.0, 1000.0);
        }
        assert_eq!(pid.accumulator(), ERROR_ACC_MIN);
        assert!(pid.accumulator_limited());
    }

    #[test]
    fn test_positional_acc_clamped_after_output() {
        let mut pid = PositionalPid::new(0.0, 1.0, 0.0);

        // The huge first error must not feed into the first output's
        // integral term
        let out = pid.step(0.0, 100_000.0);
        assert_eq!(out, 0.0);

        // But it must feed into the second one, already clamped
        let out = pid.step(0.0, 0.0);
        assert_eq!(out, ERROR_ACC_MIN);
    }

    #[test]
    fn test_incremental_steps() {
        let mut pid = IncrementalPid::new(2.0, 0.5, 1.0);

        // e = -10: kp*(e - 0) + ki*e + kd*(e - 0 + 0)
        let out = pid.step(0.0, 10.0);
        assert!((out - (2.0 * -10.0 + 0.5 * -10.0 + 1.0 * -10.0)).abs() < 1e-9);

        // e = -4, prev = -10, prev_prev = 0:
        // increment = kp*6 + ki*(-4) + kd*(-4 + 20 + 0)
        let expected = out + 2.0 * 6.0 + 0.5 * -4.0 + 1.0 * 16.0;
        let out = pid.step(0.0, 4.0);
        assert!((out - expected).abs() < 1e-9);
    }

    #[test]
    fn test_filter_lags_towards_raw() {
        let mut filter = InertialFilter::default();

        let first = filter.apply(10.0, 0.4, 0.1);
        assert!((first - 2.0).abs() < 1e-9);

        // Repeated application converges on the raw value from below
        let mut last = first;
        for _ in 0..100 {
            last = filter.apply(10.0, 0.4, 0.1);
        }
        assert!(last > first && last < 10.0);
        assert!((last - 10.0).abs() < 1e-6);
    }
}
