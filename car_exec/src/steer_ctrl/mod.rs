//! # Steering control module
//!
//! SteerCtrl turns the signed lateral offset of the lane (in pixels, positive
//! when the lane sits left of the frame centre) into a bounded steering
//! demand for the wheel mapper. The offset is regulated towards zero by a PID
//! controller, the raw controller output is smoothed by a first order
//! inertial filter modelling the vehicle's lag, and the smoothed output is
//! saturated to a symmetric band.
//!
//! Two controller forms are available through the parameter file. The
//! positional form computes the full PID sum each step and carries an
//! accumulated error with an anti-windup clamp; the incremental form
//! accumulates per-step increments instead. Both share the filter and the
//! output saturation.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod params;
mod pid;
mod state;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
pub use params::*;
pub use pid::*;
pub use state::*;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Possible errors that can occur during SteerCtrl operation.
///
/// There are currently none: the controller is pure arithmetic over finite
/// inputs. The enum exists so the processing signature matches the other
/// cyclic modules.
#[derive(Debug, thiserror::Error)]
pub enum SteerCtrlError {}
