//! # Lane estimation module
//!
//! LaneEst reduces a binary frame to an estimate of where the track marking
//! sits laterally in the image. Two strategies are provided, selectable
//! through the parameter file:
//!
//! - `column_sum`: counts track pixels per image column and takes the span of
//!   columns with enough of them. This is the strategy the car drives with.
//! - `edge_based`: extracts an edge mask, finds the strongest edge column in
//!   each half of the image, and centres between the two peaks.
//!
//! Estimation never fails: a frame with no usable signal (including an empty
//! or degenerate frame) produces an estimate with `detected` cleared, which
//! downstream modules treat as a loss of track.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod calc_column_sum;
mod calc_edge_based;
mod estimate;
mod params;
mod state;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
pub use estimate::*;
pub use params::*;
pub use state::*;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Possible errors that can occur during LaneEst operation.
///
/// There are currently none: estimation degrades to `detected = false` rather
/// than erroring. The enum exists so the processing signature matches the
/// other cyclic modules.
#[derive(Debug, thiserror::Error)]
pub enum LaneEstError {}
