//! Lane estimate data structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::Serialize;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// The result of a lane estimation pass over one binary frame.
///
/// When `detected` is true all of `center_x`, `left_bound` and `right_bound`
/// are present and `left_bound <= center_x <= right_bound`.
///
/// When `detected` is false the per-side bounds may still be individually
/// present: the edge-based strategy reports the strongest edge column it saw
/// in each half of the image even when neither half had enough signal to
/// count as a detection. This is how a one-sided loss of track shows up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LaneEstimate {
    /// Column of the estimated lane centre.
    pub center_x: Option<u32>,

    /// Row the estimate refers to, half way down the frame.
    pub center_y: u32,

    /// Leftmost column with usable track signal.
    pub left_bound: Option<u32>,

    /// Rightmost column with usable track signal.
    pub right_bound: Option<u32>,

    /// True if the frame contained enough signal to locate the lane.
    pub detected: bool,
}
