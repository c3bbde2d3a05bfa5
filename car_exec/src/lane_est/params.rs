//! Parameters structure for LaneEst

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::Deserialize;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for lane estimation.
#[derive(Debug, Deserialize, Clone)]
pub struct Params {

    /// The estimation strategy to run.
    pub method: EstMethod,

    /// Number of track (or edge) pixels a column must exceed to count as
    /// part of the lane.
    pub min_track_pixels: u32,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Selectable lane estimation strategies.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EstMethod {
    /// Per-column track pixel counting.
    ColumnSum,

    /// Edge extraction with per-half peak columns.
    EdgeBased,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for Params {
    fn default() -> Self {
        Self {
            method: EstMethod::ColumnSum,
            min_track_pixels: 6,
        }
    }
}
