//! Parameters structure for LocoCtrl

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::Deserialize;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for locomotion control.
#[derive(Debug, Deserialize, Clone)]
pub struct Params {

    // ---- OFFSET THRESHOLDS ----

    /// Offset magnitude below which the car drives straight.
    ///
    /// Units: pixels
    pub dead_zone_px: f64,

    /// Offset magnitude at and above which the car pivots rather than
    /// steering proportionally.
    ///
    /// Units: pixels
    pub saturation_offset_px: f64,

    /// Offset magnitude above which the signal is treated as lost entirely
    /// and the car stops.
    ///
    /// Units: pixels
    pub max_offset_px: f64,

    // ---- SPEEDS ----

    /// Speed of both wheels when driving straight, and the base speed a
    /// proportional turn splits around.
    pub cruise_speed: f64,

    /// Wheel speed used for pivot spins.
    pub pivot_speed: f64,

    /// Upper bound on any single wheel speed.
    pub max_speed: f64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for Params {
    fn default() -> Self {
        Self {
            dead_zone_px: 3.0,
            saturation_offset_px: 120.0,
            max_offset_px: 500.0,
            cruise_speed: 40.0,
            pivot_speed: 70.0,
            max_speed: 70.0,
        }
    }
}
