//! Parameters structure for the car executable

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::Deserialize;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for the car executable.
#[derive(Debug, Deserialize, Clone)]
pub struct CarExecParams {

    // ---- CAMERA ----

    /// Width of the frames requested from the camera.
    ///
    /// Units: pixels
    pub frame_width: u32,

    /// Height of the frames requested from the camera.
    ///
    /// Units: pixels
    pub frame_height: u32,

    // ---- PREPROCESSING ----

    /// Greyscale level below which a blurred pixel counts as track.
    pub binarize_threshold: u8,

    /// First row of the region of interest (inclusive).
    ///
    /// Units: pixels
    pub roi_y0_px: u32,

    /// Last row of the region of interest (exclusive).
    ///
    /// Units: pixels
    pub roi_y1_px: u32,

    /// First column of the region of interest (inclusive).
    ///
    /// Units: pixels
    pub roi_x0_px: u32,

    /// Last column of the region of interest (exclusive).
    ///
    /// Units: pixels
    pub roi_x1_px: u32,

    // ---- MOTOR BUS ----

    /// Index of the I2C bus the motor board is attached to.
    pub i2c_bus: u8,

    /// I2C address of the motor board.
    pub i2c_device_addr: u8,
}
