//! # Line follower car library
//!
//! This library provides the modules used by the car executable:
//!
//! - `vision`: image preprocessing (binarisation, region of interest, edge
//!   extraction).
//! - `lane_est`: lane centre estimation from a binary frame.
//! - `steer_ctrl`: PID steering control with inertial smoothing.
//! - `loco_ctrl`: mapping of steering demands onto wheel demands.
//! - `motor_driver`: the motor bus and its drivers.
//! - `cam`: the camera equipment interface.
//! - `data_store`: the executable's global data store.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

pub mod cam;
pub mod data_store;
pub mod lane_est;
pub mod loco_ctrl;
pub mod motor_driver;
pub mod params;
pub mod steer_ctrl;
pub mod vision;
