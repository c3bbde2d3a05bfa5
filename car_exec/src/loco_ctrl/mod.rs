//! # Locomotion control module
//!
//! LocoCtrl combines the lane offset, the steering demand and the recent
//! loss-of-track history into a single wheel command for the motor driver.
//! There are three qualitative drive modes:
//!
//! - Straight: the offset sits inside the dead zone, both wheels cruise.
//! - Proportional turn: the steering demand is split across the wheels,
//!   `cruise + demand` on the left and `cruise - demand` on the right. A
//!   split that would drive a wheel backwards becomes a sharp pivot instead.
//! - Hard turn / recovery: the offset has saturated, or the lane was not
//!   detected at all. The car pivots on the spot, with the spin direction
//!   biased away from the side that has been losing signal. With no usable
//!   signal at all (an offset beyond the sanity bound, or a loss of track
//!   with nothing to bias on) the car stops.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod calc_recovery;
mod calc_turn;
mod cmd;
mod params;
mod state;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
pub use cmd::*;
pub use params::*;
pub use state::*;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Possible errors that can occur during LocoCtrl operation.
#[derive(Debug, thiserror::Error)]
pub enum LocoCtrlError {
    #[error(
        "Received a non-finite demand input (offset: {offset_px}, steer: \
        {steer_dem})"
    )]
    NonFiniteInput {
        offset_px: f64,
        steer_dem: f64,
    },
}
