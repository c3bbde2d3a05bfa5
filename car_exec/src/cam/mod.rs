//! # Camera equipment module
//!
//! The camera sits behind the [`Camera`] trait: it is configured and started
//! once, asked for one frame per control cycle, and stopped exactly once at
//! shutdown. A failed capture is the one fault the control loop treats as
//! fatal, since without frames the car cannot drive.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

#[cfg(feature = "sim")]
mod sim;

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

// External
use chrono::{DateTime, Utc};
use image::DynamicImage;

// Internal
#[cfg(feature = "sim")]
pub use sim::*;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Configuration applied to a camera before starting it.
#[derive(Debug, Clone, Copy)]
pub struct CamConfig {
    /// Width of the requested frames.
    ///
    /// Units: pixels
    pub width: u32,

    /// Height of the requested frames.
    ///
    /// Units: pixels
    pub height: u32,

    /// Pixel format of the requested frames.
    pub format: PixelFormat,
}

/// An individual frame from a camera
#[derive(Debug, Clone)]
pub struct CamFrame {
    /// UTC timestamp at which the frame was acquired
    pub timestamp: DateTime<Utc>,

    /// The image itself
    pub image: DynamicImage,
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

/// Pixel formats the camera can be asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// 8 bit greyscale
    Luma8,

    /// 8 bit per channel RGB
    Rgb8,
}

/// Errors which can occur in a [`Camera`].
#[derive(Debug, thiserror::Error)]
pub enum CamError {

    #[error("The camera has not been started")]
    NotStarted,

    #[error("The camera has not been configured")]
    NotConfigured,

    #[error("Could not acquire a frame from the camera")]
    CaptureFailed,
}

// ------------------------------------------------------------------------------------------------
// TRAITS
// ------------------------------------------------------------------------------------------------

/// A source of raw camera frames.
pub trait Camera {

    /// Apply the given configuration. Must be called before `start`.
    fn configure(&mut self, config: &CamConfig) -> Result<(), CamError>;

    /// Start the camera stream.
    fn start(&mut self) -> Result<(), CamError>;

    /// Acquire a single frame. May block until a frame is available.
    fn capture_frame(&mut self) -> Result<CamFrame, CamError>;

    /// Stop the camera stream.
    fn stop(&mut self) -> Result<(), CamError>;
}
