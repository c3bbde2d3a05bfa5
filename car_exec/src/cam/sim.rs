//! Simulated camera producing procedural track frames

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

// External
use chrono::Utc;
use image::{DynamicImage, GrayImage, Luma};
use noise::{NoiseFn, Perlin};

// Internal
use super::{CamConfig, CamError, CamFrame, Camera, PixelFormat};

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// Greyscale level of the background surface.
const BACKGROUND_LEVEL: u8 = 200;

/// Greyscale level of the track marking.
const TRACK_LEVEL: u8 = 30;

/// Half width of the track marking as a fraction of the frame width.
const TRACK_HALF_WIDTH_FRAC: f64 = 0.0625;

/// Peak lateral drift of the track as a fraction of the frame width.
const DRIFT_AMPLITUDE_FRAC: f64 = 0.125;

/// Noise-space step between consecutive frames. Sampling off the integer
/// lattice, where Perlin noise is always zero.
const DRIFT_STEP: f64 = 0.05;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// A camera which synthesizes frames of a dark track marking wandering over
/// a light background. The track centre drifts smoothly from frame to frame
/// along a Perlin noise path, so consecutive frames look like the car is
/// actually moving down a winding line.
pub struct SimCamera {
    config: Option<CamConfig>,

    started: bool,

    frame_count: u64,

    noise: Perlin,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl SimCamera {
    /// Create a new simulated camera. It must still be configured and
    /// started like the real one.
    pub fn new() -> Self {
        Self {
            config: None,
            started: false,
            frame_count: 0,
            noise: Perlin::new(),
        }
    }
}

impl Default for SimCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera for SimCamera {
    fn configure(&mut self, config: &CamConfig) -> Result<(), CamError> {
        self.config = Some(*config);

        Ok(())
    }

    fn start(&mut self) -> Result<(), CamError> {
        if self.config.is_none() {
            return Err(CamError::NotConfigured);
        }

        self.started = true;

        Ok(())
    }

    fn capture_frame(&mut self) -> Result<CamFrame, CamError> {
        if !self.started {
            return Err(CamError::NotStarted);
        }

        let config = match self.config {
            Some(c) => c,
            None => return Err(CamError::NotConfigured),
        };

        let width = config.width;
        let height = config.height;

        // Track centre for this frame
        let drift = self
            .noise
            .get([self.frame_count as f64 * DRIFT_STEP, 0.5]);
        let centre = width as f64 / 2.0
            + drift * width as f64 * DRIFT_AMPLITUDE_FRAC;

        let half_width = width as f64 * TRACK_HALF_WIDTH_FRAC;

        let grey = GrayImage::from_fn(width, height, |x, _| {
            if (x as f64 - centre).abs() <= half_width {
                Luma([TRACK_LEVEL])
            }
            else {
                Luma([BACKGROUND_LEVEL])
            }
        });

        let image = match config.format {
            PixelFormat::Luma8 => DynamicImage::ImageLuma8(grey),
            PixelFormat::Rgb8 => {
                DynamicImage::ImageRgb8(DynamicImage::ImageLuma8(grey).to_rgb8())
            }
        };

        self.frame_count += 1;

        Ok(CamFrame {
            timestamp: Utc::now(),
            image,
        })
    }

    fn stop(&mut self) -> Result<(), CamError> {
        self.started = false;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn config() -> CamConfig {
        CamConfig {
            width: 320,
            height: 240,
            format: PixelFormat::Luma8,
        }
    }

    #[test]
    fn test_capture_requires_start() {
        let mut cam = SimCamera::new();

        assert!(cam.capture_frame().is_err());

        cam.configure(&config()).unwrap();
        cam.start().unwrap();

        assert!(cam.capture_frame().is_ok());

        cam.stop().unwrap();

        assert!(cam.capture_frame().is_err());
    }

    #[test]
    fn test_start_requires_configure() {
        let mut cam = SimCamera::new();

        assert!(cam.start().is_err());
    }

    #[test]
    fn test_frame_dimensions_and_track() {
        let mut cam = SimCamera::new();
        cam.configure(&config()).unwrap();
        cam.start().unwrap();

        let frame = cam.capture_frame().unwrap();
        let grey = frame.image.to_luma8();

        assert_eq!(grey.dimensions(), (320, 240));

        // Both levels are present: a track on a background
        let dark = grey.pixels().filter(|p| p[0] == TRACK_LEVEL).count();
        let light = grey.pixels().filter(|p| p[0] == BACKGROUND_LEVEL).count();

        assert!(dark > 0);
        assert!(light > dark);
    }
}
