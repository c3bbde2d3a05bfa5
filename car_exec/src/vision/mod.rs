//! # Vision module
//!
//! Image preprocessing for the lane estimator. All functions here are pure:
//! they own no state and never modify their inputs. The camera hands over a
//! greyscale frame, `binarize` reduces it to a [`BinaryFrame`] of track and
//! background pixels, and `region_of_interest` crops the frame down to the
//! rows the estimator should look at.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod edges;
mod frame;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use image::{imageops, DynamicImage};
use ndarray::{s, Array2};

// Internal
pub use edges::*;
pub use frame::*;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Sigma of the gaussian blur applied before thresholding.
const BINARIZE_BLUR_SIGMA: f32 = 1.0;

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Reduce a raw frame to a binary frame of track/background pixels.
///
/// The frame is converted to greyscale, blurred, and thresholded. The track
/// marking is dark on a light background, so pixels darker than `threshold`
/// become foreground.
pub fn binarize(frame: &DynamicImage, threshold: u8) -> BinaryFrame {
    let grey = frame.to_luma8();
    let blurred = imageops::blur(&grey, BINARIZE_BLUR_SIGMA);

    let (width, height) = blurred.dimensions();

    let mut data = Array2::<u8>::zeros((height as usize, width as usize));

    for (x, y, pixel) in blurred.enumerate_pixels() {
        if pixel[0] < threshold {
            data[[y as usize, x as usize]] = 1;
        }
    }

    BinaryFrame::new(data)
}

/// Crop a binary frame down to the given region of interest.
///
/// The bounds are clamped to the frame dimensions, so an out-of-range request
/// yields a smaller (possibly empty) frame rather than a panic.
pub fn region_of_interest(
    frame: &BinaryFrame,
    y0: u32,
    y1: u32,
    x0: u32,
    x1: u32
) -> BinaryFrame {
    let height = frame.height();
    let width = frame.width();

    let y0 = y0.min(height) as usize;
    let y1 = y1.min(height).max(y0 as u32) as usize;
    let x0 = x0.min(width) as usize;
    let x1 = x1.min(width).max(x0 as u32) as usize;

    BinaryFrame::new(frame.data().slice(s![y0..y1, x0..x1]).to_owned())
}
