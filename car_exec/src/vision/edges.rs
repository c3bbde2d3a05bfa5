//! Edge extraction over binary frames
//!
//! A 3x3 Sobel kernel pair is convolved over the frame with border clamping,
//! and the gradient magnitude is thresholded into a binary edge mask. This is
//! the edge primitive used by the edge-based lane estimator.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use ndarray::Array2;

// Internal
use super::BinaryFrame;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

type Kernel3 = [[i32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Gradient magnitude above which a pixel counts as an edge. Binary input is
/// sampled at 0/255, so any track/background transition clears this easily.
const EDGE_MAG_THRESHOLD: f64 = 255.0;

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Extract a binary edge mask from a binary frame.
///
/// The returned array has the same shape as the frame, with `1` marking edge
/// pixels. An empty frame yields an empty mask.
pub fn sobel_edge_mask(frame: &BinaryFrame) -> Array2<u8> {
    let height = frame.height() as usize;
    let width = frame.width() as usize;

    let mut mask = Array2::<u8>::zeros((height, width));

    if frame.is_degenerate() {
        return mask;
    }

    // Sample a pixel at 0/255 with the coordinates clamped into the frame
    let sample = |y: isize, x: isize| -> i32 {
        let y = y.clamp(0, (height - 1) as isize) as usize;
        let x = x.clamp(0, (width - 1) as isize) as usize;
        (frame.data()[[y, x]] as i32) * 255
    };

    for y in 0..height {
        for x in 0..width {
            let mut grad_x = 0i32;
            let mut grad_y = 0i32;

            for ky in 0..3 {
                for kx in 0..3 {
                    let value = sample(
                        y as isize + ky as isize - 1,
                        x as isize + kx as isize - 1
                    );
                    grad_x += SOBEL_KERNEL_X[ky][kx] * value;
                    grad_y += SOBEL_KERNEL_Y[ky][kx] * value;
                }
            }

            let mag = ((grad_x * grad_x + grad_y * grad_y) as f64).sqrt();

            if mag > EDGE_MAG_THRESHOLD {
                mask[[y, x]] = 1;
            }
        }
    }

    mask
}

#[cfg(test)]
mod test {
    use super::*;

    /// Build a frame with a vertical track band over the given columns.
    fn band_frame(width: usize, height: usize, x0: usize, x1: usize) -> BinaryFrame {
        BinaryFrame::new(Array2::from_shape_fn((height, width), |(_, x)| {
            if x >= x0 && x < x1 { 1 } else { 0 }
        }))
    }

    #[test]
    fn test_band_edges() {
        let frame = band_frame(20, 10, 8, 12);
        let mask = sobel_edge_mask(&frame);

        // Edges at the band boundaries
        assert_eq!(mask[[5, 8]], 1);
        assert_eq!(mask[[5, 11]], 1);

        // No edges inside the band or deep in the background
        assert_eq!(mask[[5, 10]], 0);
        assert_eq!(mask[[5, 2]], 0);
    }

    #[test]
    fn test_uniform_frame_has_no_edges() {
        let frame = BinaryFrame::new(Array2::ones((10, 20)));
        let mask = sobel_edge_mask(&frame);

        assert_eq!(mask.iter().filter(|&&p| p != 0).count(), 0);
    }

    #[test]
    fn test_empty_frame() {
        let mask = sobel_edge_mask(&BinaryFrame::default());
        assert_eq!(mask.len(), 0);
    }
}
