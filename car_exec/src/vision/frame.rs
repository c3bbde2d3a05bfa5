//! Binary frame data structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use ndarray::Array2;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A binarised image.
///
/// The data is stored row-major (`[row, column]`), with `1` marking a track
/// (foreground) pixel and `0` marking background. A frame is built once per
/// cycle by the vision functions and is not modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryFrame {
    data: Array2<u8>
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl BinaryFrame {
    /// Create a new frame from raw pixel data. Any non-zero value is treated
    /// as a track pixel.
    pub fn new(data: Array2<u8>) -> Self {
        Self { data }
    }

    /// Width of the frame in pixels.
    pub fn width(&self) -> u32 {
        self.data.ncols() as u32
    }

    /// Height of the frame in pixels.
    pub fn height(&self) -> u32 {
        self.data.nrows() as u32
    }

    /// The underlying pixel data.
    pub fn data(&self) -> &Array2<u8> {
        &self.data
    }

    /// True if the frame has no pixels in one or both dimensions.
    pub fn is_degenerate(&self) -> bool {
        self.data.nrows() == 0 || self.data.ncols() == 0
    }
}

impl Default for BinaryFrame {
    fn default() -> Self {
        Self {
            data: Array2::zeros((0, 0))
        }
    }
}
