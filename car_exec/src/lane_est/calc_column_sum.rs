//! Column-sum lane estimation

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use ndarray::Axis;

// Internal
use super::{LaneEst, LaneEstimate};
use crate::vision::BinaryFrame;

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl LaneEst {

    /// Perform the column-sum estimate calculations.
    ///
    /// Each column's track pixels are counted over the full frame height. The
    /// lane spans the first to the last column whose count clears the
    /// threshold, and the centre is the floor midpoint of that span.
    pub(crate) fn calc_column_sum(&mut self, frame: &BinaryFrame) -> LaneEstimate {
        let mut estimate = LaneEstimate::default();

        if frame.is_degenerate() {
            self.report.frame_degenerate = true;
            return estimate;
        }

        // Track pixel count per column
        let col_counts = frame
            .data()
            .fold_axis(Axis(0), 0u32, |acc, &pixel| acc + (pixel != 0) as u32);

        let mut left_bound: Option<u32> = None;
        let mut right_bound: Option<u32> = None;

        for (x, &count) in col_counts.iter().enumerate() {
            if count > self.params.min_track_pixels {
                self.report.valid_columns += 1;

                if left_bound.is_none() {
                    left_bound = Some(x as u32);
                }
                right_bound = Some(x as u32);
            }
        }

        let (left, right) = match (left_bound, right_bound) {
            (Some(l), Some(r)) => (l, r),
            _ => return estimate,
        };

        estimate.left_bound = Some(left);
        estimate.right_bound = Some(right);
        estimate.center_x = Some((left + right) / 2);
        estimate.center_y = frame.height() / 2;
        estimate.detected = true;

        estimate
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::lane_est::Params;
    use ndarray::Array2;

    /// Frame with full-height track bands over the given column ranges.
    fn frame_with_bands(
        width: usize,
        height: usize,
        bands: &[(usize, usize)]
    ) -> BinaryFrame {
        BinaryFrame::new(Array2::from_shape_fn((height, width), |(_, x)| {
            bands.iter().any(|&(x0, x1)| x >= x0 && x < x1) as u8
        }))
    }

    #[test]
    fn test_all_background() {
        let mut est = LaneEst::from_params(Params::default());
        let frame = BinaryFrame::new(Array2::zeros((240, 320)));

        let result = est.calc_column_sum(&frame);

        assert!(!result.detected);
        assert_eq!(result.center_x, None);
        assert_eq!(result.left_bound, None);
        assert_eq!(result.right_bound, None);
    }

    #[test]
    fn test_single_band() {
        let mut est = LaneEst::from_params(Params::default());
        let frame = frame_with_bands(320, 240, &[(100, 141)]);

        let result = est.calc_column_sum(&frame);

        assert!(result.detected);
        assert_eq!(result.left_bound, Some(100));
        assert_eq!(result.right_bound, Some(140));
        assert_eq!(result.center_x, Some(120));
        assert_eq!(result.center_y, 120);
    }

    #[test]
    fn test_two_bands_span() {
        let mut est = LaneEst::from_params(Params::default());
        let frame = frame_with_bands(320, 240, &[(40, 60), (200, 220)]);

        let result = est.calc_column_sum(&frame);

        // The estimate spans both bands
        assert!(result.detected);
        assert_eq!(result.left_bound, Some(40));
        assert_eq!(result.right_bound, Some(219));
        assert_eq!(result.center_x, Some((40 + 219) / 2));
    }

    #[test]
    fn test_spike_below_threshold_ignored() {
        let mut est = LaneEst::from_params(Params::default());

        // A single column with exactly the threshold count, which must not
        // clear the strictly-greater-than check
        let frame = BinaryFrame::new(Array2::from_shape_fn((240, 320), |(y, x)| {
            (x == 150 && y < 6) as u8
        }));

        let result = est.calc_column_sum(&frame);

        assert!(!result.detected);
    }

    #[test]
    fn test_degenerate_frame() {
        let mut est = LaneEst::from_params(Params::default());

        let result = est.calc_column_sum(&BinaryFrame::default());

        assert!(!result.detected);
    }
}
