//! Edge-based lane estimation

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use ndarray::Axis;

// Internal
use super::{LaneEst, LaneEstimate};
use crate::vision::{self, BinaryFrame};

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl LaneEst {

    /// Perform the edge-based estimate calculations.
    ///
    /// An edge mask is extracted from the frame and the strongest edge column
    /// is found in each half of the image. If both halves produced a peak the
    /// lane centre is the floor midpoint of the two peaks, otherwise it falls
    /// back to the midpoint of the valid column span.
    ///
    /// When no column clears the threshold the estimate is a miss, but any
    /// per-half peaks are still reported through the bounds so that a
    /// one-sided loss of track can be told apart from a total one.
    pub(crate) fn calc_edge_based(&mut self, frame: &BinaryFrame) -> LaneEstimate {
        let mut estimate = LaneEstimate::default();

        if frame.is_degenerate() {
            self.report.frame_degenerate = true;
            return estimate;
        }

        let edges = vision::sobel_edge_mask(frame);

        // Edge pixel count per column
        let col_counts = edges.fold_axis(Axis(0), 0u32, |acc, &pixel| {
            acc + (pixel != 0) as u32
        });

        let width = frame.width() as usize;
        let mid = width / 2;

        // Strongest edge column in each half, where one exists at all
        let mut left_peak: Option<(usize, u32)> = None;
        let mut right_peak: Option<(usize, u32)> = None;

        for (x, &count) in col_counts.iter().enumerate() {
            if count == 0 {
                continue;
            }

            let peak = if x < mid { &mut left_peak } else { &mut right_peak };

            match *peak {
                Some((_, max)) if max >= count => (),
                _ => *peak = Some((x, count)),
            }
        }

        // Columns with enough edge signal to count as part of the lane
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
            _ => {
                // Miss, but keep the per-half peaks as the side signal
                estimate.left_bound = left_peak.map(|(x, _)| x as u32);
                estimate.right_bound = right_peak.map(|(x, _)| x as u32);
                return estimate;
            }
        };

        let centre = match (left_peak, right_peak) {
            (Some((l, _)), Some((r, _))) => ((l + r) / 2) as u32,
            _ => (left + right) / 2,
        };

        estimate.left_bound = Some(left);
        estimate.right_bound = Some(right);
        // The peaks need not be valid columns themselves, so hold the centre
        // within the detected span
        estimate.center_x = Some(centre.clamp(left, right));
        estimate.center_y = frame.height() / 2;
        estimate.detected = true;

        estimate
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::lane_est::{EstMethod, Params};
    use ndarray::Array2;

    fn edge_params() -> Params {
        Params {
            method: EstMethod::EdgeBased,
            min_track_pixels: 6,
        }
    }

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
    fn test_two_lane_markings() {
        let mut est = LaneEst::from_params(edge_params());

        // Lane markings either side of the frame centre
        let frame = frame_with_bands(320, 100, &[(60, 80), (240, 260)]);

        let result = est.calc_edge_based(&frame);

        assert!(result.detected);

        let left = result.left_bound.unwrap();
        let right = result.right_bound.unwrap();
        let centre = result.center_x.unwrap();

        assert!(left >= 59 && left <= 61);
        assert!(right >= 258 && right <= 260);
        assert!(left <= centre && centre <= right);

        // The centre sits between the markings, not on either of them
        assert!(centre > 100 && centre < 220);
    }

    #[test]
    fn test_all_background() {
        let mut est = LaneEst::from_params(edge_params());
        let frame = BinaryFrame::new(Array2::zeros((100, 320)));

        let result = est.calc_edge_based(&frame);

        assert!(!result.detected);
        assert_eq!(result.left_bound, None);
        assert_eq!(result.right_bound, None);
    }

    #[test]
    fn test_one_sided_loss_keeps_peak() {
        let mut est = LaneEst::from_params(Params {
            method: EstMethod::EdgeBased,
            // Set the threshold above the frame height so nothing is valid
            min_track_pixels: 200,
        });

        let frame = frame_with_bands(320, 100, &[(60, 80)]);

        let result = est.calc_edge_based(&frame);

        assert!(!result.detected);
        assert!(result.left_bound.is_some());
        assert_eq!(result.right_bound, None);
        assert_eq!(result.center_x, None);
    }
}
