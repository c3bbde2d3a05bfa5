//! End-to-end test of the control pipeline over simulated camera frames.
//!
//! Drives the full estimate -> steer -> map chain from frames the simulated
//! camera produces, the same way the executable's main loop does, and checks
//! the car keeps driving while the simulated track stays in view.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use car_lib::{
    cam::{CamConfig, Camera, PixelFormat, SimCamera},
    data_store::LossOfTrackHistory,
    lane_est::{self, LaneEst},
    loco_ctrl::{self, DriveCommand, LocoCtrl},
    steer_ctrl::{self, SteerCtrl},
    vision,
};
use util::module::State;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

const FRAME_WIDTH: u32 = 320;
const FRAME_HEIGHT: u32 = 240;
const BINARIZE_THRESHOLD: u8 = 60;
const ROI_HEIGHT: u32 = 96;
const NUM_CYCLES: usize = 50;

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[test]
fn sim_track_keeps_the_car_driving() {
    let mut camera = SimCamera::new();
    camera
        .configure(&CamConfig {
            width: FRAME_WIDTH,
            height: FRAME_HEIGHT,
            format: PixelFormat::Luma8,
        })
        .unwrap();
    camera.start().unwrap();

    let mut lane_est = LaneEst::from_params(lane_est::Params::default());
    let mut steer_ctrl = SteerCtrl::from_params(steer_ctrl::Params::default());
    let mut loco_ctrl = LocoCtrl::from_params(loco_ctrl::Params::default());
    let mut loss_history = LossOfTrackHistory::default();

    let mut last_offset_px = 0.0;
    let mut wheel_cycles = 0;

    for _ in 0..NUM_CYCLES {
        let frame = camera.capture_frame().unwrap();

        let binary = vision::binarize(&frame.image, BINARIZE_THRESHOLD);
        let roi = vision::region_of_interest(&binary, 0, ROI_HEIGHT, 0, FRAME_WIDTH);

        let (estimate, _) = lane_est.proc(&roi).unwrap();

        // The simulated track is always in view
        assert!(estimate.detected);

        let ref_centre_px = (roi.width().saturating_sub(1) / 2) as f64;
        let offset_px = match estimate.center_x {
            Some(cx) => ref_centre_px - cx as f64,
            None => last_offset_px,
        };
        last_offset_px = offset_px;

        let (steer_out, _) = steer_ctrl
            .proc(&steer_ctrl::InputData { offset_px })
            .unwrap();

        let (cmd, _) = loco_ctrl
            .proc(&loco_ctrl::InputData {
                offset_px,
                steer_dem: steer_out.steer_dem,
                lane_detected: estimate.detected,
                left_miss_count: loss_history.left_miss_count,
                right_miss_count: loss_history.right_miss_count,
            })
            .unwrap();

        loss_history.update(&estimate);

        match cmd {
            DriveCommand::Wheels(dems) => {
                wheel_cycles += 1;

                // Wheel speeds are always inside the configured bound
                assert!(dems.left_speed <= 70);
                assert!(dems.right_speed <= 70);
            }
            DriveCommand::Stop => panic!("car stopped with the track in view"),
        }
    }

    assert_eq!(wheel_cycles, NUM_CYCLES);

    // The track never went missing
    assert_eq!(loss_history.left_miss_count, 0);
    assert_eq!(loss_history.right_miss_count, 0);
}

#[test]
fn all_background_frames_stop_the_car() {
    let mut lane_est = LaneEst::from_params(lane_est::Params::default());
    let mut loco_ctrl = LocoCtrl::from_params(loco_ctrl::Params::default());
    let loss_history = LossOfTrackHistory::default();

    // A frame with no track at all
    let binary = vision::BinaryFrame::default();
    let roi = vision::region_of_interest(&binary, 0, ROI_HEIGHT, 0, FRAME_WIDTH);

    let (estimate, _) = lane_est.proc(&roi).unwrap();
    assert!(!estimate.detected);

    let (cmd, _) = loco_ctrl
        .proc(&loco_ctrl::InputData {
            offset_px: 0.0,
            steer_dem: 0.0,
            lane_detected: estimate.detected,
            left_miss_count: loss_history.left_miss_count,
            right_miss_count: loss_history.right_miss_count,
        })
        .unwrap();

    assert_eq!(cmd, DriveCommand::Stop);
}
