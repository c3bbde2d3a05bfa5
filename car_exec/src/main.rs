//! Main car-side executable entry point.
//!
//! # Architecture
//!
//! The general execution methodology consists of:
//!
//!     - Initialise all modules and equipment
//!     - Main loop:
//!         - Frame acquisition from the camera
//!         - Image preprocessing (binarisation and region of interest)
//!         - Lane estimation
//!         - Steering control processing
//!         - Locomotion control processing
//!         - Motor driver dispatch
//!         - Loss of track bookkeeping and cycle pacing
//!     - Cleanup: stop the motors and release the camera
//!
//! The loop is strictly synchronous: each cycle completes in full before the
//! next begins. Cancellation is cooperative, requested by typing `q` on
//! stdin and checked once per cycle. Whatever way the loop exits, the
//! cleanup path runs exactly once.

// ---------------------------------------------------------------------------
// USE MODULES FROM LIBRARY
// ---------------------------------------------------------------------------

#[cfg(feature = "sim")]
use car_lib::cam::SimCamera;
use car_lib::{
    cam::{CamConfig, CamError, Camera, PixelFormat},
    data_store::DataStore,
    loco_ctrl::{self, DriveCommand},
    motor_driver::{MotorBus, MotorDriver},
    params::CarExecParams,
    steer_ctrl, vision,
};
#[cfg(not(target_arch = "arm"))]
use car_lib::motor_driver::SimBus;
#[cfg(target_arch = "arm")]
use car_lib::motor_driver::I2cMotorBus;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use color_eyre::{eyre::WrapErr, Report};
use log::{debug, info, warn};
use std::io::BufRead;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

// Internal
use util::{
    logger::{logger_init, LevelFilter},
    module::State,
    session::Session,
};

// ---------------------------------------------------------------------------
// COMPILE TIME CHECKS
// ---------------------------------------------------------------------------

#[cfg(not(feature = "sim"))]
compile_error!("a camera backend is required: enable the `sim` feature");

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Target period of one cycle.
const CYCLE_PERIOD_S: f64 = 0.05;

/// Number of consecutive motor bus errors before the failure is escalated
/// from a warning to an error in the log.
const MAX_BUS_ERROR_LIMIT: u64 = 5;

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

/// Executable main function, entry point.
fn main() -> Result<(), Report> {

    // ---- EARLY INITIALISATION ----

    // Initialise session
    let session = Session::new(
        "car_exec",
        "sessions"
    ).wrap_err("Failed to create the session")?;

    // Initialise logger
    logger_init(LevelFilter::Trace, &session)
        .wrap_err("Failed to initialise logging")?;

    // Log information on this execution.
    info!("Line Follower Car Executable\n");
    info!("Session directory: {:?}\n", session.session_root);

    // ---- LOAD PARAMETERS ----

    let exec_params: CarExecParams = util::params::load(
        "car_exec.toml"
    ).wrap_err("Could not load exec params")?;

    info!("Exec parameters loaded");

    // ---- INITIALISE DATASTORE ----

    info!("Initialising modules...");

    let mut ds = DataStore::default();

    // ---- INITIALISE MODULES ----

    ds.lane_est.init("lane_est.toml", &session)
        .wrap_err("Failed to initialise LaneEst")?;
    info!("LaneEst init complete");

    ds.steer_ctrl.init("steer_ctrl.toml", &session)
        .wrap_err("Failed to initialise SteerCtrl")?;
    info!("SteerCtrl init complete");

    ds.loco_ctrl.init("loco_ctrl.toml", &session)
        .wrap_err("Failed to initialise LocoCtrl")?;
    info!("LocoCtrl init complete");

    info!("Module initialisation complete\n");

    // ---- INITIALISE EQUIPMENT ----

    info!("Initialising equipment");

    #[cfg(feature = "sim")]
    let mut camera = {
        let c = SimCamera::new();
        info!("SimCamera initialised");
        c
    };

    camera.configure(&CamConfig {
        width: exec_params.frame_width,
        height: exec_params.frame_height,
        format: PixelFormat::Luma8,
    }).wrap_err("Failed to configure the camera")?;

    camera.start().wrap_err("Failed to start the camera")?;
    info!("Camera started");

    #[cfg(target_arch = "arm")]
    let mut motor_driver = {
        let i2c = rppal::i2c::I2c::with_bus(exec_params.i2c_bus)
            .wrap_err("Failed to open the I2C bus")?;
        let d = MotorDriver::new(I2cMotorBus::new(i2c, exec_params.i2c_device_addr));
        info!("I2C motor driver initialised");
        d
    };

    #[cfg(not(target_arch = "arm"))]
    let mut motor_driver = {
        let d = MotorDriver::new(SimBus::new());
        info!("Simulated motor driver initialised");
        d
    };

    info!("Equipment initialisation complete");

    // ---- STOP WATCHER ----

    let stop_flag = Arc::new(AtomicBool::new(false));

    {
        let stop_flag = stop_flag.clone();
        thread::spawn(move || stdin_watcher(stop_flag));
    }

    // ---- MAIN LOOP ----

    info!("Begining main loop (type 'q' then enter to stop)\n");

    let mut loop_error: Option<Report> = None;

    loop {

        // Get cycle start time
        let cycle_start_instant = Instant::now();

        // Clear items that need wiping at the start of the cycle
        ds.cycle_start();

        // ---- CANCELLATION ----

        if stop_flag.load(Ordering::Relaxed) {
            info!("Stop requested, leaving main loop");
            break;
        }

        // ---- FRAME ACQUISITION ----

        // Without frames the car is blind, so a capture failure ends the
        // loop and drops through to the cleanup path.
        let frame = match camera.capture_frame() {
            Ok(f) => f,
            Err(e) => {
                loop_error = Some(
                    Report::new(e).wrap_err("Camera frame acquisition failed")
                );
                break;
            }
        };

        // ---- IMAGE PREPROCESSING ----

        let binary = vision::binarize(&frame.image, exec_params.binarize_threshold);
        let roi = vision::region_of_interest(
            &binary,
            exec_params.roi_y0_px,
            exec_params.roi_y1_px,
            exec_params.roi_x0_px,
            exec_params.roi_x1_px
        );

        // ---- LANE ESTIMATION ----

        match ds.lane_est.proc(&roi) {
            Ok((o, r)) => {
                ds.lane_est_output = o;
                ds.lane_est_status_rpt = r;
            },
            Err(e) => warn!("Error during LaneEst processing: {}", e)
        };

        // Offset of the lane from the frame centre. On a miss the lane is
        // assumed to still be where it was last seen.
        let ref_centre_px = (roi.width().saturating_sub(1) / 2) as f64;
        let offset_px = match ds.lane_est_output.center_x {
            Some(cx) => ref_centre_px - cx as f64,
            None => ds.last_offset_px,
        };
        ds.last_offset_px = offset_px;

        // ---- CONTROL ALGORITHM PROCESSING ----

        // SteerCtrl processing
        ds.steer_ctrl_input = steer_ctrl::InputData { offset_px };

        match ds.steer_ctrl.proc(&ds.steer_ctrl_input) {
            Ok((o, r)) => {
                ds.steer_ctrl_output = o;
                ds.steer_ctrl_status_rpt = r;
            },
            Err(e) => warn!("Error during SteerCtrl processing: {}", e)
        };

        // LocoCtrl processing
        ds.loco_ctrl_input = loco_ctrl::InputData {
            offset_px,
            steer_dem: ds.steer_ctrl_output.steer_dem,
            lane_detected: ds.lane_est_output.detected,
            left_miss_count: ds.loss_history.left_miss_count,
            right_miss_count: ds.loss_history.right_miss_count,
        };

        match ds.loco_ctrl.proc(&ds.loco_ctrl_input) {
            Ok((o, r)) => {
                ds.loco_ctrl_output = o;
                ds.loco_ctrl_status_rpt = r;
            },
            Err(e) => {
                // LocoCtrl errors mean the demands were unusable. The output
                // was reset to Stop at the start of the cycle, so the car
                // stops rather than repeating a stale command.
                warn!("Error during LocoCtrl processing: {}", e)
            }
        };

        // ---- MOTOR DISPATCH ----

        // Bus faults are transient: the command is dropped and the loop
        // carries on.
        match motor_driver.dispatch(&ds.loco_ctrl_output) {
            Ok(()) => ds.num_consec_bus_errors = 0,
            Err(e) => {
                ds.num_consec_bus_errors += 1;

                if ds.num_consec_bus_errors > MAX_BUS_ERROR_LIMIT {
                    log::error!(
                        "Motor bus has now failed {} consecutive times: {}",
                        ds.num_consec_bus_errors,
                        e
                    );
                }
                else {
                    warn!("Motor bus write failed, command dropped: {}", e);
                }
            }
        }

        // ---- LOSS OF TRACK BOOKKEEPING ----

        ds.loss_history.update(&ds.lane_est_output);

        debug!(
            "Cycle {}: offset {:.1} px, steer {:.2}, mode {:?}",
            ds.num_cycles,
            offset_px,
            ds.steer_ctrl_output.steer_dem,
            ds.loco_ctrl_status_rpt.mode
        );

        // ---- CYCLE MANAGEMENT ----

        let cycle_dur = Instant::now() - cycle_start_instant;

        // Get sleep duration
        match Duration::from_secs_f64(CYCLE_PERIOD_S)
            .checked_sub(cycle_dur)
        {
            Some(d) => {
                ds.num_consec_cycle_overruns = 0;
                thread::sleep(d);
            },
            None => {
                warn!(
                    "Cycle overran by {:.06} s",
                    cycle_dur.as_secs_f64() - CYCLE_PERIOD_S
                );
                ds.num_consec_cycle_overruns += 1;
            }
        }

        // Increment cycle counter
        ds.num_cycles += 1;
    }

    // ---- SHUTDOWN ----

    // The cleanup path runs exactly once, whichever way the loop exited.
    cleanup(&mut motor_driver, &mut camera);

    session.exit();

    match loop_error {
        Some(e) => Err(e),
        None => {
            info!("End of execution");
            Ok(())
        }
    }
}

/// Stop the motors and release the camera.
///
/// Failures here are logged and unwinding continues: a dead bus must not
/// stop the camera being released, or the other way round.
fn cleanup<B: MotorBus, C: Camera>(motor_driver: &mut MotorDriver<B>, camera: &mut C) {
    info!("Cleaning up equipment");

    if let Err(e) = motor_driver.dispatch(&DriveCommand::Stop) {
        warn!("Could not stop the motors during cleanup: {}", e);
    }

    match camera.stop() {
        Ok(()) => (),
        Err(CamError::NotStarted) => (),
        Err(e) => warn!("Could not stop the camera during cleanup: {}", e),
    }

    info!("Equipment cleanup complete");
}

/// Watch stdin for a cancellation request.
///
/// Runs on its own thread. A line reading `q` raises the stop flag, which
/// the main loop checks once per cycle.
fn stdin_watcher(stop_flag: Arc<AtomicBool>) {
    let stdin = std::io::stdin();

    for line in stdin.lock().lines() {
        match line {
            Ok(l) => {
                if l.trim() == "q" {
                    stop_flag.store(true, Ordering::Relaxed);
                    break;
                }
            }
            Err(_) => break,
        }
    }
}
