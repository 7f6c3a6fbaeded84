//! # Arm Control Executable
//!
//! This executable drives the six degree of freedom arm through a scripted
//! object transfer routine: reach over the pickup point, grab, carry to the
//! drop-off point, release and return to rest. In the deployed system the
//! routine is kicked off by an external vision trigger; here it runs once
//! against the simulated servo backend, archiving every executed demand
//! into the session.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

/// Parameters for the arm executable.
mod params;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use color_eyre::{eyre::WrapErr, Result};
use log::{info, warn};
use serde::Serialize;

// Internal
use arm_lib::{
    arm_ctrl::{ArmConfig, ArmCtrl, Params, StatusReport, KEEP_CURRENT},
    servo_ctrl::SimServoDriver,
};
use util::{
    archive::Archiver,
    logger::{logger_init, LevelFilter},
    session::{self, Session},
};

use params::ArmExecParams;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A single executed demand, archived once per accepted move.
#[derive(Serialize)]
struct DemandRecord {
    time_s: f64,
    step_delay_ms: i32,
    base_deg: i32,
    shoulder_deg: i32,
    elbow_deg: i32,
    wrist_ver_deg: i32,
    wrist_rot_deg: i32,
    gripper_deg: i32,
}

/// State of the arm at the end of the routine, saved into the session.
#[derive(Serialize)]
struct FinalState {
    config: ArmConfig,
    report: StatusReport,
}

// ---------------------------------------------------------------------------
// MAIN
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    // ---- EARLY INITIALISATION ----

    // Initialise session
    let session = Session::new("arm_exec", "sessions").wrap_err("Failed to create the session")?;

    // Initialise logger
    logger_init(LevelFilter::Trace, &session).wrap_err("Failed to initialise logging")?;

    // Log information on this execution.
    info!("Arm Control Executable\n");
    info!("Session directory: {:?}\n", session.session_root);

    info!("Initialising...");

    // ---- LOAD PARAMETERS ----

    let exec_params: ArmExecParams =
        util::params::load("arm_exec.toml").wrap_err("Could not load exec params")?;

    let arm_params: Params = util::params::load(&exec_params.arm_ctrl_params_path)
        .wrap_err("Could not load arm control params")?;

    arm_params
        .check()
        .wrap_err("Arm control params are inconsistent")?;

    info!("Parameters loaded");

    // ---- ARM INITIALISATION ----

    let mut arm = ArmCtrl::new(arm_params, SimServoDriver::new());
    arm.begin();

    if !arm.set_step_delay(exec_params.step_delay_ms) {
        warn!(
            "Configured step delay of {} ms is invalid, continuing with {} ms",
            exec_params.step_delay_ms,
            arm.step_delay_ms()
        );
    }

    let mut archiver = Archiver::from_path(&session, "demands.csv")
        .wrap_err("Failed to create the demand archive")?;

    info!("Arm initialised, starting transfer routine");

    // ---- TRANSFER ROUTINE ----

    run_transfer(&mut arm, &mut archiver, &exec_params)?;

    // ---- SHUTDOWN ----

    session
        .save_json(
            "final_state.json",
            &FinalState {
                config: *arm.current_config(),
                report: *arm.report(),
            },
        )
        .wrap_err("Failed to save the final arm state")?;

    info!(
        "Transfer routine complete, final configuration: {:?}",
        arm.current_config()
    );

    Ok(())
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

/// Run the object transfer routine.
fn run_transfer(
    arm: &mut ArmCtrl<SimServoDriver>,
    archiver: &mut Archiver,
    params: &ArmExecParams,
) -> Result<()> {
    let rest = arm.params().rest_config_deg;

    // Reach down over the pickup point with the gripper open
    arm.open_gripper();
    archive_demand(arm, archiver)?;

    demand(
        arm,
        archiver,
        ArmConfig::new(params.pick_base_deg, 90, 90, 90, 90, KEEP_CURRENT),
    )?;

    // Grab the object
    arm.close_gripper();
    archive_demand(arm, archiver)?;

    // Lift clear of the table
    demand(
        arm,
        archiver,
        ArmConfig::new(
            KEEP_CURRENT,
            120,
            60,
            KEEP_CURRENT,
            KEEP_CURRENT,
            KEEP_CURRENT,
        ),
    )?;

    // Swing to the drop-off point
    demand(
        arm,
        archiver,
        ArmConfig::new(
            params.drop_base_deg,
            KEEP_CURRENT,
            KEEP_CURRENT,
            KEEP_CURRENT,
            KEEP_CURRENT,
            KEEP_CURRENT,
        ),
    )?;

    // Lower back down and release
    demand(
        arm,
        archiver,
        ArmConfig::new(
            KEEP_CURRENT,
            90,
            90,
            KEEP_CURRENT,
            KEEP_CURRENT,
            KEEP_CURRENT,
        ),
    )?;

    arm.open_gripper();
    archive_demand(arm, archiver)?;

    // Return to rest
    demand(arm, archiver, rest)?;

    Ok(())
}

/// Issue a demand to the arm, archiving it if accepted.
fn demand(
    arm: &mut ArmCtrl<SimServoDriver>,
    archiver: &mut Archiver,
    config: ArmConfig,
) -> Result<()> {
    if arm.move_to(config) {
        archive_demand(arm, archiver)?;
    } else {
        warn!(
            "Transfer demand {:?} was rejected, continuing from the current configuration",
            config
        );
    }

    Ok(())
}

/// Archive the arm's current configuration and step delay.
fn archive_demand(arm: &ArmCtrl<SimServoDriver>, archiver: &mut Archiver) -> Result<()> {
    let config = arm.current_config();

    archiver
        .serialise(DemandRecord {
            time_s: session::get_elapsed_seconds(),
            step_delay_ms: arm.step_delay_ms(),
            base_deg: config.base_deg,
            shoulder_deg: config.shoulder_deg,
            elbow_deg: config.elbow_deg,
            wrist_ver_deg: config.wrist_ver_deg,
            wrist_rot_deg: config.wrist_rot_deg,
            gripper_deg: config.gripper_deg,
        })
        .wrap_err("Failed to archive the demand")?;

    Ok(())
}
