//! # Arm Executable Parameters

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::Deserialize;

// ---------------------------------------------------------------------------
// STRUCTS
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct ArmExecParams {
    /// Path to the arm control parameter file, relative to the params
    /// directory
    pub arm_ctrl_params_path: String,

    /// Step delay to drive the arm with
    ///
    /// Units: milliseconds
    pub step_delay_ms: i32,

    /// Base angle over the pickup point
    ///
    /// Units: degrees
    pub pick_base_deg: i32,

    /// Base angle over the drop-off point
    ///
    /// Units: degrees
    pub drop_base_deg: i32,
}
