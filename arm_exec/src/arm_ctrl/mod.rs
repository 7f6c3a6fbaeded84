//! Arm control module
//!
//! This module keeps track of the arm's current angular configuration and
//! converts joint demands into validated servo movements. Demands which
//! would take any joint outside its physical limits are rejected whole: no
//! partial actuation ever occurs and the stored configuration only changes
//! when the servo backend has been commanded.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod arm_config;
mod params;
mod state;
mod validate;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
pub use arm_config::*;
pub use params::*;
pub use state::*;
pub use validate::*;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// The number of controllable joints on the arm.
pub const NUM_JOINTS: usize = 6;

/// Sentinel angle in a demanded configuration meaning "keep this joint at
/// its current angle".
///
/// The convention is only unambiguous because every joint's minimum limit is
/// non-negative, so `-1` can never be a valid resting angle. That constraint
/// is enforced on loaded parameters by [`Params::check`].
pub const KEEP_CURRENT: i32 = -1;

/// Smallest step delay the arm will accept.
///
/// Units: milliseconds
pub const MIN_STEP_DELAY_MS: i32 = 10;

/// Largest step delay the arm will accept.
///
/// Units: milliseconds
pub const MAX_STEP_DELAY_MS: i32 = 30;

/// Step delay used until one is commanded.
///
/// Units: milliseconds
pub const DEF_STEP_DELAY_MS: i32 = 10;
