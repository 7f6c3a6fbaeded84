//! # Arm library.
//!
//! Joint-space control of the six degree of freedom arm. The library tracks
//! the arm's angular configuration, validates joint demands against the
//! physical limits of each joint and issues accepted demands to the servo
//! backend which drives the motors.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Arm control module - tracks the arm's configuration and issues validated joint demands
pub mod arm_ctrl;

/// Servo control module - interface to the backend which drives the physical servos
pub mod servo_ctrl;
