//! # Servo Control Module
//!
//! This module provides the interface between the arm controller and the
//! low-level backend which physically drives the joint servos.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// [`ServoDriver`] implementation which simulates the servos in software.
pub mod sim;

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use crate::arm_ctrl::ArmConfig;

pub use sim::SimServoDriver;

// ------------------------------------------------------------------------------------------------
// TRAITS
// ------------------------------------------------------------------------------------------------

/// Trait to provide a unified API for servo actuation backends.
///
/// Everything on the hardware side of the joint-space abstraction lives
/// behind this trait: driver initialisation, power sequencing, signal
/// generation and fault handling are all owned by the implementation. Calls
/// block until the commanded motion is complete.
pub trait ServoDriver {
    /// Initialise the backend.
    ///
    /// Called once, before any actuation.
    fn init(&mut self);

    /// Drive all six joints to `target`, stepping each joint one degree at a
    /// time with `step_delay_ms` milliseconds between steps. Smaller delays
    /// move the arm faster.
    ///
    /// The target shall already have been validated against the joint
    /// limits.
    fn actuate(&mut self, step_delay_ms: i32, target: &ArmConfig);
}
