//! Simulated [`ServoDriver`] implementation
//!
//! Stands in for the hardware backend when running without the arm
//! attached. Demands are logged and recorded rather than driven, which also
//! makes this the test double for the arm controller.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use log::{debug, info};

use super::ServoDriver;
use crate::arm_ctrl::ArmConfig;

// ------------------------------------------------------------------------------------------------
// DATA STRUCTURES
// ------------------------------------------------------------------------------------------------

/// A servo backend which performs no I/O.
#[derive(Default)]
pub struct SimServoDriver {
    initialised: bool,

    demand_count: u64,

    last_demand: Option<(i32, ArmConfig)>,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl SimServoDriver {
    /// Create a new, uninitialised simulated backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// True once `init` has been called.
    pub fn is_initialised(&self) -> bool {
        self.initialised
    }

    /// Number of demands actuated since creation.
    pub fn demand_count(&self) -> u64 {
        self.demand_count
    }

    /// The most recent demand, as (step delay in ms, configuration).
    pub fn last_demand(&self) -> Option<(i32, ArmConfig)> {
        self.last_demand
    }
}

impl ServoDriver for SimServoDriver {
    fn init(&mut self) {
        self.initialised = true;

        info!("Simulated servo backend initialised");
    }

    fn actuate(&mut self, step_delay_ms: i32, target: &ArmConfig) {
        self.demand_count += 1;
        self.last_demand = Some((step_delay_ms, *target));

        debug!(
            "Simulated actuation to {:?} at {} ms/step",
            target, step_delay_ms
        );
    }
}
