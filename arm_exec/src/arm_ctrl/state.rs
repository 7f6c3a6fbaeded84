//! Implementations for the ArmCtrl state structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{debug, warn};
use serde::Serialize;

// Internal
use super::{
    joint_in_range, ArmConfig, JointId, Params, DEF_STEP_DELAY_MS, KEEP_CURRENT,
    MAX_STEP_DELAY_MS, MIN_STEP_DELAY_MS, NUM_JOINTS,
};
use crate::servo_ctrl::ServoDriver;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Arm control module state.
///
/// Owns the servo backend and the arm's current configuration. The stored
/// configuration is only ever replaced whole, and only once the associated
/// demand has passed validation, so it always describes a reachable arm
/// position.
pub struct ArmCtrl<D: ServoDriver> {
    pub(crate) params: Params,

    pub(crate) report: StatusReport,

    driver: D,

    current_config: ArmConfig,

    step_delay_ms: i32,
}

/// Status report for ArmCtrl demand validation, refreshed on every demand.
#[derive(Clone, Copy, Default, Serialize, Debug)]
pub struct StatusReport {
    /// For each joint in fixed joint order, true if the last demand asked
    /// for an angle outside that joint's limits.
    pub out_of_range: [bool; NUM_JOINTS],
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl<D: ServoDriver> ArmCtrl<D> {
    /// Create a new arm controller over the given servo backend.
    ///
    /// The arm is taken to be at the parameters' rest configuration, which
    /// is where the hardware parks itself at power on.
    pub fn new(params: Params, driver: D) -> Self {
        Self {
            current_config: params.rest_config_deg,
            params,
            report: StatusReport::default(),
            driver,
            step_delay_ms: DEF_STEP_DELAY_MS,
        }
    }

    /// Initialise the servo backend.
    ///
    /// Must be called once before any move operation.
    pub fn begin(&mut self) {
        self.driver.init();
    }

    /// Set the delay between servo steps. Joints are stepped one degree at a
    /// time, so the step delay controls the speed of the arm: smaller values
    /// move it faster.
    ///
    /// Returns true if the delay was accepted. Delays outside
    /// [`MIN_STEP_DELAY_MS`]..=[`MAX_STEP_DELAY_MS`] are rejected and the
    /// previous delay is retained.
    pub fn set_step_delay(&mut self, step_delay_ms: i32) -> bool {
        if step_delay_ms < MIN_STEP_DELAY_MS || step_delay_ms > MAX_STEP_DELAY_MS {
            warn!(
                "Step delay of {} ms is outside [{}, {}] ms, keeping {} ms",
                step_delay_ms, MIN_STEP_DELAY_MS, MAX_STEP_DELAY_MS, self.step_delay_ms
            );
            return false;
        }

        self.step_delay_ms = step_delay_ms;
        true
    }

    /// Move the arm to the demanded configuration.
    ///
    /// A demanded angle of [`KEEP_CURRENT`] is substituted with that joint's
    /// current angle before validation, so partial demands only need to name
    /// the joints they change. If any joint of the merged configuration is
    /// outside its limits the whole demand is rejected: no actuation occurs
    /// and the current configuration is unchanged.
    ///
    /// Returns true if the demand was accepted and actuated.
    pub fn move_to(&mut self, demand: ArmConfig) -> bool {
        let mut target = demand;

        // Substitute the keep-current sentinel with the current angles
        for i in 0..NUM_JOINTS {
            if target[i] == KEEP_CURRENT {
                target[i] = self.current_config[i];
            }
        }

        // Check all joints, recording which are out of range
        self.report = StatusReport::default();
        let mut valid = true;

        for &id in JointId::ALL.iter() {
            if !joint_in_range(target[id], self.params.limits(id)) {
                self.report.out_of_range[id.index()] = true;
                valid = false;
            }
        }

        if !valid {
            warn!(
                "Demand {:?} rejected, out of range flags: {:?}",
                demand, self.report.out_of_range
            );
            return false;
        }

        // Commit the new configuration and drive the servos
        self.current_config = target;

        debug!(
            "Driving arm to {:?} at {} ms/step",
            target, self.step_delay_ms
        );

        self.driver.actuate(self.step_delay_ms, &target);

        true
    }

    /// Move the base joint, keeping all other joints at their current angle.
    pub fn move_base(&mut self, angle_deg: i32) -> bool {
        let mut demand = self.current_config;
        demand.base_deg = angle_deg;

        self.move_to(demand)
    }

    /// Move the shoulder joint, keeping all other joints at their current
    /// angle.
    pub fn move_shoulder(&mut self, angle_deg: i32) -> bool {
        let mut demand = self.current_config;
        demand.shoulder_deg = angle_deg;

        self.move_to(demand)
    }

    /// Move the elbow joint, keeping all other joints at their current angle.
    pub fn move_elbow(&mut self, angle_deg: i32) -> bool {
        let mut demand = self.current_config;
        demand.elbow_deg = angle_deg;

        self.move_to(demand)
    }

    /// Move the wrist vertical joint, keeping all other joints at their
    /// current angle.
    pub fn move_wrist_ver(&mut self, angle_deg: i32) -> bool {
        let mut demand = self.current_config;
        demand.wrist_ver_deg = angle_deg;

        self.move_to(demand)
    }

    /// Move the wrist rotation joint, keeping all other joints at their
    /// current angle.
    pub fn move_wrist_rot(&mut self, angle_deg: i32) -> bool {
        let mut demand = self.current_config;
        demand.wrist_rot_deg = angle_deg;

        self.move_to(demand)
    }

    /// Move the gripper joint, keeping all other joints at their current
    /// angle.
    pub fn move_gripper(&mut self, angle_deg: i32) -> bool {
        let mut demand = self.current_config;
        demand.gripper_deg = angle_deg;

        self.move_to(demand)
    }

    /// Close the gripper by driving it to its maximum limit.
    pub fn close_gripper(&mut self) {
        let mut demand = self.current_config;
        demand.gripper_deg = self.params.gripper_limits_deg.max_deg;

        // Cannot fail, the demanded angle is the limit itself
        self.move_to(demand);
    }

    /// Open the gripper by driving it to its minimum limit.
    pub fn open_gripper(&mut self) {
        let mut demand = self.current_config;
        demand.gripper_deg = self.params.gripper_limits_deg.min_deg;

        // Cannot fail, the demanded angle is the limit itself
        self.move_to(demand);
    }

    /// The configuration the arm is currently at.
    pub fn current_config(&self) -> &ArmConfig {
        &self.current_config
    }

    /// The step delay the arm is currently driven with.
    ///
    /// Units: milliseconds
    pub fn step_delay_ms(&self) -> i32 {
        self.step_delay_ms
    }

    /// The validation report of the most recent demand.
    pub fn report(&self) -> &StatusReport {
        &self.report
    }

    /// The parameters the controller was built with.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// The servo backend, for inspection.
    pub fn driver(&self) -> &D {
        &self.driver
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::servo_ctrl::SimServoDriver;

    /// Build a started controller over the simulated backend.
    fn test_arm() -> ArmCtrl<SimServoDriver> {
        let mut arm = ArmCtrl::new(Params::default(), SimServoDriver::new());
        arm.begin();
        arm
    }

    #[test]
    fn test_begin_initialises_backend() {
        let arm = test_arm();
        assert!(arm.driver().is_initialised());
    }

    #[test]
    fn test_initial_state_is_rest() {
        let arm = test_arm();

        assert_eq!(*arm.current_config(), ArmConfig::new(0, 15, 0, 0, 0, 10));
        assert_eq!(arm.step_delay_ms(), DEF_STEP_DELAY_MS);
        assert_eq!(arm.driver().demand_count(), 0);
    }

    #[test]
    fn test_set_step_delay_bounds() {
        let mut arm = test_arm();

        assert!(!arm.set_step_delay(9));
        assert_eq!(arm.step_delay_ms(), DEF_STEP_DELAY_MS);

        assert!(!arm.set_step_delay(31));
        assert_eq!(arm.step_delay_ms(), DEF_STEP_DELAY_MS);

        assert!(arm.set_step_delay(30));
        assert_eq!(arm.step_delay_ms(), 30);

        assert!(arm.set_step_delay(10));
        assert_eq!(arm.step_delay_ms(), 10);

        // A rejected delay retains the previously accepted one
        assert!(arm.set_step_delay(25));
        assert!(!arm.set_step_delay(0));
        assert_eq!(arm.step_delay_ms(), 25);
    }

    #[test]
    fn test_move_to_actuates_with_step_delay() {
        let mut arm = test_arm();
        arm.set_step_delay(20);

        let demand = ArmConfig::new(90, 90, 90, 90, 90, 45);
        assert!(arm.move_to(demand));

        assert_eq!(*arm.current_config(), demand);
        assert_eq!(arm.driver().demand_count(), 1);
        assert_eq!(arm.driver().last_demand(), Some((20, demand)));
    }

    #[test]
    fn test_sentinel_substitution() {
        let mut arm = test_arm();

        assert!(arm.move_to(ArmConfig::new(10, 20, 30, 40, 50, 20)));

        // Only the elbow is named, all other joints hold their angle
        assert!(arm.move_to(ArmConfig::new(
            KEEP_CURRENT,
            KEEP_CURRENT,
            90,
            KEEP_CURRENT,
            KEEP_CURRENT,
            KEEP_CURRENT
        )));

        let merged = ArmConfig::new(10, 20, 90, 40, 50, 20);
        assert_eq!(*arm.current_config(), merged);
        assert_eq!(arm.driver().last_demand(), Some((DEF_STEP_DELAY_MS, merged)));
    }

    #[test]
    fn test_all_sentinels_is_idempotent() {
        let mut arm = test_arm();

        assert!(arm.move_to(ArmConfig::new(10, 20, 30, 40, 50, 20)));

        assert!(arm.move_to(ArmConfig::new(
            KEEP_CURRENT,
            KEEP_CURRENT,
            KEEP_CURRENT,
            KEEP_CURRENT,
            KEEP_CURRENT,
            KEEP_CURRENT
        )));

        // The arm is re-actuated at the unchanged angles
        let held = ArmConfig::new(10, 20, 30, 40, 50, 20);
        assert_eq!(*arm.current_config(), held);
        assert_eq!(arm.driver().demand_count(), 2);
        assert_eq!(arm.driver().last_demand(), Some((DEF_STEP_DELAY_MS, held)));
    }

    #[test]
    fn test_rejection_leaves_state_untouched() {
        let mut arm = test_arm();

        let reached = ArmConfig::new(10, 20, 30, 40, 50, 20);
        assert!(arm.move_to(reached));

        // Base maximum is 180
        assert!(!arm.move_base(200));

        assert_eq!(*arm.current_config(), reached);
        assert_eq!(arm.driver().demand_count(), 1);
        assert_eq!(arm.driver().last_demand(), Some((DEF_STEP_DELAY_MS, reached)));

        assert!(arm.report().out_of_range[JointId::Base.index()]);
        assert!(!arm.report().out_of_range[JointId::Shoulder.index()]);
    }

    #[test]
    fn test_report_refreshed_on_each_demand() {
        let mut arm = test_arm();

        assert!(!arm.move_shoulder(0));
        assert!(arm.report().out_of_range[JointId::Shoulder.index()]);

        assert!(arm.move_shoulder(90));
        assert!(!arm.report().out_of_range.iter().any(|&flag| flag));
    }

    #[test]
    fn test_single_joint_moves_change_one_joint() {
        let mut arm = test_arm();

        assert!(arm.move_base(45));
        assert_eq!(*arm.current_config(), ArmConfig::new(45, 15, 0, 0, 0, 10));

        assert!(arm.move_shoulder(100));
        assert_eq!(*arm.current_config(), ArmConfig::new(45, 100, 0, 0, 0, 10));

        assert!(arm.move_elbow(120));
        assert_eq!(*arm.current_config(), ArmConfig::new(45, 100, 120, 0, 0, 10));

        assert!(arm.move_wrist_ver(60));
        assert_eq!(*arm.current_config(), ArmConfig::new(45, 100, 120, 60, 0, 10));

        assert!(arm.move_wrist_rot(30));
        assert_eq!(*arm.current_config(), ArmConfig::new(45, 100, 120, 60, 30, 10));

        assert!(arm.move_gripper(50));
        assert_eq!(*arm.current_config(), ArmConfig::new(45, 100, 120, 60, 30, 50));
    }

    #[test]
    fn test_gripper_drives_to_exact_limits() {
        let mut arm = test_arm();

        arm.close_gripper();
        assert_eq!(arm.current_config().gripper_deg, 73);

        arm.open_gripper();
        assert_eq!(arm.current_config().gripper_deg, 10);

        // Both are full-configuration demands, so each one actuates
        assert_eq!(arm.driver().demand_count(), 2);
    }

    #[test]
    fn test_move_path_does_not_clamp() {
        let mut arm = test_arm();

        // One degree past the limit is rejected, not coerced to 180
        assert!(!arm.move_elbow(181));
        assert_eq!(arm.current_config().elbow_deg, 0);
    }
}
