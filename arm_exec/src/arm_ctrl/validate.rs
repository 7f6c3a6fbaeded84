//! Joint range validation and clamping utilities
//!
//! Pure functions over an [`ArmConfig`] and the joint limits held in
//! [`Params`]. Note that the controller rejects invalid demands outright
//! rather than clamping them: [`clamp_config`] is for callers that want to
//! coerce a configuration into range before demanding it.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use super::{ArmConfig, JointId, JointLimits, Params};

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Check if the given angle is within the limits of a joint, inclusive.
pub fn joint_in_range(angle_deg: i32, limits: &JointLimits) -> bool {
    angle_deg >= limits.min_deg && angle_deg <= limits.max_deg
}

/// Check that every joint in the configuration is within its limits.
pub fn validate_config(config: &ArmConfig, params: &Params) -> bool {
    for &id in JointId::ALL.iter() {
        if !joint_in_range(config[id], params.limits(id)) {
            return false;
        }
    }

    true
}

/// Coerce every out-of-range joint in the configuration to its nearest
/// limit, leaving in-range joints unchanged.
pub fn clamp_config(config: &mut ArmConfig, params: &Params) {
    for &id in JointId::ALL.iter() {
        let limits = params.limits(id);

        if config[id] < limits.min_deg {
            config[id] = limits.min_deg;
        } else if config[id] > limits.max_deg {
            config[id] = limits.max_deg;
        }
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_joint_in_range() {
        let limits = JointLimits {
            min_deg: 15,
            max_deg: 165,
        };

        assert!(joint_in_range(15, &limits));
        assert!(joint_in_range(90, &limits));
        assert!(joint_in_range(165, &limits));

        assert!(!joint_in_range(14, &limits));
        assert!(!joint_in_range(166, &limits));
        assert!(!joint_in_range(-1, &limits));
        assert!(!joint_in_range(i32::MAX, &limits));
        assert!(!joint_in_range(i32::MIN, &limits));
    }

    #[test]
    fn test_validate_config() {
        let params = Params::default();

        // Rest configuration must always be valid
        assert!(validate_config(&params.rest_config_deg, &params));

        assert!(validate_config(&ArmConfig::new(180, 165, 180, 180, 180, 73), &params));

        // A single out of range joint fails the whole configuration
        assert!(!validate_config(&ArmConfig::new(181, 90, 90, 90, 90, 45), &params));
        assert!(!validate_config(&ArmConfig::new(90, 14, 90, 90, 90, 45), &params));
        assert!(!validate_config(&ArmConfig::new(90, 90, 90, 90, 90, 9), &params));
    }

    #[test]
    fn test_clamp_config() {
        let params = Params::default();

        let mut config = ArmConfig::new(-20, 5, 200, 90, 181, 80);
        clamp_config(&mut config, &params);

        // Out of range joints are pulled to the violated limit
        assert_eq!(config.base_deg, 0);
        assert_eq!(config.shoulder_deg, 15);
        assert_eq!(config.elbow_deg, 180);
        assert_eq!(config.wrist_rot_deg, 180);
        assert_eq!(config.gripper_deg, 73);

        // In range joints are untouched
        assert_eq!(config.wrist_ver_deg, 90);

        // A clamped configuration always validates
        assert!(validate_config(&config, &params));
    }
}
