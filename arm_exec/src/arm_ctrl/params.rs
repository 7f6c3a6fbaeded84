//! Parameters structure for ArmCtrl

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::{Deserialize, Serialize};

// Internal
use super::{joint_in_range, ArmConfig, JointId};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Inclusive angular limits of a single joint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JointLimits {
    /// Smallest angle the joint can be driven to.
    ///
    /// Units: degrees
    pub min_deg: i32,

    /// Largest angle the joint can be driven to.
    ///
    /// Units: degrees
    pub max_deg: i32,
}

/// Parameters for Arm control.
///
/// These capture the physical constants of the arm hardware. They are loaded
/// once at start up and passed by reference wherever limits are needed, so
/// there is no global limits table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Params {
    // ---- CAPABILITIES ----
    /// Angular limits of the base joint.
    pub base_limits_deg: JointLimits,

    /// Angular limits of the shoulder joint.
    pub shoulder_limits_deg: JointLimits,

    /// Angular limits of the elbow joint.
    pub elbow_limits_deg: JointLimits,

    /// Angular limits of the wrist vertical joint.
    pub wrist_ver_limits_deg: JointLimits,

    /// Angular limits of the wrist rotation joint.
    pub wrist_rot_limits_deg: JointLimits,

    /// Angular limits of the gripper joint.
    pub gripper_limits_deg: JointLimits,

    // ---- REST CONFIGURATION ----
    /// The configuration the arm holds at power on.
    pub rest_config_deg: ArmConfig,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// An inconsistency in a loaded [`Params`] structure.
#[derive(Debug, thiserror::Error)]
pub enum ParamsError {
    #[error("Limits for the {0:?} joint are inverted (min > max)")]
    InvertedLimits(JointId),

    #[error(
        "Minimum limit for the {0:?} joint is negative, which clashes with \
         the keep-current sentinel"
    )]
    NegativeMinimum(JointId),

    #[error("Rest angle for the {0:?} joint is outside its limits")]
    RestOutOfLimits(JointId),
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Params {
    /// Get the limits of the given joint.
    pub fn limits(&self, id: JointId) -> &JointLimits {
        match id {
            JointId::Base => &self.base_limits_deg,
            JointId::Shoulder => &self.shoulder_limits_deg,
            JointId::Elbow => &self.elbow_limits_deg,
            JointId::WristVer => &self.wrist_ver_limits_deg,
            JointId::WristRot => &self.wrist_rot_limits_deg,
            JointId::Gripper => &self.gripper_limits_deg,
        }
    }

    /// Check the parameters for internal consistency.
    ///
    /// Shall be called after loading a parameter file, before the parameters
    /// are used to construct a controller.
    pub fn check(&self) -> Result<(), ParamsError> {
        for &id in JointId::ALL.iter() {
            let limits = self.limits(id);

            if limits.min_deg > limits.max_deg {
                return Err(ParamsError::InvertedLimits(id));
            }
            if limits.min_deg < 0 {
                return Err(ParamsError::NegativeMinimum(id));
            }
            if !joint_in_range(self.rest_config_deg[id], limits) {
                return Err(ParamsError::RestOutOfLimits(id));
            }
        }

        Ok(())
    }
}

impl Default for Params {
    /// Limits and rest configuration of the reference arm hardware.
    fn default() -> Self {
        Params {
            base_limits_deg: JointLimits {
                min_deg: 0,
                max_deg: 180,
            },
            shoulder_limits_deg: JointLimits {
                min_deg: 15,
                max_deg: 165,
            },
            elbow_limits_deg: JointLimits {
                min_deg: 0,
                max_deg: 180,
            },
            wrist_ver_limits_deg: JointLimits {
                min_deg: 0,
                max_deg: 180,
            },
            wrist_rot_limits_deg: JointLimits {
                min_deg: 0,
                max_deg: 180,
            },
            gripper_limits_deg: JointLimits {
                min_deg: 10,
                max_deg: 73,
            },
            rest_config_deg: ArmConfig::new(0, 15, 0, 0, 0, 10),
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
    fn test_default_params_are_consistent() {
        assert!(Params::default().check().is_ok());
    }

    #[test]
    fn test_check_rejects_inverted_limits() {
        let mut params = Params::default();
        params.elbow_limits_deg = JointLimits {
            min_deg: 90,
            max_deg: 10,
        };

        assert!(matches!(
            params.check(),
            Err(ParamsError::InvertedLimits(JointId::Elbow))
        ));
    }

    #[test]
    fn test_check_rejects_negative_minimum() {
        let mut params = Params::default();
        params.wrist_rot_limits_deg.min_deg = -10;

        assert!(matches!(
            params.check(),
            Err(ParamsError::NegativeMinimum(JointId::WristRot))
        ));
    }

    #[test]
    fn test_check_rejects_rest_outside_limits() {
        let mut params = Params::default();
        params.rest_config_deg.shoulder_deg = 0;

        assert!(matches!(
            params.check(),
            Err(ParamsError::RestOutOfLimits(JointId::Shoulder))
        ));
    }

    #[test]
    fn test_params_load_from_toml() {
        let params: Params = toml::from_str(
            r#"
            base_limits_deg = { min_deg = 0, max_deg = 180 }
            shoulder_limits_deg = { min_deg = 15, max_deg = 165 }
            elbow_limits_deg = { min_deg = 0, max_deg = 180 }
            wrist_ver_limits_deg = { min_deg = 0, max_deg = 180 }
            wrist_rot_limits_deg = { min_deg = 0, max_deg = 180 }
            gripper_limits_deg = { min_deg = 10, max_deg = 73 }

            [rest_config_deg]
            base_deg = 0
            shoulder_deg = 15
            elbow_deg = 0
            wrist_ver_deg = 0
            wrist_rot_deg = 0
            gripper_deg = 10
            "#,
        )
        .unwrap();

        assert_eq!(params.shoulder_limits_deg.min_deg, 15);
        assert_eq!(params.rest_config_deg, ArmConfig::new(0, 15, 0, 0, 0, 10));
        assert!(params.check().is_ok());
    }
}
