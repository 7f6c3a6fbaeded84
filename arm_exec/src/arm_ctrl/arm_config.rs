//! Arm configuration structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

// Internal
use super::NUM_JOINTS;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// The angular configuration of all six arm joints.
///
/// Joints can be accessed by name through the struct fields, or by position
/// in the fixed joint order (base, shoulder, elbow, wrist vertical, wrist
/// rotation, gripper) by indexing with a [`JointId`] or a raw `usize`. Both
/// access styles refer to the same storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmConfig {
    /// Base joint angle.
    ///
    /// Units: degrees
    pub base_deg: i32,

    /// Shoulder joint angle.
    ///
    /// Units: degrees
    pub shoulder_deg: i32,

    /// Elbow joint angle.
    ///
    /// Units: degrees
    pub elbow_deg: i32,

    /// Wrist vertical joint angle.
    ///
    /// Units: degrees
    pub wrist_ver_deg: i32,

    /// Wrist rotation joint angle.
    ///
    /// Units: degrees
    pub wrist_rot_deg: i32,

    /// Gripper joint angle.
    ///
    /// Units: degrees
    pub gripper_deg: i32,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// IDs of the arm's joints.
#[derive(Serialize, Deserialize, Debug, Hash, Eq, PartialEq, Copy, Clone)]
pub enum JointId {
    Base,
    Shoulder,
    Elbow,
    WristVer,
    WristRot,
    Gripper,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl ArmConfig {
    /// Build a configuration from the six joint angles in fixed joint order.
    pub fn new(
        base_deg: i32,
        shoulder_deg: i32,
        elbow_deg: i32,
        wrist_ver_deg: i32,
        wrist_rot_deg: i32,
        gripper_deg: i32,
    ) -> Self {
        Self {
            base_deg,
            shoulder_deg,
            elbow_deg,
            wrist_ver_deg,
            wrist_rot_deg,
            gripper_deg,
        }
    }
}

impl JointId {
    /// All joint IDs in fixed joint order.
    pub const ALL: [JointId; NUM_JOINTS] = [
        JointId::Base,
        JointId::Shoulder,
        JointId::Elbow,
        JointId::WristVer,
        JointId::WristRot,
        JointId::Gripper,
    ];

    /// The position of this joint in the fixed joint order.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl Index<JointId> for ArmConfig {
    type Output = i32;

    fn index(&self, id: JointId) -> &Self::Output {
        match id {
            JointId::Base => &self.base_deg,
            JointId::Shoulder => &self.shoulder_deg,
            JointId::Elbow => &self.elbow_deg,
            JointId::WristVer => &self.wrist_ver_deg,
            JointId::WristRot => &self.wrist_rot_deg,
            JointId::Gripper => &self.gripper_deg,
        }
    }
}

impl IndexMut<JointId> for ArmConfig {
    fn index_mut(&mut self, id: JointId) -> &mut Self::Output {
        match id {
            JointId::Base => &mut self.base_deg,
            JointId::Shoulder => &mut self.shoulder_deg,
            JointId::Elbow => &mut self.elbow_deg,
            JointId::WristVer => &mut self.wrist_ver_deg,
            JointId::WristRot => &mut self.wrist_rot_deg,
            JointId::Gripper => &mut self.gripper_deg,
        }
    }
}

impl Index<usize> for ArmConfig {
    type Output = i32;

    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.base_deg,
            1 => &self.shoulder_deg,
            2 => &self.elbow_deg,
            3 => &self.wrist_ver_deg,
            4 => &self.wrist_rot_deg,
            5 => &self.gripper_deg,
            _ => panic!("Joint index {} is out of range (0..{})", index, NUM_JOINTS),
        }
    }
}

impl IndexMut<usize> for ArmConfig {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.base_deg,
            1 => &mut self.shoulder_deg,
            2 => &mut self.elbow_deg,
            3 => &mut self.wrist_ver_deg,
            4 => &mut self.wrist_rot_deg,
            5 => &mut self.gripper_deg,
            _ => panic!("Joint index {} is out of range (0..{})", index, NUM_JOINTS),
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
    fn test_indexed_access_matches_named() {
        let mut config = ArmConfig::new(10, 20, 30, 40, 50, 60);

        assert_eq!(config[0], config.base_deg);
        assert_eq!(config[1], config.shoulder_deg);
        assert_eq!(config[2], config.elbow_deg);
        assert_eq!(config[3], config.wrist_ver_deg);
        assert_eq!(config[4], config.wrist_rot_deg);
        assert_eq!(config[5], config.gripper_deg);

        // Mutation through one view must be visible through the other
        config[2] = 90;
        assert_eq!(config.elbow_deg, 90);

        config.gripper_deg = 42;
        assert_eq!(config[5], 42);
        assert_eq!(config[JointId::Gripper], 42);
    }

    #[test]
    fn test_joint_id_order() {
        let config = ArmConfig::new(0, 1, 2, 3, 4, 5);

        for (i, id) in JointId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
            assert_eq!(config[*id], config[i]);
        }
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range() {
        let config = ArmConfig::new(0, 0, 0, 0, 0, 0);
        let _ = config[NUM_JOINTS];
    }
}
