//! Host environment utility functions

use std::path::PathBuf;

/// Name of the environment variable which points at the root of the software
/// installation. Parameter files and session directories are resolved
/// relative to this root.
pub const SW_ROOT_ENV_VAR: &str = "ARM_SW_ROOT";

/// Get the software root directory from the environment.
pub fn get_sw_root() -> Result<PathBuf, std::env::VarError> {
    std::env::var(SW_ROOT_ENV_VAR).map(PathBuf::from)
}
