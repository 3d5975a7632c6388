//! Configuration module for host definitions
//!
//! This module holds the host game's pawn kind and equipment definitions,
//! their JSON deserialization, and the location of the override file.

mod database;
mod host;
mod pawn_kind;
mod thing;

pub use database::*;
pub use host::*;
pub use pawn_kind::*;
pub use thing::*;

use std::path::{Path, PathBuf};

/// File name of the override file inside the config folder
pub const TWEAK_FILE_NAME: &str = "PawnTweaks.csv";

/// Folder name used under the platform config directory
pub const CONFIG_FOLDER_NAME: &str = "PawnTweaker";

/// Override file inside a host-supplied config folder
pub fn tweak_file_path(config_folder: &Path) -> PathBuf {
    config_folder.join(TWEAK_FILE_NAME)
}

/// Platform config folder, `None` when the platform has none
pub fn default_config_folder() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_FOLDER_NAME))
}

/// Override file in the platform config folder
pub fn default_tweak_file_path() -> Option<PathBuf> {
    default_config_folder().map(|folder| tweak_file_path(&folder))
}
