//! SteamApps and game folder paths

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use log::{debug, info};

use crate::constants::{
    LINUX_STEAMAPPS_SUBDIR, MACOS_STEAMAPPS_SUBDIR, MAPS_SEGMENTS, WINDOWS_STEAMAPPS_DIR,
    WORKSHOP_SEGMENTS, WSL_STEAMAPPS_DIR,
};
use crate::errors::{Error, Result, default_directory_not_found_error, unrecognized_os_error};

use super::platform::OperatingSystem;

/// Source and destination folders of the game inside a SteamApps directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GamePaths {
    /// Folder holding the game's workshop downloads, one subfolder per item
    pub workshop_dir: PathBuf,
    /// Folder the game loads maps from
    pub maps_dir: PathBuf,
}

impl GamePaths {
    /// Derives the game folders from a SteamApps directory
    ///
    /// Neither folder is checked for existence.
    ///
    /// # Examples
    /// ```
    /// use std::path::Path;
    /// use workshop_maps::steam::GamePaths;
    ///
    /// let paths = GamePaths::from_steamapps(Path::new("/steam/steamapps"));
    /// assert!(paths.workshop_dir.ends_with("workshop/content/440"));
    /// assert!(paths.maps_dir.ends_with("common/Team Fortress 2/tf/maps"));
    /// ```
    pub fn from_steamapps(steamapps_dir: &Path) -> Self {
        GamePaths {
            workshop_dir: steamapps_dir.join(WORKSHOP_SEGMENTS.iter().collect::<PathBuf>()),
            maps_dir: steamapps_dir.join(MAPS_SEGMENTS.iter().collect::<PathBuf>()),
        }
    }
}

/// Computes the default SteamApps directory for an operating system
///
/// `home` is only consulted on Linux and macOS.
///
/// # Errors
/// * `UnrecognizedOs` for [`OperatingSystem::Unknown`]
/// * `HomeDirectoryNotFound` when the OS needs a home directory and none was given
pub fn default_steamapps_dir(os: OperatingSystem, home: Option<&Path>) -> Result<PathBuf> {
    match os {
        OperatingSystem::WindowsSubsystemLinux => Ok(PathBuf::from(WSL_STEAMAPPS_DIR)),
        OperatingSystem::Windows => Ok(PathBuf::from(WINDOWS_STEAMAPPS_DIR)),
        OperatingSystem::Linux => home
            .map(|home| home.join(LINUX_STEAMAPPS_SUBDIR))
            .ok_or(Error::HomeDirectoryNotFound),
        OperatingSystem::MacOS => home
            .map(|home| home.join(MACOS_STEAMAPPS_SUBDIR))
            .ok_or(Error::HomeDirectoryNotFound),
        OperatingSystem::Unknown => Err(unrecognized_os_error(std::env::consts::OS)),
    }
}

/// Returns the SteamApps directory to work on
///
/// An explicit directory is returned unchanged. Otherwise the default for the
/// detected operating system is used, provided it exists.
///
/// # Errors
/// Returns an error when the OS is not recognised, the home directory cannot
/// be found, or the default directory does not exist.
pub fn resolve_steamapps_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(directory) = explicit {
        debug!("Using SteamApps directory from the command line: {}", directory.display());
        return Ok(directory.to_path_buf());
    }

    let os = OperatingSystem::detect();
    let home = if os.uses_home_directory() {
        BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
    } else {
        None
    };

    resolve_default_steamapps_dir(os, home.as_deref())
}

/// Computes the default SteamApps directory and checks that it exists
pub(crate) fn resolve_default_steamapps_dir(
    os: OperatingSystem,
    home: Option<&Path>,
) -> Result<PathBuf> {
    let directory = default_steamapps_dir(os, home)?;
    if !directory.exists() {
        return Err(default_directory_not_found_error(directory));
    }

    info!("Using default SteamApps directory for {os:?}: {}", directory.display());
    Ok(directory)
}
