//! Steam directory resolution
//!
//! This module finds the SteamApps directory, either from the command line or
//! from the default install location of the current operating system, and
//! derives the game's workshop and maps folders from it.

mod paths;
mod platform;

pub use paths::{GamePaths, default_steamapps_dir, resolve_steamapps_dir};
pub use platform::OperatingSystem;
