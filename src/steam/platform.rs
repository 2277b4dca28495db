//! Operating system detection
//!
//! Only the four systems Steam ships a client for are told apart. Windows
//! Subsystem for Linux reports itself as Linux, so the kernel release string
//! is inspected to recognise it.

use log::debug;
use sysinfo::System;

use crate::constants::WSL_KERNEL_MARKER;

/// Operating system the default SteamApps location depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatingSystem {
    /// Native Linux
    Linux,
    /// Linux running under the Windows Subsystem for Linux
    WindowsSubsystemLinux,
    /// macOS
    MacOS,
    /// Native Windows
    Windows,
    /// Anything else; no default location is known
    Unknown,
}

impl OperatingSystem {
    /// Detects the operating system the program is running on
    pub fn detect() -> Self {
        let os_name = std::env::consts::OS;
        let kernel_release = if os_name == "linux" {
            System::kernel_version()
        } else {
            None
        };
        debug!("Detecting OS from name {os_name:?} and kernel release {kernel_release:?}");

        Self::from_parts(os_name, kernel_release.as_deref())
    }

    /// Maps an OS name (as in `std::env::consts::OS`) and an optional kernel
    /// release string to an `OperatingSystem`
    ///
    /// # Examples
    /// ```
    /// use workshop_maps::steam::OperatingSystem;
    ///
    /// let os = OperatingSystem::from_parts("linux", Some("5.15.167.4-microsoft-standard-WSL2"));
    /// assert_eq!(os, OperatingSystem::WindowsSubsystemLinux);
    /// ```
    pub fn from_parts(os_name: &str, kernel_release: Option<&str>) -> Self {
        match os_name {
            "linux" if kernel_release.is_some_and(|release| release.contains(WSL_KERNEL_MARKER)) => {
                OperatingSystem::WindowsSubsystemLinux
            }
            "linux" => OperatingSystem::Linux,
            "macos" => OperatingSystem::MacOS,
            "windows" => OperatingSystem::Windows,
            _ => OperatingSystem::Unknown,
        }
    }

    /// Whether the default SteamApps directory is relative to the home directory
    pub fn uses_home_directory(&self) -> bool {
        matches!(self, OperatingSystem::Linux | OperatingSystem::MacOS)
    }
}
