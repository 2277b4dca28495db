/// Constants used throughout the application
///
/// This module centralises the fixed folder names, help strings and default
/// locations so they are easy to find and update.

/// Steam application id of Team Fortress 2
///
/// Workshop downloads for the game live under a folder named after this id.
pub const GAME_APP_ID: &str = "440";

/// Segments leading from the SteamApps directory to the game's workshop content
pub const WORKSHOP_SEGMENTS: [&str; 3] = ["workshop", "content", GAME_APP_ID];

/// Segments leading from the SteamApps directory to the game's maps folder
pub const MAPS_SEGMENTS: [&str; 4] = ["common", "Team Fortress 2", "tf", "maps"];

/// Suffix a file name must end with to be treated as a compiled map
pub const MAP_EXTENSION: &str = ".bsp";

/// Token that requests the usage text
pub const HELP_FLAG: &str = "--help";

/// Kernel release marker identifying the Windows Subsystem for Linux
pub const WSL_KERNEL_MARKER: &str = "microsoft-standard";

/// SteamApps location of a Windows Steam install, as mounted inside WSL
pub const WSL_STEAMAPPS_DIR: &str = "/mnt/c/Program Files (x86)/Steam/steamapps";

/// SteamApps location of a native Windows Steam install
pub const WINDOWS_STEAMAPPS_DIR: &str = r"C:\Program Files (x86)\Steam\steamapps";

/// SteamApps location relative to the home directory on Linux
pub const LINUX_STEAMAPPS_SUBDIR: &str = ".steam/steam/SteamApps/";

/// SteamApps location relative to the home directory on macOS
pub const MACOS_STEAMAPPS_SUBDIR: &str = "Library/Application Support/Steam/SteamApps";

/// Help text for the help flag
pub const HELP_HELP: &str = "\"--help\" will display this message.";

/// Help text for the positional SteamApps directory argument
pub const STEAMAPPS_DIR_HELP: &str = "\"steamapps_dir\" is an optional argument to specify the filepath to the SteamApps directory. If not given, the default SteamApps path for the current OS will be used.";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Show which maps would be copied without copying them";

/// Help text for the keep-going command-line option
pub const KEEP_GOING_HELP: &str = "Continue with the remaining maps when a copy fails";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Also write log records to this file";

/// Help text for the version command-line option
pub const VERSION_HELP: &str = "Print version information";

/// Name of the installed binary, shown in the usage text
pub const BIN_NAME: &str = "workshop-maps";
