use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the workshop map copier
#[derive(Debug)]
pub enum Error {
    /// The command line could not be accepted
    InvalidArguments { message: String },
    /// No default SteamApps location is known for this operating system
    UnrecognizedOs { os: String },
    /// The user's home directory could not be determined
    HomeDirectoryNotFound,
    /// The computed default SteamApps directory does not exist
    DefaultDirectoryNotFound { path: PathBuf },
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// A keep-going run finished with failed copies
    CopyFailures { count: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArguments { message } => write!(f, "{message}"),
            Error::UnrecognizedOs { .. } => write!(
                f,
                "Could not detect OS. Please specify an absolute path to your SteamApps directory."
            ),
            Error::HomeDirectoryNotFound => write!(
                f,
                "Could not determine the home directory. Please specify an absolute path to your SteamApps directory."
            ),
            Error::DefaultDirectoryNotFound { .. } => write!(
                f,
                "Could not find SteamApps directory in its default location. Please specify an absolute path to your SteamApps directory."
            ),
            Error::FileOperation {
                source,
                path,
                operation,
            } => {
                write!(f, "Failed to {} file: {} ({source})", operation, path.display())
            }
            Error::CopyFailures { count } => {
                write!(f, "{count} map(s) could not be copied")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::FileOperation { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Custom Result type for the workshop map copier
///
/// # Examples
/// ```
/// use workshop_maps::prelude::{Result, invalid_arguments_error};
///
/// fn example_function(args: &[String]) -> Result<()> {
///     if args.len() > 1 {
///         return Err(invalid_arguments_error("Too many arguments."));
///     }
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create an invalid arguments error
pub fn invalid_arguments_error(message: &str) -> Error {
    Error::InvalidArguments {
        message: message.to_string(),
    }
}

/// Helper function to create an unrecognised OS error
pub fn unrecognized_os_error(os: &str) -> Error {
    Error::UnrecognizedOs { os: os.to_string() }
}

/// Helper function to create a missing default directory error
pub fn default_directory_not_found_error(path: PathBuf) -> Error {
    Error::DefaultDirectoryNotFound { path }
}

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a copy failures error
pub fn copy_failures_error(count: usize) -> Error {
    Error::CopyFailures { count }
}
