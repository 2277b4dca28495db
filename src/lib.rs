//! Copies Steam Workshop maps into the Team Fortress 2 maps folder
//!
//! Workshop downloads end up in `SteamApps/workshop/content/440/<item>/`,
//! where the game does not look for maps. This crate finds every `.bsp`
//! there and copies it, flat, into `SteamApps/common/Team Fortress 2/tf/maps`.

pub mod cli;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod file_ops;
pub mod logging;
pub mod steam;
pub mod workflow;

use crate::cli::RunOptions;
use crate::errors::{Result, copy_failures_error};
use crate::workflow::{ProcessingOptions, WorkflowContext, copy_workshop_maps};

pub mod prelude {
    pub use crate::cli::{CliAction, RunOptions, show_help, validate_args};
    pub use crate::errors::{
        copy_failures_error, default_directory_not_found_error, file_operation_error,
        invalid_arguments_error, unrecognized_os_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::logging::{format_message, init_logger, verbosity_level};
    pub use crate::run;
}

/// Runs a copy with options taken from the command line
///
/// # Errors
/// Returns the first error of the run, or a copy failures error when
/// `keep_going` is set and at least one map could not be copied.
pub fn run(options: &RunOptions) -> Result<WorkflowContext> {
    let context = copy_workshop_maps(&ProcessingOptions::from(options))?;

    if context.stats.errors > 0 {
        return Err(copy_failures_error(context.stats.errors));
    }

    Ok(context)
}
