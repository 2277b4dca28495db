//! Workflow engine
//!
//! This module contains the engine that resolves the folders, walks the
//! workshop and copies every map it finds.

use std::path::{Path, PathBuf};

use log::{debug, error, info};

use crate::cli::RunOptions;
use crate::discovery::walk_map_files;
use crate::errors::{Result, file_operation_error};
use crate::file_ops::copy_map_file;
use crate::steam::{GamePaths, resolve_steamapps_dir};

use super::context::{PlannedOperation, WorkflowContext};

/// Options for copying maps
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessingOptions {
    /// Explicit SteamApps directory; `None` means use the OS default
    pub steamapps_dir: Option<PathBuf>,
    /// Whether to only simulate the copies
    pub dry_run: bool,
    /// Whether to continue after a failed copy
    pub keep_going: bool,
}

impl From<&RunOptions> for ProcessingOptions {
    fn from(options: &RunOptions) -> Self {
        ProcessingOptions {
            steamapps_dir: options.steamapps_dir.clone(),
            dry_run: options.dry_run,
            keep_going: options.keep_going,
        }
    }
}

/// Copies every workshop map into the game's maps folder
///
/// This function orchestrates the workflow steps:
/// 1. Resolve the SteamApps directory (explicit or OS default)
/// 2. Derive the workshop and maps folders
/// 3. Walk the workshop folder and copy every map, logging `source => destination`
///
/// # Returns
/// * `Result<WorkflowContext>` - The workflow context with statistics or an error
///
/// # Errors
/// * Returns an error if the SteamApps directory cannot be resolved
/// * Returns the first copy error unless `keep_going` is set
pub fn copy_workshop_maps(options: &ProcessingOptions) -> Result<WorkflowContext> {
    let steamapps_dir = resolve_steamapps_dir(options.steamapps_dir.as_deref())?;
    copy_maps_in(&steamapps_dir, options)
}

/// Copies every workshop map found under a known SteamApps directory
///
/// `options.steamapps_dir` is ignored; `steamapps_dir` is used instead.
pub fn copy_maps_in(steamapps_dir: &Path, options: &ProcessingOptions) -> Result<WorkflowContext> {
    let steamapps_dir = std::path::absolute(steamapps_dir)
        .map_err(|e| file_operation_error(e, steamapps_dir.to_path_buf(), "resolve"))?;
    let paths = GamePaths::from_steamapps(&steamapps_dir);
    debug!(
        "Copying maps from {} to {}",
        paths.workshop_dir.display(),
        paths.maps_dir.display()
    );

    let mut context = WorkflowContext::new(paths.clone(), options.dry_run);

    for map in walk_map_files(&paths.workshop_dir, &paths.maps_dir) {
        context.increment_files_found();

        match copy_map_file(&map, !options.dry_run) {
            Ok(result) if result.performed => {
                context.record_copy(result.bytes_copied);
                info!(
                    "{} => {}",
                    result.source_path.display(),
                    result.target_path.display()
                );
            }
            Ok(result) => {
                info!(
                    "[dry run] {} => {}",
                    result.source_path.display(),
                    result.target_path.display()
                );
                context.add_planned_operation(PlannedOperation {
                    source: result.source_path,
                    destination: result.target_path,
                });
            }
            Err(e) if options.keep_going => {
                error!("{e}");
                context.increment_errors();
            }
            Err(e) => return Err(e),
        }
    }

    let stats = &context.stats;
    if options.dry_run {
        info!("{} map(s) would be copied (dry run)", stats.files_found);
    } else {
        info!(
            "Copied {} of {} map(s){}",
            stats.files_copied,
            stats.files_found,
            if stats.errors > 0 {
                format!(", {} failed", stats.errors)
            } else {
                String::new()
            }
        );
    }

    Ok(context)
}
