//! File operation functionality
//!
//! This module contains the function that copies a single map.

use std::path::PathBuf;

use fs_extra::file::{CopyOptions, copy};
use log::debug;

use crate::discovery::MapFile;
use crate::errors::{Result, file_operation_error};

/// Result of performing a file action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileActionResult {
    /// The source path
    pub source_path: PathBuf,
    /// The target path
    pub target_path: PathBuf,
    /// Number of bytes written (0 in simulation mode)
    pub bytes_copied: u64,
    /// Whether the file was actually copied
    pub performed: bool,
}

/// Copies a map to its destination
///
/// An existing destination file is overwritten. The destination folder is
/// not created; copying into a missing folder fails.
///
/// # Arguments
/// * `map` - The map and its destination
/// * `run_execution` - Whether to actually copy (true) or just simulate (false)
///
/// # Returns
/// * `Result<FileActionResult>` - The result of the file action or an error
///
/// # Errors
/// * Returns a file operation error if the copy fails
pub fn copy_map_file(map: &MapFile, run_execution: bool) -> Result<FileActionResult> {
    let source_path = &map.source;
    let target_path = &map.destination;

    if !run_execution {
        debug!(
            "Simulating copy: {} -> {}",
            source_path.display(),
            target_path.display()
        );
        return Ok(FileActionResult {
            source_path: source_path.clone(),
            target_path: target_path.clone(),
            bytes_copied: 0,
            performed: false,
        });
    }

    debug!(
        "Copying file: {} -> {}",
        source_path.display(),
        target_path.display()
    );
    let options = CopyOptions::new().overwrite(true);
    let bytes_copied = copy(source_path, target_path, &options).map_err(|e| {
        file_operation_error(std::io::Error::other(e), source_path.clone(), "copy")
    })?;

    Ok(FileActionResult {
        source_path: source_path.clone(),
        target_path: target_path.clone(),
        bytes_copied,
        performed: true,
    })
}
