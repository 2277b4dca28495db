//! Workflow context
//!
//! This module defines the state collected while copying maps.

use std::path::PathBuf;

use crate::steam::GamePaths;

/// A copy that was skipped because of dry-run mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedOperation {
    /// The map that would be copied
    pub source: PathBuf,
    /// Where it would be copied to
    pub destination: PathBuf,
}

/// Context for the workflow
#[derive(Debug, Clone)]
pub struct WorkflowContext {
    /// The folders maps are copied between
    pub paths: GamePaths,
    /// Whether file operations are only simulated
    pub dry_run: bool,
    /// Statistics about the run
    pub stats: WorkflowStats,
    /// Planned operations for dry-run mode
    pub planned_operations: Vec<PlannedOperation>,
}

/// Statistics about the workflow
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowStats {
    /// Number of maps found in the workshop folder
    pub files_found: usize,
    /// Number of maps copied
    pub files_copied: usize,
    /// Number of bytes copied
    pub bytes_copied: u64,
    /// Number of failed copies
    pub errors: usize,
}

impl WorkflowContext {
    /// Creates a new workflow context
    pub fn new(paths: GamePaths, dry_run: bool) -> Self {
        WorkflowContext {
            paths,
            dry_run,
            stats: WorkflowStats::default(),
            planned_operations: Vec::new(),
        }
    }

    /// Adds a planned operation to the context
    pub fn add_planned_operation(&mut self, operation: PlannedOperation) {
        self.planned_operations.push(operation);
    }

    /// Increments the number of maps found
    pub fn increment_files_found(&mut self) {
        self.stats.files_found += 1;
    }

    /// Records a completed copy
    pub fn record_copy(&mut self, bytes: u64) {
        self.stats.files_copied += 1;
        self.stats.bytes_copied += bytes;
    }

    /// Increments the number of errors
    pub fn increment_errors(&mut self) {
        self.stats.errors += 1;
    }
}
