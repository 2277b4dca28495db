//! File operations module
//!
//! This module contains components for copying maps into the game folder.

mod actions;

pub use actions::{FileActionResult, copy_map_file};
