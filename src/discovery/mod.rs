//! Map discovery module
//!
//! This module contains components for walking the workshop folder and
//! finding the compiled maps in it.

mod scanner;

pub use scanner::{MapFile, find_map_files, is_map_file, walk_map_files};
