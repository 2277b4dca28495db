//! Workshop folder scanning
//!
//! This module contains functions for walking the workshop folder and pairing
//! every map found with its flat destination in the maps folder.

use std::ffi::OsStr;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, trace, warn};
use walkdir::{DirEntry, WalkDir};

use crate::constants::MAP_EXTENSION;

/// A map found in the workshop folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapFile {
    /// Where the map was found
    pub source: PathBuf,
    /// Where the map will be copied to: the maps folder plus the file name
    pub destination: PathBuf,
}

impl MapFile {
    /// Pairs a source file with its destination inside `maps_dir`
    ///
    /// The source's subfolders are dropped, so maps with the same name in
    /// different workshop items share a destination.
    ///
    /// # Returns
    /// * `Option<MapFile>` - `None` when the source path has no file name
    pub fn new(source: PathBuf, maps_dir: &Path) -> Option<Self> {
        let destination = maps_dir.join(source.file_name()?);
        Some(MapFile {
            source,
            destination,
        })
    }
}

/// Whether a file name ends with the map extension (case-sensitive)
pub fn is_map_file(file_name: &OsStr) -> bool {
    file_name
        .as_encoded_bytes()
        .ends_with(MAP_EXTENSION.as_bytes())
}

/// Lazily walks `workshop_dir` and yields every map in it
///
/// The walk is depth-first and contents-first, visiting the entries of each
/// folder sorted by name, so the order (and thereby which of two maps with the
/// same name is copied last) is stable between runs. Symbolic links to folders are not
/// followed. A missing `workshop_dir` yields nothing; unreadable entries are
/// skipped with a warning.
///
/// # Arguments
/// * `workshop_dir` - The folder to walk
/// * `maps_dir` - The folder the maps will be copied to
pub fn walk_map_files<'a>(
    workshop_dir: &Path,
    maps_dir: &'a Path,
) -> impl Iterator<Item = MapFile> + 'a {
    debug!("Scanning workshop directory: {}", workshop_dir.display());

    WalkDir::new(workshop_dir)
        .contents_first(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                let missing_root = e.depth() == 0
                    && e.io_error().is_some_and(|io| io.kind() == ErrorKind::NotFound);
                if missing_root {
                    debug!("Workshop directory does not exist, nothing to copy");
                } else {
                    warn!("Skipping unreadable workshop entry: {e}");
                }
                None
            }
        })
        .filter(is_copyable_file)
        .filter(|entry| is_map_file(entry.file_name()))
        .filter_map(move |entry| {
            trace!("Found map: {}", entry.path().display());
            MapFile::new(entry.into_path(), maps_dir)
        })
}

/// Walks `workshop_dir` and collects every map in it
///
/// See [`walk_map_files`] for the traversal order.
pub fn find_map_files(workshop_dir: &Path, maps_dir: &Path) -> Vec<MapFile> {
    let maps: Vec<MapFile> = walk_map_files(workshop_dir, maps_dir).collect();
    debug!("Found {} maps in workshop directory", maps.len());
    maps
}

/// Regular files, and symbolic links that resolve to regular files
fn is_copyable_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}
