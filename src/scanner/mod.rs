//! Expands the paths given on the command line into the files to grade.

mod filter;

pub use filter::{FileFilter, IgnoreFilter};

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Every file under `root`, or `root` itself when it is not a directory.
    fn scan(&self, root: &Path) -> Vec<PathBuf>;

    /// Scans each of `roots` in order.
    fn scan_all(&self, roots: &[PathBuf]) -> Vec<PathBuf> {
        roots.iter().flat_map(|root| self.scan(root)).collect()
    }
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Vec<PathBuf> {
        // Non-directories pass through unchecked so a missing path is still
        // reported as not found.
        if !root.is_dir() {
            return if self.filter.should_include(root) {
                vec![root.to_path_buf()]
            } else {
                Vec::new()
            };
        }

        WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| !e.file_type().is_dir() && self.filter.should_include(e.path()))
            .map(walkdir::DirEntry::into_path)
            .collect()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
