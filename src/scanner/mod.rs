mod filter;

pub use filter::{ContentRule, ExclusionFilter, FileFilter};

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, SpecGuardError};

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all non-excluded regular files.
    ///
    /// # Errors
    /// Returns an error if the root or any directory below it cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// Depth-first, name-sorted directory walk.
///
/// Depth counts directories below the root: files directly in the root are
/// at depth 0. Directories deeper than `max_depth` are never read. Excluded
/// directories are pruned before descent. The root itself is never checked
/// against the filter.
///
/// Symlinks are followed. A link whose target cannot be resolved is fatal
/// unless its own path is excluded by a glob.
pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
    max_depth: Option<usize>,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self {
            filter,
            max_depth: None,
        }
    }

    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    fn check_root(root: &Path) -> Result<()> {
        let metadata = std::fs::metadata(root).map_err(|source| SpecGuardError::DirRead {
            path: root.to_path_buf(),
            source,
        })?;
        if metadata.is_dir() {
            Ok(())
        } else {
            Err(SpecGuardError::NotADirectory(root.to_path_buf()))
        }
    }

    /// Entries walkdir fails to resolve never reach `filter_entry`; their
    /// raw path is checked here with content rules disabled.
    fn is_excluded_unresolved(&self, error: &walkdir::Error) -> bool {
        error.depth() > 0
            && error.path().is_some_and(|path| {
                let excluded = self.filter.is_excluded(path, false);
                if excluded {
                    tracing::debug!(path = %path.display(), "skipping excluded unresolved entry");
                }
                excluded
            })
    }

    fn walker(&self, root: &Path) -> WalkDir {
        let walker = WalkDir::new(root).follow_links(true).sort_by_file_name();
        // walkdir counts the root's children as depth 1
        match self.max_depth {
            Some(depth) => walker.max_depth(depth.saturating_add(1)),
            None => walker,
        }
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        Self::check_root(root)?;

        let entries = self.walker(root).into_iter().filter_entry(|entry| {
            entry.depth() == 0 || !self.filter.is_excluded(entry.path(), entry.file_type().is_file())
        });

        let mut files = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(source) => {
                    if self.is_excluded_unresolved(&source) {
                        continue;
                    }
                    let path = source
                        .path()
                        .map_or_else(|| root.to_path_buf(), Path::to_path_buf);
                    return Err(SpecGuardError::Traversal { path, source });
                }
            };

            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }

        tracing::debug!(root = %root.display(), files = files.len(), "scan complete");
        Ok(files)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
