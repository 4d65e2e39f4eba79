//! Filesystem mechanics for organizing a directory.
//!
//! Provides the pieces the driver loop composes: category folder creation,
//! collision-free destination resolution, and the move operation itself,
//! along with the run counters and the organizer error type.

use crate::category::Category;
use std::fs;
use std::path::{Path, PathBuf};

/// Counters accumulated over one organization run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files successfully moved into a category folder.
    pub moved: usize,
    /// Entries skipped: directories, items already inside a category
    /// folder, ignored files, and files whose move failed.
    pub skipped: usize,
}

/// Errors that can occur while organizing a directory.
#[derive(Debug)]
pub enum OrganizeError {
    /// The target path does not exist or is not a directory.
    InvalidTarget { path: PathBuf },
    /// A category folder could not be created.
    DirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A file could not be moved to its resolved destination.
    FileMoveFailure {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for OrganizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTarget { path } => {
                write!(f, "{} is not a valid directory", path.display())
            }
            Self::DirectoryCreationFailed { path, source } => {
                write!(
                    f,
                    "Failed to create directory {}: {}",
                    path.display(),
                    source
                )
            }
            Self::FileMoveFailure { from, to, source } => {
                write!(
                    f,
                    "Failed to move {} to {}: {}",
                    from.display(),
                    to.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for OrganizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidTarget { .. } => None,
            Self::DirectoryCreationFailed { source, .. } => Some(source),
            Self::FileMoveFailure { source, .. } => Some(source),
        }
    }
}

/// Result type for organizer operations.
pub type OrganizeResult<T> = Result<T, OrganizeError>;

/// Moves files into category subfolders under a base directory.
pub struct FileOrganizer;

impl FileOrganizer {
    /// Creates the subfolder for every category under `base_path`.
    ///
    /// Idempotent: folders that already exist are left untouched. The
    /// catch-all `Others` folder is created too, so uncategorized files
    /// always have a destination.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dirsort::organizer::FileOrganizer;
    /// use std::path::Path;
    ///
    /// FileOrganizer::ensure_category_dirs(Path::new("/home/user/Downloads"))?;
    /// # Ok::<(), dirsort::organizer::OrganizeError>(())
    /// ```
    pub fn ensure_category_dirs(base_path: &Path) -> OrganizeResult<()> {
        if !base_path.is_dir() {
            return Err(OrganizeError::InvalidTarget {
                path: base_path.to_path_buf(),
            });
        }

        for category in Category::ALL {
            let dir = base_path.join(category.folder_name());
            if !dir.exists() {
                fs::create_dir(&dir).map_err(|e| OrganizeError::DirectoryCreationFailed {
                    path: dir.clone(),
                    source: e,
                })?;
            }
        }

        Ok(())
    }

    /// Resolves a destination path in `target_dir` that does not exist yet.
    ///
    /// Starts with `target_dir/file_name`; on collision, tries
    /// `stem(1).ext`, `stem(2).ext`, ... until an unused name is found.
    /// The counter is monotonic and uncapped.
    ///
    /// Existence is checked at call time; the caller is expected to use
    /// the returned path immediately.
    pub fn resolve_destination(target_dir: &Path, file_name: &str) -> PathBuf {
        let candidate = target_dir.join(file_name);
        if !candidate.exists() {
            return candidate;
        }

        let name = Path::new(file_name);
        let stem = name
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| file_name.to_string());
        let suffix = name
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();

        let mut counter = 1u64;
        loop {
            let candidate = target_dir.join(format!("{stem}({counter}){suffix}"));
            if !candidate.exists() {
                return candidate;
            }
            counter += 1;
        }
    }

    /// Moves a file to `destination` via rename.
    pub fn move_file(from: &Path, destination: &Path) -> OrganizeResult<()> {
        fs::rename(from, destination).map_err(|e| OrganizeError::FileMoveFailure {
            from: from.to_path_buf(),
            to: destination.to_path_buf(),
            source: e,
        })
    }
}
