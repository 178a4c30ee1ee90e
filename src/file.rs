//! # File
//!
//! A [`Path`] paired with a lazily computed, cached [`FileType`].
//!
//! ## Responsibility
//! - Own exactly one path
//! - Run at most one metadata query per classification, then memoize it
//! - Forget the memoized type whenever the path or the entry changes
//!
//! Directory walking lives in `walk.rs`; mkdir/remove in `tree.rs`. Both are
//! further `impl File` blocks.

use std::io;

use crate::{FileType, FsError, Path};

/// A filesystem entry named by an owned [`Path`].
///
/// The classification is queried on first demand with `lstat` semantics
/// (a symbolic link is reported as [`FileType::Symlink`], never followed)
/// and cached until [`invalidate`](Self::invalidate) is called. The tree
/// operations invalidate on their own after they change the entry.
///
/// # Example
///
/// ```rust
/// use fstree::{File, FileType};
///
/// let mut file = File::new("/definitely/not/here");
/// assert_eq!(file.classify()?, FileType::Missing);
/// assert!(!file.exists()?);
/// # Ok::<(), fstree::FsError>(())
/// ```
#[derive(Debug, Clone)]
pub struct File {
    pub(crate) path: Path,
    cached: Option<FileType>,
}

impl File {
    /// Creates a file for `path`. Nothing is queried yet.
    pub fn new(path: impl Into<Path>) -> Self {
        Self {
            path: path.into(),
            cached: None,
        }
    }

    /// The path of this file.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gives the path back, dropping the cached type.
    pub fn into_path(self) -> Path {
        self.path
    }

    /// The cached type, if one is currently trusted. Never touches the disk.
    #[inline]
    pub fn cached_type(&self) -> Option<FileType> {
        self.cached
    }

    /// Forgets the cached type. The path is left untouched.
    #[inline]
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// Classifies the entry at this path.
    ///
    /// Returns the cached value when there is one. Otherwise queries the OS:
    /// a missing entry, a missing ancestor, or an ancestor that is not a
    /// directory all yield [`FileType::Missing`], which is cached like any
    /// other answer.
    ///
    /// # Errors
    ///
    /// - [`FsError::System`] with operation `stat` for any other failure
    ///   (permission denied, I/O error). The cache stays empty.
    pub fn classify(&mut self) -> Result<FileType, FsError> {
        if let Some(file_type) = self.cached {
            return Ok(file_type);
        }

        tracing::trace!(path = %self.path, "stat");
        let file_type = match std::fs::symlink_metadata(self.path.as_std_path()) {
            Ok(meta) => FileType::from_std(meta.file_type()),
            Err(e) if is_missing(&e) => FileType::Missing,
            Err(e) => return Err(FsError::system("stat", self.path.as_std_path(), e)),
        };

        self.cached = Some(file_type);
        Ok(file_type)
    }

    /// Returns `true` unless the entry is [`FileType::Missing`].
    pub fn exists(&mut self) -> Result<bool, FsError> {
        Ok(!self.classify()?.is_missing())
    }

    /// Same as [`classify`](Self::classify).
    pub fn file_type(&mut self) -> Result<FileType, FsError> {
        self.classify()
    }
}

/// `ENOENT` or `ENOTDIR`: the entry, or some ancestor of it, isn't there.
pub(crate) fn is_missing(error: &io::Error) -> bool {
    matches!(
        error.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}

impl From<Path> for File {
    fn from(path: Path) -> Self {
        Self::new(path)
    }
}

impl From<&str> for File {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}
