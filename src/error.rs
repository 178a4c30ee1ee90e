//! Error types for path and tree operations.

use std::io;
use std::path::PathBuf;

/// Boxed error carried by [`FsError::VisitorAborted`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Filesystem error type with contextual variants.
///
/// Every variant names the path involved. OS failures keep the operation that
/// was attempted and the underlying [`io::Error`] as their source.
///
/// A missing entry is *not* an error at this level: [`File::classify`]
/// reports it as [`FileType::Missing`]. `NotFound` and `AlreadyExists` only
/// come from the tree operations, and only when the caller did not ask for
/// them to be tolerated.
///
/// [`File::classify`]: crate::File::classify
/// [`FileType::Missing`]: crate::FileType::Missing
///
/// # Examples
///
/// ```rust
/// use fstree::FsError;
/// use std::path::PathBuf;
///
/// let err = FsError::NotFound {
///     operation: "remove",
///     path: PathBuf::from("/missing"),
/// };
/// assert_eq!(err.to_string(), "remove: not found: /missing");
/// ```
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum FsError {
    /// An operating system call failed.
    #[error("{operation} failed for {path}: {source}")]
    System {
        /// The operation that failed (`stat`, `mkdir`, `readdir`, ...).
        operation: &'static str,
        /// The path involved in the operation.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Path already exists when it shouldn't.
    #[error("{operation}: already exists: {path}")]
    AlreadyExists {
        /// The operation that failed.
        operation: &'static str,
        /// The path that already exists.
        path: PathBuf,
    },

    /// Path does not exist when it should.
    #[error("{operation}: not found: {path}")]
    NotFound {
        /// The operation that failed.
        operation: &'static str,
        /// The path that was not found.
        path: PathBuf,
    },

    /// A directory visitor gave up.
    #[error("visitor aborted at {path}: {source}")]
    VisitorAborted {
        /// The entry the visitor was handling.
        path: PathBuf,
        /// The visitor's own error.
        #[source]
        source: BoxError,
    },
}

impl FsError {
    /// Wraps an OS failure with the operation and path it happened on.
    pub fn system(operation: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        FsError::System {
            operation,
            path: path.into(),
            source,
        }
    }

    /// Wraps a visitor's failure so it can travel through a walk as an `FsError`.
    pub fn visitor(path: impl Into<PathBuf>, source: impl Into<BoxError>) -> Self {
        FsError::VisitorAborted {
            path: path.into(),
            source: source.into(),
        }
    }

    /// The path this error is about.
    pub fn path(&self) -> &std::path::Path {
        match self {
            FsError::System { path, .. }
            | FsError::AlreadyExists { path, .. }
            | FsError::NotFound { path, .. }
            | FsError::VisitorAborted { path, .. } => path,
        }
    }

    /// The closest [`io::ErrorKind`] for this error.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            FsError::System { source, .. } => source.kind(),
            FsError::AlreadyExists { .. } => io::ErrorKind::AlreadyExists,
            FsError::NotFound { .. } => io::ErrorKind::NotFound,
            FsError::VisitorAborted { .. } => io::ErrorKind::Other,
        }
    }

    /// The raw OS error code, if this error came from the OS.
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            FsError::System { source, .. } => source.raw_os_error(),
            _ => None,
        }
    }
}

impl From<FsError> for io::Error {
    fn from(error: FsError) -> Self {
        match error {
            FsError::System { source, .. } => source,
            other => io::Error::new(other.kind(), other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fs_error_not_found_display() {
        let err = FsError::NotFound {
            operation: "remove",
            path: PathBuf::from("/missing"),
        };
        assert_eq!(err.to_string(), "remove: not found: /missing");
    }

    #[test]
    fn fs_error_already_exists_display() {
        let err = FsError::AlreadyExists {
            operation: "mkdir",
            path: PathBuf::from("/exists"),
        };
        assert_eq!(err.to_string(), "mkdir: already exists: /exists");
    }

    #[test]
    fn fs_error_system_display_includes_operation_and_source() {
        let err = FsError::system(
            "rmdir",
            "/busy",
            io::Error::new(io::ErrorKind::Other, "directory not empty"),
        );
        let msg = err.to_string();
        assert!(msg.starts_with("rmdir failed for /busy"));
        assert!(msg.contains("directory not empty"));
    }

    #[test]
    fn fs_error_visitor_keeps_source() {
        let err = FsError::visitor("/a/b", "stop here");
        assert_eq!(err.path(), std::path::Path::new("/a/b"));
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("stop here"));
    }

    #[test]
    fn fs_error_kind_mapping() {
        let exists = FsError::AlreadyExists {
            operation: "mkdir",
            path: PathBuf::from("/x"),
        };
        let missing = FsError::NotFound {
            operation: "remove",
            path: PathBuf::from("/x"),
        };
        let denied = FsError::system("stat", "/x", io::ErrorKind::PermissionDenied.into());
        assert_eq!(exists.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(missing.kind(), io::ErrorKind::NotFound);
        assert_eq!(denied.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn fs_error_raw_os_error_only_for_system() {
        let err = FsError::system("mkdir", "/x", io::Error::from_raw_os_error(13));
        assert_eq!(err.raw_os_error(), Some(13));

        let err = FsError::NotFound {
            operation: "remove",
            path: PathBuf::from("/x"),
        };
        assert_eq!(err.raw_os_error(), None);
    }

    #[test]
    fn fs_error_into_io_error() {
        let err = FsError::system("unlink", "/x", io::Error::from_raw_os_error(2));
        let io_err: io::Error = err.into();
        assert_eq!(io_err.raw_os_error(), Some(2));

        let err = FsError::AlreadyExists {
            operation: "mkdir",
            path: PathBuf::from("/x"),
        };
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::AlreadyExists);
        assert!(io_err.to_string().contains("/x"));
    }
}
