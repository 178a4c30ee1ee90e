//! # Directory walking
//!
//! One-level, visitor-driven enumeration of a directory's children.
//!
//! ## Responsibility
//! - List the immediate children of a directory, skipping `.` and `..`
//! - Hand each child to a visitor already classified
//! - Reuse a single child [`File`] for the whole listing
//!
//! ## End of listing
//!
//! `readdir(3)` signals both "no more entries" and "read failed" with a null
//! return, and only `errno` tells them apart. [`std::fs::ReadDir`] clears
//! `errno` before each call and reports the two outcomes separately, as
//! `None` and `Some(Err(_))`. A `Some(Err(_))` is a failed walk, never a
//! short listing.
//!
//! Names are passed through as [`OsStr`], so an entry whose name is not
//! UTF-8 is visited like any other.

use std::ffi::OsStr;

use crate::{File, FsError};

/// The reusable child entry of one directory listing.
///
/// The directory's path is kept as a prefix; [`enter`](Self::enter) swaps the
/// last component and reclassifies in one step, so a child is never seen
/// with a type cached for its predecessor.
struct ChildSlot {
    file: File,
    base_len: usize,
}

impl ChildSlot {
    fn new(dir: &File) -> Self {
        let file = File::new(dir.path().clone());
        let base_len = file.path().len();
        Self { file, base_len }
    }

    fn enter(&mut self, name: &OsStr) -> Result<&mut File, FsError> {
        self.file.path.truncate(self.base_len);
        self.file.path.append(name);
        self.file.invalidate();
        self.file.classify()?;
        Ok(&mut self.file)
    }
}

impl File {
    /// Calls `visitor` once for each entry of this directory.
    ///
    /// The visitor gets the child, already classified, and the entry's name.
    /// The child is the same `File` for every call with its path rewritten,
    /// so clone it if it has to outlive the call. Entries come in the order
    /// the OS lists them.
    ///
    /// This file is assumed to be a directory; it is not classified first.
    ///
    /// The walk stops at the first error. A visitor's own error is returned
    /// as is, which is why the error type is the visitor's `E` (anything an
    /// [`FsError`] converts into).
    ///
    /// # Errors
    ///
    /// - [`FsError::System`] with operation `opendir` if the directory cannot
    ///   be opened, `readdir` if reading the listing fails, `stat` if a child
    ///   cannot be classified
    /// - whatever the visitor returns
    ///
    /// # Example
    ///
    /// ```rust
    /// use fstree::{File, FsError};
    ///
    /// let dir = tempfile::tempdir()?;
    /// std::fs::write(dir.path().join("a.txt"), b"")?;
    ///
    /// let mut names = Vec::new();
    /// File::new(dir.path()).iterate_directory(|child, name| {
    ///     assert!(child.cached_type().is_some());
    ///     names.push(name.to_string_lossy().into_owned());
    ///     Ok::<_, FsError>(())
    /// })?;
    /// assert_eq!(names, ["a.txt"]);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn iterate_directory<E, F>(&self, mut visitor: F) -> Result<(), E>
    where
        E: From<FsError>,
        F: FnMut(&mut File, &OsStr) -> Result<(), E>,
    {
        let dir_path = self.path.as_std_path();
        let entries =
            std::fs::read_dir(dir_path).map_err(|e| FsError::system("opendir", dir_path, e))?;
        let mut slot = ChildSlot::new(self);

        for entry in entries {
            let entry = entry.map_err(|e| FsError::system("readdir", dir_path, e))?;
            let name = entry.file_name();
            if name == "." || name == ".." {
                continue;
            }

            let child = slot.enter(&name)?;
            tracing::trace!(path = %child.path(), file_type = ?child.cached_type(), "visit");
            visitor(child, &name)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FileType;

    #[test]
    fn slot_restores_prefix_between_entries() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_str().unwrap();
        let mut slot = ChildSlot::new(&File::new(root));

        let first = slot.enter(OsStr::new("one")).unwrap();
        assert_eq!(*first.path(), format!("{root}/one").as_str());
        assert_eq!(first.cached_type(), Some(FileType::Missing));

        std::fs::create_dir(dir.path().join("two")).unwrap();
        let second = slot.enter(OsStr::new("two")).unwrap();
        assert_eq!(*second.path(), format!("{root}/two").as_str());
        assert_eq!(second.cached_type(), Some(FileType::Directory));
    }

    #[test]
    fn slot_handles_trailing_separator() {
        let mut slot = ChildSlot::new(&File::new("/nonexistent-fstree-dir/"));
        let child = slot.enter(OsStr::new("x")).unwrap();
        assert_eq!(*child.path(), "/nonexistent-fstree-dir/x");
    }

    #[test]
    fn open_failure_is_system_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone");
        let result = File::new(missing)
            .iterate_directory(|_, _| Ok::<_, FsError>(()));
        match result {
            Err(FsError::System { operation, .. }) => assert_eq!(operation, "opendir"),
            other => panic!("expected opendir failure, got {other:?}"),
        }
    }

    #[test]
    fn visitor_error_type_is_preserved() {
        #[derive(Debug, PartialEq)]
        enum Stop {
            Fs,
            Here(std::ffi::OsString),
        }
        impl From<FsError> for Stop {
            fn from(_: FsError) -> Self {
                Stop::Fs
            }
        }

        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("only"), b"").unwrap();

        let result = File::new(dir.path())
            .iterate_directory(|_, name| Err(Stop::Here(name.to_os_string())));
        assert_eq!(result, Err(Stop::Here("only".into())));
    }
}
