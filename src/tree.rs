//! # Tree operations
//!
//! Recursive directory creation and removal, built from
//! [`File::classify`] and [`File::iterate_directory`].
//!
//! Both fail fast. The first OS error anywhere in the tree is returned and
//! whatever was already created or removed stays that way; there is no
//! rollback.

use crate::file::is_missing;
use crate::{File, FileFlags, FileType, FsError, Path, Permissions};

impl File {
    /// Creates this directory.
    ///
    /// | target is | result |
    /// |-----------|--------|
    /// | a directory, or a symlink to one | `Ok` if `flags.permissive`, else `AlreadyExists` |
    /// | anything else that exists | `AlreadyExists` |
    /// | missing | created with `mode` |
    ///
    /// With `flags.recursive`, missing ancestors are created first with the
    /// same mode. Ancestors that already exist are always fine; only the leaf
    /// is subject to `flags.permissive`. An empty parent (the root of an
    /// absolute path, or the working directory of a single-component relative
    /// one) is assumed to exist.
    ///
    /// Classification does not follow symlinks, but mkdir does: a link to a
    /// directory counts as that directory, so `mkdir -p` works through
    /// symlinked ancestors such as `/var/run -> /run`. A dangling link is an
    /// existing non-directory.
    ///
    /// # Errors
    ///
    /// - [`FsError::AlreadyExists`] as described above, for the leaf or for
    ///   an ancestor that exists but is not a directory
    /// - [`FsError::System`] from classifying or creating any level
    ///
    /// # Example
    ///
    /// ```rust
    /// use fstree::{File, FileFlags, FileType, Permissions};
    ///
    /// let tmp = tempfile::tempdir()?;
    /// let mut leaf = File::new(tmp.path().join("a/b/c"));
    /// leaf.mkdir(Permissions::default_dir(), FileFlags::RECURSIVE)?;
    /// assert_eq!(leaf.classify()?, FileType::Directory);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn mkdir(&mut self, mode: Permissions, flags: FileFlags) -> Result<(), FsError> {
        tracing::debug!(path = %self.path, "mkdir");

        match self.classify()? {
            FileType::Directory if flags.permissive => {
                tracing::debug!(path = %self.path, "already exists");
                return Ok(());
            }
            FileType::Symlink if flags.permissive && self.links_to_directory()? => {
                tracing::debug!(path = %self.path, "already exists (symlink to directory)");
                return Ok(());
            }
            FileType::Missing => {}
            _ => {
                return Err(FsError::AlreadyExists {
                    operation: "mkdir",
                    path: self.path.as_std_path().to_path_buf(),
                });
            }
        }

        if flags.recursive {
            let parent = self.path.dirname();
            tracing::debug!(path = %self.path, parent = %parent, "checking parent");
            if !parent.is_empty() {
                File::new(parent).mkdir(mode, flags.with_permissive(true))?;
            }
        }

        tracing::debug!(path = %self.path, mode = %format!("{:o}", mode.mode()), "creating");
        let result = create_dir(&self.path, mode);
        self.invalidate();
        result.map_err(|e| FsError::system("mkdir", self.path.as_std_path(), e))
    }

    /// Removes this entry.
    ///
    /// | target is | result |
    /// |-----------|--------|
    /// | missing | `Ok` if `flags.permissive`, else `NotFound` |
    /// | a directory | contents removed first if `flags.recursive`, then the directory |
    /// | anything else | unlinked (a symlink is removed, not its target) |
    ///
    /// Children are removed with the same flags, so an entry that disappears
    /// mid-walk (another process got there first) is only tolerated when
    /// `flags.permissive` is set.
    ///
    /// # Errors
    ///
    /// - [`FsError::NotFound`] for a missing target without `permissive`
    /// - [`FsError::System`] from any OS call, including `rmdir` on a
    ///   non-empty directory when `recursive` is not set
    pub fn remove(&mut self, flags: FileFlags) -> Result<(), FsError> {
        tracing::debug!(path = %self.path, "rm");

        let result = match self.classify()? {
            FileType::Missing if flags.permissive => return Ok(()),
            FileType::Missing => {
                return Err(FsError::NotFound {
                    operation: "remove",
                    path: self.path.as_std_path().to_path_buf(),
                });
            }
            FileType::Directory => {
                if flags.recursive {
                    self.iterate_directory(|child, _| child.remove(flags))?;
                }
                tracing::debug!(path = %self.path, "removing directory");
                std::fs::remove_dir(self.path.as_std_path()).map_err(|e| ("rmdir", e))
            }
            _ => std::fs::remove_file(self.path.as_std_path()).map_err(|e| ("unlink", e)),
        };

        self.invalidate();
        result.map_err(|(operation, e)| FsError::system(operation, self.path.as_std_path(), e))
    }

    /// Follows the link at this path. Dangling links are `false`.
    fn links_to_directory(&self) -> Result<bool, FsError> {
        tracing::trace!(path = %self.path, "stat (follow)");
        match std::fs::metadata(self.path.as_std_path()) {
            Ok(meta) => Ok(meta.is_dir()),
            Err(e) if is_missing(&e) => Ok(false),
            Err(e) => Err(FsError::system("stat", self.path.as_std_path(), e)),
        }
    }
}

fn create_dir(path: &Path, mode: Permissions) -> std::io::Result<()> {
    let mut builder = std::fs::DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode.mode());
    }
    #[cfg(not(unix))]
    let _ = mode;
    builder.create(path.as_std_path())
}

/// Creates the directory at `path`. See [`File::mkdir`].
///
/// ```rust
/// use fstree::{mkdir_tree, FileFlags, Permissions};
///
/// let tmp = tempfile::tempdir()?;
/// let target = tmp.path().join("x/y");
/// mkdir_tree(target.as_path(), Permissions::default_dir(), FileFlags::ALL)?;
/// assert!(target.is_dir());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn mkdir_tree(
    path: impl Into<Path>,
    mode: Permissions,
    flags: FileFlags,
) -> Result<(), FsError> {
    File::new(path).mkdir(mode, flags)
}

/// Removes the entry at `path`. See [`File::remove`].
pub fn remove_tree(path: impl Into<Path>, flags: FileFlags) -> Result<(), FsError> {
    File::new(path).remove(flags)
}
