//! Core value types: entry classification, directory modes and policy flags.

/// Classification of a filesystem entry.
///
/// `Missing` is an ordinary outcome, not an error: it is what
/// [`File::classify`](crate::File::classify) reports when the entry, or one
/// of its ancestors, does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FileType {
    /// Nothing exists at this path.
    Missing,
    /// Regular file.
    Regular,
    /// Directory.
    Directory,
    /// Symbolic link (the link itself, never its target).
    Symlink,
    /// Anything else: device, socket, fifo.
    Unknown,
}

impl FileType {
    /// Classifies a type reported by the OS.
    pub fn from_std(file_type: std::fs::FileType) -> Self {
        if file_type.is_file() {
            FileType::Regular
        } else if file_type.is_dir() {
            FileType::Directory
        } else if file_type.is_symlink() {
            FileType::Symlink
        } else {
            FileType::Unknown
        }
    }

    /// Returns `true` if nothing exists at the path.
    #[inline]
    pub fn is_missing(&self) -> bool {
        *self == FileType::Missing
    }

    /// Returns `true` if this is a regular file.
    #[inline]
    pub fn is_file(&self) -> bool {
        *self == FileType::Regular
    }

    /// Returns `true` if this is a directory.
    #[inline]
    pub fn is_dir(&self) -> bool {
        *self == FileType::Directory
    }

    /// Returns `true` if this is a symbolic link.
    #[inline]
    pub fn is_symlink(&self) -> bool {
        *self == FileType::Symlink
    }
}

/// Unix-style permissions stored as a mode bitmask.
///
/// Only passed through to directory creation. On non-Unix targets the mode is
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Permissions(u32);

impl Permissions {
    /// Create permissions from a Unix mode (e.g., 0o755).
    #[inline]
    pub const fn from_mode(mode: u32) -> Self {
        Self(mode & 0o7777)
    }

    /// Get the raw mode value.
    #[inline]
    pub const fn mode(&self) -> u32 {
        self.0
    }

    /// Default permissions for a new directory (0o755 = rwxr-xr-x).
    #[inline]
    pub const fn default_dir() -> Self {
        Self(0o755)
    }
}

impl Default for Permissions {
    fn default() -> Self {
        Self::default_dir()
    }
}

/// Policy flags for [`File::mkdir`](crate::File::mkdir) and
/// [`File::remove`](crate::File::remove).
///
/// * `permissive`: for mkdir, an existing directory at the leaf is fine. For
///   remove, a missing target is fine.
/// * `recursive`: for mkdir, create missing ancestors. For remove, delete a
///   directory's contents before the directory itself.
///
/// Neither flag ever hides an OS failure.
///
/// # Example
///
/// ```rust
/// use fstree::FileFlags;
///
/// let flags = FileFlags::RECURSIVE.with_permissive(true);
/// assert_eq!(flags, FileFlags::ALL);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileFlags {
    /// Tolerate an already-existing (mkdir) or missing (remove) target.
    pub permissive: bool,
    /// Create ancestors (mkdir) or descend into directories (remove).
    pub recursive: bool,
}

impl FileFlags {
    /// Strict, single-level.
    pub const NONE: Self = Self {
        permissive: false,
        recursive: false,
    };

    /// Tolerant, single-level.
    pub const PERMISSIVE: Self = Self {
        permissive: true,
        recursive: false,
    };

    /// Strict, whole tree.
    pub const RECURSIVE: Self = Self {
        permissive: false,
        recursive: true,
    };

    /// Tolerant, whole tree (`mkdir -p` / `rm -rf`).
    pub const ALL: Self = Self {
        permissive: true,
        recursive: true,
    };

    /// Returns a copy with `permissive` set to `value`.
    #[inline]
    pub const fn with_permissive(self, value: bool) -> Self {
        Self {
            permissive: value,
            ..self
        }
    }

    /// Returns a copy with `recursive` set to `value`.
    #[inline]
    pub const fn with_recursive(self, value: bool) -> Self {
        Self {
            recursive: value,
            ..self
        }
    }
}
