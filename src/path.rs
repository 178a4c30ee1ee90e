//! # Path
//!
//! An owned, growable path buffer that is edited in place.
//!
//! ## Responsibility
//! - Hold one filesystem path as raw bytes, exactly as the OS spells it
//! - Append, join, and split paths with plain byte rules (no `.`/`..`
//!   resolution, no symlink lookups)
//! - Prefix relative paths with the current working directory
//!
//! ## Dependencies
//! - [`FsError`] for the one fallible operation, [`Path::set_absolute`]
//!
//! ## Separator rules
//!
//! Only `/` is a separator. Appending keeps exactly one `/` between the two
//! pieces; appending something that starts with `/` replaces the whole path.
//!
//! ```rust
//! use fstree::Path;
//!
//! let mut path = Path::from("/var");
//! path.append("log");
//! path.append("syslog");
//! assert_eq!(path, "/var/log/syslog");
//!
//! path.append("/etc");
//! assert_eq!(path, "/etc");
//! ```
//!
//! ## Encoding
//!
//! Names are not required to be UTF-8. A `Path` built from an [`OsStr`] keeps
//! its bytes untouched, so an entry called `caf\xe9.txt` can be walked and
//! removed like any other. Use [`Path::to_str`] or [`Path::to_string_lossy`]
//! when text is needed.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fmt;

use crate::FsError;

/// Capacity reserved by [`Path::new`] so the first append does not reallocate.
const INITIAL_CAPACITY: usize = 16;

/// A mutable, owned filesystem path.
///
/// Unlike [`std::path::PathBuf`], a `Path` never interprets its contents
/// beyond looking for `/`. Input is cut at the first NUL byte, since the OS
/// could not see anything past it anyway.
///
/// # Example
///
/// ```rust
/// use fstree::Path;
///
/// let file = Path::from("/srv/data/report.csv");
/// assert_eq!(file.dirname(), "/srv/data");
/// assert_eq!(file.basename(), "report.csv");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "std::path::PathBuf", into = "std::path::PathBuf")
)]
pub struct Path {
    given: Vec<u8>,
}

impl Path {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self {
            given: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// The path as an [`OsStr`].
    #[inline]
    pub fn as_os_str(&self) -> &OsStr {
        os_str(&self.given)
    }

    /// The raw bytes of the path.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.given
    }

    /// The path as a string slice, if it is valid UTF-8.
    pub fn to_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.given).ok()
    }

    /// The path as text, with invalid UTF-8 replaced by `U+FFFD`.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.given)
    }

    /// The path as a [`std::path::Path`], ready for `std::fs` calls.
    #[inline]
    pub fn as_std_path(&self) -> &std::path::Path {
        std::path::Path::new(self.as_os_str())
    }

    /// Length of the path in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.given.len()
    }

    /// Returns `true` for the empty path.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.given.is_empty()
    }

    /// Cuts the path back to `len` bytes.
    ///
    /// Only used to undo an [`append`](Self::append).
    pub(crate) fn truncate(&mut self, len: usize) {
        self.given.truncate(len);
    }

    fn ends_with_separator(&self) -> bool {
        self.given.last() == Some(&b'/')
    }

    fn last_separator(&self) -> Option<usize> {
        self.given.iter().rposition(|&b| b == b'/')
    }

    /// Prefixes the path with the current working directory.
    ///
    /// The result is `cwd + "/" + path`, byte for byte, so a working
    /// directory of `/` gives `//path`.
    ///
    /// A path that already ends in `/` is taken to be absolute and left
    /// alone. This looks only at the *last* byte: `"sub/"` is left unchanged
    /// even though it is relative, and `"/etc"` is prefixed even though it is
    /// absolute.
    ///
    /// # Errors
    ///
    /// - [`FsError::System`] with operation `getcwd` if the working directory
    ///   cannot be read (removed, no permission)
    ///
    /// # Example
    ///
    /// ```rust
    /// use fstree::Path;
    ///
    /// let mut path = Path::from("notes.txt");
    /// path.set_absolute()?;
    /// let cwd = std::env::current_dir()?;
    /// assert!(path.as_std_path().starts_with(&cwd));
    /// assert!(path.as_bytes().ends_with(b"/notes.txt"));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn set_absolute(&mut self) -> Result<(), FsError> {
        if self.ends_with_separator() {
            return Ok(());
        }

        let cwd = std::env::current_dir()
            .map_err(|e| FsError::system("getcwd", self.as_std_path(), e))?;
        self.prefix_with(cwd.as_os_str());
        Ok(())
    }

    fn prefix_with(&mut self, dir: &OsStr) {
        let dir = dir.as_encoded_bytes();
        let mut buf = Vec::with_capacity(dir.len() + 1 + self.given.len());
        buf.extend_from_slice(dir);
        buf.push(b'/');
        buf.extend_from_slice(&self.given);
        self.given = buf;
    }

    /// Returns an absolute copy of this path. See [`set_absolute`](Self::set_absolute).
    pub fn absolute(&self) -> Result<Path, FsError> {
        let mut path = self.clone();
        path.set_absolute()?;
        Ok(path)
    }

    /// Appends `more` to the path.
    ///
    /// - empty `more`: nothing happens
    /// - `more` starts with `/`: it replaces the path
    /// - otherwise: `more` is added after a single `/` (none is added to an
    ///   empty path or after a trailing `/`)
    ///
    /// # Example
    ///
    /// ```rust
    /// use fstree::Path;
    ///
    /// let mut path = Path::new();
    /// path.append("a");
    /// path.append("b");
    /// assert_eq!(path, "a/b");
    /// ```
    pub fn append(&mut self, more: impl AsRef<OsStr>) {
        let more = until_nul(more.as_ref().as_encoded_bytes());
        if more.is_empty() {
            return;
        }

        if more[0] == b'/' {
            self.given.clear();
        } else if !self.given.is_empty() && !self.ends_with_separator() {
            self.given.push(b'/');
        }
        self.given.extend_from_slice(more);
    }

    /// Appends another path. Same rules as [`append`](Self::append).
    pub fn append_path(&mut self, more: &Path) {
        self.append(more.as_os_str());
    }

    /// Returns a copy of this path with `more` appended.
    pub fn join(&self, more: impl AsRef<OsStr>) -> Path {
        let mut path = self.clone();
        path.append(more);
        path
    }

    /// Returns a copy of this path with another path appended.
    pub fn join_path(&self, more: &Path) -> Path {
        self.join(more.as_os_str())
    }

    /// Keeps only what follows the last `/`.
    ///
    /// A path without any `/` is already its own basename and is left
    /// unchanged.
    pub fn set_basename(&mut self) {
        if let Some(idx) = self.last_separator() {
            self.given.drain(..=idx);
        }
    }

    /// Returns the basename of this path. See [`set_basename`](Self::set_basename).
    pub fn basename(&self) -> Path {
        let mut path = self.clone();
        path.set_basename();
        path
    }

    /// Keeps only what precedes the last `/`.
    ///
    /// A path without any `/` has no directory part and becomes *empty*
    /// (not `"."`). The root's parent, `"/a"` → `""`, is empty too.
    pub fn set_dirname(&mut self) {
        match self.last_separator() {
            Some(idx) => self.given.truncate(idx),
            None => self.given.clear(),
        }
    }

    /// Returns the dirname of this path. See [`set_dirname`](Self::set_dirname).
    pub fn dirname(&self) -> Path {
        let mut path = self.clone();
        path.set_dirname();
        path
    }
}

fn until_nul(bytes: &[u8]) -> &[u8] {
    match bytes.iter().position(|&b| b == 0) {
        Some(idx) => &bytes[..idx],
        None => bytes,
    }
}

#[cfg(unix)]
fn os_str(bytes: &[u8]) -> &OsStr {
    use std::os::unix::ffi::OsStrExt;
    OsStr::from_bytes(bytes)
}

#[cfg(not(unix))]
fn os_str(bytes: &[u8]) -> &OsStr {
    // SAFETY: every byte string held by a `Path` comes from
    // `OsStr::as_encoded_bytes` or a `str`, and is only cut or joined next
    // to an ASCII `/` or NUL.
    unsafe { OsStr::from_encoded_bytes_unchecked(bytes) }
}

impl Default for Path {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&OsStr> for Path {
    fn from(source: &OsStr) -> Self {
        Self {
            given: until_nul(source.as_encoded_bytes()).to_vec(),
        }
    }
}

impl From<OsString> for Path {
    fn from(source: OsString) -> Self {
        Self::from(source.as_os_str())
    }
}

impl From<&str> for Path {
    fn from(source: &str) -> Self {
        Self::from(OsStr::new(source))
    }
}

impl From<String> for Path {
    fn from(source: String) -> Self {
        Self::from(source.as_str())
    }
}

impl From<&std::path::Path> for Path {
    fn from(source: &std::path::Path) -> Self {
        Self::from(source.as_os_str())
    }
}

impl From<std::path::PathBuf> for Path {
    fn from(source: std::path::PathBuf) -> Self {
        Self::from(source.as_path())
    }
}

impl From<Path> for std::path::PathBuf {
    fn from(path: Path) -> Self {
        path.as_std_path().to_path_buf()
    }
}

// `From<&Path> for std::path::PathBuf` is provided by std's blanket
// `impl<T: ?Sized + AsRef<OsStr>> From<&T> for PathBuf`, via `AsRef<OsStr>` below.

impl AsRef<OsStr> for Path {
    fn as_ref(&self) -> &OsStr {
        self.as_os_str()
    }
}

impl AsRef<std::path::Path> for Path {
    fn as_ref(&self) -> &std::path::Path {
        self.as_std_path()
    }
}

impl PartialEq<str> for Path {
    fn eq(&self, other: &str) -> bool {
        self.given == other.as_bytes()
    }
}

impl PartialEq<&str> for Path {
    fn eq(&self, other: &&str) -> bool {
        self.given == other.as_bytes()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_std_path().display(), f)
    }
}

// ============================================================================
// Tests
// ============================================================================
