//! # fstree
//!
//! Path buffers, cached file classification, one-level directory walking, and
//! recursive `mkdir -p` / `rm -r` built on top of them.
//!
//! ---
//!
//! ## Quick Start
//!
//! ```rust
//! use fstree::{File, FileFlags, FileType, Path, Permissions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let tmp = tempfile::tempdir()?;
//! let root = Path::from(tmp.path());
//!
//! // mkdir -p <root>/project/src
//! let mut src = File::new(root.join("project/src"));
//! src.mkdir(Permissions::default_dir(), FileFlags::RECURSIVE)?;
//! std::fs::write(src.path().join("main.rs").as_std_path(), b"fn main() {}")?;
//!
//! // ls <root>/project/src
//! src.iterate_directory(|child, name| {
//!     assert_eq!(name, "main.rs");
//!     assert_eq!(child.classify()?, FileType::Regular);
//!     Ok::<_, fstree::FsError>(())
//! })?;
//!
//! // rm -r <root>/project
//! let mut project = File::new(root.join("project"));
//! project.remove(FileFlags::RECURSIVE)?;
//! assert!(!project.exists()?);
//! # Ok(())
//! # }
//! ```
//!
//! ---
//!
//! ## Core Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Path`] | Owned, growable byte path with append/join/dirname/basename |
//! | [`File`] | A `Path` plus a lazily cached [`FileType`] |
//! | [`FileType`] | Missing, Regular, Directory, Symlink, Unknown |
//! | [`FileFlags`] | `permissive` / `recursive` policy for mkdir and remove |
//! | [`Permissions`] | Mode bits for new directories |
//! | [`FsError`] | Error type with path and operation context |
//!
//! ---
//!
//! ## Error Handling
//!
//! All fallible operations return `Result<T, FsError>`. A missing entry is
//! not an error for [`File::classify`]; it is [`FileType::Missing`].
//!
//! ```rust
//! use fstree::{remove_tree, FileFlags, FsError};
//!
//! let err = remove_tree("/no/such/fstree/path", FileFlags::NONE).unwrap_err();
//! assert!(matches!(err, FsError::NotFound { .. }));
//!
//! // permissive turns the same call into a no-op
//! remove_tree("/no/such/fstree/path", FileFlags::PERMISSIVE)?;
//! # Ok::<(), FsError>(())
//! ```
//!
//! Recursive operations stop at the first OS error and leave the tree as it
//! is at that point.
//!
//! ---
//!
//! ## Thread Safety
//!
//! Everything here is synchronous and blocking. [`Path`] and [`File`] are
//! plain `Send + Sync` values whose mutating methods take `&mut self`; share
//! one across threads behind a lock. Distinct instances naming overlapping
//! trees are independent as far as this crate goes, but still race at the
//! OS level.
//!
//! ---
//!
//! ## Logging
//!
//! Operations emit [`tracing`] events: `debug` for mkdir/remove steps,
//! `trace` for metadata queries and visited entries. No subscriber is
//! installed by this crate.
//!
//! ---
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Enable serialization for [`Path`], [`FileType`], [`FileFlags`], [`Permissions`] |

// Private modules
mod error;
mod file;
mod path;
mod tree;
mod types;
mod walk;

// Public re-exports - error types
pub use error::{BoxError, FsError};

// Public re-exports - core types
pub use file::File;
pub use path::Path;
pub use types::{FileFlags, FileType, Permissions};

// Public re-exports - tree operations
pub use tree::{mkdir_tree, remove_tree};
