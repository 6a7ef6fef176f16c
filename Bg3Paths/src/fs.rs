//! Filesystem stat probe
//!
//! [`FileSystem::stat`] is the only filesystem access path resolution performs.
//! [`HostFs`] asks the real filesystem; [`MemoryFs`] is an in-memory tree for
//! tests and dry runs.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// What a stat call found at a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A directory
    Directory,
    /// A regular file
    File,
    /// Anything else (socket, FIFO, device)
    Other,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Directory => write!(f, "directory"),
            EntryKind::File => write!(f, "file"),
            EntryKind::Other => write!(f, "special file"),
        }
    }
}

/// Filesystem metadata queries.
pub trait FileSystem {
    /// Report what exists at `path`.
    ///
    /// Fails when the path cannot be stat'd (not found, permission denied, ...).
    fn stat(&self, path: &Path) -> io::Result<EntryKind>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn stat(&self, path: &Path) -> io::Result<EntryKind> {
        (**self).stat(path)
    }
}

/// The real filesystem, via `std::fs::metadata` (symlinks are followed).
#[derive(Debug, Clone, Copy, Default)]
pub struct HostFs;

impl FileSystem for HostFs {
    fn stat(&self, path: &Path) -> io::Result<EntryKind> {
        let metadata = std::fs::metadata(path)?;
        Ok(if metadata.is_dir() {
            EntryKind::Directory
        } else if metadata.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        })
    }
}

/// In-memory filesystem tree
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    entries: BTreeMap<PathBuf, EntryKind>,
    denied: BTreeSet<PathBuf>,
}

impl MemoryFs {
    /// Create an empty filesystem
    pub fn new() -> Self {
        Self::default()
    }

    /// Create `path` and every missing ancestor as directories.
    ///
    /// Fails with `NotADirectory` if `path` or one of its ancestors is a file.
    pub fn create_dir_all(&mut self, path: impl AsRef<Path>) -> io::Result<()> {
        let path = path.as_ref();
        if let Some(blocker) = path
            .ancestors()
            .find(|ancestor| self.entries.get(*ancestor) == Some(&EntryKind::File))
        {
            return Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                format!("not a directory: {}", blocker.display()),
            ));
        }

        for ancestor in path.ancestors().filter(|a| !a.as_os_str().is_empty()) {
            self.entries
                .insert(ancestor.to_path_buf(), EntryKind::Directory);
        }
        Ok(())
    }

    /// Create a regular file at `path`, creating parent directories as needed.
    pub fn write_file(&mut self, path: impl AsRef<Path>) -> io::Result<()> {
        let path = path.as_ref();
        if self.entries.get(path) == Some(&EntryKind::Directory) {
            return Err(io::Error::new(
                io::ErrorKind::IsADirectory,
                format!("is a directory: {}", path.display()),
            ));
        }

        if let Some(parent) = path.parent() {
            self.create_dir_all(parent)?;
        }
        self.entries.insert(path.to_path_buf(), EntryKind::File);
        Ok(())
    }

    /// Make every stat at or beneath `path` fail with `PermissionDenied`
    pub fn deny_access(&mut self, path: impl AsRef<Path>) {
        self.denied.insert(path.as_ref().to_path_buf());
    }
}

impl FileSystem for MemoryFs {
    fn stat(&self, path: &Path) -> io::Result<EntryKind> {
        if path.ancestors().any(|ancestor| self.denied.contains(ancestor)) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("permission denied: {}", path.display()),
            ));
        }

        self.entries.get(path).copied().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file or directory: {}", path.display()),
            )
        })
    }
}
