//! BG3 user data and Mods directory resolution
//!
//! Both lookups are one-shot: every call re-queries the platform and the
//! filesystem, and a returned path was a directory only at the moment it was
//! checked.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::fs::{EntryKind, FileSystem, HostFs};
use crate::platform::{HostPlatform, Platform, SUPPORTED_OS};

/// Segments of the BG3 user data directory, relative to the home directory
pub const GAME_DIR_SEGMENTS: [&str; 3] = ["Documents", "Larian Studios", "Baldur's Gate 3"];

/// Name of the Mods directory inside the BG3 user data directory
pub const MODS_DIR_NAME: &str = "Mods";

/// Resolves BG3 directories against a [`Platform`] and a [`FileSystem`].
#[derive(Debug, Clone, Default)]
pub struct PathResolver<P = HostPlatform, F = HostFs> {
    platform: P,
    fs: F,
}

impl PathResolver {
    /// Create a resolver for the host platform and the real filesystem
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: Platform, F: FileSystem> PathResolver<P, F> {
    /// Create a resolver from explicit collaborators
    pub fn with_parts(platform: P, fs: F) -> Self {
        Self { platform, fs }
    }

    /// The platform queried for OS identity and home directory
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Resolve `~/Documents/Larian Studios/Baldur's Gate 3`.
    ///
    /// The OS check happens before any path is built or stat'd.
    ///
    /// # Errors
    /// - [`Error::UnsupportedOs`] if the platform is not macOS
    /// - [`Error::HomeDirNotFound`] if the platform has no home directory
    /// - [`Error::PathMissing`] if the directory does not exist or is not a directory
    pub fn game_path(&self) -> Result<PathBuf> {
        let current_os = self.platform.os();
        if current_os != SUPPORTED_OS {
            return Err(Error::UnsupportedOs {
                current_os: current_os.to_string(),
            });
        }

        let home = self.platform.home_dir().ok_or(Error::HomeDirNotFound)?;
        let candidate = GAME_DIR_SEGMENTS
            .iter()
            .fold(home, |path, segment| path.join(segment));

        self.ensure_directory(candidate)
    }

    /// Resolve the `Mods` directory inside [`game_path`](Self::game_path).
    ///
    /// Failures from resolving the game path are returned unchanged.
    pub fn mods_path(&self) -> Result<PathBuf> {
        let game_path = self.game_path()?;
        self.ensure_directory(game_path.join(MODS_DIR_NAME))
    }

    /// Every stat failure collapses into `PathMissing`.
    fn ensure_directory(&self, path: PathBuf) -> Result<PathBuf> {
        match self.fs.stat(&path) {
            Ok(EntryKind::Directory) => {
                tracing::trace!("Found directory {}", path.display());
                Ok(path)
            }
            Ok(kind) => {
                tracing::debug!("{} exists but is a {}", path.display(), kind);
                Err(Error::PathMissing { path })
            }
            Err(e) => {
                tracing::debug!("Failed to stat {}: {}", path.display(), e);
                Err(Error::PathMissing { path })
            }
        }
    }
}

/// Resolve the BG3 user data directory for the current user
pub fn game_path() -> Result<PathBuf> {
    PathResolver::new().game_path()
}

/// Resolve the BG3 Mods directory for the current user
pub fn mods_path() -> Result<PathBuf> {
    PathResolver::new().mods_path()
}

/// Replace a leading home directory with `~` for display
#[must_use]
pub fn path_with_tilde(path: &Path, home: &Path) -> String {
    if home.as_os_str().is_empty() {
        return path.display().to_string();
    }

    match path.strip_prefix(home) {
        Ok(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Ok(rest) => format!("~/{}", rest.display()),
        Err(_) => path.display().to_string(),
    }
}
