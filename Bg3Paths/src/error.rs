//! Error types for `bg3paths`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `bg3paths` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== Resolution Errors ====================
    /// The running OS is not macOS.
    #[error("unsupported OS: {current_os} (only macOS is supported)")]
    UnsupportedOs {
        /// The OS identifier reported by the platform, echoed verbatim.
        current_os: String,
    },

    /// A candidate path could not be stat'd, or exists but is not a directory.
    #[error("directory not found: {}", path.display())]
    PathMissing {
        /// The candidate path that failed validation.
        path: PathBuf,
    },

    /// The platform could not report a home directory.
    #[error("could not determine home directory")]
    HomeDirNotFound,

    // ==================== Config Errors ====================
    /// IO error while reading or writing the config file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for `bg3paths` operations.
pub type Result<T> = std::result::Result<T, Error>;
