//! # bg3paths
//!
//! Locate the Baldur's Gate 3 user data directory and its `Mods` folder on macOS.
//!
//! ## Quick Start
//!
//! ```no_run
//! use bg3paths::paths;
//!
//! let mods = paths::mods_path()?;
//! println!("Mods live in {}", mods.display());
//! # Ok::<(), bg3paths::Error>(())
//! ```
//!
//! ### Injecting collaborators
//!
//! [`PathResolver`](paths::PathResolver) takes its OS/home-directory source and
//! its filesystem probe as parameters, so lookups can run against an in-memory tree:
//!
//! ```
//! use bg3paths::prelude::*;
//!
//! let mut fs = MemoryFs::new();
//! fs.create_dir_all("/Users/Darwin/Documents/Larian Studios/Baldur's Gate 3")?;
//!
//! let resolver = PathResolver::with_parts(FixedPlatform::new("macos", "/Users/Darwin"), fs);
//! assert!(resolver.game_path().is_ok());
//! assert!(matches!(resolver.mods_path(), Err(Error::PathMissing { .. })));
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod fs;
pub mod paths;
pub mod platform;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::config::PersistedConfig;
    pub use crate::error::{Error, Result};
    pub use crate::fs::{EntryKind, FileSystem, HostFs, MemoryFs};
    pub use crate::paths::{PathResolver, game_path, mods_path, path_with_tilde};
    pub use crate::platform::{FixedPlatform, HomeOverride, HostPlatform, Platform, SUPPORTED_OS};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
