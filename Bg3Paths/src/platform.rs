//! OS identity and home directory lookup
//!
//! Resolution never calls OS APIs directly; it asks a [`Platform`]. The host
//! implementation reads `std::env::consts::OS` and `dirs::home_dir()`, while
//! [`FixedPlatform`] and [`HomeOverride`] let callers pin either answer.

use std::path::{Path, PathBuf};

use crate::error::Result;

/// The only OS identifier path resolution accepts.
///
/// This is the value of `std::env::consts::OS` on macOS.
pub const SUPPORTED_OS: &str = "macos";

/// Source of the OS identifier and the current user's home directory.
pub trait Platform {
    /// Identifier of the running OS family, e.g. `"macos"` or `"linux"`.
    fn os(&self) -> &str;

    /// Absolute path of the current user's home directory, if known.
    fn home_dir(&self) -> Option<PathBuf>;
}

impl<T: Platform + ?Sized> Platform for &T {
    fn os(&self) -> &str {
        (**self).os()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        (**self).home_dir()
    }
}

/// The platform this process is running on.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostPlatform;

impl Platform for HostPlatform {
    fn os(&self) -> &str {
        std::env::consts::OS
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }
}

/// A platform with fixed answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedPlatform {
    os: String,
    home: Option<PathBuf>,
}

impl FixedPlatform {
    /// Create a platform reporting `os` with home directory `home`
    pub fn new(os: impl Into<String>, home: impl Into<PathBuf>) -> Self {
        Self {
            os: os.into(),
            home: Some(home.into()),
        }
    }

    /// Create a platform reporting `os` with no known home directory
    pub fn without_home(os: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            home: None,
        }
    }
}

impl Platform for FixedPlatform {
    fn os(&self) -> &str {
        &self.os
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home.clone()
    }
}

/// Wraps a platform and substitutes its home directory when an override is set.
#[derive(Debug, Clone)]
pub struct HomeOverride<P> {
    inner: P,
    home: Option<PathBuf>,
}

impl<P: Platform> HomeOverride<P> {
    /// Wrap `inner`, using `home` in place of its home directory when `Some`.
    ///
    /// A relative override is made absolute against the current directory, so
    /// resolved paths stay absolute. Fails with [`Error::Io`](crate::Error::Io)
    /// for an empty override.
    pub fn new(inner: P, home: Option<PathBuf>) -> Result<Self> {
        let home = home.map(std::path::absolute).transpose()?;
        Ok(Self { inner, home })
    }

    /// The override, if one is set
    pub fn home_override(&self) -> Option<&Path> {
        self.home.as_deref()
    }
}

impl<P: Platform> Platform for HomeOverride<P> {
    fn os(&self) -> &str {
        self.inner.os()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home.clone().or_else(|| self.inner.home_dir())
    }
}
