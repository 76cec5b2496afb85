//! Configuration structures and constants for the climbmate-core library.
//!
//! This module provides the settings a front end needs before it can touch
//! the catalog: where the record store lives and which platform profile
//! gates playback compatibility. Environment variables override the defaults.

mod utils;

use std::path::PathBuf;

pub use utils::{get_env_parsed, get_env_path};

use crate::catalog::CatalogService;
use crate::platform::{Platform, PlatformProfile};

// Default constants

/// Default location of the JSON record store, relative to the working directory.
pub const DEFAULT_STORE_PATH: &str = "data/videos.json";

/// Default platform profile used for compatibility filtering.
pub const DEFAULT_PLATFORM: Platform = Platform::Windows;

/// Environment variable overriding [`DEFAULT_STORE_PATH`].
pub const STORE_PATH_ENV: &str = "CLIMBMATE_STORE";

/// Environment variable overriding [`DEFAULT_PLATFORM`] (`ios` or `windows`).
pub const PLATFORM_ENV: &str = "CLIMBMATE_PLATFORM";

/// Main configuration structure for the climbmate-core library.
///
/// # Examples
///
/// ```rust
/// use climbmate_core::config::CatalogConfig;
/// use climbmate_core::Platform;
///
/// let config = CatalogConfig::default()
///     .with_store_path("/tmp/videos.json")
///     .with_platform(Platform::Ios);
/// assert_eq!(config.platform, Platform::Ios);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// JSON file holding the video records
    pub store_path: PathBuf,

    /// Platform whose profile decides which container formats are playable
    pub platform: Platform,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            store_path: get_env_path(STORE_PATH_ENV, PathBuf::from(DEFAULT_STORE_PATH)),
            platform: get_env_parsed(PLATFORM_ENV, DEFAULT_PLATFORM),
        }
    }
}

impl CatalogConfig {
    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = path.into();
        self
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn profile(&self) -> &'static PlatformProfile {
        self.platform.profile()
    }

    /// Builds a catalog service bound to this configuration's platform.
    pub fn service(&self) -> CatalogService {
        CatalogService::new(self.profile().clone())
    }
}
