//! Tests for environment variable overrides of the catalog configuration.
//!
//! Kept as a single test so no other test in this binary observes the
//! modified environment.

use climbmate_core::config::{
    CatalogConfig, DEFAULT_PLATFORM, DEFAULT_STORE_PATH, PLATFORM_ENV, STORE_PATH_ENV,
};
use climbmate_core::{ContainerFormat, Platform};
use std::env;
use std::path::PathBuf;

#[test]
fn test_env_overrides_and_fallbacks() {
    // SAFETY: this is the only test in this binary touching the environment.
    unsafe {
        env::remove_var(STORE_PATH_ENV);
        env::remove_var(PLATFORM_ENV);
    }
    let config = CatalogConfig::default();
    assert_eq!(config.store_path, PathBuf::from(DEFAULT_STORE_PATH));
    assert_eq!(config.platform, DEFAULT_PLATFORM);

    unsafe {
        env::set_var(STORE_PATH_ENV, "/tmp/climbs.json");
        env::set_var(PLATFORM_ENV, "ios");
    }
    let config = CatalogConfig::default();
    assert_eq!(config.store_path, PathBuf::from("/tmp/climbs.json"));
    assert_eq!(config.platform, Platform::Ios);
    assert_eq!(config.profile().default_import, ContainerFormat::Mov);

    // Unparseable platform falls back to the default
    unsafe {
        env::set_var(PLATFORM_ENV, "android");
    }
    assert_eq!(CatalogConfig::default().platform, DEFAULT_PLATFORM);

    unsafe {
        env::remove_var(STORE_PATH_ENV);
        env::remove_var(PLATFORM_ENV);
    }
}
