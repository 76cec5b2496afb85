//! Container formats and the platform profiles that gate them.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Video file wrapper format.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ContainerFormat {
    #[default]
    Mov,
    Mp4,
}

impl ContainerFormat {
    pub const ALL: [ContainerFormat; 2] = [ContainerFormat::Mov, ContainerFormat::Mp4];

    pub const fn as_str(self) -> &'static str {
        match self {
            ContainerFormat::Mov => "mov",
            ContainerFormat::Mp4 => "mp4",
        }
    }
}

impl fmt::Display for ContainerFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContainerFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContainerFormat::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::UnknownValue {
                kind: "container format",
                value: s.to_string(),
                expected: "mov, mp4",
            })
    }
}

/// Target platform identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Windows,
}

impl Platform {
    pub const fn as_str(self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Windows => "windows",
        }
    }

    /// The canonical profile for this platform.
    pub fn profile(self) -> &'static PlatformProfile {
        match self {
            Platform::Ios => &*IOS_PROFILE,
            Platform::Windows => &*WINDOWS_PROFILE,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("ios") {
            Ok(Platform::Ios)
        } else if s.eq_ignore_ascii_case("windows") {
            Ok(Platform::Windows)
        } else {
            Err(CoreError::UnknownValue {
                kind: "platform",
                value: s.to_string(),
                expected: "ios, windows",
            })
        }
    }
}

/// Which container formats a platform build can play.
///
/// `default_import` records the format new captures are imported as on that
/// platform. It plays no part in compatibility filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformProfile {
    pub platform: Platform,
    pub supported_containers: BTreeSet<ContainerFormat>,
    pub default_import: ContainerFormat,
}

impl PlatformProfile {
    pub fn new(
        platform: Platform,
        supported_containers: impl IntoIterator<Item = ContainerFormat>,
        default_import: ContainerFormat,
    ) -> Self {
        Self {
            platform,
            supported_containers: supported_containers.into_iter().collect(),
            default_import,
        }
    }

    pub fn supports(&self, format: ContainerFormat) -> bool {
        self.supported_containers.contains(&format)
    }
}

/// Canonical iOS profile: plays mov and mp4, imports as mov.
pub static IOS_PROFILE: Lazy<PlatformProfile> = Lazy::new(|| {
    PlatformProfile::new(
        Platform::Ios,
        [ContainerFormat::Mov, ContainerFormat::Mp4],
        ContainerFormat::Mov,
    )
});

/// Canonical Windows profile: plays mov and mp4, imports as mp4.
pub static WINDOWS_PROFILE: Lazy<PlatformProfile> = Lazy::new(|| {
    PlatformProfile::new(
        Platform::Windows,
        [ContainerFormat::Mov, ContainerFormat::Mp4],
        ContainerFormat::Mp4,
    )
});

/// Set-membership test, free-function form of [`PlatformProfile::supports`].
pub fn supports(profile: &PlatformProfile, format: ContainerFormat) -> bool {
    profile.supports(format)
}
