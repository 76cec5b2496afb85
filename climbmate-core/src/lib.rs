//! Core library for cataloguing climbing videos.
//!
//! This crate validates route-type/grade tags, filters video collections by
//! tag and creation date, gates videos by platform container support, and
//! drives a marker-aware playback controller. It also persists video records
//! as JSON for the command-line front end.
//!
//! ## Usage Example
//!
//! ```rust
//! use climbmate_core::{
//!     NoteMarker, Platform, PlaybackMode, PlaybackState, RouteType, VideoAsset, VideoManager,
//!     make_tag,
//! };
//! use chrono::Utc;
//!
//! let tag = make_tag(RouteType::Bouldering, "V5").unwrap();
//! let video = VideoAsset::new("session-1", Utc::now(), [tag])
//!     .with_markers(vec![NoteMarker::new("m1", 15, "crux", None)]);
//!
//! let manager = VideoManager::new(Platform::Ios.profile().clone());
//! let mut controller = manager.make_playback_controller(&video, PlaybackMode::PauseOnMarker);
//!
//! let tick = controller.advance(12, 20);
//! assert_eq!(tick.state, PlaybackState::PausedAtMarker);
//! assert_eq!(tick.current_second, 15);
//!
//! let tick = controller.resume("m1", 15, 20);
//! assert_eq!(tick.state, PlaybackState::Playing);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod file_logging;
pub mod grade;
pub mod library;
pub mod manager;
pub mod platform;
pub mod playback;
pub mod store;
pub mod timeline;
pub mod utils;

// Re-exports for public API
pub use catalog::{CatalogService, VideoRecord};
pub use config::CatalogConfig;
pub use error::{CoreError, CoreResult};
pub use grade::{InvalidGradeError, RouteType, VideoTag, make_tag};
pub use library::{VideoAsset, VideoFilterQuery, VideoLibrary};
pub use manager::VideoManager;
pub use platform::{ContainerFormat, IOS_PROFILE, Platform, PlatformProfile, WINDOWS_PROFILE};
pub use playback::{PlaybackController, PlaybackMode, PlaybackState, PlaybackTick};
pub use store::{load_records, save_records};
pub use timeline::{NoteMarker, NoteTimeline};
pub use utils::{parse_day_end, parse_day_start};
