//! Platform-bound facade that UI layers call into.

use crate::library::{VideoAsset, VideoFilterQuery, VideoLibrary};
use crate::platform::PlatformProfile;
use crate::playback::{PlaybackController, PlaybackMode};
use crate::timeline::{NoteMarker, NoteTimeline};

/// Shared entry point for front ends. Compatibility with the bound profile is
/// always applied before tag/date filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoManager {
    profile: PlatformProfile,
}

impl VideoManager {
    pub fn new(profile: PlatformProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &PlatformProfile {
        &self.profile
    }

    pub fn compatible_videos(&self, videos: Vec<VideoAsset>) -> Vec<VideoAsset> {
        VideoLibrary::new(videos).compatible_with(&self.profile)
    }

    pub fn filtered_videos(&self, videos: Vec<VideoAsset>, query: &VideoFilterQuery) -> Vec<VideoAsset> {
        let compatible = self.compatible_videos(videos);
        VideoLibrary::new(compatible).filter(query)
    }

    /// Returns a copy of `video` with `marker` appended to its markers.
    pub fn add_marker(&self, marker: NoteMarker, video: &VideoAsset) -> VideoAsset {
        let mut updated = video.clone();
        updated.markers.push(marker);
        updated
    }

    pub fn make_playback_controller(&self, video: &VideoAsset, mode: PlaybackMode) -> PlaybackController {
        PlaybackController::new(mode, NoteTimeline::new(video.markers.clone()))
    }
}
