//! Video assets and the tag/date filtering applied to collections of them.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::grade::VideoTag;
use crate::platform::{ContainerFormat, PlatformProfile};
use crate::timeline::NoteMarker;

/// A catalogued climbing video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoAsset {
    pub id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub container_format: ContainerFormat,
    #[serde(default)]
    pub tags: BTreeSet<VideoTag>,
    /// Markers in insertion order. Sorting happens when a timeline is built.
    #[serde(default)]
    pub markers: Vec<NoteMarker>,
}

impl VideoAsset {
    /// Creates an asset in the default container format (mov) with no markers.
    pub fn new(
        id: impl Into<String>,
        created_at: DateTime<Utc>,
        tags: impl IntoIterator<Item = VideoTag>,
    ) -> Self {
        Self {
            id: id.into(),
            created_at,
            container_format: ContainerFormat::default(),
            tags: tags.into_iter().collect(),
            markers: Vec::new(),
        }
    }

    pub fn with_container_format(mut self, format: ContainerFormat) -> Self {
        self.container_format = format;
        self
    }

    pub fn with_markers(mut self, markers: Vec<NoteMarker>) -> Self {
        self.markers = markers;
        self
    }
}

/// Criteria for [`VideoLibrary::filter`]. Every field is optional.
///
/// A video matches when it carries every tag in `tags` and its creation
/// time lies within `[start_date, end_date]`, both bounds inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoFilterQuery {
    pub tags: BTreeSet<VideoTag>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

impl VideoFilterQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tag(mut self, tag: VideoTag) -> Self {
        self.tags.insert(tag);
        self
    }

    pub fn with_start_date(mut self, start: DateTime<Utc>) -> Self {
        self.start_date = Some(start);
        self
    }

    pub fn with_end_date(mut self, end: DateTime<Utc>) -> Self {
        self.end_date = Some(end);
        self
    }

    pub fn matches(&self, video: &VideoAsset) -> bool {
        let tag_match = self.tags.is_empty() || self.tags.is_subset(&video.tags);
        tag_match && self.date_in_range(video.created_at)
    }

    fn date_in_range(&self, date: DateTime<Utc>) -> bool {
        if self.start_date.is_some_and(|start| date < start) {
            return false;
        }
        if self.end_date.is_some_and(|end| date > end) {
            return false;
        }
        true
    }
}

/// A list of videos to run queries over. Results keep the input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoLibrary {
    videos: Vec<VideoAsset>,
}

impl VideoLibrary {
    pub fn new(videos: Vec<VideoAsset>) -> Self {
        Self { videos }
    }

    pub fn videos(&self) -> &[VideoAsset] {
        &self.videos
    }

    pub fn filter(&self, query: &VideoFilterQuery) -> Vec<VideoAsset> {
        let matched: Vec<VideoAsset> = self
            .videos
            .iter()
            .filter(|video| query.matches(video))
            .cloned()
            .collect();
        debug!(
            "Filter kept {} of {} videos ({} tags, start {:?}, end {:?})",
            matched.len(),
            self.videos.len(),
            query.tags.len(),
            query.start_date,
            query.end_date
        );
        matched
    }

    pub fn compatible_with(&self, profile: &PlatformProfile) -> Vec<VideoAsset> {
        let compatible: Vec<VideoAsset> = self
            .videos
            .iter()
            .filter(|video| profile.supports(video.container_format))
            .cloned()
            .collect();
        debug!(
            "{} of {} videos are playable on {}",
            compatible.len(),
            self.videos.len(),
            profile.platform
        );
        compatible
    }
}

impl From<Vec<VideoAsset>> for VideoLibrary {
    fn from(videos: Vec<VideoAsset>) -> Self {
        VideoLibrary::new(videos)
    }
}
