//! Timestamped annotation markers and the sorted timeline built from them.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// A timestamped note on a video, optionally pointing at an image.
///
/// `at_second` is never negative: negative input is clamped to zero, both in
/// [`NoteMarker::new`] and when a marker is deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "MarkerFields", rename_all = "camelCase")]
pub struct NoteMarker {
    id: String,
    at_second: i64,
    text: String,
    image_path: Option<String>,
}

impl NoteMarker {
    pub fn new(
        id: impl Into<String>,
        at_second: i64,
        text: impl Into<String>,
        image_path: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            at_second: at_second.max(0),
            text: text.into(),
            image_path,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn at_second(&self) -> i64 {
        self.at_second
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn image_path(&self) -> Option<&str> {
        self.image_path.as_deref()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MarkerFields {
    id: String,
    at_second: i64,
    text: String,
    #[serde(default)]
    image_path: Option<String>,
}

impl From<MarkerFields> for NoteMarker {
    fn from(fields: MarkerFields) -> Self {
        NoteMarker::new(fields.id, fields.at_second, fields.text, fields.image_path)
    }
}

/// Markers ordered ascending by `at_second`.
///
/// Markers sharing a second keep the relative order they were given in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteTimeline {
    markers: Vec<NoteMarker>,
}

impl NoteTimeline {
    pub fn new(mut markers: Vec<NoteMarker>) -> Self {
        // sort_by_key is stable
        markers.sort_by_key(NoteMarker::at_second);
        Self { markers }
    }

    pub fn markers(&self) -> &[NoteMarker] {
        &self.markers
    }

    /// First marker with `at_second > after`.
    pub fn next_marker(&self, after: i64) -> Option<&NoteMarker> {
        self.markers.iter().find(|m| m.at_second > after)
    }

    /// Last marker with `at_second < before`.
    pub fn previous_marker(&self, before: i64) -> Option<&NoteMarker> {
        self.markers.iter().rev().find(|m| m.at_second < before)
    }

    /// First marker inside `range` (inclusive) whose id is not `excluding`.
    pub fn first_marker_in_range(
        &self,
        range: RangeInclusive<i64>,
        excluding: Option<&str>,
    ) -> Option<&NoteMarker> {
        self.markers
            .iter()
            .find(|m| range.contains(&m.at_second) && excluding != Some(m.id.as_str()))
    }
}

impl From<Vec<NoteMarker>> for NoteTimeline {
    fn from(markers: Vec<NoteMarker>) -> Self {
        NoteTimeline::new(markers)
    }
}
