//! Stored video records and the service that turns them into domain assets.
//!
//! A [`VideoRecord`] is the flat on-disk shape of a video: one route type and
//! one grade. Converting a record into a [`VideoAsset`] re-runs grade
//! validation, so a hand-edited store cannot smuggle in a mismatched tag.

use chrono::{DateTime, Duration, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::grade::{RouteType, make_tag};
use crate::library::{VideoAsset, VideoFilterQuery};
use crate::manager::VideoManager;
use crate::platform::{ContainerFormat, PlatformProfile};
use crate::playback::{PlaybackController, PlaybackMode};
use crate::timeline::NoteMarker;

/// Persisted form of a single video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub container_format: ContainerFormat,
    pub route_type: RouteType,
    pub grade: String,
    #[serde(default)]
    pub markers: Vec<NoteMarker>,
}

impl VideoRecord {
    pub fn to_asset(&self) -> CoreResult<VideoAsset> {
        let tag = make_tag(self.route_type, &self.grade).map_err(|e| CoreError::InvalidRecord {
            id: self.id.clone(),
            reason: e.to_string(),
        })?;

        Ok(VideoAsset::new(self.id.clone(), self.created_at, [tag])
            .with_container_format(self.container_format)
            .with_markers(self.markers.clone()))
    }

    /// Inverse of [`Self::to_asset`]. Only single-tag assets have a record form.
    pub fn from_asset(asset: &VideoAsset) -> CoreResult<Self> {
        let mut tags = asset.tags.iter();
        let (Some(tag), None) = (tags.next(), tags.next()) else {
            return Err(CoreError::InvalidRecord {
                id: asset.id.clone(),
                reason: format!("expected exactly one tag, found {}", asset.tags.len()),
            });
        };

        Ok(Self {
            id: asset.id.clone(),
            created_at: asset.created_at,
            container_format: asset.container_format,
            route_type: tag.route_type(),
            grade: tag.grade().to_string(),
            markers: asset.markers.clone(),
        })
    }
}

/// Record-level operations used by front ends, bound to one platform.
#[derive(Debug, Clone)]
pub struct CatalogService {
    manager: VideoManager,
}

impl CatalogService {
    pub fn new(profile: PlatformProfile) -> Self {
        Self {
            manager: VideoManager::new(profile),
        }
    }

    pub fn manager(&self) -> &VideoManager {
        &self.manager
    }

    /// Converts every record. The first invalid record fails the whole list.
    pub fn list_assets(&self, records: &[VideoRecord]) -> CoreResult<Vec<VideoAsset>> {
        records.iter().map(VideoRecord::to_asset).collect()
    }

    /// Compatibility filter for the bound platform, then an optional
    /// route/grade tag and optional inclusive date bounds.
    pub fn filter_assets(
        &self,
        records: &[VideoRecord],
        route_grade: Option<(RouteType, &str)>,
        start_date: Option<DateTime<Utc>>,
        end_date: Option<DateTime<Utc>>,
    ) -> CoreResult<Vec<VideoAsset>> {
        let assets = self.list_assets(records)?;

        let mut query = VideoFilterQuery::new();
        if let Some((route_type, grade)) = route_grade {
            query = query.with_tag(make_tag(route_type, grade)?);
        }
        query.start_date = start_date;
        query.end_date = end_date;

        Ok(self.manager.filtered_videos(assets, &query))
    }

    pub fn find_asset(&self, records: &[VideoRecord], video_id: &str) -> CoreResult<VideoAsset> {
        records
            .iter()
            .find(|record| record.id == video_id)
            .ok_or_else(|| CoreError::VideoNotFound(video_id.to_string()))?
            .to_asset()
    }

    /// Appends `marker` to the video `video_id` and returns the updated list.
    pub fn add_marker(
        &self,
        mut records: Vec<VideoRecord>,
        video_id: &str,
        marker: NoteMarker,
    ) -> CoreResult<Vec<VideoRecord>> {
        let index = records
            .iter()
            .position(|record| record.id == video_id)
            .ok_or_else(|| CoreError::VideoNotFound(video_id.to_string()))?;

        let asset = records[index].to_asset()?;
        if asset.markers.iter().any(|existing| existing.id() == marker.id()) {
            return Err(CoreError::DuplicateMarker {
                video_id: video_id.to_string(),
                marker_id: marker.id().to_string(),
            });
        }
        let updated = self.manager.add_marker(marker, &asset);
        debug!("Video {} now has {} markers", video_id, updated.markers.len());
        records[index] = VideoRecord::from_asset(&updated)?;

        Ok(records)
    }

    /// First free id of the form `m<k>`, starting from one past the marker count.
    pub fn next_marker_id(&self, records: &[VideoRecord], video_id: &str) -> CoreResult<String> {
        let asset = self.find_asset(records, video_id)?;
        let taken = |candidate: &str| asset.markers.iter().any(|marker| marker.id() == candidate);

        let mut k = asset.markers.len() + 1;
        while taken(&format!("m{k}")) {
            k += 1;
        }
        Ok(format!("m{k}"))
    }

    pub fn playback_controller(
        &self,
        records: &[VideoRecord],
        video_id: &str,
        mode: PlaybackMode,
    ) -> CoreResult<PlaybackController> {
        let asset = self.find_asset(records, video_id)?;
        Ok(self.manager.make_playback_controller(&asset, mode))
    }

    /// Two demo videos: a sport clip with markers and an older boulder clip.
    pub fn sample_records(&self, now: DateTime<Utc>) -> Vec<VideoRecord> {
        vec![
            VideoRecord {
                id: "clip-001".to_string(),
                created_at: now,
                container_format: ContainerFormat::Mp4,
                route_type: RouteType::Sport,
                grade: "5.10a".to_string(),
                markers: vec![
                    NoteMarker::new("m1", 15, "crux clip", None),
                    NoteMarker::new("m2", 42, "rest at the jug", None),
                ],
            },
            VideoRecord {
                id: "clip-002".to_string(),
                created_at: now - Duration::days(1),
                container_format: ContainerFormat::Mov,
                route_type: RouteType::Bouldering,
                grade: "V4".to_string(),
                markers: Vec::new(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;
    use crate::playback::PlaybackTick;
    use chrono::TimeZone;

    fn service() -> CatalogService {
        CatalogService::new(Platform::Windows.profile().clone())
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap()
    }

    #[test]
    fn invalid_grade_fails_conversion_with_record_id() {
        let mut records = service().sample_records(now());
        records[1].grade = "5.11a".to_string();

        let err = service().list_assets(&records).unwrap_err();
        match err {
            CoreError::InvalidRecord { id, reason } => {
                assert_eq!(id, "clip-002");
                assert!(reason.contains("5.11a"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn filter_by_route_and_grade() {
        let records = service().sample_records(now());
        let result = service()
            .filter_assets(&records, Some((RouteType::Sport, "5.10a")), None, None)
            .unwrap();
        let ids: Vec<&str> = result.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["clip-001"]);
    }

    #[test]
    fn filter_rejects_invalid_query_grade() {
        let records = service().sample_records(now());
        let err = service()
            .filter_assets(&records, Some((RouteType::Bouldering, "5.10a")), None, None)
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidGrade(_)));
    }

    #[test]
    fn filter_by_date_only() {
        let records = service().sample_records(now());
        let result = service()
            .filter_assets(&records, None, Some(now() - Duration::hours(1)), None)
            .unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "clip-001");
    }

    #[test]
    fn record_asset_round_trip() {
        let record = service().sample_records(now()).remove(0);
        let asset = record.to_asset().unwrap();
        assert_eq!(VideoRecord::from_asset(&asset).unwrap(), record);
    }

    #[test]
    fn from_asset_requires_single_tag() {
        let untagged = VideoAsset::new("x", now(), Vec::<crate::grade::VideoTag>::new());
        assert!(VideoRecord::from_asset(&untagged).is_err());
    }

    #[test]
    fn add_marker_updates_only_the_target() {
        let records = service().sample_records(now());
        let updated = service()
            .add_marker(records.clone(), "clip-002", NoteMarker::new("m1", 8, "toe hook", None))
            .unwrap();

        assert_eq!(updated[0], records[0]);
        assert_eq!(updated[1].markers.len(), 1);
        assert_eq!(updated[1].markers[0].text(), "toe hook");
    }

    #[test]
    fn add_marker_to_unknown_video_fails() {
        let records = service().sample_records(now());
        let err = service()
            .add_marker(records, "nope", NoteMarker::new("m", 1, "", None))
            .unwrap_err();
        assert!(matches!(err, CoreError::VideoNotFound(id) if id == "nope"));
    }

    #[test]
    fn add_marker_rejects_an_id_already_on_the_video() {
        let records = service().sample_records(now());
        let err = service()
            .add_marker(records, "clip-001", NoteMarker::new("m2", 30, "again", None))
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::DuplicateMarker { video_id, marker_id }
                if video_id == "clip-001" && marker_id == "m2"
        ));
    }

    #[test]
    fn next_marker_id_skips_ids_in_use() {
        let records = service().sample_records(now());
        assert_eq!(service().next_marker_id(&records, "clip-001").unwrap(), "m3");
        assert_eq!(service().next_marker_id(&records, "clip-002").unwrap(), "m1");

        // one marker already named m2, so the count-based m2 is taken
        let records = service()
            .add_marker(records, "clip-002", NoteMarker::new("m2", 3, "sit start", None))
            .unwrap();
        assert_eq!(service().next_marker_id(&records, "clip-002").unwrap(), "m3");

        let err = service().next_marker_id(&records, "nope").unwrap_err();
        assert!(matches!(err, CoreError::VideoNotFound(_)));
    }

    #[test]
    fn playback_controller_for_stored_video() {
        let records = service().sample_records(now());
        let mut controller = service()
            .playback_controller(&records, "clip-001", PlaybackMode::PauseOnMarker)
            .unwrap();
        assert_eq!(controller.advance(10, 20), PlaybackTick::paused(15, "m1"));
    }
}
