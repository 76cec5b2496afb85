//! Marker-aware playback state machine.
//!
//! The controller does not render anything. It tracks a logical position in
//! whole seconds and decides, for each cursor movement, whether playback keeps
//! going or stops at a marker. Each call returns a [`PlaybackTick`] describing
//! the outcome.
//!
//! In [`PlaybackMode::PauseOnMarker`] a movement across a marker stops on that
//! marker. Resuming past a marker records it as consumed, and a consumed marker
//! never stops this controller again. A fresh controller starts with nothing
//! consumed.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::error::CoreError;
use crate::timeline::NoteTimeline;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaybackMode {
    /// Markers are ignored.
    Linear,
    /// Stop at the first unconsumed marker crossed by a movement.
    PauseOnMarker,
}

impl PlaybackMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            PlaybackMode::Linear => "linear",
            PlaybackMode::PauseOnMarker => "pause-on-marker",
        }
    }
}

impl fmt::Display for PlaybackMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlaybackMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(PlaybackMode::Linear),
            "pause-on-marker" => Ok(PlaybackMode::PauseOnMarker),
            _ => Err(CoreError::UnknownValue {
                kind: "playback mode",
                value: s.to_string(),
                expected: "linear, pause-on-marker",
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaybackState {
    Playing,
    PausedAtMarker,
}

impl PlaybackState {
    pub const fn as_str(self) -> &'static str {
        match self {
            PlaybackState::Playing => "playing",
            PlaybackState::PausedAtMarker => "paused-at-marker",
        }
    }
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single controller call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackTick {
    pub current_second: i64,
    pub state: PlaybackState,
    /// Set only when `state` is [`PlaybackState::PausedAtMarker`].
    pub marker_id: Option<String>,
}

impl PlaybackTick {
    pub fn playing(current_second: i64) -> Self {
        Self {
            current_second,
            state: PlaybackState::Playing,
            marker_id: None,
        }
    }

    pub fn paused(current_second: i64, marker_id: impl Into<String>) -> Self {
        Self {
            current_second,
            state: PlaybackState::PausedAtMarker,
            marker_id: Some(marker_id.into()),
        }
    }

    pub fn is_paused(&self) -> bool {
        self.state == PlaybackState::PausedAtMarker
    }
}

/// Playback state for one open video.
///
/// The consumed-marker set is the only mutable state and lives as long as the
/// controller. Methods take `&mut self`, so one owner drives a session.
#[derive(Debug, Clone)]
pub struct PlaybackController {
    mode: PlaybackMode,
    timeline: NoteTimeline,
    consumed_marker_ids: HashSet<String>,
}

impl PlaybackController {
    pub fn new(mode: PlaybackMode, timeline: NoteTimeline) -> Self {
        Self {
            mode,
            timeline,
            consumed_marker_ids: HashSet::new(),
        }
    }

    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    pub fn timeline(&self) -> &NoteTimeline {
        &self.timeline
    }

    pub fn is_consumed(&self, marker_id: &str) -> bool {
        self.consumed_marker_ids.contains(marker_id)
    }

    /// Moves the cursor from `from` to `to`.
    ///
    /// The range is inclusive and direction-independent. On a pause the tick
    /// reports the marker's second rather than `to`.
    pub fn advance(&mut self, from: i64, to: i64) -> PlaybackTick {
        if self.mode == PlaybackMode::Linear {
            return PlaybackTick::playing(to);
        }

        let range = from.min(to)..=from.max(to);
        match self.timeline.first_marker_in_range(range, None) {
            Some(marker) if !self.consumed_marker_ids.contains(marker.id()) => {
                debug!(
                    "Pausing at marker {} ({}s) while moving {}s -> {}s",
                    marker.id(),
                    marker.at_second(),
                    from,
                    to
                );
                PlaybackTick::paused(marker.at_second(), marker.id())
            }
            _ => PlaybackTick::playing(to),
        }
    }

    /// Marks `after_marker_id` as consumed, then advances from `from` to `to`.
    pub fn resume(&mut self, after_marker_id: &str, from: i64, to: i64) -> PlaybackTick {
        if self.consumed_marker_ids.insert(after_marker_id.to_string()) {
            debug!("Marker {} consumed", after_marker_id);
        }
        self.advance(from, to)
    }

    /// Jumps to `second` (clamped to zero). Always reports playing.
    pub fn seek(&mut self, second: i64) -> PlaybackTick {
        PlaybackTick::playing(second.max(0))
    }
}
