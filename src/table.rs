use chrono::{DateTime, Local};

use crate::types::{Track, TrackRow};

/// Text used when a track has no (valid) added timestamp.
pub const UNKNOWN_DATE: &str = "Unknown";

/// Maps tracks to spreadsheet rows.
///
/// Positions follow the order of `tracks`, starting at 1. Rows are neither
/// sorted, filtered nor deduplicated.
pub fn build_rows(tracks: &[Track]) -> Vec<TrackRow> {
    tracks
        .iter()
        .enumerate()
        .map(|(idx, track)| TrackRow {
            position: idx + 1,
            title: track.title.clone(),
            artist: track.artist.name.clone(),
            album: track.album.title.clone(),
            duration: track.duration,
            link: track.link.clone(),
            date_added: format_added(track.time_add),
        })
        .collect()
}

/// Renders a Unix timestamp as `YYYY-MM-DD HH:MM:SS` in local time.
///
/// Returns [`UNKNOWN_DATE`] when the timestamp is missing or out of range.
pub fn format_added(time_add: Option<i64>) -> String {
    time_add
        .and_then(|ts| DateTime::from_timestamp(ts, 0))
        .map(|dt| {
            dt.with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        })
        .unwrap_or_else(|| UNKNOWN_DATE.to_string())
}
