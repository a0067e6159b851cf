use std::path::PathBuf;

use serde::Deserialize;
use tabled::Tabled;

#[derive(Debug, Clone, Deserialize)]
pub struct Track {
    pub title: String,
    pub artist: TrackArtist,
    pub album: TrackAlbum,
    pub duration: u64,
    pub link: String,
    #[serde(default)]
    pub time_add: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackAlbum {
    pub title: String,
}

/// One page of `GET /playlist/{id}/tracks`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistPage {
    pub data: Vec<Track>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub total: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct TrackRow {
    #[tabled(rename = "#")]
    pub position: usize,
    #[tabled(rename = "Track Name")]
    pub title: String,
    #[tabled(rename = "Artist")]
    pub artist: String,
    #[tabled(rename = "Album")]
    pub album: String,
    #[tabled(rename = "Duration")]
    pub duration: u64,
    #[tabled(skip)]
    pub link: String,
    #[tabled(rename = "Date Added")]
    pub date_added: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportJob {
    pub token: String,
    pub playlist_id: String,
    pub output: PathBuf,
}
