use std::path::{Path, PathBuf};

use crate::types::ExportJob;

/// Extension given to output files.
pub const XLSX_EXTENSION: &str = "xlsx";

/// Extracts a playlist id from a bare id or a playlist URL.
///
/// Accepts `908622995`, `https://www.deezer.com/playlist/908622995` and
/// localized links such as `https://www.deezer.com/en/playlist/908622995?utm=x`.
/// Anything that is not a playlist URL is returned trimmed.
pub fn parse_playlist_id(input: &str) -> String {
    let input = input.trim();

    match input.split_once("/playlist/") {
        Some((_, rest)) => rest
            .split(['/', '?', '#'])
            .next()
            .unwrap_or_default()
            .to_string(),
        None => input.to_string(),
    }
}

/// Default file name for a playlist export.
pub fn default_file_name(playlist_id: &str) -> String {
    let id = parse_playlist_id(playlist_id);
    if id.is_empty() {
        format!("deezer-playlist.{}", XLSX_EXTENSION)
    } else {
        format!("deezer-playlist-{}.{}", id, XLSX_EXTENSION)
    }
}

/// Resolves what the user typed as output into a spreadsheet path.
///
/// - empty input → `default_dir/deezer-playlist-{id}.xlsx`
/// - existing directory → the same default file name inside it
/// - path without extension → `.xlsx` appended
/// - anything else is kept as is
pub fn resolve_output_path(input: &str, playlist_id: &str, default_dir: &Path) -> PathBuf {
    let input = input.trim();

    if input.is_empty() {
        return default_dir.join(default_file_name(playlist_id));
    }

    let path = PathBuf::from(input);
    if path.is_dir() {
        return path.join(default_file_name(playlist_id));
    }

    if path.extension().is_none() {
        return path.with_extension(XLSX_EXTENSION);
    }

    path
}

/// Builds an export job from raw form input.
///
/// Returns `None` when any of the three fields is empty after trimming.
pub fn build_job(token: &str, playlist_id: &str, output: &str) -> Option<ExportJob> {
    let token = token.trim();
    let playlist_id = parse_playlist_id(playlist_id);
    let output = output.trim();

    if token.is_empty() || playlist_id.is_empty() || output.is_empty() {
        return None;
    }

    Some(ExportJob {
        token: token.to_string(),
        playlist_id,
        output: PathBuf::from(output),
    })
}
