use reqwest::Client;
use serde_json::Value;

use crate::{
    error::ExportError,
    types::{PlaylistPage, Track},
};

/// Builds the URL of the first page of a playlist's tracks.
///
/// # Example
///
/// ```
/// let url = playlist_tracks_url("https://api.deezer.com", "908622995");
/// assert_eq!(url, "https://api.deezer.com/playlist/908622995/tracks");
/// ```
pub fn playlist_tracks_url(api_url: &str, playlist_id: &str) -> String {
    format!(
        "{uri}/playlist/{id}/tracks",
        uri = api_url.trim_end_matches('/'),
        id = playlist_id
    )
}

/// Retrieves every track of a playlist, following the `next` links.
///
/// Starts at `{api_url}/playlist/{playlist_id}/tracks` and keeps requesting the
/// URL found in each page's `next` field until a page has none. Tracks are
/// returned in the order the pages delivered them.
///
/// # Arguments
///
/// * `api_url` - Base URL of the API, e.g. `https://api.deezer.com`
/// * `token` - ARL token sent as bearer credential on every request
/// * `playlist_id` - Identifier of the playlist
/// * `on_page` - Called after each page with the number of tracks collected so
///   far and the total reported by the server, if any
///
/// # Errors
///
/// The first failing page aborts the whole fetch; tracks gathered from earlier
/// pages are discarded.
/// - [`ExportError::Http`] - non-success status, carries status and body
/// - [`ExportError::Format`] - JSON body without a `data` field
/// - [`ExportError::Decode`] - body is not JSON or tracks have an unexpected shape
/// - [`ExportError::Request`] - network failure
///
/// # Example
///
/// ```
/// let tracks = get_playlist_tracks(&config::deezer_api_url(), &token, "908622995", |count, total| {
///     println!("{count}/{}", total.unwrap_or_default());
/// })
/// .await?;
/// ```
pub async fn get_playlist_tracks<F>(
    api_url: &str,
    token: &str,
    playlist_id: &str,
    mut on_page: F,
) -> Result<Vec<Track>, ExportError>
where
    F: FnMut(usize, Option<u64>),
{
    let client = Client::new();
    let mut next_url = Some(playlist_tracks_url(api_url, playlist_id));
    let mut tracks: Vec<Track> = Vec::new();

    while let Some(url) = next_url {
        let page = get_page(&client, &url, token).await?;
        tracks.extend(page.data);
        on_page(tracks.len(), page.total);

        next_url = page.next.filter(|next| !next.is_empty());
    }

    Ok(tracks)
}

/// Requests a single page and checks status and shape.
pub async fn get_page(client: &Client, url: &str, token: &str) -> Result<PlaylistPage, ExportError> {
    let response = client.get(url).bearer_auth(token).send().await?;

    let status = response.status();
    if !status.is_success() {
        // Keep the status even when the body cannot be read
        let body = response.text().await.unwrap_or_default();
        return Err(ExportError::Http { status, body });
    }

    let body = response.text().await?;
    parse_page(&body)
}

/// Decodes a page body.
///
/// Deezer reports some failures (invalid token, unknown playlist) with a 200
/// status and an `error` object instead of `data`; those end up as
/// [`ExportError::Format`] with the body attached.
pub fn parse_page(body: &str) -> Result<PlaylistPage, ExportError> {
    let json: Value = serde_json::from_str(body)?;

    if json.get("data").is_none() {
        return Err(ExportError::Format(body.to_string()));
    }

    Ok(serde_json::from_value(json)?)
}

