use std::{path::PathBuf, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{config, deezer, error, error::ExportError, info, sheet, success, table, utils};

/// Runs one export without the form.
///
/// Resolves the inputs the same way the form does: the token falls back to
/// `DEEZER_ARL`, a playlist URL is reduced to its id and a missing or
/// extension-less output goes through [`utils::resolve_output_path`].
///
/// # Arguments
///
/// * `token` - ARL token, `None` to use `DEEZER_ARL`
/// * `playlist` - Playlist id or playlist URL
/// * `output` - Destination path, directory or `None`
/// * `preview` - Print the rows as a table before writing the workbook
///
/// # Error Handling
///
/// Any failure (missing input, HTTP error, unexpected response, write error)
/// is reported through `error!` and terminates the process; the workbook is
/// only written once every page has been fetched.
pub async fn export(
    token: Option<String>,
    playlist: String,
    output: Option<PathBuf>,
    preview: bool,
) {
    let token = token.or_else(config::deezer_arl).unwrap_or_default();
    let playlist_id = utils::parse_playlist_id(&playlist);
    let output = utils::resolve_output_path(
        &output
            .map(|p| p.display().to_string())
            .unwrap_or_default(),
        &playlist_id,
        &config::default_output_dir(),
    );

    let Some(job) = utils::build_job(&token, &playlist_id, &output.display().to_string()) else {
        error!("{}", ExportError::MissingFields);
    };

    info!("Fetching tracks of playlist {}", job.playlist_id);

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching playlist tracks...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let tracks = match deezer::playlist::get_playlist_tracks(
        &config::deezer_api_url(),
        &job.token,
        &job.playlist_id,
        |fetched, total| match total {
            Some(total) => pb.set_message(format!("Fetched {}/{} tracks...", fetched, total)),
            None => pb.set_message(format!("Fetched {} tracks...", fetched)),
        },
    )
    .await
    {
        Ok(tracks) => {
            pb.finish_and_clear();
            tracks
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("{}", e);
        }
    };

    success!("Fetched {} tracks", tracks.len());

    let rows = table::build_rows(&tracks);
    if preview {
        println!("{}", Table::new(&rows));
    }

    match sheet::write_workbook(&rows, &job.output) {
        Ok(_) => success!(
            "Playlist data saved to {} with formatting",
            job.output.display()
        ),
        Err(e) => error!("{}", e),
    }
}
