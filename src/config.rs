//! Configuration management for the Deezer playlist exporter.
//!
//! Configuration is optional: every value has a default and can be overridden
//! through environment variables or a `.env` file in the local data directory.
//!
//! The lookup order is:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use std::{
    env,
    path::{Path, PathBuf},
};

/// Base URL of the public Deezer API.
pub const DEFAULT_DEEZER_API_URL: &str = "https://api.deezer.com";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the `deezer-export` directory if it doesn't exist, then loads
/// `deezer-export/.env` from it. A missing `.env` file is not an error since
/// all settings have defaults; a malformed one is.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/deezer-export/.env`
/// - macOS: `~/Library/Application Support/deezer-export/.env`
/// - Windows: `%LOCALAPPDATA%/deezer-export/.env`
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or the file
/// exists but cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    load_env_from(&path)
}

/// Loads the `.env` file at `path` into the environment.
///
/// A missing file is skipped; a file that cannot be parsed is an error naming
/// the file.
pub fn load_env_from(path: &Path) -> Result<(), String> {
    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(path).map_err(|e| format!("{}: {}", path.display(), e))
}

/// Location of the optional `.env` file.
pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("deezer-export/.env");
    path
}

/// Returns the Deezer API base URL.
///
/// Reads `DEEZER_API_URL`, falling back to [`DEFAULT_DEEZER_API_URL`]. Trailing
/// slashes are removed so paths can be appended with `format!`.
///
/// # Example
///
/// ```
/// let api_url = deezer_api_url(); // e.g., "https://api.deezer.com"
/// ```
pub fn deezer_api_url() -> String {
    env::var("DEEZER_API_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DEEZER_API_URL.to_string())
        .trim()
        .trim_end_matches('/')
        .to_string()
}

/// Returns the ARL token from `DEEZER_ARL`, if set.
///
/// Used to pre-fill the token field of the form and as the default for
/// `export --token`.
pub fn deezer_arl() -> Option<String> {
    env::var("DEEZER_ARL")
        .ok()
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

/// Directory the browse helper proposes for new spreadsheets.
///
/// Reads `DEEZER_EXPORT_DIR`, then falls back to the user's document
/// directory, the download directory and finally the working directory.
pub fn default_output_dir() -> PathBuf {
    if let Some(dir) = env::var_os("DEEZER_EXPORT_DIR").filter(|dir| !dir.is_empty()) {
        return PathBuf::from(dir);
    }

    dirs::document_dir()
        .or_else(dirs::download_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}
