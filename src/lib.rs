//! Deezer Playlist Exporter Library
//!
//! This library fetches every track of a Deezer playlist through the paginated
//! public API, flattens the tracks into table rows and writes them into a
//! formatted Excel workbook. The same pipeline is driven either by the terminal
//! form or by the headless `export` command.
//!
//! # Modules
//!
//! - `cli` - Command-line entry points (headless export, form launcher)
//! - `config` - Configuration management and environment variables
//! - `deezer` - Deezer API client (playlist pagination)
//! - `error` - Error type shared by every stage of an export
//! - `form` - Terminal form with a background fetch task
//! - `sheet` - Spreadsheet writer and column layout planning
//! - `table` - Track-to-row mapping
//! - `types` - Data structures and type definitions
//! - `utils` - Playlist id and output path helpers
//!
//! # Example
//!
//! ```
//! use deezer_export::{config, deezer, sheet, table};
//!
//! #[tokio::main]
//! async fn main() -> deezer_export::Res<()> {
//!     config::load_env().await?;
//!     let tracks = deezer::playlist::get_playlist_tracks(
//!         &config::deezer_api_url(),
//!         "my-arl-token",
//!         "908622995",
//!         |_, _| {},
//!     )
//!     .await?;
//!     sheet::write_workbook(&table::build_rows(&tracks), "playlist.xlsx".as_ref())?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod deezer;
pub mod error;
pub mod form;
pub mod sheet;
pub mod table;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used for top-level plumbing (start-up, terminal setup) where the concrete
/// error type does not matter. Export stages return
/// [`error::ExportError`] instead.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Fetching playlist {}", playlist_id);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Playlist data saved to {}", path.display());
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// This macro terminates the process with exit code 1 after printing. Only use
/// it for fatal errors in command handlers, never from inside the form.
///
/// # Example
///
/// ```
/// error!("Export failed: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("Skipping .env file, using defaults. Err: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
