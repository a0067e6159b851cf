//! # CLI Module
//!
//! Command handlers behind the `deezer-export` binary. Each handler turns its
//! arguments into an export (or opens the form) and reports the outcome with
//! the crate's output macros.
//!
//! ## Commands
//!
//! - [`form`] - Opens the terminal form (default when no subcommand is given)
//! - [`export`] - Fetches a playlist and writes the workbook without the form
//!
//! ## Data Flow
//!
//! ```text
//! arguments / form fields
//!     ↓
//! utils (playlist id, output path, validation)
//!     ↓
//! deezer::playlist (paginated fetch)
//!     ↓
//! table (rows) → sheet (workbook)
//! ```
//!
//! ## Usage Patterns
//!
//! ```bash
//! deezer-export                                            # open the form
//! deezer-export export --token ARL --playlist 908622995    # headless
//! deezer-export export --playlist https://www.deezer.com/en/playlist/908622995 \
//!     --output ~/exports --preview
//! ```

mod export;
mod form;

pub use export::export;
pub use form::form;
