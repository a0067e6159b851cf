//! # Deezer Integration Module
//!
//! Client for the parts of the Deezer public API the exporter needs. The API is
//! plain REST + JSON: list endpoints return one page of records under `data`
//! and, when more records exist, the absolute URL of the following page under
//! `next`.
//!
//! ```text
//! Form / CLI
//!     ↓
//! deezer::playlist (pagination loop)
//!     ↓
//! reqwest → GET {base}/playlist/{id}/tracks → next → next → ...
//! ```
//!
//! ## Authentication
//!
//! The user pastes an ARL token; it is sent unchanged as
//! `Authorization: Bearer {token}` on every request. Obtaining or refreshing
//! tokens is out of scope.
//!
//! ## Error Handling
//!
//! There is no retry or backoff. The first failing page aborts the fetch and
//! partial results are dropped; see [`crate::error::ExportError`] for the
//! failure kinds.

pub mod playlist;
