use std::fmt;

use reqwest::StatusCode;

/// Everything that can abort an export.
#[derive(Debug)]
pub enum ExportError {
    /// The API answered with a non-success status.
    Http { status: StatusCode, body: String },
    /// The JSON body has no `data` field.
    Format(String),
    /// The body is not JSON or a track does not have the expected shape.
    Decode(serde_json::Error),
    /// Transport failure before a status was received.
    Request(reqwest::Error),
    /// At least one of token, playlist id or output path is empty.
    MissingFields,
    Spreadsheet(rust_xlsxwriter::XlsxError),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Http { status, body } => write!(
                f,
                "Error fetching playlist data: {} - {}",
                status.as_u16(),
                body
            ),
            ExportError::Format(body) => write!(f, "Unexpected response format: {}", body),
            ExportError::Decode(e) => write!(f, "Cannot decode playlist data: {}", e),
            ExportError::Request(e) => write!(f, "Request to Deezer failed: {}", e),
            ExportError::MissingFields => write!(f, "Please fill all fields!"),
            ExportError::Spreadsheet(e) => write!(f, "Cannot write spreadsheet: {}", e),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Decode(e) => Some(e),
            ExportError::Request(e) => Some(e),
            ExportError::Spreadsheet(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ExportError {
    fn from(err: reqwest::Error) -> Self {
        ExportError::Request(err)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::Decode(err)
    }
}

impl From<rust_xlsxwriter::XlsxError> for ExportError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ExportError::Spreadsheet(err)
    }
}
