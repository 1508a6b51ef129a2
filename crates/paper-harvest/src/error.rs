//! Error types for the paper harvest pipeline.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

/// Errors from a paper source (HTTP fetch or response decoding).
///
/// Sources never propagate these to the orchestrator; they are logged and
/// recorded on the fetch outcome so a partial harvest is distinguishable
/// from an empty one.
#[derive(thiserror::Error, Debug)]
pub enum SourceError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status.
    #[error("Unexpected status {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// Response body did not match the expected schema.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl SourceError {
    /// Create a status error from a non-success response.
    #[must_use]
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status { status, message: message.into() }
    }

    /// Create a parse error.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Returns true if the remote service answered at all (as opposed to
    /// a transport-level failure).
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::Status { .. } | Self::Parse(_))
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<quick_xml::DeError> for SourceError {
    fn from(err: quick_xml::DeError) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Errors from writing export artifacts.
#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    /// Filesystem error (directory creation, file write)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// XLSX workbook error
    #[error("Spreadsheet write error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Result type alias for export operations.
pub type ExportResult<T> = Result<T, ExportError>;
