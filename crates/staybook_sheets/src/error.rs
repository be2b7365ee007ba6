// --- File: crates/staybook_sheets/src/error.rs ---
use thiserror::Error;

use staybook_common::RowStoreError;

/// Errors that can occur when talking to Google Sheets.
#[derive(Error, Debug)]
pub enum SheetsError {
    #[error("Google API Error: {0}")]
    ApiError(#[from] google_sheets4::Error),

    #[error("Missing Google Sheets credentials. Please provide {}", .0.join(", "))]
    MissingCredentials(Vec<&'static str>),

    #[error("Failed to read service account key: {0}")]
    KeyError(#[from] std::io::Error),

    #[error("Failed to build HTTPS connector: {0}")]
    ConnectorError(String),

    #[error("Sheet '{0}' has no header row")]
    MissingHeader(String),

    #[error("Row index {0} does not fit the Sheets API")]
    IndexOverflow(usize),
}

impl From<SheetsError> for RowStoreError {
    fn from(err: SheetsError) -> Self {
        match err {
            SheetsError::MissingCredentials(_) => RowStoreError::NotConfigured(err.to_string()),
            other => RowStoreError::backend("talking to Google Sheets", other),
        }
    }
}
