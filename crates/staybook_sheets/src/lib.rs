// --- File: crates/staybook_sheets/src/lib.rs ---
//! Google Sheets backing store for Staybook.
//!
//! A service account talks to one spreadsheet; bookings and users live in
//! their own sheets inside it.

pub mod auth;
pub mod error;
pub mod service;

pub use auth::{create_sheets_hub, spreadsheet_id, SheetsHub};
pub use error::SheetsError;
pub use service::GoogleSheetsRowStore;

use staybook_config::SheetsConfig;
use std::sync::Arc;

/// Builds a row store from configuration. Every missing credential is named
/// in one error.
pub async fn connect(config: &SheetsConfig) -> Result<GoogleSheetsRowStore, SheetsError> {
    let spreadsheet_id = match (spreadsheet_id(config), auth::key_source(config)) {
        (Ok(id), Ok(_)) => id,
        (id, key) => {
            let mut missing = Vec::new();
            for err in [key.err(), id.err()].into_iter().flatten() {
                match err {
                    SheetsError::MissingCredentials(names) => missing.extend(names),
                    other => return Err(other),
                }
            }
            return Err(SheetsError::MissingCredentials(missing));
        }
    };
    let hub = create_sheets_hub(config).await?;
    Ok(GoogleSheetsRowStore::new(Arc::new(hub), spreadsheet_id))
}
