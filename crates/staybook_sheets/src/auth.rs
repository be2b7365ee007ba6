// File: crates/staybook_sheets/src/auth.rs
use google_sheets4::{
    hyper_rustls::{self, HttpsConnectorBuilder},
    hyper_util::client::legacy::connect::HttpConnector,
    hyper_util::client::legacy::Client,
    yup_oauth2::{
        parse_service_account_key, read_service_account_key, ServiceAccountAuthenticator,
        ServiceAccountKey,
    },
    Sheets,
};
use staybook_config::env_vars::{
    GOOGLE_PRIVATE_KEY, GOOGLE_SERVICE_ACCOUNT_EMAIL, GOOGLE_SHEET_ID, SECRET_MARKER,
};
use staybook_config::SheetsConfig;
use std::path::PathBuf;
use tracing::debug;

use crate::error::SheetsError;

const TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

// Type aliases for clarity
type Connector = hyper_rustls::HttpsConnector<HttpConnector>;

pub type SheetsHub = Sheets<Connector>;

/// Where the service account key comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySource {
    File(PathBuf),
    Inline {
        client_email: String,
        private_key: String,
    },
}

fn configured(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != SECRET_MARKER)
}

/// Keys pasted into environment variables usually carry literal `\n`.
pub fn normalize_private_key(key: &str) -> String {
    key.replace("\\n", "\n")
}

/// Picks the key file when configured, else the inline email and key pair.
pub fn key_source(config: &SheetsConfig) -> Result<KeySource, SheetsError> {
    if let Some(path) = configured(&config.key_path) {
        return Ok(KeySource::File(PathBuf::from(path)));
    }

    let email = configured(&config.service_account_email);
    let key = configured(&config.private_key);
    match (email, key) {
        (Some(client_email), Some(private_key)) => Ok(KeySource::Inline {
            client_email: client_email.to_string(),
            private_key: normalize_private_key(private_key),
        }),
        (email, key) => {
            let mut missing = Vec::new();
            if email.is_none() {
                missing.push(GOOGLE_SERVICE_ACCOUNT_EMAIL);
            }
            if key.is_none() {
                missing.push(GOOGLE_PRIVATE_KEY);
            }
            Err(SheetsError::MissingCredentials(missing))
        }
    }
}

pub fn spreadsheet_id(config: &SheetsConfig) -> Result<String, SheetsError> {
    configured(&config.spreadsheet_id)
        .map(str::to_string)
        .ok_or_else(|| SheetsError::MissingCredentials(vec![GOOGLE_SHEET_ID]))
}

pub async fn load_service_account_key(
    source: &KeySource,
) -> Result<ServiceAccountKey, SheetsError> {
    match source {
        KeySource::File(path) => Ok(read_service_account_key(path).await?),
        KeySource::Inline {
            client_email,
            private_key,
        } => {
            let json = serde_json::json!({
                "type": "service_account",
                "client_email": client_email,
                "private_key": private_key,
                "token_uri": TOKEN_URI,
            });
            Ok(parse_service_account_key(json.to_string())?)
        }
    }
}

pub async fn create_sheets_hub(config: &SheetsConfig) -> Result<SheetsHub, SheetsError> {
    let source = key_source(config)?;
    debug!(
        "Authenticating to Google Sheets with {}",
        match &source {
            KeySource::File(path) => format!("key file {}", path.display()),
            KeySource::Inline { client_email, .. } => format!("service account {}", client_email),
        }
    );

    let sa_key = load_service_account_key(&source).await?;

    let auth = ServiceAccountAuthenticator::builder(sa_key).build().await?;

    let https = HttpsConnectorBuilder::new()
        .with_native_roots()
        .map_err(|e| SheetsError::ConnectorError(e.to_string()))?
        .https_or_http()
        .enable_http1()
        .build();

    let client = Client::builder(hyper_util::rt::TokioExecutor::new()).build(https);

    Ok(Sheets::new(client, auth))
}
