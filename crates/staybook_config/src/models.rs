// --- File: crates/staybook_config/src/models.rs ---

use serde::{Deserialize, Serialize};

pub const DEFAULT_BOOKINGS_SHEET: &str = "Bookings";
pub const DEFAULT_USERS_SHEET: &str = "Users";

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

// --- Google Sheets Config ---
// Credentials are usually injected through "secret_from_env" markers or the
// GOOGLE_* variables of the original deployment.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SheetsConfig {
    pub spreadsheet_id: Option<String>,
    /// Path to a service account JSON key. Takes precedence over the inline pair.
    pub key_path: Option<String>,
    pub service_account_email: Option<String>,
    pub private_key: Option<String>,
    #[serde(default = "default_bookings_sheet")]
    pub bookings_sheet: String,
    #[serde(default = "default_users_sheet")]
    pub users_sheet: String,
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            spreadsheet_id: None,
            key_path: None,
            service_account_email: None,
            private_key: None,
            bookings_sheet: default_bookings_sheet(),
            users_sheet: default_users_sheet(),
        }
    }
}

fn default_bookings_sheet() -> String {
    DEFAULT_BOOKINGS_SHEET.to_string()
}

fn default_users_sheet() -> String {
    DEFAULT_USERS_SHEET.to_string()
}

// --- Calendar Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CalendarConfig {
    /// IANA name used to decide which date is "today", e.g. "Asia/Kolkata".
    pub time_zone: Option<String>,
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    /// Persist into Google Sheets. When false an in-memory store is used.
    #[serde(default)]
    pub use_sheets: bool,
    /// Seed the in-memory store with the demo bookings and users.
    #[serde(default)]
    pub seed_demo_data: bool,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub sheets: Option<SheetsConfig>,
    #[serde(default)]
    pub calendar: Option<CalendarConfig>,
    /// Directory with the built browser client, served as a fallback.
    #[serde(default)]
    pub static_dir: Option<String>,
}

impl AppConfig {
    pub fn bookings_sheet(&self) -> &str {
        self.sheets
            .as_ref()
            .map_or(DEFAULT_BOOKINGS_SHEET, |s| s.bookings_sheet.as_str())
    }

    pub fn users_sheet(&self) -> &str {
        self.sheets
            .as_ref()
            .map_or(DEFAULT_USERS_SHEET, |s| s.users_sheet.as_str())
    }

    pub fn time_zone(&self) -> Option<&str> {
        self.calendar.as_ref().and_then(|c| c.time_zone.as_deref())
    }
}
