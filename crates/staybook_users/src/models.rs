// --- File: crates/staybook_users/src/models.rs ---
use serde::{Deserialize, Serialize};
use staybook_common::Row;

/// Column headers of the users sheet, in sheet order.
pub const USER_HEADERS: [&str; 2] = ["username", "password"];

/// A stored account. Passwords are kept as plain text in the users sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub password: String,
}

impl User {
    pub fn to_row(&self) -> Row {
        let mut row = Row::new();
        row.insert("username".to_string(), self.username.clone());
        row.insert("password".to_string(), self.password.clone());
        row
    }

    /// `None` for rows without a username.
    pub fn from_row(row: &Row) -> Option<Self> {
        let username = row.get("username")?.trim();
        if username.is_empty() {
            return None;
        }
        Some(Self {
            username: username.to_string(),
            password: row.get("password").cloned().unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Credentials {
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "admin"))]
    pub username: String,
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "admin"))]
    pub password: String,
}

pub type SignupRequest = Credentials;
pub type LoginRequest = Credentials;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AuthResponse {
    pub success: bool,
    #[cfg_attr(feature = "openapi", schema(example = "admin"))]
    pub username: String,
}

/// Accounts loaded into the in-memory store for local runs.
pub fn demo_users() -> Vec<User> {
    [("admin", "admin"), ("demo", "demo")]
        .iter()
        .map(|(u, p)| User {
            username: u.to_string(),
            password: p.to_string(),
        })
        .collect()
}
