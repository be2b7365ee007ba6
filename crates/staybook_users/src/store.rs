// --- File: crates/staybook_users/src/store.rs ---
//! Accounts in the users sheet. Usernames are unique ignoring case.

use staybook_common::{InsertOutcome, RowMatch, RowStore, RowStoreError, StaybookError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::{User, USER_HEADERS};

pub const MIN_PASSWORD_LEN: usize = 4;

#[derive(Error, Debug)]
pub enum UserStoreError {
    #[error("Username is required")]
    MissingUsername,
    #[error("Password must be at least {} characters", MIN_PASSWORD_LEN)]
    PasswordTooShort,
    #[error("Username '{0}' is already taken")]
    UsernameTaken(String),
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error(transparent)]
    Store(#[from] RowStoreError),
}

impl From<UserStoreError> for StaybookError {
    fn from(err: UserStoreError) -> Self {
        match err {
            UserStoreError::MissingUsername | UserStoreError::PasswordTooShort => {
                StaybookError::ValidationError(err.to_string())
            }
            UserStoreError::UsernameTaken(_) => StaybookError::ConflictError(err.to_string()),
            UserStoreError::InvalidCredentials => StaybookError::AuthError(err.to_string()),
            UserStoreError::Store(e) => e.into(),
        }
    }
}

fn username_matcher(username: &str) -> RowMatch {
    RowMatch::case_insensitive("username", username)
}

#[derive(Clone)]
pub struct UserStore {
    rows: Arc<dyn RowStore>,
    sheet: String,
}

impl UserStore {
    pub fn new(rows: Arc<dyn RowStore>, sheet: impl Into<String>) -> Self {
        Self {
            rows,
            sheet: sheet.into(),
        }
    }

    /// Creates the users sheet with its header row if needed.
    pub async fn init(&self) -> Result<(), UserStoreError> {
        self.rows.ensure_sheet(&self.sheet, &USER_HEADERS).await?;
        Ok(())
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserStoreError> {
        let matcher = username_matcher(username.trim());
        let rows = self.rows.list_rows(&self.sheet).await?;
        Ok(rows
            .iter()
            .filter(|row| matcher.matches(row))
            .find_map(User::from_row))
    }

    pub async fn signup(&self, username: &str, password: &str) -> Result<User, UserStoreError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(UserStoreError::MissingUsername);
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(UserStoreError::PasswordTooShort);
        }

        let user = User {
            username: username.to_string(),
            password: password.to_string(),
        };
        match self
            .rows
            .insert_unique(&self.sheet, username_matcher(username), user.to_row())
            .await?
        {
            InsertOutcome::Inserted => {
                info!("Registered user {}", user.username);
                Ok(user)
            }
            InsertOutcome::Conflict(_) => Err(UserStoreError::UsernameTaken(user.username)),
        }
    }

    /// Username compared ignoring case, password compared exactly.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, UserStoreError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(UserStoreError::MissingUsername);
        }
        match self.find_by_username(username).await? {
            Some(user) if user.password == password => {
                debug!("User {} logged in", user.username);
                Ok(user)
            }
            _ => {
                info!("Rejected login for {}", username);
                Err(UserStoreError::InvalidCredentials)
            }
        }
    }
}
