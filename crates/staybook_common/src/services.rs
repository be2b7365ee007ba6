// --- File: crates/staybook_common/src/services.rs ---
//! Storage abstraction for the spreadsheet used as a database.
//!
//! Stores in the domain crates only talk to [`RowStore`]. The Google Sheets
//! implementation lives in `staybook-sheets`, the in-memory one in
//! [`crate::memory`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// One spreadsheet row: column header to cell text.
pub type Row = BTreeMap<String, String>;

/// A wrapper error type that implements std::error::Error for Box<dyn std::error::Error + Send + Sync>
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

/// Errors reported by a [`RowStore`].
#[derive(Error, Debug)]
pub enum RowStoreError {
    /// Credentials or identifiers are missing.
    #[error("Row store is not configured: {0}")]
    NotConfigured(String),

    #[error("Sheet '{0}' does not exist")]
    SheetNotFound(String),

    #[error("Row store request failed while {message}")]
    Backend {
        message: String,
        #[source]
        source: BoxedError,
    },
}

impl RowStoreError {
    pub fn backend<E>(message: impl Into<String>, err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        RowStoreError::Backend {
            message: message.into(),
            source: BoxedError(Box::new(err)),
        }
    }
}

/// Cell format of [`KeyMatch::Date`] keys.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// How a [`RowMatch`] compares cell values.
///
/// Cell and key are trimmed before any comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMatch {
    Exact,
    CaseInsensitive,
    /// Both sides parse as [`DATE_KEY_FORMAT`] dates and name the same day,
    /// so `2026-2-10` matches `2026-02-10`.
    Date,
}

/// Row predicate: the cell under `field` equals `value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowMatch {
    pub field: String,
    pub value: String,
    pub mode: KeyMatch,
}

impl RowMatch {
    pub fn exact(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            mode: KeyMatch::Exact,
        }
    }

    pub fn case_insensitive(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            mode: KeyMatch::CaseInsensitive,
        }
    }

    pub fn date(field: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            field: field.into(),
            value: date.format(DATE_KEY_FORMAT).to_string(),
            mode: KeyMatch::Date,
        }
    }

    pub fn matches(&self, row: &Row) -> bool {
        let Some(cell) = row.get(&self.field) else {
            return false;
        };
        let (cell, value) = (cell.trim(), self.value.trim());
        match self.mode {
            KeyMatch::Exact => cell == value,
            KeyMatch::CaseInsensitive => cell.to_lowercase() == value.to_lowercase(),
            KeyMatch::Date => match (parse_date_key(cell), parse_date_key(value)) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

fn parse_date_key(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, DATE_KEY_FORMAT).ok()
}

/// Result of [`RowStore::insert_unique`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// A row with the same key already exists; nothing was written.
    Conflict(Row),
}

/// What the connection check reports.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BackendStatus {
    pub title: String,
    pub sheets: Vec<String>,
}

impl BackendStatus {
    pub fn has_sheet(&self, name: &str) -> bool {
        self.sheets.iter().any(|s| s == name)
    }
}

/// A spreadsheet-like persistence collaborator.
///
/// Every sheet has a header row; rows are exchanged as header-to-value maps.
pub trait RowStore: Send + Sync {
    /// All data rows of a sheet, header row excluded.
    fn list_rows(&self, sheet: &str) -> BoxFuture<'_, Vec<Row>, RowStoreError>;

    /// Appends one row below the existing ones.
    fn append_row(&self, sheet: &str, row: Row) -> BoxFuture<'_, (), RowStoreError>;

    /// Deletes every row matched by `matcher`, returning how many were removed.
    fn delete_rows(&self, sheet: &str, matcher: RowMatch) -> BoxFuture<'_, usize, RowStoreError>;

    /// Creates the sheet with the given header row unless it already exists.
    fn ensure_sheet(&self, sheet: &str, headers: &[&str]) -> BoxFuture<'_, (), RowStoreError>;

    /// Title of the backing document and the sheets it contains.
    fn status(&self) -> BoxFuture<'_, BackendStatus, RowStoreError>;

    /// Appends `row` unless a row matched by `matcher` already exists.
    ///
    /// The default is a plain read-then-append and is not atomic: two callers
    /// racing on the same key can both see no match and both append. Stores
    /// that can check and write under one lock override it.
    fn insert_unique(
        &self,
        sheet: &str,
        matcher: RowMatch,
        row: Row,
    ) -> BoxFuture<'_, InsertOutcome, RowStoreError> {
        let sheet = sheet.to_string();
        Box::pin(async move {
            let rows = self.list_rows(&sheet).await?;
            if let Some(existing) = rows.into_iter().find(|r| matcher.matches(r)) {
                return Ok(InsertOutcome::Conflict(existing));
            }
            self.append_row(&sheet, row).await?;
            Ok(InsertOutcome::Inserted)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn exact_match_is_case_sensitive() {
        let r = row(&[("username", "Admin")]);
        assert!(RowMatch::exact("username", "Admin").matches(&r));
        assert!(!RowMatch::exact("username", "admin").matches(&r));
    }

    #[test]
    fn case_insensitive_match_ignores_case() {
        let r = row(&[("username", "Admin")]);
        assert!(RowMatch::case_insensitive("username", "ADMIN").matches(&r));
    }

    #[test]
    fn padded_cells_still_match() {
        let r = row(&[("username", " Admin ")]);
        assert!(RowMatch::case_insensitive("username", "admin").matches(&r));
        assert!(RowMatch::exact("username", "Admin").matches(&r));
    }

    #[test]
    fn date_match_compares_calendar_days() {
        let day = NaiveDate::from_ymd_opt(2026, 2, 10).unwrap();
        let matcher = RowMatch::date("date", day);
        assert!(matcher.matches(&row(&[("date", "2026-02-10")])));
        assert!(matcher.matches(&row(&[("date", "2026-2-10")])));
        assert!(matcher.matches(&row(&[("date", " 2026-02-10 ")])));
        assert!(!matcher.matches(&row(&[("date", "2026-02-11")])));
        assert!(!matcher.matches(&row(&[("date", "10/02/2026")])));
        assert!(!matcher.matches(&row(&[("date", "")])));
    }

    #[test]
    fn missing_field_never_matches() {
        let r = row(&[("name", "John Doe")]);
        assert!(!RowMatch::exact("date", "").matches(&r));
    }
}
