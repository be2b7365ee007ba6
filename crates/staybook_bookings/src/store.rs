// --- File: crates/staybook_bookings/src/store.rs ---
//! Booking persistence on top of a [`RowStore`].
//!
//! At most one booking exists per calendar date. The check is pushed down to
//! [`RowStore::insert_unique`], which is atomic for the in-memory store and a
//! best-effort read-then-append for Google Sheets.

use chrono::{Datelike, NaiveDate};
use staybook_common::{InsertOutcome, RowMatch, RowStore, RowStoreError, StaybookError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::{Booking, BOOKING_HEADERS};

#[derive(Error, Debug)]
pub enum BookingStoreError {
    #[error("A booking already exists for {0}")]
    Conflict(NaiveDate),
    #[error("No booking found for {0}")]
    NotFound(NaiveDate),
    #[error(transparent)]
    Store(#[from] RowStoreError),
}

impl From<BookingStoreError> for StaybookError {
    fn from(err: BookingStoreError) -> Self {
        match err {
            BookingStoreError::Conflict(_) => StaybookError::ConflictError(err.to_string()),
            BookingStoreError::NotFound(_) => StaybookError::NotFoundError(err.to_string()),
            BookingStoreError::Store(e) => e.into(),
        }
    }
}

/// Matches the same day however the cell is padded, so lookups agree with
/// [`Booking::from_row`].
fn date_matcher(date: NaiveDate) -> RowMatch {
    RowMatch::date("date", date)
}

/// Owned handle to the bookings sheet.
#[derive(Clone)]
pub struct BookingStore {
    rows: Arc<dyn RowStore>,
    sheet: String,
}

impl BookingStore {
    pub fn new(rows: Arc<dyn RowStore>, sheet: impl Into<String>) -> Self {
        Self {
            rows,
            sheet: sheet.into(),
        }
    }

    /// Creates the bookings sheet with its header row if needed.
    pub async fn init(&self) -> Result<(), BookingStoreError> {
        self.rows.ensure_sheet(&self.sheet, &BOOKING_HEADERS).await?;
        Ok(())
    }

    /// Every stored booking. Rows that do not decode are skipped.
    pub async fn list_all(&self) -> Result<Vec<Booking>, BookingStoreError> {
        let rows = self.rows.list_rows(&self.sheet).await?;
        let bookings: Vec<Booking> = rows
            .iter()
            .filter_map(|row| match Booking::from_row(row) {
                Ok(booking) => Some(booking),
                Err(e) => {
                    warn!("Skipping booking row in {}: {}", self.sheet, e);
                    None
                }
            })
            .collect();
        debug!("Loaded {} bookings", bookings.len());
        Ok(bookings)
    }

    /// Bookings in the given month. `month` is zero-based; anything above 11
    /// matches nothing.
    pub async fn list_by_month(
        &self,
        year: i32,
        month: u32,
    ) -> Result<Vec<Booking>, BookingStoreError> {
        if month > 11 {
            return Ok(Vec::new());
        }
        let bookings = self.list_all().await?;
        Ok(bookings
            .into_iter()
            .filter(|b| b.date.year() == year && b.date.month0() == month)
            .collect())
    }

    pub async fn find_by_date(
        &self,
        date: NaiveDate,
    ) -> Result<Option<Booking>, BookingStoreError> {
        let bookings = self.list_all().await?;
        Ok(bookings.into_iter().find(|b| b.date == date))
    }

    pub async fn add(&self, booking: &Booking) -> Result<(), BookingStoreError> {
        let outcome = self
            .rows
            .insert_unique(&self.sheet, date_matcher(booking.date), booking.to_row())
            .await?;
        match outcome {
            InsertOutcome::Inserted => {
                info!("Booked {} for {}", booking.date, booking.name);
                Ok(())
            }
            InsertOutcome::Conflict(_) => {
                info!("Rejected booking for {}: date taken", booking.date);
                Err(BookingStoreError::Conflict(booking.date))
            }
        }
    }

    pub async fn cancel(&self, date: NaiveDate) -> Result<(), BookingStoreError> {
        let removed = self.rows.delete_rows(&self.sheet, date_matcher(date)).await?;
        if removed == 0 {
            return Err(BookingStoreError::NotFound(date));
        }
        info!("Cancelled booking for {}", date);
        Ok(())
    }
}
