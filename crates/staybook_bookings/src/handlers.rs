// File: crates/staybook_bookings/src/handlers.rs
use axum::{
    body::Bytes,
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::Json,
};
use chrono::{Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use staybook_common::{not_found, validation_error, ActionResponse, StaybookError};
use std::sync::Arc;
use tracing::{debug, info};

use crate::calendar::{days_in_month, month_view, MonthView};
use crate::models::{Booking, CancelBookingRequest, MonthQuery, NewBookingRequest};
use crate::store::BookingStore;
use crate::validation::{parse_date, validate_new_booking};

// Shared state for the booking handlers
#[derive(Clone)]
pub struct BookingsState {
    pub store: BookingStore,
    /// Decides which date counts as "today" on the calendar.
    pub time_zone: Tz,
}

impl BookingsState {
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.time_zone).date_naive()
    }
}

/// Lists bookings, optionally restricted to one month.
pub async fn list_bookings_handler(
    State(state): State<Arc<BookingsState>>,
    query: Result<Query<MonthQuery>, QueryRejection>,
) -> Result<Json<Vec<Booking>>, StaybookError> {
    let Query(query) = query?;
    let bookings = match (query.year, query.month) {
        (Some(year), Some(month)) => state.store.list_by_month(year, month).await?,
        (None, None) => state.store.list_all().await?,
        _ => {
            return Err(validation_error(
                "year and month must be given together",
            ))
        }
    };
    debug!("Returning {} bookings", bookings.len());
    Ok(Json(bookings))
}

pub async fn add_booking_handler(
    State(state): State<Arc<BookingsState>>,
    payload: Result<Json<NewBookingRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ActionResponse>), StaybookError> {
    let Json(payload) = payload?;
    let booking = validate_new_booking(&payload)?;
    state.store.add(&booking).await?;
    Ok((
        StatusCode::CREATED,
        Json(ActionResponse::ok(format!(
            "Booking added for {}.",
            booking.date_key()
        ))),
    ))
}

/// Cancels the booking for a date given either as `?date=` or as a JSON body.
pub async fn cancel_booking_handler(
    State(state): State<Arc<BookingsState>>,
    query: Result<Query<CancelBookingRequest>, QueryRejection>,
    body: Bytes,
) -> Result<Json<ActionResponse>, StaybookError> {
    let Query(query) = query?;
    let from_body = if body.iter().all(u8::is_ascii_whitespace) {
        None
    } else {
        serde_json::from_slice::<CancelBookingRequest>(&body)
            .map_err(|e| validation_error(format!("Invalid request body: {}", e)))?
            .date
    };

    let raw = from_body
        .or(query.date)
        .ok_or_else(|| validation_error("Date is required"))?;
    let date = parse_date(&raw)?;

    state.store.cancel(date).await?;
    info!("Cancellation confirmed for {}", date);
    Ok(Json(ActionResponse::ok(format!("Booking for {} cancelled.", date))))
}

pub async fn get_booking_handler(
    State(state): State<Arc<BookingsState>>,
    Path(date): Path<String>,
) -> Result<Json<Booking>, StaybookError> {
    let date = parse_date(&date)?;
    state
        .store
        .find_by_date(date)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(format!("No booking found for {}", date)))
}

/// Month grid for `?year=&month=`, defaulting to the current month.
pub async fn calendar_handler(
    State(state): State<Arc<BookingsState>>,
    query: Result<Query<MonthQuery>, QueryRejection>,
) -> Result<Json<MonthView>, StaybookError> {
    let Query(query) = query?;
    let today = state.today();
    let year = query.year.unwrap_or(today.year());
    let month = query.month.unwrap_or(today.month0());

    // Reject bad months before touching the store.
    days_in_month(year, month)?;
    let bookings = state.store.list_by_month(year, month).await?;
    debug!("Projecting {}-{} with {} bookings", year, month, bookings.len());
    Ok(Json(month_view(year, month, &bookings, today)?))
}
