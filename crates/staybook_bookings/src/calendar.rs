// --- File: crates/staybook_bookings/src/calendar.rs ---
//! Month grid projection.
//!
//! Months are zero-based (0 = January) to match the browser client. Grids are
//! Sunday-first: padding cells fill the columns before the 1st, then one cell
//! per day follows. Nothing is cached; every call recomputes from the bookings
//! it is handed.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

use crate::models::Booking;

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Month must be between 0 and 11, got {0}")]
    InvalidMonth(u32),
    #[error("Year {0} is out of range")]
    InvalidYear(i32),
}

impl From<CalendarError> for staybook_common::StaybookError {
    fn from(err: CalendarError) -> Self {
        staybook_common::StaybookError::ValidationError(err.to_string())
    }
}

/// One square of the month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CalendarCell {
    /// `None` for padding before the 1st.
    pub day_number: Option<u32>,
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "Sun"))]
    pub weekday_label: &'static str,
    pub is_today: bool,
    pub is_booked: bool,
}

/// A `(year, zero-based month)` pair used for navigation links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MonthRef {
    pub year: i32,
    pub month: u32,
}

/// Everything the calendar page renders for one month.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "February"))]
    pub month_name: &'static str,
    #[cfg_attr(feature = "openapi", schema(value_type = Vec<String>))]
    pub weekday_labels: [&'static str; 7],
    pub cells: Vec<CalendarCell>,
    pub previous: MonthRef,
    pub next: MonthRef,
    pub bookings: Vec<Booking>,
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate, CalendarError> {
    if month > 11 {
        return Err(CalendarError::InvalidMonth(month));
    }
    NaiveDate::from_ymd_opt(year, month + 1, 1).ok_or(CalendarError::InvalidYear(year))
}

/// Number of days in a month, taken as the day before the 1st of the next.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, CalendarError> {
    let first = first_of_month(year, month)?;
    let next = next_month(year, month);
    let next_first = first_of_month(next.year, next.month)?;
    let last = next_first.pred_opt().unwrap_or(first);
    Ok(last.day())
}

/// Column of the 1st in a Sunday-first week (0 = Sunday).
pub fn first_weekday_index(year: i32, month: u32) -> Result<u32, CalendarError> {
    Ok(first_of_month(year, month)?.weekday().num_days_from_sunday())
}

pub fn previous_month(year: i32, month: u32) -> MonthRef {
    if month == 0 {
        MonthRef {
            year: year - 1,
            month: 11,
        }
    } else {
        MonthRef {
            year,
            month: month.min(12) - 1,
        }
    }
}

pub fn next_month(year: i32, month: u32) -> MonthRef {
    if month >= 11 {
        MonthRef {
            year: year + 1,
            month: 0,
        }
    } else {
        MonthRef {
            year,
            month: month + 1,
        }
    }
}

/// Builds the grid for `month` of `year`, marking `today` and every date in
/// `bookings`.
pub fn project(
    year: i32,
    month: u32,
    bookings: &[Booking],
    today: NaiveDate,
) -> Result<Vec<CalendarCell>, CalendarError> {
    let first = first_of_month(year, month)?;
    let leading = first_weekday_index(year, month)?;
    let days = days_in_month(year, month)?;
    let booked: HashSet<NaiveDate> = bookings.iter().map(|b| b.date).collect();

    let mut cells = Vec::with_capacity((leading + days) as usize);
    for column in 0..leading {
        cells.push(CalendarCell {
            day_number: None,
            weekday_label: WEEKDAY_LABELS[column as usize],
            is_today: false,
            is_booked: false,
        });
    }

    for (offset, date) in first.iter_days().take(days as usize).enumerate() {
        let day = offset as u32 + 1;
        cells.push(CalendarCell {
            day_number: Some(day),
            weekday_label: WEEKDAY_LABELS[((leading + day - 1) % 7) as usize],
            is_today: date == today,
            is_booked: booked.contains(&date),
        });
    }
    Ok(cells)
}

/// Grid plus header data and the month's bookings sorted by date.
pub fn month_view(
    year: i32,
    month: u32,
    bookings: &[Booking],
    today: NaiveDate,
) -> Result<MonthView, CalendarError> {
    let cells = project(year, month, bookings, today)?;
    let mut in_month: Vec<Booking> = bookings
        .iter()
        .filter(|b| b.date.year() == year && b.date.month0() == month)
        .cloned()
        .collect();
    in_month.sort_by_key(|b| b.date);

    Ok(MonthView {
        year,
        month,
        month_name: MONTH_NAMES[month as usize],
        weekday_labels: WEEKDAY_LABELS,
        cells,
        previous: previous_month(year, month),
        next: next_month(year, month),
        bookings: in_month,
    })
}
