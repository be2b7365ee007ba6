// --- File: crates/staybook_bookings/src/validation.rs ---
//! Input checks for booking requests. The store itself only enforces the
//! one-booking-per-date rule.

use chrono::NaiveDate;
use staybook_common::StaybookError;
use thiserror::Error;

use crate::models::{Booking, NewBookingRequest, DATE_FORMAT};

pub const MOBILE_DIGITS: usize = 10;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Date is required")]
    MissingDate,
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Guest name is required")]
    MissingName,
    #[error("Mobile number is required")]
    MissingMobile,
    #[error("Mobile number must be exactly 10 digits")]
    InvalidMobile,
}

impl From<ValidationError> for StaybookError {
    fn from(err: ValidationError) -> Self {
        StaybookError::ValidationError(err.to_string())
    }
}

pub fn parse_date(input: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingDate);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(trimmed.to_string()))
}

pub fn is_valid_mobile(mobile: &str) -> bool {
    mobile.len() == MOBILE_DIGITS && mobile.bytes().all(|b| b.is_ascii_digit())
}

/// Turns a raw request into a [`Booking`], trimming every field.
pub fn validate_new_booking(req: &NewBookingRequest) -> Result<Booking, ValidationError> {
    let date = parse_date(&req.date)?;

    let name = req.name.trim();
    if name.is_empty() {
        return Err(ValidationError::MissingName);
    }

    let mobile = req.mobile.trim();
    if mobile.is_empty() {
        return Err(ValidationError::MissingMobile);
    }
    if !is_valid_mobile(mobile) {
        return Err(ValidationError::InvalidMobile);
    }

    let description = req
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string);

    Ok(Booking {
        date,
        name: name.to_string(),
        mobile: mobile.to_string(),
        description,
    })
}
