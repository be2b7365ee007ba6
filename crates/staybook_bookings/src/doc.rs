// --- File: crates/staybook_bookings/src/doc.rs ---
#![allow(dead_code)]
use utoipa::OpenApi;

use crate::calendar::{CalendarCell, MonthRef, MonthView};
use crate::models::{Booking, CancelBookingRequest, MonthQuery, NewBookingRequest};
use staybook_common::ActionResponse;

#[utoipa::path(
    get,
    path = "/bookings", // Path relative to /api
    params(MonthQuery),
    responses(
        (status = 200, description = "Stored bookings", body = Vec<Booking>),
        (status = 400, description = "year without month or the other way round")
    ),
    tag = "Bookings"
)]
fn doc_list_bookings_handler() {}

#[utoipa::path(
    post,
    path = "/bookings",
    request_body(content = NewBookingRequest, example = json!({
        "date": "2026-02-10",
        "name": "John Doe",
        "mobile": "9876543210",
        "description": "Family vacation"
    })),
    responses(
        (status = 201, description = "Booking stored", body = ActionResponse,
         example = json!({"success": true, "message": "Booking added for 2026-02-10."})),
        (status = 400, description = "Invalid input",
         example = json!({"message": "Mobile number must be exactly 10 digits", "code": 400})),
        (status = 409, description = "Date already booked",
         example = json!({"message": "A booking already exists for 2026-02-10", "code": 409})),
        (status = 500, description = "Row store failure")
    ),
    tag = "Bookings"
)]
fn doc_add_booking_handler() {}

#[utoipa::path(
    delete,
    path = "/bookings",
    params(CancelBookingRequest),
    request_body(content = CancelBookingRequest, example = json!({"date": "2026-02-10"})),
    responses(
        (status = 200, description = "Booking cancelled", body = ActionResponse),
        (status = 400, description = "Missing or malformed date"),
        (status = 404, description = "Nothing booked on that date",
         example = json!({"message": "No booking found for 2026-02-11", "code": 404})),
        (status = 500, description = "Row store failure")
    ),
    tag = "Bookings"
)]
fn doc_cancel_booking_handler() {}

#[utoipa::path(
    get,
    path = "/bookings/{date}",
    params(
        ("date" = String, Path, description = "Date in YYYY-MM-DD format", example = "2026-02-10", format = "date")
    ),
    responses(
        (status = 200, description = "The booking for that date", body = Booking),
        (status = 400, description = "Malformed date"),
        (status = 404, description = "Nothing booked on that date")
    ),
    tag = "Bookings"
)]
fn doc_get_booking_handler() {}

#[utoipa::path(
    get,
    path = "/calendar",
    params(MonthQuery),
    responses(
        (status = 200, description = "Month grid with booked days marked", body = MonthView),
        (status = 400, description = "Month outside 0..=11")
    ),
    tag = "Calendar"
)]
fn doc_calendar_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_list_bookings_handler,
        doc_add_booking_handler,
        doc_cancel_booking_handler,
        doc_get_booking_handler,
        doc_calendar_handler
    ),
    components(
        schemas(
            Booking,
            NewBookingRequest,
            CancelBookingRequest,
            ActionResponse,
            CalendarCell,
            MonthRef,
            MonthView
        )
    ),
    tags(
        (name = "Bookings", description = "One booking per calendar date"),
        (name = "Calendar", description = "Month grid projection")
    ),
    servers(
        (url = "/api", description = "Staybook API server")
    )
)]
pub struct BookingsApiDoc;
