// --- File: crates/staybook_bookings/src/routes.rs ---

use crate::handlers::{
    add_booking_handler, calendar_handler, cancel_booking_handler, get_booking_handler,
    list_bookings_handler, BookingsState,
};
use axum::{routing::get, Router};
use staybook_common::method_not_allowed_handler;
use std::sync::Arc;

/// Routes for bookings and the calendar grid. Mounted under `/api`.
pub fn routes(state: Arc<BookingsState>) -> Router {
    Router::new()
        .route(
            "/bookings",
            get(list_bookings_handler)
                .post(add_booking_handler)
                .delete(cancel_booking_handler)
                .fallback(method_not_allowed_handler),
        )
        .route(
            "/bookings/{date}",
            get(get_booking_handler).fallback(method_not_allowed_handler),
        )
        .route(
            "/calendar",
            get(calendar_handler).fallback(method_not_allowed_handler),
        )
        .with_state(state)
}
