// --- File: crates/staybook_bookings/src/lib.rs ---
//! Bookings: one reservation per calendar date, and the month grid built
//! from them.

pub mod calendar;
#[cfg(test)]
mod calendar_proptest;
#[cfg(test)]
mod calendar_test;
#[cfg(feature = "openapi")]
pub mod doc;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod store;
pub mod validation;

pub use handlers::BookingsState;
pub use models::{demo_bookings, Booking};
pub use store::{BookingStore, BookingStoreError};
