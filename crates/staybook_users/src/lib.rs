// --- File: crates/staybook_users/src/lib.rs ---
#[cfg(feature = "openapi")]
pub mod doc;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod store;

pub use handlers::UsersState;
pub use models::{demo_users, User};
pub use store::{UserStore, UserStoreError};
