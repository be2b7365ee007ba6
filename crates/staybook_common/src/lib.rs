// --- File: crates/staybook_common/src/lib.rs ---

pub mod error; // Error taxonomy
pub mod http; // HTTP error mapping
pub mod logging; // Logging utilities
pub mod memory; // In-memory row store
pub mod models; // Shared response types
pub mod services; // Row store abstraction

// Re-export error types and utilities for easier access
pub use error::{config_error, not_found, validation_error, HttpStatusCode, StaybookError};

pub use http::{method_not_allowed_handler, IntoHttpResponse};

pub use logging::{init, init_with_level, log_error};

pub use memory::MemoryRowStore;
pub use models::ActionResponse;
pub use services::{
    BackendStatus, BoxFuture, BoxedError, InsertOutcome, KeyMatch, Row, RowMatch, RowStore,
    RowStoreError, DATE_KEY_FORMAT,
};
