// --- File: crates/staybook_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

use crate::services::{BoxedError, RowStoreError};

/// The base error type for all Staybook errors.
///
/// Each crate keeps its own error enum and implements `From<ItsError>` for
/// `StaybookError`, so handlers can finish with `?` and let the HTTP layer
/// pick the status code.
#[derive(Error, Debug)]
pub enum StaybookError {
    /// Malformed or incomplete input, rejected before reaching a store.
    #[error("{0}")]
    ValidationError(String),

    /// Invalid credentials.
    #[error("{0}")]
    AuthError(String),

    /// The addressed record does not exist.
    #[error("{0}")]
    NotFoundError(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The record's unique key already exists.
    #[error("{0}")]
    ConflictError(String),

    /// The storage collaborator is unreachable or misconfigured.
    #[error("Backend unavailable: {message}")]
    BackendUnavailable {
        message: String,
        #[source]
        cause: Option<BoxedError>,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for StaybookError {
    fn status_code(&self) -> u16 {
        match self {
            StaybookError::ValidationError(_) => 400,
            StaybookError::AuthError(_) => 401,
            StaybookError::NotFoundError(_) => 404,
            StaybookError::MethodNotAllowed => 405,
            StaybookError::ConflictError(_) => 409,
            StaybookError::BackendUnavailable { .. } => 500,
            StaybookError::ConfigError(_) => 500,
            StaybookError::InternalError(_) => 500,
        }
    }
}

impl StaybookError {
    /// The underlying cause chain, for diagnostics.
    pub fn cause_chain(&self) -> Option<String> {
        let mut source = std::error::Error::source(self)?;
        let mut chain = source.to_string();
        while let Some(next) = source.source() {
            chain.push_str(": ");
            chain.push_str(&next.to_string());
            source = next;
        }
        Some(chain)
    }
}

impl From<RowStoreError> for StaybookError {
    fn from(err: RowStoreError) -> Self {
        match err {
            RowStoreError::NotConfigured(message) => StaybookError::ConfigError(message),
            other => StaybookError::BackendUnavailable {
                message: other.to_string(),
                cause: Some(BoxedError(Box::new(other))),
            },
        }
    }
}

impl From<std::io::Error> for StaybookError {
    fn from(err: std::io::Error) -> Self {
        StaybookError::InternalError(err.to_string())
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> StaybookError {
    StaybookError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> StaybookError {
    StaybookError::ValidationError(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> StaybookError {
    StaybookError::NotFoundError(message.to_string())
}
