//! Logging utilities for the Staybook application.
//!
//! All crates log through `tracing`; the binary calls [`init`] once at
//! startup. `RUST_LOG` directives are honoured on top of the default level.

use tracing::{error, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber at INFO.
///
/// ```
/// use staybook_common::logging;
///
/// logging::init();
/// // A second call is harmless.
/// logging::init_with_level(tracing::Level::DEBUG);
/// ```
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific level for the
/// `staybook*` targets and the HTTP trace layer.
pub fn init_with_level(level: Level) {
    let mut filter = EnvFilter::from_default_env();
    for directive in [format!("staybook={}", level), format!("tower_http={}", level)] {
        if let Ok(directive) = directive.parse() {
            filter = filter.add_directive(directive);
        }
    }

    // try_init: a global subscriber may already be installed (tests, doctests).
    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}

/// Log an error with context at the ERROR level.
pub fn log_error<E: std::fmt::Display>(error: E, context: &str) {
    error!("{}: {}", context, error);
}
