// --- File: crates/services/staybook_backend/src/app_state.rs ---
use chrono_tz::Tz;
use staybook_bookings::BookingsState;
use staybook_common::{RowStore, StaybookError};
use staybook_config::AppConfig;
use staybook_users::UsersState;
use std::str::FromStr;
use std::sync::Arc;
use tracing::warn;

use crate::service_factory::StaybookServiceFactory;

/// Application state shared across all routes.
///
/// Every store is built from one row store owned by the service factory;
/// handlers get their slice of it through their own state type.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub service_factory: Arc<StaybookServiceFactory>,
    pub bookings: Arc<BookingsState>,
    pub users: Arc<UsersState>,
}

pub struct AppStateBuilder {
    config: Arc<AppConfig>,
    row_store: Option<Arc<dyn RowStore>>,
}

/// Resolves the configured calendar time zone, falling back to UTC.
pub fn calendar_time_zone(config: &AppConfig) -> Tz {
    match config.time_zone() {
        Some(name) => Tz::from_str(name).unwrap_or_else(|_| {
            warn!("Unknown time zone '{}', using UTC", name);
            Tz::UTC
        }),
        None => Tz::UTC,
    }
}

impl AppStateBuilder {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self {
            config,
            row_store: None,
        }
    }

    /// Uses the given row store instead of the one the configuration names.
    pub fn with_row_store(mut self, row_store: Arc<dyn RowStore>) -> Self {
        self.row_store = Some(row_store);
        self
    }

    /// Connects the row store and prepares its sheets.
    pub async fn build(self) -> Result<AppState, StaybookError> {
        let factory = match self.row_store {
            Some(row_store) => StaybookServiceFactory::with_row_store(self.config.clone(), row_store),
            None => StaybookServiceFactory::new(self.config.clone()).await?,
        };
        factory.init_stores().await?;

        let bookings = Arc::new(BookingsState {
            store: factory.booking_store(),
            time_zone: calendar_time_zone(&self.config),
        });
        let users = Arc::new(UsersState {
            store: factory.user_store(),
        });

        Ok(AppState {
            config: self.config,
            service_factory: Arc::new(factory),
            bookings,
            users,
        })
    }
}

impl AppState {
    pub fn builder(config: Arc<AppConfig>) -> AppStateBuilder {
        AppStateBuilder::new(config)
    }

    pub async fn new(config: Arc<AppConfig>) -> Result<Self, StaybookError> {
        AppStateBuilder::new(config).build().await
    }
}
