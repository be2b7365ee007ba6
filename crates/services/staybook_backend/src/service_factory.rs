// --- File: crates/services/staybook_backend/src/service_factory.rs ---
//! Builds the row store the rest of the application runs on.
//!
//! `use_sheets = true` connects to Google Sheets; otherwise everything lives
//! in a [`MemoryRowStore`], optionally seeded with demo data.
use staybook_bookings::{demo_bookings, BookingStore};
use staybook_common::{MemoryRowStore, RowStore, StaybookError};
use staybook_config::{AppConfig, SheetsConfig};
use staybook_users::{demo_users, UserStore};
use std::sync::Arc;
use tracing::{info, warn};

pub struct StaybookServiceFactory {
    config: Arc<AppConfig>,
    row_store: Arc<dyn RowStore>,
}

impl StaybookServiceFactory {
    /// Picks and connects the row store described by `config`.
    pub async fn new(config: Arc<AppConfig>) -> Result<Self, StaybookError> {
        let row_store: Arc<dyn RowStore> = if config.use_sheets {
            info!("Connecting to Google Sheets...");
            let default_sheets = SheetsConfig::default();
            let sheets = config.sheets.as_ref().unwrap_or(&default_sheets);
            let store = staybook_sheets::connect(sheets)
                .await
                .map_err(staybook_common::RowStoreError::from)?;
            Arc::new(store)
        } else {
            info!("Using the in-memory row store");
            Arc::new(MemoryRowStore::new())
        };
        Ok(Self::with_row_store(config, row_store))
    }

    /// Wraps an already built row store.
    pub fn with_row_store(config: Arc<AppConfig>, row_store: Arc<dyn RowStore>) -> Self {
        Self { config, row_store }
    }

    pub fn row_store(&self) -> Arc<dyn RowStore> {
        self.row_store.clone()
    }

    pub fn booking_store(&self) -> BookingStore {
        BookingStore::new(self.row_store(), self.config.bookings_sheet())
    }

    pub fn user_store(&self) -> UserStore {
        UserStore::new(self.row_store(), self.config.users_sheet())
    }

    /// Creates both sheets if missing and seeds demo data when asked to.
    pub async fn init_stores(&self) -> Result<(), StaybookError> {
        let bookings = self.booking_store();
        let users = self.user_store();
        bookings.init().await?;
        users.init().await?;

        if !self.config.seed_demo_data {
            return Ok(());
        }
        if self.config.use_sheets {
            warn!("seed_demo_data is ignored when use_sheets is on");
            return Ok(());
        }

        for booking in demo_bookings() {
            if let Err(e) = bookings.add(&booking).await {
                warn!("Demo booking for {} not added: {}", booking.date, e);
            }
        }
        for user in demo_users() {
            if let Err(e) = users.signup(&user.username, &user.password).await {
                warn!("Demo user {} not added: {}", user.username, e);
            }
        }
        info!("Seeded demo bookings and users");
        Ok(())
    }
}
