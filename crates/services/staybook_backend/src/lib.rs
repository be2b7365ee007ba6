// --- File: crates/services/staybook_backend/src/lib.rs ---
//! Wires the feature routers into one application.

pub mod app_state;
pub mod connection;
pub mod service_factory;

use axum::{routing::get, Router};
use staybook_common::method_not_allowed_handler;
use std::sync::Arc;

use crate::app_state::AppState;
use crate::connection::connection_check_handler;

/// The `/api` router with every feature merged in.
pub fn api_router(state: &AppState) -> Router {
    let core = Router::new()
        .route("/", get(|| async { "Welcome to the Staybook API!" }))
        .route(
            "/test",
            get(connection_check_handler).fallback(method_not_allowed_handler),
        )
        .with_state(Arc::new(state.clone()));

    let router = core
        .merge(staybook_bookings::routes::routes(state.bookings.clone()))
        .merge(staybook_users::routes::routes(state.users.clone()));

    Router::new().nest("/api", router)
}

/// Full application: API, optional Swagger UI and static files.
pub fn app(state: &AppState) -> Router {
    #[allow(unused_mut)] // mutated only with the openapi feature
    let mut app = api_router(state);

    #[cfg(feature = "openapi")]
    {
        app = app.merge(openapi::swagger_ui());
    }

    if let Some(dir) = state.config.static_dir.as_deref() {
        tracing::info!("Serving static files from {}", dir);
        app = app.fallback_service(tower_http::services::ServeDir::new(dir));
    }

    app
}

#[cfg(feature = "openapi")]
pub mod openapi {
    use staybook_bookings::doc::BookingsApiDoc;
    use staybook_users::doc::UsersApiDoc;
    use utoipa::OpenApi;
    use utoipa_swagger_ui::SwaggerUi;

    use crate::connection::{ConnectionStatus, SheetPresence};

    #[derive(OpenApi)]
    #[openapi(
        info(
            title = "Staybook API",
            version = "0.1.0",
            description = "Booking tracker backed by a spreadsheet",
            license(name = "MIT", url = "https://opensource.org/licenses/MIT")
        ),
        paths(crate::connection::connection_check_handler),
        components(schemas(ConnectionStatus, SheetPresence)),
        tags((name = "Diagnostics", description = "Connection check")),
        servers((url = "/api", description = "Main API Prefix")),
    )]
    struct ApiDoc;

    /// Merged document of every feature crate.
    pub fn document() -> utoipa::openapi::OpenApi {
        let mut doc = ApiDoc::openapi();
        doc.merge(BookingsApiDoc::openapi());
        doc.merge(UsersApiDoc::openapi());
        doc
    }

    pub fn swagger_ui() -> SwaggerUi {
        tracing::info!("Adding Swagger UI at /api/docs");
        SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", document())
    }
}
