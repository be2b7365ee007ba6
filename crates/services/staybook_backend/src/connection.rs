// --- File: crates/services/staybook_backend/src/connection.rs ---
//! `GET /api/test`: can the backing spreadsheet be reached, and does it hold
//! the sheets the application needs.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use staybook_common::log_error;
use std::sync::Arc;

use crate::app_state::AppState;

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SheetPresence {
    pub users: bool,
    pub bookings: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ConnectionStatus {
    #[cfg_attr(feature = "openapi", schema(example = "Connection Successful"))]
    pub message: String,
    pub sheet_title: String,
    pub sheets: SheetPresence,
}

#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/test", // Path relative to /api
    responses(
        (status = 200, description = "Row store reachable", body = ConnectionStatus),
        (status = 500, description = "Row store unreachable",
         example = json!({"message": "Connection Failed", "error": "Row store is not configured"}))
    ),
    tag = "Diagnostics"
))]
pub async fn connection_check_handler(State(state): State<Arc<AppState>>) -> Response {
    match state.service_factory.row_store().status().await {
        Ok(status) => Json(ConnectionStatus {
            message: "Connection Successful".to_string(),
            sheets: SheetPresence {
                users: status.has_sheet(state.config.users_sheet()),
                bookings: status.has_sheet(state.config.bookings_sheet()),
            },
            sheet_title: status.title,
        })
        .into_response(),
        Err(e) => {
            log_error(&e, "Connection check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "message": "Connection Failed",
                    "error": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}
