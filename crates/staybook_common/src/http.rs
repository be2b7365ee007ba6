// --- File: crates/staybook_common/src/http.rs ---
use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::error::{HttpStatusCode, StaybookError};

/// Extension trait for StaybookError to convert it to an Axum HTTP response.
pub trait IntoHttpResponse {
    /// Converts the error into an Axum HTTP response.
    fn into_http_response(self) -> Response;
}

impl IntoHttpResponse for StaybookError {
    fn into_http_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Error bodies always carry `message`; server-side failures also
        // expose the cause chain under `error`.
        let body = if status_code.is_server_error() {
            let cause = self.cause_chain();
            error!("Request failed: {} (cause: {:?})", self, cause);
            Json(json!({
                "message": self.to_string(),
                "code": status_code.as_u16(),
                "error": cause.unwrap_or_else(|| self.to_string()),
            }))
        } else {
            Json(json!({
                "message": self.to_string(),
                "code": status_code.as_u16(),
            }))
        };

        (status_code, body).into_response()
    }
}

/// Implement IntoResponse for StaybookError so handlers can return it directly.
impl IntoResponse for StaybookError {
    fn into_response(self) -> Response {
        self.into_http_response()
    }
}

impl From<JsonRejection> for StaybookError {
    fn from(rejection: JsonRejection) -> Self {
        StaybookError::ValidationError(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for StaybookError {
    fn from(rejection: QueryRejection) -> Self {
        StaybookError::ValidationError(format!("Invalid query: {}", rejection.body_text()))
    }
}

/// Fallback for methods a route does not serve.
pub async fn method_not_allowed_handler() -> StaybookError {
    StaybookError::MethodNotAllowed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StaybookError;
    use crate::services::RowStoreError;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn client_errors_carry_only_message_and_code() {
        let response =
            StaybookError::ConflictError("Date already booked".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Date already booked");
        assert_eq!(body["code"], 409);
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn backend_errors_expose_their_cause() {
        let err: StaybookError = RowStoreError::backend(
            "appending to Bookings",
            std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused"),
        )
        .into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert!(body["message"].as_str().unwrap().starts_with("Backend unavailable"));
        assert!(body["error"].as_str().unwrap().contains("connection refused"));
    }

    #[tokio::test]
    async fn method_not_allowed_is_405() {
        let response = method_not_allowed_handler().await.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body_json(response).await["message"], "Method not allowed");
    }
}
