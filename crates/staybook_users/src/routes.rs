// --- File: crates/staybook_users/src/routes.rs ---

use crate::handlers::{login_handler, signup_handler, UsersState};
use axum::{routing::post, Router};
use staybook_common::method_not_allowed_handler;
use std::sync::Arc;

/// `/login` and `/signup`. Mounted under `/api`.
pub fn routes(state: Arc<UsersState>) -> Router {
    Router::new()
        .route(
            "/login",
            post(login_handler).fallback(method_not_allowed_handler),
        )
        .route(
            "/signup",
            post(signup_handler).fallback(method_not_allowed_handler),
        )
        .with_state(state)
}
