// File: crates/staybook_users/src/handlers.rs
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use staybook_common::StaybookError;
use std::sync::Arc;

use crate::models::{AuthResponse, LoginRequest, SignupRequest};
use crate::store::UserStore;

#[derive(Clone)]
pub struct UsersState {
    pub store: UserStore,
}

pub async fn login_handler(
    State(state): State<Arc<UsersState>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, StaybookError> {
    let Json(payload) = payload?;
    let user = state.store.login(&payload.username, &payload.password).await?;
    Ok(Json(AuthResponse {
        success: true,
        username: user.username,
    }))
}

pub async fn signup_handler(
    State(state): State<Arc<UsersState>>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AuthResponse>), StaybookError> {
    let Json(payload) = payload?;
    let user = state
        .store
        .signup(&payload.username, &payload.password)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            success: true,
            username: user.username,
        }),
    ))
}
