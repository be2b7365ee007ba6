// --- File: crates/staybook_users/src/doc.rs ---
#![allow(dead_code)]
use utoipa::OpenApi;

use crate::models::{AuthResponse, Credentials};

#[utoipa::path(
    post,
    path = "/login", // Path relative to /api
    request_body(content = Credentials, example = json!({"username": "admin", "password": "admin"})),
    responses(
        (status = 200, description = "Logged in", body = AuthResponse,
         example = json!({"success": true, "username": "admin"})),
        (status = 400, description = "Malformed body or blank username"),
        (status = 401, description = "Unknown user or wrong password",
         example = json!({"message": "Invalid username or password", "code": 401})),
        (status = 500, description = "Row store failure")
    ),
    tag = "Users"
)]
fn doc_login_handler() {}

#[utoipa::path(
    post,
    path = "/signup",
    request_body(content = Credentials, example = json!({"username": "guest", "password": "secret"})),
    responses(
        (status = 201, description = "Account created", body = AuthResponse),
        (status = 400, description = "Blank username or password shorter than 4 characters"),
        (status = 409, description = "Username taken (ignoring case)",
         example = json!({"message": "Username 'Admin' is already taken", "code": 409})),
        (status = 500, description = "Row store failure")
    ),
    tag = "Users"
)]
fn doc_signup_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(doc_login_handler, doc_signup_handler),
    components(schemas(Credentials, AuthResponse)),
    tags(
        (name = "Users", description = "Signup and login")
    ),
    servers(
        (url = "/api", description = "Staybook API server")
    )
)]
pub struct UsersApiDoc;
