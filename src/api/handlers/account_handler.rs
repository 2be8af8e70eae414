//! Account handlers.

use axum::{extract::State, http::StatusCode, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::errors::AppResult;

/// Account registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAccountRequest {
    /// Display name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Email address, unique across accounts
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "ada@example.com")]
    pub email: String,
    /// Plain text password
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "s3cret")]
    pub password: String,
}

/// Create account routes
pub fn account_routes() -> Router<AppState> {
    Router::new().route("/accounts", post(create_account))
}

/// Register a new account
#[utoipa::path(
    post,
    path = "/accounts",
    tag = "Accounts",
    request_body = CreateAccountRequest,
    responses(
        (status = 201, description = "Account created"),
        (status = 400, description = "Validation error"),
        (status = 409, description = "user with same e-mail address already exists")
    )
)]
pub async fn create_account(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateAccountRequest>,
) -> AppResult<StatusCode> {
    state
        .account_service
        .register(payload.name, payload.email, payload.password)
        .await?;

    Ok(StatusCode::CREATED)
}
