//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::account_handler;

/// OpenAPI documentation for the account registration API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Account Registrar",
        version = "0.1.0",
        description = "Account registration over Axum and SeaORM",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(account_handler::create_account),
    components(schemas(account_handler::CreateAccountRequest)),
    tags(
        (name = "Accounts", description = "Account registration")
    )
)]
pub struct ApiDoc;
