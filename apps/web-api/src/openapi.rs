//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "MonoRepo Web Application API",
        version = "1.0.0",
        description = "Product and user management REST API"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/products", api = domain_products::ApiDoc),
        (path = "/api/users", api = domain_users::ApiDoc)
    )
)]
pub struct ApiDoc;
