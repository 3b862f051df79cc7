//! # Axum Helpers
//!
//! Shared HTTP plumbing for the web API:
//!
//! - **[`server`]**: router assembly with OpenAPI docs, health probes, graceful shutdown
//! - **[`http`]**: access policy, CORS and security header middleware
//! - **[`errors`]**: JSON error envelope and [`AppError`]
//! - **[`extractors`]**: [`ValidatedJson`]
//! - **[`audit`]**: audit events for mutations

pub mod audit;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks, shutdown_signal,
};

pub use http::{create_cors_layer, enforce_access_policy, security_headers};

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::ValidatedJson;

pub use audit::{AuditEvent, AuditOutcome, client_ip};
