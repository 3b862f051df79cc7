//! Router assembly, health probes and graceful shutdown.
//!
//! ```ignore
//! let probes = health_router(app_info!());
//! let router = create_router::<ApiDoc>(api_routes, probes, &security)?;
//! create_production_app(router, &server, Duration::from_secs(30), async {}).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_production_app, create_router};
pub use health::{HealthCheckFuture, HealthResponse, health_router, run_health_checks};
pub use shutdown::{ShutdownCoordinator, shutdown_signal};
