//! Users domain
//!
//! Users live in a process-local store seeded with two sample accounts.
//!
//! ```rust,no_run
//! use domain_users::{handlers, InMemoryUserStore, UserService};
//!
//! let router = handlers::router(UserService::new(InMemoryUserStore::seeded()));
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod service;
pub mod store;

pub use error::{UserError, UserResult};
pub use handlers::ApiDoc;
pub use models::{PASSWORD_RULE, User, UserDto};
pub use service::UserService;
pub use store::{InMemoryUserStore, UserStore};
