//! Small building blocks shared by every domain crate.
//!
//! - [`id`]: opaque string identifiers for newly created records
//! - [`time`]: ISO-8601 formatting/parsing and the matching serde adapters
//! - [`base_entity`]: the audit-field shape records are stamped with

pub mod base_entity;
pub mod id;
pub mod time;

pub use base_entity::BaseEntity;
pub use id::generate_unique_id;
pub use time::{TimestampError, format_date_time, format_optional_date_time, parse_date_time};
