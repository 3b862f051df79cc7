//! HTTP middleware: CORS, security headers and the access policy gate.

pub mod access;
pub mod cors;
pub mod security;

pub use access::enforce_access_policy;
pub use cors::create_cors_layer;
pub use security::security_headers;
