use uuid::Uuid;

/// Generate an identifier for a record that has not been stored yet.
///
/// Identifiers are random (UUID v4) strings; callers must treat them as
/// opaque and never parse them back.
pub fn generate_unique_id() -> String {
    Uuid::new_v4().to_string()
}
