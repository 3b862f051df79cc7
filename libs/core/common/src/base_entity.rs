use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::generate_unique_id;

/// Audit fields every stored record carries.
///
/// `created_by` and `updated_by` are part of the shape but stay empty until
/// requests carry an authenticated principal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseEntity {
    pub id: String,
    #[serde(with = "crate::time::iso8601")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "crate::time::iso8601::option")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub updated_by: Option<String>,
}

impl BaseEntity {
    /// Fresh identity with the creation stamp set to now.
    pub fn new() -> Self {
        Self::created_at(Utc::now())
    }

    pub fn created_at(at: DateTime<Utc>) -> Self {
        Self {
            id: generate_unique_id(),
            created_at: at,
            updated_at: None,
            created_by: None,
            updated_by: None,
        }
    }

    /// Audit fields of a record that is already stored.
    pub fn existing(
        id: impl Into<String>,
        created_at: DateTime<Utc>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id: id.into(),
            created_at,
            updated_at,
            created_by: None,
            updated_by: None,
        }
    }

    /// Stamp a modification. Identity and creation time are never touched.
    pub fn touched(mut self) -> Self {
        self.updated_at = Some(Utc::now());
        self
    }

    pub fn last_modified(&self) -> DateTime<Utc> {
        self.updated_at.unwrap_or(self.created_at)
    }
}

impl Default for BaseEntity {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_new_has_identity_and_no_update_stamp() {
        let base = BaseEntity::new();
        assert!(!base.id.is_empty());
        assert!(base.updated_at.is_none());
        assert!(base.created_by.is_none());
        assert_eq!(base.last_modified(), base.created_at);
    }

    #[test]
    fn test_touched_keeps_identity() {
        let created = Utc::now() - Duration::minutes(5);
        let base = BaseEntity::existing("abc", created, None);

        let touched = base.clone().touched();

        assert_eq!(touched.id, "abc");
        assert_eq!(touched.created_at, created);
        assert!(touched.updated_at.unwrap() > created);
        assert_eq!(touched.last_modified(), touched.updated_at.unwrap());
    }

    #[test]
    fn test_serializes_camel_case() {
        let base = BaseEntity::existing("abc", Utc::now(), None);
        let json = serde_json::to_value(&base).unwrap();
        assert_eq!(json["id"], "abc");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("createdBy").is_some());
    }
}
