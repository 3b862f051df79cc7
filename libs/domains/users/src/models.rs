use chrono::{DateTime, Utc};
use core_common::BaseEntity;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use utoipa::ToSchema;
use validator::{Validate, ValidateEmail, ValidationError};

pub const PASSWORD_RULE: &str =
    "Password must be at least 8 characters and include a number, lowercase and uppercase letter";

/// User held by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub base: BaseEntity,
    pub username: String,
    pub email: String,
    /// Stored exactly as submitted.
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    pub fn from_dto(dto: UserDto, base: BaseEntity) -> Self {
        Self {
            base,
            username: dto.username,
            email: dto.email,
            password: dto.password,
            first_name: dto.first_name,
            last_name: dto.last_name,
        }
    }

    pub fn id(&self) -> &str {
        &self.base.id
    }
}

/// User request and response body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(read_only)]
    pub id: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_username"))]
    #[schema(example = "user1")]
    pub username: String,

    #[serde(default)]
    #[validate(custom(function = "validate_email_address"))]
    #[schema(example = "user1@example.com")]
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_password"))]
    #[schema(example = "Secret123", min_length = 8)]
    pub password: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "John")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Doe")]
    pub last_name: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "core_common::time::iso8601::option"
    )]
    #[schema(value_type = Option<String>, format = DateTime, read_only)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "core_common::time::iso8601::option"
    )]
    #[schema(value_type = Option<String>, format = DateTime, read_only)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: Some(user.base.id),
            username: user.username,
            email: user.email,
            password: user.password,
            first_name: user.first_name,
            last_name: user.last_name,
            created_at: Some(user.base.created_at),
            updated_at: user.base.updated_at,
        }
    }
}

fn rule(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.trim().is_empty() {
        return Err(rule("required", "Username is required"));
    }
    Ok(())
}

/// `local@domain` with at least one dot in the domain.
fn validate_email_address(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(rule("required", "Email is required"));
    }

    let dotted_domain = email
        .rsplit_once('@')
        .is_some_and(|(_, domain)| domain.contains('.') && !domain.ends_with('.'));

    if !email.validate_email() || !dotted_domain {
        return Err(rule("email", "Email should be valid"));
    }
    Ok(())
}

/// Line terminators never count toward the length and are not allowed.
fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}')
}

fn validate_password(password: &str) -> Result<(), ValidationError> {
    let strong = !password.chars().any(is_line_terminator)
        && password.chars().count() >= 8
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase());

    if !strong {
        return Err(rule("password", PASSWORD_RULE));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid() -> UserDto {
        UserDto {
            username: "bob".to_string(),
            email: "bob@example.com".to_string(),
            password: Some("Bob12345".to_string()),
            ..Default::default()
        }
    }

    fn messages(dto: &UserDto, field: &str) -> Vec<String> {
        dto.validate()
            .unwrap_err()
            .field_errors()
            .get(field)
            .map(|errors| {
                errors
                    .iter()
                    .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                    .collect()
            })
            .unwrap_or_default()
    }

    #[test]
    fn test_valid_user_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_password_rule() {
        let mut dto = valid();

        dto.password = Some("abc12345".to_string());
        assert_eq!(messages(&dto, "password"), vec![PASSWORD_RULE]);

        dto.password = Some("Abc12345".to_string());
        assert!(dto.validate().is_ok());

        dto.password = Some("Ab1".to_string());
        assert!(dto.validate().is_err());

        dto.password = Some("ABCDEFGH1".to_string());
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_password_with_line_terminator_is_rejected() {
        let mut dto = valid();

        for password in [
            "Abcdefg1\n",
            "Abc\n12345",
            "Abc1234\r\n",
            "Abc12345\r",
            "Abc12345\u{85}",
            "Abc12345\u{2028}",
            "Abc12345\u{2029}",
        ] {
            dto.password = Some(password.to_string());
            assert_eq!(messages(&dto, "password"), vec![PASSWORD_RULE], "{:?}", password);
        }
    }

    #[test]
    fn test_absent_password_is_accepted() {
        let mut dto = valid();
        dto.password = None;
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_blank_username() {
        let mut dto = valid();
        dto.username = "   ".to_string();
        assert_eq!(messages(&dto, "username"), vec!["Username is required"]);
    }

    #[test]
    fn test_email_rules() {
        let mut dto = valid();

        dto.email = String::new();
        assert_eq!(messages(&dto, "email"), vec!["Email is required"]);

        dto.email = "not-an-email".to_string();
        assert_eq!(messages(&dto, "email"), vec!["Email should be valid"]);

        dto.email = "bob@localhost".to_string();
        assert_eq!(messages(&dto, "email"), vec!["Email should be valid"]);
    }

    #[test]
    fn test_missing_fields_deserialize_as_blank() {
        let dto: UserDto = serde_json::from_value(json!({})).unwrap();
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("username"));
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_dto_from_user_omits_absent_fields() {
        let user = User::from_dto(valid(), BaseEntity::new());
        let value = serde_json::to_value(UserDto::from(user.clone())).unwrap();

        assert_eq!(value["id"], user.id());
        assert_eq!(value["password"], "Bob12345");
        assert!(value.get("firstName").is_none());
        assert!(value.get("updatedAt").is_none());
        assert!(value["createdAt"].is_string());
    }
}
