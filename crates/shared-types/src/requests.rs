use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use crate::error::AppError;
use crate::session::{Role, Session};
use crate::ticket::NewTicket;

/// Sign-in form. The email is sent as the OAuth2 `username` field.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct LoginForm {
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Invalid email format")
    )]
    pub email: String,
    #[validate(
        custom(function = "validate_password_present"),
        length(min = 6, message = "Password must be at least 6 characters")
    )]
    pub password: String,
}

impl LoginForm {
    /// Validate with the email trimmed, the same value `as_form_fields` sends.
    pub fn check(&self) -> Result<(), AppError> {
        let normalized = LoginForm {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        };
        normalized.validate().map_err(AppError::from)
    }

    /// Form-encoded body of `POST /api/v1/auth/login`.
    pub fn as_form_fields(&self) -> [(&'static str, &str); 3] {
        [
            ("grant_type", "password"),
            ("username", self.email.trim()),
            ("password", self.password.as_str()),
        ]
    }
}

/// Account creation form.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct RegisterForm {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Family name is required"))]
    pub family_name: String,
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Invalid email format")
    )]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn check(&self) -> Result<(), AppError> {
        self.validate().map_err(AppError::from)
    }

    pub fn to_request(&self) -> CreateUserRequest {
        CreateUserRequest {
            name: format!("{} {}", self.first_name.trim(), self.family_name.trim()),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }

    /// Credentials used for the automatic sign-in after account creation.
    pub fn to_login(&self) -> LoginForm {
        LoginForm {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

/// Body of `POST /api/v1/users/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// User record returned after account creation. Only the fields the client
/// reads are modelled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreatedUser {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Successful `POST /api/v1/auth/login` payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(rename = "userId", deserialize_with = "string_or_number")]
    pub user_id: String,
    pub username: String,
    pub role: String,
}

impl LoginResponse {
    /// Build the session to persist, or `None` when the backend returned a
    /// role this client does not serve.
    pub fn into_session(self) -> Option<Session> {
        let role = Role::parse(&self.role)?;
        Some(Session {
            token: self.access_token,
            user_id: self.user_id,
            username: self.username,
            role,
        })
    }
}

/// Error body of FastAPI-style endpoints.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ErrorDetail {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorDetail {
    /// The `detail` as display text. Validation errors arrive as a list of
    /// objects with a `msg` field; the first one is used.
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
            serde_json::Value::Array(items) => items
                .iter()
                .find_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .map(String::from),
            _ => None,
        }
    }
}

/// "Create New Ticket" form.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct TicketForm {
    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,
    #[validate(custom(function = "validate_problem_date"))]
    pub problem_date: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
}

impl TicketForm {
    pub fn check(&self) -> Result<(), AppError> {
        self.validate().map_err(AppError::from)
    }

    /// Request body for the signed-in user.
    pub fn to_new_ticket(&self, session: &Session) -> Result<NewTicket, AppError> {
        self.check()?;
        let user_id = session
            .user_id
            .trim()
            .parse::<i64>()
            .map_err(|_| AppError::unauthorized("Session invalide, veuillez vous reconnecter"))?;
        Ok(NewTicket {
            sujet: self.subject.trim().to_string(),
            description: self.description.trim().to_string(),
            date_probleme: self.problem_date.trim().to_string(),
            user_id,
        })
    }
}

fn validate_password_present(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required")
            .with_message(Cow::Borrowed("Password is required")));
    }
    Ok(())
}

fn validate_problem_date(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required")
            .with_message(Cow::Borrowed("Date of the problem is required")));
    }
    chrono::NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| {
            ValidationError::new("date").with_message(Cow::Borrowed("Use the YYYY-MM-DD format"))
        })
}

/// Accept an identifier sent either as a JSON string or a JSON number.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Int(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Int(n) => n.to_string(),
    })
}
