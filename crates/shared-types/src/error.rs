use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::requests::ErrorDetail;

/// Categorization of client-side errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    NotFound,
    BadRequest,
    ValidationError,
    Unauthorized,
    Forbidden,
    Network,
    Decode,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::Forbidden => write!(f, "Forbidden"),
            AppErrorKind::Network => write!(f, "Network"),
            AppErrorKind::Decode => write!(f, "Decode"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

/// Structured error surfaced by the API client and form validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::NotFound, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::BadRequest, message)
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Forbidden, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Network, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Decode, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::InternalError, message)
    }

    /// Map a non-success HTTP status to an error.
    ///
    /// `detail` is the backend's own explanation when it sent one; the ticket
    /// screens ignore it for 404/422 and show their fixed wording instead.
    pub fn from_status(status: u16, detail: Option<String>) -> Self {
        match status {
            404 => Self::not_found("Ticket non trouvé"),
            422 => Self::validation(
                detail.unwrap_or_else(|| "Données invalides".to_string()),
                HashMap::new(),
            ),
            401 => Self::unauthorized(detail.unwrap_or_else(|| "Session expirée".to_string())),
            403 => Self::forbidden(detail.unwrap_or_else(|| "Accès refusé".to_string())),
            400..=499 => Self::bad_request(detail.unwrap_or_else(|| format!("Erreur {status}"))),
            _ => Self::internal(format!("Erreur {status}")),
        }
    }

    /// Like [`AppError::from_status`], reading `detail` out of a raw JSON body.
    pub fn from_response_body(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorDetail>(body)
            .ok()
            .and_then(|d| d.message());
        Self::from_status(status, detail)
    }

    /// Message shown on the ticket screens. 404 and 422 use fixed wording.
    pub fn ticket_message(&self) -> String {
        match self.kind {
            AppErrorKind::NotFound => "Ticket non trouvé".to_string(),
            AppErrorKind::ValidationError if self.field_errors.is_empty() => {
                "Données invalides".to_string()
            }
            AppErrorKind::Network => "Serveur injoignable".to_string(),
            _ => self.message.clone(),
        }
    }

    /// Message shown on the sign-in / sign-up forms.
    pub fn friendly_message(&self) -> String {
        match self.kind {
            AppErrorKind::Network => "Server error. Please try again.".to_string(),
            _ if self.message.is_empty() => "Something went wrong. Please try again.".to_string(),
            _ => self.message.clone(),
        }
    }

    /// True when the stored credentials should be discarded.
    pub fn is_auth_failure(&self) -> bool {
        self.kind == AppErrorKind::Unauthorized
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        AppError::validation("Validation failed", field_errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_ticket_wording() {
        let err = AppError::from_status(404, Some("Not Found".into()));
        assert_eq!(err.kind, AppErrorKind::NotFound);
        assert_eq!(err.ticket_message(), "Ticket non trouvé");
    }

    #[test]
    fn unprocessable_maps_to_invalid_data() {
        let err = AppError::from_status(422, None);
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.ticket_message(), "Données invalides");
    }

    #[test]
    fn other_statuses() {
        assert_eq!(AppError::from_status(401, None).kind, AppErrorKind::Unauthorized);
        assert_eq!(AppError::from_status(403, None).kind, AppErrorKind::Forbidden);
        assert_eq!(AppError::from_status(409, None).kind, AppErrorKind::BadRequest);
        let err = AppError::from_status(503, None);
        assert_eq!(err.kind, AppErrorKind::InternalError);
        assert_eq!(err.message, "Erreur 503");
    }

    #[test]
    fn detail_from_response_body() {
        let err = AppError::from_response_body(400, r#"{"detail":"Incorrect email or password"}"#);
        assert_eq!(err.kind, AppErrorKind::BadRequest);
        assert_eq!(err.friendly_message(), "Incorrect email or password");
    }

    #[test]
    fn garbage_body_falls_back_to_status() {
        let err = AppError::from_response_body(400, "<html>oops</html>");
        assert_eq!(err.message, "Erreur 400");
    }

    #[test]
    fn network_errors_have_generic_wording() {
        let err = AppError::network("connection refused");
        assert_eq!(err.friendly_message(), "Server error. Please try again.");
        assert_eq!(err.ticket_message(), "Serveur injoignable");
    }

    #[test]
    fn empty_message_gets_fallback() {
        assert_eq!(
            AppError::bad_request("").friendly_message(),
            "Something went wrong. Please try again."
        );
    }

    #[test]
    fn only_unauthorized_is_an_auth_failure() {
        assert!(AppError::from_status(401, None).is_auth_failure());
        assert!(!AppError::from_status(403, None).is_auth_failure());
    }

    #[test]
    fn display_impl_formats_correctly() {
        let err = AppError::unauthorized("bad credentials");
        assert_eq!(format!("{}", err), "Unauthorized: bad credentials");
    }

    #[test]
    fn validation_error_includes_field_errors() {
        let mut fields = HashMap::new();
        fields.insert("email".to_string(), "invalid format".to_string());
        let err = AppError::validation("Validation failed", fields);
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.field_errors.get("email").unwrap(), "invalid format");
        assert_eq!(err.ticket_message(), "Validation failed");
    }
}
