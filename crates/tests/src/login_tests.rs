use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, LoginForm, Role};

use crate::common::StubBackend;

const LOGIN: &str = "/api/v1/auth/login";

fn form(email: &str, password: &str) -> LoginForm {
    LoginForm {
        email: email.into(),
        password: password.into(),
    }
}

#[tokio::test]
async fn test_login_sends_password_grant_form() {
    let backend = StubBackend::start().await;
    backend.respond(
        "POST",
        LOGIN,
        200,
        json!({ "access_token": "tok", "userId": 12, "username": "Ada Lovelace", "role": "agent" }),
    );

    let response = backend
        .client()
        .login(&form("  ada@example.com ", "secret1"))
        .await
        .unwrap();

    let sent = backend.last("POST", LOGIN);
    assert_eq!(
        sent.content_type.as_deref(),
        Some("application/x-www-form-urlencoded")
    );
    assert_eq!(
        sent.body,
        "grant_type=password&username=ada%40example.com&password=secret1"
    );

    let session = response.into_session().unwrap();
    assert_eq!(session.token, "tok");
    assert_eq!(session.user_id, "12");
    assert_eq!(session.role, Role::Agent);
}

#[tokio::test]
async fn test_login_rejection_shows_backend_detail() {
    let backend = StubBackend::start().await;
    backend.respond(
        "POST",
        LOGIN,
        400,
        json!({ "detail": "Incorrect email or password" }),
    );

    let err = backend
        .client()
        .login(&form("ada@example.com", "wrong-pass"))
        .await
        .unwrap_err();
    assert_eq!(err.friendly_message(), "Incorrect email or password");
}

#[tokio::test]
async fn test_login_rejection_without_detail_falls_back() {
    let backend = StubBackend::start().await;
    backend.respond("POST", LOGIN, 401, json!({}));

    let err = backend
        .client()
        .login(&form("ada@example.com", "wrong-pass"))
        .await
        .unwrap_err();
    assert_eq!(err.friendly_message(), "Login failed");
    assert!(!err.is_auth_failure());
}

#[tokio::test]
async fn test_login_validation_list_uses_first_message() {
    let backend = StubBackend::start().await;
    backend.respond(
        "POST",
        LOGIN,
        422,
        json!({ "detail": [{ "loc": ["body", "username"], "msg": "field required" }] }),
    );

    let err = backend
        .client()
        .login(&form("ada@example.com", "secret1"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(err.friendly_message(), "field required");
}

#[tokio::test]
async fn test_invalid_form_never_reaches_backend() {
    let backend = StubBackend::start().await;

    let err = backend
        .client()
        .login(&form("not-an-email", "123"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field_errors.contains_key("email"));
    assert!(err.field_errors.contains_key("password"));
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn test_unknown_role_yields_no_session() {
    let backend = StubBackend::start().await;
    backend.respond(
        "POST",
        LOGIN,
        200,
        json!({ "access_token": "tok", "userId": "3", "username": "Root", "role": "superuser" }),
    );

    let response = backend
        .client()
        .login(&form("root@example.com", "secret1"))
        .await
        .unwrap();
    assert!(response.into_session().is_none());
}
