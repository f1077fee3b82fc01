use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shared_types::{AppErrorKind, RegisterForm, Role};

use crate::common::StubBackend;

const USERS: &str = "/api/v1/users/";
const LOGIN: &str = "/api/v1/auth/login";

fn form() -> RegisterForm {
    RegisterForm {
        first_name: "Grace".into(),
        family_name: "Hopper".into(),
        email: "grace@example.com".into(),
        password: "cobol1959".into(),
        confirm_password: "cobol1959".into(),
    }
}

#[tokio::test]
async fn test_register_then_sign_in() {
    let backend = StubBackend::start().await;
    backend.respond(
        "POST",
        USERS,
        200,
        json!({ "id": 31, "name": "Grace Hopper", "email": "grace@example.com" }),
    );
    backend.respond(
        "POST",
        LOGIN,
        200,
        json!({ "access_token": "fresh", "userId": 31, "username": "Grace Hopper", "role": "user" }),
    );

    let session = backend
        .client()
        .register_and_login(&form())
        .await
        .unwrap()
        .into_session()
        .unwrap();
    assert_eq!(session.role, Role::User);
    assert_eq!(session.user_id, "31");

    let paths: Vec<String> = backend.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(paths, vec![USERS.to_string(), LOGIN.to_string()]);

    let created: Value = serde_json::from_str(&backend.last("POST", USERS).body).unwrap();
    assert_eq!(
        created,
        json!({ "name": "Grace Hopper", "email": "grace@example.com", "password": "cobol1959" })
    );
}

#[tokio::test]
async fn test_rejected_registration_skips_login() {
    let backend = StubBackend::start().await;
    backend.respond(
        "POST",
        USERS,
        400,
        json!({ "detail": "Email already registered" }),
    );

    let err = backend
        .client()
        .register_and_login(&form())
        .await
        .unwrap_err();
    assert_eq!(err.friendly_message(), "Email already registered");
    assert_eq!(backend.requests().len(), 1);
}

#[tokio::test]
async fn test_registration_server_error_without_detail() {
    let backend = StubBackend::start().await;
    backend.respond("POST", USERS, 500, json!({}));

    let err = backend
        .client()
        .register_and_login(&form())
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::InternalError);
    assert_eq!(err.friendly_message(), "Registration failed");
}

#[tokio::test]
async fn test_mismatched_passwords_fail_locally() {
    let backend = StubBackend::start().await;
    let mut form = form();
    form.confirm_password = "cobol1960".into();

    let err = backend
        .client()
        .register_and_login(&form)
        .await
        .unwrap_err();
    assert!(err.field_errors.contains_key("confirm_password"));
    assert!(backend.requests().is_empty());
}
