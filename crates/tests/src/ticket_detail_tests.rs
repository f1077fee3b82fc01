use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, Role, TicketStatus};

use crate::common::{self, StubBackend};

#[tokio::test]
async fn test_get_ticket_success() {
    let backend = StubBackend::start().await;
    backend.respond(
        "GET",
        "/api/v1/tickets/7",
        200,
        common::ticket_detail_json(7, 5, "en_traitement"),
    );

    let ticket = backend
        .client()
        .get_ticket(&common::session(Role::Agent, "2"), 7)
        .await
        .unwrap();
    assert_eq!(ticket.id, 7);
    assert_eq!(ticket.statut, TicketStatus::InProgress);
    assert_eq!(ticket.date_probleme, "2024-03-14");
}

#[tokio::test]
async fn test_get_ticket_not_found() {
    let backend = StubBackend::start().await;
    backend.respond(
        "GET",
        "/api/v1/tickets/404",
        404,
        json!({ "detail": "Ticket not found" }),
    );

    let err = backend
        .client()
        .get_ticket(&common::session(Role::User, "5"), 404)
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(err.ticket_message(), "Ticket non trouvé");
}

#[tokio::test]
async fn test_get_ticket_invalid_id() {
    let backend = StubBackend::start().await;
    backend.respond(
        "GET",
        "/api/v1/tickets/0",
        422,
        json!({ "detail": [{ "msg": "value is not a valid integer" }] }),
    );

    let err = backend
        .client()
        .get_ticket(&common::session(Role::Admin, "1"), 0)
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(err.ticket_message(), "Données invalides");
}

#[tokio::test]
async fn test_server_error_keeps_status_in_message() {
    let backend = StubBackend::start().await;
    backend.respond("GET", "/api/v1/tickets/9", 503, json!({}));

    let err = backend
        .client()
        .get_ticket(&common::session(Role::Admin, "1"), 9)
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::InternalError);
    assert_eq!(err.ticket_message(), "Erreur 503");
}
