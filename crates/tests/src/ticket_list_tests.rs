use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{Role, TicketStats, TicketStatus};

use crate::common::{self, StubBackend};

const TICKETS: &str = "/api/v1/tickets/";

#[tokio::test]
async fn test_list_sends_bearer_token() {
    let backend = StubBackend::start().await;
    backend.respond("GET", TICKETS, 200, json!([]));
    let session = common::session(Role::Admin, "1");

    let tickets = backend.client().list_tickets(&session).await.unwrap();
    assert!(tickets.is_empty());

    let sent = backend.last("GET", TICKETS);
    assert_eq!(
        sent.authorization,
        Some(format!("Bearer {}", session.token))
    );
}

#[tokio::test]
async fn test_list_reads_both_status_vocabularies() {
    let backend = StubBackend::start().await;
    backend.respond(
        "GET",
        TICKETS,
        200,
        json!([
            common::ticket_json(1, 5, Some("ouvert")),
            common::ticket_json(2, 5, Some("in_progress")),
            common::ticket_json(3, 6, Some("résolu")),
            common::ticket_json(4, 6, None),
            common::ticket_json(5, 6, Some("en_attente")),
        ]),
    );

    let tickets = backend
        .client()
        .list_tickets(&common::session(Role::Agent, "2"))
        .await
        .unwrap();
    let statuses: Vec<TicketStatus> = tickets.iter().map(|t| t.effective_status()).collect();
    assert_eq!(
        statuses,
        vec![
            TicketStatus::Open,
            TicketStatus::InProgress,
            TicketStatus::Resolved,
            TicketStatus::Open,
            TicketStatus::Other("en_attente".into()),
        ]
    );

    let stats = TicketStats::from_tickets(&tickets);
    assert_eq!(stats.total, 5);
    assert_eq!(stats.untreated(), 2);
    assert_eq!(stats.other, 1);
}

#[tokio::test]
async fn test_expired_token_is_an_auth_failure() {
    let backend = StubBackend::start().await;
    backend.respond(
        "GET",
        TICKETS,
        401,
        json!({ "detail": "Could not validate credentials" }),
    );

    let err = backend
        .client()
        .list_tickets(&common::session(Role::User, "5"))
        .await
        .unwrap_err();
    assert!(err.is_auth_failure());
}

#[tokio::test]
async fn test_malformed_payload_is_a_decode_error() {
    let backend = StubBackend::start().await;
    backend.respond("GET", TICKETS, 200, json!({ "tickets": [] }));

    let err = backend
        .client()
        .list_tickets(&common::session(Role::Admin, "1"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, shared_types::AppErrorKind::Decode);
}
