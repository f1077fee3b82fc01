use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shared_types::{Role, TicketForm, TicketStatus};

use crate::common::{self, StubBackend};

const TICKETS: &str = "/api/v1/tickets/";

fn form() -> TicketForm {
    TicketForm {
        subject: " Écran noir ".into(),
        problem_date: "2024-03-14".into(),
        description: "Le poste 12 ne démarre plus.".into(),
    }
}

#[tokio::test]
async fn test_create_ticket_posts_json_for_the_session_user() {
    let backend = StubBackend::start().await;
    backend.respond(
        "POST",
        TICKETS,
        200,
        common::ticket_detail_json(21, 5, "ouvert"),
    );
    let session = common::session(Role::User, "5");

    let new_ticket = form().to_new_ticket(&session).unwrap();
    let created = backend
        .client()
        .create_ticket(&session, &new_ticket)
        .await
        .unwrap();
    assert_eq!(created.id, 21);
    assert_eq!(created.statut, TicketStatus::Open);

    let sent = backend.last("POST", TICKETS);
    assert_eq!(sent.content_type.as_deref(), Some("application/json"));
    assert_eq!(
        sent.authorization,
        Some(format!("Bearer {}", session.token))
    );
    let body: Value = serde_json::from_str(&sent.body).unwrap();
    assert_eq!(
        body,
        json!({
            "sujet": "Écran noir",
            "description": "Le poste 12 ne démarre plus.",
            "date_probleme": "2024-03-14",
            "user_id": 5,
        })
    );
}

#[test]
fn test_incomplete_form_is_rejected_locally() {
    let session = common::session(Role::User, "5");
    let mut form = form();
    form.subject.clear();
    form.problem_date = "14/03/2024".into();

    let err = form.to_new_ticket(&session).unwrap_err();
    assert!(err.field_errors.contains_key("subject"));
    assert!(err.field_errors.contains_key("problem_date"));
}

#[test]
fn test_session_without_numeric_id_cannot_create() {
    let session = common::session(Role::User, "abc");
    let err = form().to_new_ticket(&session).unwrap_err();
    assert!(err.is_auth_failure());
}
