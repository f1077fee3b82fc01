use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use api::TicketApi;
use axum::{
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::{json, Value};
use shared_types::{ClientConfig, Role, Session};

/// One request as the stub backend saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Clone, Default)]
struct StubState {
    responses: Arc<Mutex<HashMap<(String, String), (u16, Value)>>>,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

/// In-process stand-in for the support desk backend.
///
/// Every request is recorded. Canned responses are keyed by method and path;
/// anything else answers 404 with a FastAPI-style `detail`.
pub struct StubBackend {
    state: StubState,
    base_url: String,
}

impl StubBackend {
    /// Bind on an ephemeral local port and start serving.
    pub async fn start() -> Self {
        let state = StubState::default();
        let app = Router::new().fallback(handle).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub backend");
        let addr = listener.local_addr().expect("Failed to read stub address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Stub backend stopped");
        });

        Self {
            state,
            base_url: format!("http://{addr}"),
        }
    }

    /// Answer `method path` with `status` and a JSON body.
    pub fn respond(&self, method: &str, path: &str, status: u16, body: Value) {
        self.state
            .responses
            .lock()
            .unwrap()
            .insert((method.to_string(), path.to_string()), (status, body));
    }

    /// Client pointed at this backend.
    pub fn client(&self) -> TicketApi {
        TicketApi::new(ClientConfig::default().with_base_url(Some(&self.base_url)))
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    /// The last recorded request for `method path`.
    pub fn last(&self, method: &str, path: &str) -> Recorded {
        self.requests()
            .into_iter()
            .rev()
            .find(|r| r.method == method && r.path == path)
            .unwrap_or_else(|| panic!("no {method} {path} recorded"))
    }
}

async fn handle(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
    };
    let path = uri.path().to_string();
    state.requests.lock().unwrap().push(Recorded {
        method: method.to_string(),
        path: path.clone(),
        authorization: header("authorization"),
        content_type: header("content-type"),
        body,
    });

    let canned = state
        .responses
        .lock()
        .unwrap()
        .get(&(method.to_string(), path))
        .cloned();
    match canned {
        Some((status, body)) => {
            let status = StatusCode::from_u16(status).unwrap();
            (status, Json(body)).into_response()
        }
        None => (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not Found" }))).into_response(),
    }
}

/// A signed-in session with a fresh random token.
pub fn session(role: Role, user_id: &str) -> Session {
    Session {
        token: uuid::Uuid::new_v4().to_string(),
        user_id: user_id.to_string(),
        username: format!("{role} {user_id}"),
        role,
    }
}

/// Backend JSON for one ticket summary.
pub fn ticket_json(id: i64, user_id: i64, status: Option<&str>) -> Value {
    let mut ticket = json!({
        "id": id,
        "sujet": format!("Ticket {id}"),
        "description": format!("Description du ticket {id}"),
        "user_id": user_id,
    });
    if let Some(status) = status {
        ticket["status"] = json!(status);
    }
    ticket
}

/// Backend JSON for a full ticket.
pub fn ticket_detail_json(id: i64, user_id: i64, statut: &str) -> Value {
    json!({
        "id": id,
        "sujet": format!("Ticket {id}"),
        "description": "Imprimante bloquée",
        "date_creation": "2024-03-15T14:30:00",
        "date_probleme": "2024-03-14",
        "user_id": user_id,
        "statut": statut,
    })
}
