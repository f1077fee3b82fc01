pub mod create;
pub mod detail;
pub mod list;

use api::TicketApi;
use dioxus::prelude::*;
use shared_types::{AppError, Session, TicketSummary};

use crate::auth::use_auth;
use crate::routes::Route;

/// Which role subtree a ticket page is rendered in. Decides the rows shown
/// and where links point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TicketScope {
    Admin,
    Agent,
    /// Agent queue restricted to tickets nobody has picked up.
    AgentUntreated,
    /// A client's own tickets.
    Client,
}

impl TicketScope {
    pub fn title(&self) -> &'static str {
        match self {
            TicketScope::Admin => "Tous les tickets",
            TicketScope::Agent => "Tickets",
            TicketScope::AgentUntreated => "Tickets non traités",
            TicketScope::Client => "Mes tickets",
        }
    }

    pub fn list_route(&self) -> Route {
        match self {
            TicketScope::Admin => Route::AdminTickets {},
            TicketScope::Agent => Route::AgentTickets {},
            TicketScope::AgentUntreated => Route::AgentUntreatedTickets {},
            TicketScope::Client => Route::ClientTickets {},
        }
    }

    pub fn detail_route(&self, id: i64) -> Route {
        match self {
            TicketScope::Admin => Route::AdminTicketDetail { id },
            TicketScope::Agent | TicketScope::AgentUntreated => Route::AgentTicketDetail { id },
            TicketScope::Client => Route::ClientTicketDetail { id },
        }
    }

    pub fn can_create(&self) -> bool {
        matches!(self, TicketScope::Client)
    }

    /// Rows this scope shows out of the full list.
    ///
    /// Clients see only tickets carrying their user id; a non-numeric id
    /// matches nothing.
    pub fn visible(&self, session: &Session, tickets: &[TicketSummary]) -> Vec<TicketSummary> {
        match self {
            TicketScope::Admin | TicketScope::Agent => tickets.to_vec(),
            TicketScope::AgentUntreated => tickets
                .iter()
                .filter(|t| t.effective_status().is_untreated())
                .cloned()
                .collect(),
            TicketScope::Client => {
                let Ok(user_id) = session.user_id.trim().parse::<i64>() else {
                    return Vec::new();
                };
                tickets
                    .iter()
                    .filter(|t| t.user_id == user_id)
                    .cloned()
                    .collect()
            }
        }
    }
}

/// Fetch the ticket list for the signed-in user.
///
/// A 401 from the backend discards the stored session and the role guard
/// then sends the user back to the login page.
pub fn use_tickets() -> Resource<Result<Vec<TicketSummary>, AppError>> {
    let api = use_context::<TicketApi>();
    let auth = use_auth();

    let tickets = use_resource(move || {
        let api = api.clone();
        let session = auth.current();
        async move {
            match session {
                Some(session) => api.list_tickets(&session).await,
                None => Err(AppError::unauthorized("Session absente")),
            }
        }
    });

    use_sign_out_on_auth_failure(tickets);
    tickets
}

/// Drop the stored session when `resource` resolves to a rejected token.
pub fn use_sign_out_on_auth_failure<T: 'static>(resource: Resource<Result<T, AppError>>) {
    let mut auth = use_auth();
    use_effect(move || {
        let rejected = matches!(&*resource.read(), Some(Err(e)) if e.is_auth_failure());
        if rejected && auth.is_authenticated() {
            tracing::warn!("token rejected, clearing session");
            auth.sign_out();
        }
    });
}
