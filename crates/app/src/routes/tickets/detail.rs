use api::TicketApi;
use dioxus::prelude::*;
use shared_types::{AppError, AppErrorKind, Ticket};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardFooter, CardHeader, CardTitle, CardVariant,
    DetailItem, DetailList, PageHeader, SkeletonRows,
};

use super::{use_sign_out_on_auth_failure, TicketScope};
use crate::auth::use_auth;
use crate::components::StatusBadge;
use crate::format_helpers::format_datetime_fr;

/// One ticket, fetched by id. Not-found and other failures render inline
/// with a way back to the list; only the latter offers a retry.
#[component]
pub fn TicketDetailPage(id: i64, scope: TicketScope) -> Element {
    let api = use_context::<TicketApi>();
    let auth = use_auth();

    let mut ticket = use_resource(use_reactive!(|(id,)| {
        let api = api.clone();
        let session = auth.current();
        async move {
            match session {
                Some(session) => api.get_ticket(&session, id).await,
                None => Err(AppError::unauthorized("Session absente")),
            }
        }
    }));
    use_sign_out_on_auth_failure(ticket);

    let back = scope.list_route();

    let body = match &*ticket.read() {
        None => rsx! {
            p { class: "ticket-loading", "Chargement des détails du ticket..." }
            SkeletonRows { count: 4 }
        },
        Some(Err(e)) if e.kind == AppErrorKind::NotFound => {
            let message = e.ticket_message();
            rsx! {
                Card { variant: CardVariant::Muted, class: "ticket-state",
                    CardHeader {
                        CardTitle { "{message}" }
                    }
                    CardContent {
                        p { "Le ticket #{id} n'existe pas ou n'est plus disponible." }
                    }
                    CardFooter {
                        Link { to: back.clone(), class: "back-link", "Retour à la liste" }
                    }
                }
            }
        }
        Some(Err(e)) => {
            let message = e.ticket_message();
            rsx! {
                Card { variant: CardVariant::Danger, class: "ticket-state",
                    CardHeader {
                        CardTitle { "Erreur de chargement" }
                    }
                    CardContent {
                        p { "{message}" }
                    }
                    CardFooter {
                        Link { to: back.clone(), class: "back-link", "Retour à la liste" }
                        Button { onclick: move |_| ticket.restart(), "Réessayer" }
                    }
                }
            }
        }
        Some(Ok(t)) => rsx! { TicketView { ticket: t.clone() } },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./tickets.css") }

        div { class: "ticket-detail-page",
            PageHeader { title: "Ticket #{id}", subtitle: scope.title().to_string(),
                Button {
                    variant: ButtonVariant::Ghost,
                    title: "Rafraîchir",
                    onclick: move |_| ticket.restart(),
                    "Rafraîchir"
                }
            }
            {body}
        }
    }
}

#[component]
fn TicketView(ticket: Ticket) -> Element {
    let created = format_datetime_fr(&ticket.date_creation);
    let problem = format_datetime_fr(&ticket.date_probleme);

    rsx! {
        Card {
            CardHeader {
                CardTitle { "{ticket.sujet}" }
                div { class: "ticket-detail-status",
                    StatusBadge { status: ticket.statut.clone() }
                    span { class: "ticket-detail-id", "ID: #{ticket.id}" }
                }
            }
            CardContent {
                section { class: "ticket-description",
                    h4 { "Description" }
                    p { "{ticket.description}" }
                }
                DetailList {
                    DetailItem { label: "Date de création", value: created }
                    DetailItem { label: "Date du problème", value: problem }
                    DetailItem { label: "Utilisateur", value: format!("ID: {}", ticket.user_id) }
                    DetailItem { label: "Statut",
                        StatusBadge { status: ticket.statut.clone() }
                    }
                }
            }
        }
    }
}
