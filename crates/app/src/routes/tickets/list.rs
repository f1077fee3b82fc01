use api::TicketApi;
use dioxus::prelude::*;
use shared_types::{Page, TicketFilter, TicketStatus, KNOWN_STATUSES};
use shared_ui::{
    Button, Card, CardContent, CardFooter, CardHeader, CardTitle, CardVariant, Input, PageHeader,
    Pagination, SkeletonRows,
};

use super::{use_tickets, TicketScope};
use crate::auth::use_auth;
use crate::components::TicketCard;
use crate::format_helpers::pluralize_tickets;
use crate::routes::Route;

/// Ticket list for one role scope, with text and status filters and
/// client-side paging.
#[component]
pub fn TicketListPage(scope: TicketScope) -> Element {
    let api = use_context::<TicketApi>();
    let auth = use_auth();
    let per_page = api.config().ui.page_size;

    let mut query = use_signal(String::new);
    let mut status = use_signal(String::new);
    let mut page = use_signal(|| 1usize);
    let mut tickets = use_tickets();
    let mut shown_page = None;

    let body = match &*tickets.read() {
        None => rsx! {
            p { class: "ticket-loading", "Chargement des tickets..." }
            SkeletonRows { count: 5 }
        },
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
                        Button { onclick: move |_| tickets.restart(), "Réessayer" }
                    }
                }
            }
        }
        Some(Ok(all)) => {
            let visible = match auth.current() {
                Some(session) => scope.visible(&session, all),
                None => Vec::new(),
            };
            let filter = TicketFilter {
                query: query(),
                status: status_filter(&status.read()),
            };
            let filtered = filter.apply(&visible);
            let current = Page::from_slice(&filtered, page(), per_page);
            shown_page = Some(current.meta.page);
            let count = pluralize_tickets(filtered.len());

            if current.items.is_empty() {
                let message = empty_message(scope, !filter.is_empty());
                rsx! {
                    Card { variant: CardVariant::Muted, class: "ticket-state",
                        CardContent {
                            p { "{message}" }
                        }
                        if scope.can_create() && filter.is_empty() {
                            CardFooter {
                                Link { to: Route::ClientNewTicket {}, class: "back-link",
                                    "Créer un ticket"
                                }
                            }
                        }
                    }
                }
            } else {
                rsx! {
                    p { class: "ticket-count", "{count}" }
                    div { class: "ticket-list",
                        for ticket in current.items {
                            TicketCard {
                                key: "{ticket.id}",
                                to: scope.detail_route(ticket.id),
                                ticket: ticket.clone(),
                            }
                        }
                    }
                    Pagination {
                        page,
                        total_pages: current.meta.total_pages,
                        total: current.meta.total,
                    }
                }
            }
        }
    };

    // The list can shrink under the selected page after a reload.
    use_effect(use_reactive!(|(shown_page,)| {
        let current = *page.peek();
        if let Some(clamped) = sync_page(current, shown_page) {
            page.set(clamped);
        }
    }));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./tickets.css") }

        div { class: "ticket-list-page",
            PageHeader { title: scope.title().to_string(),
                if scope.can_create() {
                    Link { to: Route::ClientNewTicket {}, class: "back-link primary",
                        "Nouveau ticket"
                    }
                }
            }

            div { class: "ticket-filters",
                Input {
                    name: "search",
                    placeholder: "Rechercher par sujet ou description...",
                    value: query(),
                    on_input: move |e: FormEvent| {
                        query.set(e.value());
                        page.set(1);
                    },
                }
                select {
                    class: "ticket-status-filter",
                    "aria-label": "Filtrer par statut",
                    value: "{status}",
                    onchange: move |e: Event<FormData>| {
                        status.set(e.value());
                        page.set(1);
                    },
                    option { value: "", "Tous les statuts" }
                    for (wire, label) in status_options() {
                        option { key: "{wire}", value: "{wire}", "{label}" }
                    }
                }
            }

            {body}
        }
    }
}

/// New value for the page signal when the rendered page was clamped.
fn sync_page(selected: usize, shown: Option<usize>) -> Option<usize> {
    shown.filter(|&p| p != selected)
}

fn status_options() -> Vec<(String, String)> {
    KNOWN_STATUSES
        .iter()
        .map(|s| (s.as_wire().to_string(), s.label().to_string()))
        .collect()
}

/// Status selected in the filter dropdown; the empty value means all.
fn status_filter(value: &str) -> Option<TicketStatus> {
    if value.trim().is_empty() {
        None
    } else {
        Some(TicketStatus::parse(value))
    }
}

fn empty_message(scope: TicketScope, filtered: bool) -> &'static str {
    if filtered {
        return "Aucun ticket ne correspond à votre recherche.";
    }
    match scope {
        TicketScope::Client => "Vous n'avez encore créé aucun ticket.",
        TicketScope::AgentUntreated => "Aucun ticket en attente de traitement.",
        TicketScope::Admin | TicketScope::Agent => "Aucun ticket pour le moment.",
    }
}
