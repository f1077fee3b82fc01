use dioxus::prelude::*;
use shared_types::{TicketStats, TicketSummary};
use shared_ui::{
    Button, Card, CardContent, CardFooter, CardHeader, CardTitle, CardVariant, PageHeader,
    Skeleton, StatCard,
};

use crate::components::TicketCard;
use crate::routes::tickets::{use_tickets, TicketScope};
use crate::routes::Route;

/// Number of skeleton tiles shown while the list loads.
const SKELETON_COUNT: usize = 4;

/// Number of tickets listed under "Derniers tickets".
const RECENT_COUNT: usize = 5;

/// One metric tile on a dashboard.
#[derive(Debug, Clone, PartialEq)]
struct Tile {
    label: &'static str,
    value: String,
    hint: String,
    accent: &'static str,
}

fn tile(
    label: &'static str,
    value: impl ToString,
    hint: impl Into<String>,
    accent: &'static str,
) -> Tile {
    Tile {
        label,
        value: value.to_string(),
        hint: hint.into(),
        accent,
    }
}

/// Overview across every ticket in the system.
fn admin_tiles(stats: &TicketStats) -> Vec<Tile> {
    vec![
        tile("Total des tickets", stats.total, "", "info"),
        tile("Ouverts", stats.open, format!("{} urgents", stats.urgent), "warning"),
        tile("En traitement", stats.in_progress, format!("{} escaladés", stats.escalated), "info"),
        tile("Résolus", stats.resolved, format!("{} fermés", stats.closed), "success"),
        tile("Taux de résolution", format!("{}%", stats.resolution_rate()), "", "success"),
    ]
}

/// Agent view puts the queue waiting for pickup first.
fn agent_tiles(stats: &TicketStats) -> Vec<Tile> {
    vec![
        tile("Non traités", stats.untreated(), "ouverts ou urgents", "danger"),
        tile("Urgents", stats.urgent, "", "danger"),
        tile("En traitement", stats.in_progress, "", "info"),
        tile("Résolus", stats.resolved, format!("sur {} tickets", stats.total), "success"),
    ]
}

/// Newest tickets first, by id.
fn recent(tickets: &[TicketSummary]) -> Vec<TicketSummary> {
    let mut sorted = tickets.to_vec();
    sorted.sort_by(|a, b| b.id.cmp(&a.id));
    sorted.truncate(RECENT_COUNT);
    sorted
}

#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        DashboardView {
            title: "Tableau de bord administrateur",
            scope: TicketScope::Admin,
        }
    }
}

#[component]
pub fn AgentDashboard() -> Element {
    rsx! {
        DashboardView {
            title: "Tableau de bord agent",
            scope: TicketScope::Agent,
        }
    }
}

#[component]
fn DashboardView(title: String, scope: TicketScope) -> Element {
    let mut tickets = use_tickets();

    let body = match &*tickets.read() {
        None => rsx! { LoadingSkeletons {} },
        Some(Err(e)) => {
            let message = e.ticket_message();
            rsx! {
                Card { variant: CardVariant::Danger,
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
            let stats = TicketStats::from_tickets(all);
            let tiles = match scope {
                TicketScope::Admin => admin_tiles(&stats),
                _ => agent_tiles(&stats),
            };
            let latest = recent(all);
            rsx! {
                div { class: "stats-grid",
                    for t in tiles {
                        StatCard {
                            key: "{t.label}",
                            label: t.label.to_string(),
                            value: t.value,
                            hint: t.hint,
                            accent: t.accent.to_string(),
                        }
                    }
                }

                section { class: "dashboard-recent",
                    h3 { class: "dashboard-section-title", "Derniers tickets" }
                    if latest.is_empty() {
                        p { class: "dashboard-empty", "Aucun ticket pour le moment." }
                    }
                    div { class: "ticket-list",
                        for ticket in latest {
                            TicketCard {
                                key: "{ticket.id}",
                                to: scope.detail_route(ticket.id),
                                ticket: ticket.clone(),
                            }
                        }
                    }
                }
            }
        }
    };

    let list = scope.list_route();
    let queue = matches!(scope, TicketScope::Agent);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            PageHeader { title,
                Link { to: list, class: "dashboard-link", "Voir tous les tickets" }
                if queue {
                    Link { to: Route::AgentUntreatedTickets {}, class: "dashboard-link",
                        "File non traitée"
                    }
                }
            }
            {body}
        }
    }
}

#[component]
fn LoadingSkeletons() -> Element {
    rsx! {
        div { class: "stats-grid",
            for _ in 0..SKELETON_COUNT {
                Card {
                    CardContent {
                        Skeleton { style: "height: 1rem; width: 60%;" }
                        Skeleton { style: "height: 2rem; width: 40%;" }
                    }
                }
            }
        }
    }
}
