use dioxus::prelude::*;
use shared_types::TicketSummary;

use crate::components::StatusBadge;
use crate::format_helpers::truncate;
use crate::routes::Route;

const PREVIEW_CHARS: usize = 140;

/// One row of a ticket list, linking to the ticket's detail page.
#[component]
pub fn TicketCard(ticket: TicketSummary, to: Route) -> Element {
    let preview = truncate(&ticket.description, PREVIEW_CHARS);

    rsx! {
        Link { to, class: "ticket-card",
            div { class: "ticket-card-head",
                span { class: "ticket-card-id", "#{ticket.id}" }
                h3 { class: "ticket-card-subject", "{ticket.sujet}" }
                StatusBadge { status: ticket.effective_status() }
            }
            if !preview.is_empty() {
                p { class: "ticket-card-preview", "{preview}" }
            }
        }
    }
}
