use dioxus::prelude::*;
use shared_types::{StatusTone, TicketStatus};
use shared_ui::{Badge, BadgeTone};

pub fn badge_tone(tone: StatusTone) -> BadgeTone {
    match tone {
        StatusTone::Info => BadgeTone::Info,
        StatusTone::Warning => BadgeTone::Warning,
        StatusTone::Success => BadgeTone::Success,
        StatusTone::Muted => BadgeTone::Muted,
        StatusTone::Danger => BadgeTone::Danger,
    }
}

/// French label of a ticket status, coloured by its tone.
#[component]
pub fn StatusBadge(status: TicketStatus) -> Element {
    let tone = badge_tone(status.tone());
    let label = status.label().to_string();
    let wire = status.as_wire().to_string();

    rsx! {
        Badge { tone, title: "{wire}", "{label}" }
    }
}
