use dioxus::prelude::*;

use crate::components::button::{Button, ButtonVariant};

/// Previous/next controls over a 1-based page signal.
///
/// Hidden entirely when everything fits on one page.
#[component]
pub fn Pagination(mut page: Signal<usize>, total_pages: usize, total: usize) -> Element {
    let total_pages = total_pages.max(1);
    let current = (*page.read()).clamp(1, total_pages);

    if total_pages <= 1 {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { class: "pagination", "aria-label": "pagination",
            Button {
                variant: ButtonVariant::Outline,
                disabled: current <= 1,
                onclick: move |_| page.set(current.saturating_sub(1).max(1)),
                "Précédent"
            }
            span { class: "pagination-info",
                "Page {current} sur {total_pages} ({total} résultats)"
            }
            Button {
                variant: ButtonVariant::Outline,
                disabled: current >= total_pages,
                onclick: move |_| page.set((current + 1).min(total_pages)),
                "Suivant"
            }
        }
    }
}
