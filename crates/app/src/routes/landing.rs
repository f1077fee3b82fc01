use dioxus::prelude::*;
use shared_types::landing_path;

use crate::auth::use_auth;
use crate::routes::route_for_path;

/// Catch-all for unmatched paths: replace the entry with the current role's
/// landing route. Without a session this is the client ticket list, whose
/// guard then sends the visitor to the login page.
#[component]
pub fn LandingRedirect(route: Vec<String>) -> Element {
    let auth = use_auth();
    let target = route_for_path(landing_path(auth.session.read().as_ref()));

    tracing::debug!(path = %format!("/{}", route.join("/")), %target, "unmatched path");
    navigator().replace(target);

    rsx! {
        div { class: "auth-guard-loading",
            p { "Redirection..." }
        }
    }
}
