use crate::auth::use_auth;
use crate::routes::{route_for_path, Route};
use dioxus::prelude::*;
use dioxus::router::RouterContext;
use shared_types::{authorize_path, GuardOutcome};

/// Decide access to `path` from the route table and the current session.
pub fn use_guard(path: &str) -> GuardOutcome {
    let auth = use_auth();
    let session = auth.session.read();
    authorize_path(session.as_ref(), path)
}

/// Layout in front of every role subtree. The roles it admits come from the
/// route table, keyed by the path being rendered.
#[component]
pub fn RoleGuard() -> Element {
    let route: Route = use_route();
    rsx! {
        RoleGate { path: route.to_string(), Outlet::<Route> {} }
    }
}

/// Render children only when `path` is allowed for the current session.
///
/// Anonymous visitors are sent to the login page and signed-in users with
/// another role to the unauthorized page. Both redirects replace the current
/// history entry, and the children are never rendered.
#[component]
pub fn RoleGate(path: String, children: Element) -> Element {
    let outcome = use_guard(&path);

    match redirect_route(&outcome) {
        None => rsx! { {children} },
        Some(route) => {
            tracing::info!(%path, ?outcome, "route guard redirect");
            match try_consume_context::<RouterContext>() {
                Some(router) => {
                    router.replace(route);
                }
                None => tracing::warn!(%path, "no router to redirect with"),
            }
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirection..." }
                }
            }
        }
    }
}

/// Route-table target for a redirect path, as a typed [`Route`].
pub fn redirect_route(outcome: &GuardOutcome) -> Option<Route> {
    outcome.redirect_path().map(route_for_path)
}
