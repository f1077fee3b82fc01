pub mod dashboard;
pub mod landing;
pub mod login;
pub mod register;
pub mod tickets;
pub mod unauthorized;

use crate::auth::use_auth;
use crate::guard::RoleGuard;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdClock, LdFileText, LdFolder, LdLayoutDashboard, LdLock,
};
use dioxus_free_icons::Icon;
use shared_types::Role;

use dashboard::{AdminDashboard, AgentDashboard};
use landing::LandingRedirect;
use login::Login;
use register::Register;
use tickets::TicketScope;
use unauthorized::Unauthorized;

/// Application routes.
///
/// Each role subtree is wrapped in the route-table guard first, then in the
/// signed-in layout, so the sidebar never renders for a visitor who will be
/// redirected.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/unauthorized")]
    Unauthorized {},

    #[nest("/admin")]
        #[layout(RoleGuard)]
        #[layout(AppLayout)]
            #[route("/dashboard")]
            AdminDashboard {},
            #[route("/tickets")]
            AdminTickets {},
            #[route("/tickets/:id")]
            AdminTicketDetail { id: i64 },
        #[end_layout]
        #[end_layout]
    #[end_nest]

    #[nest("/agent")]
        #[layout(RoleGuard)]
        #[layout(AppLayout)]
            #[route("/dashboard")]
            AgentDashboard {},
            #[route("/tickets")]
            AgentTickets {},
            #[route("/tickets/untreated")]
            AgentUntreatedTickets {},
            #[route("/tickets/:id")]
            AgentTicketDetail { id: i64 },
        #[end_layout]
        #[end_layout]
    #[end_nest]

    #[nest("/client")]
        #[layout(RoleGuard)]
        #[layout(AppLayout)]
            #[route("/tickets")]
            ClientTickets {},
            #[route("/tickets/new")]
            ClientNewTicket {},
            #[route("/tickets/:id")]
            ClientTicketDetail { id: i64 },
        #[end_layout]
        #[end_layout]
    #[end_nest]

    #[route("/:..route")]
    LandingRedirect { route: Vec<String> },
}

/// Typed route for one of the fixed paths named by the access policy.
///
/// Falls back to the default landing route for a path the router does not
/// know, which keeps redirects total.
pub fn route_for_path(path: &str) -> Route {
    path.parse::<Route>().unwrap_or_else(|_| {
        tracing::warn!(path, "unroutable redirect target");
        Route::ClientTickets {}
    })
}

/// Landing route for a signed-in role.
pub fn landing_route(role: Role) -> Route {
    route_for_path(role.landing_path())
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum NavIcon {
    Dashboard,
    Tickets,
    Untreated,
    NewTicket,
}

/// One sidebar link.
#[derive(Debug, Clone, PartialEq)]
struct NavItem {
    route: Route,
    label: &'static str,
    icon: NavIcon,
}

fn nav_items(role: Role) -> Vec<NavItem> {
    let item = |route, label, icon| NavItem { route, label, icon };
    match role {
        Role::Admin => vec![
            item(Route::AdminDashboard {}, "Tableau de bord", NavIcon::Dashboard),
            item(Route::AdminTickets {}, "Tickets", NavIcon::Tickets),
        ],
        Role::Agent => vec![
            item(Route::AgentDashboard {}, "Tableau de bord", NavIcon::Dashboard),
            item(Route::AgentTickets {}, "Tickets", NavIcon::Tickets),
            item(Route::AgentUntreatedTickets {}, "Non traités", NavIcon::Untreated),
        ],
        Role::User => vec![
            item(Route::ClientTickets {}, "Mes tickets", NavIcon::Tickets),
            item(Route::ClientNewTicket {}, "Nouveau ticket", NavIcon::NewTicket),
        ],
    }
}

/// A nav item is active on its own route and, for ticket lists, on the
/// detail pages beneath it.
fn is_active(item: &Route, current: &Route) -> bool {
    if item == current {
        return true;
    }
    matches!(
        (item, current),
        (Route::AdminTickets {}, Route::AdminTicketDetail { .. })
            | (Route::AgentTickets {}, Route::AgentTicketDetail { .. })
            | (Route::ClientTickets {}, Route::ClientTicketDetail { .. })
    )
}

#[component]
fn NavIconView(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Dashboard => rsx! { Icon { icon: LdLayoutDashboard, width: 18, height: 18 } },
        NavIcon::Tickets => rsx! { Icon { icon: LdFolder, width: 18, height: 18 } },
        NavIcon::Untreated => rsx! { Icon { icon: LdClock, width: 18, height: 18 } },
        NavIcon::NewTicket => rsx! { Icon { icon: LdFileText, width: 18, height: 18 } },
    }
}

/// Signed-in layout: role navigation on the left, identity and sign-out on
/// top, the routed page in the middle.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let mut auth = use_auth();

    let Some(session) = auth.current() else {
        return rsx! { Outlet::<Route> {} };
    };
    let links: Vec<(NavItem, &'static str)> = nav_items(session.role)
        .into_iter()
        .map(|item| {
            let class = if is_active(&item.route, &route) {
                "sidebar-link active"
            } else {
                "sidebar-link"
            };
            (item, class)
        })
        .collect();
    let initials = session.initials();
    let role_label = session.role.label();
    let username = session.username.clone();

    let handle_logout = move |_| {
        tracing::info!("sign out");
        auth.sign_out();
        navigator().replace(Route::Login {});
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "app-shell",
            aside { class: "sidebar",
                div { class: "sidebar-brand",
                    span { class: "sidebar-brand-name", "Support Desk" }
                    span { class: "sidebar-brand-role", "{role_label}" }
                }
                nav { class: "sidebar-nav",
                    for (item, class) in links {
                        Link {
                            key: "{item.label}",
                            to: item.route.clone(),
                            class: "{class}",
                            NavIconView { icon: item.icon }
                            span { "{item.label}" }
                        }
                    }
                }
            }

            div { class: "app-main",
                header { class: "topbar",
                    div { class: "topbar-spacer" }
                    div { class: "topbar-user",
                        span { class: "topbar-avatar", "{initials}" }
                        span { class: "topbar-username", "{username}" }
                    }
                    button {
                        class: "topbar-logout",
                        r#type: "button",
                        onclick: handle_logout,
                        Icon { icon: LdLock, width: 16, height: 16 }
                        "Déconnexion"
                    }
                }
                main { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

// Role route components

#[component]
fn AdminTickets() -> Element {
    rsx! { tickets::list::TicketListPage { scope: TicketScope::Admin } }
}

#[component]
fn AdminTicketDetail(id: i64) -> Element {
    rsx! { tickets::detail::TicketDetailPage { id, scope: TicketScope::Admin } }
}

#[component]
fn AgentTickets() -> Element {
    rsx! { tickets::list::TicketListPage { scope: TicketScope::Agent } }
}

#[component]
fn AgentUntreatedTickets() -> Element {
    rsx! { tickets::list::TicketListPage { scope: TicketScope::AgentUntreated } }
}

#[component]
fn AgentTicketDetail(id: i64) -> Element {
    rsx! { tickets::detail::TicketDetailPage { id, scope: TicketScope::Agent } }
}

#[component]
fn ClientTickets() -> Element {
    rsx! { tickets::list::TicketListPage { scope: TicketScope::Client } }
}

#[component]
fn ClientNewTicket() -> Element {
    rsx! { tickets::create::NewTicketPage {} }
}

#[component]
fn ClientTicketDetail(id: i64) -> Element {
    rsx! { tickets::detail::TicketDetailPage { id, scope: TicketScope::Client } }
}
