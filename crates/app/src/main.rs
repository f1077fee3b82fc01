use api::TicketApi;
use dioxus::prelude::*;

mod auth;
mod components;
mod format_helpers;
mod guard;
mod routes;
use auth::AuthState;
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    // The launcher installs the tracing subscriber, so log from here rather than main
    use_hook(|| {
        let config = api::load_config();
        tracing::info!(
            base_url = %config.api.base_url,
            platform = client_platform(),
            "starting support desk"
        );
    });
    use_context_provider(|| AuthState::restore(api::platform_repository()));
    use_context_provider(TicketApi::from_bundled_config);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        Router::<Route> {}
    }
}
