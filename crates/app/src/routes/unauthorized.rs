use dioxus::prelude::*;
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
};

use crate::auth::use_auth;
use crate::routes::Route;

/// Shown when a signed-in user opens another role's subtree.
#[component]
pub fn Unauthorized() -> Element {
    let mut auth = use_auth();

    let go_back = move |_| {
        navigator().go_back();
    };

    let login_again = move |_| {
        auth.sign_out();
        navigator().replace(Route::Login {});
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Access Denied" }
                    CardDescription {
                        "You don't have permission to access this page. Please contact your administrator if you believe this is a mistake."
                    }
                }
                CardContent {
                    if let Some(role) = auth.role() {
                        p { class: "auth-hint", "Signed in as " {role.label()} "." }
                    }
                }
                CardFooter {
                    Button { variant: ButtonVariant::Outline, onclick: go_back, "Go Back" }
                    Button { onclick: login_again, "Login Again" }
                }
            }
        }
    }
}
