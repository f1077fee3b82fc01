use std::collections::HashMap;

use api::TicketApi;
use dioxus::prelude::*;
use shared_types::LoginForm;
use shared_ui::{
    Alert, Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input,
};

use crate::auth::use_auth;
use crate::routes::{landing_route, Route};

/// Email/password sign-in. On success the session is stored and the user
/// lands on their role's home; a role this client does not serve goes to the
/// unauthorized page without storing anything.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let api = use_context::<TicketApi>();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    // Already signed in
    if let Some(role) = auth.role() {
        navigator().replace(landing_route(role));
    }

    let handle_login = move |evt: FormEvent| {
        let api = api.clone();
        async move {
            evt.prevent_default();
            error_msg.set(None);
            field_errors.set(HashMap::new());

            let form = LoginForm {
                email: email(),
                password: password(),
            };
            if let Err(e) = form.check() {
                field_errors.set(e.field_errors);
                return;
            }

            loading.set(true);
            match api.login(&form).await {
                Ok(response) => match response.into_session() {
                    Some(session) => {
                        let home = landing_route(session.role);
                        auth.sign_in(session);
                        navigator().replace(home);
                    }
                    None => {
                        tracing::warn!("login returned a role this client does not serve");
                        navigator().replace(Route::Unauthorized {});
                    }
                },
                Err(e) => {
                    if e.field_errors.is_empty() {
                        error_msg.set(Some(e.friendly_message()));
                    } else {
                        field_errors.set(e.field_errors);
                    }
                    loading.set(false);
                }
            }
        }
    };

    let email_error = field_errors.read().get("email").cloned().unwrap_or_default();
    let password_error = field_errors.read().get("password").cloned().unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Sign In" }
                    CardDescription { "Enter your credentials to access the support desk" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        Alert { "{err}" }
                    }

                    form { class: "auth-form", novalidate: true, onsubmit: handle_login,
                        Input {
                            label: "Email",
                            name: "email",
                            input_type: "email",
                            placeholder: "you@example.com",
                            required: true,
                            value: email(),
                            error: email_error,
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        Input {
                            label: "Password",
                            name: "password",
                            input_type: "password",
                            required: true,
                            value: password(),
                            error: password_error,
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        Button {
                            button_type: "submit",
                            class: "auth-submit",
                            loading: loading(),
                            loading_label: "Signing in...",
                            "Sign In"
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-switch",
                        "Don't have an account? "
                        Link { to: Route::Register {}, "Create one" }
                    }
                }
            }
        }
    }
}
