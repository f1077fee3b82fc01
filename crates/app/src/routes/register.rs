use std::collections::HashMap;

use api::TicketApi;
use dioxus::prelude::*;
use shared_types::RegisterForm;
use shared_ui::{
    Alert, Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input,
};

use crate::auth::use_auth;
use crate::routes::{landing_route, Route};

/// Account creation followed by an automatic sign-in with the same
/// credentials.
#[component]
pub fn Register() -> Element {
    let mut auth = use_auth();
    let api = use_context::<TicketApi>();
    let mut first_name = use_signal(String::new);
    let mut family_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    if let Some(role) = auth.role() {
        navigator().replace(landing_route(role));
    }

    let handle_register = move |evt: FormEvent| {
        let api = api.clone();
        async move {
            evt.prevent_default();
            error_msg.set(None);
            field_errors.set(HashMap::new());

            let form = RegisterForm {
                first_name: first_name(),
                family_name: family_name(),
                email: email(),
                password: password(),
                confirm_password: confirm_password(),
            };
            if let Err(e) = form.check() {
                field_errors.set(e.field_errors);
                return;
            }

            loading.set(true);
            match api.register_and_login(&form).await {
                Ok(response) => match response.into_session() {
                    Some(session) => {
                        let home = landing_route(session.role);
                        auth.sign_in(session);
                        navigator().replace(home);
                    }
                    None => {
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

    let error_for = move |field: &str| field_errors.read().get(field).cloned().unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Create an account" }
                    CardDescription { "Open tickets and follow their progress" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        Alert { "{err}" }
                    }

                    form { class: "auth-form", novalidate: true, onsubmit: handle_register,
                        div { class: "auth-row",
                            Input {
                                label: "First name",
                                name: "first_name",
                                required: true,
                                value: first_name(),
                                error: error_for("first_name"),
                                on_input: move |e: FormEvent| first_name.set(e.value()),
                            }
                            Input {
                                label: "Family name",
                                name: "family_name",
                                required: true,
                                value: family_name(),
                                error: error_for("family_name"),
                                on_input: move |e: FormEvent| family_name.set(e.value()),
                            }
                        }
                        Input {
                            label: "Email",
                            name: "email",
                            input_type: "email",
                            required: true,
                            value: email(),
                            error: error_for("email"),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        Input {
                            label: "Password",
                            name: "password",
                            input_type: "password",
                            required: true,
                            value: password(),
                            error: error_for("password"),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        Input {
                            label: "Confirm password",
                            name: "confirm_password",
                            input_type: "password",
                            required: true,
                            value: confirm_password(),
                            error: error_for("confirm_password"),
                            on_input: move |e: FormEvent| confirm_password.set(e.value()),
                        }
                        Button {
                            button_type: "submit",
                            class: "auth-submit",
                            loading: loading(),
                            loading_label: "Creating account...",
                            "Create account"
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-switch",
                        "Already registered? "
                        Link { to: Route::Login {}, "Sign in" }
                    }
                }
            }
        }
    }
}
