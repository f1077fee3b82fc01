use std::collections::HashMap;

use api::TicketApi;
use dioxus::prelude::*;
use shared_types::TicketForm;
use shared_ui::{
    Alert, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    Input, PageHeader, Textarea,
};

use crate::auth::use_auth;
use crate::routes::Route;

/// "Create New Ticket" form for clients. The new ticket opens on success.
#[component]
pub fn NewTicketPage() -> Element {
    let mut auth = use_auth();
    let api = use_context::<TicketApi>();
    let mut subject = use_signal(String::new);
    let mut problem_date = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        let api = api.clone();
        async move {
            evt.prevent_default();
            error_msg.set(None);
            field_errors.set(HashMap::new());

            let Some(session) = auth.current() else {
                navigator().replace(Route::Login {});
                return;
            };
            let form = TicketForm {
                subject: subject(),
                problem_date: problem_date(),
                description: description(),
            };
            let ticket = match form.to_new_ticket(&session) {
                Ok(ticket) => ticket,
                Err(e) => {
                    if e.field_errors.is_empty() {
                        error_msg.set(Some(e.friendly_message()));
                    } else {
                        field_errors.set(e.field_errors);
                    }
                    return;
                }
            };

            submitting.set(true);
            match api.create_ticket(&session, &ticket).await {
                Ok(created) => {
                    tracing::info!(id = created.id, "ticket created");
                    navigator().push(Route::ClientTicketDetail { id: created.id });
                }
                Err(e) if e.is_auth_failure() => {
                    tracing::warn!("token rejected, clearing session");
                    auth.sign_out();
                    navigator().replace(Route::Login {});
                }
                Err(e) => {
                    error_msg.set(Some(e.ticket_message()));
                    submitting.set(false);
                }
            }
        }
    };

    let error_for = move |field: &str| field_errors.read().get(field).cloned().unwrap_or_default();
    let subject_error = error_for("subject");
    let date_error = error_for("problem_date");
    let description_error = error_for("description");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./tickets.css") }

        div { class: "ticket-create-page",
            PageHeader { title: "Nouveau ticket", subtitle: "Décrivez votre problème à l'équipe support" }

            Card { class: "ticket-form-card",
                CardHeader {
                    CardTitle { "Create New Ticket" }
                    CardDescription { "All fields are required." }
                }
                CardContent {
                    if let Some(err) = error_msg() {
                        Alert { "{err}" }
                    }

                    form { class: "ticket-form", novalidate: true, onsubmit: handle_submit,
                        Input {
                            label: "Subject",
                            name: "subject",
                            placeholder: "Printer on the 2nd floor is jammed",
                            required: true,
                            value: subject(),
                            error: subject_error,
                            on_input: move |e: FormEvent| subject.set(e.value()),
                        }
                        Input {
                            label: "Date of the problem",
                            name: "problem_date",
                            input_type: "date",
                            required: true,
                            value: problem_date(),
                            error: date_error,
                            on_input: move |e: FormEvent| problem_date.set(e.value()),
                        }
                        Textarea {
                            label: "Description",
                            name: "description",
                            rows: 6,
                            placeholder: "What happened, and what did you expect?",
                            required: true,
                            value: description(),
                            error: description_error,
                            on_input: move |e: FormEvent| description.set(e.value()),
                        }
                        div { class: "ticket-form-actions",
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: move |_| navigator().go_back(),
                                "Cancel"
                            }
                            Button {
                                button_type: "submit",
                                loading: submitting(),
                                loading_label: "Submitting...",
                                "Submit ticket"
                            }
                        }
                    }
                }
            }
        }
    }
}
