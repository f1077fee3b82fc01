use dioxus::prelude::*;

/// Multi-line form field. Shares the layout of [`crate::components::Input`].
#[component]
pub fn Textarea(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default)] name: String,
    #[props(default = 5)] rows: u32,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] required: bool,
    #[props(default)] error: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "textarea", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let invalid = !error.is_empty();
    let field_id = format!("field-{name}");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "textarea-wrapper",
            if !label.is_empty() {
                label { class: "textarea-label", r#for: "{field_id}",
                    "{label}"
                    if required {
                        span { class: "textarea-required", " *" }
                    }
                }
            }
            textarea {
                id: "{field_id}",
                name: "{name}",
                rows: "{rows}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                required: required,
                "aria-invalid": invalid,
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            if invalid {
                p { class: "textarea-error", role: "alert", "{error}" }
            }
        }
    }
}
