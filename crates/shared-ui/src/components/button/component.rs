use dioxus::prelude::*;

/// Visual variant for buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Destructive,
    Outline,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Destructive => "destructive",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Ghost => "ghost",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default = false)]
    pub disabled: bool,
    /// Shows `loading_label` in place of the children and blocks clicks.
    #[props(default = false)]
    pub loading: bool,
    #[props(default = "Chargement...".to_string())]
    pub loading_label: String,
    /// `button`, `submit` or `reset`.
    #[props(default = "button".to_string())]
    pub button_type: String,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let base = vec![
        Attribute::new("class", "button", None, false),
        Attribute::new("data-style", props.variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);
    let busy = props.loading;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: "{props.button_type}",
            disabled: props.disabled || busy,
            "aria-busy": busy,
            onclick: move |evt| {
                if busy {
                    return;
                }
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            ..merged,
            if busy {
                "{props.loading_label}"
            } else {
                {props.children}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_swaps_label_and_disables() {
        let html = dioxus_ssr::render_element(rsx! {
            Button { loading: true, loading_label: "Connexion...", "Se connecter" }
        });
        assert!(html.contains("Connexion..."));
        assert!(!html.contains("Se connecter"));
        assert!(html.contains("disabled"));
    }

    #[test]
    fn submit_type_and_variant() {
        let html = dioxus_ssr::render_element(rsx! {
            Button { button_type: "submit", variant: ButtonVariant::Outline, "Envoyer" }
        });
        assert!(html.contains(r#"type="submit""#));
        assert!(html.contains(r#"data-style="outline""#));
        assert!(html.contains("Envoyer"));
    }
}
