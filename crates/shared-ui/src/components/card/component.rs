use dioxus::prelude::*;

/// Surface treatment for a [`Card`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CardVariant {
    #[default]
    Default,
    /// Highlighted container used for error and not-found states.
    Danger,
    /// Muted container for empty states.
    Muted,
}

impl CardVariant {
    fn class(&self) -> &'static str {
        match self {
            CardVariant::Default => "default",
            CardVariant::Danger => "danger",
            CardVariant::Muted => "muted",
        }
    }
}

fn section(class: &'static str, attributes: Vec<Attribute>) -> Vec<Attribute> {
    let base = vec![Attribute::new("class", class, None, false)];
    dioxus_primitives::merge_attributes(vec![base, attributes])
}

#[component]
pub fn Card(
    #[props(default)] variant: CardVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut merged = section("card", attributes);
    merged.push(Attribute::new("data-variant", variant.class(), None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = section("card-header", attributes);
    rsx! {
        div { ..merged, {children} }
    }
}

#[component]
pub fn CardTitle(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = section("card-title", attributes);
    rsx! {
        h3 { ..merged, {children} }
    }
}

#[component]
pub fn CardDescription(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = section("card-description", attributes);
    rsx! {
        p { ..merged, {children} }
    }
}

#[component]
pub fn CardContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = section("card-content", attributes);
    rsx! {
        div { ..merged, {children} }
    }
}

#[component]
pub fn CardFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = section("card-footer", attributes);
    rsx! {
        div { ..merged, {children} }
    }
}

/// Dashboard metric tile: a label, a large value and an optional hint line.
#[component]
pub fn StatCard(
    label: String,
    value: String,
    #[props(default)] hint: String,
    #[props(default)] accent: String,
) -> Element {
    let class = if accent.is_empty() {
        "stat-card".to_string()
    } else {
        format!("stat-card stat-card-{accent}")
    };

    rsx! {
        Card { class,
            CardContent {
                p { class: "stat-card-label", "{label}" }
                p { class: "stat-card-value", "{value}" }
                if !hint.is_empty() {
                    p { class: "stat-card-hint", "{hint}" }
                }
            }
        }
    }
}
