use dioxus::prelude::*;

/// Colour family of a badge. Mirrors the tones ticket statuses map to.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeTone {
    #[default]
    Neutral,
    Info,
    Warning,
    Success,
    Danger,
    Muted,
}

impl BadgeTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeTone::Neutral => "neutral",
            BadgeTone::Info => "info",
            BadgeTone::Warning => "warning",
            BadgeTone::Success => "success",
            BadgeTone::Danger => "danger",
            BadgeTone::Muted => "muted",
        }
    }

    /// Parse a tone name, treating anything unknown as neutral.
    pub fn from_name(name: &str) -> Self {
        match name {
            "info" => BadgeTone::Info,
            "warning" => BadgeTone::Warning,
            "success" => BadgeTone::Success,
            "danger" => BadgeTone::Danger,
            "muted" => BadgeTone::Muted,
            _ => BadgeTone::Neutral,
        }
    }
}

/// Pill-shaped inline label.
#[component]
pub fn Badge(
    #[props(default)] tone: BadgeTone,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-tone", tone.as_str(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}
