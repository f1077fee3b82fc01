use dioxus::prelude::*;

/// Label/value pairs rendered as a definition list.
#[component]
pub fn DetailList(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        dl { class: "detail-list", {children} }
    }
}

/// One row of a [`DetailList`].
///
/// Pass `value` for plain text, or children for rich content such as a badge.
#[component]
pub fn DetailItem(
    label: String,
    #[props(default)] value: String,
    children: Element,
) -> Element {
    let has_children = children != Ok(VNode::placeholder());

    rsx! {
        div { class: "detail-item",
            dt { class: "detail-item-label", "{label}" }
            dd { class: "detail-item-value",
                if has_children {
                    {children}
                } else if value.is_empty() {
                    span { class: "detail-item-empty", "-" }
                } else {
                    "{value}"
                }
            }
        }
    }
}
