use dioxus::prelude::*;

/// Title row at the top of every page, with an optional subtitle and
/// right-aligned actions passed as children.
#[component]
pub fn PageHeader(
    title: String,
    #[props(default)] subtitle: String,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "page-header",
            div { class: "page-heading",
                h1 { class: "page-title", "{title}" }
                if !subtitle.is_empty() {
                    p { class: "page-subtitle", "{subtitle}" }
                }
            }
            div { class: "page-actions", {children} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_title_and_subtitle() {
        let html = dioxus_ssr::render_element(rsx! {
            PageHeader { title: "Mes tickets", subtitle: "3 tickets" }
        });
        assert!(html.contains("<h1"));
        assert!(html.contains("Mes tickets"));
        assert!(html.contains("page-subtitle"));
    }
}
