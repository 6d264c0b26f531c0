use dioxus::prelude::*;

/// Summary tile with an optional label, value and action button.
#[component]
pub fn StatCard(
    #[props(default)] label: Option<String>,
    #[props(default)] value: Option<String>,
    #[props(default)] button_text: Option<String>,
    #[props(default)] on_button_click: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "stat-card",
            if let Some(label) = label {
                p { class: "stat-card-label", "{label}" }
            }
            if let Some(value) = value {
                p { class: "stat-card-value", "{value}" }
            }
            {children}
            if let Some(text) = button_text {
                button {
                    class: "stat-card-button",
                    r#type: "button",
                    onclick: move |evt| {
                        if let Some(handler) = &on_button_click {
                            handler.call(evt);
                        }
                    },
                    "{text}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> Element {
        rsx! {
            StatCard {
                label: "Products".to_string(),
                value: "128".to_string(),
                button_text: "View catalog".to_string(),
                span { class: "stat-card-note", "12 low on stock" }
            }
        }
    }

    fn bare() -> Element {
        rsx! {
            StatCard {
                span { "only children" }
            }
        }
    }

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn renders_supplied_parts() {
        let html = render(full);
        assert!(html.contains("stat-card-label"));
        assert!(html.contains("Products"));
        assert!(html.contains("128"));
        assert!(html.contains("View catalog"));
        assert!(html.contains("12 low on stock"));
    }

    #[test]
    fn omits_missing_parts() {
        let html = render(bare);
        assert!(!html.contains("stat-card-label"));
        assert!(!html.contains("stat-card-value"));
        assert!(!html.contains("stat-card-button"));
        assert!(html.contains("only children"));
    }
}
