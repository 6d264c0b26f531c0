use dioxus::prelude::*;

/// Panel container used for every dashboard section.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        section {
            ..merged,
            {children}
        }
    }
}

/// Title row of a Card with an optional subtitle and trailing actions.
#[component]
pub fn CardHeader(
    title: String,
    #[props(default)] subtitle: Option<String>,
    #[props(default)] actions: Option<Element>,
) -> Element {
    rsx! {
        div { class: "card-header",
            div {
                h2 { class: "card-title", "{title}" }
                if let Some(subtitle) = subtitle {
                    p { class: "card-description", "{subtitle}" }
                }
            }
            if let Some(actions) = actions {
                div { class: "card-action", {actions} }
            }
        }
    }
}

#[component]
pub fn CardContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-content", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// Inline error line shown inside a card after a failed fetch or submit.
#[component]
pub fn ErrorText(message: String) -> Element {
    rsx! {
        p { class: "card-error", role: "alert", "{message}" }
    }
}

/// Placeholder row for an empty list.
#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        p { class: "card-empty", "{message}" }
    }
}
