use dioxus::prelude::*;

/// Colour of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeTone {
    #[default]
    Neutral,
    Success,
    Warning,
    Danger,
    Info,
}

impl BadgeTone {
    fn class(&self) -> &'static str {
        match self {
            BadgeTone::Neutral => "neutral",
            BadgeTone::Success => "success",
            BadgeTone::Warning => "warning",
            BadgeTone::Danger => "danger",
            BadgeTone::Info => "info",
        }
    }

    /// Tone for a backend status word such as `PENDING` or `DELIVERED`.
    pub fn for_status(status: &str) -> Self {
        match status.trim().to_ascii_uppercase().as_str() {
            "PAID" | "DELIVERED" | "ACTIVE" | "COMPLETED" => BadgeTone::Success,
            "PENDING" | "PROCESSING" | "LOW" => BadgeTone::Warning,
            "CANCELLED" | "FAILED" | "INACTIVE" | "OUT_OF_STOCK" => BadgeTone::Danger,
            "SHIPPED" | "ONLINE" | "IN_STORE" => BadgeTone::Info,
            _ => BadgeTone::Neutral,
        }
    }
}

/// Inline label for statuses and counts.
#[component]
pub fn Badge(
    #[props(default)] tone: BadgeTone,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-tone", tone.class(), None, false),
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

/// Badge whose tone and text both come from a status word.
#[component]
pub fn StatusBadge(status: String) -> Element {
    let tone = BadgeTone::for_status(&status);
    let text = status.replace('_', " ");
    rsx! {
        Badge { tone, "{text}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn status_words_map_to_tones() {
        assert_eq!(BadgeTone::for_status("PAID"), BadgeTone::Success);
        assert_eq!(BadgeTone::for_status("pending"), BadgeTone::Warning);
        assert_eq!(BadgeTone::for_status(" CANCELLED "), BadgeTone::Danger);
        assert_eq!(BadgeTone::for_status("SHIPPED"), BadgeTone::Info);
        assert_eq!(BadgeTone::for_status("whatever"), BadgeTone::Neutral);
    }

    fn app() -> Element {
        rsx! {
            StatusBadge { status: "IN_STORE" }
        }
    }

    #[test]
    fn status_badge_renders_spaced_text() {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("IN STORE"));
        assert!(html.contains(r#"data-tone="info""#));
    }
}
