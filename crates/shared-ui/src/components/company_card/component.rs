use dioxus::prelude::*;

/// Gradient of a shortcut tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    #[default]
    Blue,
    Gray,
    Cyan,
    Pink,
    Purple,
}

impl ColorScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Blue => "blue",
            ColorScheme::Gray => "gray",
            ColorScheme::Cyan => "cyan",
            ColorScheme::Pink => "pink",
            ColorScheme::Purple => "purple",
        }
    }

    pub fn gradient(&self) -> &'static str {
        match self {
            ColorScheme::Blue => "linear-gradient(135deg, #3b82f6, #1d4ed8)",
            ColorScheme::Gray => "linear-gradient(135deg, #9ca3af, #4b5563)",
            ColorScheme::Cyan => "linear-gradient(135deg, #22d3ee, #0891b2)",
            ColorScheme::Pink => "linear-gradient(135deg, #f472b6, #db2777)",
            ColorScheme::Purple => "linear-gradient(135deg, #a78bfa, #7c3aed)",
        }
    }
}

/// Coloured shortcut tile.
#[component]
pub fn CompanyCard(
    name: String,
    #[props(default)] scheme: ColorScheme,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
) -> Element {
    let clickable = onclick.is_some();
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: if clickable { "company-card clickable" } else { "company-card" },
            "data-scheme": scheme.as_str(),
            style: "background: {scheme.gradient()}",
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            span { class: "company-card-name", "{name}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn each_scheme_has_its_own_gradient() {
        let all = [
            ColorScheme::Blue,
            ColorScheme::Gray,
            ColorScheme::Cyan,
            ColorScheme::Pink,
            ColorScheme::Purple,
        ];
        let mut gradients: Vec<_> = all.iter().map(ColorScheme::gradient).collect();
        gradients.sort();
        gradients.dedup();
        assert_eq!(gradients.len(), all.len());
    }

    fn tile() -> Element {
        rsx! {
            CompanyCard { name: "Bills", scheme: ColorScheme::Cyan }
        }
    }

    #[test]
    fn renders_name_and_scheme() {
        let mut dom = VirtualDom::new(tile);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("Bills"));
        assert!(html.contains(r#"data-scheme="cyan""#));
        assert!(html.contains("#0891b2"));
        assert!(!html.contains("clickable"));
    }
}
