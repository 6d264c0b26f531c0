use dioxus::prelude::*;

/// Pulsing placeholder shown while a section loads.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let base = vec![Attribute::new("class", "skeleton", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
        }
    }
}

/// A stack of skeleton rows standing in for a table.
#[component]
pub fn SkeletonRows(#[props(default = 4)] rows: usize) -> Element {
    rsx! {
        div { class: "skeleton-rows", "aria-label": "Loading",
            for i in 0..rows {
                Skeleton { key: "{i}", class: "skeleton-row" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> Element {
        rsx! {
            SkeletonRows { rows: 3 }
        }
    }

    #[test]
    fn renders_requested_row_count() {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert_eq!(html.matches("skeleton-row").count(), 4);
    }
}
