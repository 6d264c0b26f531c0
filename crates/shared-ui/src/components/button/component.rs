use dioxus::prelude::*;

/// Visual variant for buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Danger => "danger",
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
    /// While set the button is disabled and shows `busy_text`.
    #[props(default = false)]
    pub busy: bool,
    #[props(default = "Please wait...".to_string())]
    pub busy_text: String,
    #[props(default = "button".to_string())]
    pub button_type: String,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

/// Action button. Submit buttons pass `button_type: "submit"`.
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let base = vec![
        Attribute::new("class", "button", None, false),
        Attribute::new("data-style", props.variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: "{props.button_type}",
            disabled: props.disabled || props.busy,
            "aria-busy": if props.busy { "true" } else { "false" },
            onclick: move |evt| {
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            ..merged,
            if props.busy {
                "{props.busy_text}"
            } else {
                {props.children}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn busy() -> Element {
        rsx! {
            Button { busy: true, busy_text: "Signing in...", button_type: "submit", "Login" }
        }
    }

    fn idle() -> Element {
        rsx! {
            Button { variant: ButtonVariant::Danger, "Remove" }
        }
    }

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn busy_button_is_disabled_and_relabelled() {
        let html = render(busy);
        assert!(html.contains("Signing in..."));
        assert!(!html.contains("Login"));
        assert!(html.contains("disabled"));
        assert!(html.contains(r#"type="submit""#));
    }

    #[test]
    fn idle_button_shows_children_and_variant() {
        let html = render(idle);
        assert!(html.contains("Remove"));
        assert!(html.contains(r#"data-style="danger""#));
        assert!(html.contains(r#"aria-busy="false""#));
    }
}
