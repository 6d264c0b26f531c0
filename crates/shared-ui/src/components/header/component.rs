use crate::theme::Accent;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBell, LdLogOut, LdMenu};
use dioxus_free_icons::Icon;

/// First letter of the user's name, upper-cased; `U` when there is none.
pub fn avatar_initial(name: Option<&str>) -> String {
    name.and_then(|n| n.trim().chars().next())
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "U".to_string())
}

/// Dashboard top bar: sidebar toggle, title, notifications, user chip, logout.
#[component]
pub fn Header(
    title: String,
    #[props(default)] user_name: Option<String>,
    #[props(default)] role_label: String,
    #[props(default)] notifications: Vec<String>,
    #[props(default)] show_notifications: bool,
    #[props(default)] accent: Accent,
    on_toggle_sidebar: EventHandler<()>,
    #[props(default)] on_toggle_notifications: Option<EventHandler<()>>,
    on_logout: EventHandler<()>,
) -> Element {
    let initial = avatar_initial(user_name.as_deref());
    let display_name = user_name.unwrap_or_else(|| "User".to_string());
    let count = notifications.len();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "dashboard-header", "data-accent": accent.as_str(),
            div { class: "dashboard-header-left",
                button {
                    class: "header-icon-button",
                    r#type: "button",
                    "aria-label": "Toggle sidebar",
                    onclick: move |_| on_toggle_sidebar.call(()),
                    Icon::<LdMenu> { icon: LdMenu, width: 20, height: 20 }
                }
                h1 { class: "dashboard-header-title", "{title}" }
            }
            div { class: "dashboard-header-right",
                div { class: "header-notifications",
                    button {
                        class: "header-icon-button",
                        r#type: "button",
                        "aria-label": "Notifications",
                        onclick: move |_| {
                            if let Some(handler) = &on_toggle_notifications {
                                handler.call(());
                            }
                        },
                        Icon::<LdBell> { icon: LdBell, width: 20, height: 20 }
                        if count > 0 {
                            span { class: "header-bell-badge", "{count}" }
                        }
                    }
                    if show_notifications {
                        div { class: "header-notification-panel",
                            if notifications.is_empty() {
                                p { class: "header-notification-empty", "No new notifications" }
                            }
                            for (i, note) in notifications.iter().enumerate() {
                                p { key: "{i}", class: "header-notification", "{note}" }
                            }
                        }
                    }
                }
                div { class: "header-user",
                    span { class: "header-avatar", "{initial}" }
                    div { class: "header-user-text",
                        span { class: "header-user-name", "{display_name}" }
                        if !role_label.is_empty() {
                            span { class: "header-role-badge", "{role_label}" }
                        }
                    }
                }
                button {
                    class: "header-logout",
                    r#type: "button",
                    onclick: move |_| on_logout.call(()),
                    Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                    span { "Logout" }
                }
            }
        }
    }
}
