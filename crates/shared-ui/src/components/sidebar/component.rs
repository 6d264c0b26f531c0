use crate::theme::Accent;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdHeart, LdLayoutDashboard, LdPackage, LdPercent, LdReceipt, LdShoppingCart, LdTag, LdTruck,
    LdUsers,
};
use dioxus_free_icons::Icon;

/// Glyph shown next to a menu label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    Overview,
    Products,
    Categories,
    Staff,
    Orders,
    Bills,
    Sale,
    Promotions,
    Cart,
    Wishlist,
}

#[component]
fn MenuGlyph(icon: MenuIcon) -> Element {
    match icon {
        MenuIcon::Overview => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        MenuIcon::Products => rsx! { Icon::<LdPackage> { icon: LdPackage, width: 18, height: 18 } },
        MenuIcon::Categories => rsx! { Icon::<LdTag> { icon: LdTag, width: 18, height: 18 } },
        MenuIcon::Staff => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        MenuIcon::Orders => rsx! { Icon::<LdTruck> { icon: LdTruck, width: 18, height: 18 } },
        MenuIcon::Bills => rsx! { Icon::<LdReceipt> { icon: LdReceipt, width: 18, height: 18 } },
        MenuIcon::Sale => rsx! { Icon::<LdShoppingCart> { icon: LdShoppingCart, width: 18, height: 18 } },
        MenuIcon::Promotions => rsx! { Icon::<LdPercent> { icon: LdPercent, width: 18, height: 18 } },
        MenuIcon::Cart => rsx! { Icon::<LdShoppingCart> { icon: LdShoppingCart, width: 18, height: 18 } },
        MenuIcon::Wishlist => rsx! { Icon::<LdHeart> { icon: LdHeart, width: 18, height: 18 } },
    }
}

/// One navigation entry. Menus are static per dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: &'static str,
    pub icon: MenuIcon,
    pub label: &'static str,
}

impl MenuItem {
    pub const fn new(id: &'static str, icon: MenuIcon, label: &'static str) -> Self {
        Self { id, icon, label }
    }
}

/// Dashboard navigation list.
///
/// The entry whose id equals `active_id` is rendered with
/// `data-active="true"`; when no id matches, none is.
#[component]
pub fn Sidebar(
    brand: String,
    items: Vec<MenuItem>,
    active_id: String,
    #[props(default = true)] open: bool,
    #[props(default)] accent: Accent,
    on_select: EventHandler<String>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        aside {
            class: "sidebar",
            "data-state": if open { "open" } else { "closed" },
            "data-accent": accent.as_str(),
            div { class: "sidebar-brand",
                span { class: "sidebar-brand-mark", "S" }
                if open {
                    span { class: "sidebar-brand-name", "{brand}" }
                }
            }
            nav {
                ul { class: "sidebar-menu",
                    for item in items {
                        li { key: "{item.id}", class: "sidebar-menu-item",
                            button {
                                class: "sidebar-menu-button",
                                r#type: "button",
                                title: item.label,
                                "data-active": if item.id == active_id { "true" } else { "false" },
                                onclick: move |_| on_select.call(item.id.to_string()),
                                MenuGlyph { icon: item.icon }
                                if open {
                                    span { class: "sidebar-menu-label", "{item.label}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
