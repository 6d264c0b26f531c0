mod admin;
mod cashier;
mod customer;

pub use admin::AdminDashboard;
pub use cashier::CashierDashboard;
pub use customer::CustomerDashboard;

use dioxus::prelude::*;
use shared_types::{AppError, DashboardKind, SessionUser};
use shared_ui::{
    Accent, ErrorText, Header, MenuIcon, MenuItem, Sidebar, SkeletonRows,
};

const BRAND: &str = "SYOS";

const ADMIN_MENU: [MenuItem; 6] = [
    MenuItem::new("overview", MenuIcon::Overview, "Overview"),
    MenuItem::new("products", MenuIcon::Products, "Products"),
    MenuItem::new("categories", MenuIcon::Categories, "Categories"),
    MenuItem::new("cashiers", MenuIcon::Staff, "Cashiers"),
    MenuItem::new("orders", MenuIcon::Orders, "Online Orders"),
    MenuItem::new("bills", MenuIcon::Bills, "Bills"),
];

const CASHIER_MENU: [MenuItem; 3] = [
    MenuItem::new("sale", MenuIcon::Sale, "New Sale"),
    MenuItem::new("bills", MenuIcon::Bills, "My Bills"),
    MenuItem::new("promotions", MenuIcon::Promotions, "Promotions"),
];

const CUSTOMER_MENU: [MenuItem; 4] = [
    MenuItem::new("products", MenuIcon::Products, "Products"),
    MenuItem::new("cart", MenuIcon::Cart, "Cart"),
    MenuItem::new("orders", MenuIcon::Orders, "My Orders"),
    MenuItem::new("wishlist", MenuIcon::Wishlist, "Wishlist"),
];

/// Sidebar entries for a dashboard, in display order.
pub fn menu_for(kind: DashboardKind) -> Vec<MenuItem> {
    match kind {
        DashboardKind::Admin => ADMIN_MENU.to_vec(),
        DashboardKind::Cashier => CASHIER_MENU.to_vec(),
        DashboardKind::Customer => CUSTOMER_MENU.to_vec(),
    }
}

/// The section a dashboard opens on.
pub fn default_section(kind: DashboardKind) -> &'static str {
    match kind {
        DashboardKind::Admin => ADMIN_MENU[0].id,
        DashboardKind::Cashier => CASHIER_MENU[0].id,
        DashboardKind::Customer => CUSTOMER_MENU[0].id,
    }
}

pub fn accent_for(kind: DashboardKind) -> Accent {
    match kind {
        DashboardKind::Admin => Accent::Purple,
        DashboardKind::Cashier => Accent::Pink,
        DashboardKind::Customer => Accent::Blue,
    }
}

/// Split a fetch result into its data or the placeholder to show instead:
/// skeleton rows while pending, the error text once it failed.
fn loaded<T>(state: &Option<Result<T, AppError>>) -> Result<&T, Element> {
    match state {
        None => Err(rsx! { SkeletonRows {} }),
        Some(Err(e)) => Err(rsx! { ErrorText { message: e.friendly_message() } }),
        Some(Ok(data)) => Ok(data),
    }
}

/// Sidebar, header and content area shared by all three dashboards.
#[component]
fn DashboardShell(
    kind: DashboardKind,
    user: SessionUser,
    active_id: String,
    on_select: EventHandler<String>,
    on_logout: EventHandler<()>,
    #[props(default)] notifications: Vec<String>,
    children: Element,
) -> Element {
    let mut sidebar_open = use_signal(|| true);
    let mut show_notifications = use_signal(|| false);
    let accent = accent_for(kind);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div {
            class: "dashboard-layout",
            "data-sidebar": if sidebar_open() { "open" } else { "closed" },
            Sidebar {
                brand: BRAND.to_string(),
                items: menu_for(kind),
                active_id,
                open: sidebar_open(),
                accent,
                on_select,
            }
            div { class: "dashboard-main",
                Header {
                    title: kind.title().to_string(),
                    user_name: user.display_name.clone(),
                    role_label: kind.role_label().to_string(),
                    notifications,
                    show_notifications: show_notifications(),
                    accent,
                    on_toggle_sidebar: move |_| sidebar_open.toggle(),
                    on_toggle_notifications: move |_| show_notifications.toggle(),
                    on_logout,
                }
                main { class: "dashboard-content", {children} }
            }
        }
    }
}
