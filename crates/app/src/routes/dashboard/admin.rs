use dioxus::prelude::*;
use shared_types::{
    active_count, AppError, DashboardKind, ProductCatalog, SessionUser, StockStatus,
};
use shared_ui::{
    Badge, BadgeTone, Card, CardContent, CardHeader, ColorScheme, CompanyCard, DataTable,
    DataTableCell, DataTableRow, EmptyState, StatCard, StatusBadge,
};

use super::{default_section, loaded, DashboardShell};
use crate::auth::use_api;
use crate::format_helpers::{format_bill_date, format_money, format_status, MISSING};

/// Header notices for products that need restocking.
pub fn low_stock_notices(catalog: &ProductCatalog) -> Vec<String> {
    catalog
        .products
        .iter()
        .filter_map(|p| match p.stock_status() {
            StockStatus::Healthy => None,
            StockStatus::OutOfStock => Some(format!("{} is out of stock", p.name)),
            StockStatus::Low => Some(format!(
                "{} is running low ({} left)",
                p.name, p.total_quantity
            )),
        })
        .collect()
}

fn stock_tone(status: StockStatus) -> BadgeTone {
    match status {
        StockStatus::Healthy => BadgeTone::Success,
        StockStatus::Low => BadgeTone::Warning,
        StockStatus::OutOfStock => BadgeTone::Danger,
    }
}

fn activity_tone(active: bool) -> BadgeTone {
    if active {
        BadgeTone::Success
    } else {
        BadgeTone::Danger
    }
}

/// Shortcut cards on the overview, one per section.
const SHORTCUTS: [(&str, &str, ColorScheme); 5] = [
    ("products", "Products", ColorScheme::Blue),
    ("categories", "Categories", ColorScheme::Cyan),
    ("cashiers", "Cashiers", ColorScheme::Gray),
    ("orders", "Online Orders", ColorScheme::Pink),
    ("bills", "Bills", ColorScheme::Purple),
];

/// Main manager dashboard.
#[component]
pub fn AdminDashboard(user: SessionUser, on_logout: EventHandler<()>) -> Element {
    let api = use_api();
    let mut section = use_signal(|| default_section(DashboardKind::Admin).to_string());

    // The catalog feeds the overview, the products table and the header notices.
    let catalog = use_resource(move || {
        let api = api.clone();
        async move {
            api.product_catalog()
                .await
                .inspect_err(|e| tracing::warn!(error = %e, "Failed to load product catalog"))
        }
    });

    let notifications = catalog
        .read()
        .as_ref()
        .and_then(|r| r.as_ref().ok())
        .map(low_stock_notices)
        .unwrap_or_default();

    let body = match section().as_str() {
        "products" => rsx! { ProductsSection { catalog } },
        "categories" => rsx! { CategoriesSection {} },
        "cashiers" => rsx! { CashiersSection {} },
        "orders" => rsx! { OnlineOrdersSection {} },
        "bills" => rsx! { BillsSection {} },
        _ => rsx! {
            OverviewSection { catalog, on_open: move |id: String| section.set(id) }
        },
    };

    rsx! {
        DashboardShell {
            kind: DashboardKind::Admin,
            user,
            active_id: section(),
            on_select: move |id: String| section.set(id),
            on_logout,
            notifications,
            {body}
        }
    }
}

#[component]
fn OverviewSection(
    catalog: Resource<Result<ProductCatalog, AppError>>,
    on_open: EventHandler<String>,
) -> Element {
    let api = use_api();
    let cashiers = use_resource(move || {
        let api = api.clone();
        async move {
            api.cashiers()
                .await
                .inspect_err(|e| tracing::warn!(error = %e, "Failed to load cashiers"))
        }
    });

    let state = catalog.read();
    let counts = match loaded(&*state) {
        Err(placeholder) => placeholder,
        Ok(c) => rsx! {
            div { class: "dashboard-stats-grid",
                StatCard {
                    label: "Total Products",
                    value: "{c.total_products}",
                    button_text: "View catalog",
                    on_button_click: move |_| on_open.call("products".to_string()),
                    p { class: "stat-card-hint", "Across shelf, warehouse and web" }
                }
                StatCard {
                    label: "Low Stock",
                    value: "{c.low_stock_count}",
                    p { class: "stat-card-hint", "Due for reordering" }
                }
                StatCard {
                    label: "Out of Stock",
                    value: "{c.out_of_stock_count}",
                    p { class: "stat-card-hint", "No units left" }
                }
                {cashier_card(&cashiers.read(), on_open)}
            }
        },
    };

    rsx! {
        {counts}
        Card {
            CardHeader { title: "Manage", subtitle: "Jump to a section" }
            CardContent {
                div { class: "dashboard-shortcuts",
                    for (id, name, scheme) in SHORTCUTS {
                        CompanyCard {
                            key: "{id}",
                            name: name.to_string(),
                            scheme,
                            onclick: move |_| on_open.call(id.to_string()),
                        }
                    }
                }
            }
        }
    }
}

fn cashier_card(
    state: &Option<Result<Vec<shared_types::Cashier>, AppError>>,
    on_open: EventHandler<String>,
) -> Element {
    let value = match state {
        Some(Ok(list)) => format!("{} / {}", active_count(list), list.len()),
        Some(Err(_)) => MISSING.to_string(),
        None => "...".to_string(),
    };
    rsx! {
        StatCard {
            label: "Active Cashiers",
            value,
            button_text: "Manage staff",
            on_button_click: move |_| on_open.call("cashiers".to_string()),
            p { class: "stat-card-hint", "Active of registered" }
        }
    }
}

#[component]
fn ProductsSection(catalog: Resource<Result<ProductCatalog, AppError>>) -> Element {
    let state = catalog.read();
    let body = match loaded(&*state) {
        Err(placeholder) => placeholder,
        Ok(c) if c.products.is_empty() => rsx! { EmptyState { message: "No products in the catalog" } },
        Ok(c) => rsx! {
            DataTable {
                columns: vec!["Code", "Name", "Category", "Price", "Shelf", "Warehouse", "Online", "Total", "Stock"],
                for p in c.products.iter() {
                    DataTableRow { key: "{p.product_code}",
                        DataTableCell { "{p.product_code}" }
                        DataTableCell { "{p.name}" }
                        DataTableCell { {p.category_name.as_deref().unwrap_or(MISSING)} }
                        DataTableCell { numeric: true, {format_money(p.unit_price)} }
                        DataTableCell { numeric: true, "{p.shelf_quantity}" }
                        DataTableCell { numeric: true, "{p.warehouse_quantity}" }
                        DataTableCell { numeric: true, "{p.website_quantity}" }
                        DataTableCell { numeric: true, "{p.total_quantity}" }
                        DataTableCell {
                            Badge { tone: stock_tone(p.stock_status()), {p.stock_status().label()} }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        Card {
            CardHeader { title: "Product Catalog", subtitle: "Stock across every channel" }
            CardContent { {body} }
        }
    }
}

#[component]
fn CategoriesSection() -> Element {
    let api = use_api();
    let categories = use_resource(move || {
        let api = api.clone();
        async move {
            api.categories()
                .await
                .inspect_err(|e| tracing::warn!(error = %e, "Failed to load categories"))
        }
    });

    let state = categories.read();
    let body = match loaded(&*state) {
        Err(placeholder) => placeholder,
        Ok(list) if list.is_empty() => rsx! { EmptyState { message: "No categories yet" } },
        Ok(list) => rsx! {
            DataTable { columns: vec!["ID", "Name", "Description"],
                for c in list.iter() {
                    DataTableRow { key: "{c.category_id}",
                        DataTableCell { numeric: true, "{c.category_id}" }
                        DataTableCell { "{c.category_name}" }
                        DataTableCell { {c.description.as_deref().unwrap_or(MISSING)} }
                    }
                }
            }
        },
    };

    rsx! {
        Card {
            CardHeader { title: "Categories" }
            CardContent { {body} }
        }
    }
}

#[component]
fn CashiersSection() -> Element {
    let api = use_api();
    let cashiers = use_resource(move || {
        let api = api.clone();
        async move {
            api.cashiers()
                .await
                .inspect_err(|e| tracing::warn!(error = %e, "Failed to load cashiers"))
        }
    });

    let state = cashiers.read();
    let subtitle = match &*state {
        Some(Ok(list)) => format!("{} of {} active", active_count(list), list.len()),
        _ => String::new(),
    };
    let body = match loaded(&*state) {
        Err(placeholder) => placeholder,
        Ok(list) if list.is_empty() => rsx! { EmptyState { message: "No cashiers registered" } },
        Ok(list) => rsx! {
            DataTable { columns: vec!["User ID", "Name", "Email", "Contact", "Status"],
                for c in list.iter() {
                    DataTableRow { key: "{c.user_id}",
                        DataTableCell { "{c.user_id}" }
                        DataTableCell { "{c.full_name}" }
                        DataTableCell { {c.email.as_deref().unwrap_or(MISSING)} }
                        DataTableCell { {c.contact_number.as_deref().unwrap_or(MISSING)} }
                        DataTableCell {
                            Badge { tone: activity_tone(c.is_active), {c.status_label()} }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        Card {
            CardHeader { title: "Cashiers", subtitle }
            CardContent { {body} }
        }
    }
}

#[component]
fn OnlineOrdersSection() -> Element {
    let api = use_api();
    let orders = use_resource(move || {
        let api = api.clone();
        async move {
            api.online_orders()
                .await
                .inspect_err(|e| tracing::warn!(error = %e, "Failed to load online orders"))
        }
    });

    let state = orders.read();
    let body = match loaded(&*state) {
        Err(placeholder) => placeholder,
        Ok(list) if list.is_empty() => rsx! { EmptyState { message: "No online orders yet" } },
        Ok(list) => rsx! {
            DataTable {
                columns: vec!["Order", "Date", "Customer", "Items", "Total", "Payment", "Status", "Deliver To"],
                for order in list.iter() {
                    DataTableRow { key: "{order.bill_number}",
                        DataTableCell { "{order.bill_number}" }
                        DataTableCell { {format_bill_date(order.bill_date.as_deref())} }
                        DataTableCell { {order.user_id.as_deref().unwrap_or(MISSING)} }
                        DataTableCell { numeric: true, "{order.item_count()}" }
                        DataTableCell { numeric: true, {format_money(order.total_amount)} }
                        DataTableCell { {format_status(order.payment_status.as_deref())} }
                        DataTableCell {
                            StatusBadge { status: order.order_status.clone().unwrap_or_else(|| MISSING.to_string()) }
                        }
                        DataTableCell { {order.delivery_city.as_deref().unwrap_or(MISSING)} }
                    }
                }
            }
        },
    };

    rsx! {
        Card {
            CardHeader { title: "Online Orders" }
            CardContent { {body} }
        }
    }
}

#[component]
fn BillsSection() -> Element {
    let api = use_api();
    let bills = use_resource(move || {
        let api = api.clone();
        async move {
            api.manager_bills()
                .await
                .inspect_err(|e| tracing::warn!(error = %e, "Failed to load bills"))
        }
    });

    let state = bills.read();
    let body = match loaded(&*state) {
        Err(placeholder) => placeholder,
        Ok(list) if list.is_empty() => rsx! { EmptyState { message: "No bills recorded" } },
        Ok(list) => rsx! {
            DataTable {
                columns: vec!["Bill", "Date", "Cashier", "Channel", "Payment", "Discount", "Total", "Paid", "Change"],
                for bill in list.iter() {
                    DataTableRow { key: "{bill.bill_number}",
                        DataTableCell { "{bill.bill_number}" }
                        DataTableCell { {format_bill_date(bill.bill_date.as_deref())} }
                        DataTableCell { {bill.cashier_name.as_deref().unwrap_or(MISSING)} }
                        DataTableCell {
                            StatusBadge { status: bill.channel.clone().unwrap_or_else(|| MISSING.to_string()) }
                        }
                        DataTableCell { {format_status(bill.payment_method.as_deref())} }
                        DataTableCell { numeric: true, {format_money(bill.discount_amount)} }
                        DataTableCell { numeric: true, {format_money(bill.total_amount)} }
                        DataTableCell { numeric: true, {format_money(bill.amount_paid)} }
                        DataTableCell { numeric: true, {format_money(bill.change_amount)} }
                    }
                }
            }
        },
    };

    rsx! {
        Card {
            CardHeader { title: "All Bills", subtitle: "In-store sales from every till" }
            CardContent { {body} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::Product;

    fn product(name: &str, total: i32, needs_reordering: bool) -> Product {
        Product {
            product_code: format!("P-{name}"),
            name: name.to_string(),
            unit_price: 100.0,
            image_url: None,
            category_id: None,
            category_name: None,
            shelf_quantity: total,
            warehouse_quantity: 0,
            website_quantity: 0,
            total_quantity: total,
            status: None,
            needs_reordering,
        }
    }

    #[test]
    fn notices_cover_low_and_empty_stock_only() {
        let catalog = ProductCatalog {
            products: vec![
                product("Rice", 120, false),
                product("Milk", 4, false),
                product("Sugar", 0, false),
                product("Tea", 40, true),
            ],
            ..Default::default()
        };
        assert_eq!(
            low_stock_notices(&catalog),
            vec![
                "Milk is running low (4 left)".to_string(),
                "Sugar is out of stock".to_string(),
                "Tea is running low (40 left)".to_string(),
            ]
        );
    }

    #[test]
    fn healthy_catalog_has_no_notices() {
        let catalog = ProductCatalog {
            products: vec![product("Rice", 120, false)],
            ..Default::default()
        };
        assert!(low_stock_notices(&catalog).is_empty());
    }

    #[test]
    fn stock_tones() {
        assert_eq!(stock_tone(StockStatus::Healthy), BadgeTone::Success);
        assert_eq!(stock_tone(StockStatus::Low), BadgeTone::Warning);
        assert_eq!(stock_tone(StockStatus::OutOfStock), BadgeTone::Danger);
    }
}
