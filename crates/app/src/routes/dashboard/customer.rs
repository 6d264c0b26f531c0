use dioxus::prelude::*;
use shared_types::{CartResponse, CustomerProduct, DashboardKind, SessionUser, WishlistItem};
use shared_ui::{
    notice_options, use_toast, Badge, BadgeTone, Button, ButtonVariant, Card, CardContent,
    CardHeader, DataTable, DataTableCell, DataTableRow, EmptyState, StatusBadge,
};

use super::{default_section, loaded, DashboardShell};
use crate::auth::use_api;
use crate::format_helpers::{format_bill_date, format_money, format_status, MISSING};

/// The backend's confirmation, or `fallback` when it sent none.
fn confirmation(message: String, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

pub fn rating_label(average: f64, reviews: i32) -> String {
    match reviews {
        n if n <= 0 => "No reviews yet".to_string(),
        1 => format!("{average:.1} / 5 (1 review)"),
        n => format!("{average:.1} / 5 ({n} reviews)"),
    }
}

/// Customer dashboard: browse, cart, orders and wishlist.
#[component]
pub fn CustomerDashboard(user: SessionUser, on_logout: EventHandler<()>) -> Element {
    let mut section = use_signal(|| default_section(DashboardKind::Customer).to_string());

    let body = match section().as_str() {
        "cart" => rsx! { CartSection {} },
        "orders" => rsx! { OrdersSection {} },
        "wishlist" => rsx! { WishlistSection {} },
        _ => rsx! { ShopSection {} },
    };

    rsx! {
        DashboardShell {
            kind: DashboardKind::Customer,
            user,
            active_id: section(),
            on_select: move |id: String| section.set(id),
            on_logout,
            {body}
        }
    }
}

#[component]
fn ShopSection() -> Element {
    let api = use_api();
    let toast = use_toast();

    let list_api = api.clone();
    let products = use_resource(move || {
        let api = list_api.clone();
        async move {
            api.customer_products()
                .await
                .inspect_err(|e| tracing::warn!(error = %e, "Failed to load shop products"))
        }
    });

    let cart_api = api.clone();
    let on_add = move |code: String| {
        let api = cart_api.clone();
        spawn(async move {
            match api.add_to_cart(&code, 1).await {
                Ok(message) => {
                    tracing::info!(product_code = %code, "Added to cart");
                    toast.success(confirmation(message, "Added to cart"), notice_options());
                }
                Err(e) => {
                    tracing::warn!(error = %e, product_code = %code, "Add to cart failed");
                    toast.error(e.friendly_message(), notice_options());
                }
            }
        });
    };

    let on_wishlist = move |code: String| {
        let api = api.clone();
        spawn(async move {
            match api.add_to_wishlist(&code).await {
                Ok(message) => {
                    tracing::info!(product_code = %code, "Added to wishlist");
                    toast.success(confirmation(message, "Added to wishlist"), notice_options());
                }
                Err(e) => {
                    tracing::warn!(error = %e, product_code = %code, "Add to wishlist failed");
                    toast.error(e.friendly_message(), notice_options());
                }
            }
        });
    };

    let state = products.read();
    let subtitle = match &*state {
        Some(Ok(page)) => format!("{} products", page.pagination.total_items.max(page.products.len() as i32)),
        _ => String::new(),
    };
    let body = match loaded(&*state) {
        Err(placeholder) => placeholder,
        Ok(page) if page.products.is_empty() => rsx! { EmptyState { message: "No products available right now" } },
        Ok(page) => rsx! {
            ShopGrid { products: page.products.clone(), on_add, on_wishlist }
        },
    };

    rsx! {
        Card {
            CardHeader { title: "Shop", subtitle }
            CardContent { {body} }
        }
    }
}

#[component]
fn ShopGrid(
    products: Vec<CustomerProduct>,
    on_add: EventHandler<String>,
    on_wishlist: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "shop-grid",
            for product in products {
                ShopProductCard {
                    key: "{product.product_code}",
                    product,
                    on_add,
                    on_wishlist,
                }
            }
        }
    }
}

#[component]
fn ShopProductCard(
    product: CustomerProduct,
    on_add: EventHandler<String>,
    on_wishlist: EventHandler<String>,
) -> Element {
    let add_code = product.product_code.clone();
    let wish_code = product.product_code.clone();

    rsx! {
        div { class: "shop-card",
            if let Some(url) = product.image_url.as_deref().filter(|u| !u.is_empty()) {
                img { class: "shop-card-image", src: "{url}", alt: "{product.name}" }
            }
            h3 { class: "shop-card-name", "{product.name}" }
            div { class: "shop-card-price",
                strong { {format_money(product.discounted_price)} }
                if product.has_discount() {
                    s { class: "shop-card-was", {format_money(product.original_price)} }
                    Badge { tone: BadgeTone::Danger, "{product.discount_percentage:.0}% off" }
                }
            }
            p { class: "shop-card-rating", {rating_label(product.average_rating, product.review_count)} }
            if !product.in_stock {
                Badge { tone: BadgeTone::Neutral, "Out of stock" }
            }
            div { class: "shop-card-actions",
                Button {
                    disabled: !product.in_stock,
                    onclick: move |_| on_add.call(add_code.clone()),
                    "Add to Cart"
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| on_wishlist.call(wish_code.clone()),
                    "Wishlist"
                }
            }
        }
    }
}

#[component]
fn CartSection() -> Element {
    let api = use_api();
    let toast = use_toast();

    let cart_api = api.clone();
    let mut cart = use_resource(move || {
        let api = cart_api.clone();
        async move {
            api.customer_cart()
                .await
                .inspect_err(|e| tracing::warn!(error = %e, "Failed to load cart"))
        }
    });

    let on_remove = move |code: String| {
        let api = api.clone();
        spawn(async move {
            match api.remove_from_cart(&code).await {
                Ok(()) => {
                    tracing::info!(product_code = %code, "Removed from cart");
                    cart.restart();
                }
                Err(e) => {
                    tracing::warn!(error = %e, product_code = %code, "Remove from cart failed");
                    toast.error(e.friendly_message(), notice_options());
                }
            }
        });
    };

    let state = cart.read();
    let body = match loaded(&*state) {
        Err(placeholder) => placeholder,
        Ok(c) if c.is_empty() => rsx! { EmptyState { message: "Your cart is empty" } },
        Ok(c) => rsx! { CartTable { cart: c.clone(), on_remove } },
    };

    rsx! {
        Card {
            CardHeader { title: "My Cart" }
            CardContent { {body} }
        }
    }
}

#[component]
fn CartTable(cart: CartResponse, on_remove: EventHandler<String>) -> Element {
    let summary = cart.summary.clone();

    rsx! {
        DataTable { columns: vec!["Product", "Price", "Qty", "Subtotal", ""],
            for item in cart.items {
                DataTableRow { key: "{item.product_code}",
                    DataTableCell {
                        {item.product_name.clone().unwrap_or_else(|| item.product_code.clone())}
                    }
                    DataTableCell { numeric: true, {format_money(item.unit_price)} }
                    DataTableCell { numeric: true, "{item.quantity}" }
                    DataTableCell { numeric: true, {format_money(item.subtotal)} }
                    DataTableCell {
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: {
                                let code = item.product_code.clone();
                                move |_| on_remove.call(code.clone())
                            },
                            "Remove"
                        }
                    }
                }
            }
        }
        dl { class: "cart-summary",
            dt { "Items" }
            dd { "{summary.item_count}" }
            dt { "Subtotal" }
            dd { {format_money(summary.subtotal)} }
            dt { "Discount" }
            dd { {format_money(summary.total_discount)} }
            dt { "Total" }
            dd { class: "cart-summary-total", {format_money(summary.total_amount)} }
        }
    }
}

#[component]
fn OrdersSection() -> Element {
    let api = use_api();
    let orders = use_resource(move || {
        let api = api.clone();
        async move {
            api.customer_orders()
                .await
                .inspect_err(|e| tracing::warn!(error = %e, "Failed to load orders"))
        }
    });

    let state = orders.read();
    let body = match loaded(&*state) {
        Err(placeholder) => placeholder,
        Ok(list) if list.is_empty() => rsx! { EmptyState { message: "You have no orders yet" } },
        Ok(list) => rsx! {
            DataTable { columns: vec!["Order", "Date", "Items", "Total", "Payment", "Status", "Tracking"],
                for order in list.iter() {
                    DataTableRow { key: "{order.bill_number}",
                        DataTableCell { "{order.bill_number}" }
                        DataTableCell { {format_bill_date(order.bill_date.as_deref())} }
                        DataTableCell { numeric: true, "{order.item_count()}" }
                        DataTableCell { numeric: true, {format_money(order.total_amount)} }
                        DataTableCell { {format_status(order.payment_status.as_deref())} }
                        DataTableCell {
                            StatusBadge { status: order.order_status.clone().unwrap_or_else(|| MISSING.to_string()) }
                        }
                        DataTableCell { {order.tracking_number.as_deref().unwrap_or(MISSING)} }
                    }
                }
            }
        },
    };

    rsx! {
        Card {
            CardHeader { title: "My Orders" }
            CardContent { {body} }
        }
    }
}

#[component]
fn WishlistSection() -> Element {
    let api = use_api();
    let toast = use_toast();

    let list_api = api.clone();
    let wishlist = use_resource(move || {
        let api = list_api.clone();
        async move {
            api.wishlist()
                .await
                .inspect_err(|e| tracing::warn!(error = %e, "Failed to load wishlist"))
        }
    });

    let on_add = move |code: String| {
        let api = api.clone();
        spawn(async move {
            match api.add_to_cart(&code, 1).await {
                Ok(message) => {
                    tracing::info!(product_code = %code, "Moved wishlist item to cart");
                    toast.success(confirmation(message, "Added to cart"), notice_options());
                }
                Err(e) => {
                    tracing::warn!(error = %e, product_code = %code, "Add to cart failed");
                    toast.error(e.friendly_message(), notice_options());
                }
            }
        });
    };

    let state = wishlist.read();
    let body = match loaded(&*state) {
        Err(placeholder) => placeholder,
        Ok(list) if list.is_empty() => rsx! { EmptyState { message: "Your wishlist is empty" } },
        Ok(list) => rsx! { WishlistTable { items: list.clone(), on_add } },
    };

    rsx! {
        Card {
            CardHeader { title: "Wishlist" }
            CardContent { {body} }
        }
    }
}

#[component]
fn WishlistTable(items: Vec<WishlistItem>, on_add: EventHandler<String>) -> Element {
    rsx! {
        DataTable { columns: vec!["Product", "Price", "Added", ""],
            for item in items {
                DataTableRow { key: "{item.product_code}",
                    DataTableCell {
                        {item.product_name.clone().unwrap_or_else(|| item.product_code.clone())}
                    }
                    DataTableCell { numeric: true, {format_money(item.unit_price)} }
                    DataTableCell { {format_bill_date(item.added_at.as_deref())} }
                    DataTableCell {
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: {
                                let code = item.product_code.clone();
                                move |_| on_add.call(code.clone())
                            },
                            "Add to Cart"
                        }
                    }
                }
            }
        }
    }
}
