use dioxus::prelude::*;
use shared_types::{
    add_to_cart, bill_request, cart_total, change_due, filter_available, set_quantity, AppError,
    AvailableProduct, Bill, CartLine, Category, DashboardKind, PaymentMethod, Promotion,
    SessionUser,
};
use shared_ui::{
    notice_options, use_toast, Badge, BadgeTone, Button, ButtonVariant, Card, CardContent,
    CardHeader, DataTable, DataTableCell, DataTableRow, EmptyState, ErrorText, Input,
    SelectField, SkeletonRows,
};

use super::{default_section, loaded, DashboardShell};
use crate::auth::use_api;
use crate::format_helpers::{format_bill_date, format_money, format_status, MISSING};

/// Header notices for discounted batches close to their expiry date.
pub fn expiry_notices(promotions: &[Promotion]) -> Vec<String> {
    promotions
        .iter()
        .filter(|p| p.is_batch() && p.is_near_expiry)
        .map(|p| {
            let days = match p.days_until_expiry {
                d if d <= 0 => "today".to_string(),
                1 => "in 1 day".to_string(),
                d => format!("in {d} days"),
            };
            format!(
                "{} expires {days}, {:.0}% off",
                p.product_name, p.discount_percentage
            )
        })
        .collect()
}

/// Category filter choices; the empty key means every category.
pub fn category_options(categories: &[Category]) -> Vec<(String, String)> {
    std::iter::once((String::new(), "All categories".to_string()))
        .chain(
            categories
                .iter()
                .map(|c| (c.category_name.clone(), c.category_name.clone())),
        )
        .collect()
}

fn payment_options() -> Vec<(String, String)> {
    PaymentMethod::ALL
        .iter()
        .map(|m| (m.as_str().to_string(), m.label().to_string()))
        .collect()
}

/// Parse the amount-paid field; blank, negative or non-numeric input is `None`.
pub fn parse_amount(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Check a sale before it is sent and return the amount paid.
pub fn checkout_amount(cart: &[CartLine], amount_text: &str) -> Result<f64, String> {
    if cart.is_empty() {
        return Err("Add at least one product to the sale".to_string());
    }
    let Some(paid) = parse_amount(amount_text) else {
        return Err("Enter the amount paid".to_string());
    };
    let total = cart_total(cart);
    match change_due(total, paid) {
        Some(_) => Ok(paid),
        None => Err(format!(
            "Amount paid is less than the total of {}",
            format_money(total)
        )),
    }
}

/// Mark a bill as in flight. Returns `false` when one already is, so a
/// second click before the first request settles sends nothing.
pub fn claim_submission(in_flight: &mut bool) -> bool {
    if *in_flight {
        return false;
    }
    *in_flight = true;
    true
}

/// Cashier dashboard: the till, the cashier's own bills and running promotions.
#[component]
pub fn CashierDashboard(user: SessionUser, on_logout: EventHandler<()>) -> Element {
    let api = use_api();
    let mut section = use_signal(|| default_section(DashboardKind::Cashier).to_string());

    let promotions = use_resource(move || {
        let api = api.clone();
        async move {
            api.cashier_promotions()
                .await
                .inspect_err(|e| tracing::warn!(error = %e, "Failed to load promotions"))
        }
    });

    let notifications = promotions
        .read()
        .as_ref()
        .and_then(|r| r.as_ref().ok())
        .map(|list| expiry_notices(list))
        .unwrap_or_default();

    let body = match section().as_str() {
        "bills" => rsx! { CashierBillsSection {} },
        "promotions" => rsx! { PromotionsSection { promotions } },
        _ => rsx! { SaleSection {} },
    };

    rsx! {
        DashboardShell {
            kind: DashboardKind::Cashier,
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
fn SaleSection() -> Element {
    let api = use_api();
    let toast = use_toast();

    let products_api = api.clone();
    let mut products = use_resource(move || {
        let api = products_api.clone();
        async move {
            api.available_products()
                .await
                .inspect_err(|e| tracing::warn!(error = %e, "Failed to load products"))
        }
    });
    let categories_api = api.clone();
    let categories = use_resource(move || {
        let api = categories_api.clone();
        async move {
            api.categories()
                .await
                .inspect_err(|e| tracing::warn!(error = %e, "Failed to load categories"))
        }
    });

    let mut category = use_signal(String::new);
    let mut search = use_signal(String::new);
    let mut cart = use_signal(Vec::<CartLine>::new);
    let mut payment = use_signal(PaymentMethod::default);
    let mut amount_paid = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let total = cart_total(&cart.read());
    let change = parse_amount(&amount_paid()).and_then(|paid| change_due(total, paid));

    let on_add = move |product: AvailableProduct| match add_to_cart(&mut cart.write(), &product) {
        Ok(()) => error_msg.set(None),
        Err(e) => error_msg.set(Some(e.to_string())),
    };

    let on_quantity = move |(code, quantity): (String, i32)| {
        set_quantity(&mut cart.write(), &code, quantity);
    };

    let checkout = move |_: MouseEvent| {
        if submitting() {
            return;
        }
        let lines = cart();
        let paid = match checkout_amount(&lines, &amount_paid()) {
            Ok(paid) => paid,
            Err(problem) => {
                error_msg.set(Some(problem));
                return;
            }
        };
        if !claim_submission(&mut submitting.write()) {
            return;
        }
        error_msg.set(None);
        let request = bill_request(&lines, payment(), paid);
        let api = api.clone();
        spawn(async move {
            match api.create_bill(&request).await {
                Ok(bill) => {
                    tracing::info!(
                        bill_number = %bill.bill_number,
                        total = bill.total_amount,
                        "Bill created"
                    );
                    cart.set(Vec::new());
                    amount_paid.set(String::new());
                    toast.success(
                        format!("Bill {} created", bill.bill_number),
                        notice_options(),
                    );
                    products.restart();
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to create bill");
                    error_msg.set(Some(e.friendly_message()));
                }
            }
            submitting.set(false);
        });
    };

    let category_choices = match &*categories.read() {
        Some(Ok(list)) => category_options(list),
        _ => category_options(&[]),
    };

    let selected_category = category();
    let state = products.read();
    let product_list = match loaded(&*state) {
        Err(placeholder) => placeholder,
        Ok(all) => {
            let filter = (!selected_category.is_empty()).then_some(selected_category.as_str());
            let visible = filter_available(all, filter, &search());
            if visible.is_empty() {
                rsx! { EmptyState { message: "No products match" } }
            } else {
                rsx! { ProductPicker { products: visible, on_add } }
            }
        }
    };

    rsx! {
        div { class: "sale-layout",
            Card {
                CardHeader { title: "Products", subtitle: "Pick items for this sale" }
                CardContent {
                    div { class: "sale-filters",
                        SelectField {
                            label: "Category",
                            value: selected_category.clone(),
                            options: category_choices,
                            on_change: move |value: String| category.set(value),
                        }
                        Input {
                            label: "Search",
                            value: search(),
                            placeholder: "Code or name",
                            on_input: move |e: FormEvent| search.set(e.value()),
                        }
                    }
                    {product_list}
                }
            }
            Card {
                CardHeader { title: "Current Sale" }
                CardContent {
                    SaleCart { lines: cart(), on_quantity }
                    div { class: "sale-checkout",
                        SelectField {
                            label: "Payment Method",
                            value: payment().as_str().to_string(),
                            options: payment_options(),
                            on_change: move |value: String| {
                                if let Some(method) = PaymentMethod::parse(&value) {
                                    payment.set(method);
                                }
                            },
                        }
                        Input {
                            label: "Amount Paid",
                            input_type: "number",
                            value: amount_paid(),
                            placeholder: "0.00",
                            on_input: move |e: FormEvent| amount_paid.set(e.value()),
                        }
                        p { class: "sale-change",
                            "Change: "
                            strong { {change.map(format_money).unwrap_or_else(|| MISSING.to_string())} }
                        }
                        if let Some(err) = error_msg() {
                            ErrorText { message: err }
                        }
                        Button {
                            class: "sale-submit",
                            busy: submitting(),
                            busy_text: "Saving bill...",
                            onclick: checkout,
                            "Complete Sale"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProductPicker(products: Vec<AvailableProduct>, on_add: EventHandler<AvailableProduct>) -> Element {
    rsx! {
        DataTable { columns: vec!["Code", "Name", "Category", "Price", "Stock", ""],
            for product in products {
                DataTableRow { key: "{product.product_code}",
                    DataTableCell { "{product.product_code}" }
                    DataTableCell { "{product.product_name}" }
                    DataTableCell { {product.category_name.as_deref().unwrap_or(MISSING)} }
                    DataTableCell { numeric: true, {format_money(product.unit_price)} }
                    DataTableCell { numeric: true, "{product.available_quantity}" }
                    DataTableCell {
                        Button {
                            variant: ButtonVariant::Secondary,
                            disabled: !product.in_stock(),
                            onclick: {
                                let picked = product.clone();
                                move |_| on_add.call(picked.clone())
                            },
                            "Add"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SaleCart(lines: Vec<CartLine>, on_quantity: EventHandler<(String, i32)>) -> Element {
    if lines.is_empty() {
        return rsx! { EmptyState { message: "No items yet" } };
    }
    let total = cart_total(&lines);

    rsx! {
        DataTable { columns: vec!["Product", "Price", "Qty", "Total", ""],
            for line in lines {
                DataTableRow { key: "{line.product_code}",
                    DataTableCell { "{line.product_name}" }
                    DataTableCell { numeric: true, {format_money(line.unit_price)} }
                    DataTableCell {
                        input {
                            class: "input sale-qty",
                            r#type: "number",
                            min: "0",
                            max: "{line.stock}",
                            value: "{line.quantity}",
                            onchange: {
                                let code = line.product_code.clone();
                                move |e: FormEvent| {
                                    if let Ok(quantity) = e.value().trim().parse::<i32>() {
                                        on_quantity.call((code.clone(), quantity));
                                    }
                                }
                            },
                        }
                    }
                    DataTableCell { numeric: true, {format_money(line.line_total())} }
                    DataTableCell {
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: {
                                let code = line.product_code.clone();
                                move |_| on_quantity.call((code.clone(), 0))
                            },
                            "Remove"
                        }
                    }
                }
            }
        }
        p { class: "sale-total",
            "Total: "
            strong { {format_money(total)} }
        }
    }
}

#[component]
fn CashierBillsSection() -> Element {
    let api = use_api();
    let mut selected = use_signal(|| Option::<String>::None);

    let list_api = api.clone();
    let bills = use_resource(move || {
        let api = list_api.clone();
        async move {
            api.cashier_bills()
                .await
                .inspect_err(|e| tracing::warn!(error = %e, "Failed to load bills"))
        }
    });

    let details = use_resource(move || {
        let api = api.clone();
        let number = selected();
        async move {
            let number = number?;
            Some(api.bill_details(&number).await.inspect_err(
                |e| tracing::warn!(error = %e, bill_number = %number, "Failed to load bill details"),
            ))
        }
    });

    let current = selected();
    let state = bills.read();
    let list = match loaded(&*state) {
        Err(placeholder) => placeholder,
        Ok(list) if list.is_empty() => rsx! { EmptyState { message: "You have not issued any bills yet" } },
        Ok(list) => rsx! {
            DataTable { columns: vec!["Bill", "Date", "Payment", "Items", "Total"],
                for bill in list.iter() {
                    DataTableRow {
                        key: "{bill.bill_number}",
                        selected: current.as_deref() == Some(bill.bill_number.as_str()),
                        onclick: {
                            let number = bill.bill_number.clone();
                            move |_| selected.set(Some(number.clone()))
                        },
                        DataTableCell { "{bill.bill_number}" }
                        DataTableCell { {format_bill_date(bill.bill_date.as_deref())} }
                        DataTableCell { {format_status(bill.payment_method.as_deref())} }
                        DataTableCell { numeric: true, "{bill.item_count()}" }
                        DataTableCell { numeric: true, {format_money(bill.total_amount)} }
                    }
                }
            }
        },
    };

    let detail = match &*details.read() {
        None => rsx! { SkeletonRows { rows: 2 } },
        Some(None) => rsx! { EmptyState { message: "Select a bill to see its items" } },
        Some(Some(Err(e))) => rsx! { ErrorText { message: e.friendly_message() } },
        Some(Some(Ok(bill))) => rsx! { BillDetail { bill: bill.clone() } },
    };

    rsx! {
        div { class: "bills-layout",
            Card {
                CardHeader { title: "My Bills" }
                CardContent { {list} }
            }
            Card {
                CardHeader { title: "Bill Details" }
                CardContent { {detail} }
            }
        }
    }
}

#[component]
fn BillDetail(bill: Bill) -> Element {
    rsx! {
        div { class: "bill-detail",
            div { class: "bill-detail-meta",
                p { strong { "{bill.bill_number}" } }
                p { {format_bill_date(bill.bill_date.as_deref())} }
                p { "Cashier: " {bill.cashier_name.as_deref().unwrap_or(MISSING)} }
                p { "Payment: " {format_status(bill.payment_method.as_deref())} }
            }
            DataTable { columns: vec!["Code", "Product", "Qty", "Unit", "Total"],
                for (i, item) in bill.items.iter().enumerate() {
                    DataTableRow { key: "{i}",
                        DataTableCell { "{item.product_code}" }
                        DataTableCell { {item.product_name.as_deref().unwrap_or(MISSING)} }
                        DataTableCell { numeric: true, "{item.quantity}" }
                        DataTableCell { numeric: true, {format_money(item.unit_price)} }
                        DataTableCell { numeric: true, {format_money(item.total_price)} }
                    }
                }
            }
            dl { class: "bill-detail-totals",
                dt { "Subtotal" }
                dd { {format_money(bill.subtotal)} }
                dt { "Discount" }
                dd { {format_money(bill.discount_amount)} }
                dt { "Total" }
                dd { {format_money(bill.total_amount)} }
                dt { "Paid" }
                dd { {format_money(bill.amount_paid)} }
                dt { "Change" }
                dd { {format_money(bill.change_amount)} }
            }
        }
    }
}

fn promotion_tone(promotion: &Promotion) -> BadgeTone {
    if promotion.is_batch() {
        BadgeTone::Warning
    } else {
        BadgeTone::Info
    }
}

fn promotion_window(promotion: &Promotion) -> String {
    if promotion.is_batch() {
        format!("Expires {}", format_bill_date(promotion.expiry_date.as_deref()))
    } else {
        format!(
            "{} to {}",
            format_bill_date(promotion.start_date.as_deref()),
            format_bill_date(promotion.end_date.as_deref())
        )
    }
}

#[component]
fn PromotionsSection(promotions: Resource<Result<Vec<Promotion>, AppError>>) -> Element {
    let state = promotions.read();
    let body = match loaded(&*state) {
        Err(placeholder) => placeholder,
        Ok(list) if list.is_empty() => rsx! { EmptyState { message: "No promotions running" } },
        Ok(list) => rsx! {
            DataTable { columns: vec!["Type", "Product", "Price", "Now", "Off", "Valid"],
                for (i, promo) in list.iter().enumerate() {
                    DataTableRow { key: "{i}",
                        DataTableCell {
                            Badge { tone: promotion_tone(promo), "{promo.kind}" }
                        }
                        DataTableCell { "{promo.product_name}" }
                        DataTableCell { numeric: true, {format_money(promo.original_price)} }
                        DataTableCell { numeric: true, {format_money(promo.discounted_price)} }
                        DataTableCell { numeric: true, "{promo.discount_percentage:.0}%" }
                        DataTableCell {
                            {promotion_window(promo)}
                            if promo.is_near_expiry {
                                Badge { class: "promo-expiry", tone: BadgeTone::Danger, "Near expiry" }
                            }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        Card {
            CardHeader { title: "Promotions", subtitle: "Discounts applied at the till" }
            CardContent { {body} }
        }
    }
}
