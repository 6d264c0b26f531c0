use crate::catalog::AvailableProduct;
use serde::{Deserialize, Serialize};

/// Sales channel recorded on a bill.
pub const CHANNEL_IN_STORE: &str = "IN_STORE";
pub const CHANNEL_ONLINE: &str = "ONLINE";

/// Payment methods offered at the till.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Card,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 2] = [PaymentMethod::Cash, PaymentMethod::Card];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "CASH",
            PaymentMethod::Card => "CARD",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Card => "Card",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BillItem {
    #[serde(default)]
    pub bill_item_id: Option<i64>,
    pub product_code: String,
    #[serde(default)]
    pub product_name: Option<String>,
    pub quantity: i32,
    pub unit_price: f64,
    pub total_price: f64,
}

/// An in-store bill or an online order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub bill_number: String,
    #[serde(default)]
    pub bill_date: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub cashier_name: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub subtotal: f64,
    #[serde(default)]
    pub discount_amount: f64,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub amount_paid: f64,
    #[serde(default)]
    pub change_amount: f64,
    #[serde(default)]
    pub items: Vec<BillItem>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub order_status: Option<String>,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub tracking_number: Option<String>,
    #[serde(default)]
    pub delivery_address: Option<String>,
    #[serde(default)]
    pub delivery_city: Option<String>,
}

impl Bill {
    pub fn item_count(&self) -> i32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn is_online(&self) -> bool {
        self.channel.as_deref() == Some(CHANNEL_ONLINE)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BillItemRequest {
    pub product_code: String,
    pub quantity: i32,
}

/// Body posted to `/api/cashier/bills`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateBillRequest {
    pub payment_method: String,
    pub items: Vec<BillItemRequest>,
    pub amount_paid: f64,
    pub channel: String,
}

/// One line of the point-of-sale cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product_code: String,
    pub product_name: String,
    pub unit_price: f64,
    pub quantity: i32,
    /// Units on the shelf; the line never exceeds it.
    pub stock: i32,
}

impl CartLine {
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// Why a product could not go into the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    OutOfStock(String),
    StockLimit { product: String, stock: i32 },
}

impl std::fmt::Display for CartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CartError::OutOfStock(name) => write!(f, "{name} is out of stock"),
            CartError::StockLimit { product, stock } => {
                write!(f, "Only {stock} of {product} available")
            }
        }
    }
}

/// Add one unit of `product`, merging into an existing line.
pub fn add_to_cart(cart: &mut Vec<CartLine>, product: &AvailableProduct) -> Result<(), CartError> {
    if !product.in_stock() {
        return Err(CartError::OutOfStock(product.product_name.clone()));
    }
    if let Some(line) = cart
        .iter_mut()
        .find(|l| l.product_code == product.product_code)
    {
        if line.quantity >= line.stock {
            return Err(CartError::StockLimit {
                product: line.product_name.clone(),
                stock: line.stock,
            });
        }
        line.quantity += 1;
        return Ok(());
    }
    cart.push(CartLine {
        product_code: product.product_code.clone(),
        product_name: product.product_name.clone(),
        unit_price: product.unit_price,
        quantity: 1,
        stock: product.available_quantity,
    });
    Ok(())
}

/// Set a line's quantity. Zero or less removes the line; the stock caps it.
pub fn set_quantity(cart: &mut Vec<CartLine>, product_code: &str, quantity: i32) {
    if quantity <= 0 {
        cart.retain(|l| l.product_code != product_code);
        return;
    }
    if let Some(line) = cart.iter_mut().find(|l| l.product_code == product_code) {
        line.quantity = quantity.min(line.stock);
    }
}

pub fn cart_total(cart: &[CartLine]) -> f64 {
    cart.iter().map(CartLine::line_total).sum()
}

/// Whole cents, so sums like `1.10 * 3` compare equal to what is displayed.
fn to_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

/// Change owed for `amount_paid`, or `None` when it does not cover `total`.
pub fn change_due(total: f64, amount_paid: f64) -> Option<f64> {
    let (total, paid) = (to_cents(total), to_cents(amount_paid));
    if paid < total {
        None
    } else {
        Some((paid - total) as f64 / 100.0)
    }
}

/// Build the bill request for an in-store sale.
pub fn bill_request(
    cart: &[CartLine],
    payment_method: PaymentMethod,
    amount_paid: f64,
) -> CreateBillRequest {
    CreateBillRequest {
        payment_method: payment_method.as_str().to_string(),
        items: cart
            .iter()
            .map(|l| BillItemRequest {
                product_code: l.product_code.clone(),
                quantity: l.quantity,
            })
            .collect(),
        amount_paid,
        channel: CHANNEL_IN_STORE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn product(code: &str, price: f64, stock: i32) -> AvailableProduct {
        AvailableProduct {
            product_code: code.into(),
            product_name: format!("Product {code}"),
            category_name: None,
            unit_price: price,
            available_quantity: stock,
            image_url: None,
        }
    }

    #[test]
    fn adding_twice_merges_into_one_line() {
        let mut cart = Vec::new();
        let milk = product("P1", 450.0, 5);
        add_to_cart(&mut cart, &milk).unwrap();
        add_to_cart(&mut cart, &milk).unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].quantity, 2);
    }

    #[test]
    fn adding_beyond_stock_is_rejected() {
        let mut cart = Vec::new();
        let rare = product("P2", 1000.0, 1);
        add_to_cart(&mut cart, &rare).unwrap();
        let err = add_to_cart(&mut cart, &rare).unwrap_err();
        assert_eq!(
            err,
            CartError::StockLimit {
                product: "Product P2".into(),
                stock: 1
            }
        );
        assert_eq!(cart[0].quantity, 1);
    }

    #[test]
    fn out_of_stock_product_never_enters_cart() {
        let mut cart = Vec::new();
        let err = add_to_cart(&mut cart, &product("P3", 10.0, 0)).unwrap_err();
        assert_eq!(err.to_string(), "Product P3 is out of stock");
        assert!(cart.is_empty());
    }

    #[test]
    fn set_quantity_caps_and_removes() {
        let mut cart = Vec::new();
        add_to_cart(&mut cart, &product("P1", 100.0, 4)).unwrap();
        add_to_cart(&mut cart, &product("P2", 50.0, 9)).unwrap();

        set_quantity(&mut cart, "P1", 10);
        assert_eq!(cart[0].quantity, 4);

        set_quantity(&mut cart, "P1", 0);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].product_code, "P2");

        set_quantity(&mut cart, "P2", -3);
        assert!(cart.is_empty());
    }

    #[test]
    fn totals_and_change() {
        let mut cart = Vec::new();
        add_to_cart(&mut cart, &product("P1", 120.0, 5)).unwrap();
        add_to_cart(&mut cart, &product("P1", 120.0, 5)).unwrap();
        add_to_cart(&mut cart, &product("P2", 60.0, 5)).unwrap();
        assert_eq!(cart_total(&cart), 300.0);
        assert_eq!(change_due(300.0, 500.0), Some(200.0));
        assert_eq!(change_due(300.0, 300.0), Some(0.0));
        assert_eq!(change_due(300.0, 299.5), None);
    }

    #[test]
    fn exact_payment_covers_inexact_float_total() {
        let mut cart = Vec::new();
        let gum = product("P4", 1.10, 10);
        for _ in 0..3 {
            add_to_cart(&mut cart, &gum).unwrap();
        }
        let total = cart_total(&cart);
        assert_eq!(change_due(total, 3.30), Some(0.0));
        assert_eq!(change_due(total, 5.00), Some(1.7));
        assert_eq!(change_due(total, 3.29), None);
    }

    #[test]
    fn bill_request_serializes_for_backend() {
        let mut cart = Vec::new();
        add_to_cart(&mut cart, &product("P1", 120.0, 5)).unwrap();
        let req = bill_request(&cart, PaymentMethod::Cash, 200.0);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "paymentMethod": "CASH",
                "items": [{"productCode": "P1", "quantity": 1}],
                "amountPaid": 200.0,
                "channel": "IN_STORE"
            })
        );
    }

    #[test]
    fn bill_deserializes_with_items() {
        let json = r#"{"billNumber":"BILL-0001","billDate":"2025-01-10T10:15:00","cashierName":"Nimal","paymentMethod":"CASH","subtotal":900.0,"discountAmount":0.0,"totalAmount":900.0,"amountPaid":1000.0,"changeAmount":100.0,"items":[{"billItemId":1,"productCode":"P1","productName":"Milk","quantity":2,"unitPrice":450.0,"totalPrice":900.0}],"channel":"IN_STORE"}"#;
        let bill: Bill = serde_json::from_str(json).unwrap();
        assert_eq!(bill.item_count(), 2);
        assert!(!bill.is_online());
        assert_eq!(bill.change_amount, 100.0);
    }

    #[test]
    fn payment_method_parse() {
        assert_eq!(PaymentMethod::parse("CARD"), Some(PaymentMethod::Card));
        assert_eq!(PaymentMethod::parse("cheque"), None);
    }
}
