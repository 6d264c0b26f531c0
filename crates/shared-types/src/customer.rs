use serde::{Deserialize, Serialize};

/// A line in the online customer's cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(default)]
    pub cart_id: Option<i64>,
    pub product_code: String,
    #[serde(default)]
    pub product_name: Option<String>,
    pub quantity: i32,
    pub unit_price: f64,
    #[serde(default)]
    pub original_price: f64,
    #[serde(default)]
    pub discount_percentage: f64,
    #[serde(default)]
    pub subtotal: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub in_stock: bool,
    #[serde(default)]
    pub available_quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    #[serde(default)]
    pub item_count: i32,
    #[serde(default)]
    pub subtotal: f64,
    #[serde(default)]
    pub total_discount: f64,
    #[serde(default)]
    pub total_amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CartResponse {
    #[serde(default)]
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub summary: CartSummary,
}

impl CartResponse {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Body posted to `/api/customer/cart`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_code: String,
    pub quantity: i32,
}

/// Body posted to `/api/customer/wishlist`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WishlistRequest {
    pub product_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    pub product_code: String,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub unit_price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub added_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn cart_response_deserializes() {
        let json = r#"{
            "items": [{"cartId":7,"productCode":"P1","productName":"Tea","quantity":2,"unitPrice":270.0,"originalPrice":300.0,"discountPercentage":10.0,"subtotal":540.0,"inStock":true,"availableQuantity":40}],
            "summary": {"itemCount":2,"subtotal":600.0,"totalDiscount":60.0,"totalAmount":540.0}
        }"#;
        let cart: CartResponse = serde_json::from_str(json).unwrap();
        assert!(!cart.is_empty());
        assert_eq!(cart.items[0].cart_id, Some(7));
        assert_eq!(
            cart.summary,
            CartSummary {
                item_count: 2,
                subtotal: 600.0,
                total_discount: 60.0,
                total_amount: 540.0,
            }
        );
    }

    #[test]
    fn empty_cart_defaults() {
        let cart: CartResponse = serde_json::from_str("{}").unwrap();
        assert!(cart.is_empty());
        assert_eq!(cart.summary.total_amount, 0.0);
    }

    #[test]
    fn add_to_cart_request_uses_camel_case() {
        let req = AddToCartRequest {
            product_code: "P1".into(),
            quantity: 1,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({"productCode": "P1", "quantity": 1})
        );
    }
}
