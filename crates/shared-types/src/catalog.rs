use serde::{Deserialize, Serialize};

/// Stock level at or below which a product is flagged as low.
pub const LOW_STOCK_THRESHOLD: i32 = 10;

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub category_id: i64,
    pub category_name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A product on the shelf, as offered at the point of sale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AvailableProduct {
    pub product_code: String,
    pub product_name: String,
    #[serde(default)]
    pub category_name: Option<String>,
    pub unit_price: f64,
    #[serde(default)]
    pub available_quantity: i32,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl AvailableProduct {
    pub fn in_stock(&self) -> bool {
        self.available_quantity > 0
    }
}

/// Narrow the point-of-sale product list by category and search text.
///
/// `category` of `None` keeps every category; the search matches the
/// product code or name case-insensitively.
pub fn filter_available(
    products: &[AvailableProduct],
    category: Option<&str>,
    search: &str,
) -> Vec<AvailableProduct> {
    let query = search.trim().to_lowercase();
    products
        .iter()
        .filter(|p| category.is_none_or(|c| p.category_name.as_deref() == Some(c)))
        .filter(|p| {
            query.is_empty()
                || p.product_code.to_lowercase().contains(&query)
                || p.product_name.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

/// A product row in the manager's catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_code: String,
    pub name: String,
    pub unit_price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub shelf_quantity: i32,
    #[serde(default)]
    pub warehouse_quantity: i32,
    #[serde(default)]
    pub website_quantity: i32,
    #[serde(default)]
    pub total_quantity: i32,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub needs_reordering: bool,
}

impl Product {
    /// Stock label shown in the catalog table.
    pub fn stock_status(&self) -> StockStatus {
        if self.total_quantity <= 0 {
            StockStatus::OutOfStock
        } else if self.needs_reordering || self.total_quantity <= LOW_STOCK_THRESHOLD {
            StockStatus::Low
        } else {
            StockStatus::Healthy
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    Healthy,
    Low,
    OutOfStock,
}

impl StockStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::Healthy => "In stock",
            StockStatus::Low => "Low stock",
            StockStatus::OutOfStock => "Out of stock",
        }
    }
}

/// The manager's catalog with its summary counts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductCatalog {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub total_products: i32,
    #[serde(default)]
    pub low_stock_count: i32,
    #[serde(default)]
    pub out_of_stock_count: i32,
}

/// A product as listed in the online shop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerProduct {
    pub product_code: String,
    pub name: String,
    pub original_price: f64,
    pub discounted_price: f64,
    #[serde(default)]
    pub discount_percentage: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub review_count: i32,
    #[serde(default)]
    pub in_stock: bool,
    #[serde(default)]
    pub available_quantity: i32,
}

impl CustomerProduct {
    pub fn has_discount(&self) -> bool {
        self.discount_percentage > 0.0 && self.discounted_price < self.original_price
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default)]
    pub current_page: i32,
    #[serde(default)]
    pub total_pages: i32,
    #[serde(default)]
    pub total_items: i32,
    #[serde(default)]
    pub items_per_page: i32,
}

/// One page of the online shop listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CustomerProductPage {
    #[serde(default)]
    pub products: Vec<CustomerProduct>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// A running discount the cashier should know about.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    /// `PRODUCT` for catalog-wide discounts, `BATCH` for near-expiry stock.
    #[serde(rename = "type")]
    pub kind: String,
    pub product_code: String,
    pub product_name: String,
    #[serde(default)]
    pub batch_id: Option<i64>,
    #[serde(default)]
    pub expiry_date: Option<String>,
    pub original_price: f64,
    pub discounted_price: f64,
    #[serde(default)]
    pub discount_percentage: f64,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub days_until_expiry: i32,
    #[serde(default)]
    pub is_near_expiry: bool,
}

impl Promotion {
    pub fn is_batch(&self) -> bool {
        self.kind.eq_ignore_ascii_case("BATCH")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn available(code: &str, name: &str, category: &str) -> AvailableProduct {
        AvailableProduct {
            product_code: code.into(),
            product_name: name.into(),
            category_name: Some(category.into()),
            unit_price: 100.0,
            available_quantity: 5,
            image_url: None,
        }
    }

    #[test]
    fn available_product_deserializes_from_api_json() {
        let json = r#"{"productCode":"P001","productName":"Milk 1L","categoryName":"Dairy","unitPrice":450.0,"availableQuantity":12}"#;
        let p: AvailableProduct = serde_json::from_str(json).unwrap();
        assert_eq!(p.product_code, "P001");
        assert_eq!(p.category_name.as_deref(), Some("Dairy"));
        assert!(p.in_stock());
        assert_eq!(p.image_url, None);
    }

    #[test]
    fn filter_by_category_and_search() {
        let products = vec![
            available("P001", "Milk 1L", "Dairy"),
            available("P002", "Yoghurt", "Dairy"),
            available("B001", "Bread", "Bakery"),
        ];
        let dairy = filter_available(&products, Some("Dairy"), "");
        assert_eq!(dairy.len(), 2);

        let milk = filter_available(&products, None, "MILK");
        assert_eq!(milk.len(), 1);
        assert_eq!(milk[0].product_code, "P001");

        let by_code = filter_available(&products, None, "b00");
        assert_eq!(by_code[0].product_name, "Bread");

        assert!(filter_available(&products, Some("Bakery"), "milk").is_empty());
    }

    #[test]
    fn stock_status_thresholds() {
        let mut p = Product {
            product_code: "P001".into(),
            name: "Milk".into(),
            unit_price: 450.0,
            image_url: None,
            category_id: Some(1),
            category_name: Some("Dairy".into()),
            shelf_quantity: 20,
            warehouse_quantity: 30,
            website_quantity: 0,
            total_quantity: 50,
            status: Some("ACTIVE".into()),
            needs_reordering: false,
        };
        assert_eq!(p.stock_status(), StockStatus::Healthy);
        p.total_quantity = LOW_STOCK_THRESHOLD;
        assert_eq!(p.stock_status(), StockStatus::Low);
        p.total_quantity = 0;
        assert_eq!(p.stock_status(), StockStatus::OutOfStock);
        p.total_quantity = 80;
        p.needs_reordering = true;
        assert_eq!(p.stock_status(), StockStatus::Low);
    }

    #[test]
    fn promotion_type_field_is_renamed() {
        let json = r#"{"type":"BATCH","productCode":"P9","productName":"Cheese","batchId":4,"originalPrice":900.0,"discountedPrice":700.0,"discountPercentage":22.2,"daysUntilExpiry":3,"isNearExpiry":true}"#;
        let promo: Promotion = serde_json::from_str(json).unwrap();
        assert!(promo.is_batch());
        assert_eq!(promo.batch_id, Some(4));
        assert!(promo.is_near_expiry);
    }

    #[test]
    fn customer_product_page_tolerates_missing_pagination() {
        let json = r#"{"products":[{"productCode":"P1","name":"Tea","originalPrice":300.0,"discountedPrice":270.0,"discountPercentage":10.0,"inStock":true}]}"#;
        let page: CustomerProductPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.products.len(), 1);
        assert!(page.products[0].has_discount());
        assert_eq!(page.pagination, Pagination::default());
    }
}
