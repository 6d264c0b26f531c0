use crate::client::ApiClient;
use shared_types::{
    AddToCartRequest, AppError, Bill, CartResponse, CustomerProductPage, WishlistItem,
    WishlistRequest,
};

impl ApiClient {
    pub async fn customer_products(&self) -> Result<CustomerProductPage, AppError> {
        self.get_data("/api/customer/products").await
    }

    pub async fn customer_cart(&self) -> Result<CartResponse, AppError> {
        self.get_data("/api/customer/cart").await
    }

    /// Returns the backend's confirmation message, possibly empty.
    pub async fn add_to_cart(&self, product_code: &str, quantity: i32) -> Result<String, AppError> {
        let request = AddToCartRequest {
            product_code: product_code.to_string(),
            quantity,
        };
        self.post_unit("/api/customer/cart", &request).await
    }

    pub async fn remove_from_cart(&self, product_code: &str) -> Result<(), AppError> {
        let url = self.url_with_segment("/api/customer/cart", product_code)?;
        self.delete_unit_at(&url).await
    }

    pub async fn customer_orders(&self) -> Result<Vec<Bill>, AppError> {
        self.get_data("/api/customer/orders").await
    }

    pub async fn wishlist(&self) -> Result<Vec<WishlistItem>, AppError> {
        self.get_data("/api/customer/wishlist").await
    }

    pub async fn add_to_wishlist(&self, product_code: &str) -> Result<String, AppError> {
        let request = WishlistRequest {
            product_code: product_code.to_string(),
        };
        self.post_unit("/api/customer/wishlist", &request).await
    }
}
