use crate::client::ApiClient;
use shared_types::{AppError, Bill, Cashier, Category, ProductCatalog};

impl ApiClient {
    pub async fn categories(&self) -> Result<Vec<Category>, AppError> {
        self.get_data("/api/admin/categories").await
    }

    /// The full catalog with stock summary counts.
    pub async fn product_catalog(&self) -> Result<ProductCatalog, AppError> {
        self.get_data("/api/admin/products/catalog").await
    }

    pub async fn cashiers(&self) -> Result<Vec<Cashier>, AppError> {
        self.get_data("/api/admin/cashiers").await
    }

    /// Orders placed through the online shop.
    pub async fn online_orders(&self) -> Result<Vec<Bill>, AppError> {
        self.get_data("/api/admin/orders").await
    }

    /// Every in-store bill, across cashiers.
    pub async fn manager_bills(&self) -> Result<Vec<Bill>, AppError> {
        self.get_data("/api/admin/bills").await
    }
}
