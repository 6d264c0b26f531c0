use crate::client::ApiClient;
use shared_types::{AppError, AvailableProduct, Bill, CreateBillRequest, Promotion};

impl ApiClient {
    /// Products on the shelf, for the point-of-sale grid.
    pub async fn available_products(&self) -> Result<Vec<AvailableProduct>, AppError> {
        self.get_data("/api/cashier/available-products").await
    }

    /// Ring up a sale; returns the stored bill.
    pub async fn create_bill(&self, request: &CreateBillRequest) -> Result<Bill, AppError> {
        tracing::info!(lines = request.items.len(), "Creating bill");
        self.post_data("/api/cashier/bills", request).await
    }

    /// Bills issued by the logged-in cashier.
    pub async fn cashier_bills(&self) -> Result<Vec<Bill>, AppError> {
        self.get_data("/api/cashier/bills").await
    }

    pub async fn bill_details(&self, bill_number: &str) -> Result<Bill, AppError> {
        let url = self.url_with_segment("/api/cashier/bills", bill_number)?;
        self.get_data_at(&url).await
    }

    pub async fn cashier_promotions(&self) -> Result<Vec<Promotion>, AppError> {
        self.get_data("/api/cashier/promotions").await
    }
}
