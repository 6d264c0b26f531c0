//! HTTP client for the SYOS point-of-sale backend.

pub mod client;
pub mod config;
pub mod session;

mod admin;
mod cashier;
mod customer;

pub use client::ApiClient;
pub use config::{api_config, ApiConfig};
pub use session::SessionApi;
