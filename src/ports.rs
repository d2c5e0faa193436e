//! Contracts for the external collaborators the form consumes.
//!
//! The form never owns these services; it reads reference data through the
//! directory, catalog and sales-feed contracts, persists through the order
//! gateway and reports outcomes through the notifier.

use async_trait::async_trait;

use crate::payload::OrderPayload;
use crate::reference::{Client, Product, Sale};
use crate::ApiError;

#[async_trait]
pub trait ClientDirectory: Send + Sync {
    async fn list_clients(&self) -> std::result::Result<Vec<Client>, ApiError>;
}

#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn list_products(&self) -> std::result::Result<Vec<Product>, ApiError>;
}

/// Read-only feed of historical sales, consumed by the capacity gate.
#[async_trait]
pub trait SalesFeed: Send + Sync {
    async fn list_sales(&self) -> std::result::Result<Vec<Sale>, ApiError>;
}

/// Persists an assembled order. Only success or failure is signaled.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn create_order(&self, order: &OrderPayload) -> std::result::Result<(), ApiError>;
}

/// Transient user-facing notifications; fire-and-forget, never queried.
pub trait Notifier: Send + Sync {
    fn success(&self, title: &str, message: &str);
    fn error(&self, title: &str, message: &str);
}
