//! reqwest adapter for the dashboard REST API.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::payload::OrderPayload;
use crate::ports::{ClientDirectory, Notifier, OrderGateway, ProductCatalog, SalesFeed};
use crate::reference::{Client, Product, Sale};
use crate::ApiError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// HTTP client for the dashboard API, implementing all four data contracts.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Reads `PEDIDOS_API_URL` (a `.env` file is honoured) and falls back to
    /// the local dashboard.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let base_url =
            std::env::var("PEDIDOS_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> std::result::Result<T, ApiError> {
        let response = self.http.get(self.url(path)).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl ClientDirectory for ApiClient {
    async fn list_clients(&self) -> std::result::Result<Vec<Client>, ApiError> {
        self.get_json("/api/clientes").await
    }
}

#[async_trait]
impl ProductCatalog for ApiClient {
    async fn list_products(&self) -> std::result::Result<Vec<Product>, ApiError> {
        self.get_json("/api/productos").await
    }
}

#[async_trait]
impl SalesFeed for ApiClient {
    async fn list_sales(&self) -> std::result::Result<Vec<Sale>, ApiError> {
        self.get_json("/api/ventas").await
    }
}

#[async_trait]
impl OrderGateway for ApiClient {
    async fn create_order(&self, order: &OrderPayload) -> std::result::Result<(), ApiError> {
        let response = self
            .http
            .post(self.url("/api/pedidos"))
            .json(order)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(())
    }
}

/// Notification surface that writes to the log instead of a toast.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, title: &str, message: &str) {
        tracing::info!(%title, "{message}");
    }

    fn error(&self, title: &str, message: &str) {
        tracing::error!(%title, "{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_doubling_slashes() {
        let client = ApiClient::new("http://localhost:3000/");
        assert_eq!(client.url("/api/ventas"), "http://localhost:3000/api/ventas");

        let client = ApiClient::new("http://api.example.com");
        assert_eq!(
            client.url("/api/pedidos"),
            "http://api.example.com/api/pedidos"
        );
    }
}
