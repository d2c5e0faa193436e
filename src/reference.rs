//! Reference data served by the dashboard API.
//!
//! Field names stay in the API's wire vocabulary (Spanish) via serde
//! renames; unknown fields in the JSON are ignored.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Client {
    #[serde(rename = "id_cliente")]
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "numero_documento")]
    pub document_number: String,
    #[serde(rename = "contacto", default)]
    pub contact: Option<String>,
    #[serde(rename = "estado")]
    pub active: bool,
}

impl Client {
    /// Label shown in the client selector.
    pub fn display_label(&self) -> String {
        format!("{} - {}", self.name, self.document_number)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "id_producto")]
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    /// Catalog list price; the source of truth copied into a line item on
    /// selection.
    #[serde(rename = "precio", with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(rename = "estado")]
    pub active: bool,
}

/// A recorded historical sale; read-only input to the capacity gate.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Sale {
    #[serde(rename = "fecha_entrega")]
    pub delivery_date: DateTime<Utc>,
    #[serde(rename = "detalles")]
    pub details: Vec<SaleDetail>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SaleDetail {
    #[serde(rename = "cantidad")]
    pub quantity: i64,
}
