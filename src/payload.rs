//! Submission payload for `POST /api/pedidos`.
//!
//! Built from a draft that already passed validation; a draft that cannot be
//! converted yields a typed error instead of a panic. Dates are normalized
//! to midnight UTC and an absent payment date serializes as `null`.

use std::fmt;

use chrono::{DateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::draft::OrderDraft;

#[derive(Clone, Debug, Serialize)]
pub struct OrderPayload {
    #[serde(rename = "id_cliente")]
    pub client_id: i32,
    #[serde(rename = "numero_pedido")]
    pub order_number: String,
    #[serde(rename = "fecha_entrega")]
    pub delivery_date: DateTime<Utc>,
    #[serde(rename = "fecha_pago")]
    pub payment_date: Option<DateTime<Utc>>,
    #[serde(rename = "id_estado")]
    pub status_id: i32,
    #[serde(rename = "detallesPedido")]
    pub details: Vec<DetailPayload>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

#[derive(Clone, Debug, Serialize)]
pub struct DetailPayload {
    #[serde(rename = "id_producto")]
    pub product_id: i32,
    #[serde(rename = "cantidad")]
    pub quantity: i64,
    #[serde(rename = "precio_unitario", with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PayloadError {
    MissingClient,
    MissingDeliveryDate,
    NoLines,
    MissingProduct(usize),
    BadQuantity(usize),
    BadUnitPrice(usize),
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingClient => write!(f, "no client selected"),
            Self::MissingDeliveryDate => write!(f, "no delivery date set"),
            Self::NoLines => write!(f, "the draft has no line items"),
            Self::MissingProduct(i) => write!(f, "line {i} has no product"),
            Self::BadQuantity(i) => write!(f, "line {i} has an invalid quantity"),
            Self::BadUnitPrice(i) => write!(f, "line {i} has an invalid unit price"),
        }
    }
}

impl std::error::Error for PayloadError {}

impl OrderPayload {
    pub fn from_draft(draft: &OrderDraft) -> std::result::Result<Self, PayloadError> {
        let client_id = draft.client_id.ok_or(PayloadError::MissingClient)?;
        let delivery_date = draft
            .delivery_date
            .ok_or(PayloadError::MissingDeliveryDate)?;
        if draft.lines().is_empty() {
            return Err(PayloadError::NoLines);
        }

        let mut details = Vec::with_capacity(draft.lines().len());
        for (i, line) in draft.lines().iter().enumerate() {
            let product_id = line.product_id.ok_or(PayloadError::MissingProduct(i))?;
            let quantity: i64 = line
                .quantity
                .trim()
                .parse()
                .map_err(|_| PayloadError::BadQuantity(i))?;
            let unit_price: Decimal = line
                .unit_price
                .trim()
                .parse()
                .map_err(|_| PayloadError::BadUnitPrice(i))?;
            details.push(DetailPayload {
                product_id,
                quantity,
                unit_price,
                subtotal: line.subtotal(),
            });
        }

        Ok(Self {
            client_id,
            order_number: draft.order_number().to_string(),
            delivery_date: midnight_utc(delivery_date),
            payment_date: draft.payment_date.map(midnight_utc),
            status_id: draft.status_id,
            details,
            total: draft.total(),
        })
    }
}

fn midnight_utc(date: chrono::NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}
