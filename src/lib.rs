//! Order drafting and submission for the pedidos dashboard.
//!
//! The crate implements the business core behind the "create order" form:
//! an in-memory [`OrderDraft`] edited one field at a time, live field
//! validation, a daily-capacity admission gate checked against the
//! historical sales feed, and assembly of the JSON payload the dashboard
//! API expects.
//!
//! ## Flow
//! - [`OrderForm`] owns one draft per open form session.
//! - Edits mutate the draft and recompute line subtotals and the total.
//! - [`OrderForm::submit`] validates, runs the capacity gate, builds an
//!   [`OrderPayload`] and hands it to an [`OrderGateway`]. The draft is
//!   kept unchanged on failure so the user can retry.
//!
//! Rendering, navigation and authentication stay with the caller.

pub mod domain;
pub mod http;
pub mod payload;
pub mod ports;
pub mod reference;
pub mod session;

use thiserror::Error;

pub use domain::capacity::{CapacityExceeded, DAILY_QUANTITY_CAP};
pub use domain::draft::{LineItem, OrderDraft, STATUS_PENDING};
pub use domain::validation::{validate, FieldErrors, FieldKey};
pub use http::{ApiClient, LogNotifier};
pub use payload::{DetailPayload, OrderPayload, PayloadError};
pub use ports::{ClientDirectory, Notifier, OrderGateway, ProductCatalog, SalesFeed};
pub use reference::{Client, Product, Sale, SaleDetail};
pub use session::OrderForm;

/// Failure talking to the dashboard API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
}

/// Why a submission attempt was refused or failed.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("the draft has validation errors")]
    Validation(FieldErrors),

    #[error(transparent)]
    Capacity(#[from] CapacityExceeded),

    #[error(transparent)]
    Payload(#[from] PayloadError),

    #[error("saving the order failed: {0}")]
    Api(#[from] ApiError),
}

pub type Result<T> = std::result::Result<T, SubmitError>;
