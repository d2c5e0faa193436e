//! Order draft aggregate
//!
//! One draft exists per open form session and is mutated in place by every
//! field edit. Quantity and unit price hold the raw text the form delivers;
//! the derived figures (`subtotal`, `total`) are recomputed after every
//! mutation and are never edited directly.

use chrono::NaiveDate;
use rand::Rng;
use rust_decimal::Decimal;

/// Status id the dashboard assigns to a freshly created order.
pub const STATUS_PENDING: i32 = 7;

const ORDER_NUMBER_LEN: usize = 10;
const ORDER_NUMBER_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

#[derive(Clone, Debug)]
pub struct LineItem {
    /// Empty until the user picks a product.
    pub product_id: Option<i32>,
    /// Raw quantity input; unparsable text counts as 0 in derived figures.
    pub quantity: String,
    /// Raw unit price input; auto-filled from the catalog on product
    /// selection but editable afterward.
    pub unit_price: String,
    subtotal: Decimal,
}

impl LineItem {
    fn empty() -> Self {
        Self {
            product_id: None,
            quantity: String::new(),
            unit_price: String::new(),
            subtotal: Decimal::ZERO,
        }
    }

    pub fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    /// Quantity as entered, or 0 when the field is empty or not an integer.
    pub fn parsed_quantity(&self) -> i64 {
        self.quantity.trim().parse().unwrap_or(0)
    }

    /// Unit price as entered, or 0 when the field is empty or not a number.
    pub fn parsed_unit_price(&self) -> Decimal {
        self.unit_price.trim().parse().unwrap_or(Decimal::ZERO)
    }

    fn recompute(&mut self) {
        self.subtotal = Decimal::from(self.parsed_quantity()) * self.parsed_unit_price();
    }
}

#[derive(Clone, Debug)]
pub struct OrderDraft {
    pub client_id: Option<i32>,
    order_number: String,
    pub delivery_date: Option<NaiveDate>,
    pub payment_date: Option<NaiveDate>,
    pub status_id: i32,
    lines: Vec<LineItem>,
    total: Decimal,
}

impl OrderDraft {
    /// Fresh draft with a newly generated order number.
    pub fn new() -> Self {
        Self {
            client_id: None,
            order_number: generate_order_number(),
            delivery_date: None,
            payment_date: None,
            status_id: STATUS_PENDING,
            lines: vec![],
            total: Decimal::ZERO,
        }
    }

    pub fn order_number(&self) -> &str {
        &self.order_number
    }

    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Appends an empty line item. There is no limit on the line count.
    pub fn add_line(&mut self) {
        self.lines.push(LineItem::empty());
        self.recalculate();
    }

    /// Removes the line at `index`; out-of-range indexes are ignored.
    pub fn remove_line(&mut self, index: usize) {
        if index >= self.lines.len() {
            return;
        }
        self.lines.remove(index);
        self.recalculate();
    }

    /// Sets the product on a line. `catalog_price` is the selected product's
    /// list price; it overwrites the unit price field, or clears it when the
    /// product is unknown.
    pub fn set_line_product(
        &mut self,
        index: usize,
        product_id: Option<i32>,
        catalog_price: Option<Decimal>,
    ) {
        let Some(line) = self.lines.get_mut(index) else {
            return;
        };
        line.product_id = product_id;
        line.unit_price = catalog_price.map(|p| p.to_string()).unwrap_or_default();
        line.recompute();
        self.recalculate();
    }

    pub fn set_line_quantity(&mut self, index: usize, raw: &str) {
        let Some(line) = self.lines.get_mut(index) else {
            return;
        };
        line.quantity = raw.trim().to_string();
        line.recompute();
        self.recalculate();
    }

    pub fn set_line_unit_price(&mut self, index: usize, raw: &str) {
        let Some(line) = self.lines.get_mut(index) else {
            return;
        };
        line.unit_price = raw.trim().to_string();
        line.recompute();
        self.recalculate();
    }

    /// Total units this draft would add to its delivery date.
    pub fn incoming_quantity(&self) -> i64 {
        self.lines.iter().map(LineItem::parsed_quantity).sum()
    }

    fn recalculate(&mut self) {
        self.total = self.lines.iter().map(|l| l.subtotal).sum();
    }
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self::new()
    }
}

/// Random 10-character code over `A-Z0-9`. Not checked for collisions
/// against the server.
fn generate_order_number() -> String {
    let mut rng = rand::thread_rng();
    (0..ORDER_NUMBER_LEN)
        .map(|_| ORDER_NUMBER_CHARS[rng.gen_range(0..ORDER_NUMBER_CHARS.len())] as char)
        .collect()
}
