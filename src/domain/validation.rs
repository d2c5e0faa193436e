//! Field validation for the order draft.
//!
//! [`validate`] is pure over the current draft state and is called from two
//! places: after every edit for live display, and again at submit time where
//! a non-empty result blocks the submission. All rules evaluate
//! independently; every failing field appears in the map.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;

use super::draft::OrderDraft;

/// Identifies a form field, rendering to the key the dashboard uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum FieldKey {
    Client,
    DeliveryDate,
    Lines,
    Product(usize),
    Quantity(usize),
    UnitPrice(usize),
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Client => write!(f, "id_cliente"),
            Self::DeliveryDate => write!(f, "fecha_entrega"),
            Self::Lines => write!(f, "detallesPedido"),
            Self::Product(i) => write!(f, "producto_{i}"),
            Self::Quantity(i) => write!(f, "cantidad_{i}"),
            Self::UnitPrice(i) => write!(f, "precio_unitario_{i}"),
        }
    }
}

/// Field key to human-readable message; empty means the draft is admissible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FieldKey, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: FieldKey) -> Option<&str> {
        self.0.get(&key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    fn insert(&mut self, key: FieldKey, message: &str) {
        self.0.insert(key, message.to_string());
    }
}

pub fn validate(draft: &OrderDraft) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if draft.client_id.is_none() {
        errors.insert(FieldKey::Client, "client is required");
    }
    if draft.delivery_date.is_none() {
        errors.insert(FieldKey::DeliveryDate, "delivery date is required");
    }
    if draft.lines().is_empty() {
        errors.insert(FieldKey::Lines, "add at least one line item");
    }

    for (i, line) in draft.lines().iter().enumerate() {
        if line.product_id.is_none() {
            errors.insert(FieldKey::Product(i), "product is required");
        }
        let quantity_ok = line
            .quantity
            .trim()
            .parse::<i64>()
            .map_or(false, |q| q > 0);
        if !quantity_ok {
            errors.insert(FieldKey::Quantity(i), "quantity must be a positive number");
        }
        let price_ok = line
            .unit_price
            .trim()
            .parse::<Decimal>()
            .map_or(false, |p| p > Decimal::ZERO);
        if !price_ok {
            errors.insert(
                FieldKey::UnitPrice(i),
                "unit price must be a positive number",
            );
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn valid_draft() -> OrderDraft {
        let mut draft = OrderDraft::new();
        draft.client_id = Some(5);
        draft.delivery_date = NaiveDate::from_ymd_opt(2024, 6, 1);
        draft.add_line();
        draft.set_line_product(0, Some(3), Some("10.50".parse().unwrap()));
        draft.set_line_quantity(0, "2");
        draft
    }

    #[test]
    fn empty_draft_reports_all_header_errors() {
        let errors = validate(&OrderDraft::new());
        assert_eq!(errors.len(), 3);
        assert!(errors.get(FieldKey::Client).is_some());
        assert!(errors.get(FieldKey::DeliveryDate).is_some());
        assert!(errors.get(FieldKey::Lines).is_some());
    }

    #[test]
    fn complete_draft_has_no_errors() {
        assert!(validate(&valid_draft()).is_empty());
    }

    #[test]
    fn line_errors_are_keyed_by_index() {
        let mut draft = valid_draft();
        draft.add_line(); // second line left blank
        let errors = validate(&draft);
        assert!(errors.get(FieldKey::Product(0)).is_none());
        assert!(errors.get(FieldKey::Product(1)).is_some());
        assert!(errors.get(FieldKey::Quantity(1)).is_some());
        assert!(errors.get(FieldKey::UnitPrice(1)).is_some());
    }

    #[test]
    fn zero_and_negative_values_are_rejected() {
        let mut draft = valid_draft();
        draft.set_line_quantity(0, "0");
        assert!(validate(&draft).get(FieldKey::Quantity(0)).is_some());

        draft.set_line_quantity(0, "-3");
        assert!(validate(&draft).get(FieldKey::Quantity(0)).is_some());

        draft.set_line_quantity(0, "2");
        draft.set_line_unit_price(0, "-1.50");
        assert!(validate(&draft).get(FieldKey::UnitPrice(0)).is_some());
    }

    #[test]
    fn non_numeric_inputs_are_rejected() {
        let mut draft = valid_draft();
        draft.set_line_quantity(0, "dos");
        draft.set_line_unit_price(0, "gratis");
        let errors = validate(&draft);
        assert!(errors.get(FieldKey::Quantity(0)).is_some());
        assert!(errors.get(FieldKey::UnitPrice(0)).is_some());
    }

    #[test]
    fn rules_do_not_short_circuit() {
        let mut draft = OrderDraft::new();
        draft.add_line();
        let errors = validate(&draft);
        // Header rules and all three line rules fail at once.
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn field_keys_render_dashboard_names() {
        assert_eq!(FieldKey::Client.to_string(), "id_cliente");
        assert_eq!(FieldKey::DeliveryDate.to_string(), "fecha_entrega");
        assert_eq!(FieldKey::Lines.to_string(), "detallesPedido");
        assert_eq!(FieldKey::Product(2).to_string(), "producto_2");
        assert_eq!(FieldKey::Quantity(0).to_string(), "cantidad_0");
        assert_eq!(FieldKey::UnitPrice(1).to_string(), "precio_unitario_1");
    }
}
