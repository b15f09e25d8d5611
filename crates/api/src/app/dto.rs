use serde::Deserialize;
use serde_json::json;

use stockmgr_core::{
    DomainResult, SupplierId, ensure_amount, ensure_quantity, parse_amount, parse_quantity,
};
use stockmgr_suppliers::Supplier;

// -------------------------
// Request DTOs
// -------------------------

/// A number typed into a form: accepted as a JSON number or as text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumberInput {
    Number(i64),
    Text(String),
}

impl NumberInput {
    /// Interpret as a quantity (zero allowed).
    pub fn quantity(&self) -> DomainResult<i64> {
        match self {
            NumberInput::Number(n) => ensure_quantity(*n),
            NumberInput::Text(s) => parse_quantity(s),
        }
    }

    /// Interpret as a movement amount (must be positive).
    pub fn amount(&self) -> DomainResult<i64> {
        match self {
            NumberInput::Number(n) => ensure_amount(*n),
            NumberInput::Text(s) => parse_amount(s),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterProductRequest {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
    pub supplier_id: Option<SupplierId>,
    pub initial_quantity: Option<NumberInput>,
}

#[derive(Debug, Deserialize)]
pub struct EditProductRequest {
    #[serde(default)]
    pub name: String,
    pub supplier_id: Option<SupplierId>,
}

#[derive(Debug, Deserialize)]
pub struct StockInRequest {
    pub amount: NumberInput,
    pub supplier_id: Option<SupplierId>,
    pub note: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StockOutRequest {
    pub amount: NumberInput,
    pub note: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SupplierRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub contact: String,
}

// -------------------------
// Response mapping
// -------------------------

pub fn supplier_to_json(s: &Supplier) -> serde_json::Value {
    json!({
        "id": s.id_typed().to_string(),
        "name": s.name(),
        "contact": s.contact(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_input_accepts_numbers_and_text() {
        let n: NumberInput = serde_json::from_value(json!(12)).unwrap();
        assert_eq!(n.quantity().unwrap(), 12);

        let t: NumberInput = serde_json::from_value(json!(" 7 ")).unwrap();
        assert_eq!(t.amount().unwrap(), 7);
    }

    #[test]
    fn number_input_validates_range() {
        let zero: NumberInput = serde_json::from_value(json!(0)).unwrap();
        assert!(zero.quantity().is_ok());
        assert!(zero.amount().is_err());

        let junk: NumberInput = serde_json::from_value(json!("abc")).unwrap();
        assert!(junk.quantity().is_err());
    }
}
