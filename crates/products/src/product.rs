use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockmgr_core::{DomainError, DomainResult, Entity, ProductId, SupplierId, ensure_amount};

use crate::code::ProductCode;

/// Entity: Product.
///
/// Invariant: `quantity >= 0` at all times. Every mutation of the quantity goes
/// through [`Product::receive`] or [`Product::issue`], which check before
/// mutating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    code: ProductCode,
    name: String,
    supplier_id: Option<SupplierId>,
    quantity: i64,
}

/// Command: RegisterProduct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterProduct {
    pub code: String,
    pub name: String,
    /// Preferred supplier (weak reference).
    pub supplier_id: Option<SupplierId>,
    pub initial_quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Command: EditProduct.
///
/// Replaces name and preferred supplier; code and quantity are untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditProduct {
    pub product_id: ProductId,
    pub name: String,
    pub supplier_id: Option<SupplierId>,
}

impl Product {
    /// Build a product from a registration command.
    ///
    /// Only product-local rules are checked here; code uniqueness and supplier
    /// existence are the store's concern.
    pub fn register(id: ProductId, cmd: &RegisterProduct) -> DomainResult<Self> {
        let code = ProductCode::new(&cmd.code)?;
        let name = cmd.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        if cmd.initial_quantity < 0 {
            return Err(DomainError::validation("initial quantity cannot be negative"));
        }

        Ok(Self {
            id,
            code,
            name: name.to_string(),
            supplier_id: cmd.supplier_id,
            quantity: cmd.initial_quantity,
        })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn code(&self) -> &ProductCode {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn supplier_id(&self) -> Option<SupplierId> {
        self.supplier_id
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn references_supplier(&self, supplier_id: SupplierId) -> bool {
        self.supplier_id == Some(supplier_id)
    }

    pub fn edit(&mut self, cmd: &EditProduct) {
        self.name = cmd.name.trim().to_string();
        self.supplier_id = cmd.supplier_id;
    }

    /// Check that `amount` can be received, without mutating.
    pub fn check_receive(&self, amount: i64) -> DomainResult<i64> {
        ensure_amount(amount)?;
        self.quantity
            .checked_add(amount)
            .ok_or_else(|| DomainError::validation("amount exceeds the maximum quantity"))
    }

    /// Check that `amount` can be issued, without mutating.
    pub fn check_issue(&self, amount: i64) -> DomainResult<i64> {
        ensure_amount(amount)?;
        if amount > self.quantity {
            return Err(DomainError::insufficient_stock(amount, self.quantity));
        }
        Ok(self.quantity - amount)
    }

    /// Increase on-hand quantity. Returns the new quantity.
    pub fn receive(&mut self, amount: i64) -> DomainResult<i64> {
        self.quantity = self.check_receive(amount)?;
        Ok(self.quantity)
    }

    /// Decrease on-hand quantity. Returns the new quantity.
    pub fn issue(&mut self, amount: i64) -> DomainResult<i64> {
        self.quantity = self.check_issue(amount)?;
        Ok(self.quantity)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} - {} ({})", self.code, self.name, self.quantity)
    }
}
