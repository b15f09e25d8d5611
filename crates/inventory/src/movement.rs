use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockmgr_core::{Entity, MovementId, ProductId, SupplierId};

/// Note attached to the movement created for a product's opening stock.
pub const INITIAL_BALANCE_NOTE: &str = "initial balance";
/// Note used for a stock entry when the caller leaves it blank.
pub const MANUAL_ENTRY_NOTE: &str = "manual entry";
/// Note used for a stock exit when the caller leaves it blank.
pub const MANUAL_EXIT_NOTE: &str = "manual exit";

/// Direction of a movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MovementKind {
    In,
    Out,
}

impl MovementKind {
    pub fn sign(self) -> char {
        match self {
            MovementKind::In => '+',
            MovementKind::Out => '-',
        }
    }

    fn default_note(self) -> &'static str {
        match self {
            MovementKind::In => MANUAL_ENTRY_NOTE,
            MovementKind::Out => MANUAL_EXIT_NOTE,
        }
    }
}

/// Command: StockIn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockIn {
    pub product_id: ProductId,
    /// Supplier of this delivery; need not be the product's preferred supplier.
    pub supplier_id: Option<SupplierId>,
    pub amount: i64,
    pub note: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

/// Command: StockOut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockOut {
    pub product_id: ProductId,
    pub amount: i64,
    pub note: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

/// Immutable record of one inventory change.
///
/// `amount` is always positive; the direction is carried by `kind`. OUT
/// movements never carry a supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockMovement {
    id: MovementId,
    product_id: ProductId,
    amount: i64,
    kind: MovementKind,
    occurred_at: DateTime<Utc>,
    supplier_id: Option<SupplierId>,
    note: String,
}

impl StockMovement {
    /// Record a movement. A blank note is replaced with the kind's default.
    pub fn record(
        kind: MovementKind,
        product_id: ProductId,
        amount: i64,
        supplier_id: Option<SupplierId>,
        note: Option<&str>,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        let note = match note.map(str::trim) {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => kind.default_note().to_string(),
        };
        let supplier_id = match kind {
            MovementKind::In => supplier_id,
            MovementKind::Out => None,
        };

        Self {
            id: MovementId::new(),
            product_id,
            amount,
            kind,
            occurred_at,
            supplier_id,
            note,
        }
    }

    /// IN movement for stock a product was registered with.
    pub fn initial_balance(
        product_id: ProductId,
        quantity: i64,
        supplier_id: Option<SupplierId>,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self::record(
            MovementKind::In,
            product_id,
            quantity,
            supplier_id,
            Some(INITIAL_BALANCE_NOTE),
            occurred_at,
        )
    }

    pub fn from_stock_in(cmd: &StockIn) -> Self {
        Self::record(
            MovementKind::In,
            cmd.product_id,
            cmd.amount,
            cmd.supplier_id,
            cmd.note.as_deref(),
            cmd.occurred_at,
        )
    }

    pub fn from_stock_out(cmd: &StockOut) -> Self {
        Self::record(
            MovementKind::Out,
            cmd.product_id,
            cmd.amount,
            None,
            cmd.note.as_deref(),
            cmd.occurred_at,
        )
    }

    pub fn id_typed(&self) -> MovementId {
        self.id
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn kind(&self) -> MovementKind {
        self.kind
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    pub fn supplier_id(&self) -> Option<SupplierId> {
        self.supplier_id
    }

    pub fn note(&self) -> &str {
        &self.note
    }
}

impl Entity for StockMovement {
    type Id = MovementId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_notes_fall_back_to_defaults() {
        let p = ProductId::new();
        let now = Utc::now();

        let m = StockMovement::record(MovementKind::In, p, 5, None, Some("   "), now);
        assert_eq!(m.note(), MANUAL_ENTRY_NOTE);

        let m = StockMovement::record(MovementKind::Out, p, 5, None, None, now);
        assert_eq!(m.note(), MANUAL_EXIT_NOTE);
    }

    #[test]
    fn explicit_note_is_trimmed_and_kept() {
        let m = StockMovement::from_stock_in(&StockIn {
            product_id: ProductId::new(),
            supplier_id: None,
            amount: 3,
            note: Some(" invoice 42 ".to_string()),
            occurred_at: Utc::now(),
        });
        assert_eq!(m.note(), "invoice 42");
        assert_eq!(m.kind(), MovementKind::In);
    }

    #[test]
    fn out_movements_never_carry_a_supplier() {
        let m = StockMovement::record(
            MovementKind::Out,
            ProductId::new(),
            5,
            Some(SupplierId::new()),
            Some("sale"),
            Utc::now(),
        );
        assert_eq!(m.supplier_id(), None);
        assert_eq!(m.kind().sign(), '-');
    }

    #[test]
    fn initial_balance_is_an_in_movement() {
        let supplier = SupplierId::new();
        let m = StockMovement::initial_balance(ProductId::new(), 30, Some(supplier), Utc::now());
        assert_eq!(m.kind(), MovementKind::In);
        assert_eq!(m.amount(), 30);
        assert_eq!(m.supplier_id(), Some(supplier));
        assert_eq!(m.note(), INITIAL_BALANCE_NOTE);
    }

    #[test]
    fn kind_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&MovementKind::In).unwrap(), "\"IN\"");
    }
}
