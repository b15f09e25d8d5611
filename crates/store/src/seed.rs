use chrono::{DateTime, Duration, Utc};

use stockmgr_core::{DomainResult, ProductId, SupplierId};
use stockmgr_inventory::{MovementKind, StockMovement};
use stockmgr_products::{Product, RegisterProduct};
use stockmgr_suppliers::{AddSupplier, Supplier};

use crate::store::InventoryStore;

impl InventoryStore {
    /// Create a store pre-populated with demo data: two suppliers, three
    /// products and three historical movements.
    ///
    /// The demo movements are illustrative; they are not meant to add up to
    /// the demo quantities.
    pub fn seeded(now: DateTime<Utc>) -> DomainResult<Self> {
        let mut store = Self::new();

        let supplier_a = seed_supplier(&mut store, "Supplier A", "contact@supplier-a.com")?;
        let supplier_b = seed_supplier(&mut store, "Supplier B", "contact@supplier-b.com")?;

        let p001 = seed_product(&mut store, "P001", "Screw 4mm", supplier_a, 100, now)?;
        let p002 = seed_product(&mut store, "P002", "Nut 4mm", supplier_a, 200, now)?;
        let p003 = seed_product(&mut store, "P003", "Arduino Board", supplier_b, 15, now)?;

        let history = [
            (p001, 50, MovementKind::In, Duration::days(5), Some(supplier_a), "initial entry"),
            (p002, 200, MovementKind::In, Duration::days(10), Some(supplier_a), "initial purchase"),
            (p003, 5, MovementKind::Out, Duration::days(1), None, "sale"),
        ];
        for (product_id, amount, kind, age, supplier_id, note) in history {
            store.movements.push(StockMovement::record(
                kind,
                product_id,
                amount,
                supplier_id,
                Some(note),
                now - age,
            ));
        }

        tracing::debug!(
            products = store.products.len(),
            suppliers = store.suppliers.len(),
            movements = store.movements.len(),
            "seeded demo inventory"
        );

        Ok(store)
    }
}

fn seed_supplier(store: &mut InventoryStore, name: &str, contact: &str) -> DomainResult<SupplierId> {
    let id = SupplierId::new();
    let cmd = AddSupplier {
        name: name.to_string(),
        contact: contact.to_string(),
    };
    store.suppliers.push(Supplier::add(id, &cmd)?);
    Ok(id)
}

// Inserted directly: demo stock carries no "initial balance" movement.
fn seed_product(
    store: &mut InventoryStore,
    code: &str,
    name: &str,
    supplier_id: SupplierId,
    quantity: i64,
    now: DateTime<Utc>,
) -> DomainResult<ProductId> {
    let id = ProductId::new();
    let cmd = RegisterProduct {
        code: code.to_string(),
        name: name.to_string(),
        supplier_id: Some(supplier_id),
        initial_quantity: quantity,
        occurred_at: now,
    };
    store.products.push(Product::register(id, &cmd)?);
    Ok(id)
}
