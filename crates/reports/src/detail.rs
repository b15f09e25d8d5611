use serde::Serialize;

use stockmgr_core::{DomainError, DomainResult, ProductId, SupplierId};
use stockmgr_inventory::StockMovement;
use stockmgr_store::InventoryStore;

use crate::NO_SUPPLIER;
use crate::movements::MovementLine;

/// How many movements the product detail view shows.
pub const PRODUCT_DETAIL_MOVEMENT_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupplierContact {
    pub supplier_id: SupplierId,
    pub name: String,
    pub contact: String,
}

/// Detail view of one product, with its latest movements (newest first).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductDetail {
    pub product_id: ProductId,
    pub code: String,
    pub name: String,
    pub quantity: i64,
    pub supplier: Option<SupplierContact>,
    pub recent_movements: Vec<MovementLine>,
}

pub fn product_detail(store: &InventoryStore, product_id: ProductId) -> DomainResult<ProductDetail> {
    let product = store
        .product(product_id)
        .ok_or_else(|| DomainError::not_found(format!("product {product_id}")))?;

    // Newest first; ties keep insertion order.
    let mut movements: Vec<&StockMovement> = store.movements_for(product_id).collect();
    movements.sort_by(|a, b| b.occurred_at().cmp(&a.occurred_at()));

    let recent_movements = movements
        .into_iter()
        .take(PRODUCT_DETAIL_MOVEMENT_LIMIT)
        .filter_map(|m| MovementLine::resolve(store, m))
        .collect();

    let supplier = product
        .supplier_id()
        .and_then(|id| store.supplier(id))
        .map(|s| SupplierContact {
            supplier_id: s.id_typed(),
            name: s.name().to_string(),
            contact: s.contact().to_string(),
        });

    Ok(ProductDetail {
        product_id,
        code: product.code().to_string(),
        name: product.name().to_string(),
        quantity: product.quantity(),
        supplier,
        recent_movements,
    })
}

impl core::fmt::Display for ProductDetail {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Code: {}", self.code)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Current quantity: {}", self.quantity)?;
        match &self.supplier {
            Some(s) => writeln!(f, "Preferred supplier: {} ({})", s.name, s.contact)?,
            None => writeln!(f, "Preferred supplier: {NO_SUPPLIER}")?,
        }
        writeln!(f)?;
        writeln!(f, "Recent movements:")?;
        for line in &self.recent_movements {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};

    use stockmgr_inventory::StockIn;
    use stockmgr_products::RegisterProduct;

    use super::*;

    fn at(minute: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap() + Duration::minutes(minute)
    }

    #[test]
    fn shows_ten_newest_movements_of_that_product_only() {
        let mut store = InventoryStore::seeded(at(0)).unwrap();
        let p001 = store.find_product_by_code("P001").unwrap().id_typed();
        let p002 = store.find_product_by_code("P002").unwrap().id_typed();

        for i in 1..=12 {
            for product_id in [p001, p002] {
                store
                    .stock_in(&StockIn {
                        product_id,
                        supplier_id: None,
                        amount: i,
                        note: None,
                        occurred_at: at(i),
                    })
                    .unwrap();
            }
        }

        let detail = product_detail(&store, p001).unwrap();

        assert_eq!(detail.quantity, 100 + (1..=12).sum::<i64>());
        assert_eq!(detail.recent_movements.len(), PRODUCT_DETAIL_MOVEMENT_LIMIT);
        assert!(detail.recent_movements.iter().all(|l| l.product_code == "P001"));
        assert_eq!(detail.recent_movements[0].occurred_at, at(12));
        assert_eq!(detail.recent_movements[9].occurred_at, at(3));
    }

    #[test]
    fn renders_supplier_contact_or_placeholder() {
        let mut store = InventoryStore::seeded(at(0)).unwrap();
        let p003 = store.find_product_by_code("P003").unwrap().id_typed();

        let text = product_detail(&store, p003).unwrap().to_string();
        assert!(text.starts_with(
            "Code: P003\nName: Arduino Board\nCurrent quantity: 15\n\
             Preferred supplier: Supplier B (contact@supplier-b.com)\n\nRecent movements:\n"
        ));
        assert!(text.ends_with("-5 P003 - Arduino Board -- sale\n"));

        let id = store
            .register_product(&RegisterProduct {
                code: "P009".to_string(),
                name: "Loose Part".to_string(),
                supplier_id: None,
                initial_quantity: 0,
                occurred_at: at(1),
            })
            .unwrap();
        let text = product_detail(&store, id).unwrap().to_string();
        assert!(text.contains("Preferred supplier: —\n"));
        assert!(text.ends_with("Recent movements:\n"));
    }

    #[test]
    fn same_timestamp_movements_keep_insertion_order() {
        let mut store = InventoryStore::new();
        let id = store
            .register_product(&RegisterProduct {
                code: "W".to_string(),
                name: "Widget".to_string(),
                supplier_id: None,
                initial_quantity: 0,
                occurred_at: at(0),
            })
            .unwrap();
        for note in ["first", "second"] {
            store
                .stock_in(&StockIn {
                    product_id: id,
                    supplier_id: None,
                    amount: 1,
                    note: Some(note.to_string()),
                    occurred_at: at(5),
                })
                .unwrap();
        }

        let detail = product_detail(&store, id).unwrap();
        let notes: Vec<_> = detail.recent_movements.iter().map(|l| l.note.as_str()).collect();
        assert_eq!(notes, ["first", "second"]);
    }

    #[test]
    fn unknown_product_is_not_found() {
        let store = InventoryStore::new();
        let err = product_detail(&store, ProductId::new()).unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }
}
