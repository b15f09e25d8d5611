use serde::Serialize;

use stockmgr_core::ProductId;
use stockmgr_store::InventoryStore;

use crate::NO_SUPPLIER;

/// One product's row in the current stock report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockLine {
    pub product_id: ProductId,
    pub code: String,
    pub name: String,
    pub quantity: i64,
    /// Current name of the preferred supplier, if any.
    pub supplier: Option<String>,
}

/// Current stock: one line per product, in store order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockReport {
    pub lines: Vec<StockLine>,
}

pub fn current_stock_report(store: &InventoryStore) -> StockReport {
    let lines = store
        .products()
        .iter()
        .map(|p| StockLine {
            product_id: p.id_typed(),
            code: p.code().to_string(),
            name: p.name().to_string(),
            quantity: p.quantity(),
            supplier: p
                .supplier_id()
                .and_then(|id| store.supplier(id))
                .map(|s| s.name().to_string()),
        })
        .collect();

    StockReport { lines }
}

impl core::fmt::Display for StockLine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} | {} | Qty: {} | Supplier: {}",
            self.code,
            self.name,
            self.quantity,
            self.supplier.as_deref().unwrap_or(NO_SUPPLIER)
        )
    }
}

impl core::fmt::Display for StockReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Report - Current Stock")?;
        writeln!(f)?;
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use stockmgr_products::RegisterProduct;

    use super::*;

    #[test]
    fn lists_products_in_store_order_with_placeholder() {
        let mut store = InventoryStore::seeded(Utc::now()).unwrap();
        store
            .register_product(&RegisterProduct {
                code: "P004".to_string(),
                name: "Jumper Wire".to_string(),
                supplier_id: None,
                initial_quantity: 0,
                occurred_at: Utc::now(),
            })
            .unwrap();

        let report = current_stock_report(&store);
        let text = report.to_string();

        assert_eq!(
            text,
            "Report - Current Stock\n\n\
             P001 | Screw 4mm | Qty: 100 | Supplier: Supplier A\n\
             P002 | Nut 4mm | Qty: 200 | Supplier: Supplier A\n\
             P003 | Arduino Board | Qty: 15 | Supplier: Supplier B\n\
             P004 | Jumper Wire | Qty: 0 | Supplier: —\n"
        );
        assert_eq!(report.lines[3].supplier, None);
    }

    #[test]
    fn empty_store_renders_header_only() {
        let report = current_stock_report(&InventoryStore::new());
        assert!(report.lines.is_empty());
        assert_eq!(report.to_string(), "Report - Current Stock\n\n");
    }

    #[test]
    fn serializes_lines_as_json() {
        let store = InventoryStore::seeded(Utc::now()).unwrap();
        let json = serde_json::to_value(current_stock_report(&store)).unwrap();
        assert_eq!(json["lines"][0]["code"], "P001");
        assert_eq!(json["lines"][0]["quantity"], 100);
        assert_eq!(json["lines"][0]["supplier"], "Supplier A");
    }
}
