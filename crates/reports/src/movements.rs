use chrono::{DateTime, Local, Utc};
use serde::Serialize;

use stockmgr_inventory::{MovementKind, StockMovement};
use stockmgr_store::InventoryStore;

/// How many movements the recent movements report keeps.
pub const RECENT_MOVEMENT_LIMIT: usize = 50;

const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Render a movement timestamp in the operator's local time.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format(TIMESTAMP_FORMAT).to_string()
}

/// A movement resolved against the current products and suppliers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovementLine {
    pub occurred_at: DateTime<Utc>,
    pub kind: MovementKind,
    pub amount: i64,
    pub product_code: String,
    pub product_name: String,
    pub supplier: Option<String>,
    pub note: String,
}

impl MovementLine {
    /// Resolve a movement for display. `None` if its product is gone.
    pub(crate) fn resolve(store: &InventoryStore, movement: &StockMovement) -> Option<Self> {
        let product = store.product(movement.product_id())?;
        Some(Self {
            occurred_at: movement.occurred_at(),
            kind: movement.kind(),
            amount: movement.amount(),
            product_code: product.code().to_string(),
            product_name: product.name().to_string(),
            supplier: movement
                .supplier_id()
                .and_then(|id| store.supplier(id))
                .map(|s| s.name().to_string()),
            note: movement.note().to_string(),
        })
    }
}

impl core::fmt::Display for MovementLine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "[{}] {}{} {} - {}",
            format_timestamp(self.occurred_at),
            self.kind.sign(),
            self.amount,
            self.product_code,
            self.product_name
        )?;
        if let Some(supplier) = &self.supplier {
            write!(f, " ({supplier})")?;
        }
        write!(f, " -- {}", self.note)
    }
}

/// The most recent movements, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovementsReport {
    pub lines: Vec<MovementLine>,
}

/// Build the recent movements report: all movements sorted by timestamp
/// (ties keep insertion order), keeping only the last
/// [`RECENT_MOVEMENT_LIMIT`].
pub fn recent_movements_report(store: &InventoryStore) -> MovementsReport {
    let mut movements: Vec<&StockMovement> = store.movements().iter().collect();
    movements.sort_by_key(|m| m.occurred_at());

    let skip = movements.len().saturating_sub(RECENT_MOVEMENT_LIMIT);
    let lines = movements
        .into_iter()
        .skip(skip)
        .filter_map(|m| MovementLine::resolve(store, m))
        .collect();

    MovementsReport { lines }
}

impl core::fmt::Display for MovementsReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Report - Movements (last {RECENT_MOVEMENT_LIMIT})")?;
        writeln!(f)?;
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Duration, TimeZone, Timelike};

    use stockmgr_inventory::{StockIn, StockOut};
    use stockmgr_products::RegisterProduct;

    use super::*;

    fn at(minute: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap() + Duration::minutes(minute)
    }

    fn store_with_widget() -> (InventoryStore, stockmgr_core::ProductId) {
        let mut store = InventoryStore::new();
        let id = store
            .register_product(&RegisterProduct {
                code: "W1".to_string(),
                name: "Widget".to_string(),
                supplier_id: None,
                initial_quantity: 0,
                occurred_at: at(0),
            })
            .unwrap();
        (store, id)
    }

    #[test]
    fn keeps_the_fifty_most_recent_in_ascending_order() {
        let (mut store, id) = store_with_widget();
        // Insert out of time order so sorting is actually exercised.
        for i in (0..60).rev() {
            store
                .stock_in(&StockIn {
                    product_id: id,
                    supplier_id: None,
                    amount: i + 1,
                    note: None,
                    occurred_at: at(i),
                })
                .unwrap();
        }

        let report = recent_movements_report(&store);

        assert_eq!(report.lines.len(), RECENT_MOVEMENT_LIMIT);
        assert_eq!(report.lines.first().unwrap().occurred_at, at(10));
        assert_eq!(report.lines.last().unwrap().occurred_at, at(59));
        assert!(report.lines.windows(2).all(|w| w[0].occurred_at <= w[1].occurred_at));
    }

    #[test]
    fn shows_everything_when_under_the_limit() {
        let store = InventoryStore::seeded(Utc::now()).unwrap();
        let report = recent_movements_report(&store);

        let codes: Vec<_> = report.lines.iter().map(|l| l.product_code.as_str()).collect();
        // Seed history: P002 ten days ago, P001 five days ago, P003 yesterday.
        assert_eq!(codes, ["P002", "P001", "P003"]);
    }

    #[test]
    fn renders_signed_lines_with_optional_supplier() {
        let mut store = InventoryStore::new();
        let supplier = store
            .add_supplier(&add_supplier_cmd("Supplier A"))
            .unwrap();
        let id = store
            .register_product(&RegisterProduct {
                code: "P001".to_string(),
                name: "Screw 4mm".to_string(),
                supplier_id: Some(supplier),
                initial_quantity: 100,
                occurred_at: at(0),
            })
            .unwrap();
        store
            .stock_out(&StockOut {
                product_id: id,
                amount: 5,
                note: Some("sale".to_string()),
                occurred_at: at(90),
            })
            .unwrap();

        let text = recent_movements_report(&store).to_string();

        assert_eq!(
            text,
            format!(
                "Report - Movements (last 50)\n\n\
                 [{}] +100 P001 - Screw 4mm (Supplier A) -- initial balance\n\
                 [{}] -5 P001 - Screw 4mm -- sale\n",
                format_timestamp(at(0)),
                format_timestamp(at(90)),
            )
        );
    }

    #[test]
    fn timestamps_use_day_month_year_in_local_time() {
        let ts = at(90);
        let local = ts.with_timezone(&Local);
        assert_eq!(
            format_timestamp(ts),
            format!(
                "{:02}/{:02}/{} {:02}:{:02}",
                local.day(),
                local.month(),
                local.year(),
                local.hour(),
                local.minute()
            )
        );
    }

    #[test]
    fn same_timestamp_movements_keep_insertion_order() {
        let (mut store, id) = store_with_widget();
        for note in ["first", "second", "third"] {
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

        let report = recent_movements_report(&store);
        let notes: Vec<_> = report.lines.iter().map(|l| l.note.as_str()).collect();
        assert_eq!(notes, ["first", "second", "third"]);
    }

    fn add_supplier_cmd(name: &str) -> stockmgr_suppliers::AddSupplier {
        stockmgr_suppliers::AddSupplier {
            name: name.to_string(),
            contact: String::new(),
        }
    }
}
