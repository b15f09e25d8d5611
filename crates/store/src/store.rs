use stockmgr_core::{DomainError, DomainResult, ProductId, SupplierId, find_by_id, find_by_id_mut};
use stockmgr_inventory::StockMovement;
use stockmgr_products::Product;
use stockmgr_suppliers::Supplier;

/// In-memory inventory data store.
///
/// Collections keep insertion order; listings and reports rely on it.
#[derive(Debug, Clone, Default)]
pub struct InventoryStore {
    pub(crate) products: Vec<Product>,
    pub(crate) suppliers: Vec<Supplier>,
    pub(crate) movements: Vec<StockMovement>,
}

impl InventoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    /// The movement log in insertion order (not necessarily time order).
    pub fn movements(&self) -> &[StockMovement] {
        &self.movements
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        find_by_id(&self.products, &id)
    }

    pub fn supplier(&self, id: SupplierId) -> Option<&Supplier> {
        find_by_id(&self.suppliers, &id)
    }

    /// Case-insensitive exact match on the product code; first match wins.
    pub fn find_product_by_code(&self, code: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.code().matches(code))
    }

    /// Case-insensitive exact match on the supplier name; first match wins.
    pub fn find_supplier_by_name(&self, name: &str) -> Option<&Supplier> {
        self.suppliers.iter().find(|s| s.has_name(name))
    }

    /// Movements of one product, in insertion order.
    pub fn movements_for(&self, product_id: ProductId) -> impl Iterator<Item = &StockMovement> {
        self.movements
            .iter()
            .filter(move |m| m.product_id() == product_id)
    }

    pub(crate) fn require_product(&self, id: ProductId) -> DomainResult<&Product> {
        self.product(id)
            .ok_or_else(|| DomainError::not_found(format!("product {id}")))
    }

    pub(crate) fn require_product_mut(&mut self, id: ProductId) -> DomainResult<&mut Product> {
        find_by_id_mut(&mut self.products, &id)
            .ok_or_else(|| DomainError::not_found(format!("product {id}")))
    }

    pub(crate) fn require_supplier(&self, id: SupplierId) -> DomainResult<&Supplier> {
        self.supplier(id)
            .ok_or_else(|| DomainError::not_found(format!("supplier {id}")))
    }

    pub(crate) fn require_optional_supplier(&self, id: Option<SupplierId>) -> DomainResult<()> {
        if let Some(id) = id {
            self.require_supplier(id)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn new_store_is_empty() {
        let store = InventoryStore::new();
        assert!(store.products().is_empty());
        assert!(store.suppliers().is_empty());
        assert!(store.movements().is_empty());
        assert!(store.find_product_by_code("P001").is_none());
        assert!(store.find_supplier_by_name("Supplier A").is_none());
    }

    #[test]
    fn lookups_ignore_case() {
        let store = InventoryStore::seeded(Utc::now()).unwrap();

        let p = store.find_product_by_code("p003").unwrap();
        assert_eq!(p.code().as_str(), "P003");

        let s = store.find_supplier_by_name("supplier b").unwrap();
        assert_eq!(s.name(), "Supplier B");
    }

    #[test]
    fn supplier_lookup_returns_first_of_duplicate_names() {
        let mut store = InventoryStore::new();
        let first = store
            .add_supplier(&stockmgr_suppliers::AddSupplier {
                name: "Acme".to_string(),
                contact: "one".to_string(),
            })
            .unwrap();
        store
            .add_supplier(&stockmgr_suppliers::AddSupplier {
                name: "ACME".to_string(),
                contact: "two".to_string(),
            })
            .unwrap();

        assert_eq!(store.find_supplier_by_name("acme").unwrap().id_typed(), first);
    }

    #[test]
    fn require_reports_missing_ids_as_not_found() {
        let store = InventoryStore::new();
        assert!(matches!(
            store.require_product(ProductId::new()),
            Err(DomainError::NotFound(_))
        ));
        assert!(matches!(
            store.require_optional_supplier(Some(SupplierId::new())),
            Err(DomainError::NotFound(_))
        ));
        assert!(store.require_optional_supplier(None).is_ok());
    }
}
