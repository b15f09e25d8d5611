use stockmgr_core::{DomainError, DomainResult, SupplierId, find_by_id_mut};
use stockmgr_suppliers::{AddSupplier, Supplier, UpdateSupplier};

use crate::store::InventoryStore;

impl InventoryStore {
    pub fn add_supplier(&mut self, cmd: &AddSupplier) -> DomainResult<SupplierId> {
        let id = SupplierId::new();
        let supplier = Supplier::add(id, cmd)?;

        tracing::info!(supplier_id = %id, name = supplier.name(), "supplier added");
        self.suppliers.push(supplier);
        Ok(id)
    }

    /// Replace a supplier's name and contact. Products keep pointing at it by id.
    pub fn update_supplier(&mut self, cmd: &UpdateSupplier) -> DomainResult<()> {
        let supplier = find_by_id_mut(&mut self.suppliers, &cmd.supplier_id)
            .ok_or_else(|| DomainError::not_found(format!("supplier {}", cmd.supplier_id)))?;
        supplier.update(cmd);

        tracing::info!(supplier_id = %cmd.supplier_id, name = supplier.name(), "supplier updated");
        Ok(())
    }

    /// Delete a supplier no product refers to.
    ///
    /// Movements may still name the supplier; they are history and render
    /// without it once it is gone.
    pub fn delete_supplier(&mut self, id: SupplierId) -> DomainResult<()> {
        let name = self.require_supplier(id)?.name().to_string();

        let referencing = self
            .products
            .iter()
            .filter(|p| p.references_supplier(id))
            .count();
        if referencing > 0 {
            return Err(DomainError::referential_integrity(format!(
                "supplier {name} is the preferred supplier of {referencing} product(s)"
            )));
        }

        self.suppliers.retain(|s| s.id_typed() != id);
        tracing::info!(supplier_id = %id, name = %name, "supplier deleted");
        Ok(())
    }
}
