use stockmgr_core::{DomainError, DomainResult, ProductId};
use stockmgr_inventory::StockMovement;
use stockmgr_products::{EditProduct, Product, RegisterProduct};

use crate::store::InventoryStore;

impl InventoryStore {
    /// Register a new product.
    ///
    /// Opening stock above zero is recorded as an IN movement ("initial
    /// balance") at `cmd.occurred_at`, attributed to the preferred supplier.
    pub fn register_product(&mut self, cmd: &RegisterProduct) -> DomainResult<ProductId> {
        let id = ProductId::new();
        let product = Product::register(id, cmd)?;

        if self.find_product_by_code(product.code().as_str()).is_some() {
            return Err(DomainError::duplicate(format!(
                "a product with code {} already exists",
                product.code()
            )));
        }
        self.require_optional_supplier(cmd.supplier_id)?;

        if product.quantity() > 0 {
            self.movements.push(StockMovement::initial_balance(
                id,
                product.quantity(),
                product.supplier_id(),
                cmd.occurred_at,
            ));
        }

        tracing::info!(
            product_id = %id,
            code = %product.code(),
            quantity = product.quantity(),
            "product registered"
        );
        self.products.push(product);

        Ok(id)
    }

    /// Replace a product's name and preferred supplier.
    pub fn edit_product(&mut self, cmd: &EditProduct) -> DomainResult<()> {
        self.require_optional_supplier(cmd.supplier_id)?;
        let product = self.require_product_mut(cmd.product_id)?;
        product.edit(cmd);

        tracing::info!(product_id = %cmd.product_id, code = %product.code(), "product edited");
        Ok(())
    }

    /// Delete a product together with its movement history.
    ///
    /// Returns the number of movements removed.
    pub fn delete_product(&mut self, id: ProductId) -> DomainResult<usize> {
        let code = self.require_product(id)?.code().clone();

        let before = self.movements.len();
        self.movements.retain(|m| m.product_id() != id);
        let removed = before - self.movements.len();
        self.products.retain(|p| p.id_typed() != id);

        tracing::info!(product_id = %id, code = %code, movements_removed = removed, "product deleted");
        Ok(removed)
    }
}
