use stockmgr_core::DomainResult;
use stockmgr_inventory::{StockIn, StockMovement, StockOut};

use crate::store::InventoryStore;

impl InventoryStore {
    /// Receive stock. Returns the product's new quantity.
    pub fn stock_in(&mut self, cmd: &StockIn) -> DomainResult<i64> {
        self.require_product(cmd.product_id)?.check_receive(cmd.amount)?;
        self.require_optional_supplier(cmd.supplier_id)?;

        let product = self.require_product_mut(cmd.product_id)?;
        let quantity = product.receive(cmd.amount)?;
        let code = product.code().clone();

        let movement = StockMovement::from_stock_in(cmd);
        tracing::info!(
            code = %code,
            amount = cmd.amount,
            quantity,
            note = movement.note(),
            "stock in recorded"
        );
        self.movements.push(movement);

        Ok(quantity)
    }

    /// Issue stock. Returns the product's new quantity.
    pub fn stock_out(&mut self, cmd: &StockOut) -> DomainResult<i64> {
        let product = self.require_product_mut(cmd.product_id)?;
        let quantity = product.issue(cmd.amount)?;
        let code = product.code().clone();

        let movement = StockMovement::from_stock_out(cmd);
        tracing::info!(
            code = %code,
            amount = cmd.amount,
            quantity,
            note = movement.note(),
            "stock out recorded"
        );
        self.movements.push(movement);

        Ok(quantity)
    }
}
