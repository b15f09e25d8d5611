//! Read-only projections over the inventory store.
//!
//! Each report is plain data (serializable, so the HTTP layer can return it as
//! JSON) with a `Display` impl producing the text form shown to users.
//! Reports never mutate the store.

pub mod detail;
pub mod movements;
pub mod stock;

pub use detail::{PRODUCT_DETAIL_MOVEMENT_LIMIT, ProductDetail, SupplierContact, product_detail};
pub use movements::{MovementLine, MovementsReport, RECENT_MOVEMENT_LIMIT, recent_movements_report};
pub use stock::{StockLine, StockReport, current_stock_report};

/// Shown where a product has no preferred supplier.
pub const NO_SUPPLIER: &str = "—";
