//! `stockmgr-store`: the in-memory data store and the business operations
//! that mutate it.
//!
//! ## Ownership
//!
//! [`InventoryStore`] owns the three collections (products, suppliers,
//! movements) for the lifetime of a session. It is constructed explicitly and
//! handed to whoever drives it; there is no global instance.
//!
//! ## Operation contract
//!
//! Every operation validates first and mutates last, so a returned
//! `Err(DomainError)` always means the store is exactly as it was before the
//! call. Entity-local rules (non-empty names, positive amounts, non-negative
//! quantity) are delegated to the domain crates; this crate adds the rules that
//! span records:
//!
//! - product codes are unique, case-insensitively
//! - a supplier referenced by a product cannot be deleted
//! - deleting a product deletes its movements
//! - every referenced id must exist

mod products;
mod seed;
mod stock;
mod store;
mod suppliers;

pub use store::InventoryStore;
