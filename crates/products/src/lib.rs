//! Products domain module.
//!
//! This crate contains business rules that concern a single product (code and
//! name validation, on-hand quantity), implemented purely as deterministic
//! domain logic (no IO, no HTTP, no storage). Rules that span several records
//! (code uniqueness, cascades) live in `stockmgr-store`.

pub mod code;
pub mod product;

pub use code::ProductCode;
pub use product::{EditProduct, Product, RegisterProduct};
