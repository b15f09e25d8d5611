//! `stockmgr-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the inventory
//! crates (no storage, no HTTP).

pub mod entity;
pub mod error;
pub mod id;
pub mod input;
pub mod value_object;

pub use entity::{Entity, find_by_id, find_by_id_mut};
pub use error::{DomainError, DomainResult};
pub use id::{MovementId, ProductId, SupplierId};
pub use input::{ensure_amount, ensure_quantity, parse_amount, parse_quantity};
pub use value_object::ValueObject;
