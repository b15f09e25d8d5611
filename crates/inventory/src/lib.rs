//! Inventory domain module: the stock movement log.
//!
//! A movement is an immutable fact ("50 units of P001 came in at 10:42").
//! This crate defines the movement record and the stock in/out commands,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod movement;

pub use movement::{
    INITIAL_BALANCE_NOTE, MANUAL_ENTRY_NOTE, MANUAL_EXIT_NOTE, MovementKind, StockIn, StockMovement,
    StockOut,
};
