//! HTTP facade over the inventory store: routing, sessions and
//! request/response mapping.

pub mod app;
pub mod config;
pub mod context;
pub mod middleware;
