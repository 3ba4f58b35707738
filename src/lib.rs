//! startlist library
//!
//! Exposes the pure modules for integration tests: the API types, the
//! result-store model, the table/export backends and the business logic.

pub mod api;
pub mod export;
pub mod logic;
pub mod model;
pub mod table;
