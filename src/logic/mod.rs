//! Business Logic
//!
//! Pure functions that can be unit tested without a terminal or a
//! running service:
//! - columns: result table columns and per-column value extraction
//! - sorting: comparator for result records
//! - pagination: page math and slicing
//! - debounce: cancellable deadline timer for autocomplete
//! - errors: transport error formatting for display

pub mod columns;
pub mod debounce;
pub mod errors;
pub mod pagination;
pub mod sorting;
