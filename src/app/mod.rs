//! App Orchestration Methods
//!
//! `impl App` blocks grouped by domain. Methods here connect the pure
//! model to the background API worker and the exporters; rendering stays
//! in src/ui/ and pure rules in src/logic/.

pub(crate) mod documents;
pub(crate) mod export;
pub(crate) mod search;
