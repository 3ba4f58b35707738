//! Exporters
//!
//! All three exporters serialize the entire result store in its current
//! sort order; pagination never affects an export. The PDF and print
//! paths hand a built HTML document to an external command, the way the
//! original viewer delegated layout to the browser.

pub mod csv;
pub mod pdf;
pub mod print;

use crate::api::ResultRecord;
use crate::model::results::ResultsView;
use anyhow::Result;

/// Title used by every export artifact.
pub const EXPORT_TITLE: &str = "Suchergebnisse";

/// Run an export with the on-screen table swapped to the full result
/// set. The swap is undone before this returns, on the success and the
/// failure path alike, so a failed conversion can never leave the view
/// stuck showing the export table.
pub fn with_full_table<T>(
    view: &mut ResultsView,
    export: impl FnOnce(&[ResultRecord]) -> Result<T>,
) -> Result<T> {
    let records = view.all_results.clone();
    view.show_all_rows = true;
    let outcome = export(&records);
    view.show_all_rows = false;
    outcome
}
