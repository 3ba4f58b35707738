//! CSV exporter

use crate::api::ResultRecord;
use crate::table::TableDoc;
use anyhow::{Context, Result};
use std::fs::File;
use std::path::{Path, PathBuf};

pub const CSV_FILENAME: &str = "results.csv";

/// Write every record, in its current order, to `results.csv` in the
/// export directory. Returns the path of the written file.
pub fn export_csv(records: &[ResultRecord], export_dir: &Path) -> Result<PathBuf> {
    let doc = TableDoc::from_records(super::EXPORT_TITLE, records);
    let path = export_dir.join(CSV_FILENAME);

    let file = File::create(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    doc.write_csv(file)?;

    Ok(path)
}
