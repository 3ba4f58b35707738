//! PDF exporter
//!
//! Builds the full HTML table off-screen, then hands it to an external
//! HTML-to-PDF converter (`wkhtmltopdf` by default, configurable). The
//! intermediate HTML file is removed whether or not the conversion
//! succeeds; a failed conversion reports the converter's stderr.

use crate::api::ResultRecord;
use crate::table::TableDoc;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

pub const PDF_FILENAME: &str = "results.pdf";

/// Convert every record, in its current order, to `results.pdf` in the
/// export directory. Returns the path of the written file.
pub fn export_pdf(
    records: &[ResultRecord],
    export_dir: &Path,
    converter: &str,
) -> Result<PathBuf> {
    let doc = TableDoc::from_records(super::EXPORT_TITLE, records);

    let html_path = std::env::temp_dir().join("startlist-export.html");
    let pdf_path = export_dir.join(PDF_FILENAME);

    std::fs::write(&html_path, doc.to_html())
        .with_context(|| format!("Failed to write {}", html_path.display()))?;

    let outcome = run_converter(converter, &html_path, &pdf_path);

    // The off-screen document is temporary either way.
    let _ = std::fs::remove_file(&html_path);

    outcome?;
    Ok(pdf_path)
}

fn run_converter(converter: &str, html_path: &Path, pdf_path: &Path) -> Result<()> {
    let output = Command::new(converter)
        .arg(html_path)
        .arg(pdf_path)
        .output()
        .with_context(|| format!("Failed to run converter '{}'", converter))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!(
            "Converter '{}' failed: {}",
            converter,
            stderr.trim().lines().last().unwrap_or("no output")
        );
    }

    Ok(())
}
