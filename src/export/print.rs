//! Print exporter
//!
//! Writes the full table as an HTML document and hands it to the
//! platform print spooler (`lp` by default, configurable). The call
//! blocks until the spooler accepts the job, matching the modal print
//! dialog of the original viewer.

use crate::api::ResultRecord;
use crate::table::TableDoc;
use anyhow::{Context, Result};
use std::process::Command;

/// Print every record in its current order.
pub fn print_records(records: &[ResultRecord], print_command: &str) -> Result<()> {
    let doc = TableDoc::from_records(super::EXPORT_TITLE, records);

    let html_path = std::env::temp_dir().join("startlist-print.html");
    std::fs::write(&html_path, doc.to_html())
        .with_context(|| format!("Failed to write {}", html_path.display()))?;

    let status = Command::new(print_command)
        .arg(&html_path)
        .status()
        .with_context(|| format!("Failed to run print command '{}'", print_command));

    let _ = std::fs::remove_file(&html_path);

    let status = status?;
    if !status.success() {
        anyhow::bail!("Print command '{}' exited with {}", print_command, status);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_print_command_is_reported() {
        let outcome = print_records(&[], "print-command-that-does-not-exist");
        assert!(outcome.is_err());
    }

    #[test]
    fn print_job_file_is_cleaned_up() {
        let _ = print_records(&[ResultRecord::default()], "true");
        assert!(!std::env::temp_dir().join("startlist-print.html").exists());
    }
}
