//! Export actions
//!
//! Each exporter runs inside `with_full_table`, which swaps the visible
//! table to the full result set and restores it whether the export
//! succeeds or fails. Failures are toasts, never a stuck view.

use crate::export::{self, csv, pdf, print};
use crate::{log_debug, App};

impl App {
    pub(crate) fn export_csv(&mut self) {
        let Some(view) = self.model.results.as_mut() else {
            return;
        };

        let export_dir = self.export_dir.clone();
        let outcome =
            export::with_full_table(view, |records| csv::export_csv(records, &export_dir));

        match outcome {
            Ok(path) => {
                log_debug(&format!("csv export: {}", path.display()));
                self.model.ui.show_toast(format!("Saved {}", path.display()));
            }
            Err(e) => self.model.ui.show_error(format!("CSV export failed: {}", e)),
        }
    }

    pub(crate) fn export_pdf(&mut self) {
        let Some(view) = self.model.results.as_mut() else {
            return;
        };

        let export_dir = self.export_dir.clone();
        let converter = self.pdf_command.clone();
        let outcome = export::with_full_table(view, |records| {
            pdf::export_pdf(records, &export_dir, &converter)
        });

        match outcome {
            Ok(path) => {
                log_debug(&format!("pdf export: {}", path.display()));
                self.model.ui.show_toast(format!("Saved {}", path.display()));
            }
            Err(e) => self.model.ui.show_error(format!("PDF export failed: {}", e)),
        }
    }

    pub(crate) fn print_results(&mut self) {
        let Some(view) = self.model.results.as_mut() else {
            return;
        };

        let print_command = self.print_command.clone();
        let outcome = export::with_full_table(view, |records| {
            print::print_records(records, &print_command)
        });

        match outcome {
            Ok(()) => self.model.ui.show_toast("Sent to printer"),
            Err(e) => self.model.ui.show_error(format!("Print failed: {}", e)),
        }
    }
}
