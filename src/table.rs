//! Typed table document
//!
//! Export views are built as a table model first (title, header row,
//! cell rows) and only then serialized by a backend. Record text is
//! untrusted remote content; the HTML backend escapes every cell and the
//! CSV backend quotes every field, so no raw record text reaches either
//! output format.

use crate::api::ResultRecord;
use crate::logic::columns;
use anyhow::{Context, Result};
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDoc {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableDoc {
    /// Build the full export table from all records in their current
    /// order, one row per record, ten cells per row.
    pub fn from_records(title: &str, records: &[ResultRecord]) -> Self {
        Self {
            title: title.to_string(),
            headers: columns::header_row(),
            rows: records.iter().map(columns::record_row).collect(),
        }
    }

    /// Standalone HTML document suitable for the PDF converter and the
    /// print spooler. Every header and cell is escaped.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n");
        html.push_str(&format!("<title>{}</title>\n", escape_html(&self.title)));
        html.push_str(
            "<style>\n\
             body { font-family: Arial; margin: 20px; }\n\
             table { border-collapse: collapse; width: 100%; }\n\
             th, td { border: 1px solid #000; padding: 6px; }\n\
             table { page-break-after: always; }\n\
             </style>\n</head>\n<body>\n",
        );
        html.push_str(&format!("<h1>{}</h1>\n", escape_html(&self.title)));
        html.push_str("<table>\n<thead>\n<tr>");
        for header in &self.headers {
            html.push_str(&format!("<th>{}</th>", escape_html(header)));
        }
        html.push_str("</tr>\n</thead>\n<tbody>\n");
        for row in &self.rows {
            html.push_str("<tr>");
            for cell in row {
                html.push_str(&format!("<td>{}</td>", escape_html(cell)));
            }
            html.push_str("</tr>\n");
        }
        html.push_str("</tbody>\n</table>\n</body>\n</html>\n");
        html
    }

    /// Semicolon-delimited CSV with every field quoted and internal
    /// quotes doubled, header row first.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(b';')
            .quote_style(csv::QuoteStyle::Always)
            .from_writer(writer);

        csv_writer
            .write_record(&self.headers)
            .context("Failed to write CSV header")?;
        for row in &self.rows {
            csv_writer
                .write_record(row)
                .context("Failed to write CSV row")?;
        }
        csv_writer.flush().context("Failed to flush CSV output")?;

        Ok(())
    }
}

/// Escape the five HTML metacharacters.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
