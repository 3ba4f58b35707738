use serde::Deserialize;
use std::path::PathBuf;

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_pdf_command() -> String {
    "wkhtmltopdf".to_string()
}

fn default_print_command() -> String {
    "lp".to_string()
}

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Base URL of the document search service, e.g. http://localhost:8000
    pub base_url: String,

    /// Directory that receives results.csv / results.pdf
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,

    /// HTML-to-PDF converter, invoked as `<cmd> <input.html> <output.pdf>`
    #[serde(default = "default_pdf_command")]
    pub pdf_command: String,

    /// Print spooler, invoked as `<cmd> <document.html>`
    #[serde(default = "default_print_command")]
    pub print_command: String,
}
