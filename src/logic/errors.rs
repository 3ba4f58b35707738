//! Transport error display
//!
//! Worker responses carry one display-ready line per failure. The
//! context chain built with anyhow is for logs; the toast wants the
//! root cause.

use anyhow::Error;

/// One-line message for the toast: the root cause, not the context chain.
pub fn format_error_message(error: &Error) -> String {
    // A reqwest error in the chain is the most informative part
    let mut current: Option<&dyn std::error::Error> = Some(error.as_ref());

    while let Some(err) = current {
        if let Some(reqwest_err) = err.downcast_ref::<reqwest::Error>() {
            return reqwest_err.to_string();
        }
        current = err.source();
    }

    let mut source = error.source();
    let mut deepest = error.to_string();

    while let Some(err) = source {
        deepest = err.to_string();
        source = err.source();
    }

    deepest
}
