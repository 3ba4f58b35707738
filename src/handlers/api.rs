//! API Response Handler
//!
//! Applies worker responses to the model. Every failure branch produces
//! a user-visible notice; nothing is swallowed.

use crate::model::library::LibraryFocus;
use crate::model::results::ResultsLoad;
use crate::services::ApiResponse;
use crate::{log_debug, App};

pub fn handle_api_response(app: &mut App, response: ApiResponse) {
    match response {
        ApiResponse::Documents(Ok(docs)) => {
            log_debug(&format!("document list: {} entries", docs.len()));
            app.model.library.set_documents(docs);
        }
        ApiResponse::Documents(Err(message)) => {
            app.model.library.loading_documents = false;
            app.model
                .ui
                .show_error(format!("loading documents failed: {}", message));
        }

        ApiResponse::Uploaded(Ok(())) => {
            app.model.ui.show_toast("Upload complete");
            app.request_document_list();
        }
        ApiResponse::Uploaded(Err(message)) => {
            app.model.ui.show_error(format!("upload failed: {}", message));
        }

        ApiResponse::Deleted(Ok(())) => {
            // Same reset as the original: selection gone, form cleared,
            // list refreshed.
            app.model.library.selected_document = None;
            app.model.library.clear_search_fields();
            app.model.library.focus = LibraryFocus::DocumentList;
            app.model.ui.show_toast("Document deleted");
            app.request_document_list();
        }
        ApiResponse::Deleted(Err(message)) => {
            app.model.ui.show_error(format!("delete failed: {}", message));
        }

        ApiResponse::SearchResults(outcome) => {
            // The view may have been closed while the search was in
            // flight; the session is gone, so the response is dropped.
            let Some(view) = app.model.results.as_mut() else {
                return;
            };
            if view.load != ResultsLoad::Loading {
                return;
            }

            match outcome {
                Ok(results) => {
                    log_debug(&format!("search results: {} records", results.len()));
                    view.set_results(results);
                }
                Err(message) => view.set_failed(message),
            }
        }

        ApiResponse::Suggestions { field, q, items } => {
            let library = &mut app.model.library;

            // Drop stale lookups: only fill the box if the user is still
            // in the same field with the same text.
            if library.focus != LibraryFocus::Field(field)
                || library.field_text(field).trim() != q
            {
                return;
            }

            match items {
                Ok(items) => {
                    library.suggestions.field = Some(field);
                    library.suggestions.selected = if items.is_empty() { None } else { Some(0) };
                    library.suggestions.items = items;
                }
                Err(message) => {
                    library.suggestions.clear();
                    app.model
                        .ui
                        .show_error(format!("autocomplete failed: {}", message));
                }
            }
        }
    }
}
