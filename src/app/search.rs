//! Search and autocomplete actions

use std::time::Instant;

use crate::model::library::LibraryFocus;
use crate::model::{ResultsView, Screen, SearchField};
use crate::services::ApiRequest;
use crate::{log_debug, App};

impl App {
    /// Run the search: open the result view in loading state and issue
    /// the request. Without a selected document this aborts with a
    /// notice and no request.
    pub(crate) fn run_search(&mut self) {
        let Some(document_id) = self.model.library.selected_document.clone() else {
            self.model.ui.show_error("no document selected");
            return;
        };

        let query = self.model.library.query();
        log_debug(&format!(
            "search: doc={} vorname='{}' nachname='{}' verein='{}'",
            document_id, query.vorname, query.nachname, query.verein
        ));

        self.model.results = Some(ResultsView::loading());
        self.model.screen = Screen::Results;

        let _ = self.api_tx.send(ApiRequest::Search { document_id, query });

        // The original clears the form once the result window is open.
        self.model.library.clear_search_fields();
    }

    /// A keystroke landed in a search input: reschedule the debounced
    /// autocomplete lookup, or clear the box when the input emptied.
    pub(crate) fn on_search_input_changed(&mut self, field: SearchField) {
        let library = &mut self.model.library;

        if library.selected_document.is_none() {
            return;
        }

        if library.field_text(field).trim().is_empty() {
            library.suggestions.clear();
            library.autocomplete_timer.cancel();
            return;
        }

        library.autocomplete_timer.schedule(Instant::now());
    }

    /// Called by the event loop when the debounce deadline passes.
    pub(crate) fn fire_autocomplete(&mut self) {
        let library = &self.model.library;
        let Some(document_id) = library.selected_document.clone() else {
            return;
        };
        let LibraryFocus::Field(field) = library.focus else {
            return;
        };

        let q = library.field_text(field).trim().to_string();
        if q.is_empty() {
            return;
        }

        let _ = self.api_tx.send(ApiRequest::Autocomplete {
            document_id,
            field,
            q,
        });
    }

    /// Accept the highlighted suggestion into its field.
    pub(crate) fn accept_suggestion(&mut self) -> bool {
        let library = &mut self.model.library;
        let Some(field) = library.suggestions.field else {
            return false;
        };
        let Some(value) = library
            .suggestions
            .selected
            .and_then(|idx| library.suggestions.items.get(idx))
            .cloned()
        else {
            return false;
        };

        *library.field_text_mut(field) = value;
        library.suggestions.clear();
        library.autocomplete_timer.cancel();
        true
    }

    pub(crate) fn move_suggestion_selection(&mut self, delta: isize) -> bool {
        let suggestions = &mut self.model.library.suggestions;
        if suggestions.items.is_empty() {
            return false;
        }
        let last = suggestions.items.len() as isize - 1;
        let current = suggestions.selected.map(|s| s as isize).unwrap_or(-1);
        suggestions.selected = Some(current.saturating_add(delta).clamp(0, last) as usize);
        true
    }
}
