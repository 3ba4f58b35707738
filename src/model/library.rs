//! Library screen state
//!
//! Document list, selection, the three search inputs with their
//! autocomplete box, and the upload/delete dialogs.

use crate::api::{DocumentEntry, SearchQuery};
use crate::logic::debounce::Debounce;
use std::time::Duration;

/// Autocomplete idle period before a lookup fires.
pub const AUTOCOMPLETE_DELAY: Duration = Duration::from_millis(200);

/// The three filterable fields of the search form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Vorname,
    Nachname,
    Verein,
}

impl SearchField {
    /// Wire name used as the autocomplete `field` parameter.
    pub fn as_param(&self) -> &'static str {
        match self {
            SearchField::Vorname => "vorname",
            SearchField::Nachname => "nachname",
            SearchField::Verein => "verein",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SearchField::Vorname => "Vorname",
            SearchField::Nachname => "Nachname",
            SearchField::Verein => "Verein",
        }
    }
}

/// What the keyboard is focused on within the library screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryFocus {
    DocumentList,
    Field(SearchField),
}

/// Suggestion box under the focused input.
#[derive(Debug, Default)]
pub struct Suggestions {
    pub field: Option<SearchField>,
    pub items: Vec<String>,
    pub selected: Option<usize>,
}

impl Suggestions {
    pub fn clear(&mut self) {
        self.field = None;
        self.items.clear();
        self.selected = None;
    }
}

#[derive(Debug)]
pub struct LibraryModel {
    pub documents: Vec<DocumentEntry>,
    pub list_selection: Option<usize>,
    /// Id of the document searches run against; cleared when the list
    /// refresh shows it no longer exists.
    pub selected_document: Option<String>,
    pub loading_documents: bool,

    pub focus: LibraryFocus,
    pub vorname: String,
    pub nachname: String,
    pub verein: String,

    pub suggestions: Suggestions,
    pub autocomplete_timer: Debounce,

    /// Path being typed into the upload prompt, when open.
    pub upload_prompt: Option<String>,
    /// (id, filename) pending delete confirmation, when open.
    pub confirm_delete: Option<(String, String)>,
}

impl LibraryModel {
    pub fn new() -> Self {
        Self {
            documents: Vec::new(),
            list_selection: None,
            selected_document: None,
            loading_documents: false,
            focus: LibraryFocus::DocumentList,
            vorname: String::new(),
            nachname: String::new(),
            verein: String::new(),
            suggestions: Suggestions::default(),
            autocomplete_timer: Debounce::new(AUTOCOMPLETE_DELAY),
            upload_prompt: None,
            confirm_delete: None,
        }
    }

    pub fn search_enabled(&self) -> bool {
        self.selected_document.is_some()
    }

    pub fn query(&self) -> SearchQuery {
        SearchQuery {
            vorname: self.vorname.trim().to_string(),
            nachname: self.nachname.trim().to_string(),
            verein: self.verein.trim().to_string(),
        }
    }

    pub fn field_text(&self, field: SearchField) -> &str {
        match field {
            SearchField::Vorname => &self.vorname,
            SearchField::Nachname => &self.nachname,
            SearchField::Verein => &self.verein,
        }
    }

    pub fn field_text_mut(&mut self, field: SearchField) -> &mut String {
        match field {
            SearchField::Vorname => &mut self.vorname,
            SearchField::Nachname => &mut self.nachname,
            SearchField::Verein => &mut self.verein,
        }
    }

    pub fn clear_search_fields(&mut self) {
        self.vorname.clear();
        self.nachname.clear();
        self.verein.clear();
        self.suggestions.clear();
        self.autocomplete_timer.cancel();
    }

    /// Apply a refreshed document list. If the selected id vanished, the
    /// selection is dropped and the search form reset.
    pub fn set_documents(&mut self, documents: Vec<DocumentEntry>) {
        let still_exists = self
            .selected_document
            .as_ref()
            .map(|id| documents.iter().any(|d| &d.id == id))
            .unwrap_or(false);

        if !still_exists {
            self.selected_document = None;
            self.clear_search_fields();
            self.focus = LibraryFocus::DocumentList;
        }

        if documents.is_empty() {
            self.list_selection = None;
        } else {
            let idx = self.list_selection.unwrap_or(0);
            self.list_selection = Some(idx.min(documents.len() - 1));
        }

        self.documents = documents;
        self.loading_documents = false;
    }

    /// Select the highlighted document for searching.
    pub fn select_highlighted(&mut self) {
        if let Some(doc) = self
            .list_selection
            .and_then(|idx| self.documents.get(idx))
        {
            self.selected_document = Some(doc.id.clone());
            self.clear_search_fields();
        }
    }

    pub fn selected_filename(&self) -> Option<&str> {
        let id = self.selected_document.as_ref()?;
        self.documents
            .iter()
            .find(|d| &d.id == id)
            .map(|d| d.filename.as_str())
    }
}

impl Default for LibraryModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: &str, filename: &str) -> DocumentEntry {
        DocumentEntry {
            id: id.to_string(),
            filename: filename.to_string(),
        }
    }

    #[test]
    fn refresh_keeps_selection_when_id_still_exists() {
        let mut library = LibraryModel::new();
        library.set_documents(vec![doc("a", "a.pdf"), doc("b", "b.pdf")]);
        library.list_selection = Some(1);
        library.select_highlighted();
        assert_eq!(library.selected_document.as_deref(), Some("b"));

        library.set_documents(vec![doc("b", "b.pdf")]);
        assert_eq!(library.selected_document.as_deref(), Some("b"));
    }

    #[test]
    fn refresh_clears_vanished_selection_and_fields() {
        let mut library = LibraryModel::new();
        library.set_documents(vec![doc("a", "a.pdf")]);
        library.select_highlighted();
        library.vorname = "an".to_string();

        library.set_documents(vec![doc("b", "b.pdf")]);
        assert_eq!(library.selected_document, None);
        assert_eq!(library.vorname, "");
        assert!(!library.search_enabled());
    }

    #[test]
    fn query_trims_whitespace() {
        let mut library = LibraryModel::new();
        library.vorname = "  Anna ".to_string();
        assert_eq!(library.query().vorname, "Anna");
    }

    #[test]
    fn selection_is_clamped_after_refresh() {
        let mut library = LibraryModel::new();
        library.set_documents(vec![doc("a", "a.pdf"), doc("b", "b.pdf")]);
        library.list_selection = Some(1);
        library.set_documents(vec![doc("a", "a.pdf")]);
        assert_eq!(library.list_selection, Some(0));
    }
}
