//! Pure Application Model
//!
//! State only - no services, no channels, no I/O. The event loop and the
//! handlers mutate it; the UI renders it. Split by screen:
//! - library: document list, search form, autocomplete, dialogs
//! - results: one result-view session (store + sort + page state)
//! - ui: cross-screen state (toast, quit flag)

pub mod library;
pub mod results;
pub mod ui;

pub use library::{LibraryModel, SearchField};
pub use results::ResultsView;
pub use ui::UiModel;

/// Which screen currently owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Library,
    Results,
}

#[derive(Debug)]
pub struct Model {
    pub screen: Screen,
    pub library: LibraryModel,
    /// Present while a result view is open; dropped when it closes.
    pub results: Option<ResultsView>,
    pub ui: UiModel,
}

impl Model {
    pub fn new() -> Self {
        Self {
            screen: Screen::Library,
            library: LibraryModel::new(),
            results: None,
            ui: UiModel::new(),
        }
    }

    /// Close the result view and return to the library. The per-session
    /// store is discarded here, never reused.
    pub fn close_results(&mut self) {
        self.results = None;
        self.screen = Screen::Library;
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}
