// UI module - all rendering, built on Ratatui
//
// - render: orchestration, dispatches by screen
// - library: document list + search form + suggestions
// - results: the paginated result table
// - dialogs: upload prompt and delete confirmation
// - status_bar: bottom bar (service URL, selection, hints)
// - toast: brief pop-up notifications

pub mod dialogs;
pub mod library;
pub mod render;
pub mod results;
pub mod status_bar;
pub mod toast;

pub use render::render;
