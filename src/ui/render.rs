use crate::model::Screen;
use crate::App;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use super::{dialogs, library, results, status_bar, toast};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(size);

    match app.model.screen {
        Screen::Library => library::render_library(f, chunks[0], app),
        Screen::Results => results::render_results(f, chunks[0], app),
    }

    status_bar::render_status_bar(f, chunks[1], app);

    if app.model.library.upload_prompt.is_some() || app.model.library.confirm_delete.is_some() {
        dialogs::render_dialogs(f, size, app);
    }

    if let Some((message, _)) = &app.model.ui.toast_message {
        toast::render_toast(f, size, message);
    }
}
