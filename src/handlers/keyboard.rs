//! Keyboard Input Handler
//!
//! Dialogs are handled first (they own the keyboard while open), then
//! keys dispatch by screen. The library screen distinguishes list focus
//! from input focus; typing only ever lands in the focused input.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::logic::columns::Column;
use crate::model::library::LibraryFocus;
use crate::model::{Screen, SearchField};
use crate::App;

pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.model.ui.should_quit = true;
        return Ok(());
    }

    // Upload prompt owns the keyboard while open
    if app.model.library.upload_prompt.is_some() {
        handle_upload_prompt_key(app, key);
        return Ok(());
    }

    // Delete confirmation dialog
    if app.model.library.confirm_delete.is_some() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_delete(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.model.library.confirm_delete = None;
            }
            _ => {}
        }
        return Ok(());
    }

    match app.model.screen {
        Screen::Library => handle_library_key(app, key),
        Screen::Results => handle_results_key(app, key),
    }

    Ok(())
}

fn handle_upload_prompt_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_upload(),
        KeyCode::Esc => {
            app.model.library.upload_prompt = None;
        }
        KeyCode::Backspace => {
            if let Some(path) = app.model.library.upload_prompt.as_mut() {
                path.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(path) = app.model.library.upload_prompt.as_mut() {
                path.push(c);
            }
        }
        _ => {}
    }
}

fn handle_library_key(app: &mut App, key: KeyEvent) {
    match app.model.library.focus {
        LibraryFocus::DocumentList => match key.code {
            KeyCode::Char('q') => app.model.ui.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => app.move_document_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => app.move_document_selection(1),
            KeyCode::Enter => app.select_highlighted_document(),
            KeyCode::Char('u') => app.open_upload_prompt(),
            KeyCode::Char('d') => app.request_delete_selected(),
            KeyCode::Char('r') => app.request_document_list(),
            KeyCode::Tab => {
                if app.model.library.search_enabled() {
                    app.model.library.focus = LibraryFocus::Field(SearchField::Vorname);
                }
            }
            _ => {}
        },

        LibraryFocus::Field(field) => match key.code {
            KeyCode::Esc => {
                app.model.library.suggestions.clear();
                app.model.library.autocomplete_timer.cancel();
                app.model.library.focus = LibraryFocus::DocumentList;
            }
            KeyCode::Tab => {
                app.model.library.suggestions.clear();
                app.model.library.focus = match field {
                    SearchField::Vorname => LibraryFocus::Field(SearchField::Nachname),
                    SearchField::Nachname => LibraryFocus::Field(SearchField::Verein),
                    SearchField::Verein => LibraryFocus::DocumentList,
                };
            }
            KeyCode::BackTab => {
                app.model.library.suggestions.clear();
                app.model.library.focus = match field {
                    SearchField::Vorname => LibraryFocus::DocumentList,
                    SearchField::Nachname => LibraryFocus::Field(SearchField::Vorname),
                    SearchField::Verein => LibraryFocus::Field(SearchField::Nachname),
                };
            }
            KeyCode::Up => {
                app.move_suggestion_selection(-1);
            }
            KeyCode::Down => {
                app.move_suggestion_selection(1);
            }
            KeyCode::Enter => {
                // Enter accepts a highlighted suggestion, otherwise runs
                // the search.
                if !app.accept_suggestion() {
                    app.run_search();
                }
            }
            KeyCode::Backspace => {
                app.model.library.field_text_mut(field).pop();
                app.on_search_input_changed(field);
            }
            KeyCode::Char(c) => {
                app.model.library.field_text_mut(field).push(c);
                app.on_search_input_changed(field);
            }
            _ => {}
        },
    }
}

fn handle_results_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.model.close_results(),

        KeyCode::Left | KeyCode::Char('h') => {
            if let Some(view) = app.model.results.as_mut() {
                view.prev_page();
            }
        }
        KeyCode::Right | KeyCode::Char('l') => {
            if let Some(view) = app.model.results.as_mut() {
                view.next_page();
            }
        }

        // '1'..'9' sort columns 0..8, '0' sorts column 9 (Meldezeit)
        KeyCode::Char(c @ '0'..='9') => {
            let index = if c == '0' {
                9
            } else {
                c as usize - '1' as usize
            };
            if let (Some(view), Some(column)) =
                (app.model.results.as_mut(), Column::from_index(index))
            {
                view.sort(column);
            }
        }

        KeyCode::Char('c') => app.export_csv(),
        KeyCode::Char('f') => app.export_pdf(),
        KeyCode::Char('p') => app.print_results(),

        _ => {}
    }
}
