//! Library screen: document list on the left, search form on the right.

use crate::model::library::{LibraryFocus, LibraryModel};
use crate::model::SearchField;
use crate::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn render_library(f: &mut Frame, area: Rect, app: &mut App) {
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    render_document_list(f, panes[0], &app.model.library);
    render_search_form(f, panes[1], &app.model.library);
}

fn render_document_list(f: &mut Frame, area: Rect, library: &LibraryModel) {
    let focused = library.focus == LibraryFocus::DocumentList;

    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let title = if library.loading_documents {
        " Documents (loading...) "
    } else {
        " Documents "
    };

    let items: Vec<ListItem> = library
        .documents
        .iter()
        .map(|doc| {
            let selected = library.selected_document.as_deref() == Some(doc.id.as_str());
            let style = if selected {
                Style::default().add_modifier(Modifier::BOLD).fg(Color::Cyan)
            } else {
                Style::default()
            };
            ListItem::new(Span::styled(doc.filename.clone(), style))
        })
        .collect();

    let empty = items.is_empty();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(if empty { None } else { library.list_selection });
    f.render_stateful_widget(list, area, &mut state);

    if empty && !library.loading_documents {
        let hint = Paragraph::new("No documents. Press 'u' to upload one.")
            .style(Style::default().fg(Color::DarkGray));
        let inner = Rect {
            x: area.x + 2,
            y: area.y + 2,
            width: area.width.saturating_sub(4),
            height: 1,
        };
        f.render_widget(hint, inner);
    }
}

fn render_search_form(f: &mut Frame, area: Rect, library: &LibraryModel) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(area);

    let fields = [
        SearchField::Vorname,
        SearchField::Nachname,
        SearchField::Verein,
    ];
    for (i, field) in fields.iter().enumerate() {
        render_input(f, rows[i], library, *field);
    }

    render_suggestions(f, rows[3], library);
}

fn render_input(f: &mut Frame, area: Rect, library: &LibraryModel, field: SearchField) {
    let focused = library.focus == LibraryFocus::Field(field);
    let enabled = library.search_enabled();

    let border_style = if !enabled {
        Style::default().fg(Color::DarkGray)
    } else if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let text = library.field_text(field);
    let content = if focused {
        // Block cursor at the input position
        Line::from(vec![
            Span::raw(text.to_string()),
            Span::styled(" ", Style::default().add_modifier(Modifier::REVERSED)),
        ])
    } else {
        Line::from(text.to_string())
    };

    let input = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", field.label())),
    );
    f.render_widget(input, area);
}

fn render_suggestions(f: &mut Frame, area: Rect, library: &LibraryModel) {
    if library.suggestions.items.is_empty() {
        let hint = if library.search_enabled() {
            "Enter: search   Tab: next field   Esc: back to list"
        } else {
            "Select a document to enable searching"
        };
        let help = Paragraph::new(hint).style(Style::default().fg(Color::DarkGray));
        f.render_widget(help, area);
        return;
    }

    let items: Vec<ListItem> = library
        .suggestions
        .items
        .iter()
        .map(|s| ListItem::new(s.clone()))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Suggestions "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(library.suggestions.selected);
    f.render_stateful_widget(list, area, &mut state);
}
