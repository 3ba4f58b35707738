use crate::model::Screen;
use crate::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the bottom status bar: service URL, selected document and key hints
pub fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut parts: Vec<String> = vec![format!("Service: {}", app.base_url)];

    match app.model.library.selected_filename() {
        Some(filename) => parts.push(format!("Document: {}", filename)),
        None => parts.push("Document: none".to_string()),
    }

    if app.model.screen == Screen::Library {
        parts.push("u: upload | d: delete | r: refresh | q: quit".to_string());
    }

    let status_line = parts.join(" | ");

    // Color the labels (before colons)
    let mut spans: Vec<Span> = Vec::new();
    for (idx, part) in status_line.split(" | ").enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" | "));
        }
        if let Some(colon_pos) = part.find(':') {
            let label = &part[..=colon_pos];
            let value = &part[colon_pos + 1..];
            spans.push(Span::styled(
                label.to_string(),
                Style::default().fg(Color::Yellow),
            ));
            spans.push(Span::raw(value.to_string()));
        } else {
            spans.push(Span::raw(part.to_string()));
        }
    }

    let status_bar =
        Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::Gray));

    f.render_widget(status_bar, area);
}
