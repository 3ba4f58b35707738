use crate::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render_dialogs(f: &mut Frame, area: Rect, app: &App) {
    if let Some(path) = &app.model.library.upload_prompt {
        render_upload_prompt(f, area, path);
    } else if let Some((_, filename)) = &app.model.library.confirm_delete {
        render_delete_confirmation(f, area, filename);
    }
}

/// Render the upload prompt (path input with a block cursor)
fn render_upload_prompt(f: &mut Frame, area: Rect, path: &str) {
    let prompt_width = 60;
    let prompt_height = 5;
    let prompt_area = Rect {
        x: (area.width.saturating_sub(prompt_width)) / 2,
        y: (area.height.saturating_sub(prompt_height)) / 2,
        width: prompt_width,
        height: prompt_height,
    };

    let input_line = Line::from(vec![
        Span::raw(path.to_string()),
        Span::styled(" ", Style::default().add_modifier(Modifier::REVERSED)),
    ]);

    let prompt = Paragraph::new(vec![
        input_line,
        Line::from(""),
        Line::from(Span::styled(
            "Enter: upload   Esc: cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Upload Document (path to PDF)")
            .border_style(Style::default().fg(Color::Yellow)),
    )
    .style(Style::default().fg(Color::White).bg(Color::Black));

    f.render_widget(Clear, prompt_area);
    f.render_widget(prompt, prompt_area);
}

/// Render the delete confirmation dialog
fn render_delete_confirmation(f: &mut Frame, area: Rect, filename: &str) {
    let prompt_text = format!(
        "Delete document from the service?\n\n\
        File: {}\n\n\
        This action cannot be undone!\n\n\
        Continue? (y/n)",
        filename
    );

    // Center the prompt
    let prompt_width = 50;
    let prompt_height = 11;
    let prompt_area = Rect {
        x: (area.width.saturating_sub(prompt_width)) / 2,
        y: (area.height.saturating_sub(prompt_height)) / 2,
        width: prompt_width,
        height: prompt_height,
    };

    let prompt = Paragraph::new(prompt_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Confirm Delete")
                .border_style(Style::default().fg(Color::Red)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, prompt_area);
    f.render_widget(prompt, prompt_area);
}
