//! Result table
//!
//! Renders the current page of the result store with sort arrows on the
//! active column and a page indicator. Loading and failed search states
//! render inside the same screen.

use crate::logic::columns::Column;
use crate::model::results::{ResultsLoad, ResultsView};
use crate::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub fn render_results(f: &mut Frame, area: Rect, app: &mut App) {
    let Some(view) = app.model.results.as_ref() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(2)])
        .split(area);

    match &view.load {
        ResultsLoad::Loading => {
            let notice = Paragraph::new("Searching...")
                .block(Block::default().borders(Borders::ALL).title(" Suchergebnisse "));
            f.render_widget(notice, chunks[0]);
        }
        ResultsLoad::Failed(message) => {
            let notice = Paragraph::new(format!("Search failed: {}", message))
                .style(Style::default().fg(Color::Red))
                .block(Block::default().borders(Borders::ALL).title(" Suchergebnisse "));
            f.render_widget(notice, chunks[0]);
        }
        ResultsLoad::Loaded => render_table(f, chunks[0], view),
    }

    render_footer(f, chunks[1], view);
}

fn render_table(f: &mut Frame, area: Rect, view: &ResultsView) {
    let header_cells: Vec<Cell> = Column::ALL
        .iter()
        .map(|column| {
            let mut label = column.label().to_string();
            if view.sort_column == Some(*column) {
                label.push_str(if view.sort_ascending { " ▲" } else { " ▼" });
            }
            Cell::from(label).style(Style::default().add_modifier(Modifier::BOLD))
        })
        .collect();
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = view
        .visible_rows()
        .iter()
        .map(|record| {
            Row::new(
                Column::ALL
                    .iter()
                    .map(|column| Cell::from(column.display_value(record)))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let widths: Vec<Constraint> = Column::ALL
        .iter()
        .map(|column| {
            let content_width = view
                .visible_rows()
                .iter()
                .map(|record| column.display_value(record).width())
                .max()
                .unwrap_or(0);
            let label_width = column.label().width() + 2; // room for the arrow
            Constraint::Length(content_width.max(label_width).min(24) as u16)
        })
        .collect();

    let count = view.all_results.len();
    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Suchergebnisse ({}) ", count)),
        );

    f.render_widget(table, area);
}

fn render_footer(f: &mut Frame, area: Rect, view: &ResultsView) {
    let lines = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let indicator = format!("Page {} of {}", view.current_page, view.total_pages());
    f.render_widget(Paragraph::new(indicator), lines[0]);

    let hints = "←/→: page   1-9,0: sort column   c: CSV   f: PDF   p: print   Esc: close";
    f.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
        lines[1],
    );
}
