//! Campaign journal screen

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Notes
            Constraint::Length(3), // Input line
        ])
        .split(area);

    let items: Vec<ListItem> = if app.journal.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "Journal is empty.",
            Style::default().fg(Color::DarkGray),
        )))]
    } else {
        app.journal
            .notes()
            .iter()
            .map(|note| {
                ListItem::new(Line::from(Span::styled(
                    note.clone(),
                    Style::default().fg(Color::White),
                )))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Campaign Journal (Auto-Saving) "),
    );
    f.render_widget(list, chunks[0]);

    let input = if app.journal_entry {
        format!("Note text: {}", app.input)
    } else {
        String::new()
    };
    let paragraph = Paragraph::new(input)
        .block(Block::default().borders(Borders::ALL).title(" Input "));
    f.render_widget(paragraph, chunks[1]);
}
