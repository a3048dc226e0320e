//! Main menu

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use sheet_core::LoadOutcome;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let load_line = match &app.saved {
        LoadOutcome::Loaded(sheet) => Line::from(vec![
            Span::styled("[1] ", Style::default().fg(Color::Yellow)),
            Span::raw("Load Character ("),
            Span::styled(sheet.name.clone(), Style::default().fg(Color::Cyan)),
            Span::raw(")"),
        ]),
        LoadOutcome::Missing => Line::from(vec![
            Span::styled("[1] ", Style::default().fg(Color::DarkGray)),
            Span::styled("[Empty] Load Character", Style::default().fg(Color::DarkGray)),
        ]),
        LoadOutcome::Corrupt => Line::from(vec![
            Span::styled("[1] ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                "[Unreadable save] Load Character",
                Style::default().fg(Color::Red),
            ),
        ]),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            "=== D&D 5E TERMINAL SUITE ===",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        load_line,
        Line::from(vec![
            Span::styled("[2] ", Style::default().fg(Color::Yellow)),
            Span::raw("Create New Character"),
        ]),
        Line::from(vec![
            Span::styled("[3] ", Style::default().fg(Color::Yellow)),
            Span::raw("Quit"),
        ]),
    ];

    if let Some(status) = &app.status {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            status.clone(),
            Style::default().fg(Color::Yellow),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Main Menu "));
    f.render_widget(paragraph, area);
}
