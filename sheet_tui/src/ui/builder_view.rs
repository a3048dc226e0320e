//! Character creation wizard

use crate::app::{App, BuilderStep};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use sheet_core::Ability;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Progress summary
            Constraint::Min(0),    // Step content
            Constraint::Length(3), // Input line
        ])
        .split(area);

    draw_summary(f, app, chunks[0]);
    match app.step {
        BuilderStep::Name => draw_prompt(f, chunks[1], "Enter a name (blank keeps 'Hero')."),
        BuilderStep::Race => draw_race_list(f, app, chunks[1]),
        BuilderStep::Scores(idx) => draw_score_prompt(f, app, chunks[1], idx),
        BuilderStep::Classes(pending) => draw_class_list(f, app, chunks[1], pending),
    }
    draw_input(f, app, chunks[2]);
}

fn draw_summary(f: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled("Name: ", Style::default().fg(Color::Gray)),
            Span::styled(app.draft.name().to_string(), Style::default().fg(Color::Cyan)),
            Span::styled("   Race: ", Style::default().fg(Color::Gray)),
            Span::styled(app.draft.race_id().to_string(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::styled("Total level: ", Style::default().fg(Color::Gray)),
            Span::styled(
                app.draft.total_level().to_string(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("   Classes: {}", summarize_classes(app)),
                Style::default().fg(Color::Gray),
            ),
        ]),
    ];
    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Character Creator "));
    f.render_widget(paragraph, area);
}

fn summarize_classes(app: &App) -> String {
    if app.draft.classes().is_empty() {
        "none yet".to_string()
    } else {
        app.draft
            .classes()
            .iter()
            .map(|c| format!("{} {}", c.name, c.level))
            .collect::<Vec<_>>()
            .join(" / ")
    }
}

fn draw_prompt(f: &mut Frame, area: Rect, text: &str) {
    let paragraph = Paragraph::new(text.to_string())
        .block(Block::default().borders(Borders::ALL).title(" Step "));
    f.render_widget(paragraph, area);
}

fn draw_race_list(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .book
        .races()
        .iter()
        .enumerate()
        .map(|(i, race)| {
            let marker = if i == app.selected { "> " } else { "  " };
            let style = if i == app.selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(
                format!("{}{} (speed {})", marker, race.name, race.speed),
                style,
            )))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Select Race "));
    f.render_widget(list, area);
}

fn draw_score_prompt(f: &mut Frame, app: &App, area: Rect, idx: usize) {
    let mut lines: Vec<Line> = app
        .draft
        .base_scores()
        .iter()
        .enumerate()
        .map(|(i, (ability, score))| {
            let marker = if i == idx { "> " } else { "  " };
            let style = if i == idx {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(
                format!("{}{}: {}", marker, ability.key().to_uppercase(), score),
                style,
            ))
        })
        .collect();
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!(
            "Type the base {} score and press Enter (blank = 10).",
            Ability::all()[idx].key().to_uppercase()
        ),
        Style::default().fg(Color::Gray),
    )));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Ability Scores (Base) "));
    f.render_widget(paragraph, area);
}

fn draw_class_list(f: &mut Frame, app: &App, area: Rect, pending: Option<usize>) {
    let items: Vec<ListItem> = app
        .book
        .classes()
        .iter()
        .enumerate()
        .map(|(i, class)| {
            let marker = if i == app.selected { "> " } else { "  " };
            let style = if pending == Some(i) {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else if i == app.selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(
                format!("{}{} (d{})", marker, class.name, class.hit_die),
                style,
            )))
        })
        .collect();

    let title = match pending {
        Some(idx) => format!(
            " Levels of {}? ",
            app.book
                .classes()
                .get(idx)
                .map(|c| c.name.as_str())
                .unwrap_or("?")
        ),
        None => " Leveling (Enter adds, f finishes) ".to_string(),
    };

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, area);
}

fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let text = match app.step {
        BuilderStep::Race | BuilderStep::Classes(None) => String::new(),
        _ => format!("> {}", app.input),
    };
    let status = app.status.clone().unwrap_or(text);
    let paragraph = Paragraph::new(status)
        .block(Block::default().borders(Borders::ALL).title(" Input "));
    f.render_widget(paragraph, area);
}
