//! UI rendering

mod builder_view;
mod combat_view;
mod journal_view;
mod menu_view;

use crate::app::{App, Screen};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use sheet_core::ResultEvent;

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Keybindings footer
        ])
        .split(f.area());

    match app.screen {
        Screen::Menu => menu_view::draw(f, app, chunks[0]),
        Screen::Builder => builder_view::draw(f, app, chunks[0]),
        Screen::Combat => combat_view::draw(f, app, chunks[0]),
        Screen::Journal => journal_view::draw(f, app, chunks[0]),
    }

    draw_keybindings(f, app, chunks[1]);
}

fn draw_keybindings(f: &mut Frame, app: &App, area: Rect) {
    let keys: Vec<(&str, &str)> = match app.screen {
        Screen::Menu => vec![("1", "Load"), ("2", "New"), ("3/q", "Quit")],
        Screen::Builder => vec![
            ("Enter", "Confirm"),
            ("↑/↓", "Select"),
            ("f", "Finish leveling"),
            ("Esc", "Menu"),
        ],
        Screen::Combat => vec![
            ("1-8", "Cast"),
            ("a", "Attack"),
            ("e", "Heal"),
            ("h", "Hex"),
            ("r", "Long Rest"),
            ("j", "Journal"),
            ("q", "Menu"),
        ],
        Screen::Journal => vec![("a", "Add"), ("c", "Clear"), ("b", "Back")],
    };

    let mut spans: Vec<Span> = Vec::new();
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Keys "))
        .alignment(ratatui::layout::Alignment::Center);

    f.render_widget(paragraph, area);
}

/// Filled/empty bar for HP and slot displays
pub fn progress_bar(current: f64, max: f64, width: usize) -> String {
    let percent = if max > 0.0 {
        (current / max).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (percent * width as f64) as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Render one result event as a styled log line
pub fn event_line(event: &ResultEvent) -> Line<'static> {
    match event {
        ResultEvent::Cast { spell, source } => Line::from(vec![
            Span::styled("Cast: ", Style::default().fg(Color::Gray)),
            Span::styled(spell.clone(), Style::default().fg(Color::Cyan)),
            Span::styled(
                format!(" [{}]", source.label()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        ResultEvent::OutOfSlots { spell } => Line::from(Span::styled(
            format!("No slots left for {}!", spell),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        ResultEvent::UnknownSpell { input } => Line::from(Span::styled(
            format!("Unknown spell: {}", input),
            Style::default().fg(Color::DarkGray),
        )),
        ResultEvent::UtilityEffect { desc, .. } => Line::from(vec![
            Span::styled("Effect: ", Style::default().fg(Color::Gray)),
            Span::styled(desc.clone(), Style::default().fg(Color::Green)),
        ]),
        ResultEvent::AttackRoll {
            ability,
            roll,
            modifier,
            proficiency,
            total,
            crit,
        } => {
            let mut spans = vec![
                Span::styled(
                    format!("Atk ({}): ", ability),
                    Style::default().fg(Color::Gray),
                ),
                Span::raw(format!("{}+{}+{} = ", roll, modifier, proficiency)),
                Span::styled(
                    total.to_string(),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
            ];
            if *crit {
                spans.push(Span::styled(
                    " CRIT!",
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ));
            }
            Line::from(spans)
        }
        ResultEvent::DamageRoll {
            base,
            bonus,
            total,
            damage_type,
        } => {
            let type_label = damage_type
                .map(|t| format!(" {}", t))
                .unwrap_or_default();
            Line::from(vec![
                Span::styled(" >> Damage: ", Style::default().fg(Color::Gray)),
                Span::styled(
                    total.to_string(),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
                Span::styled(type_label, Style::default().fg(Color::Magenta)),
                Span::styled(
                    format!(" ({}+{})", base, bonus),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        }
        ResultEvent::Healed { amount, hp, hp_max } => Line::from(Span::styled(
            format!("Healed for {} HP ({}/{}).", amount, hp, hp_max),
            Style::default().fg(Color::Green),
        )),
        ResultEvent::HexToggled { active } => Line::from(Span::styled(
            format!("Hex curse {}.", if *active { "ON" } else { "OFF" }),
            Style::default().fg(Color::Magenta),
        )),
        ResultEvent::Rested => Line::from(Span::styled(
            "Long Rest completed.",
            Style::default().fg(Color::Cyan),
        )),
        ResultEvent::Info { text } => {
            Line::from(Span::styled(text.clone(), Style::default().fg(Color::Gray)))
        }
        ResultEvent::Unrecognized { input } => Line::from(Span::styled(
            format!("Unknown command: {}", input),
            Style::default().fg(Color::Red),
        )),
    }
}
