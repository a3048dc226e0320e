//! Combat screen: status panel, spellbook and the event log

use crate::app::App;
use crate::ui::{event_line, progress_bar};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use sheet_core::{ability_modifier, SessionState};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let Some(session) = app.session.as_ref() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),  // Status
            Constraint::Length(10), // Spellbook
            Constraint::Min(0),     // Log
        ])
        .split(area);

    draw_status(f, session, chunks[0]);
    draw_spellbook(f, app, chunks[1]);
    draw_log(f, session, chunks[2]);
}

fn draw_status(f: &mut Frame, session: &SessionState, area: Rect) {
    let sheet = session.sheet();
    let pool = session.pool();

    let hp_max = sheet.hp_max.max(0) as f64;
    let bar = progress_bar(session.current_hp().max(0) as f64, hp_max, 20);

    let stat_spans: Vec<String> = sheet
        .final_stats
        .iter()
        .map(|(ability, score)| {
            let m = ability_modifier(score);
            let sign = if m >= 0 { "+" } else { "" };
            format!("{}:{}({}{})", ability.key().to_uppercase(), score, sign, m)
        })
        .collect();

    let hex_style = if pool.hex_active() {
        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let lines = vec![
        Line::from(Span::styled(
            format!(
                "{} | Lv.{} {} | {}",
                sheet.name,
                sheet.total_level,
                sheet.race,
                sheet.class_line()
            ),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("HP: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}/{}", session.current_hp(), sheet.hp_max),
                Style::default().fg(Color::Green),
            ),
            Span::raw(format!(" [{}]", bar)),
        ]),
        Line::from(Span::styled(
            stat_spans.join(" | "),
            Style::default().fg(Color::White),
        )),
        Line::from(vec![
            Span::styled(
                format!(
                    "Sorc Slots: {}/{} | Pact: {}/{} | Balance: {}/{}",
                    pool.sorcery.current,
                    pool.sorcery.max,
                    pool.pact.current,
                    pool.pact.max,
                    pool.balance.current,
                    pool.balance.max
                ),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                format!("Hex Curse: {}", if pool.hex_active() { "ON" } else { "OFF" }),
                hex_style,
            ),
            Span::styled(
                format!(
                    " | Atk Bonus: +{} | Save DC: {}",
                    sheet.attack_bonus(),
                    sheet.spell_save_dc()
                ),
                Style::default().fg(Color::Gray),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Character Status "));
    f.render_widget(paragraph, area);
}

fn draw_spellbook(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .book
        .spells()
        .iter()
        .enumerate()
        .map(|(i, spell)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("[{}] ", i + 1),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(
                    format!("{:<18}", spell.name),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!(" Lv:{} ", spell.tier),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(spell.desc.clone(), Style::default().fg(Color::Gray)),
            ]))
        })
        .collect();

    let list =
        List::new(items).block(Block::default().borders(Borders::ALL).title(" Spellbook "));
    f.render_widget(list, area);
}

fn draw_log(f: &mut Frame, session: &SessionState, area: Rect) {
    let items: Vec<ListItem> = session
        .log()
        .iter()
        .map(|event| ListItem::new(event_line(event)))
        .collect();

    let list =
        List::new(items).block(Block::default().borders(Borders::ALL).title(" Combat Log "));
    f.render_widget(list, area);
}
