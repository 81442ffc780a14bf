use crate::app::App;
use crate::domain::{FilterMode, StationClass};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const FILTER_KEYS: [char; 4] = ['a', 'p', 'n', 'c'];

pub fn render_sidebar(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Filters ")
        .title_style(Style::default().fg(Color::Green))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let mut lines: Vec<Line<'_>> = (0..4)
        .filter_map(FilterMode::from_index)
        .zip(FILTER_KEYS)
        .map(|(mode, key)| filter_line(mode, key, app.filter_mode == mode))
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Sizing: ", Style::default().fg(Color::Cyan)),
        Span::styled(
            app.metric_mode.label(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  (t switches)", Style::default().fg(Color::DarkGray)),
    ]));

    let participants = app
        .records
        .iter()
        .filter(|r| r.class() == StationClass::Participant)
        .count();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::raw(format!(
        "{} stations, {} participating",
        app.records.len(),
        participants
    ))));

    if let Some((record, _)) = app.focused_station() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Focused: ", Style::default().fg(Color::Cyan)),
            Span::raw(record.name.as_str()),
        ]));
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn filter_line(mode: FilterMode, key: char, selected: bool) -> Line<'static> {
    let bullet = if selected { "(*)" } else { "( )" };
    let style = if selected {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    Line::from(vec![
        Span::styled(format!("{bullet} {}", mode.label()), style),
        Span::styled(format!("  [{key}]"), Style::default().fg(Color::DarkGray)),
    ])
}
