use crate::app::App;
use crate::ui::widgets::popup::centered_rect;
use crate::ui::widgets::tooltip::group_thousands;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};
use ratatui::Frame;

pub fn render_search_screen(app: &App, f: &mut Frame<'_>) {
    let popup = centered_rect(60, 70, f.area());
    f.render_widget(Clear, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(popup);

    let input = Paragraph::new(Line::from(vec![
        Span::styled("/ ", Style::default().fg(Color::Yellow)),
        Span::raw(app.search_input.as_str()),
        Span::styled("_", Style::default().fg(Color::DarkGray)),
    ]))
    .block(
        Block::default()
            .title(" Find a station ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(input, chunks[0]);

    let items: Vec<ListItem<'_>> = app
        .search_results
        .iter()
        .enumerate()
        .map(|(position, &index)| {
            let record = &app.records[index];
            let style = if position == app.search_selection {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(Line::from(Span::styled(
                format!(
                    "{}  ({}, CUME {})",
                    record.name,
                    record.class().slug(),
                    group_thousands(record.cume)
                ),
                style,
            )))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!(" {} matches ", app.search_results.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray)),
    );
    f.render_widget(list, chunks[1]);
}
