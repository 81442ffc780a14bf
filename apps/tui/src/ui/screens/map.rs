use crate::app::App;
use crate::ui::widgets::map_canvas::render_map_canvas;
use crate::ui::widgets::popup::centered_rect;
use crate::ui::widgets::sidebar::render_sidebar;
use crate::ui::widgets::tooltip::render_tooltip;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use throbber_widgets_tui::Throbber;

pub fn render_map_screen(app: &mut App, f: &mut Frame<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title area
            Constraint::Min(10),   // Map and sidebar
            Constraint::Length(4), // Help text
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(1, 0)))
        .to_vec();

    render_title(app, f, chunks[0]);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(34)])
        .split(chunks[1]);
    render_map_canvas(app, f, content[0]);
    render_sidebar(app, f, content[1]);
    render_tooltip(app, f, content[0]);

    render_help_text(app, f, chunks[2]);
    render_shortcuts(f, chunks[3]);

    if app.show_help {
        render_help_popup(f, chunks[1]);
    }
}

fn render_title(app: &mut App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    f.render_widget(block, area);

    let inner = area.inner(Margin::new(1, 1));
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "Station Map ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "US public radio",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Left);
    f.render_widget(title, halves[0]);

    if app.loading_stations || app.loading_topology {
        let throbber = Throbber::default().label("loading data...");
        f.render_stateful_widget(throbber, halves[1], &mut app.throbber);
    } else {
        let status = Paragraph::new(Span::styled(
            app.status_message.as_str(),
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Right);
        f.render_widget(status, halves[1]);
    }
}

fn render_help_text(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", app.filter_mode.label()))
        .title_style(Style::default().fg(Color::Green))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let paragraph = Paragraph::new(app.help_text.as_str())
        .wrap(Wrap { trim: true })
        .block(block);
    f.render_widget(paragraph, area);
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let hint = Paragraph::new(Span::styled(
        "a/p/n/c filters | t metric | tab focus | +/- zoom | / search | ? help | q quit",
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Center);
    f.render_widget(hint, area);
}

fn render_help_popup(f: &mut Frame<'_>, area: Rect) {
    let popup = centered_rect(60, 70, area);
    f.render_widget(Clear, popup);

    let lines = vec![
        Line::from(Span::styled(
            "Keys",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("a / 1   show all stations"),
        Line::from("p / 2   participating only"),
        Line::from("n / 3   non-participating only"),
        Line::from("c / 4   comparison view"),
        Line::from("t       size by TSR / CUME"),
        Line::from("+ / -   zoom in / out"),
        Line::from("h/j/k/l pan the map"),
        Line::from("0       reset the view"),
        Line::from("tab     focus next station"),
        Line::from("s-tab   focus previous station"),
        Line::from("/       fuzzy search by name"),
        Line::from("r       replay the grow animation"),
        Line::from("esc     clear focus"),
        Line::from("q       quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(paragraph, popup);
}
