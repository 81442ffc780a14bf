//! Station tooltip: contents, placement and fade.

use crate::app::App;
use crate::domain::StationRecord;
use crate::render::animation::fade_progress;
use crate::render::{Marker, Viewport};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use std::path::Path;

pub const TOOLTIP_WIDTH: u16 = 36;
pub const TOOLTIP_HEIGHT: u16 = 7;
const X_OFFSET: u16 = 2;
const Y_OFFSET: u16 = 1;

/// Thousands-separated rendering of a metric value.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// The logo path to show: the record's own, or the default asset when
/// the field is empty.
pub fn resolve_logo<'a>(record_logo: &'a str, default_logo: &'a str) -> &'a str {
    if record_logo.is_empty() {
        default_logo
    } else {
        record_logo
    }
}

/// Map a marker's canvas position to a cell inside the drawing area,
/// through the viewport's visible window. Off-window markers clamp to
/// the nearest edge.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn anchor_cell(marker: &Marker, viewport: &Viewport, area: Rect) -> (u16, u16) {
    let [x0, x1] = viewport.x_bounds();
    let [y0, y1] = viewport.y_bounds();
    let drawn_y = viewport.height() - marker.y;
    let fx = ((marker.x - x0) / (x1 - x0)).clamp(0.0, 1.0);
    let fy = ((y1 - drawn_y) / (y1 - y0)).clamp(0.0, 1.0);
    let x = f64::from(area.x) + fx * f64::from(area.width.saturating_sub(1));
    let y = f64::from(area.y) + fy * f64::from(area.height.saturating_sub(1));
    (x.round() as u16, y.round() as u16)
}

/// Place the tooltip beside the anchor with a fixed offset, flipping to
/// the opposite side when the default placement would overflow the right
/// or bottom edge, then clamping into the area.
pub fn tooltip_rect(anchor: (u16, u16), area: Rect) -> Rect {
    let width = TOOLTIP_WIDTH.min(area.width);
    let height = TOOLTIP_HEIGHT.min(area.height);
    let (ax, ay) = anchor;

    let mut x = i32::from(ax) + i32::from(X_OFFSET);
    if x + i32::from(width) > i32::from(area.right()) {
        x = i32::from(ax) - i32::from(width) - i32::from(X_OFFSET);
    }
    let mut y = i32::from(ay) + i32::from(Y_OFFSET);
    if y + i32::from(height) > i32::from(area.bottom()) {
        y = i32::from(ay) - i32::from(height) - i32::from(Y_OFFSET);
    }

    let max_x = i32::from(area.right()) - i32::from(width);
    let max_y = i32::from(area.bottom()) - i32::from(height);
    let x = u16::try_from(x.clamp(i32::from(area.left()), max_x.max(i32::from(area.left()))))
        .unwrap_or(area.left());
    let y = u16::try_from(y.clamp(i32::from(area.top()), max_y.max(i32::from(area.top()))))
        .unwrap_or(area.top());

    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Tooltip body, re-derived on every hover. The logo line is dropped
/// when the asset cannot be found, the way a broken image hides itself.
pub fn tooltip_lines<'a>(
    record: &'a StationRecord,
    logo_dir: &Path,
    default_logo: &'a str,
) -> Vec<Line<'a>> {
    let mut lines = vec![
        Line::from(Span::styled(
            record.class().slug(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            record.name.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("CUME: ", Style::default().fg(Color::Cyan)),
            Span::raw(group_thousands(record.cume)),
        ]),
    ];

    let logo = resolve_logo(&record.logo, default_logo);
    if logo_dir.join(logo).exists() {
        lines.push(Line::from(Span::styled(
            format!("logo: {logo}"),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines
}

/// What the tooltip currently shows: the focused station fading in, or
/// the last focused one fading back out after a clear.
fn tooltip_subject(app: &App) -> Option<(&StationRecord, &Marker, f64)> {
    if let Some((record, marker)) = app.focused_station() {
        let opacity = app
            .focus_started
            .map_or(1.0, |t| fade_progress(t.elapsed().as_secs_f64() * 1000.0));
        return Some((record, marker, opacity));
    }
    let (record, marker, elapsed) = app.fading_station()?;
    let opacity = 1.0 - fade_progress(elapsed);
    (opacity > 0.0).then_some((record, marker, opacity))
}

pub fn render_tooltip(app: &App, f: &mut Frame<'_>, map_area: Rect) {
    let Some((record, marker, opacity)) = tooltip_subject(app) else {
        return;
    };

    let anchor = anchor_cell(marker, &app.viewport, map_area);
    let rect = tooltip_rect(anchor, map_area);

    let border = if opacity < 1.0 {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let lines = tooltip_lines(record, &app.config.logo_dir, &app.config.default_logo);
    f.render_widget(Clear, rect);
    f.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).border_style(border)),
        rect,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::domain::StationClass;

    #[test]
    fn thousands_separator_matches_the_expected_format() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(group_thousands(987_654_321), "987,654,321");
    }

    #[test]
    fn empty_logo_falls_back_to_the_default_asset() {
        assert_eq!(
            resolve_logo("", "station_logos/a-default.gif"),
            "station_logos/a-default.gif"
        );
        assert_eq!(
            resolve_logo("kqed.png", "station_logos/a-default.gif"),
            "kqed.png"
        );
    }

    fn marker_at(x: f64, y: f64) -> Marker {
        Marker {
            station: 0,
            x,
            y,
            class: StationClass::Participant,
            radius_from: 0.0,
            radius_target: 10.0,
            delay_ms: 0.0,
            hidden: false,
        }
    }

    #[test]
    fn anchor_scales_canvas_coordinates_into_the_area() {
        let area = Rect::new(10, 5, 101, 41);
        let viewport = Viewport::new(1200.0, 900.0);
        let (ax, ay) = anchor_cell(&marker_at(600.0, 450.0), &viewport, area);
        assert_eq!(ax, 60);
        assert_eq!(ay, 25);
    }

    #[test]
    fn anchor_follows_the_zoomed_window() {
        let area = Rect::new(0, 0, 101, 41);
        let mut viewport = Viewport::new(1200.0, 900.0);
        viewport.zoom_in();
        // The canvas center stays centered regardless of zoom.
        let (ax, ay) = anchor_cell(&marker_at(600.0, 450.0), &viewport, area);
        assert_eq!(ax, 50);
        assert_eq!(ay, 20);
        // A marker outside the window clamps to the nearest edge.
        let (edge_x, _) = anchor_cell(&marker_at(0.0, 450.0), &viewport, area);
        assert_eq!(edge_x, 0);
    }

    #[test]
    fn cleared_focus_keeps_a_dimmed_subject_while_fading() {
        let mut app = App::new(AppConfig::from_env());
        app.ingest_stations(vec![StationRecord {
            name: "KUOW".to_string(),
            logo: String::new(),
            longitude: -122.3,
            latitude: 47.6,
            cume: 400_000,
            tsr: 12.0,
            newscasts: 4,
        }]);
        app.focus(0);
        app.clear_focus();
        let (record, _, opacity) = tooltip_subject(&app).expect("fade just started");
        assert_eq!(record.name, "KUOW");
        assert!(opacity <= 1.0 && opacity > 0.0);
    }

    #[test]
    fn default_placement_sits_right_of_and_below_the_anchor() {
        let area = Rect::new(0, 0, 120, 40);
        let rect = tooltip_rect((20, 10), area);
        assert_eq!(rect.x, 22);
        assert_eq!(rect.y, 11);
    }

    #[test]
    fn placement_flips_left_at_the_right_edge() {
        let area = Rect::new(0, 0, 120, 40);
        let rect = tooltip_rect((110, 10), area);
        assert!(rect.x + rect.width <= area.right());
        assert!(rect.x < 110);
    }

    #[test]
    fn placement_flips_up_at_the_bottom_edge() {
        let area = Rect::new(0, 0, 120, 40);
        let rect = tooltip_rect((20, 38), area);
        assert!(rect.y + rect.height <= area.bottom());
        assert!(rect.y < 38);
    }

    #[test]
    fn tooltip_never_leaves_the_area() {
        let area = Rect::new(2, 1, 50, 12);
        for &anchor in &[(2u16, 1u16), (51, 12), (2, 12), (51, 1)] {
            let rect = tooltip_rect(anchor, area);
            assert!(rect.x >= area.left());
            assert!(rect.y >= area.top());
            assert!(rect.x + rect.width <= area.right());
            assert!(rect.y + rect.height <= area.bottom());
        }
    }
}
