use crate::app::App;
use crate::domain::{FilterMode, MetricMode, StationClass};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

/// Fixed hue fills used in TSR mode, taken straight from the dataset's
/// published palette.
const TSR_PARTICIPANT: Color = Color::Rgb(115, 229, 76);
const TSR_NON_PARTICIPANT: Color = Color::Rgb(76, 166, 229);

const BOUNDARY: Color = Color::DarkGray;
const NEUTRAL_DOT: Color = Color::Gray;
const PARTICIPANT_DOT: Color = Color::Green;
const ACTIVE_DOT: Color = Color::Yellow;

/// Marker fill for the current metric/filter combination. TSR mode uses
/// the two fixed hues; cume mode delegates to the filter styling.
pub fn marker_color(
    metric: MetricMode,
    filter: FilterMode,
    class: StationClass,
    active: bool,
) -> Color {
    if active {
        return ACTIVE_DOT;
    }
    match metric {
        MetricMode::Tsr => match class {
            StationClass::Participant => TSR_PARTICIPANT,
            StationClass::NonParticipant => TSR_NON_PARTICIPANT,
        },
        MetricMode::Cume => match filter {
            FilterMode::All => NEUTRAL_DOT,
            _ => match class {
                StationClass::Participant => PARTICIPANT_DOT,
                StationClass::NonParticipant => NEUTRAL_DOT,
            },
        },
    }
}

pub fn render_map_canvas(app: &App, f: &mut Frame<'_>, area: Rect) {
    let height = app.config.height;
    let elapsed = app.elapsed_ms();

    let zoom = app.viewport.zoom();
    let title = if (zoom - 1.0).abs() < f64::EPSILON {
        format!(" United States ({} sizing) ", app.metric_mode.label())
    } else {
        format!(
            " United States ({} sizing, {zoom:.1}x) ",
            app.metric_mode.label()
        )
    };

    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .x_bounds(app.viewport.x_bounds())
        .y_bounds(app.viewport.y_bounds())
        .paint(|ctx| {
            // Static base map: state outlines as projected segments.
            for outline in &app.outlines {
                for ring in &outline.rings {
                    for pair in ring.windows(2) {
                        let (x1, y1) = app.projection.project(pair[0].0, pair[0].1);
                        let (x2, y2) = app.projection.project(pair[1].0, pair[1].1);
                        ctx.draw(&CanvasLine {
                            x1,
                            y1: height - y1,
                            x2,
                            y2: height - y2,
                            color: BOUNDARY,
                        });
                    }
                }
            }

            ctx.layer();

            for marker in &app.markers {
                if marker.hidden || !app.filter_mode.shows(marker.class) {
                    continue;
                }
                let radius = marker.radius_at(elapsed);
                if radius <= 0.0 {
                    continue;
                }
                let active = app.focused == Some(marker.station);
                ctx.draw(&Circle {
                    x: marker.x,
                    y: height - marker.y,
                    radius,
                    color: marker_color(app.metric_mode, app.filter_mode, marker.class, active),
                });
                if active {
                    ctx.draw(&Circle {
                        x: marker.x,
                        y: height - marker.y,
                        radius: radius + 4.0,
                        color: ACTIVE_DOT,
                    });
                }
            }
        });

    f.render_widget(canvas, area);
}
