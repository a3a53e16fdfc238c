//! Probability surface over hit rate and enemy resistance
//!
//! Values stay fractional here (0..1), unlike the percent scale of the
//! hit-rate view.

use super::{param_lines, stat_line};
use crate::app::App;
use crate::camera::{axis_edges, colour_position, coolwarm, surface_facets};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders, Paragraph,
    },
    Frame,
};

/// Canvas extent; a projected unit cube fits within +-0.87
const EXTENT: f64 = 0.9;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Surface
            Constraint::Length(12), // Colour bar
            Constraint::Length(32), // Parameters
        ])
        .split(area);

    draw_surface(f, app, chunks[0]);
    draw_colour_bar(f, app, chunks[1]);
    draw_params(f, app, chunks[2]);
}

fn rgb(t: f64) -> Color {
    let (r, g, b) = coolwarm(t);
    Color::Rgb(r, g, b)
}

fn draw_surface(f: &mut Frame, app: &App, area: Rect) {
    let facets = surface_facets(&app.grid, &app.camera);
    let bounds = app.grid.probability_bounds();
    let axes = axis_edges(&app.camera);
    let (hr_lo, hr_hi) = app.grid.hit_rate_bounds();
    let (er_lo, er_hi) = app.grid.resistance_bounds();
    let labels = [
        format!("Hitrate {:.2}", hr_hi),
        format!("Enemy Effect Res {:.2}", er_hi),
        format!("Probability {:.2}", bounds.1),
    ];
    let origin_label = format!("({:.2}, {:.2})", hr_lo, er_lo);

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", app.surface_title())),
        )
        .marker(Marker::Braille)
        .x_bounds([-EXTENT, EXTENT])
        .y_bounds([-EXTENT, EXTENT])
        .paint(|ctx| {
            for ((x1, y1), (x2, y2)) in axes.iter() {
                ctx.draw(&CanvasLine::new(*x1, *y1, *x2, *y2, Color::DarkGray));
            }
            ctx.layer();

            for facet in &facets {
                let color = rgb(colour_position(facet.value, bounds));
                for k in 0..4 {
                    let (x1, y1) = facet.corners[k];
                    let (x2, y2) = facet.corners[(k + 1) % 4];
                    ctx.draw(&CanvasLine::new(x1, y1, x2, y2, color));
                }
            }
            ctx.layer();

            for (((_, _), (x, y)), label) in axes.iter().zip(labels.iter()) {
                ctx.print(*x, *y, Span::styled(label.clone(), Style::default().fg(Color::Gray)));
            }
            let ((ox, oy), _) = axes[0];
            ctx.print(
                ox,
                oy,
                Span::styled(origin_label.clone(), Style::default().fg(Color::DarkGray)),
            );
        });

    f.render_widget(canvas, area);
}

fn draw_colour_bar(f: &mut Frame, app: &App, area: Rect) {
    let (lo, hi) = app.grid.probability_bounds();
    let rows = area.height.saturating_sub(2) as usize;

    let lines: Vec<Line> = (0..rows)
        .map(|row| {
            let t = if rows > 1 {
                1.0 - row as f64 / (rows - 1) as f64
            } else {
                0.5
            };
            let label = if row == 0 || row + 1 == rows || row == rows / 2 {
                format!(" {:.2}", lo + t * (hi - lo))
            } else {
                String::new()
            };
            Line::from(vec![
                Span::styled("███", Style::default().fg(rgb(t))),
                Span::styled(label, Style::default().fg(Color::White)),
            ])
        })
        .collect();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" P "));

    f.render_widget(paragraph, area);
}

fn draw_params(f: &mut Frame, app: &App, area: Rect) {
    let (lo, hi) = app.grid.probability_bounds();
    let capped = app.grid.probabilities.iter().filter(|p| **p >= 1.0).count();
    let total = app.grid.probabilities.len();

    let mut lines = vec![Line::from(Span::styled(
        "Inputs",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))];
    lines.extend(param_lines(app));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Readout",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )));
    lines.push(stat_line("Lowest", format!("{:.2}", lo)));
    lines.push(stat_line("Highest", format!("{:.2}", hi)));
    lines.push(stat_line("Capped cells", format!("{}/{}", capped, total)));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Camera",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )));
    lines.push(stat_line("Elevation", format!("{:.0}°", app.camera.elevation)));
    lines.push(stat_line("Azimuth", format!("{:.0}°", app.camera.azimuth)));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Parameters "));

    f.render_widget(paragraph, area);
}
