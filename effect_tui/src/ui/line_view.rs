//! Probability vs hit rate, both in percent

use super::{finite_span, param_lines, stat_line};
use crate::app::App;
use effect_core::probability::hit_rate_needed;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(50),    // Chart
            Constraint::Length(32), // Parameters
        ])
        .split(area);

    draw_chart(f, app, chunks[0]);
    draw_params(f, app, chunks[1]);
}

fn draw_chart(f: &mut Frame, app: &App, area: Rect) {
    let points = app.sweep.percent_points();

    let (x_lo, x_hi) = finite_span(points.iter().map(|p| p.0), (0.0, 150.0));
    let (y_lo, y_hi) = finite_span(points.iter().map(|p| p.1), (0.0, 100.0));
    let y_lo = y_lo.min(0.0);
    let y_hi = y_hi.max(100.0);

    let datasets = vec![Dataset::default()
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&points)];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", app.line_title())),
        )
        .x_axis(
            Axis::default()
                .title("Hitrate (%)")
                .style(Style::default().fg(Color::Gray))
                .bounds([x_lo, x_hi])
                .labels(ticks(x_lo, x_hi, 0)),
        )
        .y_axis(
            Axis::default()
                .title("Probability (%)")
                .style(Style::default().fg(Color::Gray))
                .bounds([y_lo, y_hi])
                .labels(ticks(y_lo, y_hi, 0)),
        );

    f.render_widget(chart, area);
}

fn draw_params(f: &mut Frame, app: &App, area: Rect) {
    let line = &app.config.line;
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

    let first = app.sweep.probabilities.first().copied().unwrap_or(0.0);
    let last = app.sweep.probabilities.last().copied().unwrap_or(0.0);
    lines.push(stat_line("At start", format!("{:.1}%", first * 100.0)));
    lines.push(stat_line("At end", format!("{:.1}%", last * 100.0)));

    let certain = match app.sweep.first_capped_hit_rate() {
        Some(hr) => format!("{:.0}% EHR", hr * 100.0),
        None => match hit_rate_needed(
            1.0,
            line.base_effect,
            line.enemy_resistance,
            line.debuff_resistance,
        ) {
            Some(hr) => format!("{:.0}% EHR", hr * 100.0),
            None => "never".to_string(),
        },
    };
    lines.push(stat_line("Certain at", certain));
    lines.push(stat_line("Samples", app.sweep.len().to_string()));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Parameters "));

    f.render_widget(paragraph, area);
}

/// Three evenly spaced axis labels
pub fn ticks(lo: f64, hi: f64, precision: usize) -> Vec<String> {
    let mid = (lo + hi) / 2.0;
    [lo, mid, hi]
        .iter()
        .map(|v| format!("{:.*}", precision, v))
        .collect()
}
