//! UI rendering

mod help_view;
mod line_view;
mod surface_view;

use crate::app::{App, Tab};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Keybindings footer
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);

    match app.current_tab {
        Tab::Line => line_view::draw(f, app, chunks[1]),
        Tab::Surface => surface_view::draw(f, app, chunks[1]),
        Tab::Help => help_view::draw(f, app, chunks[1]),
    }

    draw_keybindings(f, app, chunks[2]);
}

fn draw_keybindings(f: &mut Frame, app: &App, area: Rect) {
    let mut common_keys = vec![("q", "Quit")];
    if !app.single_view {
        common_keys.insert(0, ("Tab", "Next tab"));
    }

    let tab_keys: Vec<(&str, &str)> = match app.current_tab {
        Tab::Line => vec![("↑/↓", "Select"), ("←/→", "Adjust"), ("r", "Reset")],
        Tab::Surface => vec![
            ("↑/↓", "Select"),
            ("←/→", "Adjust"),
            ("[ ]", "Azimuth"),
            ("{ }", "Elevation"),
            ("r", "Reset"),
        ],
        Tab::Help => vec![],
    };

    let mut spans: Vec<Span> = Vec::new();

    for (i, (key, desc)) in tab_keys.iter().enumerate() {
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

    if !tab_keys.is_empty() {
        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
    }

    for (i, (key, desc)) in common_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::Gray),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Keys "))
        .alignment(ratatui::layout::Alignment::Center);

    f.render_widget(paragraph, area);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .filter(|t| !app.single_view || **t == app.current_tab)
        .map(|t| {
            let style = if *t == app.current_tab {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(t.name(), style))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Effect Chance Explorer "),
        )
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider("|");

    f.render_widget(tabs, area);
}

/// Parameter list for the side panel, selected entry highlighted
pub fn param_lines(app: &App) -> Vec<Line<'static>> {
    app.params()
        .iter()
        .enumerate()
        .map(|(i, param)| {
            let selected = i == app.selected_param;
            let marker = if selected { "▶ " } else { "  " };
            let value_style = if selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(vec![
                Span::styled(
                    format!("{}{:14}", marker, param.name()),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(format!("{:>7.2}", app.param_value(*param)), value_style),
            ])
        })
        .collect()
}

/// Min/max of the finite values, or `fallback` when there are none.
/// A flat range is widened by one either side.
pub fn finite_span(values: impl Iterator<Item = f64>, fallback: (f64, f64)) -> (f64, f64) {
    let (lo, hi) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if lo > hi {
        fallback
    } else if (hi - lo).abs() < f64::EPSILON {
        (lo - 1.0, hi + 1.0)
    } else {
        (lo, hi)
    }
}

pub fn stat_line(name: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:14}", name),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use effect_core::ExplorerConfig;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let backend = TestBackend::new(160, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_finite_span() {
        assert_eq!(finite_span([2.0, 2.0].into_iter(), (0.0, 1.0)), (1.0, 3.0));
        assert_eq!(finite_span(std::iter::empty(), (0.0, 1.0)), (0.0, 1.0));
        assert_eq!(
            finite_span([0.0, f64::NAN, 5.0].into_iter(), (0.0, 1.0)),
            (0.0, 5.0)
        );
        assert_eq!(
            finite_span([f64::NEG_INFINITY, 30.0, 60.0].into_iter(), (0.0, 1.0)),
            (30.0, 60.0)
        );
    }

    #[test]
    fn test_line_view_renders_title() {
        let app = App::new(ExplorerConfig::default());
        let screen = render(&app);
        assert!(screen.contains("Probability vs Hitrate (Base EHR = 0.3, Enemy ER = 0)"));
        assert!(screen.contains("Hitrate (%)"));
    }

    #[test]
    fn test_surface_view_renders_colour_bar() {
        let mut app = App::new(ExplorerConfig::default());
        app.set_tab(1);
        let screen = render(&app);
        assert!(screen.contains("Base Effect Hitrate = 0.3"));
        assert!(screen.contains("0.75"));
        assert!(screen.contains("0.18"));
    }

    #[test]
    fn test_help_view_renders_formula() {
        let mut app = App::new(ExplorerConfig::default());
        app.set_tab(2);
        let screen = render(&app);
        assert!(screen.contains("(1 + EHR)"));
    }
}
