//! Help tab view

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, _app: &App, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "═══ Navigation ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        key_line("1-3", "Jump to tab (Hitrate/Surface/Help)"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("↑/k  ↓/j", "Select parameter"),
        key_line("←/-  →/+", "Decrease/increase selected parameter"),
        key_line("r", "Reset parameters and camera"),
        key_line("q / Esc / Ctrl+C", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "═══ Surface ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        key_line("[ / ]", "Rotate azimuth by 10°"),
        key_line("{ / }", "Tilt elevation by 5°"),
        Line::from(""),
        Line::from(Span::styled(
            "═══ Mechanics ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Effect chance:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  P = Base × (1 + EHR) × (1 − Enemy ER) × (1 − Debuff Res)"),
        Line::from("  Capped at 100%; no lower bound"),
        Line::from(""),
        Line::from(Span::styled(
            "Effect Hit Rate (EHR):",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  Multiplies the base chance; 100% EHR doubles it"),
        Line::from(""),
        Line::from(Span::styled(
            "Effect Resistance (ER):",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  Enemy side reduction; 100% ER is immunity"),
        Line::from("  Negative ER increases the chance"),
        Line::from(""),
        Line::from(Span::styled(
            "Surface view:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  Hitrate fixed to 0–1.5, 50×50 samples, no debuff resistance"),
        Line::from("  Probabilities shown as fractions, not percent"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help & Mechanics "));

    f.render_widget(paragraph, area);
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:20}", key),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}
