//! Chart export to SVG
//!
//! Same two views as the terminal, drawn with plotters. The surface uses
//! the terminal camera so both renderings agree.

use crate::camera::{axis_edges, colour_position, coolwarm, surface_facets, Camera};
use crate::ui::finite_span;
use effect_core::{HitRateSweep, ProbabilityGrid};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;

const LINE_SIZE: (u32, u32) = (800, 600);
const SURFACE_SIZE: (u32, u32) = (1000, 700);
const COLOUR_BAR_WIDTH: u32 = 120;
const COLOUR_BAR_BANDS: usize = 64;

/// Chart export error
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Unsupported output format '{0}', expected .svg")]
    UnsupportedFormat(String),
    #[error("Failed to draw chart: {0}")]
    Drawing(String),
}

fn check_svg(path: &Path) -> Result<(), ExportError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("svg") => Ok(()),
        other => Err(ExportError::UnsupportedFormat(
            other.unwrap_or_default().to_string(),
        )),
    }
}

/// Write the hit-rate line chart (percent scale)
pub fn export_line(sweep: &HitRateSweep, title: &str, path: &Path) -> Result<(), ExportError> {
    check_svg(path)?;
    let root = SVGBackend::new(path, LINE_SIZE).into_drawing_area();
    draw_line(&root, sweep, title).map_err(|e| ExportError::Drawing(e.to_string()))?;
    tracing::info!(path = %path.display(), "exported line chart");
    Ok(())
}

/// Write the probability surface (fractional scale) with a colour bar
pub fn export_surface(
    grid: &ProbabilityGrid,
    camera: &Camera,
    title: &str,
    path: &Path,
) -> Result<(), ExportError> {
    check_svg(path)?;
    let root = SVGBackend::new(path, SURFACE_SIZE).into_drawing_area();
    draw_surface(&root, grid, camera, title).map_err(|e| ExportError::Drawing(e.to_string()))?;
    tracing::info!(path = %path.display(), "exported surface chart");
    Ok(())
}

fn draw_line<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    sweep: &HitRateSweep,
    title: &str,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    // Overflowed samples cannot be placed on a chart
    let points: Vec<(f64, f64)> = sweep
        .percent_points()
        .into_iter()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect();
    let (x_lo, x_hi) = finite_span(points.iter().map(|p| p.0), (0.0, 150.0));
    let (y_lo, y_hi) = finite_span(points.iter().map(|p| p.1), (0.0, 100.0));
    let y_lo = y_lo.min(0.0);
    let y_hi = y_hi.max(100.0);

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;

    chart
        .configure_mesh()
        .x_desc("Hitrate (%)")
        .y_desc("Probability (%)")
        .draw()?;

    chart.draw_series(LineSeries::new(points, &BLUE))?;

    root.present()?;
    Ok(())
}

fn draw_surface<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    grid: &ProbabilityGrid,
    camera: &Camera,
    title: &str,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;
    let (plot_area, bar_area) =
        root.split_horizontally((SURFACE_SIZE.0 - COLOUR_BAR_WIDTH) as i32);

    let bounds = grid.probability_bounds();
    let facets = surface_facets(grid, camera);

    let mut chart = ChartBuilder::on(&plot_area)
        .caption(title, ("sans-serif", 18))
        .margin(20)
        .build_cartesian_2d(-0.9f64..0.9f64, -0.9f64..0.9f64)?;

    chart.draw_series(facets.iter().map(|facet| {
        let (r, g, b) = coolwarm(colour_position(facet.value, bounds));
        Polygon::new(facet.corners.to_vec(), RGBColor(r, g, b).filled())
    }))?;

    let (hr_lo, hr_hi) = grid.hit_rate_bounds();
    let (er_lo, er_hi) = grid.resistance_bounds();
    let labels = [
        format!("Hitrate {:.2}", hr_hi),
        format!("Enemy Effect Res {:.2}", er_hi),
        format!("Probability {:.2}", bounds.1),
    ];
    for ((from, to), label) in axis_edges(camera).into_iter().zip(labels) {
        chart.draw_series(std::iter::once(PathElement::new(vec![from, to], BLACK)))?;
        chart.draw_series(std::iter::once(Text::new(label, to, ("sans-serif", 14))))?;
    }
    let (origin, _) = axis_edges(camera)[0];
    chart.draw_series(std::iter::once(Text::new(
        format!("({:.2}, {:.2})", hr_lo, er_lo),
        origin,
        ("sans-serif", 12),
    )))?;

    draw_colour_bar(&bar_area, bounds)?;

    root.present()?;
    Ok(())
}

fn draw_colour_bar<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    (lo, hi): (f64, f64),
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let (lo, hi) = finite_span([lo, hi].into_iter(), (0.0, 1.0));

    let mut bar = ChartBuilder::on(area)
        .margin_top(60)
        .margin_bottom(60)
        .margin_right(10)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0f64..1.0f64, lo..hi)?;

    bar.configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(0)
        .y_labels(6)
        .y_label_formatter(&|v: &f64| format!("{:.2}", v))
        .draw()?;

    let band = (hi - lo) / COLOUR_BAR_BANDS as f64;
    bar.draw_series((0..COLOUR_BAR_BANDS).map(|k| {
        let y0 = lo + band * k as f64;
        let y1 = y0 + band;
        let (r, g, b) = coolwarm((k as f64 + 0.5) / COLOUR_BAR_BANDS as f64);
        Rectangle::new([(0.0, y0), (1.0, y1)], RGBColor(r, g, b).filled())
    }))?;

    Ok(())
}
