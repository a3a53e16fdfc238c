//! effect_tui - Terminal views and chart export for status effect chances

mod app;
mod camera;
mod cli;
mod export;
mod logging;
mod terminal;
mod ui;

use anyhow::{Context, Result};
use app::{App, Tab};
use camera::Camera;
use clap::Parser;
use cli::{Cli, Command, DumpCommand, ExportCommand};
use effect_core::{ExplorerConfig, HitRateSweep, ProbabilityGrid};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_dir = cli.log_dir.clone().unwrap_or_else(std::env::temp_dir);
    let _guard = logging::init(&log_dir)?;

    let mut config = match &cli.config {
        Some(path) => ExplorerConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ExplorerConfig::default(),
    };

    match cli.command.unwrap_or(Command::Explore) {
        Command::Line(args) => {
            args.apply(&mut config.line);
            config.validate()?;
            terminal::run(App::single(Tab::Line, config))?;
        }
        Command::Surface(args) => {
            args.apply(&mut config.surface);
            config.validate()?;
            terminal::run(App::single(Tab::Surface, config))?;
        }
        Command::Explore => {
            terminal::run(App::new(config))?;
        }
        Command::Export(ExportCommand::Line { out, args }) => {
            args.apply(&mut config.line);
            config.validate()?;
            let app = App::single(Tab::Line, config);
            export::export_line(&app.sweep, &app.line_title(), &out)?;
            println!("Wrote {}", out.display());
        }
        Command::Export(ExportCommand::Surface { out, args }) => {
            args.apply(&mut config.surface);
            config.validate()?;
            let app = App::single(Tab::Surface, config);
            export::export_surface(
                &app.grid,
                &Camera::from_config(&app.config.view),
                &app.surface_title(),
                &out,
            )?;
            println!("Wrote {}", out.display());
        }
        Command::Dump(DumpCommand::Line(args)) => {
            args.apply(&mut config.line);
            config.validate()?;
            let sweep = HitRateSweep::sample(&config.line.sweep_params());
            println!("{}", serde_json::to_string_pretty(&sweep)?);
        }
        Command::Dump(DumpCommand::Surface(args)) => {
            args.apply(&mut config.surface);
            config.validate()?;
            let grid = ProbabilityGrid::sample(&config.surface.grid_params());
            println!("{}", serde_json::to_string_pretty(&grid)?);
        }
    }

    Ok(())
}
