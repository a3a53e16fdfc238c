//! Command line interface

use clap::{Args, Parser, Subcommand};
use effect_core::config::{LineConfig, SurfaceConfig};
use std::path::PathBuf;

/// Explore status effect landing chances
#[derive(Parser, Debug)]
#[command(name = "effect_tui")]
#[command(
    about = "Probability of a status effect landing vs hit rate and resistance",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// TOML file with defaults for every view
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory for effect_tui.log (defaults to the system temp dir)
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Probability (%) vs hit rate (%) line view
    Line(LineArgs),

    /// Probability surface over hit rate and enemy resistance
    Surface(SurfaceArgs),

    /// Tabbed explorer with both views (default)
    Explore,

    /// Write a chart to an SVG file
    #[command(subcommand)]
    Export(ExportCommand),

    /// Print sampled arrays as JSON
    #[command(subcommand)]
    Dump(DumpCommand),
}

#[derive(Subcommand, Debug)]
pub enum ExportCommand {
    Line {
        /// Output path (.svg)
        #[arg(long)]
        out: PathBuf,
        #[command(flatten)]
        args: LineArgs,
    },
    Surface {
        /// Output path (.svg)
        #[arg(long)]
        out: PathBuf,
        #[command(flatten)]
        args: SurfaceArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum DumpCommand {
    Line(LineArgs),
    Surface(SurfaceArgs),
}

/// Overrides for the line view
#[derive(Args, Debug, Clone, Default)]
pub struct LineArgs {
    /// Base effect chance (0.3 = 30%)
    #[arg(long, allow_negative_numbers = true)]
    pub base_effect: Option<f64>,

    /// Enemy effect resistance
    #[arg(long, allow_negative_numbers = true)]
    pub enemy_res: Option<f64>,

    /// Debuff resistance
    #[arg(long, allow_negative_numbers = true)]
    pub debuff_res: Option<f64>,

    /// First hit rate of the sweep
    #[arg(long, allow_negative_numbers = true)]
    pub hr_start: Option<f64>,

    /// Last hit rate of the sweep
    #[arg(long, allow_negative_numbers = true)]
    pub hr_stop: Option<f64>,
}

impl LineArgs {
    pub fn apply(&self, line: &mut LineConfig) {
        if let Some(v) = self.base_effect {
            line.base_effect = v;
        }
        if let Some(v) = self.enemy_res {
            line.enemy_resistance = v;
        }
        if let Some(v) = self.debuff_res {
            line.debuff_resistance = v;
        }
        if let Some(v) = self.hr_start {
            line.hr_start = v;
        }
        if let Some(v) = self.hr_stop {
            line.hr_stop = v;
        }
    }
}

/// Overrides for the surface view
#[derive(Args, Debug, Clone, Default)]
pub struct SurfaceArgs {
    /// Base effect chance (0.3 = 30%)
    #[arg(long, allow_negative_numbers = true)]
    pub base_effect: Option<f64>,

    /// Lowest enemy effect resistance
    #[arg(long, allow_negative_numbers = true)]
    pub min_res: Option<f64>,

    /// Highest enemy effect resistance
    #[arg(long, allow_negative_numbers = true)]
    pub max_res: Option<f64>,
}

impl SurfaceArgs {
    pub fn apply(&self, surface: &mut SurfaceConfig) {
        if let Some(v) = self.base_effect {
            surface.base_effect = v;
        }
        if let Some(v) = self.min_res {
            surface.min_enemy_res = v;
        }
        if let Some(v) = self.max_res {
            surface.max_enemy_res = v;
        }
    }
}
