//! Application state

use crate::camera::Camera;
use crossterm::event::{KeyCode, KeyModifiers};
use effect_core::{ExplorerConfig, HitRateSweep, ProbabilityGrid};

/// Camera rotation per key press, in degrees
const AZIMUTH_STEP: f64 = 10.0;
const ELEVATION_STEP: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Line,
    Surface,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Line, Tab::Surface, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Line => "Hitrate",
            Tab::Surface => "Surface",
            Tab::Help => "Help",
        }
    }
}

/// Adjustable inputs, one list per view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    LineBaseEffect,
    EnemyResistance,
    DebuffResistance,
    HitRateStart,
    HitRateStop,
    SurfaceBaseEffect,
    MinEnemyRes,
    MaxEnemyRes,
}

impl Param {
    pub fn for_tab(tab: Tab) -> &'static [Param] {
        match tab {
            Tab::Line => &[
                Param::LineBaseEffect,
                Param::EnemyResistance,
                Param::DebuffResistance,
                Param::HitRateStart,
                Param::HitRateStop,
            ],
            Tab::Surface => &[
                Param::SurfaceBaseEffect,
                Param::MinEnemyRes,
                Param::MaxEnemyRes,
            ],
            Tab::Help => &[],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Param::LineBaseEffect | Param::SurfaceBaseEffect => "Base effect",
            Param::EnemyResistance => "Enemy ER",
            Param::DebuffResistance => "Debuff res",
            Param::HitRateStart => "Hitrate from",
            Param::HitRateStop => "Hitrate to",
            Param::MinEnemyRes => "Enemy ER min",
            Param::MaxEnemyRes => "Enemy ER max",
        }
    }
}

/// What the event loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct App {
    pub current_tab: Tab,
    /// Locked to one view (no tab switching)
    pub single_view: bool,
    pub config: ExplorerConfig,
    defaults: ExplorerConfig,
    pub camera: Camera,
    pub selected_param: usize,
    pub sweep: HitRateSweep,
    pub grid: ProbabilityGrid,
}

impl App {
    /// Tabbed explorer starting on the line view
    pub fn new(config: ExplorerConfig) -> Self {
        let sweep = HitRateSweep::sample(&config.line.sweep_params());
        let grid = ProbabilityGrid::sample(&config.surface.grid_params());
        let camera = Camera::from_config(&config.view);

        App {
            current_tab: Tab::Line,
            single_view: false,
            defaults: config.clone(),
            config,
            camera,
            selected_param: 0,
            sweep,
            grid,
        }
    }

    /// A single view with no tab bar navigation
    pub fn single(tab: Tab, config: ExplorerConfig) -> Self {
        let mut app = App::new(config);
        app.current_tab = tab;
        app.single_view = true;
        app
    }

    pub fn params(&self) -> &'static [Param] {
        Param::for_tab(self.current_tab)
    }

    pub fn param_value(&self, param: Param) -> f64 {
        match param {
            Param::LineBaseEffect => self.config.line.base_effect,
            Param::EnemyResistance => self.config.line.enemy_resistance,
            Param::DebuffResistance => self.config.line.debuff_resistance,
            Param::HitRateStart => self.config.line.hr_start,
            Param::HitRateStop => self.config.line.hr_stop,
            Param::SurfaceBaseEffect => self.config.surface.base_effect,
            Param::MinEnemyRes => self.config.surface.min_enemy_res,
            Param::MaxEnemyRes => self.config.surface.max_enemy_res,
        }
    }

    fn param_slot(&mut self, param: Param) -> &mut f64 {
        match param {
            Param::LineBaseEffect => &mut self.config.line.base_effect,
            Param::EnemyResistance => &mut self.config.line.enemy_resistance,
            Param::DebuffResistance => &mut self.config.line.debuff_resistance,
            Param::HitRateStart => &mut self.config.line.hr_start,
            Param::HitRateStop => &mut self.config.line.hr_stop,
            Param::SurfaceBaseEffect => &mut self.config.surface.base_effect,
            Param::MinEnemyRes => &mut self.config.surface.min_enemy_res,
            Param::MaxEnemyRes => &mut self.config.surface.max_enemy_res,
        }
    }

    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Control {
        match (code, modifiers) {
            (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => return Control::Quit,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => return Control::Quit,
            (KeyCode::Tab, _) => self.next_tab(),
            (KeyCode::BackTab, _) => self.prev_tab(),
            (KeyCode::Char('1'), _) => self.set_tab(0),
            (KeyCode::Char('2'), _) => self.set_tab(1),
            (KeyCode::Char('3'), _) | (KeyCode::Char('?'), _) => self.set_tab(2),
            (KeyCode::Up, _) | (KeyCode::Char('k'), _) => self.on_up(),
            (KeyCode::Down, _) | (KeyCode::Char('j'), _) => self.on_down(),
            (KeyCode::Right, _) | (KeyCode::Char('+'), _) | (KeyCode::Char('='), _) => {
                self.adjust(1.0)
            }
            (KeyCode::Left, _) | (KeyCode::Char('-'), _) => self.adjust(-1.0),
            (KeyCode::Char('['), _) => self.rotate(-AZIMUTH_STEP, 0.0),
            (KeyCode::Char(']'), _) => self.rotate(AZIMUTH_STEP, 0.0),
            (KeyCode::Char('{'), _) => self.rotate(0.0, -ELEVATION_STEP),
            (KeyCode::Char('}'), _) => self.rotate(0.0, ELEVATION_STEP),
            (KeyCode::Char('r'), _) => self.reset(),
            _ => {}
        }
        Control::Continue
    }

    pub fn next_tab(&mut self) {
        if self.single_view {
            return;
        }
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        self.current_tab = tabs[(current_idx + 1) % tabs.len()];
        self.selected_param = 0;
    }

    pub fn prev_tab(&mut self) {
        if self.single_view {
            return;
        }
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let prev_idx = if current_idx == 0 {
            tabs.len() - 1
        } else {
            current_idx - 1
        };
        self.current_tab = tabs[prev_idx];
        self.selected_param = 0;
    }

    pub fn set_tab(&mut self, index: usize) {
        if self.single_view {
            return;
        }
        let tabs = Tab::all();
        if index < tabs.len() {
            self.current_tab = tabs[index];
            self.selected_param = 0;
        }
    }

    pub fn on_up(&mut self) {
        if self.selected_param > 0 {
            self.selected_param -= 1;
        }
    }

    pub fn on_down(&mut self) {
        if self.selected_param + 1 < self.params().len() {
            self.selected_param += 1;
        }
    }

    /// Step the selected parameter by `direction * param_step` and resample
    pub fn adjust(&mut self, direction: f64) {
        let Some(&param) = self.params().get(self.selected_param) else {
            return;
        };
        let step = self.config.view.param_step * direction;
        let slot = self.param_slot(param);
        // Round to the step grid so repeated presses don't drift
        *slot = ((*slot + step) * 1e6).round() / 1e6;
        tracing::debug!(param = param.name(), value = *slot, "parameter adjusted");
        self.refresh();
    }

    pub fn rotate(&mut self, d_azimuth: f64, d_elevation: f64) {
        if self.current_tab == Tab::Surface {
            self.camera.rotate(d_azimuth, d_elevation);
        }
    }

    /// Restore the parameters and camera the app was started with
    pub fn reset(&mut self) {
        self.config = self.defaults.clone();
        self.camera = Camera::from_config(&self.config.view);
        self.resample_all();
    }

    fn resample_all(&mut self) {
        self.sweep = HitRateSweep::sample(&self.config.line.sweep_params());
        self.grid = ProbabilityGrid::sample(&self.config.surface.grid_params());
    }

    fn refresh(&mut self) {
        match self.current_tab {
            Tab::Line => self.sweep = HitRateSweep::sample(&self.config.line.sweep_params()),
            Tab::Surface => self.grid = ProbabilityGrid::sample(&self.config.surface.grid_params()),
            Tab::Help => self.resample_all(),
        }
    }

    /// Title of the line view, embedding its two main inputs
    pub fn line_title(&self) -> String {
        format!(
            "Probability vs Hitrate (Base EHR = {}, Enemy ER = {})",
            self.config.line.base_effect, self.config.line.enemy_resistance
        )
    }

    pub fn surface_title(&self) -> String {
        format!(
            "Probability vs Bonus Hitrate, Enemy Effect Res (Base Effect Hitrate = {})",
            self.config.surface.base_effect
        )
    }
}
