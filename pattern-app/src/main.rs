// main.rs - Pattern grid visualization app
// Drives the pattern-core animators; all algorithmic logic lives there.

use std::time::{Duration, Instant};

use eframe::egui;
use egui::Color32;
use pattern_core::grid::{DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_SPEED_MS};
use pattern_core::{Animator, Grid, init_grid, step_grid};

mod ui;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    log::info!("starting pattern grid visualization");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 1000.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Pattern Grid Visualization",
        options,
        Box::new(|_cc| Box::new(PatternApp::default())),
    )
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Sweep,
    PhaseScript,
}

pub struct PatternApp {
    pub mode: Mode,
    pub animator: Animator,

    // Cached sweep grid for rendering and paused-state editing
    pub grid: Grid,
    pub pending_rows: usize,
    pub pending_cols: usize,

    pub last_update: Instant,
    pub head_color: Color32,
    pub tail_color: Color32,
}

impl Default for PatternApp {
    fn default() -> Self {
        Self {
            mode: Mode::Sweep,
            animator: Animator::sweep(DEFAULT_ROWS, DEFAULT_COLS, DEFAULT_SPEED_MS),
            grid: init_grid(DEFAULT_ROWS, DEFAULT_COLS),
            pending_rows: DEFAULT_ROWS,
            pending_cols: DEFAULT_COLS,
            last_update: Instant::now(),
            head_color: Color32::from_rgb(0, 220, 120),
            tail_color: Color32::from_rgb(0, 60, 90),
        }
    }
}

impl PatternApp {
    pub fn switch_mode(&mut self, mode: Mode) {
        if self.mode == mode {
            return;
        }
        log::info!(
            "switching to {} mode",
            match mode {
                Mode::Sweep => "sweep",
                Mode::PhaseScript => "phase script",
            }
        );
        self.mode = mode;
        self.animator = match mode {
            Mode::Sweep => {
                self.grid = init_grid(self.pending_rows, self.pending_cols);
                Animator::sweep(self.pending_rows, self.pending_cols, DEFAULT_SPEED_MS)
            }
            Mode::PhaseScript => Animator::phase_script(),
        };
        self.last_update = Instant::now();
    }

    /// Advances the animation when its per-step interval has elapsed.
    pub fn advance_if_due(&mut self) {
        if !self.animator.is_running() {
            return;
        }
        let interval = Duration::from_millis(self.animator.speed_ms());
        if self.last_update.elapsed() < interval {
            return;
        }
        if self.animator.advance() {
            if let Animator::Sweep(mgr) = &self.animator {
                self.grid = step_grid(&self.grid, mgr.current_tick());
            }
        } else {
            // Scripted playback pauses itself at the final step
            self.animator.set_running(false);
        }
        self.last_update = Instant::now();
    }

    pub fn reset(&mut self) {
        log::debug!("reset requested");
        self.animator.reset();
        if let Animator::Sweep(mgr) = &self.animator {
            self.grid = init_grid(mgr.config().rows, mgr.config().cols);
        }
    }

    pub fn apply_grid_size(&mut self) {
        if let Animator::Sweep(mgr) = &mut self.animator {
            mgr.set_grid_size(self.pending_rows, self.pending_cols);
            self.grid = init_grid(self.pending_rows, self.pending_cols);
        }
    }

    /// Toggles a cell while the sweep is paused. The next step recomputes
    /// from scratch, so edits only persist until playback resumes.
    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        let Animator::Sweep(mgr) = &self.animator else {
            return;
        };
        if mgr.config().is_running {
            return;
        }
        if let Some(cell) = self.grid.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = if *cell == 0 {
                mgr.current_tick() + 1
            } else {
                0
            };
        }
    }
}
