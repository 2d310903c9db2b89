// lib.rs - Pure grid animation cores: procedural sweep and scripted phases

pub mod grid;
pub mod patterns;
pub mod sequence;

pub use grid::{Grid, SweepConfig, SweepManager, init_grid, step_grid};
pub use patterns::{Cell, CellColor, TOTAL_CELLS, initial_cells};
pub use sequence::{PatternSequencer, PatternStep, TOTAL_STEPS};

/// The two animation strategies behind one surface. `Sweep` is the
/// procedural tick-driven snake; `PhaseScript` replays the precomputed
/// 100-step colored sequence.
pub enum Animator {
    Sweep(SweepManager),
    PhaseScript(PatternSequencer),
}

impl Animator {
    pub fn sweep(rows: usize, cols: usize, speed: u64) -> Self {
        Self::Sweep(SweepManager::new(rows, cols, speed))
    }

    pub fn phase_script() -> Self {
        Self::PhaseScript(PatternSequencer::new())
    }

    pub fn is_running(&self) -> bool {
        match self {
            Self::Sweep(mgr) => mgr.config().is_running,
            Self::PhaseScript(seq) => seq.is_playing(),
        }
    }

    pub fn set_running(&mut self, running: bool) {
        match self {
            Self::Sweep(mgr) => mgr.set_running(running),
            Self::PhaseScript(seq) => {
                if running {
                    seq.play();
                } else {
                    seq.pause();
                }
            }
        }
    }

    pub fn toggle_running(&mut self) {
        let running = self.is_running();
        self.set_running(!running);
    }

    /// Advances one tick or one step; returns false when a scripted
    /// playback has reached its final step.
    pub fn advance(&mut self) -> bool {
        match self {
            Self::Sweep(mgr) => {
                mgr.next_tick();
                true
            }
            Self::PhaseScript(seq) => seq.next_step(),
        }
    }

    pub fn reset(&mut self) {
        match self {
            Self::Sweep(mgr) => mgr.reset(),
            Self::PhaseScript(seq) => {
                seq.pause();
                seq.set_current_step(0);
            }
        }
    }

    pub fn speed_ms(&self) -> u64 {
        match self {
            Self::Sweep(mgr) => mgr.config().speed,
            Self::PhaseScript(seq) => seq.speed_ms(),
        }
    }

    pub fn set_speed_ms(&mut self, speed: u64) {
        match self {
            Self::Sweep(mgr) => mgr.set_speed(speed),
            Self::PhaseScript(seq) => seq.set_speed_ms(speed),
        }
    }
}
