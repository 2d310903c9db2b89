// sequence.rs - Scripted three-phase animation sequence and playback state

use crate::patterns::{
    BLUE_PATTERNS, Cell, CellColor, Membership, RED_PATTERNS, initial_cells,
};

/// Length of the precomputed sequence.
pub const TOTAL_STEPS: usize = 100;

// Phase boundaries within the sequence
const BLUE_PHASE_STEPS: usize = 30;
const RED_PHASE_STEPS: usize = 30;
const COMBINED_PHASE_STEPS: usize = 40;

// Playback speed bounds, milliseconds per step
pub const MIN_SPEED_MS: u64 = 100;
pub const MAX_SPEED_MS: u64 = 2000;
pub const DEFAULT_SEQUENCE_SPEED_MS: u64 = 500;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternStep {
    /// 1-based step number in [1, TOTAL_STEPS].
    pub step: usize,
    /// Full snapshot of all 200 cells; owns its storage, never aliased
    /// by neighboring steps.
    pub cells: Vec<Cell>,
    pub description: String,
}

/// Precomputes the full 100-step sequence once and navigates it.
/// The sequence is read-only after construction; navigation only moves
/// an index, it never recomputes history.
pub struct PatternSequencer {
    sequence: Vec<PatternStep>,
    current_step: usize,
    speed_ms: u64,
    is_playing: bool,
}

impl PatternSequencer {
    pub fn new() -> Self {
        Self {
            sequence: generate_sequence(),
            current_step: 0,
            speed_ms: DEFAULT_SEQUENCE_SPEED_MS,
            is_playing: false,
        }
    }

    pub fn sequence(&self) -> &[PatternStep] {
        &self.sequence
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn current(&self) -> &PatternStep {
        &self.sequence[self.current_step]
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Out-of-range steps are silently clamped, never rejected.
    pub fn set_current_step(&mut self, step: isize) {
        self.current_step = step.clamp(0, TOTAL_STEPS as isize - 1) as usize;
    }

    /// Advances by one step; returns false when already at the end.
    pub fn next_step(&mut self) -> bool {
        if self.current_step + 1 < self.sequence.len() {
            self.current_step += 1;
            true
        } else {
            false
        }
    }

    pub fn previous_step(&mut self) -> bool {
        if self.current_step > 0 {
            self.current_step -= 1;
            true
        } else {
            false
        }
    }

    pub fn play(&mut self) {
        self.is_playing = true;
    }

    pub fn pause(&mut self) {
        self.is_playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn speed_ms(&self) -> u64 {
        self.speed_ms
    }

    pub fn set_speed_ms(&mut self, speed: u64) {
        self.speed_ms = speed.clamp(MIN_SPEED_MS, MAX_SPEED_MS);
    }
}

impl Default for PatternSequencer {
    fn default() -> Self {
        Self::new()
    }
}

fn generate_sequence() -> Vec<PatternStep> {
    let membership = Membership::new();
    let mut cells = initial_cells();
    let mut sequence = Vec::with_capacity(TOTAL_STEPS);

    for i in 0..TOTAL_STEPS {
        // Phase-local progress is 1-based: step 1 reveals nothing yet,
        // the last step of each phase reveals the full pattern.
        let description = if i < BLUE_PHASE_STEPS {
            animate_blue(&mut cells, i + 1, BLUE_PHASE_STEPS);
            format!("Blue Pattern Phase - Step {}", i + 1)
        } else if i < BLUE_PHASE_STEPS + RED_PHASE_STEPS {
            animate_red(&mut cells, i - BLUE_PHASE_STEPS + 1, RED_PHASE_STEPS);
            format!("Red Pattern Phase - Step {}", i + 1)
        } else {
            let progress = i - BLUE_PHASE_STEPS - RED_PHASE_STEPS + 1;
            animate_combined(&mut cells, progress, COMBINED_PHASE_STEPS, &membership);
            format!("Combined Zigzag - Step {}", i + 1)
        };

        sequence.push(PatternStep {
            step: i + 1,
            cells: cells.clone(),
            description,
        });
    }

    log::debug!("generated {} pattern steps", sequence.len());
    sequence
}

/// Sets the first `count` cells of `pattern` active with `color`.
/// Indices outside [1, 200] are no-ops.
fn reveal(cells: &mut [Cell], pattern: &[u16], count: usize, color: CellColor) {
    for &number in pattern.iter().take(count) {
        let index = match (number as usize).checked_sub(1) {
            Some(i) => i,
            None => continue,
        };
        if let Some(cell) = cells.get_mut(index) {
            cell.is_active = true;
            cell.color = color;
        }
    }
}

fn clear_active(cells: &mut [Cell]) {
    for cell in cells.iter_mut() {
        cell.is_active = false;
    }
}

fn animate_blue(cells: &mut [Cell], progress: usize, max: usize) {
    let pattern = BLUE_PATTERNS[0];
    let active_count = pattern.len() * progress / max;
    clear_active(cells);
    reveal(cells, pattern, active_count, CellColor::Blue);
}

fn animate_red(cells: &mut [Cell], progress: usize, max: usize) {
    let pattern = RED_PATTERNS[0];
    let active_count = pattern.len() * progress / max;
    clear_active(cells);
    reveal(cells, pattern, active_count, CellColor::Red);
}

fn animate_combined(cells: &mut [Cell], progress: usize, max: usize, membership: &Membership) {
    clear_active(cells);
    // Green landmarks keep their color; everything else goes dark
    // before this step's reveal is painted on
    for cell in cells.iter_mut() {
        if !membership.is_green(cell.number) {
            cell.color = CellColor::Black;
        }
    }

    let blue = BLUE_PATTERNS[1];
    let red = RED_PATTERNS[1];
    let total = blue.len().max(red.len());
    let current_pos = progress * total / max;

    // Positions are inclusive; on the final step current_pos lands one
    // past the end and the overshoot is ignored
    reveal(cells, blue, current_pos + 1, CellColor::Blue);
    // Red lags at half the blue rate for the staggered zigzag look
    reveal(cells, red, current_pos / 2 + 1, CellColor::Red);
}
