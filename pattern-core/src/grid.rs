// grid.rs - Snake sweep animation over a rows x cols grid

// Default grid tuning used by the sweep manager
pub const DEFAULT_ROWS: usize = 20;
pub const DEFAULT_COLS: usize = 10;
pub const DEFAULT_SPEED_MS: u64 = 100;

// Minimum snake length regardless of grid size
const MIN_SNAKE_LENGTH: usize = 5;

/// A cell value of 0 means "off"; a positive value is the tick at which
/// the snake last touched the cell (used as a color seed by the UI).
pub type Grid = Vec<Vec<u64>>;

/// Creates a rows x cols grid with every cell off.
pub fn init_grid(rows: usize, cols: usize) -> Grid {
    vec![vec![0; cols]; rows]
}

/// Computes the snake's state at logical time `tick`.
///
/// Pure function of the grid dimensions and the tick: the result is
/// rebuilt from an all-zero grid on every call, so prior contents
/// (including user edits) never leak into the next frame.
pub fn step_grid(grid: &Grid, tick: u64) -> Grid {
    let rows = grid.len();
    if rows == 0 {
        return Vec::new();
    }
    let cols = grid[0].len();
    let mut next = init_grid(rows, cols);
    if cols == 0 {
        return next;
    }

    let total_cells = (rows * cols) as u64;
    // Tail first, head last: when the snake is longer than the grid,
    // segments collide and the head must win the cell
    for i in (0..snake_length(rows, cols) as u64).rev() {
        // Don't draw segments from before time 0
        if tick < i {
            continue;
        }
        let segment_tick = tick - i;

        // Loop seamlessly once the snake has traversed the whole grid
        let effective_tick = segment_tick % total_cells;

        let snake_row = (effective_tick / cols as u64) as usize;

        // Zig-zag: even rows sweep left to right, odd rows right to left
        let offset = (effective_tick % cols as u64) as usize;
        let snake_col = if snake_row % 2 == 0 {
            offset
        } else {
            cols - 1 - offset
        };

        // Unreachable given the modulo arithmetic, but skip rather than fault
        if snake_row < rows && snake_col < cols {
            // Later writes are closer to the head and win collisions
            next[snake_row][snake_col] = segment_tick;
        }
    }

    next
}

/// Number of body segments the snake has on a rows x cols grid.
/// Relative to the grid size for a nice effect; min * 4 / 5 equals
/// floor(min * 0.8) for all integer inputs.
pub fn snake_length(rows: usize, cols: usize) -> usize {
    MIN_SNAKE_LENGTH.max(rows.min(cols) * 4 / 5)
}

/// Playback configuration for the sweep animation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SweepConfig {
    pub rows: usize,
    pub cols: usize,
    /// Milliseconds per tick; unconstrained in this variant.
    pub speed: u64,
    pub is_running: bool,
    pub tick: u64,
}

/// Owns the sweep animation's playback state. One of these is
/// explicitly constructed and handed to whatever drives the animation;
/// there is no process-wide instance.
pub struct SweepManager {
    config: SweepConfig,
}

impl SweepManager {
    pub fn new(rows: usize, cols: usize, speed: u64) -> Self {
        Self {
            config: SweepConfig {
                rows,
                cols,
                speed,
                is_running: false,
                tick: 0,
            },
        }
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    pub fn reset(&mut self) {
        self.config.tick = 0;
        self.config.is_running = false;
    }

    pub fn next_tick(&mut self) -> u64 {
        self.config.tick += 1;
        self.config.tick
    }

    pub fn current_tick(&self) -> u64 {
        self.config.tick
    }

    pub fn set_tick(&mut self, tick: u64) {
        self.config.tick = tick;
    }

    pub fn toggle_running(&mut self) {
        self.config.is_running = !self.config.is_running;
    }

    pub fn set_running(&mut self, running: bool) {
        self.config.is_running = running;
    }

    pub fn set_speed(&mut self, speed: u64) {
        self.config.speed = speed;
    }

    /// Changing dimensions invalidates the run: tick restarts at 0 and
    /// the caller must start from a fresh all-zero grid.
    pub fn set_grid_size(&mut self, rows: usize, cols: usize) {
        self.config.rows = rows;
        self.config.cols = cols;
        self.config.tick = 0;
    }
}

impl Default for SweepManager {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS, DEFAULT_SPEED_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_grid_is_all_zeros() {
        for (rows, cols) in [(1, 1), (5, 8), (20, 10)] {
            let grid = init_grid(rows, cols);
            assert_eq!(grid.len(), rows);
            for row in &grid {
                assert_eq!(row.len(), cols);
                assert!(row.iter().all(|&v| v == 0));
            }
        }
    }

    #[test]
    fn step_preserves_dimensions() {
        let grid = init_grid(7, 9);
        let next = step_grid(&grid, 42);
        assert_eq!(next.len(), 7);
        assert!(next.iter().all(|row| row.len() == 9));
    }

    #[test]
    fn step_on_empty_grid_returns_empty() {
        let next = step_grid(&Vec::new(), 10);
        assert!(next.is_empty());
    }

    #[test]
    fn step_with_zero_cols_returns_zeros() {
        let grid = init_grid(4, 0);
        let next = step_grid(&grid, 10);
        assert_eq!(next.len(), 4);
        assert!(next.iter().all(|row| row.is_empty()));
    }

    #[test]
    fn cell_values_come_from_segment_ticks() {
        let grid = init_grid(10, 10);
        let tick = 57;
        let len = snake_length(10, 10) as u64;
        for row in step_grid(&grid, tick) {
            for v in row {
                if v != 0 {
                    let i = tick - v;
                    assert!(i < len, "value {v} is not a live segment of tick {tick}");
                }
            }
        }
    }

    #[test]
    fn step_ignores_prior_grid_contents() {
        let zeros = init_grid(6, 6);
        let mut dirty = init_grid(6, 6);
        dirty[3][3] = 999;
        assert_eq!(step_grid(&zeros, 17), step_grid(&dirty, 17));
    }

    #[test]
    fn step_is_deterministic() {
        let grid = init_grid(12, 5);
        assert_eq!(step_grid(&grid, 300), step_grid(&grid, 300));
    }

    #[test]
    fn head_follows_zigzag_columns() {
        let (rows, cols) = (8, 6);
        let grid = init_grid(rows, cols);
        for tick in 0..(rows * cols * 2) as u64 {
            let next = step_grid(&grid, tick);
            let effective = tick % (rows * cols) as u64;
            let row = (effective / cols as u64) as usize;
            let offset = (effective % cols as u64) as usize;
            let expected_col = if row % 2 == 0 {
                offset
            } else {
                cols - 1 - offset
            };
            assert_eq!(next[row][expected_col], tick, "head missing at tick {tick}");
        }
    }

    #[test]
    fn young_snake_has_fewer_segments() {
        // At tick 0 only the head exists
        let grid = init_grid(10, 10);
        let lit: usize = step_grid(&grid, 0)
            .iter()
            .flatten()
            .filter(|&&v| v != 0)
            .count();
        // The head itself carries value 0 ("off"), so nothing shows yet
        assert_eq!(lit, 0);

        let lit: usize = step_grid(&grid, 3)
            .iter()
            .flatten()
            .filter(|&&v| v != 0)
            .count();
        // Ticks 1..=3 light up; segment_tick 0 still renders as off
        assert_eq!(lit, 3);
    }

    #[test]
    fn head_wins_segment_collisions() {
        // A 1x1 grid folds every segment onto the same cell; the head's
        // tick must be the surviving value
        let grid = init_grid(1, 1);
        let next = step_grid(&grid, 10);
        assert_eq!(next[0][0], 10);

        // A 1x3 grid folds a 5-segment snake onto 3 cells
        let grid = init_grid(1, 3);
        let next = step_grid(&grid, 10);
        // effective ticks: 10%3=1, 9%3=0, 8%3=2, 7%3=1, 6%3=0
        assert_eq!(next[0], vec![9, 10, 8]);
    }

    #[test]
    fn animation_loops_after_full_traversal() {
        let (rows, cols) = (5, 7);
        let grid = init_grid(rows, cols);
        let period = (rows * cols) as u64;
        let a = step_grid(&grid, period + 3);
        let b = step_grid(&grid, 2 * period + 3);
        // Values differ (they encode the raw tick) but occupancy wraps
        let occupied = |g: &Grid| {
            g.iter()
                .map(|row| row.iter().map(|&v| v != 0).collect::<Vec<_>>())
                .collect::<Vec<_>>()
        };
        assert_eq!(occupied(&a), occupied(&b));
    }

    #[test]
    fn snake_length_has_floor_of_five() {
        assert_eq!(snake_length(3, 3), 5);
        assert_eq!(snake_length(10, 20), 8);
        assert_eq!(snake_length(50, 50), 40);
    }

    #[test]
    fn manager_resets_tick_on_resize() {
        let mut mgr = SweepManager::default();
        mgr.next_tick();
        mgr.next_tick();
        assert_eq!(mgr.current_tick(), 2);
        mgr.set_grid_size(8, 8);
        assert_eq!(mgr.current_tick(), 0);
        assert_eq!(mgr.config().rows, 8);
    }

    #[test]
    fn manager_reset_stops_playback() {
        let mut mgr = SweepManager::default();
        mgr.set_running(true);
        mgr.set_tick(40);
        mgr.reset();
        assert!(!mgr.config().is_running);
        assert_eq!(mgr.current_tick(), 0);
    }
}
