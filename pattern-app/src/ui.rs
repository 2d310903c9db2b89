// ui.rs - egui front-end for the two animation modes
// Rendering and input wiring only; state transitions live in pattern-core.

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use pattern_core::grid::snake_length;
use pattern_core::sequence::TOTAL_STEPS;
use pattern_core::{Animator, CellColor};

use crate::{Mode, PatternApp};

const SPEED_CHOICES: &[(u64, &str)] = &[
    (100, "Fast"),
    (500, "Normal"),
    (1000, "Slow"),
    (2000, "Very Slow"),
];

impl eframe::App for PatternApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.advance_if_due();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Pattern Grid Visualization");

            // Mode selector
            ui.horizontal(|ui| {
                ui.label("Mode:");
                let mut mode = self.mode;
                ui.selectable_value(&mut mode, Mode::Sweep, "Sweep");
                ui.selectable_value(&mut mode, Mode::PhaseScript, "Phase Script");
                self.switch_mode(mode);
            });

            ui.separator();

            match self.mode {
                Mode::Sweep => self.sweep_ui(ui),
                Mode::PhaseScript => self.script_ui(ui),
            }
        });

        // Keep the animation smooth while running
        if self.animator.is_running() {
            ctx.request_repaint();
        }
    }
}

impl PatternApp {
    fn sweep_ui(&mut self, ui: &mut egui::Ui) {
        let Animator::Sweep(mgr) = &self.animator else {
            return;
        };
        let is_running = mgr.config().is_running;
        let tick = mgr.current_tick();
        let mut speed = mgr.config().speed;

        // Controls; clicks are collected first, applied after the
        // closures release their borrows
        let mut toggle_clicked = false;
        let mut reset_clicked = false;
        ui.horizontal(|ui| {
            let button_text = if is_running { "⏸ Pause" } else { "▶ Start" };
            toggle_clicked = ui.button(button_text).clicked();
            reset_clicked = ui.button("⏹ Reset").clicked();

            ui.separator();
            ui.label(format!("Tick: {tick}"));
        });

        // Speed and grid size
        let mut speed_changed = false;
        let mut apply_clicked = false;
        ui.horizontal(|ui| {
            ui.label("Speed:");
            speed_changed = ui
                .add(egui::Slider::new(&mut speed, 30..=1000).suffix(" ms/tick"))
                .changed();

            ui.separator();

            ui.label("Rows:");
            ui.add(egui::DragValue::new(&mut self.pending_rows).clamp_range(5..=40));
            ui.label("Cols:");
            ui.add(egui::DragValue::new(&mut self.pending_cols).clamp_range(5..=40));
            apply_clicked = ui.button("Apply Size").clicked();
        });

        if toggle_clicked {
            self.animator.toggle_running();
            if self.animator.is_running() {
                self.last_update = std::time::Instant::now();
            }
        }
        if reset_clicked {
            self.reset();
        }
        if speed_changed {
            self.animator.set_speed_ms(speed);
        }
        if apply_clicked {
            self.apply_grid_size();
        }

        ui.separator();
        ui.label("Click cells to toggle them while paused. Edits vanish once the snake moves on.");
        ui.separator();

        self.draw_sweep_grid(ui);
    }

    fn draw_sweep_grid(&mut self, ui: &mut egui::Ui) {
        let Animator::Sweep(mgr) = &self.animator else {
            return;
        };
        let rows = self.grid.len();
        let cols = self.grid.first().map_or(0, |r| r.len());
        if rows == 0 || cols == 0 {
            return;
        }
        let tick = mgr.current_tick();
        let tail = snake_length(rows, cols) as u64;

        let box_size = 18.0;
        let spacing = 1.0;

        let start_pos = ui.cursor().min;
        let total_size = Vec2::new(
            (box_size + spacing) * cols as f32 - spacing,
            (box_size + spacing) * rows as f32 - spacing,
        );
        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

        // Fill background
        painter.rect_filled(Rect::from_min_size(start_pos, total_size), 0.0, Color32::BLACK);

        for row in 0..rows {
            for col in 0..cols {
                let x = start_pos.x + col as f32 * (box_size + spacing);
                let y = start_pos.y + row as f32 * (box_size + spacing);
                let rect = Rect::from_min_size(egui::pos2(x, y), Vec2::splat(box_size));

                let value = self.grid[row][col];
                let cell_color = if value == 0 {
                    Color32::from_gray(30)
                } else {
                    // Fade from head to tail color by segment age
                    let age = tick.saturating_sub(value).min(tail);
                    lerp_color(self.head_color, self.tail_color, age as f32 / tail as f32)
                };

                painter.rect_filled(rect, 1.0, cell_color);
                painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
            }
        }

        // Hit-test clicks back to a cell
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let col = ((pos.x - start_pos.x) / (box_size + spacing)) as usize;
                let row = ((pos.y - start_pos.y) / (box_size + spacing)) as usize;
                self.toggle_cell(row, col);
            }
        }
    }

    fn script_ui(&mut self, ui: &mut egui::Ui) {
        let Animator::PhaseScript(seq) = &mut self.animator else {
            return;
        };

        ui.label(seq.current().description.clone());
        ui.separator();

        // Timeline slider
        let mut step = seq.current_step();
        if ui
            .add(egui::Slider::new(&mut step, 0..=TOTAL_STEPS - 1).show_value(false))
            .changed()
        {
            seq.set_current_step(step as isize);
        }

        // Playback controls
        ui.horizontal(|ui| {
            let at_start = seq.current_step() == 0;
            let at_end = seq.current_step() + 1 >= seq.len();

            if ui.add_enabled(!at_start, egui::Button::new("⏮")).clicked() {
                seq.previous_step();
            }
            if ui.add_enabled(!at_start, egui::Button::new("⏪ 10")).clicked() {
                let target = seq.current_step() as isize - 10;
                seq.set_current_step(target);
            }

            let play_text = if seq.is_playing() { "⏸" } else { "▶" };
            if ui.button(play_text).clicked() {
                if seq.is_playing() {
                    seq.pause();
                } else {
                    seq.play();
                    self.last_update = std::time::Instant::now();
                }
            }

            if ui.add_enabled(!at_end, egui::Button::new("30 ⏩")).clicked() {
                let target = seq.current_step() as isize + 30;
                seq.set_current_step(target);
            }
            if ui.add_enabled(!at_end, egui::Button::new("⏭")).clicked() {
                seq.next_step();
            }

            ui.separator();

            // Speed dropdown
            ui.label("Speed:");
            let current = seq.speed_ms();
            let label = SPEED_CHOICES
                .iter()
                .find(|(ms, _)| *ms == current)
                .map_or("Custom", |(_, name)| *name);
            egui::ComboBox::from_id_source("speed_selector")
                .selected_text(label)
                .show_ui(ui, |ui| {
                    for &(ms, name) in SPEED_CHOICES {
                        let mut selected = current;
                        if ui.selectable_value(&mut selected, ms, name).changed() {
                            seq.set_speed_ms(selected);
                        }
                    }
                });

            ui.separator();
            ui.label(format!("Step {} of {}", seq.current_step() + 1, seq.len()));
        });

        ui.separator();

        self.draw_script_grid(ui);
    }

    fn draw_script_grid(&mut self, ui: &mut egui::Ui) {
        let Animator::PhaseScript(seq) = &self.animator else {
            return;
        };
        let cells = &seq.current().cells;

        let cols = 10;
        let box_size = 26.0;
        let spacing = 1.0;
        let rows = cells.len().div_ceil(cols);

        let start_pos = ui.cursor().min;
        let total_size = Vec2::new(
            (box_size + spacing) * cols as f32 - spacing,
            (box_size + spacing) * rows as f32 - spacing,
        );
        let (_response, painter) = ui.allocate_painter(total_size, egui::Sense::hover());

        painter.rect_filled(Rect::from_min_size(start_pos, total_size), 0.0, Color32::BLACK);

        for cell in cells {
            let index = cell.number as usize - 1;
            let row = index / cols;
            let col = index % cols;

            let x = start_pos.x + col as f32 * (box_size + spacing);
            let y = start_pos.y + row as f32 * (box_size + spacing);
            let rect = Rect::from_min_size(egui::pos2(x, y), Vec2::splat(box_size));

            let base = match cell.color {
                CellColor::Black => Color32::from_gray(35),
                CellColor::Blue => Color32::from_rgb(50, 110, 230),
                CellColor::Red => Color32::from_rgb(220, 70, 60),
                CellColor::Green => Color32::from_rgb(60, 190, 90),
            };
            painter.rect_filled(rect, 2.0, base);
            if cell.is_active {
                painter.rect_stroke(rect, 2.0, Stroke::new(1.5, Color32::WHITE));
            } else {
                painter.rect_stroke(rect, 2.0, Stroke::new(0.2, Color32::from_gray(70)));
            }

            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                cell.number.to_string(),
                egui::FontId::proportional(9.0),
                Color32::from_gray(200),
            );
        }
    }
}

fn lerp_color(from: Color32, to: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
    Color32::from_rgb(
        mix(from.r(), to.r()),
        mix(from.g(), to.g()),
        mix(from.b(), to.b()),
    )
}
