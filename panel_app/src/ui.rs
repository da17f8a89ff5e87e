// ui.rs - Window that stands in for the LED panel

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{Color32, Rect, Vec2};
use led_panel::{Diagnostic, EffectKind, FrameBuffer};
use panel_app::Show;

pub struct PanelViewer {
    show: Show,
    frame: FrameBuffer,
    is_running: bool,
    last_update: Instant,
    hold: Duration,
    speed: f32,
    live_color: Color32,
    dead_color: Color32,
}

impl PanelViewer {
    pub fn new(show: Show, frame: FrameBuffer) -> Self {
        Self {
            show,
            frame,
            is_running: true,
            last_update: Instant::now(),
            hold: Duration::ZERO,
            speed: 1.0,
            live_color: Color32::from_rgb(255, 40, 20),
            dead_color: Color32::from_rgb(45, 10, 10),
        }
    }

    fn due(&self) -> Duration {
        self.hold.div_f32(self.speed)
    }

    fn step(&mut self) {
        self.hold = self.show.tick(&mut self.frame);
        self.last_update = Instant::now();
        if let Some(message) = self.show.take_message() {
            tracing::info!(%message, "message for the text scroller");
        }
    }
}

impl eframe::App for PanelViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.is_running && self.last_update.elapsed() >= self.due() {
            self.step();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("LED Panel Life");

            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.is_running = !self.is_running;
                    self.last_update = Instant::now();
                }

                if ui.button("⏭ Step").clicked() {
                    self.step();
                }

                if ui.button("🎲 Next game").clicked() {
                    self.show.next_game();
                    self.hold = Duration::ZERO;
                }

                ui.separator();

                ui.label("Effect:");
                for kind in EffectKind::ALL {
                    if ui.button(kind.to_string()).clicked() {
                        self.show.play_effect(kind);
                        self.hold = Duration::ZERO;
                    }
                }
            });

            ui.horizontal(|ui| {
                ui.label("Diagnostic:");
                for (label, diagnostic) in [
                    ("Border", Diagnostic::Border),
                    ("Identify", Diagnostic::Identify),
                    ("Spot run", Diagnostic::SpotRun),
                ] {
                    if ui.button(label).clicked() {
                        self.show.diagnostic(diagnostic, &mut self.frame);
                        self.hold = Duration::ZERO;
                    }
                }
                if ui.button("Resume").clicked() {
                    self.show.resume();
                }

                ui.separator();

                ui.label("Speed:");
                ui.add(egui::Slider::new(&mut self.speed, 0.25..=8.0).suffix("x"));

                ui.label("Lit:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dark:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            let panel = *self.show.panel();
            let pitch = 12.0;
            let start_pos = ui.cursor().min;
            let total_size = Vec2::new(panel.width() as f32 * pitch, panel.height() as f32 * pitch);
            let (_response, painter) = ui.allocate_painter(total_size, egui::Sense::hover());

            painter.rect_filled(Rect::from_min_size(start_pos, total_size), 0.0, Color32::BLACK);

            for y in 0..panel.height() {
                for x in 0..panel.width() {
                    let lit = panel
                        .locate(x, y)
                        .is_some_and(|pixel| self.frame.is_lit(pixel.row, pixel.col));
                    let center = egui::pos2(
                        start_pos.x + (x as f32 + 0.5) * pitch,
                        start_pos.y + (y as f32 + 0.5) * pitch,
                    );
                    let color = if lit { self.live_color } else { self.dead_color };
                    painter.circle_filled(center, pitch * 0.4, color);
                }
            }

            ui.separator();

            let life = self.show.life();
            ui.horizontal(|ui| {
                ui.label(format!("Game: {}", self.show.games_played()));
                ui.label(format!("Generation: {}", life.get_generation_count()));
                ui.label(format!("Live cells: {}", life.live_cells()));
                ui.label(format!("Phase: {}", self.show.phase_name()));
                ui.label(if life.wraps() { "Torus" } else { "Bounded" });
                ui.label(format!("Limit: {}", life.max_generations()));
                if let Some(reason) = self.show.last_finish() {
                    ui.label(format!("Last end: {reason:?}"));
                }
            });
        });

        if self.is_running {
            ctx.request_repaint_after(self.due().saturating_sub(self.last_update.elapsed()));
        }
    }
}
