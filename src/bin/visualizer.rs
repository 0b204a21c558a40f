// src/bin/visualizer.rs

use eframe::egui;
use egui::{Color32, FontId, Frame, RichText, Stroke};
use egui_plot::{HLine, Legend, Line, Plot, PlotPoints};
use prediction_market_sim::{ConvergenceReport, Marketable, MarketSimulator, SimulationConfig};
use std::time::{Duration, Instant};

struct VisualizerApp {
    // World state
    simulator: MarketSimulator,

    // The run being displayed
    prices: Vec<f64>,
    volumes: Vec<f64>,
    report: Option<ConvergenceReport>,

    // UI state for the app itself
    is_playing: bool,
    last_update: Instant,
}

impl VisualizerApp {
    fn new(simulator: MarketSimulator) -> Self {
        Self {
            simulator,
            prices: Vec::new(),
            volumes: Vec::new(),
            report: None,
            is_playing: false,
            last_update: Instant::now(),
        }
    }

    fn restart(&mut self) {
        self.simulator.reset();
        self.prices.clear();
        self.volumes.clear();
        self.report = None;
        self.is_playing = false;
    }

    /// Skip the animation and show a completed run straight away.
    fn run_full_simulation(&mut self) {
        self.restart();
        let (prices, volumes) = self.simulator.simulate();
        self.report = self.simulator.analyze_convergence(&prices).ok();
        self.prices = prices;
        self.volumes = volumes;
    }
}

impl eframe::App for VisualizerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let n_steps = self.simulator.config().n_steps;

        // Interactive, animated mode: one market step per throttled UI tick.
        if self.is_playing && self.last_update.elapsed() > Duration::from_millis(20) {
            if self.prices.len() < n_steps {
                let price = self.simulator.step();
                self.prices.push(price);
                self.volumes.push(self.simulator.last_volume());
            } else {
                self.is_playing = false;
                self.report = self.simulator.analyze_convergence(&self.prices).ok();
            }
            self.last_update = Instant::now();
        }
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Yes-No Market Simulator");
                ui.add_space(20.0);

                let play_label = if self.is_playing { "⏸ Pause" } else { "▶ Play" };
                if ui.button(play_label).clicked() {
                    self.is_playing = !self.is_playing;
                    self.last_update = Instant::now();
                }
                if ui.button("↺ Restart").clicked() {
                    self.restart();
                }
                if ui.button("⚡ Run Full Simulation").clicked() {
                    self.run_full_simulation();
                }

                ui.label(format!("step {}/{}", self.prices.len(), n_steps));
            });
            ui.separator();

            if let Some(report) = &self.report {
                Frame::dark_canvas(ui.style())
                    .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                    .show(ui, |ui| {
                        ui.heading("Convergence Analysis");
                        ui.separator();
                        let mono_font = FontId::monospace(14.0);
                        egui::Grid::new("report_grid")
                            .num_columns(2)
                            .spacing([20.0, 2.0])
                            .show(ui, |ui| {
                                ui.label(RichText::new("Mean Error:").strong());
                                ui.label(
                                    RichText::new(format!("{:.4}", report.mean_error))
                                        .font(mono_font.clone()),
                                );
                                ui.end_row();
                                ui.label(RichText::new("Final Error:").strong());
                                ui.label(
                                    RichText::new(format!("{:.4}", report.final_error))
                                        .font(mono_font.clone()),
                                );
                                ui.end_row();
                                ui.label(RichText::new("Convergence Time:").strong());
                                ui.label(
                                    RichText::new(format!("{} steps", report.convergence_time))
                                        .font(mono_font.clone()),
                                );
                                ui.end_row();
                                ui.label(RichText::new("Volatility:").strong());
                                ui.label(
                                    RichText::new(format!("{:.4}", report.volatility))
                                        .font(mono_font),
                                );
                                ui.end_row();
                            });
                    });
                ui.add_space(4.0);
            }

            let plot_height = ui.available_height() / 2.0 - 8.0;
            Frame::dark_canvas(ui.style()).show(ui, |ui| {
                Plot::new("price_plot")
                    .height(plot_height)
                    .width(ui.available_width())
                    .include_y(0.0)
                    .include_y(1.0)
                    .legend(Legend::default())
                    .show(ui, |plot_ui| {
                        plot_ui.hline(
                            HLine::new(self.simulator.config().true_prob)
                                .color(Color32::LIGHT_GREEN)
                                .name("True Probability"),
                        );
                        if !self.prices.is_empty() {
                            let line = Line::new(PlotPoints::from_ys_f64(&self.prices))
                                .color(Color32::LIGHT_BLUE)
                                .stroke(Stroke::new(2.0, Color32::LIGHT_BLUE))
                                .name("Market Price");
                            plot_ui.line(line);
                        }
                    });
            });
            ui.add_space(4.0);

            Frame::dark_canvas(ui.style()).show(ui, |ui| {
                Plot::new("volume_plot")
                    .height(ui.available_height())
                    .width(ui.available_width())
                    .legend(Legend::default())
                    .show(ui, |plot_ui| {
                        if !self.volumes.is_empty() {
                            let line = Line::new(PlotPoints::from_ys_f64(&self.volumes))
                                .color(Color32::GOLD)
                                .name("Volume");
                            plot_ui.line(line);
                        }
                    });
            });
        });
    }
}

fn main() -> Result<(), eframe::Error> {
    let config = SimulationConfig::new(0.7, 100, 1000).expect("example parameters are valid");
    let simulator = MarketSimulator::new(config);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_title("Yes-No Market Visualizer"),
        ..Default::default()
    };

    eframe::run_native(
        "Yes-No Market Visualizer App",
        native_options,
        Box::new(|_cc| Box::new(VisualizerApp::new(simulator))),
    )
}
