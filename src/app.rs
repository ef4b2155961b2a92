use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct AutoLabApp {
    pub state: AppState,
}

impl Default for AutoLabApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl eframe::App for AutoLabApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: status bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Intro screen gates the demo panels ----
        if !self.state.show_demos {
            egui::CentralPanel::default().show(ctx, |ui| {
                panels::intro_screen(ui, &mut self.state);
            });
            return;
        }

        // ---- Left side panel: demo triggers ----
        egui::SidePanel::left("demo_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::demo_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: explanation text ----
        egui::TopBottomPanel::bottom("description_panel").show(ctx, |ui| {
            panels::description_panel(ui, &self.state);
        });

        // ---- Central panel: chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::demo_plot(ui, &self.state.view);
        });
    }
}
