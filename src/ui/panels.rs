use eframe::egui::{self, Color32, RichText, Ui};

use crate::analysis::Demo;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Status line: dataset size and the most recent error, if any.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Auto Lab");
        ui.separator();

        match state.cache.current() {
            Some(ds) => {
                ui.label(format!("{} rows generated", ds.len()));
            }
            None => {
                ui.label("no dataset generated yet");
            }
        }

        if let Some(msg) = &state.view.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Intro screen
// ---------------------------------------------------------------------------

/// Landing screen shown before the demo panel is entered.
pub fn intro_screen(ui: &mut Ui, state: &mut AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(140.0);
        ui.heading("Machine-learning demos for the automotive sector");
        ui.add_space(8.0);
        ui.label("Generate simulated sensor data and explore six classic algorithms.");
        ui.add_space(32.0);

        if ui.button(RichText::new("  Enter  ").strong()).clicked() {
            state.show_demos = true;
        }
        ui.add_space(8.0);
        if ui.button("  Exit  ").clicked() {
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – demo triggers
// ---------------------------------------------------------------------------

/// Row-count entry plus one button per demo routine.
pub fn demo_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Demos");
    ui.separator();

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Rows:");
        let response = ui.add(
            egui::TextEdit::singleline(&mut state.rows_input).desired_width(64.0),
        );
        // Enter in the field is the generate trigger
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            state.trigger(Demo::DataGeneration);
        }
    });
    ui.add_space(4.0);

    let mut clicked = None;
    for demo in Demo::ALL {
        let button = egui::Button::new(demo.label());
        if ui.add_sized([ui.available_width(), 28.0], button).clicked() {
            clicked = Some(demo);
        }
        ui.add_space(2.0);
    }
    if let Some(demo) = clicked {
        state.trigger(demo);
    }

    ui.separator();
    if ui.small_button("Back to intro").clicked() {
        state.show_demos = false;
    }
}

// ---------------------------------------------------------------------------
// Bottom panel – explanation text
// ---------------------------------------------------------------------------

/// The plain-language explanation paired with the current chart.
pub fn description_panel(ui: &mut Ui, state: &AppState) {
    if state.view.description.is_empty() {
        ui.label("Pick a demo to see what the algorithm does.");
    } else {
        ui.label(&state.view.description);
    }
}
