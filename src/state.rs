use crate::analysis::{self, Demo};
use crate::data::DatasetCache;
use crate::render::{PlotSpec, PresentationSink};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Single-slot dataset cache; empty until the user generates rows.
    pub cache: DatasetCache,

    /// Contents of the row-count entry field.
    pub rows_input: String,

    /// Whether the user has entered the demo screen from the intro.
    pub show_demos: bool,

    /// What the presentation panels currently display.
    pub view: ViewState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            cache: DatasetCache::empty(),
            rows_input: "200".to_owned(),
            show_demos: false,
            view: ViewState::default(),
        }
    }
}

impl AppState {
    /// Run one demo to completion and deliver the outcome to the panels.
    ///
    /// Strictly sequential: the routine finishes (or fails) inside this
    /// call, before the next user action can be handled.
    pub fn trigger(&mut self, demo: Demo) {
        let outcome =
            analysis::run_demo(demo, &mut self.cache, &self.rows_input, &mut rand::rng());
        match &outcome {
            Ok(_) => log::info!("{} rendered", demo.label()),
            Err(e) => log::error!("{} failed: {e}", demo.label()),
        }
        analysis::present(outcome, &mut self.view);
    }
}

// ---------------------------------------------------------------------------
// View state – the egui side of the presentation sinks
// ---------------------------------------------------------------------------

/// Backing store for the chart, the explanation text, and the status line.
#[derive(Debug, Default)]
pub struct ViewState {
    pub plot: Option<PlotSpec>,
    pub description: String,
    pub status_message: Option<String>,
}

impl PresentationSink for ViewState {
    fn render_plot(&mut self, spec: PlotSpec) {
        self.plot = Some(spec);
        self.status_message = None;
    }

    fn render_description(&mut self, text: String) {
        self.description = text;
    }

    fn report_error(&mut self, message: String) {
        // keep whatever was rendered before; only the status line changes
        self.status_message = Some(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_renders_plot_and_description() {
        let mut state = AppState::default();
        state.trigger(Demo::DataGeneration);
        assert!(state.view.plot.is_some());
        assert!(!state.view.description.is_empty());
        assert!(state.view.status_message.is_none());
        assert_eq!(state.cache.current().unwrap().len(), 200);
    }

    #[test]
    fn failed_trigger_keeps_previous_rendering() {
        let mut state = AppState::default();
        state.trigger(Demo::Clustering);
        let plot_before = state.view.plot.clone();
        let text_before = state.view.description.clone();

        state.rows_input = "not a number".to_owned();
        state.trigger(Demo::DataGeneration);

        assert!(state.view.status_message.is_some());
        assert_eq!(state.view.plot, plot_before);
        assert_eq!(state.view.description, text_before);
        assert!(state.cache.current().is_none());
    }

    #[test]
    fn next_success_clears_the_status_line() {
        let mut state = AppState::default();
        state.rows_input = "0".to_owned();
        state.trigger(Demo::DataGeneration);
        assert!(state.view.status_message.is_some());

        state.rows_input = "15".to_owned();
        state.trigger(Demo::DataGeneration);
        assert!(state.view.status_message.is_none());
        assert_eq!(state.cache.current().unwrap().len(), 15);
    }
}
