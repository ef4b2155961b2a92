use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Line, LineStyle, MarkerShape, Plot, Points};

use crate::color::series_palette;
use crate::render::{Marker, SeriesStyle};
use crate::state::ViewState;

// ---------------------------------------------------------------------------
// Demo chart (central panel)
// ---------------------------------------------------------------------------

/// Render the current plot specification, if any.
pub fn demo_plot(ui: &mut Ui, view: &ViewState) {
    let spec = match &view.plot {
        Some(spec) => spec,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Generate a dataset or pick a demo to see a chart");
            });
            return;
        }
    };

    ui.heading(&spec.title);

    let colors = series_palette(spec.series.len());
    Plot::new("demo_plot")
        .legend(Legend::default())
        .x_axis_label(spec.x_label.clone())
        .y_axis_label(spec.y_label.clone())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (series, color) in spec.series.iter().zip(colors) {
                match series.style {
                    SeriesStyle::Points(marker) => {
                        let shape = match marker {
                            Marker::Circle => MarkerShape::Circle,
                            Marker::Cross => MarkerShape::Cross,
                        };
                        plot_ui.points(
                            Points::new(series.points.clone())
                                .name(&series.name)
                                .color(color)
                                .shape(shape)
                                .radius(3.0),
                        );
                    }
                    SeriesStyle::Line => {
                        plot_ui.line(
                            Line::new(series.points.clone())
                                .name(&series.name)
                                .color(color)
                                .width(1.5),
                        );
                    }
                    SeriesStyle::DashedLine => {
                        plot_ui.line(
                            Line::new(series.points.clone())
                                .name(&series.name)
                                .color(color)
                                .width(1.5)
                                .style(LineStyle::dashed_loose()),
                        );
                    }
                    SeriesStyle::Bars { width } => {
                        let bars: Vec<Bar> = series
                            .points
                            .iter()
                            .map(|&[x, y]| Bar::new(x, y).width(width))
                            .collect();
                        plot_ui.bar_chart(BarChart::new(bars).name(&series.name).color(color));
                    }
                }
            }
        });
}
