/// UI layer: egui panels and the chart renderer.
pub mod panels;
pub mod plot;
