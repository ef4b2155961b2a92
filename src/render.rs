// ---------------------------------------------------------------------------
// Render specification – what a demo asks the UI to draw
// ---------------------------------------------------------------------------

/// Overall chart family of a [`PlotSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Scatter,
    Line,
    Bar,
    Histogram,
}

/// Marker shape for point series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Cross,
}

/// How one series is drawn.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesStyle {
    Points(Marker),
    Line,
    DashedLine,
    /// Vertical bars centred on each x value.
    Bars { width: f64 },
}

/// One named series of `[x, y]` points.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub style: SeriesStyle,
    pub points: Vec<[f64; 2]>,
}

impl Series {
    pub fn points(name: impl Into<String>, marker: Marker, points: Vec<[f64; 2]>) -> Self {
        Series {
            name: name.into(),
            style: SeriesStyle::Points(marker),
            points,
        }
    }

    pub fn line(name: impl Into<String>, points: Vec<[f64; 2]>) -> Self {
        Series {
            name: name.into(),
            style: SeriesStyle::Line,
            points,
        }
    }

    pub fn dashed_line(name: impl Into<String>, points: Vec<[f64; 2]>) -> Self {
        Series {
            name: name.into(),
            style: SeriesStyle::DashedLine,
            points,
        }
    }

    pub fn bars(name: impl Into<String>, width: f64, points: Vec<[f64; 2]>) -> Self {
        Series {
            name: name.into(),
            style: SeriesStyle::Bars { width },
            points,
        }
    }
}

/// Complete description of one chart, independent of any UI toolkit.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
}

impl PlotSpec {
    pub fn new(
        kind: ChartKind,
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        PlotSpec {
            kind,
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            series: Vec::new(),
        }
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }
}

/// Pair each value with its observation index: `[0, v0], [1, v1], …`.
pub fn indexed(values: &[f64]) -> Vec<[f64; 2]> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| [i as f64, v])
        .collect()
}

// ---------------------------------------------------------------------------
// Presentation sinks
// ---------------------------------------------------------------------------

/// The boundary between the demo dispatch and the UI.
///
/// A successful demo drives `render_plot` then `render_description`, each
/// exactly once; a failed demo drives `report_error` only, leaving whatever
/// was rendered before in place.
pub trait PresentationSink {
    fn render_plot(&mut self, spec: PlotSpec);
    fn render_description(&mut self, text: String);
    fn report_error(&mut self, message: String);
}
