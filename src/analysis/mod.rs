//! Demo registry and dispatch.
//!
//! Six named routines share one invocation contract: consume the current
//! dataset (or the routine's declared fallback when none has been
//! generated), run one algorithm, and emit a plot specification plus an
//! explanation. Results flow to the UI through [`present`] and the
//! [`PresentationSink`] trait; nothing a routine synthesizes is ever
//! written back into the cache.

pub mod clustering;
pub mod crossval;
pub mod forecast;
pub mod forest;
pub mod regression;
pub mod tree;

use rand::Rng;

use crate::data::{iris, model::Dataset, DatasetCache};
use crate::error::LabError;
use crate::render::{indexed, ChartKind, Marker, PlotSpec, PresentationSink, Series};

// ---------------------------------------------------------------------------
// The registry
// ---------------------------------------------------------------------------

/// The six demo routines, in button order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    DataGeneration,
    LinearRegression,
    Clustering,
    Forecast,
    RandomForest,
    CrossValidation,
}

/// Declared substitute input for a routine invoked with an empty cache.
///
/// Every routine's substitute shape is pinned in [`Demo::fallback`];
/// the shapes differ per routine and are never unified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Uniform `[0, 1)` features plus a uniform `[0, 1)` target.
    FeatureTarget { rows: usize, cols: usize },
    /// Uniform `[0, 1)` features only.
    Features { rows: usize, cols: usize },
    /// A short uniform `[0, 1)` time series.
    Series { len: usize },
    /// Uniform `[0, 1)` features plus random `{0, 1}` labels.
    LabeledFeatures { rows: usize, cols: usize },
    /// The embedded iris reference table (150×4, three classes).
    IrisReference,
}

const FALLBACK_ROWS: usize = 100;
const FALLBACK_COLS: usize = 3;
const FALLBACK_SERIES_LEN: usize = 10;

impl Demo {
    pub const ALL: [Demo; 6] = [
        Demo::DataGeneration,
        Demo::LinearRegression,
        Demo::Clustering,
        Demo::Forecast,
        Demo::RandomForest,
        Demo::CrossValidation,
    ];

    /// Button caption.
    pub fn label(self) -> &'static str {
        match self {
            Demo::DataGeneration => "Generate Data",
            Demo::LinearRegression => "Linear Regression",
            Demo::Clustering => "Clustering",
            Demo::Forecast => "ARIMA Forecast",
            Demo::RandomForest => "Random Forest",
            Demo::CrossValidation => "Cross-Validation",
        }
    }

    /// The routine's declared fallback shape, `None` for the one routine
    /// that produces data instead of reading it.
    pub const fn fallback(self) -> Option<Fallback> {
        match self {
            Demo::DataGeneration => None,
            Demo::LinearRegression => Some(Fallback::FeatureTarget {
                rows: FALLBACK_ROWS,
                cols: FALLBACK_COLS,
            }),
            Demo::Clustering => Some(Fallback::Features {
                rows: FALLBACK_ROWS,
                cols: FALLBACK_COLS,
            }),
            Demo::Forecast => Some(Fallback::Series {
                len: FALLBACK_SERIES_LEN,
            }),
            Demo::RandomForest => Some(Fallback::LabeledFeatures {
                rows: FALLBACK_ROWS,
                cols: FALLBACK_COLS,
            }),
            Demo::CrossValidation => Some(Fallback::IrisReference),
        }
    }
}

/// The ephemeral product of one successful routine invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub plot: PlotSpec,
    pub description: String,
}

// ---------------------------------------------------------------------------
// Fallback materialization
// ---------------------------------------------------------------------------

fn uniform_matrix(rows: usize, cols: usize, rng: &mut impl Rng) -> Vec<Vec<f64>> {
    (0..rows)
        .map(|_| (0..cols).map(|_| rng.random_range(0.0..1.0)).collect())
        .collect()
}

fn uniform_series(len: usize, rng: &mut impl Rng) -> Vec<f64> {
    (0..len).map(|_| rng.random_range(0.0..1.0)).collect()
}

fn coin_labels(len: usize, rng: &mut impl Rng) -> Vec<u8> {
    (0..len).map(|_| rng.random_range(0..2u8)).collect()
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Run one demo to completion.
///
/// `DataGeneration` is the only arm that mutates the cache; every other
/// routine reads it and falls back to its declared substitute when the
/// slot is empty. A failure never changes cached state.
pub fn run_demo(
    demo: Demo,
    cache: &mut DatasetCache,
    rows_request: &str,
    rng: &mut impl Rng,
) -> Result<AnalysisResult, LabError> {
    match demo {
        Demo::DataGeneration => {
            let dataset = cache.generate(rows_request, rng)?;
            Ok(generation_result(dataset))
        }
        Demo::LinearRegression => {
            let (x, y) = match cache.current() {
                Some(ds) => (ds.feature_rows(), ds.consumption.clone()),
                None => {
                    let Some(Fallback::FeatureTarget { rows, cols }) = demo.fallback() else {
                        unreachable!("regression declares a feature/target fallback");
                    };
                    (uniform_matrix(rows, cols, rng), uniform_series(rows, rng))
                }
            };
            regression::demo(&x, &y)
        }
        Demo::Clustering => {
            let x = match cache.current() {
                Some(ds) => ds.feature_rows(),
                None => {
                    let Some(Fallback::Features { rows, cols }) = demo.fallback() else {
                        unreachable!("clustering declares a features fallback");
                    };
                    uniform_matrix(rows, cols, rng)
                }
            };
            clustering::demo(&x, rng)
        }
        Demo::Forecast => {
            let series = match cache.current() {
                Some(ds) => ds.consumption.clone(),
                None => {
                    let Some(Fallback::Series { len }) = demo.fallback() else {
                        unreachable!("forecast declares a series fallback");
                    };
                    uniform_series(len, rng)
                }
            };
            forecast::demo(&series)
        }
        Demo::RandomForest => {
            let (x, y) = match cache.current() {
                Some(ds) => (ds.feature_rows(), ds.binary_labels()),
                None => {
                    let Some(Fallback::LabeledFeatures { rows, cols }) = demo.fallback() else {
                        unreachable!("forest declares a labeled-features fallback");
                    };
                    (uniform_matrix(rows, cols, rng), coin_labels(rows, rng))
                }
            };
            forest::demo(&x, &y, rng)
        }
        Demo::CrossValidation => {
            let (x, y) = match cache.current() {
                Some(ds) => (ds.feature_rows(), ds.binary_labels()),
                None => (iris::feature_rows(), iris::labels()),
            };
            crossval::demo(&x, &y, rng)
        }
    }
}

fn generation_result(dataset: &Dataset) -> AnalysisResult {
    let plot = PlotSpec::new(
        ChartKind::Scatter,
        "Generated Data",
        "Observation",
        "Consumption",
    )
    .with_series(Series::points(
        "Simulated consumption",
        Marker::Circle,
        indexed(&dataset.consumption),
    ));

    AnalysisResult {
        plot,
        description: "Randomly generated data: temperature, pressure and vibration as inputs, \
                      with an estimated fuel consumption as the output. These rows are the \
                      working set for every demo."
            .into(),
    }
}

/// Deliver one outcome to the presentation sinks.
///
/// Success drives `render_plot` then `render_description`, each exactly
/// once; failure drives `report_error` only.
pub fn present(outcome: Result<AnalysisResult, LabError>, sink: &mut dyn PresentationSink) {
    match outcome {
        Ok(result) => {
            sink.render_plot(result.plot);
            sink.render_description(result.description);
        }
        Err(err) => sink.report_error(err.to_string()),
    }
}
