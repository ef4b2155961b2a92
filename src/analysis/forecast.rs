//! ARIMA(1,1,0) forecasting.
//!
//! The series is first-differenced once, an AR(1) model with intercept is
//! fitted to the differences by conditional least squares, and forecasts
//! are integrated back onto the original level.

use crate::error::LabError;
use crate::render::{indexed, ChartKind, PlotSpec, Series};

use super::AnalysisResult;

/// Number of future steps the demo forecasts.
pub const FORECAST_STEPS: usize = 3;

/// Fitted ARIMA(1,1,0) parameters on the differenced series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArimaFit {
    /// Intercept of the AR(1) model (the drift of the differences).
    pub intercept: f64,
    /// Autoregressive coefficient φ.
    pub phi: f64,
}

/// Fit ARIMA(1,1,0) and forecast `steps` values beyond the end of the
/// series.
///
/// Needs at least 4 observations so the differenced series has two lagged
/// pairs to regress on. A differenced series with no variance degrades to
/// a pure drift forecast instead of failing.
pub fn arima_forecast(series: &[f64], steps: usize) -> Result<(ArimaFit, Vec<f64>), LabError> {
    if series.len() < 4 {
        return Err(LabError::FitFailure(format!(
            "forecasting needs at least 4 observations, got {}",
            series.len()
        )));
    }
    if series.iter().any(|v| !v.is_finite()) {
        return Err(LabError::FitFailure(
            "series contains non-finite values".into(),
        ));
    }

    let diff: Vec<f64> = series.windows(2).map(|w| w[1] - w[0]).collect();
    let lagged = &diff[..diff.len() - 1];
    let current = &diff[1..];

    let m = lagged.len() as f64;
    let lag_mean = lagged.iter().sum::<f64>() / m;
    let cur_mean = current.iter().sum::<f64>() / m;
    let lag_var: f64 = lagged.iter().map(|&v| (v - lag_mean).powi(2)).sum();
    let cov: f64 = lagged
        .iter()
        .zip(current)
        .map(|(&l, &c)| (l - lag_mean) * (c - cur_mean))
        .sum();

    let fit = if lag_var < 1e-12 {
        // Constant differences: nothing to regress on, carry the drift.
        ArimaFit {
            intercept: cur_mean,
            phi: 0.0,
        }
    } else {
        let phi = cov / lag_var;
        ArimaFit {
            intercept: cur_mean - phi * lag_mean,
            phi,
        }
    };

    let mut level = series[series.len() - 1];
    let mut last_diff = diff[diff.len() - 1];
    let mut forecast = Vec::with_capacity(steps);
    for _ in 0..steps {
        last_diff = fit.intercept + fit.phi * last_diff;
        level += last_diff;
        forecast.push(level);
    }

    Ok((fit, forecast))
}

/// Run the forecast demo: plot the historical series as a solid line and
/// the three forecast points as a dashed continuation.
pub fn demo(series: &[f64]) -> Result<AnalysisResult, LabError> {
    let (_, forecast) = arima_forecast(series, FORECAST_STEPS)?;

    let future: Vec<[f64; 2]> = forecast
        .iter()
        .enumerate()
        .map(|(k, &v)| [(series.len() + k) as f64, v])
        .collect();

    let plot = PlotSpec::new(ChartKind::Line, "ARIMA Forecast", "Time", "Consumption")
        .with_series(Series::line("History", indexed(series)))
        .with_series(Series::dashed_line("Forecast", future));

    Ok(AnalysisResult {
        plot,
        description: "An ARIMA model forecasts how a quantity evolves over time, here the \
                      consumption series. It differences the series once, learns how each \
                      change depends on the previous one, and projects the next three values."
            .into(),
    })
}
