//! Ordinary least-squares regression.
//!
//! Fits consumption = β₀ + β₁·temperature + β₂·pressure + β₃·vibration by
//! solving the normal equations X'Xβ = X'y with a Cholesky factorization.

use crate::error::LabError;
use crate::render::{indexed, ChartKind, Marker, PlotSpec, Series};

use super::AnalysisResult;

/// A fitted linear model. Coefficients are `[intercept, β₁, …, βₚ]`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    pub coefficients: Vec<f64>,
}

impl LinearModel {
    /// Predict the response for a single feature row.
    pub fn predict_row(&self, row: &[f64]) -> f64 {
        self.coefficients[0]
            + row
                .iter()
                .zip(&self.coefficients[1..])
                .map(|(&x, &b)| x * b)
                .sum::<f64>()
    }

    /// Predict the response for every row of a feature matrix.
    pub fn predict(&self, x: &[Vec<f64>]) -> Vec<f64> {
        x.iter().map(|row| self.predict_row(row)).collect()
    }
}

/// Fit an OLS model with an intercept on row-major features.
///
/// Fails with [`LabError::FitFailure`] on mismatched shapes, too few rows,
/// non-finite values, or a singular design matrix.
pub fn fit_ols(x: &[Vec<f64>], y: &[f64]) -> Result<LinearModel, LabError> {
    let n = y.len();
    let p = x.first().map_or(0, Vec::len);
    if p == 0 || x.len() != n {
        return Err(LabError::FitFailure(
            "regression needs matching feature and target rows".into(),
        ));
    }
    if n < p + 2 {
        return Err(LabError::FitFailure(format!(
            "regression needs at least {} rows for {p} features, got {n}",
            p + 2
        )));
    }
    for row in x {
        if row.len() != p {
            return Err(LabError::FitFailure("ragged feature matrix".into()));
        }
    }
    if x.iter().flatten().any(|v| !v.is_finite()) || y.iter().any(|v| !v.is_finite()) {
        return Err(LabError::FitFailure(
            "regression input contains non-finite values".into(),
        ));
    }

    // Normal equations over the design matrix [1 | x₁ | … | xₚ].
    let m = p + 1;
    let mut xtx = vec![vec![0.0; m]; m];
    let mut xty = vec![0.0; m];
    for (row, &yi) in x.iter().zip(y) {
        for j in 0..m {
            let xj = if j == 0 { 1.0 } else { row[j - 1] };
            xty[j] += xj * yi;
            for k in j..m {
                let xk = if k == 0 { 1.0 } else { row[k - 1] };
                xtx[j][k] += xj * xk;
            }
        }
    }
    // Mirror the upper triangle.
    for j in 0..m {
        for k in 0..j {
            xtx[j][k] = xtx[k][j];
        }
    }

    let coefficients = cholesky_solve(xtx, &xty)?;
    Ok(LinearModel { coefficients })
}

/// Solve the symmetric positive-definite system `a·x = b` via LL'.
fn cholesky_solve(mut a: Vec<Vec<f64>>, b: &[f64]) -> Result<Vec<f64>, LabError> {
    let m = b.len();

    // Factor in place: lower triangle of `a` becomes L.
    for j in 0..m {
        let mut diag = a[j][j];
        for k in 0..j {
            diag -= a[j][k] * a[j][k];
        }
        if diag <= 1e-10 {
            return Err(LabError::FitFailure(
                "singular design matrix (collinear features)".into(),
            ));
        }
        let diag = diag.sqrt();
        a[j][j] = diag;
        for i in (j + 1)..m {
            let mut v = a[i][j];
            for k in 0..j {
                v -= a[i][k] * a[j][k];
            }
            a[i][j] = v / diag;
        }
    }

    // Forward substitution: L·z = b.
    let mut z = vec![0.0; m];
    for i in 0..m {
        let mut v = b[i];
        for k in 0..i {
            v -= a[i][k] * z[k];
        }
        z[i] = v / a[i][i];
    }

    // Back substitution: L'·x = z.
    let mut out = vec![0.0; m];
    for i in (0..m).rev() {
        let mut v = z[i];
        for k in (i + 1)..m {
            v -= a[k][i] * out[k];
        }
        out[i] = v / a[i][i];
    }
    Ok(out)
}

/// Run the regression demo: fit on (X, y), predict back on X, and plot the
/// actual values against the predictions.
pub fn demo(x: &[Vec<f64>], y: &[f64]) -> Result<AnalysisResult, LabError> {
    let model = fit_ols(x, y)?;
    let predicted = model.predict(x);

    let plot = PlotSpec::new(
        ChartKind::Scatter,
        "Linear Regression",
        "Observation",
        "Consumption",
    )
    .with_series(Series::points("Actual", Marker::Circle, indexed(y)))
    .with_series(Series::points("Predicted", Marker::Cross, indexed(&predicted)));

    Ok(AnalysisResult {
        plot,
        description: "Linear regression is a predictive model that estimates a numeric value \
                      (here, a vehicle's fuel consumption) from several input variables \
                      (temperature, pressure, vibration). The chart overlays the model's \
                      predictions on the actual values for every observation."
            .into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planar_data() -> (Vec<Vec<f64>>, Vec<f64>) {
        // y = 1 + 2a + 3b − c, exactly
        let x: Vec<Vec<f64>> = (0..12)
            .map(|i| {
                let i = i as f64;
                vec![i, (i * 7.0) % 5.0, (i * 3.0) % 4.0]
            })
            .collect();
        let y: Vec<f64> = x
            .iter()
            .map(|r| 1.0 + 2.0 * r[0] + 3.0 * r[1] - r[2])
            .collect();
        (x, y)
    }

    #[test]
    fn recovers_exact_coefficients() {
        let (x, y) = planar_data();
        let model = fit_ols(&x, &y).unwrap();
        let expected = [1.0, 2.0, 3.0, -1.0];
        for (b, e) in model.coefficients.iter().zip(expected) {
            assert!((b - e).abs() < 1e-8, "{:?}", model.coefficients);
        }
    }

    #[test]
    fn refitting_is_deterministic() {
        let (x, y) = planar_data();
        let first = fit_ols(&x, &y).unwrap().predict(&x);
        let second = fit_ols(&x, &y).unwrap().predict(&x);
        assert_eq!(first, second);
    }

    #[test]
    fn constant_feature_is_singular() {
        // A constant column duplicates the intercept.
        let x: Vec<Vec<f64>> = (0..10).map(|i| vec![1.0, i as f64]).collect();
        let y: Vec<f64> = (0..10).map(|i| i as f64).collect();
        assert!(matches!(
            fit_ols(&x, &y),
            Err(LabError::FitFailure(_))
        ));
    }

    #[test]
    fn too_few_rows_fail() {
        let x = vec![vec![1.0, 2.0, 3.0]; 3];
        let y = vec![1.0; 3];
        assert!(fit_ols(&x, &y).is_err());
    }

    #[test]
    fn demo_emits_actual_and_predicted_series() {
        let (x, y) = planar_data();
        let result = demo(&x, &y).unwrap();
        assert_eq!(result.plot.kind, ChartKind::Scatter);
        assert_eq!(result.plot.series.len(), 2);
        assert_eq!(result.plot.series[0].points.len(), y.len());
        assert_eq!(result.plot.series[1].points.len(), y.len());
        // exact data → predictions match the actual values
        for (a, b) in result.plot.series[0]
            .points
            .iter()
            .zip(&result.plot.series[1].points)
        {
            assert!((a[1] - b[1]).abs() < 1e-8);
        }
    }
}
