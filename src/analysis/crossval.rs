//! k-fold cross-validation of a decision tree.
//!
//! Rows are shuffled once, dealt into five folds, and a fresh tree is
//! trained on the other four folds and scored on each held-out fold.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::LabError;
use crate::render::{ChartKind, PlotSpec, Series};

use super::tree;
use super::AnalysisResult;

/// Number of folds (and histogram bins) used by the demo.
pub const FOLD_COUNT: usize = 5;

/// Shuffled k-fold cross-validation accuracies, one per fold, each in
/// `[0, 1]`.
pub fn cross_val_scores(
    x: &[Vec<f64>],
    y: &[u8],
    folds: usize,
    rng: &mut impl Rng,
) -> Result<Vec<f64>, LabError> {
    let n = y.len();
    if x.len() != n {
        return Err(LabError::FitFailure(
            "cross-validation needs matching feature and label rows".into(),
        ));
    }
    if folds < 2 || n < folds {
        return Err(LabError::FitFailure(format!(
            "cross-validation needs at least {folds} rows, got {n}"
        )));
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(rng);

    // First `n % folds` folds take one extra row.
    let base = n / folds;
    let extra = n % folds;

    let mut scores = Vec::with_capacity(folds);
    let mut start = 0;
    for fold in 0..folds {
        let size = base + usize::from(fold < extra);
        let test = &order[start..start + size];

        let mut train_x = Vec::with_capacity(n - size);
        let mut train_y = Vec::with_capacity(n - size);
        for (pos, &i) in order.iter().enumerate() {
            if pos >= start && pos < start + size {
                continue;
            }
            train_x.push(x[i].clone());
            train_y.push(y[i]);
        }

        let model = tree::fit(&train_x, &train_y, tree::MAX_DEPTH)?;
        let correct = test
            .iter()
            .filter(|&&i| model.predict_row(&x[i]) == y[i])
            .count();
        scores.push(correct as f64 / size as f64);
        start += size;
    }
    Ok(scores)
}

/// Fixed-count histogram used for the score chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Bin midpoints.
    pub centers: Vec<f64>,
    /// Rows per bin; sums to the input length.
    pub counts: Vec<usize>,
    /// Common bin width.
    pub width: f64,
}

/// Bin `data` into `bins` equal-width buckets across its range. A
/// zero-width range spreads over a unit interval so the bars stay visible.
pub fn histogram(data: &[f64], bins: usize) -> Histogram {
    if data.is_empty() {
        return Histogram {
            centers: Vec::new(),
            counts: vec![0; bins],
            width: 0.0,
        };
    }
    let min = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let (low, span) = if (max - min).abs() < 1e-12 {
        (min - 0.5, 1.0)
    } else {
        (min, max - min)
    };
    let width = span / bins as f64;

    let mut counts = vec![0usize; bins];
    for &v in data {
        let bucket = (((v - low) / width) as usize).min(bins - 1);
        counts[bucket] += 1;
    }
    let centers = (0..bins)
        .map(|b| low + (b as f64 + 0.5) * width)
        .collect();
    Histogram {
        centers,
        counts,
        width,
    }
}

/// Run the cross-validation demo: five accuracy scores from five folds,
/// drawn as a five-bin histogram.
pub fn demo(x: &[Vec<f64>], y: &[u8], rng: &mut impl Rng) -> Result<AnalysisResult, LabError> {
    let scores = cross_val_scores(x, y, FOLD_COUNT, rng)?;
    let hist = histogram(&scores, FOLD_COUNT);

    let points: Vec<[f64; 2]> = hist
        .centers
        .iter()
        .zip(&hist.counts)
        .map(|(&c, &n)| [c, n as f64])
        .collect();

    let plot = PlotSpec::new(
        ChartKind::Histogram,
        "Cross-Validation",
        "Accuracy",
        "Fold count",
    )
    .with_series(Series::bars("Fold scores", hist.width, points));

    Ok(AnalysisResult {
        plot,
        description: "Cross-validation measures how well a model generalizes by scoring it \
                      on several held-out subsets of the data. A decision tree is trained \
                      five times, each time tested on a different fifth of the rows; the \
                      spread of the five accuracy scores shows how robust the model is."
            .into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::iris;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn five_scores_each_within_unit_interval() {
        let mut rng = StdRng::seed_from_u64(40);
        let scores =
            cross_val_scores(&iris::feature_rows(), &iris::labels(), FOLD_COUNT, &mut rng)
                .unwrap();
        assert_eq!(scores.len(), 5);
        assert!(scores.iter().all(|&s| (0.0..=1.0).contains(&s)));
    }

    #[test]
    fn reference_data_scores_high() {
        let mut rng = StdRng::seed_from_u64(41);
        let scores =
            cross_val_scores(&iris::feature_rows(), &iris::labels(), FOLD_COUNT, &mut rng)
                .unwrap();
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        assert!(mean > 0.85, "mean accuracy {mean}");
    }

    #[test]
    fn too_few_rows_fail() {
        let mut rng = StdRng::seed_from_u64(42);
        let x = vec![vec![1.0]; 3];
        let y = vec![0, 1, 0];
        assert!(matches!(
            cross_val_scores(&x, &y, FOLD_COUNT, &mut rng),
            Err(LabError::FitFailure(_))
        ));
    }

    #[test]
    fn histogram_counts_cover_all_values() {
        let hist = histogram(&[0.1, 0.2, 0.2, 0.9, 1.0], 5);
        assert_eq!(hist.counts.iter().sum::<usize>(), 5);
        assert_eq!(hist.centers.len(), 5);
    }

    #[test]
    fn histogram_handles_identical_values() {
        let hist = histogram(&[0.8; 5], 5);
        assert_eq!(hist.counts.iter().sum::<usize>(), 5);
        assert!(hist.width > 0.0);
    }

    #[test]
    fn demo_emits_five_bins() {
        let mut rng = StdRng::seed_from_u64(43);
        let result = demo(&iris::feature_rows(), &iris::labels(), &mut rng).unwrap();
        assert_eq!(result.plot.kind, ChartKind::Histogram);
        assert_eq!(result.plot.series.len(), 1);
        assert_eq!(result.plot.series[0].points.len(), 5);
        let folds: f64 = result.plot.series[0].points.iter().map(|p| p[1]).sum();
        assert_eq!(folds, 5.0);
    }
}
