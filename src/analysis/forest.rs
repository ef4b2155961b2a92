//! Random forest classification.
//!
//! Bootstrap-aggregated decision trees with majority voting. The demo
//! classifies observations into low (0) and high (1) consumption and
//! charts how the ensemble's predictions split between the two classes.

use rand::Rng;

use crate::error::LabError;
use crate::render::{ChartKind, PlotSpec, Series};

use super::tree::{self, DecisionTree};
use super::AnalysisResult;

/// Number of bootstrapped trees in the ensemble.
pub const TREE_COUNT: usize = 25;

/// A bagged ensemble of decision trees.
#[derive(Debug)]
pub struct RandomForest {
    trees: Vec<DecisionTree>,
}

impl RandomForest {
    /// Majority vote over all trees; ties go to the lower class id.
    pub fn predict_row(&self, row: &[f64]) -> u8 {
        let mut votes = [0usize; 256];
        for t in &self.trees {
            votes[t.predict_row(row) as usize] += 1;
        }
        votes
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(&a.0)))
            .map(|(label, _)| label as u8)
            .unwrap_or(0)
    }

    pub fn predict(&self, x: &[Vec<f64>]) -> Vec<u8> {
        x.iter().map(|row| self.predict_row(row)).collect()
    }
}

/// Fit `n_trees` trees, each on a bootstrap resample of the rows.
pub fn fit(
    x: &[Vec<f64>],
    y: &[u8],
    n_trees: usize,
    rng: &mut impl Rng,
) -> Result<RandomForest, LabError> {
    if x.is_empty() || x.len() != y.len() {
        return Err(LabError::FitFailure(
            "forest needs matching feature and label rows".into(),
        ));
    }
    if n_trees == 0 {
        return Err(LabError::FitFailure("forest needs at least one tree".into()));
    }

    let n = x.len();
    let mut trees = Vec::with_capacity(n_trees);
    for _ in 0..n_trees {
        let mut bx = Vec::with_capacity(n);
        let mut by = Vec::with_capacity(n);
        for _ in 0..n {
            let i = rng.random_range(0..n);
            bx.push(x[i].clone());
            by.push(y[i]);
        }
        trees.push(tree::fit(&bx, &by, tree::MAX_DEPTH)?);
    }
    Ok(RandomForest { trees })
}

/// Run the random-forest demo.
///
/// The bars carry the ensemble's predicted class shares over the input
/// rows, so the chart reflects the fitted model.
pub fn demo(x: &[Vec<f64>], y: &[u8], rng: &mut impl Rng) -> Result<AnalysisResult, LabError> {
    let forest = fit(x, y, TREE_COUNT, rng)?;
    let predicted = forest.predict(x);

    let n = predicted.len() as f64;
    let high = predicted.iter().filter(|&&l| l == 1).count() as f64 / n;
    let low = 1.0 - high;

    let plot = PlotSpec::new(
        ChartKind::Bar,
        "Random Forest",
        "Class",
        "Share of predictions",
    )
    .with_series(Series::bars("Class 0 (low)", 0.6, vec![[0.0, low]]))
    .with_series(Series::bars("Class 1 (high)", 0.6, vec![[1.0, high]]));

    Ok(AnalysisResult {
        plot,
        description: "Random forest is a supervised algorithm that combines many decision \
                      trees, each trained on a random resample of the data. Here it sorts \
                      the observations into two classes, low or high consumption, and the \
                      bars show how its predictions divide between them."
            .into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn separable() -> (Vec<Vec<f64>>, Vec<u8>) {
        let x: Vec<Vec<f64>> = (0..40)
            .map(|i| vec![i as f64, (i % 5) as f64, 1.0])
            .collect();
        let y: Vec<u8> = (0..40).map(|i| u8::from(i >= 20)).collect();
        (x, y)
    }

    #[test]
    fn separable_data_is_classified_correctly() {
        let mut rng = StdRng::seed_from_u64(30);
        let (x, y) = separable();
        let forest = fit(&x, &y, TREE_COUNT, &mut rng).unwrap();
        let predicted = forest.predict(&x);
        let correct = predicted.iter().zip(&y).filter(|(p, t)| p == t).count();
        assert!(correct >= 38, "only {correct}/40 correct");
    }

    #[test]
    fn seeded_fit_is_reproducible() {
        let (x, y) = separable();
        let a = fit(&x, &y, 5, &mut StdRng::seed_from_u64(7))
            .unwrap()
            .predict(&x);
        let b = fit(&x, &y, 5, &mut StdRng::seed_from_u64(7))
            .unwrap()
            .predict(&x);
        assert_eq!(a, b);
    }

    #[test]
    fn demo_bars_are_shares_summing_to_one() {
        let mut rng = StdRng::seed_from_u64(31);
        let (x, y) = separable();
        let result = demo(&x, &y, &mut rng).unwrap();
        assert_eq!(result.plot.kind, ChartKind::Bar);
        assert_eq!(result.plot.series.len(), 2);
        let total: f64 = result
            .plot
            .series
            .iter()
            .map(|s| s.points[0][1])
            .sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn empty_input_fails() {
        let mut rng = StdRng::seed_from_u64(32);
        assert!(fit(&[], &[], TREE_COUNT, &mut rng).is_err());
    }
}
