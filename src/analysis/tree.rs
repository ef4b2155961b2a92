//! CART decision tree.
//!
//! Binary splits chosen by gini impurity over midpoint thresholds, with
//! depth and leaf-size limits. Labels are small class ids (`u8`), so the
//! same tree serves the two-class sensor labels and the three-class
//! reference data.

use crate::error::LabError;

/// Default depth limit shared by the tree-based demos.
pub const MAX_DEPTH: usize = 5;

#[derive(Debug, Clone)]
enum Node {
    Leaf {
        label: u8,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

/// A fitted classification tree.
#[derive(Debug, Clone)]
pub struct DecisionTree {
    root: Node,
}

impl DecisionTree {
    /// Class for one feature row: walk splits, `<= threshold` goes left.
    pub fn predict_row(&self, row: &[f64]) -> u8 {
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf { label } => return *label,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if row[*feature] <= *threshold {
                        left
                    } else {
                        right
                    };
                }
            }
        }
    }

    /// Classes for every row of a feature matrix.
    pub fn predict(&self, x: &[Vec<f64>]) -> Vec<u8> {
        x.iter().map(|row| self.predict_row(row)).collect()
    }
}

/// Fit a tree on row-major features and class labels.
pub fn fit(x: &[Vec<f64>], y: &[u8], max_depth: usize) -> Result<DecisionTree, LabError> {
    if x.is_empty() || x.len() != y.len() {
        return Err(LabError::FitFailure(
            "tree needs matching feature and label rows".into(),
        ));
    }
    let width = x[0].len();
    if width == 0 || x.iter().any(|row| row.len() != width) {
        return Err(LabError::FitFailure("ragged feature matrix".into()));
    }
    if x.iter().flatten().any(|v| !v.is_finite()) {
        return Err(LabError::FitFailure(
            "tree input contains non-finite values".into(),
        ));
    }

    let n_classes = y.iter().copied().max().unwrap_or(0) as usize + 1;
    let indices: Vec<usize> = (0..x.len()).collect();
    Ok(DecisionTree {
        root: grow(x, y, indices, n_classes, 0, max_depth),
    })
}

fn grow(
    x: &[Vec<f64>],
    y: &[u8],
    indices: Vec<usize>,
    n_classes: usize,
    depth: usize,
    max_depth: usize,
) -> Node {
    let counts = class_counts(y, &indices, n_classes);
    let majority = majority_class(&counts);

    let is_pure = counts.iter().filter(|&&c| c > 0).count() <= 1;
    if is_pure || depth >= max_depth || indices.len() < 2 {
        return Node::Leaf { label: majority };
    }

    match best_split(x, y, &indices, n_classes) {
        None => Node::Leaf { label: majority },
        Some((feature, threshold)) => {
            let (left_idx, right_idx): (Vec<usize>, Vec<usize>) = indices
                .into_iter()
                .partition(|&i| x[i][feature] <= threshold);
            Node::Split {
                feature,
                threshold,
                left: Box::new(grow(x, y, left_idx, n_classes, depth + 1, max_depth)),
                right: Box::new(grow(x, y, right_idx, n_classes, depth + 1, max_depth)),
            }
        }
    }
}

/// Best (feature, threshold) by weighted gini, or `None` when no split
/// separates the rows.
fn best_split(
    x: &[Vec<f64>],
    y: &[u8],
    indices: &[usize],
    n_classes: usize,
) -> Option<(usize, f64)> {
    let total = indices.len();
    let width = x[indices[0]].len();
    let parent_counts = class_counts(y, indices, n_classes);
    let parent_gini = gini(&parent_counts, total);

    let mut best: Option<(usize, f64)> = None;
    let mut best_score = parent_gini - 1e-12;

    for feature in 0..width {
        let mut ordered: Vec<(f64, u8)> =
            indices.iter().map(|&i| (x[i][feature], y[i])).collect();
        ordered.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut left_counts = vec![0usize; n_classes];
        for (k, window) in ordered.windows(2).enumerate() {
            left_counts[window[0].1 as usize] += 1;
            if window[0].0 == window[1].0 {
                continue;
            }

            let left_n = k + 1;
            let right_n = total - left_n;
            let mut right_counts = parent_counts.clone();
            for (r, &l) in right_counts.iter_mut().zip(&left_counts) {
                *r -= l;
            }

            let weighted = (left_n as f64 * gini(&left_counts, left_n)
                + right_n as f64 * gini(&right_counts, right_n))
                / total as f64;
            if weighted < best_score {
                best_score = weighted;
                best = Some((feature, (window[0].0 + window[1].0) / 2.0));
            }
        }
    }
    best
}

fn class_counts(y: &[u8], indices: &[usize], n_classes: usize) -> Vec<usize> {
    let mut counts = vec![0usize; n_classes];
    for &i in indices {
        counts[y[i] as usize] += 1;
    }
    counts
}

fn majority_class(counts: &[usize]) -> u8 {
    counts
        .iter()
        .enumerate()
        .max_by_key(|&(_, &c)| c)
        .map(|(label, _)| label as u8)
        .unwrap_or(0)
}

fn gini(counts: &[usize], total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let t = total as f64;
    1.0 - counts
        .iter()
        .map(|&c| {
            let p = c as f64 / t;
            p * p
        })
        .sum::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn separable() -> (Vec<Vec<f64>>, Vec<u8>) {
        let x: Vec<Vec<f64>> = (0..20)
            .map(|i| vec![i as f64, (i % 3) as f64])
            .collect();
        let y: Vec<u8> = (0..20).map(|i| u8::from(i >= 10)).collect();
        (x, y)
    }

    #[test]
    fn separable_labels_are_learned_exactly() {
        let (x, y) = separable();
        let tree = fit(&x, &y, MAX_DEPTH).unwrap();
        assert_eq!(tree.predict(&x), y);
    }

    #[test]
    fn depth_one_finds_the_boundary() {
        let (x, y) = separable();
        let tree = fit(&x, &y, 1).unwrap();
        assert_eq!(tree.predict(&x), y);
        // the midpoint between rows 9 and 10 separates the classes
        assert_eq!(tree.predict_row(&[9.4, 0.0]), 0);
        assert_eq!(tree.predict_row(&[9.6, 0.0]), 1);
    }

    #[test]
    fn depth_zero_predicts_the_majority() {
        let x: Vec<Vec<f64>> = (0..9).map(|i| vec![i as f64]).collect();
        let y = vec![0, 0, 0, 0, 0, 0, 1, 1, 1];
        let tree = fit(&x, &y, 0).unwrap();
        assert!(tree.predict(&x).iter().all(|&l| l == 0));
    }

    #[test]
    fn three_classes_are_supported() {
        let x: Vec<Vec<f64>> = (0..30).map(|i| vec![i as f64]).collect();
        let y: Vec<u8> = (0..30).map(|i| (i / 10) as u8).collect();
        let tree = fit(&x, &y, MAX_DEPTH).unwrap();
        assert_eq!(tree.predict(&x), y);
    }

    #[test]
    fn identical_rows_fall_back_to_majority() {
        let x = vec![vec![2.0, 2.0]; 6];
        let y = vec![0, 1, 1, 1, 0, 1];
        let tree = fit(&x, &y, MAX_DEPTH).unwrap();
        assert!(tree.predict(&x).iter().all(|&l| l == 1));
    }

    #[test]
    fn mismatched_shapes_fail() {
        assert!(fit(&[vec![1.0]], &[0, 1], MAX_DEPTH).is_err());
        assert!(fit(&[], &[], MAX_DEPTH).is_err());
    }
}
