//! k-means clustering with two clusters.
//!
//! Lloyd's algorithm: centroids seeded from two random rows, then repeated
//! assign-and-average passes until the assignments stop changing.

use rand::Rng;

use crate::error::LabError;
use crate::render::{ChartKind, Marker, PlotSpec, Series};

use super::AnalysisResult;

/// Number of clusters the demo partitions into.
pub const CLUSTER_COUNT: usize = 2;

const MAX_ITERATIONS: usize = 100;

/// Partition rows into two clusters. Every row receives exactly one label
/// in `{0, 1}`; ties go to the lower cluster id.
pub fn kmeans_two(x: &[Vec<f64>], rng: &mut impl Rng) -> Result<Vec<u8>, LabError> {
    if x.is_empty() {
        return Err(LabError::FitFailure("no rows to cluster".into()));
    }
    let width = x[0].len();
    if width == 0 || x.iter().any(|row| row.len() != width) {
        return Err(LabError::FitFailure("ragged feature matrix".into()));
    }
    if x.iter().flatten().any(|v| !v.is_finite()) {
        return Err(LabError::FitFailure(
            "clustering input contains non-finite values".into(),
        ));
    }
    if x.len() == 1 {
        return Ok(vec![0]);
    }

    // Seed with two random rows, preferring a distinct pair when one exists.
    let first = rng.random_range(0..x.len());
    let mut second = rng.random_range(0..x.len());
    for _ in 0..x.len() {
        if x[second] != x[first] {
            break;
        }
        second = rng.random_range(0..x.len());
    }
    if second == first {
        second = (first + 1) % x.len();
    }
    let mut centroids = [x[first].clone(), x[second].clone()];

    let mut labels = vec![0u8; x.len()];
    for _ in 0..MAX_ITERATIONS {
        // Assignment pass.
        let mut changed = false;
        for (row, label) in x.iter().zip(labels.iter_mut()) {
            let nearest =
                u8::from(squared_distance(row, &centroids[1]) < squared_distance(row, &centroids[0]));
            if nearest != *label {
                *label = nearest;
                changed = true;
            }
        }
        if !changed {
            break;
        }

        // Update pass: a cluster that lost all rows keeps its centroid.
        for (c, centroid) in centroids.iter_mut().enumerate() {
            let members: Vec<&Vec<f64>> = x
                .iter()
                .zip(&labels)
                .filter(|(_, &l)| l == c as u8)
                .map(|(row, _)| row)
                .collect();
            if members.is_empty() {
                continue;
            }
            for (d, slot) in centroid.iter_mut().enumerate() {
                *slot = members.iter().map(|row| row[d]).sum::<f64>() / members.len() as f64;
            }
        }
    }

    Ok(labels)
}

fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(&ai, &bi)| (ai - bi).powi(2)).sum()
}

/// Run the clustering demo: two clusters over the feature rows, plotted as
/// observation index against cluster id, one colored series per cluster.
pub fn demo(x: &[Vec<f64>], rng: &mut impl Rng) -> Result<AnalysisResult, LabError> {
    let labels = kmeans_two(x, rng)?;

    let mut plot = PlotSpec::new(ChartKind::Scatter, "Clustering", "Observation", "Cluster");
    for cluster in 0..CLUSTER_COUNT as u8 {
        let points: Vec<[f64; 2]> = labels
            .iter()
            .enumerate()
            .filter(|(_, &l)| l == cluster)
            .map(|(i, &l)| [i as f64, f64::from(l)])
            .collect();
        if points.is_empty() {
            continue;
        }
        plot = plot.with_series(Series::points(
            format!("Cluster {cluster}"),
            Marker::Circle,
            points,
        ));
    }

    Ok(AnalysisResult {
        plot,
        description: "Clustering gathers similar rows into groups called clusters. Here the \
                      k-means algorithm splits the observations into two groups according to \
                      how alike their sensor readings are, without using any labels."
            .into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn two_blobs() -> Vec<Vec<f64>> {
        let mut rows = Vec::new();
        for i in 0..10 {
            rows.push(vec![0.0 + 0.01 * i as f64, 0.0, 0.0]);
        }
        for i in 0..10 {
            rows.push(vec![10.0 + 0.01 * i as f64, 10.0, 10.0]);
        }
        rows
    }

    #[test]
    fn every_row_gets_one_of_two_labels() {
        let mut rng = StdRng::seed_from_u64(20);
        let labels = kmeans_two(&two_blobs(), &mut rng).unwrap();
        assert_eq!(labels.len(), 20);
        assert!(labels.iter().all(|&l| l < 2));
    }

    #[test]
    fn separated_blobs_land_in_different_clusters() {
        let mut rng = StdRng::seed_from_u64(21);
        let labels = kmeans_two(&two_blobs(), &mut rng).unwrap();
        let first = &labels[..10];
        let second = &labels[10..];
        assert!(first.iter().all(|&l| l == first[0]));
        assert!(second.iter().all(|&l| l == second[0]));
        assert_ne!(first[0], second[0]);
    }

    #[test]
    fn identical_rows_collapse_into_one_cluster() {
        let mut rng = StdRng::seed_from_u64(22);
        let rows = vec![vec![1.0, 1.0, 1.0]; 8];
        let labels = kmeans_two(&rows, &mut rng).unwrap();
        assert!(labels.iter().all(|&l| l == labels[0]));
    }

    #[test]
    fn single_row_is_cluster_zero() {
        let mut rng = StdRng::seed_from_u64(23);
        assert_eq!(kmeans_two(&[vec![1.0, 2.0]], &mut rng).unwrap(), vec![0]);
    }

    #[test]
    fn demo_covers_all_rows() {
        let mut rng = StdRng::seed_from_u64(24);
        let result = demo(&two_blobs(), &mut rng).unwrap();
        assert_eq!(result.plot.kind, ChartKind::Scatter);
        let total: usize = result.plot.series.iter().map(|s| s.points.len()).sum();
        assert_eq!(total, 20);
        assert!(result.plot.series.len() <= CLUSTER_COUNT);
    }
}
