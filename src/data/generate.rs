use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::LabError;

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Synthetic data generation
// ---------------------------------------------------------------------------

/// Sampling bounds for the three input columns.
pub const TEMPERATURE_BOUNDS: (f64, f64) = (70.0, 120.0);
pub const PRESSURE_BOUNDS: (f64, f64) = (1.0, 5.0);
pub const VIBRATION_BOUNDS: (f64, f64) = (10.0, 50.0);

/// Coefficients of the consumption model:
/// consumption = 0.05·temperature + 0.2·pressure + 0.1·vibration + noise.
pub const CONSUMPTION_WEIGHTS: [f64; 3] = [0.05, 0.2, 0.1];

/// Standard deviation of the additive Gaussian noise.
pub const NOISE_SD: f64 = 2.0;

/// Parse a row-count request typed by the user.
///
/// Rejects anything that is not a positive integer, including plain
/// garbage, with [`LabError::InvalidParameter`].
pub fn parse_row_count(input: &str) -> Result<usize, LabError> {
    let trimmed = input.trim();
    let n: i64 = trimmed.parse().map_err(|_| {
        LabError::InvalidParameter(format!("row count must be a whole number, got '{trimmed}'"))
    })?;
    if n <= 0 {
        return Err(LabError::InvalidParameter(format!(
            "row count must be positive, got {n}"
        )));
    }
    Ok(n as usize)
}

/// Draw `n` independent observations of the three inputs and derive the
/// consumption column from the fixed linear model plus Gaussian noise.
pub fn generate_rows(n: usize, rng: &mut impl Rng) -> Dataset {
    let noise = Normal::new(0.0, NOISE_SD).expect("noise standard deviation is positive");

    let temperature: Vec<f64> = (0..n)
        .map(|_| rng.random_range(TEMPERATURE_BOUNDS.0..TEMPERATURE_BOUNDS.1))
        .collect();
    let pressure: Vec<f64> = (0..n)
        .map(|_| rng.random_range(PRESSURE_BOUNDS.0..PRESSURE_BOUNDS.1))
        .collect();
    let vibration: Vec<f64> = (0..n)
        .map(|_| rng.random_range(VIBRATION_BOUNDS.0..VIBRATION_BOUNDS.1))
        .collect();

    let [wt, wp, wv] = CONSUMPTION_WEIGHTS;
    let consumption: Vec<f64> = (0..n)
        .map(|i| wt * temperature[i] + wp * pressure[i] + wv * vibration[i] + noise.sample(rng))
        .collect();

    Dataset {
        temperature,
        pressure,
        vibration,
        consumption,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    proptest! {
        #[test]
        fn any_positive_count_yields_equal_columns(n in 1usize..256, seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let ds = generate_rows(n, &mut rng);
            prop_assert_eq!(ds.len(), n);
            prop_assert_eq!(ds.temperature.len(), ds.consumption.len());
            prop_assert_eq!(ds.pressure.len(), ds.consumption.len());
            prop_assert_eq!(ds.vibration.len(), ds.consumption.len());
        }

        #[test]
        fn parse_round_trips_positive_integers(n in 1i64..1_000_000) {
            prop_assert_eq!(parse_row_count(&n.to_string()).unwrap(), n as usize);
        }
    }
}
