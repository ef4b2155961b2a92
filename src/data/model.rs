// ---------------------------------------------------------------------------
// Dataset – the cached table of simulated sensor readings
// ---------------------------------------------------------------------------

/// One generated batch of simulated automotive sensor data.
///
/// Four parallel columns of equal length: three inputs (temperature,
/// pressure, vibration) and the derived fuel consumption. Consumers only
/// ever see a `&Dataset`; the cache is the sole owner.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub temperature: Vec<f64>,
    pub pressure: Vec<f64>,
    pub vibration: Vec<f64>,
    pub consumption: Vec<f64>,
}

impl Dataset {
    /// Number of observations.
    pub fn len(&self) -> usize {
        self.consumption.len()
    }

    /// Whether the dataset holds no observations.
    pub fn is_empty(&self) -> bool {
        self.consumption.is_empty()
    }

    /// Row-major feature matrix: one `[temperature, pressure, vibration]`
    /// row per observation.
    pub fn feature_rows(&self) -> Vec<Vec<f64>> {
        (0..self.len())
            .map(|i| vec![self.temperature[i], self.pressure[i], self.vibration[i]])
            .collect()
    }

    /// Binary class labels: 1 where consumption exceeds its mean, else 0.
    pub fn binary_labels(&self) -> Vec<u8> {
        let mean = self.mean_consumption();
        self.consumption
            .iter()
            .map(|&c| u8::from(c > mean))
            .collect()
    }

    /// Mean of the consumption column (0.0 for an empty dataset).
    pub fn mean_consumption(&self) -> f64 {
        if self.consumption.is_empty() {
            return 0.0;
        }
        self.consumption.iter().sum::<f64>() / self.consumption.len() as f64
    }
}
