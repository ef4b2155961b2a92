//! Data layer: the dataset model, the generator, and the single-slot cache.
//!
//! ```text
//!  row-count request
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ generate  │  parse + draw n rows → Dataset
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────────┐
//!   │ DatasetCache  │  at most one live Dataset, replace-not-merge
//!   └──────────────┘
//!        │
//!        ▼
//!    &Dataset       read-only views handed to the demo routines
//! ```

pub mod generate;
pub mod iris;
pub mod model;

use rand::Rng;

use crate::error::LabError;

use self::generate::{generate_rows, parse_row_count};
use self::model::Dataset;

// ---------------------------------------------------------------------------
// DatasetCache – the single in-memory slot
// ---------------------------------------------------------------------------

/// Owns at most one generated dataset at a time.
///
/// `generate` is the only mutator; a failed request leaves the slot exactly
/// as it was. Fallback data synthesized by the demo routines is never
/// written here.
#[derive(Debug, Default)]
pub struct DatasetCache {
    slot: Option<Dataset>,
}

impl DatasetCache {
    pub const fn empty() -> Self {
        DatasetCache { slot: None }
    }

    /// The cached dataset, or `None` if nothing has been generated yet.
    pub fn current(&self) -> Option<&Dataset> {
        self.slot.as_ref()
    }

    /// Parse the row-count request and replace the slot with a fresh draw.
    ///
    /// On an invalid request the slot is untouched and the error is
    /// returned to the caller.
    pub fn generate(&mut self, request: &str, rng: &mut impl Rng) -> Result<&Dataset, LabError> {
        let n = parse_row_count(request)?;
        Ok(&*self.slot.insert(generate_rows(n, rng)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn empty_until_first_generate() {
        let cache = DatasetCache::empty();
        assert!(cache.current().is_none());
    }

    #[test]
    fn generate_fills_the_slot() {
        let mut rng = StdRng::seed_from_u64(10);
        let mut cache = DatasetCache::empty();
        cache.generate("50", &mut rng).unwrap();
        assert_eq!(cache.current().unwrap().len(), 50);
    }

    #[test]
    fn regenerate_replaces_never_appends() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut cache = DatasetCache::empty();
        cache.generate("50", &mut rng).unwrap();
        cache.generate("10", &mut rng).unwrap();
        assert_eq!(cache.current().unwrap().len(), 10);
    }

    #[test]
    fn invalid_request_leaves_slot_untouched() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut cache = DatasetCache::empty();

        for bad in ["0", "-5", "abc"] {
            assert!(matches!(
                cache.generate(bad, &mut rng),
                Err(LabError::InvalidParameter(_))
            ));
            assert!(cache.current().is_none(), "'{bad}' must not fill the slot");
        }

        cache.generate("25", &mut rng).unwrap();
        let before = cache.current().unwrap().clone();
        assert!(cache.generate("-1", &mut rng).is_err());
        assert_eq!(cache.current().unwrap(), &before);
    }
}
