//! Conversion tuning

use spdok_core::SortStrategy;

/// Stores with fewer entries than this convert sequentially
const DEFAULT_PARALLEL_THRESHOLD: usize = 64 * 1024;

/// Settings for [`ParallelConvert`](crate::ParallelConvert)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertConfig {
    /// How CSR/CSC bands get ordered on the sequential path
    pub sort_strategy: SortStrategy,
    /// Minimum number of stored entries before work is split across threads
    pub parallel_threshold: usize,
    /// Minimum number of bands (rows for CSR and dense, columns for CSC)
    /// before work is split across threads
    pub min_parallel_bands: usize,
}

impl ConvertConfig {
    /// Config that never leaves the calling thread
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
            ..Self::default()
        }
    }

    /// Set the band ordering strategy
    pub fn with_sort_strategy(mut self, sort_strategy: SortStrategy) -> Self {
        self.sort_strategy = sort_strategy;
        self
    }

    /// Set the entry count at which conversions go parallel
    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }

    pub fn with_min_parallel_bands(mut self, min_parallel_bands: usize) -> Self {
        self.min_parallel_bands = min_parallel_bands;
        self
    }

    /// Whether a problem with `nnz` entries over `bands` bands is worth
    /// splitting
    pub fn use_parallel(&self, nnz: usize, bands: usize) -> bool {
        nnz >= self.parallel_threshold && bands >= self.min_parallel_bands.max(2)
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            sort_strategy: SortStrategy::Auto,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            min_parallel_bands: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = ConvertConfig::default();
        assert_eq!(config.sort_strategy, SortStrategy::Auto);
        assert!(!config.use_parallel(10, 1_000));
        assert!(config.use_parallel(DEFAULT_PARALLEL_THRESHOLD, 1_000));
    }

    #[test]
    fn test_builders() {
        let config = ConvertConfig::default()
            .with_sort_strategy(SortStrategy::Comparison)
            .with_parallel_threshold(0)
            .with_min_parallel_bands(8);
        assert_eq!(config.sort_strategy, SortStrategy::Comparison);
        assert!(config.use_parallel(0, 8));
        assert!(!config.use_parallel(1_000, 7));
    }

    #[test]
    fn test_sequential_never_splits() {
        let config = ConvertConfig::sequential();
        assert!(!config.use_parallel(usize::MAX - 1, usize::MAX));
        // A single band has nothing to split
        let eager = ConvertConfig::default().with_min_parallel_bands(0).with_parallel_threshold(0);
        assert!(!eager.use_parallel(100, 1));
    }
}
