//! Multi-threaded conversions
//!
//! Counting and scattering stay on the calling thread; ordering the bands
//! and filling dense rows are split across the rayon pool. Every band is a
//! disjoint slice, so no locking is needed. Results equal the sequential
//! conversions in `spdok-core`.

use rayon::prelude::*;
use spdok_core::{BandLayout, Csc, Csr, Dense, Dok, MatrixElement};

use crate::ConvertConfig;

/// Parallel counterparts of the [`Dok`] conversions
pub trait ParallelConvert {
    type Element: MatrixElement;

    fn par_to_csr(&self, config: &ConvertConfig) -> Csr<Self::Element>;

    fn par_to_csc(&self, config: &ConvertConfig) -> Csc<Self::Element>;

    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    fn par_to_dense(&self, config: &ConvertConfig) -> Dense<Self::Element>;
}

impl<T> ParallelConvert for Dok<T>
where
    T: MatrixElement + Send + Sync,
{
    type Element = T;

    fn par_to_csr(&self, config: &ConvertConfig) -> Csr<T> {
        let (rows, _) = self.dimensions();
        if !config.use_parallel(self.nnz(), rows) {
            log::trace!(target: "spdok", "csr: sequential, {} entries", self.nnz());
            return self.to_csr_with(config.sort_strategy);
        }

        log::trace!(target: "spdok", "csr: parallel over {rows} rows, {} entries", self.nnz());
        let layout = sorted_layout(rows, self.iter());
        Csr::from_layout(self.shape(), layout)
    }

    fn par_to_csc(&self, config: &ConvertConfig) -> Csc<T> {
        let (_, cols) = self.dimensions();
        if !config.use_parallel(self.nnz(), cols) {
            log::trace!(target: "spdok", "csc: sequential, {} entries", self.nnz());
            return self.to_csc_with(config.sort_strategy);
        }

        log::trace!(target: "spdok", "csc: parallel over {cols} columns, {} entries", self.nnz());
        let entries = self.iter().map(|(row, col, value)| (col, row, value));
        let layout = sorted_layout(cols, entries);
        Csc::from_layout(self.shape(), layout)
    }

    fn par_to_dense(&self, config: &ConvertConfig) -> Dense<T> {
        let (rows, cols) = self.dimensions();
        // `par_chunks_mut` rejects a zero chunk size
        if cols == 0 || !config.use_parallel(self.nnz(), rows) {
            log::trace!(target: "spdok", "dense: sequential, {} entries", self.nnz());
            return self.to_dense();
        }

        log::trace!(target: "spdok", "dense: parallel over {rows} rows, {} entries", self.nnz());
        let mut layout = BandLayout::scatter(rows, self.iter());
        let bands: Vec<&mut [(usize, T)]> = layout.bands_mut().collect();

        let mut dense = Dense::zeros(rows, cols);
        dense
            .as_mut_slice()
            .par_chunks_mut(cols)
            .zip(bands.into_par_iter())
            .for_each(|(row, band)| {
                for &mut (col, value) in band {
                    row[col] = value;
                }
            });
        dense
    }
}

/// Scatter on the calling thread, then sort the bands in parallel
fn sorted_layout<T, I>(major_len: usize, entries: I) -> BandLayout<T>
where
    T: MatrixElement + Send,
    I: Iterator<Item = (usize, usize, T)> + Clone,
{
    let mut layout = BandLayout::scatter(major_len, entries);
    layout
        .bands_mut()
        .collect::<Vec<_>>()
        .into_par_iter()
        .for_each(|band| band.sort_unstable_by_key(|&(minor, _)| minor));
    layout
}

#[cfg(test)]
mod tests {
    use super::*;
    use spdok_core::{equal, Matrix};

    fn eager() -> ConvertConfig {
        ConvertConfig::default()
            .with_parallel_threshold(0)
            .with_min_parallel_bands(0)
    }

    fn sample() -> Dok<f64> {
        let mut dok = Dok::new(11, 11);
        for (r, c, v) in [
            (0, 3, 1.0),
            (1, 1, 2.0),
            (2, 2, 3.0),
            (5, 8, 4.0),
            (10, 10, 5.0),
            (1, 5, 6.0),
            (3, 5, 7.0),
        ] {
            dok.set(r, c, v);
        }
        dok
    }

    #[test]
    fn test_matches_sequential() {
        let dok = sample();
        for config in [eager(), ConvertConfig::sequential()] {
            assert_eq!(dok.par_to_csr(&config), dok.to_csr());
            assert_eq!(dok.par_to_csc(&config), dok.to_csc());
            assert_eq!(dok.par_to_dense(&config), dok.to_dense());
        }
    }

    #[test]
    fn test_degenerate_shapes() {
        for (rows, cols) in [(0, 0), (0, 3), (3, 0)] {
            let dok = Dok::<f64>::new(rows, cols);
            let csr = dok.par_to_csr(&eager());
            assert_eq!(csr.dimensions(), (rows, cols));
            assert_eq!(csr.offsets().len(), rows + 1);
            assert_eq!(dok.par_to_csc(&eager()).offsets().len(), cols + 1);
            assert!(equal(&dok.par_to_dense(&eager()), &dok));
        }
    }
}
